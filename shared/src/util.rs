/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as a resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at catalog scale)
///
/// Properties: non-sequential (can't infer record count), roughly
/// time-ordered, i64 compatible, stateless (no counter to persist across
/// restarts). PRIMARY KEY constraints are the ultimate safety net.
pub fn next_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_fits_js_safe_integer() {
        for _ in 0..100 {
            let id = next_id();
            assert!(id > 0);
            assert!(id <= 0x1F_FFFF_FFFF_FFFF); // 2^53 - 1
        }
    }

    #[test]
    fn test_next_id_roughly_time_ordered() {
        let a = next_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = next_id();
        assert!(b > a);
    }
}
