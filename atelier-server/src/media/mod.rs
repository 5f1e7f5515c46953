//! Media relay — forwards admin-uploaded images to the hosting/
//! transformation service via its REST API (no SDK dependency)
//!
//! The client posts the browser-compressed base64 payload with a fixed
//! transform recipe and returns the durable URL. No local storage, no
//! retry, no dedup.

use sha2::{Digest, Sha256};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Fixed transform recipe: bounded dimensions, auto quality, WebP output
const TRANSFORMATION: &str = "w_1920,h_1080,c_limit/q_auto:good/f_webp";

/// Authenticated client for the image hosting service (Cloudinary-style
/// upload API)
#[derive(Clone)]
pub struct MediaClient {
    http: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    folder: String,
}

impl MediaClient {
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        folder: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            folder: folder.into(),
        }
    }

    /// Upload a base64-encoded image, returning the durable URL.
    pub async fn upload_base64(&self, image_base64: &str) -> Result<String, BoxError> {
        let timestamp = (shared::util::now_millis() / 1000).to_string();
        let signed_params = [
            ("folder", self.folder.as_str()),
            ("signature_algorithm", "sha256"),
            ("timestamp", timestamp.as_str()),
            ("transformation", TRANSFORMATION),
        ];
        let signature = sign_params(&signed_params, &self.api_secret);

        let url = format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        );
        let file = format!("data:image/jpeg;base64,{image_base64}");

        let resp: serde_json::Value = self
            .http
            .post(&url)
            .form(&[
                ("file", file.as_str()),
                ("api_key", self.api_key.as_str()),
                ("folder", self.folder.as_str()),
                ("signature_algorithm", "sha256"),
                ("timestamp", timestamp.as_str()),
                ("transformation", TRANSFORMATION),
                ("signature", signature.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        resp["secure_url"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| format!("Media upload failed: {resp}").into())
    }
}

/// Request signature: sha256 over the alphabetically sorted `k=v` params
/// joined with `&`, with the API secret appended.
fn sign_params(params: &[(&str, &str)], secret: &str) -> String {
    let mut sorted: Vec<(&str, &str)> = params.to_vec();
    sorted.sort_by_key(|(k, _)| *k);
    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_deterministic() {
        let params = [("timestamp", "1700000000"), ("folder", "atelier")];
        let a = sign_params(&params, "secret");
        let b = sign_params(&params, "secret");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // sha256 hex
    }

    #[test]
    fn test_signature_sorts_params() {
        let forward = [("folder", "atelier"), ("timestamp", "1700000000")];
        let backward = [("timestamp", "1700000000"), ("folder", "atelier")];
        assert_eq!(
            sign_params(&forward, "secret"),
            sign_params(&backward, "secret")
        );
    }

    #[test]
    fn test_signature_depends_on_secret() {
        let params = [("timestamp", "1700000000")];
        assert_ne!(sign_params(&params, "a"), sign_params(&params, "b"));
    }
}
