//! Configurator pricing and layer composition
//!
//! Pure functions over a SKU's part → option tree and a caller's selection
//! map. Nothing here touches storage: a preview is ephemeral until the
//! submit flow persists it as a quote snapshot.
//!
//! Uses rust_decimal for price arithmetic, stores as f64.
//!
//! Ordering is deterministic everywhere: equal `layer_order` or
//! `sort_order` values are broken by ascending id. Paint order is
//! ascending `layer_order` (low paints first, back to front); the tab
//! order shown to the customer is the exact reverse (most prominent part
//! first).

use std::collections::HashMap;

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::custom::{CustomOption, CustomPart, CustomSku};
use shared::models::quote::SelectionSnapshot;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// One image layer of the visual composite, in paint order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeLayer {
    pub part_id: i64,
    pub layer_order: i32,
    pub image: String,
}

/// A computed preview: total price, z-ordered composite, and the frozen
/// selection lines a submit would persist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preview {
    pub total_price: f64,
    pub layers: Vec<CompositeLayer>,
    pub selections: Vec<SelectionSnapshot>,
}

/// Parts sorted for compositing: ascending (layer_order, id), low paints
/// first.
pub fn paint_order(parts: &[CustomPart]) -> Vec<&CustomPart> {
    let mut sorted: Vec<&CustomPart> = parts.iter().collect();
    sorted.sort_by_key(|p| (p.layer_order, p.id));
    sorted
}

/// Parts sorted for the tab/selector list: the exact reverse of
/// [`paint_order`], most prominent part first.
pub fn tab_order(parts: &[CustomPart]) -> Vec<&CustomPart> {
    let mut sorted = paint_order(parts);
    sorted.reverse();
    sorted
}

/// The default selection for one part: its first option by
/// (sort_order, id). None for a part with no options.
pub fn default_option(part: &CustomPart) -> Option<&CustomOption> {
    part.options.iter().min_by_key(|o| (o.sort_order, o.id))
}

/// Resolve the caller's selection map against the part tree.
///
/// A part absent from the map falls back to its default option; a part
/// whose chosen option id no longer exists, or that has no options at all,
/// simply has no selection (it contributes nothing and is excluded from
/// the composite). No cross-part compatibility is checked: every option is
/// assumed compatible with every other part's selection.
///
/// Returned pairs are in tab order.
pub fn resolve_selections<'a>(
    parts: &'a [CustomPart],
    chosen: &HashMap<i64, i64>,
) -> Vec<(&'a CustomPart, &'a CustomOption)> {
    tab_order(parts)
        .into_iter()
        .filter_map(|part| {
            let option = match chosen.get(&part.id) {
                Some(option_id) => part.options.iter().find(|o| o.id == *option_id),
                None => default_option(part),
            };
            option.map(|o| (part, o))
        })
        .collect()
}

/// Total price: base price plus every selected option's price, each
/// counted once. Parts without a selection contribute zero.
pub fn quote_total(base_price: f64, selections: &[(&CustomPart, &CustomOption)]) -> f64 {
    let total = selections
        .iter()
        .fold(to_decimal(base_price), |acc, (_, option)| {
            acc + to_decimal(option.price)
        });
    to_f64(total)
}

/// The z-ordered composite: selected option images in paint order.
/// Selections with an empty image are skipped.
pub fn composite_layers(selections: &[(&CustomPart, &CustomOption)]) -> Vec<CompositeLayer> {
    let mut layers: Vec<CompositeLayer> = selections
        .iter()
        .filter(|(_, option)| !option.image.is_empty())
        .map(|(part, option)| CompositeLayer {
            part_id: part.id,
            layer_order: part.layer_order,
            image: option.image.clone(),
        })
        .collect();
    layers.sort_by_key(|l| (l.layer_order, l.part_id));
    layers
}

/// The frozen selection lines a submit persists, in tab order. Names,
/// codes, prices, and images are captured now; later edits to the SKU tree
/// never reach a stored snapshot.
pub fn selection_snapshots(selections: &[(&CustomPart, &CustomOption)]) -> Vec<SelectionSnapshot> {
    selections
        .iter()
        .map(|(part, option)| SelectionSnapshot {
            part_id: part.id,
            part_name: part.name.clone(),
            option_id: option.id,
            option_name: option.name.clone(),
            product_code: option.product_code.clone(),
            price: option.price,
            image: option.image.clone(),
        })
        .collect()
}

/// Compute a full preview for a SKU and a selection map.
pub fn preview(sku: &CustomSku, chosen: &HashMap<i64, i64>) -> Preview {
    let selections = resolve_selections(&sku.parts, chosen);
    Preview {
        total_price: quote_total(sku.base_price, &selections),
        layers: composite_layers(&selections),
        selections: selection_snapshots(&selections),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_option(id: i64, part_id: i64, price: f64, sort_order: i32, image: &str) -> CustomOption {
        CustomOption {
            id,
            part_id,
            name: format!("option-{id}"),
            image: image.to_string(),
            product_code: format!("PC-{id}"),
            price,
            sort_order,
            created_at: 0,
        }
    }

    fn make_part(id: i64, layer_order: i32, options: Vec<CustomOption>) -> CustomPart {
        CustomPart {
            id,
            sku_id: 1,
            name: format!("part-{id}"),
            layer_order,
            created_at: 0,
            options,
        }
    }

    fn make_sku(base_price: f64, parts: Vec<CustomPart>) -> CustomSku {
        CustomSku {
            id: 1,
            name: "sku".to_string(),
            base_price,
            is_active: true,
            created_at: 0,
            parts,
        }
    }

    #[test]
    fn test_total_base_plus_selected_options() {
        // base 500, part A selection 100, part B has no options: total 600
        let sku = make_sku(
            500.0,
            vec![
                make_part(10, 1, vec![make_option(100, 10, 100.0, 0, "a.webp")]),
                make_part(20, 2, vec![]),
            ],
        );
        let p = preview(&sku, &HashMap::new());
        assert_eq!(p.total_price, 600.0);
    }

    #[test]
    fn test_paint_and_tab_order() {
        // layer_order [3, 1, 2] paints [1, 2, 3]; tabs show [3, 2, 1]
        let parts = vec![make_part(1, 3, vec![]), make_part(2, 1, vec![]), make_part(3, 2, vec![])];
        let paint: Vec<i32> = paint_order(&parts).iter().map(|p| p.layer_order).collect();
        assert_eq!(paint, vec![1, 2, 3]);
        let tabs: Vec<i32> = tab_order(&parts).iter().map(|p| p.layer_order).collect();
        assert_eq!(tabs, vec![3, 2, 1]);
    }

    #[test]
    fn test_equal_layer_order_breaks_by_id() {
        let parts = vec![make_part(7, 5, vec![]), make_part(3, 5, vec![]), make_part(5, 5, vec![])];
        let paint: Vec<i64> = paint_order(&parts).iter().map(|p| p.id).collect();
        assert_eq!(paint, vec![3, 5, 7]);
        let tabs: Vec<i64> = tab_order(&parts).iter().map(|p| p.id).collect();
        assert_eq!(tabs, vec![7, 5, 3]);
    }

    #[test]
    fn test_default_option_by_sort_order_then_id() {
        let part = make_part(
            1,
            0,
            vec![
                make_option(30, 1, 5.0, 2, ""),
                make_option(20, 1, 3.0, 1, ""),
                make_option(10, 1, 9.0, 1, ""),
            ],
        );
        // sort_order 1 beats 2; id 10 beats 20 within sort_order 1
        assert_eq!(default_option(&part).unwrap().id, 10);
    }

    #[test]
    fn test_explicit_selection_overrides_default() {
        let sku = make_sku(
            0.0,
            vec![make_part(
                1,
                0,
                vec![
                    make_option(10, 1, 100.0, 0, "default.webp"),
                    make_option(20, 1, 250.0, 1, "chosen.webp"),
                ],
            )],
        );
        let chosen = HashMap::from([(1, 20)]);
        let p = preview(&sku, &chosen);
        assert_eq!(p.total_price, 250.0);
        assert_eq!(p.layers[0].image, "chosen.webp");
    }

    #[test]
    fn test_unknown_option_id_means_no_selection() {
        let sku = make_sku(
            100.0,
            vec![make_part(1, 0, vec![make_option(10, 1, 50.0, 0, "a.webp")])],
        );
        let chosen = HashMap::from([(1, 999)]);
        let p = preview(&sku, &chosen);
        assert_eq!(p.total_price, 100.0);
        assert!(p.layers.is_empty());
        assert!(p.selections.is_empty());
    }

    #[test]
    fn test_composite_skips_empty_images_and_keeps_z_order() {
        let sku = make_sku(
            0.0,
            vec![
                make_part(1, 3, vec![make_option(10, 1, 0.0, 0, "top.webp")]),
                make_part(2, 1, vec![make_option(20, 2, 0.0, 0, "base.webp")]),
                make_part(3, 2, vec![make_option(30, 3, 0.0, 0, "")]),
            ],
        );
        let p = preview(&sku, &HashMap::new());
        let images: Vec<&str> = p.layers.iter().map(|l| l.image.as_str()).collect();
        assert_eq!(images, vec!["base.webp", "top.webp"]);
    }

    #[test]
    fn test_snapshots_capture_names_codes_and_prices() {
        let sku = make_sku(
            0.0,
            vec![make_part(1, 0, vec![make_option(10, 1, 75.5, 0, "a.webp")])],
        );
        let p = preview(&sku, &HashMap::new());
        let snap = &p.selections[0];
        assert_eq!(snap.part_id, 1);
        assert_eq!(snap.part_name, "part-1");
        assert_eq!(snap.option_id, 10);
        assert_eq!(snap.option_name, "option-10");
        assert_eq!(snap.product_code, "PC-10");
        assert_eq!(snap.price, 75.5);
        assert_eq!(snap.image, "a.webp");
    }

    #[test]
    fn test_snapshots_in_tab_order() {
        let sku = make_sku(
            0.0,
            vec![
                make_part(1, 1, vec![make_option(10, 1, 0.0, 0, "a.webp")]),
                make_part(2, 2, vec![make_option(20, 2, 0.0, 0, "b.webp")]),
            ],
        );
        let p = preview(&sku, &HashMap::new());
        let part_ids: Vec<i64> = p.selections.iter().map(|s| s.part_id).collect();
        assert_eq!(part_ids, vec![2, 1]);
    }

    #[test]
    fn test_snapshot_frozen_against_later_edits() {
        let mut sku = make_sku(
            500.0,
            vec![make_part(1, 1, vec![make_option(10, 1, 100.0, 0, "a.webp")])],
        );
        let p = preview(&sku, &HashMap::new());
        assert_eq!(p.total_price, 600.0);

        // later price edits never reach an already-built snapshot
        sku.base_price = 900.0;
        sku.parts[0].options[0].price = 400.0;
        assert_eq!(p.total_price, 600.0);
        assert_eq!(p.selections[0].price, 100.0);
    }

    #[test]
    fn test_precision_decimal_sum() {
        let sku = make_sku(
            0.1,
            vec![
                make_part(1, 1, vec![make_option(10, 1, 0.2, 0, "a.webp")]),
                make_part(2, 2, vec![make_option(20, 2, 0.3, 0, "b.webp")]),
            ],
        );
        let p = preview(&sku, &HashMap::new());
        // 0.1 + 0.2 + 0.3 is exactly 0.6 through Decimal, not 0.6000000000000001
        assert_eq!(p.total_price, 0.6);
    }

    #[test]
    fn test_empty_sku_totals_base_price() {
        let sku = make_sku(500.0, vec![]);
        let p = preview(&sku, &HashMap::new());
        assert_eq!(p.total_price, 500.0);
        assert!(p.layers.is_empty());
        assert!(p.selections.is_empty());
    }
}
