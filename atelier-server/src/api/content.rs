//! About / home content API handlers
//!
//! GET merges stored rows with the enumerated defaults for known keys, so
//! a fresh database still serves a complete page. PUT upserts one key; a
//! multi-field page save is N independent PUTs with no cross-call
//! atomicity (a partial failure leaves the other keys written).

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::content::{AboutKey, ContentEntry, ContentTable, ContentUpdate, HomeKey};
use shared::response::OpResult;

use crate::db::content as db;
use crate::state::AppState;

use super::{ApiResult, internal};

/// Append default entries for known keys that have no stored row.
fn merge_defaults<'a>(
    mut entries: Vec<ContentEntry>,
    keys: impl Iterator<Item = (&'a str, &'a str, &'a str)>,
) -> Vec<ContentEntry> {
    for (id, section, default) in keys {
        if !entries.iter().any(|e| e.id == id) {
            entries.push(ContentEntry {
                id: id.to_string(),
                section: section.to_string(),
                content: default.to_string(),
            });
        }
    }
    entries.sort_by(|a, b| a.id.cmp(&b.id));
    entries
}

pub async fn list_about(State(state): State<AppState>) -> ApiResult<Vec<ContentEntry>> {
    let entries = db::list_entries(&state.pool, ContentTable::About)
        .await
        .map_err(internal)?;
    let entries = merge_defaults(
        entries,
        AboutKey::ALL
            .iter()
            .map(|k| (k.id(), k.section(), k.default_content())),
    );
    Ok(Json(entries))
}

pub async fn update_about(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<ContentUpdate>,
) -> ApiResult<OpResult> {
    let section = AboutKey::ALL
        .iter()
        .find(|k| k.id() == id)
        .map(|k| k.section())
        .unwrap_or("");
    db::upsert_entry(&state.pool, ContentTable::About, &id, section, &data.content)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::ok()))
}

pub async fn list_home(State(state): State<AppState>) -> ApiResult<Vec<ContentEntry>> {
    let entries = db::list_entries(&state.pool, ContentTable::Home)
        .await
        .map_err(internal)?;
    let entries = merge_defaults(
        entries,
        HomeKey::ALL
            .iter()
            .map(|k| (k.id(), k.section(), k.default_content())),
    );
    Ok(Json(entries))
}

pub async fn update_home(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<ContentUpdate>,
) -> ApiResult<OpResult> {
    let section = HomeKey::ALL
        .iter()
        .find(|k| k.id() == id)
        .map(|k| k.section())
        .unwrap_or("");
    db::upsert_entry(&state.pool, ContentTable::Home, &id, section, &data.content)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_defaults_fills_missing_keys() {
        let stored = vec![ContentEntry {
            id: "quote_text".into(),
            section: "quote".into(),
            content: "Less, but better.".into(),
        }];
        let merged = merge_defaults(
            stored,
            HomeKey::ALL
                .iter()
                .map(|k| (k.id(), k.section(), k.default_content())),
        );
        assert_eq!(merged.len(), HomeKey::ALL.len());

        // stored row wins over the default
        let quote = merged.iter().find(|e| e.id == "quote_text").unwrap();
        assert_eq!(quote.content, "Less, but better.");

        // missing key got its default
        let author = merged.iter().find(|e| e.id == "quote_author").unwrap();
        assert_eq!(author.content, "Leonardo da Vinci");
    }

    #[test]
    fn test_merge_defaults_keeps_unknown_rows() {
        let stored = vec![ContentEntry {
            id: "seasonal_banner".into(),
            section: "extra".into(),
            content: "Autumn".into(),
        }];
        let merged = merge_defaults(
            stored,
            AboutKey::ALL
                .iter()
                .map(|k| (k.id(), k.section(), k.default_content())),
        );
        assert_eq!(merged.len(), AboutKey::ALL.len() + 1);
        assert!(merged.iter().any(|e| e.id == "seasonal_banner"));
    }
}
