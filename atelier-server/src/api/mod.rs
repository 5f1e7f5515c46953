//! API routes
//!
//! One flat handler module per entity family, wired into a single router.
//! Every handler catches its own dependency failures and answers with the
//! JSON error body; nothing crashes the process.

pub mod content;
pub mod custom;
pub mod health;
pub mod hero_slides;
pub mod products;
pub mod settings;
pub mod upload;

use axum::routing::{get, post, put};
use axum::{Json, Router};
use shared::error::{AppError, ErrorCode};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub(crate) type ApiResult<T> = Result<Json<T>, AppError>;

/// Map an infrastructure failure to a generic 500, logging the cause.
pub(crate) fn internal(e: impl std::fmt::Display) -> AppError {
    tracing::error!("Query error: {e}");
    AppError::new(ErrorCode::InternalError)
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let catalog = Router::new()
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route(
            "/api/hero-slides",
            get(hero_slides::list_hero_slides).post(hero_slides::create_hero_slide),
        )
        .route(
            "/api/hero-slides/{id}",
            put(hero_slides::update_hero_slide).delete(hero_slides::delete_hero_slide),
        );

    let content = Router::new()
        .route("/api/about", get(content::list_about))
        .route("/api/about/{id}", put(content::update_about))
        .route("/api/home-content", get(content::list_home))
        .route("/api/home-content/{id}", put(content::update_home))
        .route("/api/settings", get(settings::list_settings))
        .route("/api/settings/{id}", put(settings::update_setting));

    let custom = Router::new()
        .route(
            "/api/custom/skus",
            get(custom::sku::list_skus).post(custom::sku::create_sku),
        )
        .route("/api/custom/skus/active", get(custom::sku::list_active_skus))
        .route(
            "/api/custom/skus/{id}",
            get(custom::sku::get_sku)
                .put(custom::sku::update_sku)
                .delete(custom::sku::delete_sku),
        )
        .route("/api/custom/skus/{id}/preview", post(custom::sku::preview_sku))
        .route("/api/custom/parts", post(custom::part::create_part))
        .route(
            "/api/custom/parts/{id}",
            put(custom::part::update_part).delete(custom::part::delete_part),
        )
        .route("/api/custom/options", post(custom::option::create_option))
        .route(
            "/api/custom/options/{id}",
            put(custom::option::update_option).delete(custom::option::delete_option),
        )
        .route(
            "/api/custom/quotes",
            get(custom::quote::list_quotes).post(custom::quote::create_quote),
        )
        .route(
            "/api/custom/quotes/{id}",
            get(custom::quote::get_quote)
                .put(custom::quote::update_quote_status)
                .delete(custom::quote::delete_quote),
        );

    // Upload accepts large browser-compressed payloads
    let upload = Router::new()
        .route("/api/upload-image", post(upload::upload_image))
        .layer(axum::extract::DefaultBodyLimit::max(upload::MAX_BODY_SIZE));

    Router::new()
        .route("/api/health", get(health::health_check))
        .merge(catalog)
        .merge(content)
        .merge(custom)
        .merge(upload)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
