//! Image upload API — relays a base64 payload to the media service
//!
//! POST /api/upload-image body `{image: base64}` → `{success, url}`
//!
//! The browser pre-compresses before upload; the server validates the
//! payload and forwards it with a fixed transform recipe. No local
//! storage, no retry, no dedup. An unconfigured media service is a clear,
//! immediate error, not a degraded fallback.

use axum::{Json, extract::State};
use base64::Engine;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};

use crate::state::AppState;

/// Request body limit for the upload route (base64 inflates by ~4/3)
pub const MAX_BODY_SIZE: usize = 50 * 1024 * 1024;

/// Maximum decoded image size (20MB)
const MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

#[derive(Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub image: String,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}

pub async fn upload_image(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> Result<Json<UploadResponse>, AppError> {
    let Some(media) = &state.media else {
        return Err(AppError::new(ErrorCode::MediaNotConfigured));
    };

    if req.image.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyFile));
    }

    // Validate the payload actually decodes before relaying it
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(req.image.as_bytes())
        .map_err(|e| {
            AppError::with_message(ErrorCode::InvalidImageData, format!("Invalid base64: {e}"))
        })?;

    if decoded.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyFile));
    }

    if decoded.len() > MAX_IMAGE_BYTES {
        return Err(AppError::with_message(
            ErrorCode::FileTooLarge,
            format!(
                "File too large: {} bytes (max {})",
                decoded.len(),
                MAX_IMAGE_BYTES
            ),
        ));
    }

    let url = media.upload_base64(&req.image).await.map_err(|e| {
        tracing::error!(error = %e, "Media upload failed");
        AppError::new(ErrorCode::UploadFailed)
    })?;

    tracing::info!(bytes = decoded.len(), url = %url, "Image uploaded");

    Ok(Json(UploadResponse { success: true, url }))
}
