//! Merchant configuration API.
//!
//! # Endpoints
//!
//! - `POST /merchants/{merchant_id}/configuration` – set loan bounds and the prequal flag
//! - `GET  /merchants/{merchant_id}/configuration` – read the current configuration

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use prequal_core::entities::merchant_configuration::ConfigurationError;
use prequal_sdk::objects::FieldError;

use crate::state::AppState;

mod merchant;

/// Build the merchant API router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/merchants/{merchant_id}/configuration",
        get(merchant::get_merchant_configuration).post(merchant::submit_merchant_configuration),
    )
}

// ---------------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------------

/// Errors that can occur in merchant API handlers.
#[derive(Debug)]
enum ApiError {
    /// An update was rejected by validation.
    Rejected(ConfigurationError),
    /// A read named an unknown merchant.
    MerchantNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Rejected(e) => {
                tracing::debug!(field = e.field(), "Configuration update rejected: {}", e);
                (StatusCode::BAD_REQUEST, Json(FieldError::from(e))).into_response()
            }
            ApiError::MerchantNotFound => (
                StatusCode::NOT_FOUND,
                Json(FieldError::from(ConfigurationError::NotFound)),
            )
                .into_response(),
        }
    }
}
