//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-class errors
//! to Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::stores::{OrderStoreError, SettingsStoreError};

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Checkout pipeline failure.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Order store operation failed.
    #[error("Order store error: {0}")]
    OrderStore(#[from] OrderStoreError),

    /// Settings store operation failed.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsStoreError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error is a server fault worth tracking, as opposed to
    /// a client mistake.
    fn is_server_error(&self) -> bool {
        match self {
            Self::Checkout(CheckoutError::Submission(_))
            | Self::OrderStore(OrderStoreError::Unavailable(_))
            | Self::Settings(_)
            | Self::Internal(_) => true,
            Self::Checkout(_)
            | Self::OrderStore(OrderStoreError::NotFound(_))
            | Self::NotFound(_)
            | Self::BadRequest(_) => false,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Checkout(err) => match err {
                CheckoutError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                CheckoutError::EmptyCart => StatusCode::BAD_REQUEST,
                CheckoutError::InFlight => StatusCode::CONFLICT,
                CheckoutError::Submission(_) => StatusCode::BAD_GATEWAY,
            },
            Self::OrderStore(OrderStoreError::NotFound(_)) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::OrderStore(OrderStoreError::Unavailable(_)) | Self::Settings(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body for the client. Internal details stay out of responses.
    fn body(&self) -> serde_json::Value {
        match self {
            Self::Checkout(CheckoutError::Validation(errors)) => json!({
                "error": "Please correct the highlighted fields",
                "fields": errors,
            }),
            Self::Checkout(CheckoutError::EmptyCart) => json!({
                "error": "Your cart is empty",
            }),
            Self::Checkout(CheckoutError::InFlight) => json!({
                "error": "Your order is already being submitted",
            }),
            Self::Checkout(CheckoutError::Submission(_))
            | Self::OrderStore(OrderStoreError::Unavailable(_))
            | Self::Settings(_)
            | Self::Internal(_) => json!({
                "error": "Something went wrong. Please try again.",
            }),
            Self::OrderStore(OrderStoreError::NotFound(_)) | Self::NotFound(_) => json!({
                "error": "Not found",
            }),
            Self::BadRequest(msg) => json!({ "error": msg }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        (self.status(), Json(self.body())).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
