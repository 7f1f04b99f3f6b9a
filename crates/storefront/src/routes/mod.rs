//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET   /health                        - Liveness check
//! GET   /health/ready                  - Readiness check (store reachable)
//!
//! # Checkout
//! POST  /api/quote                     - Price a cart for a destination
//! POST  /api/checkout                  - Submit an order
//!
//! # Orders (administrative)
//! GET   /api/orders                    - List orders, newest first
//! GET   /api/orders/{id}               - Order detail
//! PATCH /api/orders/{id}/status        - Transition order status
//!
//! # Settings (administrative)
//! GET   /api/settings/handoff-number   - Current handoff destination
//! PUT   /api/settings/handoff-number   - Replace handoff destination
//! ```

pub mod checkout;
pub mod orders;
pub mod quote;
pub mod settings;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

/// Create the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/quote", post(quote::compute))
        .route("/api/checkout", post(checkout::submit))
        .route("/api/orders", get(orders::list))
        .route("/api/orders/{id}", get(orders::detail))
        .route("/api/orders/{id}/status", patch(orders::update_status))
        .route(
            "/api/settings/handoff-number",
            get(settings::handoff_number).put(settings::set_handoff_number),
        )
}
