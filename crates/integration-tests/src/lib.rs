//! Integration tests for Saffron.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p saffron-integration-tests
//! ```
//!
//! Tests drive the real storefront router in-process via
//! `tower::ServiceExt::oneshot` - no server or external store is needed.
//!
//! # Test Categories
//!
//! - `checkout_pipeline` - End-to-end quote and checkout scenarios

use axum::Router;
use std::sync::Arc;

use saffron_storefront::config::StorefrontConfig;
use saffron_storefront::routes;
use saffron_storefront::state::AppState;
use saffron_storefront::stores::{OrderStore, SettingsStore};

/// Build the API router over in-memory stores, with the handoff
/// destination configured.
///
/// # Panics
///
/// Panics if the default configuration fails to load.
#[must_use]
pub fn test_router() -> Router {
    let config = test_config();
    routes::routes().with_state(AppState::new(config))
}

/// Build the API router over explicit store implementations.
///
/// # Panics
///
/// Panics if the default configuration fails to load.
#[must_use]
pub fn test_router_with_stores(
    orders: Arc<dyn OrderStore>,
    settings: Arc<dyn SettingsStore>,
) -> Router {
    let config = test_config();
    routes::routes().with_state(AppState::with_stores(config, orders, settings))
}

fn test_config() -> StorefrontConfig {
    StorefrontConfig::from_lookup(&|key| match key {
        "WHATSAPP_NUMBER" => Some("+91 98765 43210".to_owned()),
        _ => None,
    })
    .expect("test configuration")
}
