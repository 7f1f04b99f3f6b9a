//! Application state shared across handlers.

use std::sync::Arc;

use saffron_core::ShippingRates;

use crate::checkout::CheckoutService;
use crate::config::StorefrontConfig;
use crate::stores::{InMemoryOrderStore, InMemorySettingsStore, OrderStore, SettingsStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the store seams, and the checkout service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    orders: Arc<dyn OrderStore>,
    settings: Arc<dyn SettingsStore>,
    checkout: CheckoutService,
}

impl AppState {
    /// Create application state with the default in-memory stores.
    ///
    /// The settings store is seeded with the configured handoff number.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let orders: Arc<dyn OrderStore> = Arc::new(InMemoryOrderStore::new());
        let settings: Arc<dyn SettingsStore> =
            Arc::new(InMemorySettingsStore::new(config.handoff_number.clone()));
        Self::with_stores(config, orders, settings)
    }

    /// Create application state over explicit store implementations.
    #[must_use]
    pub fn with_stores(
        config: StorefrontConfig,
        orders: Arc<dyn OrderStore>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        let checkout = CheckoutService::new(
            config.shipping.clone(),
            Arc::clone(&orders),
            Arc::clone(&settings),
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                orders,
                settings,
                checkout,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the shipping tariff quotes are computed with.
    #[must_use]
    pub fn rates(&self) -> &ShippingRates {
        &self.inner.config.shipping
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn orders(&self) -> &Arc<dyn OrderStore> {
        &self.inner.orders
    }

    /// Get a reference to the settings store.
    #[must_use]
    pub fn settings(&self) -> &Arc<dyn SettingsStore> {
        &self.inner.settings
    }

    /// Get a reference to the checkout service.
    #[must_use]
    pub fn checkout(&self) -> &CheckoutService {
        &self.inner.checkout
    }
}
