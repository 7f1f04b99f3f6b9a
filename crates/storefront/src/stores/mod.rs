//! Persistence seams for orders and store settings.
//!
//! The pipeline consumes these as collaborator traits; which adapter sits
//! behind them (document store, relational, in-memory) is interchangeable
//! glue. The shipped adapter is [`memory`], which also serves the test
//! suites.

pub mod memory;

use async_trait::async_trait;

use saffron_core::{OrderId, OrderStatus};

use crate::models::{Order, OrderDraft};

pub use memory::{InMemoryOrderStore, InMemorySettingsStore};

/// Error type for order store operations.
#[derive(Debug, thiserror::Error)]
pub enum OrderStoreError {
    /// No order with the given identifier exists.
    #[error("order not found: {0}")]
    NotFound(OrderId),
    /// The backing storage failed or is unreachable.
    #[error("order storage unavailable: {0}")]
    Unavailable(String),
}

/// Error type for settings store operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsStoreError {
    /// The backing storage failed or is unreachable.
    #[error("settings storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistent store for placed orders.
///
/// Creation is atomic from the pipeline's perspective: either a full
/// order is stored and returned with its identifier and timestamp, or
/// nothing is persisted.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a draft, assigning an identifier and creation timestamp.
    async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrderStoreError>;

    /// Fetch a single order.
    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderStoreError>;

    /// List all orders, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrderStoreError>;

    /// Set the status of an existing order, returning the updated record.
    ///
    /// Status transitions are reserved for the administrative actor; the
    /// checkout pipeline never calls this.
    async fn update_status(&self, id: OrderId, status: OrderStatus)
    -> Result<Order, OrderStoreError>;
}

/// Store for the fulfillment handoff destination.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// The configured destination phone number, if any.
    async fn destination_number(&self) -> Result<Option<String>, SettingsStoreError>;

    /// Replace the destination phone number (`None` disables the handoff).
    async fn set_destination_number(
        &self,
        number: Option<String>,
    ) -> Result<(), SettingsStoreError>;
}
