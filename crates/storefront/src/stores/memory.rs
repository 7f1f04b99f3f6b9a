//! In-memory store implementations.
//!
//! Used for development and by the test suites. Thread-safe via `RwLock`;
//! no lock is held across an await point.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use saffron_core::{OrderId, OrderStatus};

use super::{OrderStore, OrderStoreError, SettingsStore, SettingsStoreError};
use crate::models::{Order, OrderDraft};

#[derive(Debug, Default)]
struct OrdersInner {
    next_id: i64,
    orders: BTreeMap<OrderId, Order>,
}

/// In-memory order store with sequential identifiers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    inner: Arc<RwLock<OrdersInner>>,
}

impl InMemoryOrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrderStoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| OrderStoreError::Unavailable(e.to_string()))?;

        inner.next_id += 1;
        let order = Order::from_draft(OrderId::new(inner.next_id), draft, Utc::now());
        inner.orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderStoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| OrderStoreError::Unavailable(e.to_string()))?;

        Ok(inner.orders.get(&id).cloned())
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrderStoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| OrderStoreError::Unavailable(e.to_string()))?;

        // BTreeMap iterates in ascending id order; newest first for display.
        Ok(inner.orders.values().rev().cloned().collect())
    }

    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderStoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| OrderStoreError::Unavailable(e.to_string()))?;

        let order = inner
            .orders
            .get_mut(&id)
            .ok_or(OrderStoreError::NotFound(id))?;
        order.status = status;

        Ok(order.clone())
    }
}

/// In-memory settings store holding the handoff destination number.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    number: Arc<RwLock<Option<String>>>,
}

impl InMemorySettingsStore {
    /// Create a store seeded with an optional destination number.
    #[must_use]
    pub fn new(number: Option<String>) -> Self {
        Self {
            number: Arc::new(RwLock::new(number)),
        }
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn destination_number(&self) -> Result<Option<String>, SettingsStoreError> {
        let number = self
            .number
            .read()
            .map_err(|e| SettingsStoreError::Unavailable(e.to_string()))?;

        Ok(number.clone())
    }

    async fn set_destination_number(
        &self,
        number: Option<String>,
    ) -> Result<(), SettingsStoreError> {
        let mut slot = self
            .number
            .write()
            .map_err(|e| SettingsStoreError::Unavailable(e.to_string()))?;

        *slot = number;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use saffron_core::{CartLine, ProductId, ShippingRates, compute_quote};

    use super::*;
    use crate::models::{CustomerFields, OrderDraft};

    fn draft() -> OrderDraft {
        let lines = vec![CartLine {
            product_id: ProductId::new(1),
            name: "Saffron Threads".to_owned(),
            unit_price: Decimal::from(1500),
            quantity: 1,
            size_label: Some("1g".to_owned()),
        }];
        let customer = CustomerFields {
            name: "Meera Shah".to_owned(),
            email: "meera@example.in".to_owned(),
            phone: "9123456780".to_owned(),
            address_line: "4 Ring Road".to_owned(),
            city: "Rajkot".to_owned(),
            region: "Gujarat".to_owned(),
            postal_code: "360001".to_owned(),
        };
        let quote = compute_quote(&lines, Some("Gujarat"), &ShippingRates::default());
        OrderDraft::compose(&lines, &customer, &quote)
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = InMemoryOrderStore::new();

        let first = store.create_order(draft()).await.expect("create");
        let second = store.create_order(draft()).await.expect("create");

        assert_eq!(first.id, OrderId::new(1));
        assert_eq!(second.id, OrderId::new(2));
        assert_eq!(first.status, OrderStatus::Processing);
    }

    #[tokio::test]
    async fn test_list_returns_newest_first() {
        let store = InMemoryOrderStore::new();
        store.create_order(draft()).await.expect("create");
        store.create_order(draft()).await.expect("create");

        let orders = store.list_orders().await.expect("list");
        let ids: Vec<i64> = orders.iter().map(|o| o.id.as_i64()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_update_status_persists() {
        let store = InMemoryOrderStore::new();
        let order = store.create_order(draft()).await.expect("create");

        let updated = store
            .update_status(order.id, OrderStatus::Shipped)
            .await
            .expect("update");
        assert_eq!(updated.status, OrderStatus::Shipped);

        let fetched = store.get_order(order.id).await.expect("get");
        assert_eq!(fetched.map(|o| o.status), Some(OrderStatus::Shipped));
    }

    #[tokio::test]
    async fn test_update_status_of_unknown_order_fails() {
        let store = InMemoryOrderStore::new();
        let err = store
            .update_status(OrderId::new(99), OrderStatus::Canceled)
            .await
            .expect_err("unknown order");

        assert!(matches!(err, OrderStoreError::NotFound(id) if id == OrderId::new(99)));
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let store = InMemorySettingsStore::new(Some("+91 98765 43210".to_owned()));
        assert_eq!(
            store.destination_number().await.expect("get").as_deref(),
            Some("+91 98765 43210")
        );

        store
            .set_destination_number(None)
            .await
            .expect("set");
        assert!(store.destination_number().await.expect("get").is_none());
    }
}
