//! Checkout pipeline orchestration.
//!
//! `submit` runs the whole flow: validate the form, quote the cart at
//! submission-time rates, compose the immutable order draft, persist it
//! through the order store, and only then clear the cart and build the
//! fulfillment handoff link. A failed submission leaves the cart exactly
//! as it was so the customer can retry without re-entering anything.

pub mod handoff;
pub mod validate;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use saffron_core::{Cart, CheckoutQuote, ShippingRates};

use crate::models::{CustomerFields, Order, OrderDraft};
use crate::stores::{OrderStore, OrderStoreError, SettingsStore};

pub use handoff::{build_handoff_url, format_handoff_message};
pub use validate::FieldError;

/// Errors surfaced by the checkout pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// One or more form fields failed structural checks; nothing was
    /// submitted.
    #[error("checkout validation failed")]
    Validation(Vec<FieldError>),
    /// The cart holds no lines; there is nothing to order.
    #[error("cart is empty")]
    EmptyCart,
    /// A previous submission has not settled yet.
    #[error("a submission is already in progress")]
    InFlight,
    /// The order store rejected or failed the creation call.
    #[error("order submission failed: {0}")]
    Submission(#[from] OrderStoreError),
}

/// Result of a successful checkout.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    /// The stored order, with identifier and timestamp assigned.
    pub order: Order,
    /// The submission-time quote the order was priced from.
    pub quote: CheckoutQuote,
    /// Pre-filled messaging deep link, when a destination is configured.
    pub handoff_url: Option<String>,
}

/// The checkout pipeline entry point.
pub struct CheckoutService {
    rates: ShippingRates,
    orders: Arc<dyn OrderStore>,
    settings: Arc<dyn SettingsStore>,
    /// Guards against duplicate orders from rapid double-submission.
    in_flight: AtomicBool,
}

impl CheckoutService {
    /// Create a new checkout service.
    #[must_use]
    pub fn new(
        rates: ShippingRates,
        orders: Arc<dyn OrderStore>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        Self {
            rates,
            orders,
            settings,
            in_flight: AtomicBool::new(false),
        }
    }

    /// The shipping tariff this service quotes with.
    #[must_use]
    pub const fn rates(&self) -> &ShippingRates {
        &self.rates
    }

    /// Run the full checkout pipeline for a cart and customer.
    ///
    /// The cart is cleared only after the order store confirms creation.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] when the cart holds no lines.
    /// - [`CheckoutError::Validation`] when form fields fail checks;
    ///   no store call is made.
    /// - [`CheckoutError::InFlight`] when a previous submission has not
    ///   settled; retry after it does.
    /// - [`CheckoutError::Submission`] when the order store fails; the
    ///   cart is left untouched.
    pub async fn submit(
        &self,
        cart: &mut Cart,
        customer: &CustomerFields,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let errors = validate::validate(customer);
        if !errors.is_empty() {
            return Err(CheckoutError::Validation(errors));
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(CheckoutError::InFlight);
        }
        let result = self.submit_validated(cart, customer).await;
        self.in_flight.store(false, Ordering::SeqCst);

        result
    }

    async fn submit_validated(
        &self,
        cart: &mut Cart,
        customer: &CustomerFields,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        let quote = cart.quote(Some(customer.region.as_str()), &self.rates);
        let draft = OrderDraft::compose(cart.lines(), customer, &quote);

        let order = self.orders.create_order(draft).await?;

        // The store has confirmed; from here on the submission succeeded.
        cart.clear();

        let handoff_url = match self.settings.destination_number().await {
            Ok(Some(number)) => {
                let message = format_handoff_message(&order, quote.total_weight_kg);
                build_handoff_url(&number, &message)
            }
            Ok(None) => None,
            Err(e) => {
                // The order is already placed; a missing handoff only
                // downgrades the confirmation path.
                tracing::warn!(error = %e, "settings store unavailable, skipping handoff link");
                None
            }
        };

        tracing::info!(
            order_id = %order.id,
            total = %order.total_amount,
            items = order.items.len(),
            handoff = handoff_url.is_some(),
            "order placed"
        );

        Ok(CheckoutOutcome {
            order,
            quote,
            handoff_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use rust_decimal::Decimal;

    use saffron_core::{CartLine, OrderId, OrderStatus, ProductId};

    use super::*;
    use crate::stores::{InMemoryOrderStore, InMemorySettingsStore};

    fn customer() -> CustomerFields {
        CustomerFields {
            name: "Ramesh Patel".to_owned(),
            email: "ramesh@example.in".to_owned(),
            phone: "9876543210".to_owned(),
            address_line: "12 MG Road".to_owned(),
            city: "Surat".to_owned(),
            region: "Gujarat".to_owned(),
            postal_code: "395003".to_owned(),
        }
    }

    fn cart() -> Cart {
        Cart::from_lines(vec![CartLine {
            product_id: ProductId::new(1),
            name: "Kashmiri Chilli".to_owned(),
            unit_price: Decimal::from(1000),
            quantity: 1,
            size_label: Some("500g".to_owned()),
        }])
    }

    fn service_with(orders: Arc<dyn OrderStore>) -> CheckoutService {
        CheckoutService::new(
            ShippingRates::default(),
            orders,
            Arc::new(InMemorySettingsStore::new(Some("919876543210".to_owned()))),
        )
    }

    /// Order store that always fails, for exercising the failure path.
    struct FailingOrderStore;

    #[async_trait]
    impl OrderStore for FailingOrderStore {
        async fn create_order(&self, _draft: OrderDraft) -> Result<Order, OrderStoreError> {
            Err(OrderStoreError::Unavailable("connection refused".to_owned()))
        }

        async fn get_order(&self, _id: OrderId) -> Result<Option<Order>, OrderStoreError> {
            Err(OrderStoreError::Unavailable("connection refused".to_owned()))
        }

        async fn list_orders(&self) -> Result<Vec<Order>, OrderStoreError> {
            Err(OrderStoreError::Unavailable("connection refused".to_owned()))
        }

        async fn update_status(
            &self,
            _id: OrderId,
            _status: OrderStatus,
        ) -> Result<Order, OrderStoreError> {
            Err(OrderStoreError::Unavailable("connection refused".to_owned()))
        }
    }

    #[tokio::test]
    async fn test_successful_submission_clears_cart_and_builds_link() {
        let service = service_with(Arc::new(InMemoryOrderStore::new()));
        let mut cart = cart();

        let outcome = service.submit(&mut cart, &customer()).await.expect("submit");

        assert!(cart.is_empty());
        assert_eq!(outcome.order.total_amount, Decimal::from(1050));
        assert_eq!(outcome.quote.shipping_fee, Decimal::from(50));
        let url = outcome.handoff_url.expect("handoff configured");
        assert!(url.starts_with("https://wa.me/919876543210?text="));
    }

    #[tokio::test]
    async fn test_failed_submission_preserves_cart() {
        let service = service_with(Arc::new(FailingOrderStore));
        let mut cart = cart();

        let err = service
            .submit(&mut cart, &customer())
            .await
            .expect_err("store down");

        assert!(matches!(err, CheckoutError::Submission(_)));
        assert!(!cart.is_empty());
    }

    #[tokio::test]
    async fn test_validation_failure_blocks_before_store() {
        // A failing store proves no store call happens: validation loses
        // first.
        let service = service_with(Arc::new(FailingOrderStore));
        let mut cart = cart();
        let bad_customer = CustomerFields {
            email: "not-an-email".to_owned(),
            ..customer()
        };

        let err = service
            .submit(&mut cart, &bad_customer)
            .await
            .expect_err("invalid form");

        match err {
            CheckoutError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "email");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(!cart.is_empty());
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected() {
        let service = service_with(Arc::new(InMemoryOrderStore::new()));
        let mut cart = Cart::new();

        let err = service
            .submit(&mut cart, &customer())
            .await
            .expect_err("nothing to order");
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[tokio::test]
    async fn test_missing_destination_falls_back_without_error() {
        let service = CheckoutService::new(
            ShippingRates::default(),
            Arc::new(InMemoryOrderStore::new()),
            Arc::new(InMemorySettingsStore::new(None)),
        );
        let mut cart = cart();

        let outcome = service.submit(&mut cart, &customer()).await.expect("submit");

        assert!(outcome.handoff_url.is_none());
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_order_total_invariant_holds_on_stored_order() {
        let store = Arc::new(InMemoryOrderStore::new());
        let service = service_with(store.clone());
        let mut cart = cart();

        let outcome = service.submit(&mut cart, &customer()).await.expect("submit");
        let stored = store
            .get_order(outcome.order.id)
            .await
            .expect("get")
            .expect("exists");

        assert_eq!(
            stored.total_amount,
            stored.items_total() + stored.shipping_fee
        );
    }

    #[tokio::test]
    async fn test_in_flight_guard_rejects_overlapping_submission() {
        let service = service_with(Arc::new(InMemoryOrderStore::new()));

        // Simulate an unsettled submission by holding the flag.
        service.in_flight.store(true, Ordering::SeqCst);

        let mut cart = cart();
        let err = service
            .submit(&mut cart, &customer())
            .await
            .expect_err("guarded");
        assert!(matches!(err, CheckoutError::InFlight));
        assert!(!cart.is_empty());

        // Once the prior submission settles, the next one goes through.
        service.in_flight.store(false, Ordering::SeqCst);
        assert!(service.submit(&mut cart, &customer()).await.is_ok());
    }
}
