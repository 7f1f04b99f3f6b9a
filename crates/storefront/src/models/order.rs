//! Order records: the draft submitted to the store and the stored order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use saffron_core::{CartLine, CheckoutQuote, OrderId, OrderStatus, ProductId};

use super::customer::CustomerFields;

/// One item on a placed order.
///
/// A fixed-shape snapshot copied from a cart line at submission time, so
/// later cart or catalog mutation cannot alter a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Catalog item the snapshot was taken from.
    pub product_id: ProductId,
    /// Display name at submission time.
    pub name: String,
    /// Per-unit price at submission time.
    pub price: Decimal,
    /// Units ordered.
    pub quantity: u32,
    /// Size label at submission time, if the product had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_label: Option<String>,
}

impl OrderItem {
    /// Snapshot a cart line.
    #[must_use]
    pub fn from_cart_line(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name.clone(),
            price: line.unit_price,
            quantity: line.quantity,
            size_label: line.size_label.clone(),
        }
    }

    /// Price of this item line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// An order as submitted to the order store, before an identifier and
/// timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// Free-text address composed from the structured form fields.
    pub shipping_address: String,
    /// Immutable snapshot of the cart at submission time.
    pub items: Vec<OrderItem>,
    /// Shipping fee computed at submission time; never recomputed.
    pub shipping_fee: Decimal,
    /// `sum(items) + shipping_fee`, fixed at creation.
    pub total_amount: Decimal,
    pub status: OrderStatus,
}

impl OrderDraft {
    /// Compose a draft from the cart snapshot, validated customer fields,
    /// and the submission-time quote.
    #[must_use]
    pub fn compose(lines: &[CartLine], customer: &CustomerFields, quote: &CheckoutQuote) -> Self {
        Self {
            customer_name: customer.name.trim().to_owned(),
            customer_email: customer.email.trim().to_owned(),
            customer_phone: customer.phone.trim().to_owned(),
            shipping_address: customer.shipping_address(),
            items: lines.iter().map(OrderItem::from_cart_line).collect(),
            shipping_fee: quote.shipping_fee,
            total_amount: quote.total,
            status: OrderStatus::Processing,
        }
    }

    /// Sum of item line totals, excluding shipping.
    #[must_use]
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

/// A stored order, as returned by the order store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub items: Vec<OrderItem>,
    pub shipping_fee: Decimal,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    /// Set by the store at insertion.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Materialize a draft into a stored order.
    #[must_use]
    pub fn from_draft(id: OrderId, draft: OrderDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            customer_phone: draft.customer_phone,
            shipping_address: draft.shipping_address,
            items: draft.items,
            shipping_fee: draft.shipping_fee,
            total_amount: draft.total_amount,
            status: draft.status,
            created_at,
        }
    }

    /// Sum of item line totals, excluding shipping.
    #[must_use]
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}
