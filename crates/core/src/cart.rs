//! Cart lines and the session-scoped cart container.
//!
//! The cart is owned by the shopping session that created it and is passed
//! into the pipeline by reference - there is no ambient global cart. Lines
//! are uniquely keyed by `(product_id, size_label)`: adding the same
//! product and size again increments the existing line, while a different
//! size creates a distinct line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// One entry in the shopping cart.
///
/// `name` and `unit_price` are copied at add-time and not re-fetched, so a
/// later catalog change cannot silently reprice a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog item this line refers to.
    pub product_id: ProductId,
    /// Display name, captured when the line was added.
    pub name: String,
    /// Non-negative per-unit price, fixed at add-time.
    pub unit_price: Decimal,
    /// Number of units; lines never hold a zero quantity.
    pub quantity: u32,
    /// Optional free-text size/weight descriptor (e.g. "250g", "1.5 kg").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_label: Option<String>,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    fn matches(&self, product_id: ProductId, size_label: Option<&str>) -> bool {
        self.product_id == product_id && self.size_label.as_deref() == size_label
    }
}

/// The active shopping cart.
///
/// An explicit, injectable container rather than ambient state, so the
/// pipeline can be exercised in isolation. Cleared only after the order
/// store confirms a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a cart from existing lines, dropping any with zero quantity.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            cart.add(line);
        }
        cart
    }

    /// All lines currently in the cart.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add a line to the cart.
    ///
    /// If a line with the same `(product_id, size_label)` already exists,
    /// its quantity is incremented instead. Zero-quantity adds are ignored.
    pub fn add(&mut self, line: CartLine) {
        if line.quantity == 0 {
            return;
        }
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(line.product_id, line.size_label.as_deref()))
        {
            existing.quantity += line.quantity;
        } else {
            self.lines.push(line);
        }
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero removes the line. Unknown keys are a no-op.
    pub fn set_quantity(&mut self, product_id: ProductId, size_label: Option<&str>, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id, size_label);
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(product_id, size_label))
        {
            line.quantity = quantity;
        }
    }

    /// Remove a line from the cart.
    pub fn remove(&mut self, product_id: ProductId, size_label: Option<&str>) {
        self.lines
            .retain(|line| !line.matches(product_id, size_label));
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
