//! Checkout quote composition.
//!
//! Combines the cart subtotal, aggregate weight, and shipping fee into the
//! figures the checkout screen displays. Pure and idempotent: identical
//! inputs always produce identical quotes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::shipping::ShippingRates;
use crate::weight::total_weight;

/// The figures shown at checkout for a cart and destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutQuote {
    /// Sum of `unit_price * quantity` over all lines.
    pub subtotal: Decimal,
    /// Shipping fee at submission-time rates.
    pub shipping_fee: Decimal,
    /// `subtotal + shipping_fee`.
    pub total: Decimal,
    /// Aggregate cart weight in kilograms.
    pub total_weight_kg: f64,
}

/// Compute the checkout quote for a set of cart lines and a destination
/// region.
#[must_use]
pub fn compute_quote(
    lines: &[CartLine],
    region: Option<&str>,
    rates: &ShippingRates,
) -> CheckoutQuote {
    let subtotal: Decimal = lines.iter().map(CartLine::line_total).sum();
    let total_weight_kg = total_weight(lines);
    let shipping_fee = rates.compute_fee(subtotal, total_weight_kg, region);

    CheckoutQuote {
        subtotal,
        shipping_fee,
        total: subtotal + shipping_fee,
        total_weight_kg,
    }
}

impl Cart {
    /// Quote this cart for a destination region.
    #[must_use]
    pub fn quote(&self, region: Option<&str>, rates: &ShippingRates) -> CheckoutQuote {
        compute_quote(self.lines(), region, rates)
    }
}
