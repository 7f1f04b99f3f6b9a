//! Tiered shipping fee computation.
//!
//! The fee is a pure decision table over three inputs: order subtotal,
//! total cart weight, and destination region. Orders above the
//! free-shipping threshold ship free; everything else is billed per whole
//! kilogram at a region-dependent rate that doubles once the cart weighs
//! more than the heavy cutoff.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shipping rate configuration.
///
/// The defaults mirror the store's production tariff; every knob can be
/// overridden through the storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRates {
    /// Subtotals strictly above this amount ship free.
    pub free_threshold: Decimal,
    /// Region billed at the local rate; all others pay the remote rate.
    pub local_region: String,
    /// Per-kilogram rate for the local region.
    pub local_rate_per_kg: Decimal,
    /// Per-kilogram rate for every other (or unknown) region.
    pub remote_rate_per_kg: Decimal,
    /// Carts strictly heavier than this many kilograms pay double rate.
    pub heavy_cutoff_kg: f64,
}

impl Default for ShippingRates {
    fn default() -> Self {
        Self {
            free_threshold: Decimal::from(1999),
            local_region: "Gujarat".to_owned(),
            local_rate_per_kg: Decimal::from(50),
            remote_rate_per_kg: Decimal::from(80),
            heavy_cutoff_kg: 1.0,
        }
    }
}

/// A computed shipping quote.
///
/// Ephemeral derived value - recomputed whenever its inputs change, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    /// Aggregate cart weight in kilograms.
    pub total_weight_kg: f64,
    /// Effective per-kilogram rate after region and weight tiers.
    pub rate_per_kg: Decimal,
    /// Final fee: billable whole kilograms times the rate.
    pub fee: Decimal,
}

impl ShippingRates {
    /// Whether the destination is the designated local region.
    ///
    /// An absent region is never local, so unknown destinations fall into
    /// the higher rate by construction.
    #[must_use]
    pub fn is_local(&self, region: Option<&str>) -> bool {
        region.is_some_and(|r| r.trim().eq_ignore_ascii_case(&self.local_region))
    }

    /// Effective per-kilogram rate for a destination and cart weight.
    #[must_use]
    pub fn rate_per_kg(&self, total_weight_kg: f64, region: Option<&str>) -> Decimal {
        let base = if self.is_local(region) {
            self.local_rate_per_kg
        } else {
            self.remote_rate_per_kg
        };

        if total_weight_kg > self.heavy_cutoff_kg {
            base * Decimal::TWO
        } else {
            base
        }
    }

    /// Compute the shipping fee for an order.
    ///
    /// Decision table, in order:
    /// 1. Subtotal strictly above the free threshold: fee is zero,
    ///    regardless of weight or region.
    /// 2. Otherwise the region selects the base rate and weights strictly
    ///    above the heavy cutoff double it.
    /// 3. Weight is rounded up to the next whole kilogram before
    ///    multiplying - partial kilograms bill as a full one. A weightless
    ///    cart (`ceil(0) = 0`) therefore bills nothing.
    #[must_use]
    pub fn compute_fee(&self, subtotal: Decimal, total_weight_kg: f64, region: Option<&str>) -> Decimal {
        self.quote(subtotal, total_weight_kg, region).fee
    }

    /// Compute the full shipping quote for an order.
    #[must_use]
    pub fn quote(&self, subtotal: Decimal, total_weight_kg: f64, region: Option<&str>) -> ShippingQuote {
        if subtotal > self.free_threshold {
            return ShippingQuote {
                total_weight_kg,
                rate_per_kg: Decimal::ZERO,
                fee: Decimal::ZERO,
            };
        }

        let rate_per_kg = self.rate_per_kg(total_weight_kg, region);
        let fee = Decimal::from(billable_kilograms(total_weight_kg)) * rate_per_kg;

        ShippingQuote {
            total_weight_kg,
            rate_per_kg,
            fee,
        }
    }
}

/// Whole kilograms billed for a cart weight: weight rounded up, with
/// non-positive or non-finite inputs billing zero.
#[must_use]
fn billable_kilograms(total_weight_kg: f64) -> u64 {
    if !(total_weight_kg.is_finite() && total_weight_kg > 0.0) {
        return 0;
    }
    // Weight is bounded by what fits in a cart; the ceil of a positive
    // finite f64 at this magnitude fits u64.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let billable = total_weight_kg.ceil() as u64;
    billable
}
