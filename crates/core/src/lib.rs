//! Saffron Core - Shared types and pricing pipeline.
//!
//! This crate provides the types and pure computation shared across
//! Saffron components:
//! - `storefront` - Checkout service exposing the quote and order APIs
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. Everything here is synchronous and
//! re-entrant; quotes may be recomputed on every input change without
//! memoization.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and statuses
//! - [`cart`] - Cart lines and the session-scoped cart container
//! - [`weight`] - Size-label parsing and cart weight aggregation
//! - [`shipping`] - Tiered region/weight shipping rates
//! - [`quote`] - Subtotal + shipping quote composition
//! - [`money`] - Display formatting for currency amounts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod money;
pub mod quote;
pub mod shipping;
pub mod types;
pub mod weight;

pub use cart::{Cart, CartLine};
pub use quote::{CheckoutQuote, compute_quote};
pub use shipping::{ShippingQuote, ShippingRates};
pub use types::*;
pub use weight::{parse_weight, total_weight};
