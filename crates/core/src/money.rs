//! Display formatting for currency amounts.
//!
//! Saffron is currency-agnostic: amounts are plain [`Decimal`] values and
//! the storefront decides the symbol. The one rule enforced here is that
//! every amount shown to a customer carries exactly two decimal places.

use rust_decimal::Decimal;

/// Format an amount with exactly two decimal places.
///
/// `1050` becomes `"1050.00"`, `49.5` becomes `"49.50"`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}
