//! Size-label parsing and cart weight aggregation.
//!
//! Product size labels are free text entered by whoever manages the
//! catalog: `"250g"`, `"1.5 kg"`, `"2 kilogram"`, but also apparel-style
//! labels like `"Large"`. Parsing is total - any label the parser cannot
//! read is treated as one kilogram per unit, the same assumption made for
//! products with no label at all. That default feeds the shipping
//! calculation, so it is a documented policy here rather than an error.

use crate::cart::CartLine;

/// Weight assumed for a unit whose label is absent or unreadable.
pub const DEFAULT_WEIGHT_KG: f64 = 1.0;

/// Grams per kilogram, for labels written in grams.
const GRAMS_PER_KG: f64 = 1000.0;

/// Parse a free-text size label into kilograms.
///
/// Total function: always returns a finite value `>= 0`, never fails.
///
/// - `None` or an empty/blank label yields [`DEFAULT_WEIGHT_KG`].
/// - The label is lowercased and trimmed, then every character that is
///   not a digit or decimal point is stripped before the numeric parse.
/// - A failed numeric parse (e.g. `"Large"`) yields [`DEFAULT_WEIGHT_KG`].
/// - A label mentioning grams (`"g"`/`"gram"`) without a kilogram token
///   (`"kg"`/`"kilogram"`) is converted from grams; anything else is read
///   as kilograms directly.
///
/// ```
/// use saffron_core::parse_weight;
///
/// assert_eq!(parse_weight(Some("250g")), 0.25);
/// assert_eq!(parse_weight(Some("1.5 kg")), 1.5);
/// assert_eq!(parse_weight(Some("Large")), 1.0);
/// assert_eq!(parse_weight(None), 1.0);
/// ```
#[must_use]
pub fn parse_weight(size_label: Option<&str>) -> f64 {
    let Some(raw) = size_label else {
        return DEFAULT_WEIGHT_KG;
    };

    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return DEFAULT_WEIGHT_KG;
    }

    let numeric: String = normalized
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let Ok(value) = numeric.parse::<f64>() else {
        return DEFAULT_WEIGHT_KG;
    };

    // A pathologically long digit run can overflow to infinity; keep the
    // totality guarantee intact.
    if !value.is_finite() {
        return DEFAULT_WEIGHT_KG;
    }

    if is_gram_label(&normalized) {
        value / GRAMS_PER_KG
    } else {
        value
    }
}

/// Whether a normalized label denotes grams rather than kilograms.
///
/// "kilogram" contains a bare `g`, so the kilogram tokens must be checked
/// explicitly before the gram tokens win.
fn is_gram_label(label: &str) -> bool {
    if label.contains("kg") || label.contains("kilogram") {
        return false;
    }
    label.contains('g')
}

/// Total cart weight in kilograms: `parse_weight(size) * quantity` summed
/// over all lines.
///
/// Pure function of the cart state; cheap enough to recompute on every
/// input change.
#[must_use]
pub fn total_weight(lines: &[CartLine]) -> f64 {
    lines
        .iter()
        .map(|line| parse_weight(line.size_label.as_deref()) * f64::from(line.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::ProductId;

    fn line(size_label: Option<&str>, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(1),
            name: "Cardamom".to_owned(),
            unit_price: Decimal::from(100),
            quantity,
            size_label: size_label.map(str::to_owned),
        }
    }

    #[test]
    fn test_gram_labels_convert_to_kilograms() {
        assert_eq!(parse_weight(Some("250g")), 0.25);
        assert_eq!(parse_weight(Some("250gm")), 0.25);
        assert_eq!(parse_weight(Some("500 grams")), 0.5);
    }

    #[test]
    fn test_kilogram_labels_are_read_directly() {
        assert_eq!(parse_weight(Some("2.5kg")), 2.5);
        assert_eq!(parse_weight(Some("1.5 kg")), 1.5);
        assert_eq!(parse_weight(Some("2 kilogram")), 2.0);
        assert_eq!(parse_weight(Some("2 Kilograms")), 2.0);
    }

    #[test]
    fn test_unitless_numbers_are_kilograms() {
        assert_eq!(parse_weight(Some("3")), 3.0);
        assert_eq!(parse_weight(Some("0.75")), 0.75);
    }

    #[test]
    fn test_missing_or_blank_labels_default_to_one_kilogram() {
        assert_eq!(parse_weight(None), DEFAULT_WEIGHT_KG);
        assert_eq!(parse_weight(Some("")), DEFAULT_WEIGHT_KG);
        assert_eq!(parse_weight(Some("   ")), DEFAULT_WEIGHT_KG);
    }

    #[test]
    fn test_non_numeric_labels_default_to_one_kilogram() {
        assert_eq!(parse_weight(Some("Large")), DEFAULT_WEIGHT_KG);
        assert_eq!(parse_weight(Some("Standard")), DEFAULT_WEIGHT_KG);
        assert_eq!(parse_weight(Some("kg")), DEFAULT_WEIGHT_KG);
    }

    #[test]
    fn test_garbled_numerics_default_to_one_kilogram() {
        // Two decimal points survive the strip and fail the parse.
        assert_eq!(parse_weight(Some("1.2.3kg")), DEFAULT_WEIGHT_KG);
    }

    #[test]
    fn test_parse_is_total_over_arbitrary_input() {
        for label in ["", " ", "..", "-5g", "!!", "九kg", "1e308g", "huge"] {
            let parsed = parse_weight(Some(label));
            assert!(parsed.is_finite(), "label {label:?} produced {parsed}");
            assert!(parsed >= 0.0, "label {label:?} produced {parsed}");
        }
    }

    #[test]
    fn test_total_weight_scales_by_quantity() {
        let lines = vec![line(Some("500g"), 2), line(Some("1kg"), 1), line(None, 1)];
        assert_eq!(total_weight(&lines), 3.0);
    }

    #[test]
    fn test_total_weight_of_empty_cart_is_zero() {
        assert_eq!(total_weight(&[]), 0.0);
    }
}
