//! Customer details captured on the checkout form.

use serde::{Deserialize, Serialize};

/// Structured checkout form fields.
///
/// Arrives raw from the checkout UI; [`crate::checkout::validate`] checks
/// it before any order is composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFields {
    /// Full name of the customer.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number; separators allowed, digits are what count.
    pub phone: String,
    /// Street address line.
    pub address_line: String,
    /// City or town.
    pub city: String,
    /// State or province; also selects the shipping rate tier.
    pub region: String,
    /// Postal code.
    pub postal_code: String,
}

impl CustomerFields {
    /// Compose the free-text shipping address persisted on the order.
    ///
    /// Fixed field order: address line, city, region, postal code.
    #[must_use]
    pub fn shipping_address(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.address_line.trim(),
            self.city.trim(),
            self.region.trim(),
            self.postal_code.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_address_uses_fixed_field_order() {
        let customer = CustomerFields {
            name: "Ramesh Patel".to_owned(),
            email: "ramesh@example.in".to_owned(),
            phone: "9876543210".to_owned(),
            address_line: "12 MG Road".to_owned(),
            city: "Surat".to_owned(),
            region: "Gujarat".to_owned(),
            postal_code: "395003".to_owned(),
        };

        assert_eq!(
            customer.shipping_address(),
            "12 MG Road, Surat, Gujarat, 395003"
        );
    }

    #[test]
    fn test_shipping_address_trims_fields() {
        let customer = CustomerFields {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address_line: "  12 MG Road ".to_owned(),
            city: " Surat".to_owned(),
            region: "Gujarat ".to_owned(),
            postal_code: " 395003 ".to_owned(),
        };

        assert_eq!(
            customer.shipping_address(),
            "12 MG Road, Surat, Gujarat, 395003"
        );
    }
}
