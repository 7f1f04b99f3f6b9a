//! Structural validation of checkout form fields.
//!
//! Runs entirely before submission; any failure blocks the pipeline
//! locally and no store call is made. Errors are reported per-field so
//! the checkout UI can highlight the offending inputs.

use serde::Serialize;

use saffron_core::Email;

use crate::models::CustomerFields;

/// Minimum digits a contact phone number must contain.
const MIN_PHONE_DIGITS: usize = 10;
/// Minimum length of the street address line.
const MIN_ADDRESS_LEN: usize = 5;
/// Minimum length of the postal code.
const MIN_POSTAL_LEN: usize = 4;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field the error refers to.
    pub field: &'static str,
    /// Human-readable message for the checkout UI.
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check every customer field, collecting all failures.
#[must_use]
pub fn validate(customer: &CustomerFields) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if customer.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    if let Err(e) = Email::parse(customer.email.trim()) {
        errors.push(FieldError::new("email", e.to_string()));
    }

    if digit_count(&customer.phone) < MIN_PHONE_DIGITS {
        errors.push(FieldError::new(
            "phone",
            format!("Phone number must contain at least {MIN_PHONE_DIGITS} digits"),
        ));
    }

    if customer.address_line.trim().len() < MIN_ADDRESS_LEN {
        errors.push(FieldError::new("address_line", "Address is too short"));
    }

    if customer.city.trim().is_empty() {
        errors.push(FieldError::new("city", "City is required"));
    }

    if customer.region.trim().is_empty() {
        errors.push(FieldError::new("region", "Region is required"));
    }

    if customer.postal_code.trim().len() < MIN_POSTAL_LEN {
        errors.push(FieldError::new("postal_code", "Postal code is too short"));
    }

    errors
}

fn digit_count(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_customer() -> CustomerFields {
        CustomerFields {
            name: "Ramesh Patel".to_owned(),
            email: "ramesh@example.in".to_owned(),
            phone: "+91 98765-43210".to_owned(),
            address_line: "12 MG Road".to_owned(),
            city: "Surat".to_owned(),
            region: "Gujarat".to_owned(),
            postal_code: "395003".to_owned(),
        }
    }

    #[test]
    fn test_valid_customer_passes() {
        assert!(validate(&valid_customer()).is_empty());
    }

    #[test]
    fn test_phone_separators_do_not_count_as_digits() {
        let customer = CustomerFields {
            phone: "+91-12-34".to_owned(),
            ..valid_customer()
        };
        let errors = validate(&customer);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "phone");
    }

    #[test]
    fn test_malformed_email_is_reported_per_field() {
        let customer = CustomerFields {
            email: "not-an-email".to_owned(),
            ..valid_customer()
        };
        let errors = validate(&customer);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_blank_form_reports_every_field() {
        let customer = CustomerFields {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address_line: String::new(),
            city: String::new(),
            region: String::new(),
            postal_code: String::new(),
        };
        let errors = validate(&customer);
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

        assert_eq!(
            fields,
            vec![
                "name",
                "email",
                "phone",
                "address_line",
                "city",
                "region",
                "postal_code"
            ]
        );
    }

    #[test]
    fn test_short_address_and_postal_code_are_rejected() {
        let customer = CustomerFields {
            address_line: "x".to_owned(),
            postal_code: "12".to_owned(),
            ..valid_customer()
        };
        let fields: Vec<&str> = validate(&customer).iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["address_line", "postal_code"]);
    }
}
