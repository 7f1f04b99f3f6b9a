//! Fulfillment handoff message and deep link.
//!
//! After an order is stored, the customer is redirected to WhatsApp with
//! a pre-filled order summary instead of a payment gateway. The message
//! is plain line-structured text; the deep link percent-encodes it as the
//! `text` query value.

use saffron_core::money::format_amount;

use crate::models::Order;

/// Fixed first line of every handoff message.
pub const MESSAGE_BANNER: &str = "NEW ORDER - Saffron Bazaar";

/// WhatsApp click-to-chat endpoint.
const WHATSAPP_HOST: &str = "https://wa.me";

/// Build the human-readable order summary sent through the handoff.
///
/// Layout: banner, customer block, itemized lines (size in parentheses
/// when present), shipping address, financial summary with two-decimal
/// amounts ("FREE" when shipping costs nothing), and the aggregate
/// weight.
#[must_use]
pub fn format_handoff_message(order: &Order, total_weight_kg: f64) -> String {
    let mut lines = vec![
        MESSAGE_BANNER.to_owned(),
        String::new(),
        format!("Customer: {}", order.customer_name),
        format!("Email: {}", order.customer_email),
        format!("Phone: {}", order.customer_phone),
        String::new(),
        "Items:".to_owned(),
    ];

    for item in &order.items {
        let size = item
            .size_label
            .as_deref()
            .map(|s| format!(" ({s})"))
            .unwrap_or_default();
        lines.push(format!(
            "- {}{size} x {} = {}",
            item.name,
            item.quantity,
            format_amount(item.line_total())
        ));
    }

    let shipping = if order.shipping_fee.is_zero() {
        "Shipping: FREE".to_owned()
    } else {
        format!("Shipping: {}", format_amount(order.shipping_fee))
    };

    lines.extend([
        String::new(),
        format!("Deliver to: {}", order.shipping_address),
        String::new(),
        format!("Subtotal: {}", format_amount(order.items_total())),
        shipping,
        format!("Total: {}", format_amount(order.total_amount)),
        format!("Total weight: {total_weight_kg:.2} kg"),
    ]);

    lines.join("\n")
}

/// Build the WhatsApp deep link for a destination number and message.
///
/// All non-digit characters are stripped from the destination before it
/// is inserted into the URL; the message is percent-encoded as the `text`
/// query value. Returns `None` when no digits remain - the caller falls
/// back to a plain confirmation instead (a recovered condition, not an
/// error).
#[must_use]
pub fn build_handoff_url(destination: &str, message: &str) -> Option<String> {
    let digits: String = destination.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    Some(format!(
        "{WHATSAPP_HOST}/{digits}?text={}",
        urlencoding::encode(message)
    ))
}
