//! Checkout route handler.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use saffron_core::{Cart, CartLine, CheckoutQuote};

use crate::error::Result;
use crate::models::{CustomerFields, Order};
use crate::state::AppState;

/// Checkout request: the client-owned cart and the filled form.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub lines: Vec<CartLine>,
    pub customer: CustomerFields,
}

/// Successful checkout response.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    /// The stored order.
    pub order: Order,
    /// The quote the order was priced from.
    pub quote: CheckoutQuote,
    /// Messaging deep link for the fulfillment handoff; `null` when no
    /// destination number is configured (the UI shows a plain
    /// confirmation instead).
    pub handoff_url: Option<String>,
}

/// Submit an order.
///
/// Runs the full pipeline: validation, submission-time quote, order
/// composition, persistence, and the fulfillment handoff link.
#[instrument(skip(state, request), fields(lines = request.lines.len()))]
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<CheckoutResponse>)> {
    let mut cart = Cart::from_lines(request.lines);
    let outcome = state.checkout().submit(&mut cart, &request.customer).await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            order: outcome.order,
            quote: outcome.quote,
            handoff_url: outcome.handoff_url,
        }),
    ))
}
