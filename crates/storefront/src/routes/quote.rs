//! Quote route handler.
//!
//! Pure computation over the posted cart; called by the checkout UI on
//! every relevant input change.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use saffron_core::{CartLine, CheckoutQuote, compute_quote};

use crate::state::AppState;

/// Quote request: the client-owned cart plus an optional destination.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub lines: Vec<CartLine>,
    pub region: Option<String>,
}

/// Price a cart for a destination region.
#[instrument(skip(state, request), fields(lines = request.lines.len()))]
pub async fn compute(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Json<CheckoutQuote> {
    Json(compute_quote(
        &request.lines,
        request.region.as_deref(),
        state.rates(),
    ))
}
