//! Settings route handlers (administrative).
//!
//! The only store setting exposed here is the fulfillment handoff
//! destination number. Clearing it disables the messaging handoff;
//! checkout then falls back to a plain confirmation.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// The configured handoff destination.
#[derive(Debug, Serialize, Deserialize)]
pub struct HandoffNumber {
    /// Destination phone number; `null` disables the handoff.
    pub number: Option<String>,
}

/// Read the current handoff destination number.
#[instrument(skip(state))]
pub async fn handoff_number(State(state): State<AppState>) -> Result<Json<HandoffNumber>> {
    let number = state.settings().destination_number().await?;
    Ok(Json(HandoffNumber { number }))
}

/// Replace the handoff destination number.
#[instrument(skip(state, request))]
pub async fn set_handoff_number(
    State(state): State<AppState>,
    Json(request): Json<HandoffNumber>,
) -> Result<Json<HandoffNumber>> {
    // Store verbatim; digits are stripped at link-build time.
    state
        .settings()
        .set_destination_number(request.number.clone())
        .await?;

    tracing::info!(configured = request.number.is_some(), "handoff number updated");
    Ok(Json(request))
}
