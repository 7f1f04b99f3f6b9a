//! Order management route handlers (administrative).

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use saffron_core::{OrderId, OrderStatus};

use crate::error::{AppError, Result};
use crate::models::Order;
use crate::state::AppState;

/// List all orders, newest first.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = state.orders().list_orders().await?;
    Ok(Json(orders))
}

/// Fetch a single order.
#[instrument(skip(state))]
pub async fn detail(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Order>> {
    let id = OrderId::new(id);
    let order = state
        .orders()
        .get_order(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(Json(order))
}

/// Status transition request.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Transition an order's status.
///
/// Reserved for the administrative actor; orders are never deleted here.
#[instrument(skip(state, request), fields(status = %request.status))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Order>> {
    let order = state
        .orders()
        .update_status(OrderId::new(id), request.status)
        .await?;

    tracing::info!(order_id = %order.id, status = %order.status, "order status updated");
    Ok(Json(order))
}
