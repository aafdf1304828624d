//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use http::StatusCode;
use shared::order::{Dashboard, Order, OrderStats};

use super::request::{CreateOrderRequest, UpdateStatusRequest, VerifyOrderRequest};
use crate::api::json_body;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult, created, ok};

/// Place an order
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> AppResult<(StatusCode, ApiResponse<Order>)> {
    let req = json_body(payload)?;
    let order_type = req.validate()?;

    let order = state.orders().create_order(
        &req.student_name,
        req.items,
        order_type,
        req.time_slot.as_deref(),
    )?;
    Ok(created(order))
}

/// Counter statistics
pub async fn stats(State(state): State<ServerState>) -> ApiResponse<OrderStats> {
    ok(state.orders().get_stats())
}

/// Dashboard: partitioned orders plus statistics
pub async fn list_all(State(state): State<ServerState>) -> ApiResponse<Dashboard> {
    ok(state.orders().dashboard())
}

/// Get order by id (case-insensitive)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Order>> {
    let order = state.orders().get_order(&id)?;
    Ok(ok(order))
}

/// Advance an order one lifecycle step
pub async fn update_status(
    State(state): State<ServerState>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> AppResult<ApiResponse<Order>> {
    let req = json_body(payload)?;
    let status = req.validate()?;

    let order = state.orders().update_status(&req.order_id, status)?;
    Ok(ok(order))
}

/// Pickup verification, marks the order delivered
pub async fn verify(
    State(state): State<ServerState>,
    payload: Result<Json<VerifyOrderRequest>, JsonRejection>,
) -> AppResult<ApiResponse<Order>> {
    let req = json_body(payload)?;
    req.validate()?;

    let order = state.orders().verify_order(&req.order_id)?;
    Ok(ok(order))
}
