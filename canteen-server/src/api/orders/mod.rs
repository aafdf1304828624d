//! Order API Module
//!
//! Thin layer over [`OrdersManager`](crate::orders::OrdersManager): typed
//! requests are validated here, business rules live in the engine.
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/orders | POST | 下单 (201) |
//! | /api/orders | GET | 统计 |
//! | /api/orders/all | GET | 看板 (分区 + 统计) |
//! | /api/orders/status | POST | 状态流转 |
//! | /api/orders/verify | POST | 取餐核验 |
//! | /api/orders/{id} | GET | 订单详情 |

mod handler;
mod request;

pub use request::{CreateOrderRequest, UpdateStatusRequest, VerifyOrderRequest};

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", get(handler::stats).post(handler::create))
        .route("/api/orders/all", get(handler::list_all))
        .route("/api/orders/status", post(handler::update_status))
        .route("/api/orders/verify", post(handler::verify))
        .route("/api/orders/{id}", get(handler::get_by_id))
}
