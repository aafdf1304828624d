//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 |
//!
//! ```json
//! { "code": 0, "message": "OK", "data": { "status": "healthy", "version": "0.1.0", "uptimeSecs": 42, "orderCount": 3 } }
//! ```

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{ApiResponse, ok};

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// 运行时间 (秒)
    uptime_secs: u64,
    /// 当前进程内订单总数
    order_count: usize,
}

pub async fn health(State(state): State<ServerState>) -> ApiResponse<HealthResponse> {
    ok(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.uptime_secs(),
        order_count: state.orders().order_count(),
    })
}
