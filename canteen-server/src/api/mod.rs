//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单与取餐时段 (只读)
//! - [`orders`] - 下单、看板、状态流转、取餐核验

pub mod health;
pub mod menu;
pub mod orders;

use axum::Json;
use axum::extract::rejection::JsonRejection;

pub use crate::utils::{ApiResponse, AppError, AppResult};

/// Unwrap a JSON body, turning any rejection into `InvalidRequest`
///
/// Covers malformed JSON, a wrong content type and unknown enum values.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected request body");
            Err(AppError::invalid_request(rejection.body_text()))
        }
    }
}
