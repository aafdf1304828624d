//! Typed request bodies
//!
//! Absent fields deserialize to empty values so that `validate()` reports
//! them as missing instead of a generic parse error.

use serde::Deserialize;
use shared::order::{CartItem, OrderStatus, OrderType};

use crate::utils::validation::{
    MAX_CART_LINES, MAX_LINE_QUANTITY, MAX_NAME_LEN, MAX_ORDER_ID_LEN, MAX_SLOT_LEN,
    validate_optional_text, validate_range, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub order_type: Option<OrderType>,
    #[serde(default)]
    pub time_slot: Option<String>,
}

impl CreateOrderRequest {
    /// Check shape and limits, returning the order type
    pub fn validate(&self) -> AppResult<OrderType> {
        validate_required_text(&self.student_name, "studentName", MAX_NAME_LEN)?;
        if self.items.is_empty() {
            return Err(AppError::required_field("items"));
        }
        if self.items.len() > MAX_CART_LINES {
            return Err(AppError::validation(format!(
                "Too many items ({}, max {})",
                self.items.len(),
                MAX_CART_LINES
            ))
            .with_detail("field", "items"));
        }
        for (i, item) in self.items.iter().enumerate() {
            validate_required_text(&item.id, &format!("items[{i}].id"), MAX_NAME_LEN)?;
            validate_required_text(&item.name, &format!("items[{i}].name"), MAX_NAME_LEN)?;
            validate_range(item.quantity, &format!("items[{i}].quantity"), 1, MAX_LINE_QUANTITY)?;
            validate_range(item.price, &format!("items[{i}].price"), 1, u32::MAX)?;
        }
        validate_optional_text(&self.time_slot, "timeSlot", MAX_SLOT_LEN)?;
        self.order_type
            .ok_or_else(|| AppError::required_field("orderType"))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

impl UpdateStatusRequest {
    /// Check required fields, returning the requested status
    pub fn validate(&self) -> AppResult<OrderStatus> {
        validate_required_text(&self.order_id, "orderId", MAX_ORDER_ID_LEN)?;
        self.status.ok_or_else(|| AppError::required_field("status"))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOrderRequest {
    #[serde(default)]
    pub order_id: String,
}

impl VerifyOrderRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.order_id, "orderId", MAX_ORDER_ID_LEN)
    }
}
