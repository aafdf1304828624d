use super::super::queue::QueueFull;
use shared::error::{AppError, ErrorCode};
use shared::order::OrderStatus;
use thiserror::Error;

/// Manager errors
///
/// Every variant is an expected business outcome except `Internal`.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error(transparent)]
    QueueFull(#[from] QueueFull),

    #[error("Time slot is required for pre-book orders")]
    MissingTimeSlot,

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Cannot move order {order_id} from {from} to {to}")]
    IllegalTransition {
        order_id: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Order already delivered: {0}")]
    AlreadyDelivered(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        let message = err.to_string();
        match err {
            ManagerError::MissingFields(fields) => {
                AppError::with_message(ErrorCode::RequiredField, message)
                    .with_detail("fields", fields)
            }
            ManagerError::QueueFull(full) => AppError::with_message(ErrorCode::QueueFull, message)
                .with_detail("maxInstantOrders", full.capacity),
            ManagerError::MissingTimeSlot => {
                AppError::with_message(ErrorCode::TimeSlotRequired, message)
                    .with_detail("field", "timeSlot")
            }
            ManagerError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, message).with_detail("orderId", id)
            }
            ManagerError::IllegalTransition { order_id, from, to } => {
                AppError::with_message(ErrorCode::IllegalStatusTransition, message)
                    .with_detail("orderId", order_id)
                    .with_detail("currentStatus", from.as_str())
                    .with_detail("requestedStatus", to.as_str())
            }
            ManagerError::AlreadyDelivered(id) => {
                AppError::with_message(ErrorCode::OrderAlreadyDelivered, message)
                    .with_detail("orderId", id)
            }
            ManagerError::Internal(_) => {
                tracing::error!(error = %message, "Order engine internal error");
                AppError::internal(message)
            }
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
