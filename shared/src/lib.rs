//! Shared types for the canteen counter
//!
//! Types used by both the server and its clients: the unified error
//! system, the menu and time-slot catalogs, and the order model.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{MenuCategory, MenuItem, TimeSlot};
pub use order::{CartItem, Order, OrderBoard, OrderStats, OrderStatus, OrderType};
