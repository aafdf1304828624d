//! Order Module
//!
//! Types for the counter's order lifecycle:
//! - Types: order type, status and the transition table
//! - Snapshot: the order record and its cart lines
//! - View: dashboard partitions and statistics

pub mod snapshot;
pub mod types;
pub mod view;

// Re-exports
pub use snapshot::{CartItem, Order, items_total};
pub use types::*;
pub use view::{Dashboard, OrderBoard, OrderStats};
