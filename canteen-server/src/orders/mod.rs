//! Order engine
//!
//! - [`storage`]: in-memory id → order map
//! - [`id`]: order id generation and normalization
//! - [`queue`]: instant queue admission and ETA
//! - [`manager`]: [`OrdersManager`], the single writer

pub mod id;
pub mod manager;
pub mod queue;
pub mod storage;

pub use manager::{ManagerError, ManagerResult, OrdersManager};
pub use queue::{Admission, QueueFull, QueuePolicy};
pub use storage::OrderStorage;
