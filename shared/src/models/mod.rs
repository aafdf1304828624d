//! Reference data models
//!
//! Static catalogs shared between the server and the frontend (via API).
//! Nothing here is created or destroyed at runtime.

pub mod menu;
pub mod time_slot;

// Re-exports
pub use menu::*;
pub use time_slot::*;
