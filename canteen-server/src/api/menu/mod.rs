//! Menu API Module
//!
//! Static catalog data; nothing here touches the order engine.

use axum::{Router, routing::get};
use serde::Serialize;
use shared::models::{MenuCategory, MenuItem, TimeSlot, menu_categories, menu_items, time_slots};

use crate::core::ServerState;
use crate::utils::{ApiResponse, ok};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/menu", get(list_menu))
        .route("/api/menu/time-slots", get(list_time_slots))
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    items: &'static [MenuItem],
    categories: Vec<MenuCategory>,
}

/// Full menu plus its categories in display order
pub async fn list_menu() -> ApiResponse<MenuResponse> {
    ok(MenuResponse {
        items: menu_items(),
        categories: menu_categories(),
    })
}

/// Pre-book pickup windows
pub async fn list_time_slots() -> ApiResponse<&'static [TimeSlot]> {
    ok(time_slots())
}
