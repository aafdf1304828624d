//! Order record and cart line snapshot

use super::types::{OrderStatus, OrderType};
use crate::models::{MenuCategory, MenuItem};
use serde::{Deserialize, Serialize};

/// Cart line - menu item data captured when the cart is built
///
/// Once copied into an [`Order`] it never changes, even if the menu does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Menu item ID
    pub id: String,
    /// Name snapshot
    pub name: String,
    /// Unit price snapshot
    pub price: u32,
    /// Quantity (>= 1)
    pub quantity: u32,
    /// Glyph snapshot
    pub emoji: String,
    /// Category snapshot
    pub category: MenuCategory,
}

impl CartItem {
    pub fn from_menu_item(item: &MenuItem, quantity: u32) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.to_string(),
            price: item.price,
            quantity,
            emoji: item.emoji.to_string(),
            category: item.category,
        }
    }

    /// `price × quantity`
    pub fn line_total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

/// Sum of line totals
pub fn items_total(items: &[CartItem]) -> u64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Order record
///
/// `items`, `total_price` and `order_type` are fixed at creation. Only
/// `status` and `updated_at` change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID (`SRM-` + 6 uppercase alphanumerics)
    pub id: String,
    pub student_name: String,
    pub items: Vec<CartItem>,
    /// Computed once at creation
    pub total_price: u64,
    pub order_type: OrderType,
    pub status: OrderStatus,
    /// Pickup slot id (pre-book only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    /// 12-hour clock string (instant only)
    ///
    /// Computed at admission and never refreshed as the queue drains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_ready_time: Option<String>,
    /// 1-based rank among active instant orders at admission (instant only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_position: Option<u32>,
    /// Unix millis
    pub created_at: i64,
    /// Unix millis, refreshed on every status change
    pub updated_at: i64,
}

impl Order {
    pub fn is_instant(&self) -> bool {
        self.order_type == OrderType::Instant
    }

    pub fn is_delivered(&self) -> bool {
        self.status == OrderStatus::Delivered
    }

    /// Counts against the instant queue capacity
    pub fn is_active_instant(&self) -> bool {
        self.order_type == OrderType::Instant && !self.is_delivered()
    }

    pub fn is_active_prebook(&self) -> bool {
        self.order_type == OrderType::Prebook && !self.is_delivered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::find_menu_item;

    fn order(order_type: OrderType, status: OrderStatus) -> Order {
        Order {
            id: "SRM-TEST01".to_string(),
            student_name: "Asha".to_string(),
            items: vec![CartItem::from_menu_item(find_menu_item("coffee").unwrap(), 2)],
            total_price: 60,
            order_type,
            status,
            time_slot: None,
            estimated_ready_time: None,
            queue_position: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_items_total() {
        let items = vec![
            CartItem::from_menu_item(find_menu_item("burger").unwrap(), 1),
            CartItem::from_menu_item(find_menu_item("sandwich").unwrap(), 1),
        ];
        assert_eq!(items_total(&items), 140);

        let coffee = CartItem::from_menu_item(find_menu_item("coffee").unwrap(), 3);
        assert_eq!(coffee.line_total(), 90);
        assert_eq!(coffee.category, MenuCategory::Beverages);
    }

    #[test]
    fn test_partition_predicates() {
        let o = order(OrderType::Instant, OrderStatus::Preparing);
        assert!(o.is_active_instant());
        assert!(!o.is_active_prebook());

        let o = order(OrderType::Prebook, OrderStatus::Paid);
        assert!(o.is_active_prebook());
        assert!(!o.is_active_instant());

        let o = order(OrderType::Instant, OrderStatus::Delivered);
        assert!(o.is_delivered());
        assert!(!o.is_active_instant());
    }

    #[test]
    fn test_serialize_camel_case_and_omits_absent() {
        let mut o = order(OrderType::Prebook, OrderStatus::Paid);
        o.time_slot = Some("12-1230".to_string());
        let json = serde_json::to_value(&o).unwrap();

        assert_eq!(json["studentName"], "Asha");
        assert_eq!(json["totalPrice"], 60);
        assert_eq!(json["orderType"], "PREBOOK");
        assert_eq!(json["timeSlot"], "12-1230");
        assert!(json.get("queuePosition").is_none());
        assert!(json.get("estimatedReadyTime").is_none());
    }
}
