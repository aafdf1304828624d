//! Dashboard views derived from the order store

use super::snapshot::Order;
use serde::{Deserialize, Serialize};

/// Orders partitioned for the staff dashboard
///
/// Every list is sorted newest first. `active`, `prebooked` and `delivered`
/// are disjoint and together make up `all`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderBoard {
    /// Undelivered instant orders
    pub active: Vec<Order>,
    /// Undelivered pre-book orders
    pub prebooked: Vec<Order>,
    /// Delivered orders of both types
    pub delivered: Vec<Order>,
    pub all: Vec<Order>,
}

impl OrderBoard {
    /// Partition an already sorted order list
    pub fn from_sorted(all: Vec<Order>) -> Self {
        let mut board = Self::default();
        for order in &all {
            if order.is_delivered() {
                board.delivered.push(order.clone());
            } else if order.is_instant() {
                board.active.push(order.clone());
            } else {
                board.prebooked.push(order.clone());
            }
        }
        board.all = all;
        board
    }
}

/// Counter statistics
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub active_instant_orders: usize,
    pub active_prebooked: usize,
    pub max_instant_orders: usize,
    pub total_delivered: usize,
    pub total_orders: usize,
    /// Sum of `totalPrice` over delivered orders only
    pub total_revenue: u64,
}

impl OrderStats {
    pub fn collect<'a>(
        orders: impl IntoIterator<Item = &'a Order>,
        max_instant_orders: usize,
    ) -> Self {
        let mut stats = Self {
            max_instant_orders,
            ..Self::default()
        };
        for order in orders {
            stats.total_orders += 1;
            if order.is_active_instant() {
                stats.active_instant_orders += 1;
            } else if order.is_active_prebook() {
                stats.active_prebooked += 1;
            } else {
                stats.total_delivered += 1;
                stats.total_revenue += order.total_price;
            }
        }
        stats
    }
}

/// Board plus stats, as served to the staff dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub orders: OrderBoard,
    pub stats: OrderStats,
}
