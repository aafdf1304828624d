//! Order type, status and the status transition table

use serde::{Deserialize, Serialize};

/// Maximum number of undelivered instant orders the counter accepts
pub const MAX_ACTIVE_INSTANT_ORDERS: usize = 15;

/// Estimated preparation minutes per queue position
pub const MINUTES_PER_QUEUE_POSITION: i64 = 3;

/// Order id prefix (`SRM-XXXXXX`)
pub const ORDER_ID_PREFIX: &str = "SRM-";

/// Number of random characters after the prefix
pub const ORDER_ID_SUFFIX_LEN: usize = 6;

// ============================================================================
// Order Type
// ============================================================================

/// 订单类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// 即时订单 - 进入实时出餐队列，受容量限制
    Instant,
    /// 预订订单 - 预约取餐时段，不占用即时队列
    Prebook,
}

impl OrderType {
    /// Status a freshly created order starts in
    ///
    /// Instant orders are paid at the counter and go straight to the kitchen.
    pub fn initial_status(&self) -> OrderStatus {
        match self {
            Self::Instant => OrderStatus::Preparing,
            Self::Prebook => OrderStatus::Paid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instant => "INSTANT",
            Self::Prebook => "PREBOOK",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Order Status
// ============================================================================

/// Order status
///
/// `PAID → PREPARING → READY → DELIVERED`, one step at a time.
/// `DELIVERED` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Paid,
    Preparing,
    Ready,
    Delivered,
}

impl OrderStatus {
    /// Statuses reachable from this one through a regular status update
    pub fn allowed_next(&self) -> &'static [OrderStatus] {
        match self {
            Self::Paid => &[Self::Preparing],
            Self::Preparing => &[Self::Ready],
            Self::Ready => &[Self::Delivered],
            Self::Delivered => &[],
        }
    }

    /// Same-state moves, skips and backward moves are all rejected
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        self.allowed_next().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_next().is_empty()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Preparing => "PREPARING",
            Self::Ready => "READY",
            Self::Delivered => "DELIVERED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
