//! OrdersManager - order lifecycle and queue admission
//!
//! This module handles:
//! - Order creation with instant-queue admission control
//! - Status transitions along the fixed lifecycle
//! - Pickup verification (forces `DELIVERED`)
//! - Dashboard views and statistics
//!
//! # Locking
//!
//! ```text
//! create_order / update_status / verify_order
//!     ├─ 1. Validate input (no lock)
//!     ├─ 2. Take the storage write lock
//!     ├─ 3. Check business rules (capacity, transition table)
//!     ├─ 4. Mutate and store
//!     └─ 5. Release lock, return a clone
//!
//! get_order / list_orders / get_stats / dashboard
//!     └─ Read lock, clone a snapshot
//! ```
//!
//! Holding the write lock across count-then-insert is what keeps the number
//! of undelivered instant orders at or below the queue capacity.

mod error;
pub use error::*;

use super::id::{generate_order_id, normalize_order_id};
use super::queue::{QueuePolicy, format_ready_time};
use super::storage::OrderStorage;
use chrono_tz::Tz;
use parking_lot::RwLock;
use shared::models::find_time_slot;
use shared::order::{
    CartItem, Dashboard, Order, OrderBoard, OrderStats, OrderStatus, OrderType, items_total,
};
use shared::util::now_millis;

/// Attempts at drawing an unused order id before giving up
const MAX_ID_ATTEMPTS: usize = 8;

pub struct OrdersManager {
    storage: RwLock<OrderStorage>,
    policy: QueuePolicy,
    /// 业务时区 (ETA display)
    tz: Tz,
    id_generator: fn() -> String,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("storage", &"<OrderStorage>")
            .field("policy", &self.policy)
            .field("tz", &self.tz)
            .finish()
    }
}

impl OrdersManager {
    pub fn new(tz: Tz) -> Self {
        Self::with_policy(QueuePolicy::default(), tz)
    }

    pub fn with_policy(policy: QueuePolicy, tz: Tz) -> Self {
        tracing::info!(
            capacity = policy.capacity,
            minutes_per_position = policy.minutes_per_position,
            timezone = %tz,
            "OrdersManager initialized"
        );
        Self {
            storage: RwLock::new(OrderStorage::new()),
            policy,
            tz,
            id_generator: generate_order_id,
        }
    }

    /// Replace the id source (for testing collision handling)
    #[cfg(test)]
    pub fn with_id_generator(mut self, id_generator: fn() -> String) -> Self {
        self.id_generator = id_generator;
        self
    }

    pub fn policy(&self) -> QueuePolicy {
        self.policy
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    // ========== Mutations ==========

    /// Create an order
    ///
    /// Instant orders are admitted only while fewer than `policy.capacity`
    /// instant orders are undelivered; pre-book orders bypass the cap.
    pub fn create_order(
        &self,
        student_name: &str,
        items: Vec<CartItem>,
        order_type: OrderType,
        time_slot: Option<&str>,
    ) -> ManagerResult<Order> {
        let student_name = student_name.trim();
        let mut missing = Vec::new();
        if student_name.is_empty() {
            missing.push("studentName");
        }
        if items.is_empty() || items.iter().any(|i| i.quantity == 0) {
            missing.push("items");
        }
        if !missing.is_empty() {
            return Err(ManagerError::MissingFields(missing.join(", ")));
        }

        let time_slot = match order_type {
            OrderType::Instant => None,
            OrderType::Prebook => {
                let slot = time_slot
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .ok_or(ManagerError::MissingTimeSlot)?;
                if find_time_slot(slot).is_none() {
                    tracing::warn!(time_slot = %slot, "Pre-book order for unknown time slot");
                }
                Some(slot.to_string())
            }
        };
        let total_price = items_total(&items);

        let mut storage = self.storage.write();
        let now = now_millis();

        let (queue_position, estimated_ready_time) = match order_type {
            OrderType::Instant => {
                let active = storage.count_active_instant();
                let admission = self.policy.admit(active, now).inspect_err(|e| {
                    tracing::warn!(active, capacity = e.capacity, "Instant order rejected: queue full");
                })?;
                let eta = format_ready_time(admission.ready_at, self.tz).ok_or_else(|| {
                    ManagerError::Internal(format!(
                        "ready time out of range: {}",
                        admission.ready_at
                    ))
                })?;
                (Some(admission.queue_position), Some(eta))
            }
            OrderType::Prebook => (None, None),
        };

        let id = self.next_order_id(&storage)?;
        let order = Order {
            id,
            student_name: student_name.to_string(),
            items,
            total_price,
            order_type,
            status: order_type.initial_status(),
            time_slot,
            estimated_ready_time,
            queue_position,
            created_at: now,
            updated_at: now,
        };
        storage.put_order(order.clone());
        drop(storage);

        tracing::info!(
            order_id = %order.id,
            order_type = %order.order_type,
            status = %order.status,
            queue_position = ?order.queue_position,
            total_price = order.total_price,
            "Order created"
        );
        Ok(order)
    }

    /// Advance an order by exactly one step of the lifecycle
    pub fn update_status(&self, order_id: &str, new_status: OrderStatus) -> ManagerResult<Order> {
        let order_id = normalize_order_id(order_id);
        let mut storage = self.storage.write();
        let mut order = storage
            .get_order(&order_id)
            .cloned()
            .ok_or_else(|| ManagerError::OrderNotFound(order_id.clone()))?;

        if !order.status.can_transition_to(new_status) {
            tracing::warn!(
                order_id = %order_id,
                from = %order.status,
                to = %new_status,
                "Illegal status transition rejected"
            );
            return Err(ManagerError::IllegalTransition {
                order_id,
                from: order.status,
                to: new_status,
            });
        }

        let from = order.status;
        order.status = new_status;
        order.updated_at = now_millis();
        storage.put_order(order.clone());
        drop(storage);

        tracing::info!(order_id = %order.id, from = %from, status = %new_status, "Order status updated");
        Ok(order)
    }

    /// Pickup confirmation: jump straight to `DELIVERED` from any live status
    pub fn verify_order(&self, order_id: &str) -> ManagerResult<Order> {
        let order_id = normalize_order_id(order_id);
        let mut storage = self.storage.write();
        let mut order = storage
            .get_order(&order_id)
            .cloned()
            .ok_or_else(|| ManagerError::OrderNotFound(order_id.clone()))?;

        if order.is_delivered() {
            tracing::warn!(order_id = %order_id, "Order already delivered, verification rejected");
            return Err(ManagerError::AlreadyDelivered(order_id));
        }

        let from = order.status;
        order.status = OrderStatus::Delivered;
        order.updated_at = now_millis();
        storage.put_order(order.clone());
        drop(storage);

        tracing::info!(order_id = %order.id, from = %from, "Order verified and delivered");
        Ok(order)
    }

    fn next_order_id(&self, storage: &OrderStorage) -> ManagerResult<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = (self.id_generator)();
            if !storage.contains(&candidate) {
                return Ok(candidate);
            }
            tracing::debug!(candidate = %candidate, "Order id collision, drawing again");
        }
        Err(ManagerError::Internal(format!(
            "no unused order id after {} attempts",
            MAX_ID_ATTEMPTS
        )))
    }

    // ========== Queries ==========

    /// Look up an order (case-insensitive id)
    pub fn get_order(&self, order_id: &str) -> ManagerResult<Order> {
        let order_id = normalize_order_id(order_id);
        self.storage
            .read()
            .get_order(&order_id)
            .cloned()
            .ok_or(ManagerError::OrderNotFound(order_id))
    }

    /// All orders, newest first, partitioned for the dashboard
    pub fn list_orders(&self) -> OrderBoard {
        let all = self.storage.read().get_all_orders();
        OrderBoard::from_sorted(all)
    }

    pub fn get_stats(&self) -> OrderStats {
        let storage = self.storage.read();
        OrderStats::collect(storage.iter(), self.policy.capacity)
    }

    /// Board and stats taken from the same snapshot
    pub fn dashboard(&self) -> Dashboard {
        let all = self.storage.read().get_all_orders();
        let stats = OrderStats::collect(&all, self.policy.capacity);
        Dashboard {
            orders: OrderBoard::from_sorted(all),
            stats,
        }
    }

    pub fn order_count(&self) -> usize {
        self.storage.read().len()
    }
}

#[cfg(test)]
mod tests;
