//! In-memory order store
//!
//! Sole owner of the id → order mapping. It performs no validation and no
//! locking; [`OrdersManager`](super::OrdersManager) guards it and is the only
//! writer. Orders are never deleted and nothing survives a restart.

use shared::order::Order;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct StoredOrder {
    /// Insertion sequence, breaks `created_at` ties (newer first)
    seq: u64,
    order: Order,
}

#[derive(Debug, Default)]
pub struct OrderStorage {
    orders: HashMap<String, StoredOrder>,
    next_seq: u64,
}

impl OrderStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced order keeps its sequence number
    pub fn put_order(&mut self, order: Order) {
        if let Some(stored) = self.orders.get_mut(&order.id) {
            stored.order = order;
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.orders.insert(order.id.clone(), StoredOrder { seq, order });
    }

    pub fn get_order(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id).map(|s| &s.order)
    }

    pub fn contains(&self, order_id: &str) -> bool {
        self.orders.contains_key(order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Unordered iteration
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values().map(|s| &s.order)
    }

    /// Undelivered instant orders, the figure admission is decided on
    pub fn count_active_instant(&self) -> usize {
        self.iter().filter(|o| o.is_active_instant()).count()
    }

    /// Cloned snapshot, newest `created_at` first
    pub fn get_all_orders(&self) -> Vec<Order> {
        let mut entries: Vec<&StoredOrder> = self.orders.values().collect();
        entries.sort_by(|a, b| {
            b.order
                .created_at
                .cmp(&a.order.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        entries.into_iter().map(|s| s.order.clone()).collect()
    }
}
