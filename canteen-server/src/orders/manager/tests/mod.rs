use super::*;
use shared::models::find_menu_item;

fn create_test_manager() -> OrdersManager {
    OrdersManager::new(chrono_tz::Asia::Kolkata)
}

fn item(menu_id: &str, quantity: u32) -> CartItem {
    let menu_item = find_menu_item(menu_id).unwrap();
    CartItem::from_menu_item(menu_item, quantity)
}

fn create_instant(manager: &OrdersManager, student: &str) -> ManagerResult<Order> {
    manager.create_order(student, vec![item("coffee", 1)], OrderType::Instant, None)
}

fn create_prebook(manager: &OrdersManager, student: &str) -> ManagerResult<Order> {
    manager.create_order(
        student,
        vec![item("biryani", 1)],
        OrderType::Prebook,
        Some("12-1230"),
    )
}

/// Fill the instant queue to capacity
fn fill_instant_queue(manager: &OrdersManager) -> Vec<Order> {
    (0..manager.policy().capacity)
        .map(|i| create_instant(manager, &format!("Student {}", i)).unwrap())
        .collect()
}

mod test_concurrency;
