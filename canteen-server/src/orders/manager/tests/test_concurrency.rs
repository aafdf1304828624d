use super::*;
use std::thread;

#[test]
fn test_concurrent_admission_never_exceeds_capacity() {
    let manager = create_test_manager();
    let attempts = 64;

    let results: Vec<ManagerResult<Order>> = thread::scope(|s| {
        let handles: Vec<_> = (0..attempts)
            .map(|i| {
                let manager = &manager;
                s.spawn(move || create_instant(manager, &format!("Rush {}", i)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let admitted: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    let rejected = results
        .iter()
        .filter(|r| matches!(r, Err(ManagerError::QueueFull(_))))
        .count();

    assert_eq!(admitted.len(), 15);
    assert_eq!(rejected, attempts - 15);
    assert_eq!(manager.get_stats().active_instant_orders, 15);

    // Every admitted order got a distinct position 1..=15
    let mut positions: Vec<_> = admitted.iter().map(|o| o.queue_position.unwrap()).collect();
    positions.sort_unstable();
    assert_eq!(positions, (1..=15).collect::<Vec<u32>>());
}

#[test]
fn test_concurrent_verify_delivers_once() {
    let manager = create_test_manager();
    let order = create_instant(&manager, "Contested").unwrap();

    let successes = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| manager.verify_order(&order.id).is_ok()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count()
    });

    assert_eq!(successes, 1);
    assert_eq!(manager.get_stats().total_delivered, 1);
}

#[test]
fn test_readers_alongside_writers() {
    let manager = create_test_manager();

    thread::scope(|s| {
        for i in 0..4 {
            let manager = &manager;
            s.spawn(move || {
                for j in 0..10 {
                    let _ = create_prebook(manager, &format!("W{}-{}", i, j));
                }
            });
        }
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..20 {
                    let dashboard = manager.dashboard();
                    assert_eq!(dashboard.stats.total_orders, dashboard.orders.all.len());
                }
            });
        }
    });

    assert_eq!(manager.order_count(), 40);
}
