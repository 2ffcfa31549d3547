// Unit tests for the ranking aggregators: top-K behavior, revenue-based
// ordering, and the all-statuses accumulation policy.

use dinesight::services::core::analytics::rankings::{
    popular_items, top_customers, ORDER_STATUS_BREAKDOWN,
};
use dinesight::types::{OrderEvent, OrderItem};

fn order(id: &str, status: &str, total: f64) -> OrderEvent {
    OrderEvent {
        id: id.to_string(),
        user_id: format!("user-{}", id),
        phone: format!("+1-555-{}", id),
        name: format!("Customer {}", id),
        status: status.to_string(),
        payment_method: Some("cash".to_string()),
        total,
        items: vec![],
        created_at: "2025-06-29T10:00:00Z".to_string(),
    }
}

fn with_item(mut order: OrderEvent, name: &str, price: f64, quantity: u32) -> OrderEvent {
    order.items.push(OrderItem {
        name: name.to_string(),
        price,
        quantity,
    });
    order
}

#[test]
fn test_popular_items_truncate_to_limit_by_revenue() {
    let orders: Vec<OrderEvent> = (0..7)
        .map(|i| {
            with_item(
                order(&format!("{}", i), "completed", 10.0),
                &format!("Dish {}", i),
                10.0 - i as f64,
                1,
            )
        })
        .collect();

    let ranked = popular_items(&orders, 5);
    assert_eq!(ranked.len(), 5);
    assert_eq!(ranked[0].name, "Dish 0");
    assert_eq!(ranked[4].name, "Dish 4");
}

#[test]
fn test_popular_items_rank_by_revenue_not_quantity() {
    let orders = vec![
        with_item(order("1", "completed", 0.0), "Fries", 2.0, 10), // revenue 20
        with_item(order("2", "completed", 0.0), "Steak", 30.0, 1), // revenue 30
    ];
    let ranked = popular_items(&orders, 5);
    assert_eq!(ranked[0].name, "Steak");
    assert_eq!(ranked[1].name, "Fries");
    assert_eq!(ranked[1].quantity, 10);
}

#[test]
fn test_popular_items_count_cancelled_orders() {
    // Item popularity is not restricted to successful orders.
    let orders = vec![with_item(order("1", "cancelled", 12.0), "Burger", 6.0, 2)];
    let ranked = popular_items(&orders, 5);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].revenue, 12.0);
}

#[test]
fn test_top_customers_count_all_statuses() {
    let orders = vec![
        order("1", "cancelled", 40.0),
        order("1", "pending", 10.0),
        order("2", "completed", 30.0),
    ];
    let ranked = top_customers(&orders, 5);
    assert_eq!(ranked[0].revenue, 50.0);
    assert_eq!(ranked[0].orders, 2);
    assert_eq!(ranked[1].revenue, 30.0);
}

#[test]
fn test_status_breakdown_literals() {
    assert_eq!(ORDER_STATUS_BREAKDOWN, ["pending", "completed", "cancelled"]);
}
