// Unit tests for the trend binners: label formats, first-seen ordering, and
// the all-statuses hourly policy.

use dinesight::services::core::analytics::timeseries::{hourly_orders, revenue_by_day};
use dinesight::types::{OrderEvent, PaymentEvent, PaymentStatus};

fn payment(amount: f64, created_at: &str) -> PaymentEvent {
    PaymentEvent {
        id: "p".to_string(),
        amount,
        status: PaymentStatus::Success,
        created_at: created_at.to_string(),
    }
}

fn order(status: &str, created_at: &str) -> OrderEvent {
    OrderEvent {
        id: "o".to_string(),
        user_id: "u".to_string(),
        phone: "+1-555-0001".to_string(),
        name: "Ada".to_string(),
        status: status.to_string(),
        payment_method: None,
        total: 10.0,
        items: vec![],
        created_at: created_at.to_string(),
    }
}

#[test]
fn test_day_labels_are_zero_padded_day_and_short_month() {
    let trend = revenue_by_day(&[payment(10.0, "2025-01-05T09:00:00Z")]);
    assert_eq!(trend[0].date, "05 Jan");
}

#[test]
fn test_days_follow_first_seen_order_not_calendar_order() {
    let trend = revenue_by_day(&[
        payment(1.0, "2025-06-20T09:00:00Z"),
        payment(2.0, "2025-06-18T09:00:00Z"),
        payment(4.0, "2025-06-20T18:00:00Z"),
    ]);
    let labels: Vec<&str> = trend.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(labels, vec!["20 Jun", "18 Jun"]);
    assert_eq!(trend[0].revenue, 5.0);
}

#[test]
fn test_hour_labels_not_zero_padded() {
    let hours = hourly_orders(&[order("pending", "2025-06-20T09:00:00Z")]);
    assert_eq!(hours[0].hour, "9:00");
    let hours = hourly_orders(&[order("pending", "2025-06-20T00:30:00Z")]);
    assert_eq!(hours[0].hour, "0:00");
}

#[test]
fn test_hourly_orders_include_every_status() {
    let hours = hourly_orders(&[
        order("cancelled", "2025-06-20T09:00:00Z"),
        order("completed", "2025-06-20T09:30:00Z"),
        order("pending", "2025-06-20T09:59:00Z"),
    ]);
    assert_eq!(hours.len(), 1);
    assert_eq!(hours[0].orders, 3);
}
