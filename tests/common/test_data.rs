// tests/common/test_data.rs
// Shared fixture builders for analytics tests.

use dinesight::types::{OrderEvent, OrderItem, PaymentEvent, PaymentStatus};
use uuid::Uuid;

pub fn payment(amount: f64, status: PaymentStatus, created_at: &str) -> PaymentEvent {
    PaymentEvent {
        id: Uuid::new_v4().to_string(),
        amount,
        status,
        created_at: created_at.to_string(),
    }
}

pub fn order(phone: &str, name: &str, status: &str, total: f64, created_at: &str) -> OrderEvent {
    OrderEvent {
        id: Uuid::new_v4().to_string(),
        user_id: Uuid::new_v4().to_string(),
        phone: phone.to_string(),
        name: name.to_string(),
        status: status.to_string(),
        payment_method: Some("card".to_string()),
        total,
        items: vec![],
        created_at: created_at.to_string(),
    }
}

pub fn item(name: &str, price: f64, quantity: u32) -> OrderItem {
    OrderItem {
        name: name.to_string(),
        price,
        quantity,
    }
}
