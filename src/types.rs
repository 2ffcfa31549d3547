// src/types.rs

use serde::{Deserialize, Serialize};

/// Payment attempt lifecycle states reported by the payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Success,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A completed or attempted payment, as recorded by the payment provider
/// integration. Read-only input: the analytics engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentEvent {
    pub id: String,
    /// Non-negative currency value; minor or major unit, consistent across the set.
    pub amount: f64,
    pub status: PaymentStatus,
    /// ISO 8601 timestamp, immutable once recorded.
    pub created_at: String,
}

/// Single line item inside an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// A customer order.
///
/// `status` is a free-vocabulary string: the dashboard mixes
/// `success`/`failed`/`pending` with `completed`/`cancelled` across call
/// sites, and both vocabularies are consumed downstream. See
/// `analytics::rankings::orders_by_status` vs `analytics::totals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEvent {
    pub id: String,
    pub user_id: String,
    pub phone: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    pub total: f64,
    pub items: Vec<OrderItem>,
    /// ISO 8601 timestamp.
    pub created_at: String,
}

/// Anything carrying a raw `created_at` timestamp that the trailing-window
/// filter can select on.
pub trait Timestamped {
    fn created_at(&self) -> &str;
}

impl Timestamped for PaymentEvent {
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl Timestamped for OrderEvent {
    fn created_at(&self) -> &str {
        &self.created_at
    }
}
