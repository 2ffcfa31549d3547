// src/services/core/analytics/totals.rs

//! Aggregate counters, rates, and revenue sums over the windowed event sets.

use super::window::in_window;
use crate::types::{OrderEvent, PaymentEvent, PaymentStatus};
use crate::utils::helpers::percentage_of;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Headline counters and rates for the transactions dashboard.
///
/// Payment rates are zero-guarded: with no payments in the window every rate
/// is 0, never NaN. Order counts here use the `success`/`failed`/`pending`
/// vocabulary; the fixed `pending`/`completed`/`cancelled` breakdown lives in
/// [`super::rankings::orders_by_status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTotals {
    pub total_payments: u64,
    pub successful_payments: u64,
    pub failed_payments: u64,
    pub pending_payments: u64,
    pub success_rate: f64,
    pub fail_rate: f64,
    pub pending_rate: f64,
    /// Sum of `amount` over successful payments only.
    pub total_revenue: f64,
    pub total_orders: u64,
    pub successful_orders: u64,
    pub pending_orders: u64,
    pub failed_orders: u64,
    /// `total_revenue / successful_orders`; payment-side revenue over the
    /// order-side success count, as the dashboard has always computed it.
    pub avg_order_value: f64,
    pub revenue_24h: f64,
    pub revenue_7d: f64,
    pub revenue_30d: f64,
}

/// Revenue from successful payments no older than `days`, computed from
/// scratch per window so the short horizons stay independent of one another.
fn revenue_within(payments: &[PaymentEvent], now: DateTime<Utc>, days: i64) -> f64 {
    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Success)
        .filter(|p| in_window(&p.created_at, now, days))
        .map(|p| p.amount)
        .sum()
}

fn count_payments(payments: &[PaymentEvent], status: PaymentStatus) -> u64 {
    payments.iter().filter(|p| p.status == status).count() as u64
}

fn count_orders(orders: &[OrderEvent], status: &str) -> u64 {
    orders.iter().filter(|o| o.status == status).count() as u64
}

pub fn calculate(
    payments: &[PaymentEvent],
    orders: &[OrderEvent],
    now: DateTime<Utc>,
) -> TransactionTotals {
    let total_payments = payments.len() as u64;
    let successful_payments = count_payments(payments, PaymentStatus::Success);
    let failed_payments = count_payments(payments, PaymentStatus::Failed);
    let pending_payments = count_payments(payments, PaymentStatus::Pending);

    let total_revenue: f64 = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Success)
        .map(|p| p.amount)
        .sum();

    let total_orders = orders.len() as u64;
    let successful_orders = count_orders(orders, "success");
    let pending_orders = count_orders(orders, "pending");
    let failed_orders = count_orders(orders, "failed");

    let avg_order_value = if successful_orders == 0 {
        0.0
    } else {
        total_revenue / successful_orders as f64
    };

    TransactionTotals {
        total_payments,
        successful_payments,
        failed_payments,
        pending_payments,
        success_rate: percentage_of(successful_payments, total_payments),
        fail_rate: percentage_of(failed_payments, total_payments),
        pending_rate: percentage_of(pending_payments, total_payments),
        total_revenue,
        total_orders,
        successful_orders,
        pending_orders,
        failed_orders,
        avg_order_value,
        revenue_24h: revenue_within(payments, now, 1),
        revenue_7d: revenue_within(payments, now, 7),
        revenue_30d: revenue_within(payments, now, 30),
    }
}
