// src/services/core/analytics/rankings.rs

//! Per-item, per-customer, and per-method accumulation plus the fixed
//! order-status breakdown.
//!
//! Every aggregate here counts orders of any status: item popularity and
//! customer ranking deliberately include pending and cancelled orders, in
//! contrast with revenue totals which only count successful payments.

use crate::types::OrderEvent;
use crate::utils::helpers::{descending_f64, percentage_of};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Statuses the dashboard pie chart recognizes, in display order. Orders
/// carrying any other status (for example `success`) are counted by the
/// totals calculator but excluded from this breakdown.
pub const ORDER_STATUS_BREAKDOWN: [&str; 3] = ["pending", "completed", "cancelled"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularItem {
    pub name: String,
    pub quantity: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusCount {
    pub status: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodCount {
    pub method: String,
    pub count: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer {
    pub name: String,
    /// Customer key: `phone` when present, otherwise `user_id`.
    pub phone: String,
    pub orders: u64,
    pub revenue: f64,
}

/// Accumulates line items by name and returns the top `limit` by revenue.
/// Tie order between equal revenues is unspecified.
pub fn popular_items(orders: &[OrderEvent], limit: usize) -> Vec<PopularItem> {
    let mut by_name: IndexMap<String, PopularItem> = IndexMap::new();
    for order in orders {
        for item in &order.items {
            let entry = by_name
                .entry(item.name.clone())
                .or_insert_with(|| PopularItem {
                    name: item.name.clone(),
                    quantity: 0,
                    revenue: 0.0,
                });
            entry.quantity += u64::from(item.quantity);
            entry.revenue += f64::from(item.quantity) * item.price;
        }
    }
    let mut ranked: Vec<PopularItem> = by_name.into_values().collect();
    ranked.sort_by(|a, b| descending_f64(a.revenue, b.revenue));
    ranked.truncate(limit);
    ranked
}

/// Accumulates orders per customer and returns the top `limit` by revenue.
/// The displayed name is overwritten by every matching order (last seen
/// wins), which the dashboard has always done.
pub fn top_customers(orders: &[OrderEvent], limit: usize) -> Vec<TopCustomer> {
    let mut by_key: IndexMap<String, TopCustomer> = IndexMap::new();
    for order in orders {
        let key = if order.phone.is_empty() {
            order.user_id.clone()
        } else {
            order.phone.clone()
        };
        let entry = by_key.entry(key.clone()).or_insert_with(|| TopCustomer {
            name: String::new(),
            phone: key,
            orders: 0,
            revenue: 0.0,
        });
        entry.name = order.name.clone();
        entry.orders += 1;
        entry.revenue += order.total;
    }
    let mut ranked: Vec<TopCustomer> = by_key.into_values().collect();
    ranked.sort_by(|a, b| descending_f64(a.revenue, b.revenue));
    ranked.truncate(limit);
    ranked
}

/// One entry per distinct payment method, first-occurrence order, no
/// truncation. Absent or empty methods fall back to `"unknown"`.
pub fn payment_methods(orders: &[OrderEvent]) -> Vec<PaymentMethodCount> {
    let mut by_method: IndexMap<String, PaymentMethodCount> = IndexMap::new();
    for order in orders {
        let method = order
            .payment_method
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or("unknown");
        let entry = by_method
            .entry(method.to_string())
            .or_insert_with(|| PaymentMethodCount {
                method: method.to_string(),
                count: 0,
                revenue: 0.0,
            });
        entry.count += 1;
        entry.revenue += order.total;
    }
    by_method.into_values().collect()
}

/// Exactly three entries, one per status in [`ORDER_STATUS_BREAKDOWN`], in
/// that fixed order, regardless of what statuses appear in the data.
pub fn orders_by_status(orders: &[OrderEvent]) -> Vec<OrderStatusCount> {
    let total_orders = orders.len() as u64;
    ORDER_STATUS_BREAKDOWN
        .iter()
        .map(|status| {
            let count = orders.iter().filter(|o| o.status == *status).count() as u64;
            OrderStatusCount {
                status: status.to_string(),
                count,
                percentage: percentage_of(count, total_orders),
            }
        })
        .collect()
}
