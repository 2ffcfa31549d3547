// src/services/core/analytics/timeseries.rs

//! Calendar-day and hour-of-day binning for the dashboard trend charts.

use crate::types::{OrderEvent, PaymentEvent, PaymentStatus, Timestamped};
use crate::utils::time::parse_timestamp;
use chrono::Timelike;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One point of the daily revenue trend.
///
/// The `date` label (`"05 Jan"`) is also the grouping key, so two payments a
/// year apart on the same day and month merge into one bucket. Points follow
/// first-seen order while iterating the input, not calendar order; chart
/// consumers needing calendar order must sort on a parsed date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueByDay {
    pub date: String,
    pub revenue: f64,
    pub orders: u64,
}

/// Order count for one hour of day. Label is not zero-padded (`"9:00"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyOrders {
    pub hour: String,
    pub orders: u64,
}

/// Groups successful payments by the `"DD Mon"` label of `created_at`.
pub fn revenue_by_day(payments: &[PaymentEvent]) -> Vec<RevenueByDay> {
    let mut buckets: IndexMap<String, RevenueByDay> = IndexMap::new();
    for payment in payments.iter().filter(|p| p.status == PaymentStatus::Success) {
        let Some(ts) = parse_timestamp(&payment.created_at) else {
            continue;
        };
        let label = ts.format("%d %b").to_string();
        let bucket = buckets
            .entry(label.clone())
            .or_insert_with(|| RevenueByDay {
                date: label,
                revenue: 0.0,
                orders: 0,
            });
        bucket.revenue += payment.amount;
        bucket.orders += 1;
    }
    buckets.into_values().collect()
}

/// Groups all orders, regardless of status, by the hour component of
/// `created_at` in the timestamp's own offset. Hours with no orders are
/// omitted; the result is sparse, not a dense 0-23 array.
pub fn hourly_orders(orders: &[OrderEvent]) -> Vec<HourlyOrders> {
    let mut buckets: IndexMap<u32, HourlyOrders> = IndexMap::new();
    for order in orders {
        let Some(ts) = parse_timestamp(order.created_at()) else {
            continue;
        };
        let hour = ts.hour();
        buckets
            .entry(hour)
            .or_insert_with(|| HourlyOrders {
                hour: format!("{}:00", hour),
                orders: 0,
            })
            .orders += 1;
    }
    buckets.into_values().collect()
}
