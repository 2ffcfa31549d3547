// src/services/core/analytics/report.rs

//! The assembled analytics snapshot returned to the dashboard.

use super::rankings::{OrderStatusCount, PaymentMethodCount, PopularItem, TopCustomer};
use super::timeseries::{HourlyOrders, RevenueByDay};
use super::totals::TransactionTotals;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSection {
    pub revenue_by_day: Vec<RevenueByDay>,
    pub hourly_orders: Vec<HourlyOrders>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSection {
    pub popular_items: Vec<PopularItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSection {
    pub orders_by_status: Vec<OrderStatusCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSection {
    pub payment_methods: Vec<PaymentMethodCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSection {
    pub top_customers: Vec<TopCustomer>,
}

/// Immutable analytics snapshot: a pure function of the input collections,
/// the reference instant, and the engine configuration. Not persisted;
/// recomputed on every invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub totals: TransactionTotals,
    pub trends: TrendSection,
    pub items: ItemSection,
    pub orders: OrderSection,
    pub payments: PaymentSection,
    pub customers: CustomerSection,
}
