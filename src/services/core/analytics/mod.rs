// src/services/core/analytics/mod.rs

//! Transaction Analytics - Aggregation Engine for the Admin Dashboard
//!
//! Transforms the raw payment and order event streams into the derived
//! metrics, trends, and rankings shown on the transactions dashboard.
//!
//! ## Components:
//!
//! 1. **window** - Trailing-day selection over raw event collections
//! 2. **totals** - Counts, rates, and revenue sums per status bucket
//! 3. **timeseries** - Calendar-day revenue and hour-of-day order binning
//! 4. **rankings** - Item/customer top-K, payment-method and status breakdowns
//! 5. **report** - Composition of the above into one immutable snapshot
//!
//! The sub-computations are independent of one another; only the assembler
//! sees all of them. The whole stage is synchronous and side-effect-free:
//! it performs no I/O and holds no state between invocations, so a report is
//! a pure function of `(payments, orders, now, config)`.

pub mod rankings;
pub mod report;
pub mod timeseries;
pub mod totals;
pub mod window;

pub use rankings::{OrderStatusCount, PaymentMethodCount, PopularItem, TopCustomer};
pub use report::{
    AnalyticsReport, CustomerSection, ItemSection, OrderSection, PaymentSection, TrendSection,
};
pub use timeseries::{HourlyOrders, RevenueByDay};
pub use totals::TransactionTotals;

use crate::responses::ApiResponse;
use crate::types::{OrderEvent, PaymentEvent};
use crate::utils::time::TimeService;
use crate::utils::{DashboardError, DashboardResult};
use chrono::{DateTime, Utc};

/// Analytics Engine Configuration
#[derive(Debug, Clone)]
pub struct AnalyticsEngineConfig {
    /// Trailing window applied to both event collections, in days.
    pub window_days: u32,
    pub top_items_limit: usize,
    pub top_customers_limit: usize,
}

impl Default for AnalyticsEngineConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            top_items_limit: 5,
            top_customers_limit: 5,
        }
    }
}

impl AnalyticsEngineConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> DashboardResult<()> {
        if self.window_days == 0 {
            return Err(DashboardError::configuration_error(
                "window_days must be greater than 0".to_string(),
            ));
        }
        if self.top_items_limit == 0 {
            return Err(DashboardError::configuration_error(
                "top_items_limit must be greater than 0".to_string(),
            ));
        }
        if self.top_customers_limit == 0 {
            return Err(DashboardError::configuration_error(
                "top_customers_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Transaction analytics engine for the admin dashboard
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    config: AnalyticsEngineConfig,
    time_service: TimeService,
}

impl AnalyticsEngine {
    pub fn new(config: AnalyticsEngineConfig) -> DashboardResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            time_service: TimeService::new(),
        })
    }

    pub fn config(&self) -> &AnalyticsEngineConfig {
        &self.config
    }

    /// Builds the full analytics snapshot against an explicit reference
    /// instant. Empty inputs degrade to zero totals, zero rates, and empty
    /// sequences; there is no error path.
    pub fn generate(
        &self,
        payments: &[PaymentEvent],
        orders: &[OrderEvent],
        now: DateTime<Utc>,
    ) -> AnalyticsReport {
        let days = i64::from(self.config.window_days);
        let windowed_payments = window::filter_by_window(payments, now, days);
        let windowed_orders = window::filter_by_window(orders, now, days);

        AnalyticsReport {
            totals: totals::calculate(&windowed_payments, &windowed_orders, now),
            trends: TrendSection {
                revenue_by_day: timeseries::revenue_by_day(&windowed_payments),
                hourly_orders: timeseries::hourly_orders(&windowed_orders),
            },
            items: ItemSection {
                popular_items: rankings::popular_items(
                    &windowed_orders,
                    self.config.top_items_limit,
                ),
            },
            orders: OrderSection {
                orders_by_status: rankings::orders_by_status(&windowed_orders),
            },
            payments: PaymentSection {
                payment_methods: rankings::payment_methods(&windowed_orders),
            },
            customers: CustomerSection {
                top_customers: rankings::top_customers(
                    &windowed_orders,
                    self.config.top_customers_limit,
                ),
            },
        }
    }

    /// Convenience wrapper reading the clock; the aggregation itself always
    /// receives `now` explicitly.
    pub fn generate_now(
        &self,
        payments: &[PaymentEvent],
        orders: &[OrderEvent],
    ) -> AnalyticsReport {
        self.generate(payments, orders, self.time_service.now_utc())
    }

    /// Wraps a snapshot in the `{success: true, data}` envelope the
    /// dashboard consumers expect.
    pub fn dashboard_payload(
        &self,
        payments: &[PaymentEvent],
        orders: &[OrderEvent],
        now: DateTime<Utc>,
    ) -> ApiResponse<AnalyticsReport> {
        let report = self.generate(payments, orders, now);
        crate::log_debug!(
            "generated transaction analytics report",
            serde_json::json!({
                "payments": payments.len(),
                "orders": orders.len(),
                "window_days": self.config.window_days,
            })
        );
        ApiResponse::success(report)
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self {
            config: AnalyticsEngineConfig::default(),
            time_service: TimeService::new(),
        }
    }
}
