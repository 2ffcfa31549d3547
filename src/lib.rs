//! dinesight - transaction analytics engine for the restaurant admin dashboard.
//!
//! Consumes the raw payment and order event streams the data layer has
//! already fetched and produces the immutable [`AnalyticsReport`] snapshot
//! rendered by the transactions dashboard: totals and rates, revenue trends,
//! hourly order distribution, item and customer rankings, and the
//! payment-method and order-status breakdowns.

// Module declarations
pub mod responses;
pub mod services;
pub mod types;
pub mod utils;

pub use responses::ApiResponse;
pub use services::core::analytics::{AnalyticsEngine, AnalyticsEngineConfig, AnalyticsReport};
pub use types::{OrderEvent, OrderItem, PaymentEvent, PaymentStatus};
pub use utils::{DashboardError, DashboardResult};
