// src/services/core/analytics/window.rs

//! Trailing-day window selection over raw event collections.

use crate::types::Timestamped;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Duration, Utc};

/// True when `created_at` falls within the trailing `days` window ending at
/// `now`. The boundary is inclusive: an event exactly `days` old is kept.
/// Unparseable timestamps never satisfy the comparison and are dropped.
pub fn in_window(created_at: &str, now: DateTime<Utc>, days: i64) -> bool {
    match parse_timestamp(created_at) {
        Some(ts) => now.signed_duration_since(ts.with_timezone(&Utc)) <= Duration::days(days),
        None => false,
    }
}

/// Stable filter: keeps events whose age relative to `now` is at most `days`
/// days, preserving input order. No sorting, no mutation of the input.
pub fn filter_by_window<T: Timestamped + Clone>(
    events: &[T],
    now: DateTime<Utc>,
    days: i64,
) -> Vec<T> {
    events
        .iter()
        .filter(|event| in_window(event.created_at(), now, days))
        .cloned()
        .collect()
}
