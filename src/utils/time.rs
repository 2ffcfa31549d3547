// src/utils/time.rs

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Service for handling time-related operations.
#[derive(Debug, Clone)]
pub struct TimeService;

impl TimeService {
    /// Creates a new instance of `TimeService`.
    pub fn new() -> Self {
        TimeService
    }

    /// Gets the current UTC date and time.
    pub fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Gets the current timestamp in seconds since Unix epoch.
    pub fn current_timestamp(&self) -> u64 {
        Utc::now().timestamp() as u64
    }

    /// Gets the current timestamp in milliseconds since Unix epoch.
    pub fn current_timestamp_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl Default for TimeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Gets the current timestamp in seconds since Unix epoch (standalone function).
pub fn get_current_timestamp() -> u64 {
    Utc::now().timestamp() as u64
}

/// Parses a recorded `created_at` value.
///
/// Accepts RFC 3339 (`2025-06-01T10:00:00Z`, offset variants) plus the
/// offset-less `T`- and space-separated forms the store emits, which are
/// taken as UTC. Returns `None` for anything else; callers treat such
/// records as outside every time-derived bucket.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    log::debug!("unparseable created_at timestamp: {:?}", raw);
    None
}
