// src/services/core/mod.rs

pub mod analytics;

// Re-export all services for convenience
pub use analytics::*;
