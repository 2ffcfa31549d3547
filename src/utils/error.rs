// src/utils/error.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub type DashboardResult<T> = Result<T, DashboardError>;

/// Custom error details for additional context
pub type ErrorDetails = HashMap<String, serde_json::Value>;

/// Main error type for the dashboard backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardError {
    pub message: String,
    pub details: Option<Box<ErrorDetails>>,
    pub status: Option<u16>,
    pub error_code: Option<String>,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    #[default]
    UnknownError,
    ValidationError,
    ConfigurationError,
    SerializationError,
    NotFoundError,
    InternalServerError,
    BadRequest,
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DashboardError {}

impl DashboardError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
            status: None,
            error_code: None,
            kind,
        }
    }

    pub fn with_details(mut self, details: ErrorDetails) -> Self {
        self.details = Some(Box::new(details));
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_code(mut self, error_code: impl Into<String>) -> Self {
        self.error_code = Some(error_code.into());
        self
    }

    // Convenience constructors for common error types
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationError, message)
            .with_status(400)
            .with_code("VALIDATION_ERROR")
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigurationError, message)
            .with_status(500)
            .with_code("CONFIGURATION_ERROR")
    }

    pub fn serialization_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError, message)
            .with_status(500)
            .with_code("SERIALIZATION_ERROR")
    }

    pub fn not_found<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::NotFoundError, message)
            .with_status(404)
            .with_code("NOT_FOUND")
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
            .with_status(500)
            .with_code("INTERNAL_ERROR")
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::serialization_error(err.to_string())
    }
}
