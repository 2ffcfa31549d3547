use crate::utils::error::DashboardError;
use crate::utils::time::TimeService;
use serde::Serialize;

/// Envelope every dashboard endpoint returns: `{success, data, error, timestamp}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: u64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: TimeService::new().current_timestamp_ms() as u64,
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            timestamp: TimeService::new().current_timestamp_ms() as u64,
        }
    }

    pub fn from_error(err: &DashboardError) -> ApiResponse<()> {
        ApiResponse::<()>::error(err.to_string())
    }
}
