//! Client-facing error payload.

use crate::tracking::services::TrackingError;
use serde::{Deserialize, Serialize};

const BAD_REQUEST: u16 = 400;
const NOT_FOUND: u16 = 404;
const INTERNAL_SERVER_ERROR: u16 = 500;

/// Error body returned to clients by the routing layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code.
    pub status: u16,
    /// Short category of the failure.
    pub message: String,
    /// Human-readable detail.
    pub details: String,
}

impl From<&TrackingError> for ErrorResponse {
    fn from(err: &TrackingError) -> Self {
        match err {
            TrackingError::Validation(validation) => Self {
                status: BAD_REQUEST,
                message: "invalid request".to_owned(),
                details: validation.to_string(),
            },
            TrackingError::TaskListNotFound(_) | TrackingError::TaskNotFound { .. } => Self {
                status: NOT_FOUND,
                message: "resource not found".to_owned(),
                details: err.to_string(),
            },
            // Repository detail is never exposed to clients.
            TrackingError::Repository(_) => Self {
                status: INTERNAL_SERVER_ERROR,
                message: "internal error".to_owned(),
                details: "an internal error occurred".to_owned(),
            },
        }
    }
}

impl From<TrackingError> for ErrorResponse {
    fn from(err: TrackingError) -> Self {
        Self::from(&err)
    }
}
