//! Response types for the shift calendar API.
//!
//! This module defines the success payloads, the error response structure
//! and the mapping from [`CalendarError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::StaffMonth;
use crate::error::CalendarError;

/// Response body for the `/week` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekResponse {
    /// Monday of the week.
    pub week_start: NaiveDate,
    /// The seven dates of the week.
    pub dates: Vec<NaiveDate>,
    /// The reduced-hour dates of the week.
    pub reduced_hour_dates: Vec<NaiveDate>,
}

/// Response body for the `/roster/month` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRosterResponse {
    /// The year.
    pub year: i32,
    /// The month.
    pub month: u32,
    /// One entry per requested staff member, in request order.
    pub staff: Vec<StaffMonth>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CalendarError> for ApiErrorResponse {
    fn from(error: CalendarError) -> Self {
        let message = error.to_string();
        match error {
            CalendarError::ConfigNotFound { .. } | CalendarError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            CalendarError::InvalidPattern { .. } | CalendarError::InvalidReferenceDate { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Invalid calendar configuration",
                        message,
                    ),
                }
            }
            CalendarError::PatternNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "PATTERN_NOT_FOUND",
                    message,
                    format!("The shift type code '{}' has no pattern", code),
                ),
            },
            CalendarError::InvalidMonth { .. }
            | CalendarError::DateOutOfRange { .. }
            | CalendarError::DuplicateStaff { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_month_is_bad_request() {
        let api_error: ApiErrorResponse = CalendarError::InvalidMonth {
            year: 2026,
            month: 13,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert_eq!(api_error.error.message, "Invalid month: 2026-13");
    }

    #[test]
    fn test_out_of_range_date_is_bad_request() {
        let api_error: ApiErrorResponse = CalendarError::DateOutOfRange {
            date: NaiveDate::MAX,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_duplicate_staff_is_bad_request() {
        let api_error: ApiErrorResponse = CalendarError::DuplicateStaff {
            staff_id: "c-101".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_error_response_into_response() {
        let response = ApiErrorResponse::from(CalendarError::InvalidMonth {
            year: 2026,
            month: 0,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.message, "Invalid month: 2026-0");
    }

    #[test]
    fn test_config_error_is_server_error() {
        let api_error: ApiErrorResponse = CalendarError::ConfigNotFound {
            path: "/x".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_pattern_not_found_is_bad_request() {
        let api_error: ApiErrorResponse = CalendarError::PatternNotFound {
            code: "7x7".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "PATTERN_NOT_FOUND");
    }
}
