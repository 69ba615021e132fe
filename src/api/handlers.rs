//! HTTP request handlers for the shift calendar API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashSet;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::{RosterData, month_bounds, reduced_hour_dates, today, week_dates, week_start};
use crate::error::{CalendarError, CalendarResult};

use super::request::{MonthRosterRequest, WeekRequest};
use super::response::{ApiError, ApiErrorResponse, MonthRosterResponse, WeekResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/week", post(week_handler))
        .route("/roster/month", post(month_roster_handler))
        .with_state(state)
}

/// Handler for POST /week.
///
/// Returns the Monday-to-Sunday week containing the requested date and its
/// reduced-hour dates.
async fn week_handler(payload: Result<Json<WeekRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing week request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match build_week(request.date) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Week lookup failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Computes the week containing `date`.
fn build_week(date: NaiveDate) -> CalendarResult<WeekResponse> {
    let out_of_range = || CalendarError::DateOutOfRange { date };
    let start = week_start(date).ok_or_else(out_of_range)?;
    let dates = week_dates(start).ok_or_else(out_of_range)?;
    let reduced = reduced_hour_dates(start).ok_or_else(out_of_range)?;

    Ok(WeekResponse {
        week_start: start,
        dates: dates.to_vec(),
        reduced_hour_dates: reduced.to_vec(),
    })
}

/// Handler for POST /roster/month.
///
/// Lays out a month for every requested staff member. Pattern problems do
/// not fail the request; they are reported as warnings per staff member.
async fn month_roster_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthRosterRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month roster request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match build_month_roster(&state, &request) {
        Ok(response) => {
            let warnings: usize = response.staff.iter().map(|s| s.warnings.len()).sum();
            info!(
                correlation_id = %correlation_id,
                year = request.year,
                month = request.month,
                staff_count = response.staff.len(),
                warnings,
                duration_us = start_time.elapsed().as_micros(),
                "Month roster completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Month roster failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Computes every requested staff member's month.
fn build_month_roster(
    state: &AppState,
    request: &MonthRosterRequest,
) -> CalendarResult<MonthRosterResponse> {
    month_bounds(request.year, request.month)?;

    // Templates and overrides are indexed by staff id
    let mut seen = HashSet::new();
    if let Some(duplicate) = request.staff.iter().find(|s| !seen.insert(s.staff_id.as_str())) {
        return Err(CalendarError::DuplicateStaff {
            staff_id: duplicate.staff_id.clone(),
        });
    }

    let data = RosterData::new(
        request.staff.iter().filter_map(|s| s.template()),
        request.staff.iter().flat_map(|s| s.date_overrides()),
    );
    let roster = state.roster();
    let today = today();

    let staff = request
        .staff
        .iter()
        .map(|s| roster.staff_month(&s.assignment(), &data, request.year, request.month, today))
        .collect::<CalendarResult<Vec<_>>>()?;

    Ok(MonthRosterResponse {
        year: request.year,
        month: request.month,
        staff,
    })
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}
