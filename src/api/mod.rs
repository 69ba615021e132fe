//! HTTP API module for the shift calendar.
//!
//! This module provides the REST endpoints for week lookups and per-staff
//! month rosters.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MonthRosterRequest, OverrideRequest, StaffRequest, WeekRequest};
pub use response::{ApiError, ApiErrorResponse, MonthRosterResponse, WeekResponse};
pub use state::AppState;
