//! Core data models for the shift calendar.
//!
//! This module contains the shift patterns and staff-scoped inputs consumed
//! by the calendar.

mod pattern;
mod staff;

pub use pattern::{DEFAULT_MANUAL_CYCLE_DAYS, RotationWeek, ShiftPattern};
pub use staff::{DateOverride, OverrideKind, SpecialTemplate, StaffShiftAssignment, VariantCode};
