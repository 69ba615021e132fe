//! Calendar logic for the shift calendar.
//!
//! This module contains the rest-day calculator anchored to a reference
//! Monday, the reduced-hour rule and week helpers, day status
//! classification, month grids for rendering and export, pattern lookup with
//! built-in fallbacks, and the per-staff roster that ties them together.

mod catalog;
mod day_status;
mod month_grid;
mod roster;
mod shift_calendar;
mod week;

pub use catalog::{DefaultPatternProvider, PatternCatalog, PatternSource, ResolvedPattern};
pub use day_status::{DayCell, DayStatus};
pub use month_grid::{GridCell, MonthGrid, MonthTotals, month_bounds};
pub use roster::{Roster, RosterData, RosterWarning, StaffMonth};
pub use shift_calendar::{DEFAULT_REFERENCE_DATE, ShiftCalendar};
pub use week::{
    REDUCED_HOUR_OFFSETS, is_past_date, is_past_date_on, is_reduced_hour_day, is_today,
    is_today_on, parse_calendar_date, reduced_hour_dates, today, week_dates, week_start,
};
