//! Rest-day calculation for rotating shift patterns.
//!
//! [`ShiftCalendar`] holds the reference Monday from which every week and
//! cycle index is counted and decides, per staff member and date, whether the
//! date is a rest day. It is a pure calculator: no I/O, no caching and no
//! shared mutable state, so it can be called once per cell of a rendering
//! grid from any thread.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{CalendarError, CalendarResult};
use crate::models::{DateOverride, ShiftPattern, SpecialTemplate, StaffShiftAssignment, VariantCode};

use super::day_status::DayStatus;
use super::week::is_reduced_hour_day;

/// The Monday all rotations are anchored to unless another is configured.
pub const DEFAULT_REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 12, 29) {
    Some(date) => date,
    None => panic!("default reference date must be a valid date"),
};

/// Off-day calculator anchored to a reference Monday.
///
/// # Example
///
/// ```
/// use shift_calendar::calendar::ShiftCalendar;
/// use shift_calendar::models::{ShiftPattern, StaffShiftAssignment, VariantCode};
/// use chrono::NaiveDate;
///
/// let calendar = ShiftCalendar::default();
/// let pattern = ShiftPattern::Fixed { off_days: vec![0, 6] };
/// let assignment = StaffShiftAssignment::new("c-101", "5x2", VariantCode::Principal);
///
/// // 2026-01-03 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
/// assert!(calendar.is_rest_day(saturday, &assignment, &pattern, None, None));
///
/// // 2026-01-05 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// assert!(!calendar.is_rest_day(monday, &assignment, &pattern, None, None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCalendar {
    reference_date: NaiveDate,
}

impl Default for ShiftCalendar {
    fn default() -> Self {
        Self {
            reference_date: DEFAULT_REFERENCE_DATE,
        }
    }
}

impl ShiftCalendar {
    /// Creates a calendar anchored to `reference_date`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidReferenceDate`] if the date is not a
    /// Monday.
    pub fn new(reference_date: NaiveDate) -> CalendarResult<Self> {
        if reference_date.weekday() != Weekday::Mon {
            return Err(CalendarError::InvalidReferenceDate {
                date: reference_date,
            });
        }
        Ok(Self { reference_date })
    }

    /// Returns the reference Monday.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Whole calendar days from the reference date to `date`.
    ///
    /// Negative for dates before the reference.
    pub fn days_since_reference(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.reference_date).num_days()
    }

    /// Index of the rotation week that applies to `date`.
    ///
    /// Whole weeks since the reference are floored, so dates before the
    /// reference still land in `0..cycle`. `Contraturno` moves one position
    /// further along the cycle. Returns `None` for a zero-length cycle.
    pub fn rotation_week_index(&self, date: NaiveDate, cycle: u32, variant: VariantCode) -> Option<usize> {
        if cycle == 0 {
            return None;
        }
        let cycle = i64::from(cycle);
        let weeks = self.days_since_reference(date).div_euclid(7);
        let mut index = weeks.rem_euclid(cycle);
        if variant == VariantCode::Contraturno {
            index = (index + 1) % cycle;
        }
        usize::try_from(index).ok()
    }

    /// Position of `date` inside a manual cycle of `cycle_days` days.
    ///
    /// Returns `None` for a zero-length cycle.
    pub fn day_in_cycle(&self, date: NaiveDate, cycle_days: u32) -> Option<u32> {
        if cycle_days == 0 {
            return None;
        }
        let day = self
            .days_since_reference(date)
            .rem_euclid(i64::from(cycle_days));
        u32::try_from(day).ok()
    }

    /// Returns true if `date` is a rest day for the assignment.
    ///
    /// An override decides on its own. Otherwise the pattern is evaluated:
    /// - fixed: the weekday is one of the pattern's rest weekdays
    /// - rotating: the weekday is a rest weekday of the applicable cycle week
    /// - manual: the day-in-cycle is listed in the staff member's template
    ///
    /// Missing templates, missing week entries and unrecognized patterns all
    /// resolve to a working day.
    pub fn is_rest_day(
        &self,
        date: NaiveDate,
        assignment: &StaffShiftAssignment,
        pattern: &ShiftPattern,
        special_template: Option<&SpecialTemplate>,
        date_override: Option<&DateOverride>,
    ) -> bool {
        if let Some(date_override) = date_override {
            return date_override.is_rest();
        }

        let weekday = date.weekday().num_days_from_sunday();
        match pattern {
            ShiftPattern::Fixed { off_days } => off_days.contains(&weekday),
            ShiftPattern::Rotating { cycle, weeks } => self
                .rotation_week_index(date, *cycle, assignment.variant)
                .and_then(|index| weeks.get(index))
                .is_some_and(|week| week.off_days.contains(&weekday)),
            ShiftPattern::Manual { cycle_days } => match special_template {
                Some(template) => self
                    .day_in_cycle(date, *cycle_days)
                    .is_some_and(|day| template.is_off(day)),
                None => false,
            },
            ShiftPattern::Unrecognized => false,
        }
    }

    /// Classifies `date` as rest, reduced-hour or ordinary working day.
    ///
    /// Rest takes precedence; a working Tuesday or Thursday is reduced. An
    /// unrecognized pattern is never reduced.
    pub fn day_status(
        &self,
        date: NaiveDate,
        assignment: &StaffShiftAssignment,
        pattern: &ShiftPattern,
        special_template: Option<&SpecialTemplate>,
        date_override: Option<&DateOverride>,
    ) -> DayStatus {
        if self.is_rest_day(date, assignment, pattern, special_template, date_override) {
            DayStatus::Rest
        } else if *pattern != ShiftPattern::Unrecognized && is_reduced_hour_day(date) {
            DayStatus::Reduced
        } else {
            DayStatus::Work
        }
    }
}
