//! Display state of a single calendar day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::WorkingHours;

use super::week::{is_past_date_on, is_today_on};

/// What a staff member does on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// An ordinary working day.
    Work,
    /// A rest day.
    Rest,
    /// A working day shortened by the reduced-hour rule.
    Reduced,
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Work => write!(f, "Work"),
            DayStatus::Rest => write!(f, "Rest"),
            DayStatus::Reduced => write!(f, "Reduced"),
        }
    }
}

/// One day of one staff member's calendar, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// The calendar date.
    pub date: NaiveDate,
    /// The computed status.
    pub status: DayStatus,
    /// Hours scheduled for the day.
    pub scheduled_hours: Decimal,
    /// Whether a date override decided the status.
    pub overridden: bool,
    /// Whether the date is today.
    pub is_today: bool,
    /// Whether the date is before today.
    pub is_past: bool,
}

impl DayCell {
    /// Builds a cell, deriving hours from `hours` and flags from `today`.
    pub fn new(
        date: NaiveDate,
        status: DayStatus,
        overridden: bool,
        hours: &WorkingHours,
        today: NaiveDate,
    ) -> Self {
        Self {
            date,
            status,
            scheduled_hours: hours.hours_for(status),
            overridden,
            is_today: is_today_on(date, today),
            is_past: is_past_date_on(date, today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_day_cell_flags() {
        let hours = WorkingHours::default();
        let today = make_date("2026-01-07");

        let cell = DayCell::new(make_date("2026-01-06"), DayStatus::Reduced, false, &hours, today);
        assert!(cell.is_past);
        assert!(!cell.is_today);
        assert_eq!(cell.scheduled_hours, Decimal::new(75, 1));

        let cell = DayCell::new(today, DayStatus::Rest, true, &hours, today);
        assert!(cell.is_today);
        assert!(cell.overridden);
        assert_eq!(cell.scheduled_hours, Decimal::ZERO);
    }

    #[test]
    fn test_day_status_display() {
        assert_eq!(format!("{}", DayStatus::Work), "Work");
        assert_eq!(format!("{}", DayStatus::Rest), "Rest");
        assert_eq!(format!("{}", DayStatus::Reduced), "Reduced");
    }

    #[test]
    fn test_day_cell_serialization() {
        let cell = DayCell::new(
            make_date("2026-01-05"),
            DayStatus::Work,
            false,
            &WorkingHours::default(),
            make_date("2026-01-01"),
        );
        let json = serde_json::to_string(&cell).unwrap();
        assert!(json.contains("\"status\":\"work\""));
        assert!(json.contains("\"scheduled_hours\":\"8.5\""));

        let back: DayCell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
    }
}
