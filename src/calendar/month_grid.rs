//! Month grid layout for rendering and export.
//!
//! A month is laid out as whole Monday-to-Sunday weeks, so the first and last
//! rows usually include days of the neighbouring months. Those padding cells
//! are computed like any other but flagged with `in_month = false` and left
//! out of the totals.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

use super::day_status::{DayCell, DayStatus};
use super::week::{week_dates, week_start};

/// A day cell positioned in a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// The day itself.
    #[serde(flatten)]
    pub cell: DayCell,
    /// Whether the date belongs to the grid's month.
    pub in_month: bool,
}

/// Aggregates over the in-month cells of a grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotals {
    /// Number of ordinary working days.
    pub working_days: u32,
    /// Number of reduced-hour working days.
    pub reduced_days: u32,
    /// Number of rest days.
    pub rest_days: u32,
    /// Sum of scheduled hours.
    pub scheduled_hours: Decimal,
}

impl MonthTotals {
    fn add(&mut self, cell: &DayCell) {
        match cell.status {
            DayStatus::Work => self.working_days += 1,
            DayStatus::Reduced => self.reduced_days += 1,
            DayStatus::Rest => self.rest_days += 1,
        }
        self.scheduled_hours += cell.scheduled_hours;
    }
}

/// A calendar month as rows of seven cells, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// The year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// Weeks of the grid, each Monday to Sunday.
    pub weeks: Vec<Vec<GridCell>>,
    /// Totals over the in-month days.
    pub totals: MonthTotals,
}

/// Returns the first and last day of a month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if the pair does not name a month
/// chrono can represent.
pub fn month_bounds(year: i32, month: u32) -> CalendarResult<(NaiveDate, NaiveDate)> {
    let invalid = || CalendarError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let last = first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(invalid)?;
    Ok((first, last))
}

impl MonthGrid {
    /// Lays out a month, asking `cell_for` for every date in the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calendar::calendar::{DayCell, DayStatus, MonthGrid};
    /// use shift_calendar::config::WorkingHours;
    /// use chrono::NaiveDate;
    ///
    /// let hours = WorkingHours::default();
    /// let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    /// let grid = MonthGrid::build(2026, 2, |date| {
    ///     DayCell::new(date, DayStatus::Work, false, &hours, today)
    /// })
    /// .unwrap();
    ///
    /// // February 2026 starts on a Sunday and ends on a Saturday
    /// assert_eq!(grid.weeks.len(), 5);
    /// assert_eq!(grid.totals.working_days, 28);
    /// ```
    pub fn build<F>(year: i32, month: u32, mut cell_for: F) -> CalendarResult<Self>
    where
        F: FnMut(NaiveDate) -> DayCell,
    {
        let (first, last) = month_bounds(year, month)?;
        let invalid = || CalendarError::InvalidMonth { year, month };
        let mut weeks = Vec::new();
        let mut totals = MonthTotals::default();
        let mut monday = week_start(first).ok_or_else(invalid)?;

        while monday <= last {
            let row: Vec<GridCell> = week_dates(monday)
                .ok_or_else(invalid)?
                .into_iter()
                .map(|date| {
                    let cell = cell_for(date);
                    let in_month = date.year() == year && date.month() == month;
                    if in_month {
                        totals.add(&cell);
                    }
                    GridCell { cell, in_month }
                })
                .collect();
            weeks.push(row);

            monday = match monday.checked_add_days(Days::new(7)) {
                Some(next) => next,
                None => break,
            };
        }

        Ok(Self {
            year,
            month,
            weeks,
            totals,
        })
    }

    /// Iterates over the cells that belong to the month, in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks
            .iter()
            .flatten()
            .filter(|grid_cell| grid_cell.in_month)
            .map(|grid_cell| &grid_cell.cell)
    }
}
