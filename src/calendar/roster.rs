//! Per-staff month calendars.
//!
//! [`Roster`] ties the calculator to the data a caller fetched from the
//! backing store: it resolves each staff member's pattern once, looks up the
//! member's template and overrides per date, and records the data problems
//! it had to work around as [`RosterWarning`]s instead of failing.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::WorkingHours;
use crate::error::CalendarResult;
use crate::models::{DateOverride, ShiftPattern, SpecialTemplate, StaffShiftAssignment, VariantCode};

use super::catalog::{PatternCatalog, PatternSource};
use super::day_status::DayCell;
use super::month_grid::MonthGrid;
use super::shift_calendar::ShiftCalendar;

static UNRESOLVED: ShiftPattern = ShiftPattern::Unrecognized;

/// A data-quality problem met while building a staff calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum RosterWarning {
    /// No pattern exists for the shift type code; every day is a working day.
    PatternNotFound {
        /// The unresolved shift type code.
        shift_type_code: String,
    },
    /// The pattern came from the built-in fallback table.
    DefaultPatternUsed {
        /// The shift type code.
        shift_type_code: String,
    },
    /// The pattern kind is unknown; every day is a working day.
    UnrecognizedPattern {
        /// The shift type code.
        shift_type_code: String,
    },
    /// A manual pattern has no special template for the staff member.
    TemplateMissing {
        /// The shift type code.
        shift_type_code: String,
    },
}

impl std::fmt::Display for RosterWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterWarning::PatternNotFound { shift_type_code } => {
                write!(f, "No pattern found for '{}', treating every day as working", shift_type_code)
            }
            RosterWarning::DefaultPatternUsed { shift_type_code } => {
                write!(f, "No configured pattern for '{}', using default", shift_type_code)
            }
            RosterWarning::UnrecognizedPattern { shift_type_code } => {
                write!(f, "Pattern for '{}' has an unrecognized type", shift_type_code)
            }
            RosterWarning::TemplateMissing { shift_type_code } => {
                write!(f, "Manual pattern '{}' has no special template", shift_type_code)
            }
        }
    }
}

/// Templates and overrides indexed by staff member.
#[derive(Debug, Clone, Default)]
pub struct RosterData {
    templates: HashMap<String, SpecialTemplate>,
    overrides: HashMap<String, HashMap<NaiveDate, DateOverride>>,
}

impl RosterData {
    /// Indexes templates and overrides.
    ///
    /// A later template or override for the same staff member (and date)
    /// replaces an earlier one.
    pub fn new<T, O>(templates: T, overrides: O) -> Self
    where
        T: IntoIterator<Item = SpecialTemplate>,
        O: IntoIterator<Item = DateOverride>,
    {
        let templates = templates
            .into_iter()
            .map(|template| (template.staff_id.clone(), template))
            .collect();

        let mut by_staff: HashMap<String, HashMap<NaiveDate, DateOverride>> = HashMap::new();
        for date_override in overrides {
            by_staff
                .entry(date_override.staff_id.clone())
                .or_default()
                .insert(date_override.date, date_override);
        }

        Self {
            templates,
            overrides: by_staff,
        }
    }

    /// Returns the special template of a staff member.
    pub fn template_for(&self, staff_id: &str) -> Option<&SpecialTemplate> {
        self.templates.get(staff_id)
    }

    /// Returns the override of a staff member for a date.
    pub fn override_for(&self, staff_id: &str, date: NaiveDate) -> Option<&DateOverride> {
        self.overrides.get(staff_id)?.get(&date)
    }
}

/// A staff member's month, with the warnings raised while computing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMonth {
    /// Identifier of the staff member.
    pub staff_id: String,
    /// The assigned shift type code.
    pub shift_type_code: String,
    /// The assigned rotation phase.
    pub variant: VariantCode,
    /// Where the pattern came from, if one was found.
    pub pattern_source: Option<PatternSource>,
    /// The month grid.
    pub grid: MonthGrid,
    /// Data-quality warnings.
    #[serde(default)]
    pub warnings: Vec<RosterWarning>,
}

/// Builds staff calendars from a calculator, a pattern catalog and working
/// hours.
#[derive(Debug, Clone, Copy)]
pub struct Roster<'a> {
    calendar: &'a ShiftCalendar,
    catalog: &'a PatternCatalog,
    hours: &'a WorkingHours,
}

impl<'a> Roster<'a> {
    /// Creates a roster over borrowed configuration.
    pub fn new(calendar: &'a ShiftCalendar, catalog: &'a PatternCatalog, hours: &'a WorkingHours) -> Self {
        Self {
            calendar,
            catalog,
            hours,
        }
    }

    /// Resolves the pattern for an assignment and lists what was off about it.
    ///
    /// A missing pattern resolves to [`ShiftPattern::Unrecognized`] so every
    /// day evaluates as a working day.
    pub fn resolve(
        &self,
        assignment: &StaffShiftAssignment,
        data: &RosterData,
    ) -> (&'a ShiftPattern, Option<PatternSource>, Vec<RosterWarning>) {
        let code = &assignment.shift_type_code;
        let mut warnings = Vec::new();

        let (pattern, source) = match self.catalog.resolve(code) {
            Some(resolved) => (resolved.pattern, Some(resolved.source)),
            None => {
                warn!(
                    staff_id = %assignment.staff_id,
                    shift_type_code = %code,
                    "No pattern found, treating every day as working"
                );
                warnings.push(RosterWarning::PatternNotFound {
                    shift_type_code: code.clone(),
                });
                (&UNRESOLVED, None)
            }
        };

        if source == Some(PatternSource::Default) {
            warnings.push(RosterWarning::DefaultPatternUsed {
                shift_type_code: code.clone(),
            });
        }

        if source.is_some() && *pattern == ShiftPattern::Unrecognized {
            warn!(
                staff_id = %assignment.staff_id,
                shift_type_code = %code,
                "Unrecognized pattern type"
            );
            warnings.push(RosterWarning::UnrecognizedPattern {
                shift_type_code: code.clone(),
            });
        }

        if pattern.requires_template() && data.template_for(&assignment.staff_id).is_none() {
            warn!(
                staff_id = %assignment.staff_id,
                shift_type_code = %code,
                "Manual pattern without special template"
            );
            warnings.push(RosterWarning::TemplateMissing {
                shift_type_code: code.clone(),
            });
        }

        (pattern, source, warnings)
    }

    /// Computes one day for a staff member against an already resolved
    /// pattern.
    pub fn day_cell(
        &self,
        date: NaiveDate,
        assignment: &StaffShiftAssignment,
        pattern: &ShiftPattern,
        data: &RosterData,
        today: NaiveDate,
    ) -> DayCell {
        let template = data.template_for(&assignment.staff_id);
        let date_override = data.override_for(&assignment.staff_id, date);
        let status = self
            .calendar
            .day_status(date, assignment, pattern, template, date_override);
        DayCell::new(date, status, date_override.is_some(), self.hours, today)
    }

    /// Computes a staff member's month grid.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`](crate::error::CalendarError::InvalidMonth)
    /// for an invalid year/month. Pattern problems never fail; they show up
    /// as warnings.
    pub fn staff_month(
        &self,
        assignment: &StaffShiftAssignment,
        data: &RosterData,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> CalendarResult<StaffMonth> {
        let (pattern, pattern_source, warnings) = self.resolve(assignment, data);
        let grid = MonthGrid::build(year, month, |date| {
            self.day_cell(date, assignment, pattern, data, today)
        })?;

        Ok(StaffMonth {
            staff_id: assignment.staff_id.clone(),
            shift_type_code: assignment.shift_type_code.clone(),
            variant: assignment.variant,
            pattern_source,
            grid,
            warnings,
        })
    }
}
