//! Configuration types for the shift calendar.
//!
//! These structures are deserialized from the YAML files in a configuration
//! directory.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::calendar::{DEFAULT_REFERENCE_DATE, DayStatus};
use crate::models::ShiftPattern;

fn default_reference_date() -> NaiveDate {
    DEFAULT_REFERENCE_DATE
}

/// Scheduled hours for a day, by status.
///
/// A reduced-hour day is an ordinary day shortened by `reduction_hours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Hours scheduled on an ordinary working day.
    pub ordinary_daily_hours: Decimal,
    /// Hours removed on a reduced-hour day.
    pub reduction_hours: Decimal,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            ordinary_daily_hours: Decimal::new(85, 1),
            reduction_hours: Decimal::ONE,
        }
    }
}

impl WorkingHours {
    /// Returns the scheduled hours for a day with the given status.
    ///
    /// Rest days have no hours; reduced days never go below zero.
    pub fn hours_for(&self, status: DayStatus) -> Decimal {
        match status {
            DayStatus::Rest => Decimal::ZERO,
            DayStatus::Work => self.ordinary_daily_hours,
            DayStatus::Reduced => (self.ordinary_daily_hours - self.reduction_hours).max(Decimal::ZERO),
        }
    }
}

/// Contents of `calendar.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarSettings {
    /// The Monday every rotation is counted from.
    #[serde(default = "default_reference_date")]
    pub reference_date: NaiveDate,
    /// Scheduled hours per day.
    #[serde(default)]
    pub hours: WorkingHours,
}

/// Contents of `patterns.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternsConfig {
    /// Map of shift type code to pattern.
    pub patterns: HashMap<String, ShiftPattern>,
}

/// Complete calendar configuration.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    settings: CalendarSettings,
    patterns: HashMap<String, ShiftPattern>,
}

impl CalendarConfig {
    /// Creates a configuration from its parts.
    pub fn new(settings: CalendarSettings, patterns: HashMap<String, ShiftPattern>) -> Self {
        Self { settings, patterns }
    }

    /// Returns the calendar settings.
    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    /// Returns the configured patterns keyed by shift type code.
    pub fn patterns(&self) -> &HashMap<String, ShiftPattern> {
        &self.patterns
    }
}
