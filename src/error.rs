//! Error types for the shift calendar.
//!
//! The rest-day calculator itself never fails; these errors come from the
//! layers around it (configuration loading, pattern validation, month
//! lookups and the HTTP API).

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the shift calendar.
///
/// # Example
///
/// ```
/// use shift_calendar::error::CalendarError;
///
/// let error = CalendarError::ConfigNotFound {
///     path: "/missing/calendar.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calendar.yaml");
/// ```
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No pattern is known for a shift type code.
    #[error("Shift pattern not found: {code}")]
    PatternNotFound {
        /// The shift type code that was looked up.
        code: String,
    },

    /// A shift pattern broke one of its structural invariants.
    #[error("Invalid shift pattern '{code}': {message}")]
    InvalidPattern {
        /// The shift type code of the offending pattern.
        code: String,
        /// What was wrong with it.
        message: String,
    },

    /// The reference date used to anchor cycles was not a Monday.
    #[error("Reference date {date} is not a Monday")]
    InvalidReferenceDate {
        /// The rejected date.
        date: NaiveDate,
    },

    /// A year/month pair does not name a real calendar month.
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month (1-12 expected).
        month: u32,
    },

    /// The week around a date runs outside the representable date range.
    #[error("Date {date} is outside the supported calendar range")]
    DateOutOfRange {
        /// The requested date.
        date: NaiveDate,
    },

    /// The same staff member appears more than once in a roster.
    #[error("Staff member '{staff_id}' appears more than once")]
    DuplicateStaff {
        /// The repeated staff identifier.
        staff_id: String,
    },
}

/// A type alias for Results that return CalendarError.
pub type CalendarResult<T> = Result<T, CalendarError>;
