//! Week and date helpers.
//!
//! Weeks run Monday to Sunday. The statutory reduced-hour rule shortens the
//! Tuesday and Thursday of every week by one hour, independently of whether
//! those days are rest days for a given staff member.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

/// Offsets from Monday of the two reduced-hour days (Tuesday, Thursday).
pub const REDUCED_HOUR_OFFSETS: [u64; 2] = [1, 3];

/// Returns the Monday on or before `date`.
///
/// Returns `None` when that Monday falls before the first representable date.
///
/// # Example
///
/// ```
/// use shift_calendar::calendar::week_start;
/// use chrono::NaiveDate;
///
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 8).unwrap();
/// assert_eq!(week_start(thursday), NaiveDate::from_ymd_opt(2026, 1, 5));
/// ```
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

/// Returns the seven consecutive dates starting at `week_start`.
///
/// Returns `None` if the week runs past the last representable date.
pub fn week_dates(week_start: NaiveDate) -> Option<[NaiveDate; 7]> {
    let mut dates = [week_start; 7];
    for (offset, slot) in (0u64..).zip(dates.iter_mut()).skip(1) {
        *slot = week_start.checked_add_days(Days::new(offset))?;
    }
    Some(dates)
}

/// Returns the reduced-hour dates (Tuesday and Thursday) of the week that
/// starts on `week_start`, or `None` past the last representable date.
///
/// # Example
///
/// ```
/// use shift_calendar::calendar::reduced_hour_dates;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let [tuesday, thursday] = reduced_hour_dates(monday).unwrap();
/// assert_eq!(tuesday, NaiveDate::from_ymd_opt(2026, 1, 6).unwrap());
/// assert_eq!(thursday, NaiveDate::from_ymd_opt(2026, 1, 8).unwrap());
/// ```
pub fn reduced_hour_dates(week_start: NaiveDate) -> Option<[NaiveDate; 2]> {
    let [tuesday, thursday] = REDUCED_HOUR_OFFSETS;
    Some([
        week_start.checked_add_days(Days::new(tuesday))?,
        week_start.checked_add_days(Days::new(thursday))?,
    ])
}

/// Returns true if `date` is a reduced-hour day of its own week.
pub fn is_reduced_hour_day(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Tue | Weekday::Thu)
}

/// Returns the current date on the local machine clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns true if `date` is today on the local machine clock.
pub fn is_today(date: NaiveDate) -> bool {
    is_today_on(date, today())
}

/// Returns true if `date` is before today on the local machine clock.
pub fn is_past_date(date: NaiveDate) -> bool {
    is_past_date_on(date, today())
}

/// Returns true if `date` equals `today`.
pub fn is_today_on(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Returns true if `date` is strictly before `today`.
pub fn is_past_date_on(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Normalizes a date string to a calendar date.
///
/// Only the leading `YYYY-MM-DD` is read, so full timestamps such as
/// `2026-01-05T12:00:00Z` resolve to their date part. Malformed input yields
/// `None`.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
