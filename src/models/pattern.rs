//! Shift pattern model.
//!
//! A [`ShiftPattern`] describes how rest days recur for one shift type code.
//! Patterns are read from configuration or supplied by the backing store and
//! are never mutated by the calendar.

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Default length of a manual cycle, in days.
pub const DEFAULT_MANUAL_CYCLE_DAYS: u32 = 28;

fn default_cycle_days() -> u32 {
    DEFAULT_MANUAL_CYCLE_DAYS
}

/// The rest days of one week inside a rotating cycle.
///
/// Weekday indices run from 0 (Sunday) to 6 (Saturday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationWeek {
    /// Weekday indices that are rest days during this week of the cycle.
    pub off_days: Vec<u32>,
}

impl RotationWeek {
    /// Creates a rotation week from its rest weekday indices.
    pub fn new(off_days: Vec<u32>) -> Self {
        Self { off_days }
    }
}

/// How rest days recur for a shift type.
///
/// Serialized with a `type` tag. Any tag other than `fixed`, `rotating` or
/// `manual` deserializes to [`ShiftPattern::Unrecognized`], which the
/// calendar always treats as a working day.
///
/// # Example
///
/// ```
/// use shift_calendar::models::ShiftPattern;
///
/// let pattern: ShiftPattern =
///     serde_json::from_str(r#"{"type": "fixed", "off_days": [0, 6]}"#).unwrap();
/// assert_eq!(pattern, ShiftPattern::Fixed { off_days: vec![0, 6] });
///
/// let unknown: ShiftPattern = serde_json::from_str(r#"{"type": "lunar"}"#).unwrap();
/// assert_eq!(unknown, ShiftPattern::Unrecognized);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShiftPattern {
    /// The same weekdays are rest days every week.
    Fixed {
        /// Weekday indices (0=Sunday..6=Saturday) that are always rest days.
        off_days: Vec<u32>,
    },
    /// A cycle of `cycle` weeks, each with its own rest weekdays.
    Rotating {
        /// Number of weeks in the cycle.
        cycle: u32,
        /// One entry per week of the cycle.
        weeks: Vec<RotationWeek>,
    },
    /// A cycle of `cycle_days` days whose rest days come from a per-staff
    /// [`SpecialTemplate`](crate::models::SpecialTemplate).
    Manual {
        /// Number of days in the cycle.
        #[serde(default = "default_cycle_days")]
        cycle_days: u32,
    },
    /// A pattern kind this crate does not know about.
    #[serde(other)]
    Unrecognized,
}

impl ShiftPattern {
    /// Returns the serialized kind name, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ShiftPattern::Fixed { .. } => "fixed",
            ShiftPattern::Rotating { .. } => "rotating",
            ShiftPattern::Manual { .. } => "manual",
            ShiftPattern::Unrecognized => "unrecognized",
        }
    }

    /// Returns true if evaluating this pattern needs a special template.
    pub fn requires_template(&self) -> bool {
        matches!(self, ShiftPattern::Manual { .. })
    }

    /// Checks the structural invariants of the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPattern`] when:
    /// - a weekday index is outside `0..=6`
    /// - a rotating cycle is zero or does not match the number of weeks
    /// - a manual cycle is zero
    /// - the pattern kind is unrecognized
    pub fn validate(&self, code: &str) -> CalendarResult<()> {
        let invalid = |message: String| CalendarError::InvalidPattern {
            code: code.to_string(),
            message,
        };

        match self {
            ShiftPattern::Fixed { off_days } => check_weekdays(off_days).map_err(invalid),
            ShiftPattern::Rotating { cycle, weeks } => {
                if *cycle == 0 {
                    return Err(invalid("rotating cycle must be at least 1 week".to_string()));
                }
                if weeks.len() != *cycle as usize {
                    return Err(invalid(format!(
                        "cycle is {} but {} weeks are defined",
                        cycle,
                        weeks.len()
                    )));
                }
                for week in weeks {
                    check_weekdays(&week.off_days).map_err(invalid)?;
                }
                Ok(())
            }
            ShiftPattern::Manual { cycle_days } => {
                if *cycle_days == 0 {
                    Err(invalid("manual cycle must be at least 1 day".to_string()))
                } else {
                    Ok(())
                }
            }
            ShiftPattern::Unrecognized => Err(invalid("unrecognized pattern type".to_string())),
        }
    }
}

fn check_weekdays(off_days: &[u32]) -> Result<(), String> {
    match off_days.iter().find(|day| **day > 6) {
        Some(day) => Err(format!("weekday index {} is outside 0..=6", day)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rotating_pattern() {
        let yaml = r#"
type: rotating
cycle: 2
weeks:
  - off_days: [3, 0]
  - off_days: [5, 6]
"#;
        let pattern: ShiftPattern = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            pattern,
            ShiftPattern::Rotating {
                cycle: 2,
                weeks: vec![RotationWeek::new(vec![3, 0]), RotationWeek::new(vec![5, 6])],
            }
        );
    }

    #[test]
    fn test_manual_cycle_defaults_to_28_days() {
        let pattern: ShiftPattern = serde_json::from_str(r#"{"type": "manual"}"#).unwrap();
        assert_eq!(pattern, ShiftPattern::Manual { cycle_days: 28 });
    }

    #[test]
    fn test_unknown_type_is_unrecognized() {
        let pattern: ShiftPattern =
            serde_json::from_str(r#"{"type": "biweekly", "off_days": [1]}"#).unwrap();
        assert_eq!(pattern, ShiftPattern::Unrecognized);
        assert_eq!(pattern.kind(), "unrecognized");
    }

    #[test]
    fn test_serialize_fixed_pattern_uses_type_tag() {
        let pattern = ShiftPattern::Fixed {
            off_days: vec![0, 6],
        };
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, r#"{"type":"fixed","off_days":[0,6]}"#);
    }

    #[test]
    fn test_validate_accepts_well_formed_patterns() {
        assert!(
            ShiftPattern::Fixed {
                off_days: vec![0, 6]
            }
            .validate("5x2")
            .is_ok()
        );
        assert!(
            ShiftPattern::Rotating {
                cycle: 1,
                weeks: vec![RotationWeek::new(vec![])],
            }
            .validate("r1")
            .is_ok()
        );
        assert!(ShiftPattern::Manual { cycle_days: 28 }.validate("m").is_ok());
    }

    #[test]
    fn test_validate_rejects_weekday_out_of_range() {
        let err = ShiftPattern::Fixed { off_days: vec![7] }
            .validate("bad")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid shift pattern 'bad': weekday index 7 is outside 0..=6"
        );
    }

    #[test]
    fn test_validate_rejects_cycle_week_mismatch() {
        let err = ShiftPattern::Rotating {
            cycle: 3,
            weeks: vec![RotationWeek::new(vec![0]), RotationWeek::new(vec![6])],
        }
        .validate("rotativo_3s")
        .unwrap_err();
        assert!(err.to_string().contains("cycle is 3 but 2 weeks are defined"));
    }

    #[test]
    fn test_validate_rejects_zero_cycles() {
        assert!(
            ShiftPattern::Rotating {
                cycle: 0,
                weeks: vec![]
            }
            .validate("r0")
            .is_err()
        );
        assert!(ShiftPattern::Manual { cycle_days: 0 }.validate("m0").is_err());
    }

    #[test]
    fn test_validate_rejects_unrecognized() {
        assert!(ShiftPattern::Unrecognized.validate("x").is_err());
    }

    #[test]
    fn test_only_manual_requires_template() {
        assert!(ShiftPattern::Manual { cycle_days: 28 }.requires_template());
        assert!(!ShiftPattern::Fixed { off_days: vec![] }.requires_template());
        assert!(!ShiftPattern::Unrecognized.requires_template());
    }
}
