//! Staff-scoped calendar inputs.
//!
//! Assignments, special templates and date overrides are fetched from the
//! backing store by the caller and handed to the calendar as plain values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Phase of a rotating shift.
///
/// `Contraturno` (counter-shift) runs one week ahead of `Principal` in the
/// rotation so two crews covering the same role are staggered. The variant
/// has no effect on fixed or manual patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantCode {
    /// The main phase of the rotation.
    #[default]
    Principal,
    /// The counter-shift phase, offset by one week.
    Contraturno,
}

/// Links a staff member to a shift type and rotation phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffShiftAssignment {
    /// Identifier of the staff member.
    pub staff_id: String,
    /// Shift type code, resolved to a [`ShiftPattern`](crate::models::ShiftPattern).
    pub shift_type_code: String,
    /// Rotation phase.
    #[serde(default)]
    pub variant: VariantCode,
}

impl StaffShiftAssignment {
    /// Creates an assignment.
    pub fn new(
        staff_id: impl Into<String>,
        shift_type_code: impl Into<String>,
        variant: VariantCode,
    ) -> Self {
        Self {
            staff_id: staff_id.into(),
            shift_type_code: shift_type_code.into(),
            variant,
        }
    }
}

/// Per-staff rest days for a manual pattern.
///
/// `off_days` are day-in-cycle indices counted from the reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTemplate {
    /// Identifier of the staff member this template belongs to.
    pub staff_id: String,
    /// Day-in-cycle indices that are rest days.
    pub off_days: Vec<u32>,
}

impl SpecialTemplate {
    /// Creates a special template.
    pub fn new(staff_id: impl Into<String>, off_days: Vec<u32>) -> Self {
        Self {
            staff_id: staff_id.into(),
            off_days,
        }
    }

    /// Returns true if the given day of the cycle is a rest day.
    pub fn is_off(&self, day_in_cycle: u32) -> bool {
        self.off_days.contains(&day_in_cycle)
    }
}

/// The status a date override forces.
///
/// Any kind other than `rest` counts as a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideKind {
    /// The day is forced to rest.
    Rest,
    /// The day is forced to work.
    Work,
    /// Any other override type stored by the backend.
    #[serde(other)]
    Other,
}

/// An explicit per-staff, per-date status that wins over the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOverride {
    /// Identifier of the staff member.
    pub staff_id: String,
    /// The overridden date.
    pub date: NaiveDate,
    /// The forced status.
    pub kind: OverrideKind,
}

impl DateOverride {
    /// Creates a date override.
    pub fn new(staff_id: impl Into<String>, date: NaiveDate, kind: OverrideKind) -> Self {
        Self {
            staff_id: staff_id.into(),
            date,
            kind,
        }
    }

    /// Returns true if the override forces a rest day.
    pub fn is_rest(&self) -> bool {
        self.kind == OverrideKind::Rest
    }
}
