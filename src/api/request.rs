//! Request types for the shift calendar API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DateOverride, OverrideKind, SpecialTemplate, StaffShiftAssignment, VariantCode};

/// Request body for the `/week` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekRequest {
    /// Any date inside the week of interest.
    pub date: NaiveDate,
}

/// Request body for the `/roster/month` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRosterRequest {
    /// The year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// Staff members to lay out.
    pub staff: Vec<StaffRequest>,
}

/// One staff member in a month roster request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRequest {
    /// Identifier of the staff member.
    pub staff_id: String,
    /// The assigned shift type code.
    pub shift_type_code: String,
    /// The rotation phase.
    #[serde(default)]
    pub variant: VariantCode,
    /// Day-in-cycle rest days for manual patterns.
    #[serde(default)]
    pub special_template: Option<Vec<u32>>,
    /// Date overrides for this staff member.
    #[serde(default)]
    pub overrides: Vec<OverrideRequest>,
}

/// A date override in a month roster request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideRequest {
    /// The overridden date.
    pub date: NaiveDate,
    /// The forced status.
    pub kind: OverrideKind,
}

impl StaffRequest {
    /// Returns the assignment described by this request.
    pub fn assignment(&self) -> StaffShiftAssignment {
        StaffShiftAssignment::new(&self.staff_id, &self.shift_type_code, self.variant)
    }

    /// Returns the special template, if one was sent.
    pub fn template(&self) -> Option<SpecialTemplate> {
        self.special_template
            .as_ref()
            .map(|off_days| SpecialTemplate::new(&self.staff_id, off_days.clone()))
    }

    /// Returns the date overrides scoped to this staff member.
    pub fn date_overrides(&self) -> impl Iterator<Item = DateOverride> + '_ {
        self.overrides
            .iter()
            .map(|o| DateOverride::new(&self.staff_id, o.date, o.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_staff_request() {
        let json = r#"{"staff_id": "c-101", "shift_type_code": "5x2"}"#;
        let request: StaffRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.variant, VariantCode::Principal);
        assert!(request.template().is_none());
        assert_eq!(request.date_overrides().count(), 0);
    }

    #[test]
    fn test_staff_request_conversions() {
        let json = r#"{
            "staff_id": "c-104",
            "shift_type_code": "especial_28",
            "variant": "contraturno",
            "special_template": [0, 7],
            "overrides": [{"date": "2026-01-07", "kind": "rest"}]
        }"#;
        let request: StaffRequest = serde_json::from_str(json).unwrap();

        let assignment = request.assignment();
        assert_eq!(assignment.staff_id, "c-104");
        assert_eq!(assignment.variant, VariantCode::Contraturno);

        let template = request.template().unwrap();
        assert_eq!(template.staff_id, "c-104");
        assert_eq!(template.off_days, vec![0, 7]);

        let overrides: Vec<DateOverride> = request.date_overrides().collect();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides[0].staff_id, "c-104");
        assert!(overrides[0].is_rest());
    }
}
