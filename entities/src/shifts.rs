use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShiftId(i64);

impl ShiftId {
    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ShiftId {
    fn from(value: i64) -> Self {
        ShiftId(value)
    }
}

impl std::fmt::Display for ShiftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Used for both the facility a shift is at and the skill it requires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityType {
    pub id: i64,
    pub name: String,
    /// Free form, whatever the server sends.
    pub color: String,
    pub abbreviation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedSpecialty {
    pub id: i64,
    pub specialty_id: i64,
    pub state_id: i64,
    pub name: String,
    pub abbreviation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub shift_id: ShiftId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Wall clock values as published by the facility. They carry no offset,
    /// so they are only meaningful next to `timezone`.
    pub normalized_start_date_time: NaiveDateTime,
    pub normalized_end_date_time: NaiveDateTime,
    pub timezone: String,
    pub premium_rate: bool,
    pub covid: bool,
    pub shift_kind: String,
    /// Miles from the searched address.
    pub within_distance: Option<i64>,
    pub facility_type: FacilityType,
    pub skill: FacilityType,
    pub localized_specialty: LocalizedSpecialty,
}
