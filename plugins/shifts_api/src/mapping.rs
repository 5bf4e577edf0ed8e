use crate::wire::{FacilityTypeResponse, LocalizedSpecialtyResponse, ShiftResponse};
use chrono::{DateTime, NaiveDateTime, Utc};
use entities::errors::DecodeError;
use entities::shifts::{FacilityType, LocalizedSpecialty, Shift};

const NORMALIZED_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn parse_instant(text: &str) -> Result<DateTime<Utc>, DecodeError> {
    DateTime::parse_from_rfc3339(text)
        .map(|date_time| date_time.with_timezone(&Utc))
        .map_err(|_| DecodeError::WrongDateFormat(text.to_string()))
}

fn parse_normalized(text: &str) -> Result<NaiveDateTime, DecodeError> {
    NaiveDateTime::parse_from_str(text, NORMALIZED_DATE_TIME_FORMAT)
        .map_err(|_| DecodeError::WrongDateFormat(text.to_string()))
}

impl From<FacilityTypeResponse> for FacilityType {
    fn from(value: FacilityTypeResponse) -> Self {
        FacilityType {
            id: value.id,
            name: value.name,
            color: value.color,
            abbreviation: value.abbreviation,
        }
    }
}

impl From<LocalizedSpecialtyResponse> for LocalizedSpecialty {
    fn from(value: LocalizedSpecialtyResponse) -> Self {
        LocalizedSpecialty {
            id: value.id,
            specialty_id: value.specialty_id,
            state_id: value.state_id,
            name: value.name,
            abbreviation: value.abbreviation,
        }
    }
}

impl TryFrom<ShiftResponse> for Shift {
    type Error = DecodeError;

    fn try_from(value: ShiftResponse) -> Result<Self, Self::Error> {
        Ok(Shift {
            shift_id: value.shift_id.into(),
            start_time: parse_instant(&value.start_time)?,
            end_time: parse_instant(&value.end_time)?,
            normalized_start_date_time: parse_normalized(&value.normalized_start_date_time)?,
            normalized_end_date_time: parse_normalized(&value.normalized_end_date_time)?,
            timezone: value.timezone,
            premium_rate: value.premium_rate,
            covid: value.covid,
            shift_kind: value.shift_kind,
            within_distance: value.within_distance,
            facility_type: value.facility_type.into(),
            skill: value.skill.into(),
            localized_specialty: value.localized_specialty.into(),
        })
    }
}
