//! Payload of `GET /api/v2/available_shifts`.
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub(crate) struct ResponseContainer<T> {
    pub data: T,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ShiftsDay {
    pub date: String,
    pub shifts: Vec<ShiftResponse>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ShiftResponse {
    pub shift_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub normalized_start_date_time: String,
    pub normalized_end_date_time: String,
    pub timezone: String,
    pub premium_rate: bool,
    pub covid: bool,
    pub shift_kind: String,
    pub within_distance: Option<i64>,
    pub facility_type: FacilityTypeResponse,
    pub skill: FacilityTypeResponse,
    pub localized_specialty: LocalizedSpecialtyResponse,
}

#[derive(Deserialize, Debug)]
pub(crate) struct FacilityTypeResponse {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub abbreviation: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct LocalizedSpecialtyResponse {
    pub id: i64,
    pub specialty_id: i64,
    pub state_id: i64,
    pub name: String,
    pub abbreviation: String,
}
