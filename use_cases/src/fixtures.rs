use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use entities::shifts::{FacilityType, LocalizedSpecialty, Shift};

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

/// 2022-04-01T10:00:00Z, a Friday.
pub fn preview_now() -> DateTime<Utc> {
    utc(2022, 4, 1, 10, 0, 0)
}

pub fn shift(id: i64) -> Shift {
    let day = NaiveDate::from_ymd_opt(2022, 4, 2).unwrap();
    Shift {
        shift_id: id.into(),
        start_time: utc(2022, 4, 2, 13, 0, 0),
        end_time: utc(2022, 4, 2, 21, 0, 0),
        normalized_start_date_time: day.and_hms_opt(8, 0, 0).unwrap(),
        normalized_end_date_time: day.and_hms_opt(16, 0, 0).unwrap(),
        timezone: "Central".to_string(),
        premium_rate: id % 2 == 0,
        covid: false,
        shift_kind: "Day Shift".to_string(),
        within_distance: Some(12),
        facility_type: FacilityType {
            id: 7,
            name: "Skilled Nursing Facility".to_string(),
            color: "#AF52DE".to_string(),
            abbreviation: Some("SNF".to_string()),
        },
        skill: FacilityType {
            id: 2,
            name: "Long Term Care".to_string(),
            color: "#007AFF".to_string(),
            abbreviation: None,
        },
        localized_specialty: LocalizedSpecialty {
            id: 49,
            specialty_id: 9,
            state_id: 44,
            name: "Certified Nursing Aide".to_string(),
            abbreviation: "CNA".to_string(),
        },
    }
}

pub fn shifts(ids: &[i64]) -> Vec<Shift> {
    ids.iter().copied().map(shift).collect()
}

pub fn ids(shifts: &[Shift]) -> Vec<i64> {
    shifts.iter().map(|shift| shift.shift_id.inner()).collect()
}
