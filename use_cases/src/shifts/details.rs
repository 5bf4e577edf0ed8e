use chrono::{DateTime, NaiveDateTime, Utc};
use entities::shifts::Shift;
use shared_kernel::date_time::calendar::Calendar;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// What the details screen shows for one shift.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftDetails {
    pub title_text: String,
    pub subtitle_text: String,
    pub normalized_time_text: String,
    pub timezone: String,
    pub is_premium_rate: bool,
    pub shift_kind: String,
    pub within_distance_text: String,
    pub facility_text: String,
    pub skill_text: String,
    pub localized_specialty_text: String,
}

impl ShiftDetails {
    /// Absolute start and end times are shown in the calendar's timezone.
    pub fn new(shift: &Shift, calendar: &Calendar) -> Self {
        let local = |instant: &DateTime<Utc>| {
            instant
                .with_timezone(&calendar.timezone())
                .format(TIME_FORMAT)
                .to_string()
        };

        Self {
            title_text: format!("Shift {}", shift.shift_id),
            subtitle_text: format!("{}-{}", local(&shift.start_time), local(&shift.end_time)),
            normalized_time_text: normalized_time_text(
                &shift.normalized_start_date_time,
                &shift.normalized_end_date_time,
            ),
            timezone: shift.timezone.clone(),
            is_premium_rate: shift.premium_rate,
            shift_kind: shift.shift_kind.clone(),
            within_distance_text: shift
                .within_distance
                .map(|miles| miles.to_string())
                .unwrap_or_default(),
            facility_text: shift.facility_type.name.clone(),
            skill_text: shift.skill.name.clone(),
            localized_specialty_text: shift.localized_specialty.name.clone(),
        }
    }
}

pub(crate) fn normalized_time_text(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    format!("{}-{}", start.format(TIME_FORMAT), end.format(TIME_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::ShiftDetails;
    use crate::fixtures::shift;
    use chrono_tz::America::Chicago;
    use shared_kernel::date_time::calendar::Calendar;

    #[test]
    fn test_details_are_built_from_the_shift() {
        let details = ShiftDetails::new(&shift(42), &Calendar::new(Chicago));

        assert_eq!(details.title_text, "Shift 42");
        assert_eq!(details.subtitle_text, "2022-04-02 08:00-2022-04-02 16:00");
        assert_eq!(
            details.normalized_time_text,
            "2022-04-02 08:00-2022-04-02 16:00"
        );
        assert_eq!(details.timezone, "Central");
        assert!(details.is_premium_rate);
        assert_eq!(details.within_distance_text, "12");
        assert_eq!(details.facility_text, "Skilled Nursing Facility");
        assert_eq!(details.skill_text, "Long Term Care");
        assert_eq!(details.localized_specialty_text, "Certified Nursing Aide");
    }

    #[test]
    fn test_missing_distance_is_blank() {
        let mut shift = shift(1);
        shift.within_distance = None;
        let details = ShiftDetails::new(&shift, &Calendar::default());
        assert_eq!(details.within_distance_text, "");
        assert_eq!(details.subtitle_text, "2022-04-02 13:00-2022-04-02 21:00");
    }
}
