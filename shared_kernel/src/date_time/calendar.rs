use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
    Weekday,
};
use chrono_tz::Tz;

/// Week and day boundary math in a fixed timezone.
///
/// Weeks always start on Monday, whatever the host locale says. A wall clock
/// value skipped by a DST jump resolves to the instant it would have been
/// under the offset in force before the jump, so a skipped midnight becomes
/// the first instant of that day. Operations only return `None` when a date
/// falls out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    timezone: Tz,
    first_weekday: Weekday,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl Calendar {
    pub fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            first_weekday: Weekday::Mon,
        }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn start_of_week(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.first_day_of_week(instant).and_then(|day| self.midnight(day))
    }

    pub fn end_of_week(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.first_day_of_week(instant)
            .and_then(|day| day.checked_add_signed(Duration::days(6)))
            .and_then(|day| self.midnight(day))
    }

    pub fn start_of_day(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.midnight(self.local_date(instant))
    }

    pub fn end_of_day(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let next_day = self.local_date(instant).succ_opt()?;
        self.midnight(next_day)?
            .checked_sub_signed(Duration::seconds(1))
    }

    /// Moves the wall clock time forward by `weeks`, keeping the time of day.
    pub fn add_weeks(&self, instant: DateTime<Utc>, weeks: i64) -> Option<DateTime<Utc>> {
        let local = instant
            .with_timezone(&self.timezone)
            .naive_local()
            .checked_add_signed(Duration::weeks(weeks))?;
        self.resolve(local)
    }

    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.timezone).date_naive()
    }

    fn first_day_of_week(&self, instant: DateTime<Utc>) -> Option<NaiveDate> {
        let date = self.local_date(instant);
        let days_into_week = (7 + date.weekday().num_days_from_monday()
            - self.first_weekday.num_days_from_monday())
            % 7;
        date.checked_sub_signed(Duration::days(i64::from(days_into_week)))
    }

    fn midnight(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.resolve(date.and_hms_opt(0, 0, 0)?)
    }

    /// Repeated wall clock times take the earlier instant. Skipped ones are
    /// read with the offset from a day earlier, which lands them as far past
    /// the gap as they were into it.
    fn resolve(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self.timezone.from_local_datetime(&local) {
            LocalResult::Single(date_time) | LocalResult::Ambiguous(date_time, _) => {
                Some(date_time.with_timezone(&Utc))
            }
            LocalResult::None => {
                let day_before = local.checked_sub_signed(Duration::days(1))?;
                let offset = self
                    .timezone
                    .from_local_datetime(&day_before)
                    .earliest()?
                    .offset()
                    .fix();
                let utc = local
                    .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))?;
                Some(Utc.from_utc_datetime(&utc))
            }
        }
    }
}
