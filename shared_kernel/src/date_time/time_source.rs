use crate::date_time::calendar::Calendar;
use chrono::{DateTime, Utc};

/// Where business logic reads "now" from. Never call `Utc::now()` directly
/// outside of [`RealTimeSource`].
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn calendar(&self) -> Calendar;
}

#[derive(Debug, Clone, Copy)]
pub struct RealTimeSource {
    calendar: Calendar,
}

impl RealTimeSource {
    pub fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }
}

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn calendar(&self) -> Calendar {
        self.calendar
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource {
    now: DateTime<Utc>,
    calendar: Calendar,
}

impl FixedTimeSource {
    pub fn new(now: DateTime<Utc>, calendar: Calendar) -> Self {
        Self { now, calendar }
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self::new(now, Calendar::default())
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn calendar(&self) -> Calendar {
        self.calendar
    }
}
