//! Date provider: clock access and whole-year differences

use chrono::{DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveTime, Utc};

/// Clock and calendar arithmetic used by the services
pub trait DateProvider: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Normalize a timestamp carrying any offset to UTC
    fn convert_to_utc(&self, date: DateTime<FixedOffset>) -> DateTime<Utc> {
        date.with_timezone(&Utc)
    }

    /// Whole years elapsed from `start` to `end`, truncated toward zero
    fn compare_in_years(&self, start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> i32 {
        years_between(self.convert_to_utc(start), self.convert_to_utc(end))
    }
}

/// Midnight UTC on the given calendar date
pub fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Count full years between two instants
///
/// A year is only counted once its anniversary (same month, day and time of
/// day) has been reached. Anniversaries of Feb 29 fall on Feb 28 in common
/// years. The result is negative when `end` precedes `start`.
pub fn years_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i32 {
    if end < start {
        return -years_between(end, start);
    }

    let mut years = end.year() - start.year();
    if years > 0 {
        let anniversary = start.checked_add_months(Months::new(12 * years as u32));
        if anniversary.map_or(true, |anniversary| anniversary > end) {
            years -= 1;
        }
    }
    years
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedDateProvider {
    now: DateTime<Utc>,
}

impl FixedDateProvider {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Fixed at midnight UTC on the given date
    pub fn on(date: NaiveDate) -> Self {
        Self::new(start_of_day_utc(date))
    }
}

impl DateProvider for FixedDateProvider {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
