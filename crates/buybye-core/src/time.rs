use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Source of "now" for reminders and age calculations; injected so tests can pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Instant `hours` from now, used for "remind me later" deadlines.
    fn hours_from_now(&self, hours: u32) -> DateTime<Utc> {
        self.now() + Duration::hours(i64::from(hours))
    }
}
