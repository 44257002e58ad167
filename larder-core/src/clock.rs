//! Time source abstraction so "today" can be pinned in tests.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of the current instant and the current calendar date.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The calendar date expiry arithmetic is done on, never the raw instant,
    /// so the time of day never changes a days-left count.
    fn today(&self) -> NaiveDate;
}

/// Wall clock, local timezone for calendar dates.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at one instant. Unlike [`SystemClock`], its calendar date
/// is taken in UTC, so tests give the same answer in every timezone.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Frozen at midnight UTC on `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            now: date.and_time(chrono::NaiveTime::MIN).and_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// The UTC date of the frozen instant.
    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}
