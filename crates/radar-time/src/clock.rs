//! Clock implementations for the radar face

use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use parking_lot::Mutex;
use radar_core::{HourCycle, TimeComponents};

/// Source of wall-clock readings
pub trait TimeSource: Send + Sync {
    /// Current local date and time
    fn now_local(&self) -> NaiveDateTime;

    /// Current local time of day
    fn now(&self) -> NaiveTime {
        self.now_local().time()
    }

    /// Current local calendar date
    fn today(&self) -> NaiveDate {
        self.now_local().date()
    }

    /// Current time decomposed for the radar
    fn components(&self, cycle: HourCycle) -> TimeComponents {
        TimeComponents::from_time(&self.now(), cycle)
    }
}

/// Device wall clock in the local time zone
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        SystemClock
    }
}

impl TimeSource for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Settable clock with one-second resolution.
/// Advancing past midnight rolls the date over.
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    /// Create a clock frozen at the given date and time
    pub fn at(now: NaiveDateTime) -> Self {
        ManualClock {
            now: Mutex::new(now),
        }
    }

    /// Create a clock frozen at a time of day on [`ManualClock::epoch`]
    pub fn new(time: NaiveTime) -> Self {
        Self::at(Self::epoch().and_time(time))
    }

    /// Create a clock from hours, minutes and seconds
    /// Returns None for an invalid time of day
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hours, minutes, seconds).map(Self::new)
    }

    /// Date used when only a time of day is given (Monday 2024-01-01)
    pub fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
    }

    /// Jump to a time of day, keeping the date
    pub fn set(&self, time: NaiveTime) {
        let mut now = self.now.lock();
        *now = now.date().and_time(time);
    }

    /// Jump to a date, keeping the time of day
    pub fn set_date(&self, date: NaiveDate) {
        let mut now = self.now.lock();
        *now = date.and_time(now.time());
    }

    /// Move forward, returning the new time of day
    pub fn advance(&self, by: Duration) -> NaiveTime {
        let mut now = self.now.lock();
        let step = chrono::Duration::from_std(by).ok();
        if let Some(next) = step.and_then(|step| now.checked_add_signed(step)) {
            *now = next;
        }
        now.time()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(NaiveTime::default())
    }
}

impl TimeSource for ManualClock {
    fn now_local(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}
