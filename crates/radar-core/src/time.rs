//! Wall-clock primitives
//!
//! The radar only ever looks at three numbers: hour, minute and second.
//! How the hour is counted depends on the configured [`HourCycle`].

use std::fmt;

use chrono::Timelike;

use crate::{RadarError, RadarResult};

/// Hour counting convention
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HourCycle {
    /// Hours 0-11
    #[default]
    Twelve,
    /// Hours 0-23
    TwentyFour,
}

impl HourCycle {
    /// Reduce a 0-23 hour of day into this cycle
    #[inline]
    pub fn reduce(self, hour_of_day: u32) -> u32 {
        match self {
            HourCycle::Twelve => hour_of_day % 12,
            HourCycle::TwentyFour => hour_of_day % 24,
        }
    }

    /// Number of distinct hour values in this cycle
    pub fn hours(self) -> u8 {
        match self {
            HourCycle::Twelve => 12,
            HourCycle::TwentyFour => 24,
        }
    }
}

/// Hours, minutes and seconds of a wall-clock reading
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeComponents {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeComponents {
    pub const MIDNIGHT: TimeComponents = TimeComponents {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Create from raw components (hours 0-23, minutes and seconds 0-59)
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> RadarResult<Self> {
        Ok(TimeComponents {
            hours: checked("hours", hours, 24)?,
            minutes: checked("minutes", minutes, 60)?,
            seconds: checked("seconds", seconds, 60)?,
        })
    }

    /// Decompose a chrono time, counting hours with the given cycle
    pub fn from_time<T: Timelike>(time: &T, cycle: HourCycle) -> Self {
        // chrono keeps leap seconds in the nanosecond field, so second() < 60
        TimeComponents {
            hours: cycle.reduce(time.hour()) as u8,
            minutes: time.minute() as u8,
            seconds: time.second() as u8,
        }
    }

    #[inline]
    pub fn hours(self) -> u8 {
        self.hours
    }

    #[inline]
    pub fn minutes(self) -> u8 {
        self.minutes
    }

    #[inline]
    pub fn seconds(self) -> u8 {
        self.seconds
    }
}

fn checked(field: &'static str, value: u32, limit: u32) -> RadarResult<u8> {
    if value < limit {
        Ok(value as u8)
    } else {
        Err(RadarError::InvalidTime { field, value })
    }
}

impl fmt::Debug for TimeComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl fmt::Display for TimeComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_new_validates_ranges() {
        assert!(TimeComponents::new(23, 59, 59).is_ok());
        assert_eq!(
            TimeComponents::new(24, 0, 0),
            Err(RadarError::InvalidTime {
                field: "hours",
                value: 24
            })
        );
        assert!(TimeComponents::new(0, 60, 0).is_err());
        assert!(TimeComponents::new(0, 0, 60).is_err());
    }

    #[test]
    fn test_from_time_twelve_hour_cycle() {
        let t = NaiveTime::from_hms_opt(22, 5, 9).unwrap();
        let c = TimeComponents::from_time(&t, HourCycle::Twelve);

        assert_eq!(c.hours(), 10);
        assert_eq!(c.minutes(), 5);
        assert_eq!(c.seconds(), 9);
    }

    #[test]
    fn test_from_time_twenty_four_hour_cycle() {
        let t = NaiveTime::from_hms_opt(22, 5, 9).unwrap();
        let c = TimeComponents::from_time(&t, HourCycle::TwentyFour);

        assert_eq!(c.hours(), 22);
    }

    #[test]
    fn test_noon_wraps_to_zero_on_twelve_hour_cycle() {
        let t = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(TimeComponents::from_time(&t, HourCycle::Twelve).hours(), 0);
    }

    #[test]
    fn test_display() {
        let c = TimeComponents::new(7, 3, 0).unwrap();
        assert_eq!(c.to_string(), "07:03:00");
    }
}
