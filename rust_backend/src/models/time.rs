//! Weekday and time-of-day primitives.
//!
//! Everything downstream compares times as minutes since midnight, so the
//! conversions here are the only place hour/minute pairs are interpreted.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::error::{ModelError, ModelResult};

/// Number of weekdays a timetable spans.
pub const WEEKDAY_COUNT: usize = 5;

/// Convert an hour/minute pair into minutes since midnight.
///
/// Callers are expected to pass a well-formed pair; use [`TimeOfDay::new`]
/// when the input comes from outside the crate.
pub fn to_minutes(hour: u8, minute: u8) -> u16 {
    u16::from(hour) * 60 + u16::from(minute)
}

/// Column index of a weekday name, `Monday` = 0 through `Friday` = 4.
///
/// Names are matched case-sensitively against the English day names. Any
/// other string, including weekend days, yields `None`.
pub fn day_index(name: &str) -> Option<usize> {
    match name {
        "Monday" => Some(0),
        "Tuesday" => Some(1),
        "Wednesday" => Some(2),
        "Thursday" => Some(3),
        "Friday" => Some(4),
        _ => None,
    }
}

/// A teaching day. Weekends are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; WEEKDAY_COUNT] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Parse a day name, rejecting anything that is not Monday..Friday.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::models::Weekday;
    ///
    /// assert_eq!(Weekday::from_name("Wednesday").unwrap(), Weekday::Wednesday);
    /// assert!(Weekday::from_name("monday").is_err());
    /// ```
    pub fn from_name(name: &str) -> ModelResult<Self> {
        day_index(name)
            .map(|idx| Self::ALL[idx])
            .ok_or_else(|| ModelError::InvalidDay {
                name: name.to_string(),
            })
    }

    /// Grid column of this day.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl FromStr for Weekday {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
        }
    }
}

/// A wall-clock time with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a validated time of day.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::models::TimeOfDay;
    ///
    /// let t = TimeOfDay::new(9, 30).unwrap();
    /// assert_eq!(t.minutes(), 570);
    /// assert!(TimeOfDay::new(24, 0).is_err());
    /// ```
    pub fn new(hour: u8, minute: u8) -> ModelResult<Self> {
        NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), 0)
            .map(Self::from)
            .ok_or(ModelError::InvalidTime { hour, minute })
    }

    /// Build a time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> ModelResult<Self> {
        let hour = u8::try_from(minutes / 60).unwrap_or(u8::MAX);
        let minute = (minutes % 60) as u8;
        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        to_minutes(self.hour, self.minute)
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    /// Formats without a leading zero on the hour, e.g. `8:00` or `13:30`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_naive_time().format("%-H:%M"))
    }
}
