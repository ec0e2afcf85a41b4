//! Sections and the weekly periods they meet in.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::error::{ModelError, ModelResult};
use super::time::{TimeOfDay, Weekday};

/// Registrar section number, e.g. `1` for section `00001`.
///
/// Displayed zero-padded to five digits.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SectionNumber(pub u32);

impl SectionNumber {
    pub fn new(value: u32) -> Self {
        SectionNumber(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

impl From<u32> for SectionNumber {
    fn from(v: u32) -> Self {
        SectionNumber(v)
    }
}

impl From<SectionNumber> for u32 {
    fn from(v: SectionNumber) -> Self {
        v.0
    }
}

/// One weekly meeting of a section.
///
/// Construction guarantees `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    day: Weekday,
    room: String,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl Period {
    /// Create a period, rejecting empty or inverted time ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::models::{Period, TimeOfDay, Weekday};
    ///
    /// let period = Period::new(
    ///     Weekday::Monday,
    ///     "A-201",
    ///     TimeOfDay::new(9, 0).unwrap(),
    ///     TimeOfDay::new(10, 30).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(period.duration_minutes(), 90);
    /// ```
    pub fn new(
        day: Weekday,
        room: impl Into<String>,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> ModelResult<Self> {
        if start >= end {
            return Err(ModelError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            day,
            room: room.into(),
            start,
            end,
        })
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Half-open `[start, end)` interval in minutes since midnight.
    pub fn minutes(&self) -> Range<u16> {
        self.start.minutes()..self.end.minutes()
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{} ({})", self.day, self.start, self.end, self.room)
    }
}

/// A schedulable offering of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub number: SectionNumber,
    pub teacher: String,
    pub periods: Vec<Period>,
}

impl Section {
    /// Label used in section pickers, e.g. `00001 - Smith`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.number, self.teacher)
    }
}
