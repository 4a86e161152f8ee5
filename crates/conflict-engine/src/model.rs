//! Selected-classroom data model.
//!
//! Mirrors the JSON the registration planner hands over: camelCase field
//! names, session times as `"HH:MM"` strings and dates as `YYYY-MM-DD`.
//! Parsing is strict, so a malformed time or date is rejected here rather
//! than silently turning into "no overlap" further down.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Read-only course metadata attached to a classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub credits: u32,
}

/// Registration record of a classroom. `reg_id` is the identity key used in
/// conflict output; `start_date` is the epoch of the classroom's week grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub reg_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Inclusive, 1-based range of week numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub from: u32,
    pub to: u32,
}

impl WeekRange {
    pub fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, week: u32) -> bool {
        self.from <= week && week <= self.to
    }

    /// Week numbers in ascending order. Empty when `from > to`.
    pub fn iter(&self) -> impl Iterator<Item = u32> {
        self.from..=self.to
    }
}

/// A half-open `[start, end)` wall-clock interval within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parse a pair of `"HH:MM"` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_clock_time(start)?, parse_clock_time(end)?))
    }

    /// Two slots overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Slots that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(CLOCK_FORMAT),
            self.end.format(CLOCK_FORMAT)
        )
    }
}

/// A recurring weekly meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegularSession {
    /// 1-7, with Sunday = 7. The weekday each number stands for is assigned
    /// upstream; the engine only compares these values.
    pub day_of_week: u8,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub location: String,
    /// Weeks on which this slot does not take place.
    #[serde(default)]
    pub excluded_weeks: Vec<u32>,
}

impl RegularSession {
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.start_time, self.end_time)
    }
}

/// A one-off dated meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeupSession {
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub location: String,
}

impl MakeupSession {
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSchedule {
    pub weeks: WeekRange,
    #[serde(default)]
    pub regular_sessions: Vec<RegularSession>,
    #[serde(default)]
    pub makeup_sessions: Vec<MakeupSession>,
}

/// A course section the student has selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub course: Course,
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    pub registration: Registration,
    pub schedule: ClassSchedule,
}

impl Classroom {
    pub fn reg_id(&self) -> &str {
        &self.registration.reg_id
    }
}

/// Parse a JSON array of classrooms.
///
/// # Errors
/// Returns `ScheduleError::Json` if the input is not a valid classroom array,
/// including any time that is not `HH:MM` or date that is not `YYYY-MM-DD`.
pub fn parse_classrooms(json: &str) -> Result<Vec<Classroom>> {
    Ok(serde_json::from_str(json)?)
}

const CLOCK_FORMAT: &str = "%H:%M";

/// Parse a 24-hour `"HH:MM"` wall-clock time.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), CLOCK_FORMAT)
        .map_err(|_| ScheduleError::InvalidTime(s.to_string()))
}

/// Serde adapter for `"HH:MM"` session times.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(super::CLOCK_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock_time(&raw).map_err(de::Error::custom)
    }
}
