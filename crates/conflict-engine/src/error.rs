//! Error types for conflict-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid classroom JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("Duplicate regId: {0}")]
    DuplicateRegId(String),

    #[error("Invalid week range for {reg_id}: from {from} is after to {to}")]
    InvalidWeekRange { reg_id: String, from: u32, to: u32 },

    #[error("Invalid dayOfWeek for {reg_id}: {day} (expected 1-7)")]
    InvalidDayOfWeek { reg_id: String, day: u8 },

    #[error("Invalid session time for {reg_id}: {start} is not before {end}")]
    InvalidSessionTime {
        reg_id: String,
        start: String,
        end: String,
    },

    #[error("Excluded week {week} for {reg_id} is outside weeks {from}-{to}")]
    ExcludedWeekOutOfRange {
        reg_id: String,
        week: u32,
        from: u32,
        to: u32,
    },

    #[error("Invalid registration dates for {reg_id}: end {end} precedes start {start}")]
    InvalidRegistrationDates {
        reg_id: String,
        start: String,
        end: String,
    },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
