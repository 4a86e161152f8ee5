//! Week-grid primitives shared by the conflict checks.
//!
//! Week numbers are 1-based and self-referential: each classroom counts weeks
//! from its own `registration.start_date`.

use chrono::{Datelike, NaiveDate};

use crate::model::{RegularSession, WeekRange};

/// Weeks on which a regular session actually meets: its classroom's week
/// range minus the session's excluded weeks, in ascending order.
pub fn occurrence_weeks(weeks: WeekRange, session: &RegularSession) -> Vec<u32> {
    weeks
        .iter()
        .filter(|week| !session.excluded_weeks.contains(week))
        .collect()
}

/// Weeks present in both lists, in the order they appear in `a`.
pub fn common_weeks(a: &[u32], b: &[u32]) -> Vec<u32> {
    a.iter().copied().filter(|week| b.contains(week)).collect()
}

/// Week number of `date` on the grid that starts at `epoch`.
///
/// Computed as `floor(|date - epoch| / 7 days) + 1`. The distance is taken
/// as an absolute value, so a date before the epoch still lands on a
/// positive week.
pub fn week_number(date: NaiveDate, epoch: NaiveDate) -> u32 {
    let days = (date - epoch).num_days().unsigned_abs();
    (days / 7) as u32 + 1
}

/// Weekday of `date` on the 1-7 session scale: Monday..Saturday map to 1..6
/// and Sunday maps to 7.
pub fn weekday_number(date: NaiveDate) -> u8 {
    match date.weekday().num_days_from_sunday() {
        0 => 7,
        day => day as u8,
    }
}

/// Whether a regular session meets in `week`.
pub fn meets_in_week(weeks: WeekRange, session: &RegularSession, week: u32) -> bool {
    weeks.contains(week) && !session.excluded_weeks.contains(&week)
}
