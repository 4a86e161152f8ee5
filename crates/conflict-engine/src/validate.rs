//! Strict input checks.
//!
//! [`crate::detect_conflicts`] never fails: it compares whatever it is given.
//! Callers that want to reject inconsistent selections up front run these
//! checks first.

use std::collections::HashSet;

use chrono::NaiveTime;

use crate::error::{Result, ScheduleError};
use crate::model::Classroom;

/// Validate a selection, returning the first problem found.
///
/// # Errors
/// Returns the first [`ScheduleError`] reported by [`validation_issues`].
pub fn validate_classrooms(classrooms: &[Classroom]) -> Result<()> {
    match validation_issues(classrooms).into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(()),
    }
}

/// Collect every problem in a selection, in input order.
///
/// Checks, per classroom: unique `regId`, registration end not before start,
/// `weeks.from <= weeks.to`, and for each regular session a `dayOfWeek` in
/// 1-7, excluded weeks inside the week range and `start < end`. Makeup
/// sessions are checked for `start < end`.
pub fn validation_issues(classrooms: &[Classroom]) -> Vec<ScheduleError> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for classroom in classrooms {
        let reg_id = classroom.reg_id();
        if !seen.insert(reg_id) {
            issues.push(ScheduleError::DuplicateRegId(reg_id.to_string()));
        }

        let registration = &classroom.registration;
        if registration.end_date < registration.start_date {
            issues.push(ScheduleError::InvalidRegistrationDates {
                reg_id: reg_id.to_string(),
                start: registration.start_date.to_string(),
                end: registration.end_date.to_string(),
            });
        }

        let weeks = classroom.schedule.weeks;
        if weeks.from > weeks.to {
            issues.push(ScheduleError::InvalidWeekRange {
                reg_id: reg_id.to_string(),
                from: weeks.from,
                to: weeks.to,
            });
        }

        for session in &classroom.schedule.regular_sessions {
            if !(1..=7).contains(&session.day_of_week) {
                issues.push(ScheduleError::InvalidDayOfWeek {
                    reg_id: reg_id.to_string(),
                    day: session.day_of_week,
                });
            }
            check_times(reg_id, session.start_time, session.end_time, &mut issues);
            for &week in &session.excluded_weeks {
                if !weeks.contains(week) {
                    issues.push(ScheduleError::ExcludedWeekOutOfRange {
                        reg_id: reg_id.to_string(),
                        week,
                        from: weeks.from,
                        to: weeks.to,
                    });
                }
            }
        }

        for session in &classroom.schedule.makeup_sessions {
            check_times(reg_id, session.start_time, session.end_time, &mut issues);
        }
    }

    issues
}

fn check_times(reg_id: &str, start: NaiveTime, end: NaiveTime, issues: &mut Vec<ScheduleError>) {
    if start >= end {
        issues.push(ScheduleError::InvalidSessionTime {
            reg_id: reg_id.to_string(),
            start: start.format("%H:%M").to_string(),
            end: end.format("%H:%M").to_string(),
        });
    }
}
