//! Detect overlapping sessions across a student's selected classrooms.
//!
//! Every unordered pair of classrooms `(A, B)`, with `A` before `B` in the
//! input, goes through four checks in this order:
//!
//! 1. A's regular sessions against B's regular sessions
//! 2. A's makeup sessions against B's regular sessions
//! 3. B's makeup sessions against A's regular sessions
//! 4. A's makeup sessions against B's makeup sessions
//!
//! Time slots are half-open, so sessions that only touch at an endpoint are
//! NOT conflicts. `reg_id1`/`reg_id2` are positional and never sorted: for
//! regular-regular and makeup-makeup conflicts `reg_id1` is the classroom
//! listed first, for makeup-regular conflicts it is the makeup owner.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::model::{Classroom, MakeupSession, RegularSession};
use crate::weeks::{common_weeks, meets_in_week, occurrence_weeks, week_number, weekday_number};

/// Which pair of session kinds produced a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConflictKind {
    RegularRegular,
    MakeupRegular,
    MakeupMakeup,
}

impl ConflictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictKind::RegularRegular => "regular-regular",
            ConflictKind::MakeupRegular => "makeup-regular",
            ConflictKind::MakeupMakeup => "makeup-makeup",
        }
    }
}

/// A detected overlap between two sessions of two different classrooms.
///
/// `time1`/`time2` and `room1`/`room2` follow the order of `reg_id1`/`reg_id2`.
/// Times are formatted as `"HH:MM - HH:MM"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ConflictResult {
    RegularRegular {
        reg_id1: String,
        reg_id2: String,
        day_of_week: u8,
        time1: String,
        time2: String,
        room1: String,
        room2: String,
        /// Every week on which both sessions meet, ascending.
        overlapping_weeks: Vec<u32>,
    },
    MakeupRegular {
        /// Owner of the makeup session.
        reg_id1: String,
        /// Owner of the regular session.
        reg_id2: String,
        date: NaiveDate,
        time1: String,
        time2: String,
        room1: String,
        room2: String,
        /// Week of the makeup date on the regular classroom's grid.
        makeup_week: u32,
    },
    MakeupMakeup {
        reg_id1: String,
        reg_id2: String,
        date: NaiveDate,
        time1: String,
        time2: String,
        room1: String,
        room2: String,
    },
}

impl ConflictResult {
    pub fn kind(&self) -> ConflictKind {
        match self {
            ConflictResult::RegularRegular { .. } => ConflictKind::RegularRegular,
            ConflictResult::MakeupRegular { .. } => ConflictKind::MakeupRegular,
            ConflictResult::MakeupMakeup { .. } => ConflictKind::MakeupMakeup,
        }
    }

    /// The two registration IDs, in output order.
    pub fn reg_ids(&self) -> (&str, &str) {
        match self {
            ConflictResult::RegularRegular {
                reg_id1, reg_id2, ..
            }
            | ConflictResult::MakeupRegular {
                reg_id1, reg_id2, ..
            }
            | ConflictResult::MakeupMakeup {
                reg_id1, reg_id2, ..
            } => (reg_id1.as_str(), reg_id2.as_str()),
        }
    }

    pub fn involves(&self, reg_id: &str) -> bool {
        let (a, b) = self.reg_ids();
        a == reg_id || b == reg_id
    }
}

/// Conflicts found in one run, plus how much work the run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReport {
    pub conflicts: Vec<ConflictResult>,
    /// Number of classroom pairs compared.
    pub pairs_examined: usize,
    /// Number of individual session pairs compared across all four checks.
    pub session_comparisons: usize,
}

/// Find all pairwise scheduling conflicts between the given classrooms.
///
/// Output order follows pair order (outer), then check order, then the
/// session order within each classroom. The input is never modified.
pub fn detect_conflicts(classrooms: &[Classroom]) -> Vec<ConflictResult> {
    analyze(classrooms).conflicts
}

/// Same as [`detect_conflicts`], returning the work counters alongside.
pub fn analyze(classrooms: &[Classroom]) -> ConflictReport {
    let mut report = ConflictReport::default();

    for (i, a) in classrooms.iter().enumerate() {
        for b in &classrooms[i + 1..] {
            trace!(reg_id1 = a.reg_id(), reg_id2 = b.reg_id(), "comparing classrooms");
            check_pair(a, b, &mut report);
            report.pairs_examined += 1;
        }
    }

    debug!(
        classrooms = classrooms.len(),
        pairs = report.pairs_examined,
        comparisons = report.session_comparisons,
        conflicts = report.conflicts.len(),
        "conflict detection finished"
    );

    report
}

fn check_pair(a: &Classroom, b: &Classroom, report: &mut ConflictReport) {
    for reg_a in &a.schedule.regular_sessions {
        for reg_b in &b.schedule.regular_sessions {
            report.session_comparisons += 1;
            if let Some(conflict) = regular_regular(a, reg_a, b, reg_b) {
                record(report, conflict);
            }
        }
    }

    for makeup in &a.schedule.makeup_sessions {
        for regular in &b.schedule.regular_sessions {
            report.session_comparisons += 1;
            if let Some(conflict) = makeup_regular(a, makeup, b, regular) {
                record(report, conflict);
            }
        }
    }

    // Mirror direction: B's makeups against A's regular sessions.
    for regular in &a.schedule.regular_sessions {
        for makeup in &b.schedule.makeup_sessions {
            report.session_comparisons += 1;
            if let Some(conflict) = makeup_regular(b, makeup, a, regular) {
                record(report, conflict);
            }
        }
    }

    for makeup_a in &a.schedule.makeup_sessions {
        for makeup_b in &b.schedule.makeup_sessions {
            report.session_comparisons += 1;
            if let Some(conflict) = makeup_makeup(a, makeup_a, b, makeup_b) {
                record(report, conflict);
            }
        }
    }
}

fn record(report: &mut ConflictReport, conflict: ConflictResult) {
    let (reg_id1, reg_id2) = conflict.reg_ids();
    debug!(
        kind = conflict.kind().as_str(),
        reg_id1, reg_id2, "schedule conflict detected"
    );
    report.conflicts.push(conflict);
}

fn regular_regular(
    a: &Classroom,
    session_a: &RegularSession,
    b: &Classroom,
    session_b: &RegularSession,
) -> Option<ConflictResult> {
    if session_a.day_of_week != session_b.day_of_week {
        return None;
    }
    let (slot_a, slot_b) = (session_a.slot(), session_b.slot());
    if !slot_a.overlaps(&slot_b) {
        return None;
    }

    let weeks_a = occurrence_weeks(a.schedule.weeks, session_a);
    let weeks_b = occurrence_weeks(b.schedule.weeks, session_b);
    let overlapping_weeks = common_weeks(&weeks_a, &weeks_b);
    if overlapping_weeks.is_empty() {
        return None;
    }

    Some(ConflictResult::RegularRegular {
        reg_id1: a.reg_id().to_string(),
        reg_id2: b.reg_id().to_string(),
        day_of_week: session_a.day_of_week,
        time1: slot_a.to_string(),
        time2: slot_b.to_string(),
        room1: session_a.room.clone(),
        room2: session_b.room.clone(),
        overlapping_weeks,
    })
}

/// Check one makeup session against one regular session of another
/// classroom. The makeup's week is counted from the regular classroom's own
/// start date.
fn makeup_regular(
    makeup_owner: &Classroom,
    makeup: &MakeupSession,
    regular_owner: &Classroom,
    regular: &RegularSession,
) -> Option<ConflictResult> {
    if weekday_number(makeup.date) != regular.day_of_week {
        return None;
    }

    let makeup_week = week_number(makeup.date, regular_owner.registration.start_date);
    if !meets_in_week(regular_owner.schedule.weeks, regular, makeup_week) {
        return None;
    }

    let (makeup_slot, regular_slot) = (makeup.slot(), regular.slot());
    if !makeup_slot.overlaps(&regular_slot) {
        return None;
    }

    Some(ConflictResult::MakeupRegular {
        reg_id1: makeup_owner.reg_id().to_string(),
        reg_id2: regular_owner.reg_id().to_string(),
        date: makeup.date,
        time1: makeup_slot.to_string(),
        time2: regular_slot.to_string(),
        room1: makeup.room.clone(),
        room2: regular.room.clone(),
        makeup_week,
    })
}

fn makeup_makeup(
    a: &Classroom,
    makeup_a: &MakeupSession,
    b: &Classroom,
    makeup_b: &MakeupSession,
) -> Option<ConflictResult> {
    if makeup_a.date != makeup_b.date {
        return None;
    }
    let (slot_a, slot_b) = (makeup_a.slot(), makeup_b.slot());
    if !slot_a.overlaps(&slot_b) {
        return None;
    }

    Some(ConflictResult::MakeupMakeup {
        reg_id1: a.reg_id().to_string(),
        reg_id2: b.reg_id().to_string(),
        date: makeup_a.date,
        time1: slot_a.to_string(),
        time2: slot_b.to_string(),
        room1: makeup_a.room.clone(),
        room2: makeup_b.room.clone(),
    })
}
