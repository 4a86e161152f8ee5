//! # conflict-engine
//!
//! Schedule-conflict detection for a course-registration planner.
//!
//! Given the classrooms (course sections) a student has selected, each with
//! recurring weekly sessions, excluded weeks and one-off makeup sessions, the
//! engine reports every pair of sessions from two different classrooms that
//! overlap in time on the same day and in the same week.
//!
//! ## Quick start
//!
//! ```rust
//! use conflict_engine::{detect_conflicts, parse_classrooms};
//!
//! let json = r#"[
//!   {"course": {"code": "CS101", "name": "Intro", "credits": 3},
//!    "className": "CS101.1",
//!    "registration": {"regId": "A", "startDate": "2024-09-02", "endDate": "2024-12-20"},
//!    "schedule": {"weeks": {"from": 1, "to": 15},
//!      "regularSessions": [{"dayOfWeek": 2, "startTime": "08:00", "endTime": "09:30",
//!                           "room": "B1-101", "location": "Main"}]}},
//!   {"course": {"code": "MA201", "name": "Calculus", "credits": 4},
//!    "className": "MA201.2",
//!    "registration": {"regId": "B", "startDate": "2024-09-02", "endDate": "2024-12-20"},
//!    "schedule": {"weeks": {"from": 1, "to": 15},
//!      "regularSessions": [{"dayOfWeek": 2, "startTime": "09:00", "endTime": "10:00",
//!                           "room": "C2-204", "location": "Main"}]}}
//! ]"#;
//!
//! let classrooms = parse_classrooms(json).unwrap();
//! let conflicts = detect_conflicts(&classrooms);
//! assert_eq!(conflicts.len(), 1);
//! assert_eq!(conflicts[0].kind().as_str(), "regular-regular");
//! ```
//!
//! ## Modules
//!
//! - [`model`] — classrooms, sessions and the `[start, end)` time slot
//! - [`weeks`] — week-occurrence sets, week numbering and the weekday remap
//! - [`conflict`] — the pairwise detector and its `ConflictResult` output
//! - [`validate`] — opt-in strict input checks
//! - [`summary`] — helpers the registration UI uses to flag classrooms
//! - [`error`] — Error types

pub mod conflict;
pub mod error;
pub mod model;
pub mod summary;
pub mod validate;
pub mod weeks;

pub use conflict::{analyze, detect_conflicts, ConflictKind, ConflictReport, ConflictResult};
pub use error::ScheduleError;
pub use model::{
    parse_classrooms, ClassSchedule, Classroom, Course, MakeupSession, Registration,
    RegularSession, TimeSlot, WeekRange,
};
pub use summary::{can_complete_registration, conflicting_reg_ids, conflicts_for, ConflictSummary};
pub use validate::{validate_classrooms, validation_issues};
