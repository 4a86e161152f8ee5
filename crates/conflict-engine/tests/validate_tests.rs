//! Tests for strict input validation.

use chrono::{NaiveDate, NaiveTime};
use conflict_engine::{
    validate_classrooms, validation_issues, ClassSchedule, Classroom, Course, MakeupSession,
    Registration, RegularSession, ScheduleError, WeekRange,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn regular(day: u8, start: &str, end: &str) -> RegularSession {
    RegularSession {
        day_of_week: day,
        start_time: time(start),
        end_time: time(end),
        room: "A-101".to_string(),
        location: String::new(),
        excluded_weeks: vec![],
    }
}

fn classroom(reg_id: &str, regular_sessions: Vec<RegularSession>) -> Classroom {
    Classroom {
        course: Course {
            code: "CS101".to_string(),
            name: "Intro".to_string(),
            credits: 3,
        },
        class_name: "CS101.1".to_string(),
        teacher: Some("Tran".to_string()),
        registration: Registration {
            reg_id: reg_id.to_string(),
            start_date: date("2024-09-02"),
            end_date: date("2024-12-20"),
        },
        schedule: ClassSchedule {
            weeks: WeekRange::new(1, 15),
            regular_sessions,
            makeup_sessions: vec![],
        },
    }
}

#[test]
fn well_formed_selection_passes() {
    let selection = vec![
        classroom("A", vec![regular(2, "08:00", "09:30")]),
        classroom("B", vec![regular(7, "13:00", "15:00")]),
    ];

    assert!(validate_classrooms(&selection).is_ok());
    assert!(validation_issues(&selection).is_empty());
}

#[test]
fn duplicate_reg_id_rejected() {
    let selection = vec![classroom("A", vec![]), classroom("A", vec![])];

    let err = validate_classrooms(&selection).unwrap_err();

    assert!(matches!(err, ScheduleError::DuplicateRegId(ref id) if id == "A"));
}

#[test]
fn day_of_week_outside_scale_rejected() {
    let selection = vec![classroom("A", vec![regular(0, "08:00", "09:00")])];

    let err = validate_classrooms(&selection).unwrap_err();

    assert!(matches!(err, ScheduleError::InvalidDayOfWeek { day: 0, .. }));
}

#[test]
fn session_ending_before_start_rejected() {
    let selection = vec![classroom("A", vec![regular(2, "10:00", "10:00")])];

    let err = validate_classrooms(&selection).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid session time for A: 10:00 is not before 10:00"
    );
}

#[test]
fn makeup_times_are_checked() {
    let mut c = classroom("A", vec![]);
    c.schedule.makeup_sessions.push(MakeupSession {
        date: date("2024-10-02"),
        start_time: time("15:00"),
        end_time: time("14:00"),
        room: String::new(),
        location: String::new(),
    });

    assert!(matches!(
        validate_classrooms(&[c]),
        Err(ScheduleError::InvalidSessionTime { .. })
    ));
}

#[test]
fn inverted_week_range_and_stray_exclusion_both_reported() {
    let mut session = regular(2, "08:00", "09:00");
    session.excluded_weeks = vec![20];
    let mut c = classroom("A", vec![session]);
    c.schedule.weeks = WeekRange::new(10, 4);

    let issues = validation_issues(&[c]);

    assert_eq!(issues.len(), 2, "got: {:?}", issues);
    assert!(matches!(
        issues[0],
        ScheduleError::InvalidWeekRange { from: 10, to: 4, .. }
    ));
    assert!(matches!(
        issues[1],
        ScheduleError::ExcludedWeekOutOfRange { week: 20, .. }
    ));
}

#[test]
fn registration_ending_before_start_rejected() {
    let mut c = classroom("A", vec![]);
    c.registration.end_date = date("2024-08-01");

    assert!(matches!(
        validate_classrooms(&[c]),
        Err(ScheduleError::InvalidRegistrationDates { .. })
    ));
}
