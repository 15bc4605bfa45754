//! Post-hoc schedule audit.
//!
//! Re-derives every hard-constraint breach from a finished session list,
//! without assuming anything about how the list was produced. The engine's
//! output should always audit clean; hand-edited or reloaded sessions may
//! not. Detects:
//! - Rooms booked twice in one slot
//! - Rooms too small for their course
//! - Courses with more than one session
//! - Students over the daily exam limit
//! - Students with back-to-back exams

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, instrument};

use crate::conflict::has_capacity;
use crate::error::PolicyError;
use crate::models::{ExamSlot, Schedule, Session};
use crate::policy::{AdjacencyRule, SchedulingPolicy};

/// One hard-constraint breach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Issue {
    /// Two sessions share a classroom and slot.
    RoomDoubleBooked { classroom_id: String, slot: ExamSlot },
    /// A classroom seats fewer students than its course enrolls.
    OverCapacity {
        course_code: String,
        classroom_id: String,
        enrolled: usize,
        capacity: u32,
    },
    /// A course appears in more than one session.
    DuplicateCourseSession { course_code: String, slot: ExamSlot },
    /// A student has two exams in adjacent slots.
    BackToBack {
        student_id: String,
        first_course: String,
        second_course: String,
        date: NaiveDate,
    },
    /// A student has more exams on a date than the daily limit.
    DailyOverload {
        student_id: String,
        date: NaiveDate,
        count: usize,
        limit: usize,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::RoomDoubleBooked { classroom_id, slot } => {
                write!(f, "Room double-booked: {classroom_id} @ {slot}")
            }
            Issue::OverCapacity {
                course_code,
                classroom_id,
                enrolled,
                capacity,
            } => write!(
                f,
                "Capacity issue: {course_code} in {classroom_id} ({enrolled} students > {capacity})"
            ),
            Issue::DuplicateCourseSession { course_code, slot } => {
                write!(f, "Course scheduled more than once: {course_code} again @ {slot}")
            }
            Issue::BackToBack {
                student_id,
                first_course,
                second_course,
                date,
            } => write!(
                f,
                "Back-to-back exams: {student_id} ({first_course} then {second_course}) on {date}"
            ),
            Issue::DailyOverload {
                student_id,
                date,
                count,
                limit,
            } => write!(
                f,
                "More than {limit} exams/day: {student_id} has {count} exams on {date}"
            ),
        }
    }
}

/// Outcome of an audit: issue count plus a one-line-per-issue report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    issues: Vec<Issue>,
    report: String,
}

impl ValidationReport {
    fn from_issues(issues: Vec<Issue>) -> Self {
        let report = if issues.is_empty() {
            "No issues found.".to_string()
        } else {
            issues.iter().map(|i| format!("{i}\n")).collect()
        };
        Self { issues, report }
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Human-readable report, one line per issue.
    pub fn report(&self) -> &str {
        &self.report
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Whether no issue was found.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Schedule auditor.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use exam_schedule::models::{Classroom, Course, Schedule, Session, SlotCatalog, Student};
/// use exam_schedule::validation::Validator;
///
/// let mut schedule = Schedule::new();
/// schedule.add_classroom(Classroom::new("R1", 1)).unwrap();
/// schedule.add_course(Course::new("BIO")).unwrap();
/// for id in ["S1", "S2"] {
///     schedule.add_student(Student::new(id)).unwrap();
///     schedule.enroll(id, "BIO").unwrap();
/// }
/// let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let slot = SlotCatalog::default().templates()[0].on(day);
/// schedule.add_session(Session::new("BIO", "R1", slot)).unwrap();
///
/// let report = Validator::new().validate(&schedule);
/// assert_eq!(report.issue_count(), 1);
/// assert_eq!(report.report(), "Capacity issue: BIO in R1 (2 students > 1)\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    policy: SchedulingPolicy,
}

impl Validator {
    /// Creates a validator for the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator for a custom policy.
    pub fn with_policy(policy: SchedulingPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Audits the schedule's own sessions.
    pub fn validate(&self, schedule: &Schedule) -> ValidationReport {
        self.audit(schedule.sessions(), schedule)
    }

    /// Audits an arbitrary session list against the schedule's classrooms,
    /// students and enrollment.
    ///
    /// Sessions naming an unknown classroom are not capacity-checked.
    #[instrument(skip_all, fields(sessions = sessions.len()))]
    pub fn audit(&self, sessions: &[Session], schedule: &Schedule) -> ValidationReport {
        let mut issues = Vec::new();
        self.check_rooms(sessions, schedule, &mut issues);
        self.check_students(sessions, schedule, &mut issues);

        info!(issues = issues.len(), "validation finished");
        ValidationReport::from_issues(issues)
    }

    fn check_rooms(&self, sessions: &[Session], schedule: &Schedule, issues: &mut Vec<Issue>) {
        let mut room_slots: HashMap<&str, HashSet<ExamSlot>> = HashMap::new();
        let mut seen_courses: HashSet<&str> = HashSet::new();

        for s in sessions {
            if !room_slots
                .entry(s.classroom_id.as_str())
                .or_default()
                .insert(s.slot)
            {
                issues.push(Issue::RoomDoubleBooked {
                    classroom_id: s.classroom_id.clone(),
                    slot: s.slot,
                });
            }

            if let Some(room) = schedule.classroom(&s.classroom_id) {
                let enrolled = schedule.enrolled_count(&s.course_code);
                if !has_capacity(room, enrolled) {
                    issues.push(Issue::OverCapacity {
                        course_code: s.course_code.clone(),
                        classroom_id: s.classroom_id.clone(),
                        enrolled,
                        capacity: room.capacity,
                    });
                }
            }

            if !seen_courses.insert(s.course_code.as_str()) {
                issues.push(Issue::DuplicateCourseSession {
                    course_code: s.course_code.clone(),
                    slot: s.slot,
                });
            }
        }
    }

    fn check_students(&self, sessions: &[Session], schedule: &Schedule, issues: &mut Vec<Issue>) {
        let enrollment = schedule.enrollment();

        for student in schedule.students() {
            let mut mine: Vec<&Session> = sessions
                .iter()
                .filter(|s| enrollment.contains(&student.id, &s.course_code))
                .collect();
            if mine.is_empty() {
                continue;
            }
            mine.sort_by_key(|s| (s.slot.date, s.slot.start, s.slot.end));

            // Off-catalog slots never take part in the ordinal rule and must not
            // split a pair of catalog slots.
            let ranked: Vec<&Session> = mine
                .iter()
                .copied()
                .filter(|s| {
                    self.policy.adjacency != AdjacencyRule::Ordinal
                        || self.policy.ordinal_of(&s.slot).is_some()
                })
                .collect();
            for pair in ranked.windows(2) {
                let (prev, next) = (pair[0], pair[1]);
                if self.policy.are_adjacent(&prev.slot, &next.slot) {
                    issues.push(Issue::BackToBack {
                        student_id: student.id.clone(),
                        first_course: prev.course_code.clone(),
                        second_course: next.course_code.clone(),
                        date: next.slot.date,
                    });
                }
            }

            let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
            for s in &mine {
                *per_day.entry(s.slot.date).or_insert(0) += 1;
            }
            for (date, count) in per_day {
                if count > self.policy.max_exams_per_day {
                    issues.push(Issue::DailyOverload {
                        student_id: student.id.clone(),
                        date,
                        count,
                        limit: self.policy.max_exams_per_day,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Course, SlotCatalog, Student};
    use chrono::NaiveTime;

    fn at(day: u32, start: (u32, u32), end: (u32, u32)) -> ExamSlot {
        ExamSlot::new(
            NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
    }

    fn slot(day: u32, ordinal: usize) -> ExamSlot {
        SlotCatalog::default().templates()[ordinal]
            .on(NaiveDate::from_ymd_opt(2025, 6, day).unwrap())
    }

    /// One student "S1" enrolled in every course; "S2" only in "A".
    fn sample(courses: &[&str]) -> Schedule {
        let mut s = Schedule::new();
        s.add_classroom(Classroom::new("R1", 10)).unwrap();
        s.add_classroom(Classroom::new("R2", 10)).unwrap();
        s.add_classroom(Classroom::new("Tiny", 1)).unwrap();
        s.add_student(Student::new("S1")).unwrap();
        s.add_student(Student::new("S2")).unwrap();
        for &code in courses {
            s.add_course(Course::new(code)).unwrap();
            s.enroll("S1", code).unwrap();
        }
        if courses.contains(&"A") {
            s.enroll("S2", "A").unwrap();
        }
        s
    }

    #[test]
    fn test_clean_schedule() {
        let mut s = sample(&["A", "B"]);
        s.add_session(Session::new("A", "R1", slot(2, 0))).unwrap();
        s.add_session(Session::new("B", "R1", slot(2, 2))).unwrap();
        let report = Validator::new().validate(&s);
        assert!(report.is_clean());
        assert_eq!(report.issue_count(), 0);
        assert_eq!(report.report(), "No issues found.");
    }

    #[test]
    fn test_empty_session_list_is_clean() {
        let s = sample(&["A"]);
        assert!(Validator::new().validate(&s).is_clean());
    }

    #[test]
    fn test_room_double_booking() {
        let s = sample(&["A", "B"]);
        let sessions = vec![
            Session::new("A", "R1", slot(2, 0)),
            Session::new("B", "R1", slot(3, 0)),
            Session::new("B", "R1", slot(2, 0)),
        ];
        let report = Validator::new().audit(&sessions, &s);
        assert!(report.issues().contains(&Issue::RoomDoubleBooked {
            classroom_id: "R1".into(),
            slot: slot(2, 0),
        }));
        assert!(report
            .report()
            .contains("Room double-booked: R1 @ 2025-06-02 09:00-11:00"));
    }

    #[test]
    fn test_capacity() {
        let mut s = sample(&["A"]);
        s.add_session(Session::new("A", "Tiny", slot(2, 0))).unwrap();
        let report = Validator::new().validate(&s);
        assert_eq!(
            report.issues(),
            &[Issue::OverCapacity {
                course_code: "A".into(),
                classroom_id: "Tiny".into(),
                enrolled: 2,
                capacity: 1,
            }]
        );
        assert_eq!(report.report(), "Capacity issue: A in Tiny (2 students > 1)\n");
    }

    #[test]
    fn test_duplicate_course_session() {
        let s = sample(&["B"]);
        let sessions = vec![
            Session::new("B", "R1", slot(2, 0)),
            Session::new("B", "R2", slot(4, 0)),
        ];
        let report = Validator::new().audit(&sessions, &s);
        assert_eq!(report.issue_count(), 1);
        assert!(matches!(
            report.issues()[0],
            Issue::DuplicateCourseSession { .. }
        ));
    }

    #[test]
    fn test_back_to_back() {
        let mut s = sample(&["A", "B"]);
        s.add_session(Session::new("A", "R1", slot(2, 1))).unwrap();
        s.add_session(Session::new("B", "R2", slot(2, 2))).unwrap();
        let report = Validator::new().validate(&s);
        assert_eq!(report.issue_count(), 1);
        assert_eq!(
            report.report(),
            "Back-to-back exams: S1 (A then B) on 2025-06-02\n"
        );
    }

    #[test]
    fn test_back_to_back_sorted_by_ordinal() {
        // Session list order is irrelevant; the student's exams are sorted first.
        let mut s = sample(&["A", "B"]);
        s.add_session(Session::new("B", "R2", slot(2, 3))).unwrap();
        s.add_session(Session::new("A", "R1", slot(2, 2))).unwrap();
        let report = Validator::new().validate(&s);
        assert_eq!(report.issue_count(), 1);
        assert!(report.report().contains("(A then B)"));
    }

    #[test]
    fn test_adjacent_ordinals_on_different_days() {
        let mut s = sample(&["A", "B"]);
        s.add_session(Session::new("A", "R1", slot(2, 3))).unwrap();
        s.add_session(Session::new("B", "R1", slot(3, 0))).unwrap();
        assert!(Validator::new().validate(&s).is_clean());
    }

    #[test]
    fn test_off_catalog_slot_not_adjacent() {
        let mut s = sample(&["A", "B"]);
        let odd = ExamSlot::new(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        );
        s.add_session(Session::new("A", "R1", slot(2, 0))).unwrap();
        s.add_session(Session::new("B", "R1", odd)).unwrap();
        assert!(Validator::new().validate(&s).is_clean());
    }

    #[test]
    fn test_touching_times_scanned_chronologically() {
        let mut s = sample(&["EARLY", "MID", "LATE"]);
        // MID is a catalog slot; EARLY and LATE touch it from either side.
        s.add_session(Session::new("LATE", "R1", at(2, (11, 0), (11, 30)))).unwrap();
        s.add_session(Session::new("MID", "R1", slot(2, 0))).unwrap();
        s.add_session(Session::new("EARLY", "R1", at(2, (8, 0), (9, 0)))).unwrap();

        let policy = SchedulingPolicy::default()
            .with_adjacency(AdjacencyRule::TouchingTimes)
            .with_max_exams_per_day(5);
        let report = Validator::with_policy(policy).unwrap().validate(&s);
        assert_eq!(report.issue_count(), 2);
        assert_eq!(
            report.report(),
            "Back-to-back exams: S1 (EARLY then MID) on 2025-06-02\n\
             Back-to-back exams: S1 (MID then LATE) on 2025-06-02\n"
        );
    }

    #[test]
    fn test_off_catalog_slot_does_not_hide_ordinal_pair() {
        let mut s = sample(&["A", "B", "ODD"]);
        s.add_session(Session::new("A", "R1", slot(2, 0))).unwrap();
        s.add_session(Session::new("ODD", "R1", at(2, (11, 0), (11, 20)))).unwrap();
        s.add_session(Session::new("B", "R1", slot(2, 1))).unwrap();

        let policy = SchedulingPolicy::default().with_max_exams_per_day(3);
        let report = Validator::with_policy(policy).unwrap().validate(&s);
        assert_eq!(
            report.issues(),
            &[Issue::BackToBack {
                student_id: "S1".into(),
                first_course: "A".into(),
                second_course: "B".into(),
                date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            }]
        );
    }

    #[test]
    fn test_daily_overload() {
        let mut s = sample(&["A", "B", "C"]);
        s.add_session(Session::new("A", "R1", slot(2, 0))).unwrap();
        s.add_session(Session::new("B", "R1", slot(2, 2))).unwrap();
        s.add_session(Session::new("C", "R1", slot(2, 3))).unwrap();

        // B and C are also back-to-back.
        let report = Validator::new().validate(&s);
        assert_eq!(report.issue_count(), 2);
        assert!(report
            .report()
            .contains("More than 2 exams/day: S1 has 3 exams on 2025-06-02"));

        let relaxed = Validator::with_policy(
            SchedulingPolicy::default().with_adjacency(AdjacencyRule::Disabled),
        )
        .unwrap();
        let report = relaxed.validate(&s);
        assert_eq!(
            report.issues(),
            &[Issue::DailyOverload {
                student_id: "S1".into(),
                date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                count: 3,
                limit: 2,
            }]
        );
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let policy = SchedulingPolicy::default().with_catalog(SlotCatalog::new(vec![]));
        assert_eq!(
            Validator::with_policy(policy).unwrap_err(),
            PolicyError::EmptyCatalog
        );
    }

    #[test]
    fn test_report_serializes() {
        let mut s = sample(&["A"]);
        s.add_session(Session::new("A", "Tiny", slot(2, 0))).unwrap();
        let json = serde_json::to_value(Validator::new().validate(&s)).unwrap();
        assert_eq!(json["issues"][0]["OverCapacity"]["capacity"], 1);
    }
}
