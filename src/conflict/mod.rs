//! Placement rules and the conflict checker.
//!
//! A placement rule decides whether one candidate (course, classroom,
//! slot) may be added to the sessions accepted so far. The checker
//! combines rules; a candidate is admitted only if every rule admits it.
//!
//! Rules hold no state. Everything they look at arrives through
//! [`PlacementContext`] and [`Candidate`], so the same rules serve the
//! greedy engine, the validator, or any other search that wants them.
//!
//! # Usage
//!
//! ```
//! use exam_schedule::conflict::{ConflictChecker, rules};
//!
//! let standard = ConflictChecker::standard();
//! assert_eq!(
//!     standard.rule_names(),
//!     vec!["RoomCapacity", "RoomFree", "NoStudentClash", "DailyLoad"]
//! );
//!
//! // Rooms only, ignoring students.
//! let rooms_only = ConflictChecker::new()
//!     .with_rule(rules::RoomCapacity)
//!     .with_rule(rules::RoomFree);
//! assert_eq!(rooms_only.rule_names().len(), 2);
//! ```

mod checker;
pub mod rules;

pub use checker::ConflictChecker;

use crate::models::{Classroom, Enrollment, ExamSlot, Session};
use crate::policy::SchedulingPolicy;
use std::fmt::Debug;

/// State a placement is judged against.
#[derive(Debug, Clone, Copy)]
pub struct PlacementContext<'a> {
    /// Sessions accepted so far.
    pub sessions: &'a [Session],
    /// Who sits which course.
    pub enrollment: &'a Enrollment,
    /// Daily limit, catalog and adjacency rule.
    pub policy: &'a SchedulingPolicy,
}

/// A proposed session.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub course_code: &'a str,
    pub classroom: &'a Classroom,
    pub slot: &'a ExamSlot,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate.
    pub fn new(course_code: &'a str, classroom: &'a Classroom, slot: &'a ExamSlot) -> Self {
        Self {
            course_code,
            classroom,
            slot,
        }
    }
}

/// A hard constraint on placing one session.
pub trait PlacementRule: Send + Sync + Debug {
    /// Rule name (e.g. "RoomFree").
    fn name(&self) -> &'static str;

    /// Whether the candidate may be added to `context.sessions`.
    fn admits(&self, candidate: &Candidate<'_>, context: &PlacementContext<'_>) -> bool;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Whether a room seats everyone enrolled.
#[inline]
pub fn has_capacity(classroom: &Classroom, headcount: usize) -> bool {
    classroom.can_seat(headcount)
}

/// Whether no session already holds the room at the slot.
pub fn is_room_free(sessions: &[Session], classroom_id: &str, slot: &ExamSlot) -> bool {
    !sessions
        .iter()
        .any(|s| s.classroom_id == classroom_id && s.slot == *slot)
}

/// Whether a session at the slot shares a student with the course.
pub fn has_student_clash(
    sessions: &[Session],
    enrollment: &Enrollment,
    course_code: &str,
    slot: &ExamSlot,
) -> bool {
    sessions
        .iter()
        .filter(|s| s.slot == *slot)
        .any(|s| enrollment.share_student(&s.course_code, course_code))
}

/// Whether placing the course at the slot would give one of its students
/// too many exams that day, or an exam next to one they already sit.
///
/// Only `sessions` are considered; courses not yet placed do not count.
pub fn violates_daily_load(
    sessions: &[Session],
    enrollment: &Enrollment,
    policy: &SchedulingPolicy,
    course_code: &str,
    slot: &ExamSlot,
) -> bool {
    enrollment.students_of(course_code).any(|student| {
        let mut same_day = 0usize;
        for s in sessions.iter().filter(|s| s.slot.same_day(slot)) {
            if !enrollment.contains(student, &s.course_code) {
                continue;
            }
            same_day += 1;
            if policy.are_adjacent(&s.slot, slot) {
                return true;
            }
        }
        same_day + 1 > policy.max_exams_per_day
    })
}
