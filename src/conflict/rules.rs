//! Built-in placement rules.
//!
//! | Rule | Rejects a candidate when |
//! |------|--------------------------|
//! | `RoomCapacity` | the room has fewer seats than the course has students |
//! | `RoomFree` | the room already hosts an exam in that slot |
//! | `NoStudentClash` | an exam in that slot shares a student with the course |
//! | `DailyLoad` | a student would exceed the daily limit or sit back-to-back exams |

use super::{
    has_capacity, has_student_clash, is_room_free, violates_daily_load, Candidate,
    PlacementContext, PlacementRule,
};

/// Room seats every enrolled student.
#[derive(Debug, Clone, Copy)]
pub struct RoomCapacity;

impl PlacementRule for RoomCapacity {
    fn name(&self) -> &'static str {
        "RoomCapacity"
    }

    fn admits(&self, candidate: &Candidate<'_>, context: &PlacementContext<'_>) -> bool {
        has_capacity(
            candidate.classroom,
            context.enrollment.headcount(candidate.course_code),
        )
    }

    fn description(&self) -> &'static str {
        "Classroom capacity covers enrollment"
    }
}

/// One exam per room per slot.
#[derive(Debug, Clone, Copy)]
pub struct RoomFree;

impl PlacementRule for RoomFree {
    fn name(&self) -> &'static str {
        "RoomFree"
    }

    fn admits(&self, candidate: &Candidate<'_>, context: &PlacementContext<'_>) -> bool {
        is_room_free(context.sessions, &candidate.classroom.id, candidate.slot)
    }

    fn description(&self) -> &'static str {
        "Classroom not already booked at the slot"
    }
}

/// No student sits two exams in the same slot.
#[derive(Debug, Clone, Copy)]
pub struct NoStudentClash;

impl PlacementRule for NoStudentClash {
    fn name(&self) -> &'static str {
        "NoStudentClash"
    }

    fn admits(&self, candidate: &Candidate<'_>, context: &PlacementContext<'_>) -> bool {
        !has_student_clash(
            context.sessions,
            context.enrollment,
            candidate.course_code,
            candidate.slot,
        )
    }

    fn description(&self) -> &'static str {
        "No shared student in the same slot"
    }
}

/// Daily exam limit and back-to-back rule per student.
#[derive(Debug, Clone, Copy)]
pub struct DailyLoad;

impl PlacementRule for DailyLoad {
    fn name(&self) -> &'static str {
        "DailyLoad"
    }

    fn admits(&self, candidate: &Candidate<'_>, context: &PlacementContext<'_>) -> bool {
        !violates_daily_load(
            context.sessions,
            context.enrollment,
            context.policy,
            candidate.course_code,
            candidate.slot,
        )
    }

    fn description(&self) -> &'static str {
        "Per-student daily limit and no adjacent slots"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Enrollment, ExamSlot, Session, SlotCatalog};
    use crate::policy::SchedulingPolicy;
    use chrono::NaiveDate;

    fn slot(ordinal: usize) -> ExamSlot {
        SlotCatalog::default().templates()[ordinal]
            .on(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap())
    }

    struct Fixture {
        enrollment: Enrollment,
        policy: SchedulingPolicy,
        sessions: Vec<Session>,
        small: Classroom,
        large: Classroom,
    }

    impl Fixture {
        fn new() -> Self {
            let mut enrollment = Enrollment::new();
            for s in ["S1", "S2", "S3"] {
                enrollment.insert(s, "BIG");
            }
            enrollment.insert("S1", "SMALL");
            Self {
                enrollment,
                policy: SchedulingPolicy::default(),
                sessions: vec![Session::new("SMALL", "R-small", slot(0))],
                small: Classroom::new("R-small", 2),
                large: Classroom::new("R-large", 10),
            }
        }

        fn context(&self) -> PlacementContext<'_> {
            PlacementContext {
                sessions: &self.sessions,
                enrollment: &self.enrollment,
                policy: &self.policy,
            }
        }
    }

    #[test]
    fn test_room_capacity() {
        let f = Fixture::new();
        let s = slot(2);
        let too_small = Candidate::new("BIG", &f.small, &s);
        let fits = Candidate::new("BIG", &f.large, &s);
        assert!(!RoomCapacity.admits(&too_small, &f.context()));
        assert!(RoomCapacity.admits(&fits, &f.context()));
    }

    #[test]
    fn test_room_free() {
        let f = Fixture::new();
        let s0 = slot(0);
        let taken = Candidate::new("BIG", &f.small, &s0);
        let other_room = Candidate::new("BIG", &f.large, &s0);
        assert!(!RoomFree.admits(&taken, &f.context()));
        assert!(RoomFree.admits(&other_room, &f.context()));
    }

    #[test]
    fn test_no_student_clash() {
        let f = Fixture::new();
        let s0 = slot(0);
        let s2 = slot(2);
        let clash = Candidate::new("BIG", &f.large, &s0);
        let later = Candidate::new("BIG", &f.large, &s2);
        assert!(!NoStudentClash.admits(&clash, &f.context()));
        assert!(NoStudentClash.admits(&later, &f.context()));
    }

    #[test]
    fn test_daily_load() {
        let f = Fixture::new();
        let s1 = slot(1);
        let s3 = slot(3);
        let adjacent = Candidate::new("BIG", &f.large, &s1);
        let spaced = Candidate::new("BIG", &f.large, &s3);
        assert!(!DailyLoad.admits(&adjacent, &f.context()));
        assert!(DailyLoad.admits(&spaced, &f.context()));
    }

    #[test]
    fn test_names_and_descriptions() {
        assert_eq!(RoomCapacity.name(), "RoomCapacity");
        assert_eq!(DailyLoad.description(), "Per-student daily limit and no adjacent slots");
    }
}
