//! Greedy exam assignment.
//!
//! # Algorithm
//!
//! 1. Discard the schedule's previous slots and sessions.
//! 2. Expand the policy's slot catalog over the date range.
//! 3. Order courses by enrollment, largest first (stable on ties).
//! 4. For each course, scan slots chronologically; within a slot scan
//!    classrooms starting at the rotation cursor and wrapping once.
//!    Take the first (slot, classroom) the conflict checker admits and
//!    move the cursor one past that classroom.
//! 5. Courses with no admissible pair are reported unscheduled.
//!
//! The cursor carries over from course to course, which spreads
//! consecutive placements across rooms instead of filling room 0 first.
//!
//! # Complexity
//! O(c · s · r · p · e) where c=courses, s=slots, r=classrooms,
//! p=sessions placed so far, e=average enrollment.

use std::cmp::Reverse;

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use super::SchedulingResult;
use crate::conflict::{Candidate, ConflictChecker, PlacementContext};
use crate::error::PolicyError;
use crate::generator::SlotGenerator;
use crate::models::{Schedule, Session};
use crate::policy::SchedulingPolicy;

/// Greedy, single-pass exam scheduler.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use exam_schedule::models::{Classroom, Course, Schedule, Student};
/// use exam_schedule::scheduler::AssignmentEngine;
///
/// let mut schedule = Schedule::new();
/// schedule.add_classroom(Classroom::new("R1", 30)).unwrap();
/// schedule.add_student(Student::new("S1")).unwrap();
/// schedule.add_course(Course::new("MATH101")).unwrap();
/// schedule.enroll("S1", "MATH101").unwrap();
///
/// let day = NaiveDate::from_ymd_opt(2025, 6, 2);
/// let result = AssignmentEngine::new().generate(&mut schedule, day, day);
/// assert!(result.is_complete());
/// assert_eq!(result.sessions()[0].classroom_id, "R1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentEngine {
    policy: SchedulingPolicy,
    checker: ConflictChecker,
}

impl AssignmentEngine {
    /// Creates an engine with the default policy and the standard rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom policy.
    pub fn with_policy(policy: SchedulingPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self {
            policy,
            checker: ConflictChecker::standard(),
        })
    }

    /// Replaces the placement rules.
    pub fn with_checker(mut self, checker: ConflictChecker) -> Self {
        self.checker = checker;
        self
    }

    pub fn policy(&self) -> &SchedulingPolicy {
        &self.policy
    }

    /// Rebuilds the schedule's slots and sessions for `[start, end]`.
    ///
    /// A missing or inverted range yields no slots, so every course is
    /// reported unscheduled.
    #[instrument(
        skip_all,
        fields(
            courses = schedule.courses().len(),
            classrooms = schedule.classrooms().len()
        )
    )]
    pub fn generate(
        &self,
        schedule: &mut Schedule,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> SchedulingResult {
        schedule.clear_output();
        schedule.set_slots(SlotGenerator::new(&self.policy.catalog).generate(start, end));
        if schedule.slots().is_empty() {
            warn!(?start, ?end, "empty exam period");
        }

        let order = sort_courses(schedule);
        let room_count = schedule.classrooms().len();

        if room_count == 0 {
            warn!("no classrooms; every course is unscheduled");
            let unscheduled = order
                .iter()
                .map(|&i| schedule.courses()[i].clone())
                .collect();
            return SchedulingResult::new(Vec::new(), unscheduled);
        }

        let mut unscheduled = Vec::new();
        let mut cursor = 0;

        for idx in order {
            let course = schedule.courses()[idx].clone();
            match self.find_placement(schedule, &course.code, cursor) {
                Some((session, room_idx)) => {
                    debug!(
                        course = %course.code,
                        classroom = %session.classroom_id,
                        slot = %session.slot,
                        "placed"
                    );
                    cursor = (room_idx + 1) % room_count;
                    schedule.push_session(session);
                }
                None => {
                    warn!(
                        course = %course.code,
                        enrolled = schedule.enrolled_count(&course.code),
                        "no admissible slot"
                    );
                    unscheduled.push(course);
                }
            }
        }

        info!(
            slots = schedule.slots().len(),
            scheduled = schedule.sessions().len(),
            unscheduled = unscheduled.len(),
            "schedule generated"
        );
        SchedulingResult::new(schedule.sessions().to_vec(), unscheduled)
    }

    /// First admissible (slot, classroom) for a course, with the
    /// classroom's index.
    fn find_placement(
        &self,
        schedule: &Schedule,
        course_code: &str,
        cursor: usize,
    ) -> Option<(Session, usize)> {
        let rooms = schedule.classrooms();
        let context = PlacementContext {
            sessions: schedule.sessions(),
            enrollment: schedule.enrollment(),
            policy: &self.policy,
        };

        for slot in schedule.slots() {
            for offset in 0..rooms.len() {
                let idx = (cursor + offset) % rooms.len();
                let room = &rooms[idx];
                if self
                    .checker
                    .admits(&Candidate::new(course_code, room, slot), &context)
                {
                    return Some((Session::new(course_code, room.id.as_str(), *slot), idx));
                }
            }
        }
        None
    }
}

/// Course indices by enrollment, descending. `sort_by_key` is stable, so
/// equal enrollments keep their insertion order.
fn sort_courses(schedule: &Schedule) -> Vec<usize> {
    let courses = schedule.courses();
    let mut indices: Vec<usize> = (0..courses.len()).collect();
    indices.sort_by_key(|&i| Reverse(schedule.enrolled_count(&courses[i].code)));
    indices
}
