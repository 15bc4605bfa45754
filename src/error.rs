//! Error types.
//!
//! Infeasibility is never an error: courses that cannot be placed are
//! reported in [`SchedulingResult`](crate::scheduler::SchedulingResult) and
//! rule breaches in [`ValidationReport`](crate::validation::ValidationReport).
//! The errors here cover malformed model edits and invalid policies.

use chrono::NaiveTime;
use thiserror::Error;

/// Errors raised while editing a [`Schedule`](crate::models::Schedule).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("duplicate classroom id: {0}")]
    DuplicateClassroom(String),

    #[error("duplicate student id: {0}")]
    DuplicateStudent(String),

    #[error("duplicate course code: {0}")]
    DuplicateCourse(String),

    #[error("unknown classroom: {0}")]
    UnknownClassroom(String),

    #[error("unknown student: {0}")]
    UnknownStudent(String),

    #[error("unknown course: {0}")]
    UnknownCourse(String),

    #[error("course {0} already has an exam session")]
    AlreadyScheduled(String),
}

/// Errors raised by [`SchedulingPolicy::validate`](crate::policy::SchedulingPolicy::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("slot catalog has no slots")]
    EmptyCatalog,

    #[error("slot {start}-{end} ends before it starts")]
    InvertedSlot { start: NaiveTime, end: NaiveTime },

    #[error("slot starting at {next} is not after the slot ending at {previous_end}")]
    UnorderedSlots {
        previous_end: NaiveTime,
        next: NaiveTime,
    },

    #[error("max_exams_per_day must be at least 1")]
    ZeroDailyLimit,
}
