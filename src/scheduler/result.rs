//! Scheduling run output.

use serde::Serialize;

use crate::models::{Course, Session};

/// Sessions produced by a run and the courses that could not be placed.
///
/// Unscheduled courses keep the order the engine tried them in
/// (largest enrollment first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulingResult {
    sessions: Vec<Session>,
    unscheduled: Vec<Course>,
}

impl SchedulingResult {
    pub(crate) fn new(sessions: Vec<Session>, unscheduled: Vec<Course>) -> Self {
        Self {
            sessions,
            unscheduled,
        }
    }

    /// Accepted sessions in acceptance order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Courses without a session.
    pub fn unscheduled(&self) -> &[Course] {
        &self.unscheduled
    }

    /// Whether every course was placed.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// Number of placed courses.
    pub fn scheduled_count(&self) -> usize {
        self.sessions.len()
    }

    /// Splits into (sessions, unscheduled).
    pub fn into_parts(self) -> (Vec<Session>, Vec<Course>) {
        (self.sessions, self.unscheduled)
    }
}
