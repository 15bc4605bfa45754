//! Exam session model.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ExamSlot;

/// A course's exam placed in a classroom at a slot.
///
/// Sessions refer to their course and classroom by key; the owning
/// [`Schedule`](super::Schedule) resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    /// Scheduled course code.
    pub course_code: String,
    /// Hosting classroom ID.
    pub classroom_id: String,
    /// Date and time.
    pub slot: ExamSlot,
}

impl Session {
    /// Creates a session.
    pub fn new(
        course_code: impl Into<String>,
        classroom_id: impl Into<String>,
        slot: ExamSlot,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            classroom_id: classroom_id.into(),
            slot,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.course_code, self.slot, self.classroom_id)
    }
}
