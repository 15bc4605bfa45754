//! Student and course models.
//!
//! Both are identity-only records. Which students sit which course is
//! held by [`Enrollment`](super::Enrollment), not by the records themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A student who may be enrolled in courses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
}

/// A course whose exam needs a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (e.g. "CS101").
    pub code: String,
}

impl Student {
    /// Creates a student with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Course {
    /// Creates a course with the given code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
