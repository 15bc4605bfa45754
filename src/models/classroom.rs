//! Classroom model.
//!
//! A classroom is the room resource an exam session occupies. Only its
//! seat count matters to the scheduler; room features are not modelled.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A room that can host one exam per slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier (e.g. "B-204").
    pub id: String,
    /// Number of seats.
    pub capacity: u32,
}

impl Classroom {
    /// Creates a classroom with the given seat count.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            capacity,
        }
    }

    /// Whether `headcount` students fit in this room.
    #[inline]
    pub fn can_seat(&self, headcount: usize) -> bool {
        headcount <= self.capacity as usize
    }
}

impl fmt::Display for Classroom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.capacity)
    }
}
