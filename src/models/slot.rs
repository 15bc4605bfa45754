//! Exam slot value type.
//!
//! A slot is a date plus a start/end time. Two slots are the same slot
//! exactly when all three fields match; there is no separate identity.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One exam interval on one calendar date.
///
/// Ordering is chronological: date, then start, then end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExamSlot {
    /// Calendar date.
    pub date: NaiveDate,
    /// Start time (inclusive).
    pub start: NaiveTime,
    /// End time (exclusive).
    pub end: NaiveTime,
}

impl ExamSlot {
    /// Creates a slot.
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self { date, start, end }
    }

    /// Whether both slots fall on the same date.
    #[inline]
    pub fn same_day(&self, other: &Self) -> bool {
        self.date == other.date
    }

    /// Whether one slot ends exactly when the other starts, on the same date.
    pub fn touches(&self, other: &Self) -> bool {
        self.same_day(other) && (self.end == other.start || other.end == self.start)
    }
}

impl fmt::Display for ExamSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.date,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
