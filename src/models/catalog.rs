//! Per-day slot catalog.
//!
//! A catalog is the ordered list of time intervals every exam day offers.
//! The position of a template in the list is its *ordinal*, which is what
//! adjacency is measured in.
//!
//! # Default day
//!
//! | Ordinal | Start | End |
//! |---------|-------|-----|
//! | 0 | 09:00 | 11:00 |
//! | 1 | 11:30 | 13:30 |
//! | 2 | 14:00 | 16:00 |
//! | 3 | 16:30 | 18:30 |

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::ExamSlot;
use crate::error::PolicyError;

/// A daily time interval [start, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTemplate {
    /// Interval start.
    pub start: NaiveTime,
    /// Interval end.
    pub end: NaiveTime,
}

impl SlotTemplate {
    /// Creates a template.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Creates a template from hour/minute pairs.
    ///
    /// Returns `None` if either time is out of range.
    pub fn hm(start: (u32, u32), end: (u32, u32)) -> Option<Self> {
        Some(Self {
            start: NaiveTime::from_hms_opt(start.0, start.1, 0)?,
            end: NaiveTime::from_hms_opt(end.0, end.1, 0)?,
        })
    }

    /// Places this template on a calendar date.
    #[inline]
    pub fn on(&self, date: NaiveDate) -> ExamSlot {
        ExamSlot::new(date, self.start, self.end)
    }
}

/// The ordered slot templates of one exam day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotCatalog {
    templates: Vec<SlotTemplate>,
}

impl SlotCatalog {
    /// Creates a catalog from templates in ordinal order.
    pub fn new(templates: Vec<SlotTemplate>) -> Self {
        Self { templates }
    }

    /// The four-slot day: 09:00, 11:30, 14:00, 16:30, two hours each.
    pub fn four_per_day() -> Self {
        Self::from_hm(&[
            ((9, 0), (11, 0)),
            ((11, 30), (13, 30)),
            ((14, 0), (16, 0)),
            ((16, 30), (18, 30)),
        ])
    }

    /// The earlier three-slot day without the 16:30 slot.
    pub fn three_per_day() -> Self {
        Self::from_hm(&[((9, 0), (11, 0)), ((11, 30), (13, 30)), ((14, 0), (16, 0))])
    }

    fn from_hm(pairs: &[((u32, u32), (u32, u32))]) -> Self {
        Self::new(
            pairs
                .iter()
                .filter_map(|&(start, end)| SlotTemplate::hm(start, end))
                .collect(),
        )
    }

    /// Templates in ordinal order.
    pub fn templates(&self) -> &[SlotTemplate] {
        &self.templates
    }

    /// Number of slots per day.
    pub fn slots_per_day(&self) -> usize {
        self.templates.len()
    }

    /// Ordinal of a slot: index of the template whose start time equals
    /// the slot's start time. `None` for off-catalog slots.
    pub fn ordinal_of(&self, slot: &ExamSlot) -> Option<usize> {
        self.templates.iter().position(|t| t.start == slot.start)
    }

    /// All slots of one date, in ordinal order.
    pub fn slots_on(&self, date: NaiveDate) -> impl Iterator<Item = ExamSlot> + '_ {
        self.templates.iter().map(move |t| t.on(date))
    }

    /// Checks that the catalog is non-empty and its templates are
    /// well-formed, strictly ordered and non-overlapping.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.templates.is_empty() {
            return Err(PolicyError::EmptyCatalog);
        }
        for t in &self.templates {
            if t.end <= t.start {
                return Err(PolicyError::InvertedSlot {
                    start: t.start,
                    end: t.end,
                });
            }
        }
        for pair in self.templates.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(PolicyError::UnorderedSlots {
                    previous_end: pair[0].end,
                    next: pair[1].start,
                });
            }
        }
        Ok(())
    }
}

impl Default for SlotCatalog {
    fn default() -> Self {
        Self::four_per_day()
    }
}
