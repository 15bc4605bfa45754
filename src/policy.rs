//! Scheduling policy.
//!
//! Collects the tunable parts of the hard constraints: which slots a day
//! offers, how many exams a student may sit per day, and when two
//! same-day exams count as back-to-back.
//!
//! The default policy is four slots per day, at most two exams per
//! student per day, and no exams in slots whose ordinals differ by one.
//!
//! # Example
//!
//! ```
//! use exam_schedule::policy::{AdjacencyRule, SchedulingPolicy};
//! use exam_schedule::models::SlotCatalog;
//!
//! let policy = SchedulingPolicy::default()
//!     .with_catalog(SlotCatalog::three_per_day())
//!     .with_adjacency(AdjacencyRule::TouchingTimes);
//! assert!(policy.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::models::{ExamSlot, SlotCatalog};

/// When two same-day exams are too close together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyRule {
    /// Catalog ordinals differ by exactly one. Off-catalog slots are never adjacent.
    #[default]
    Ordinal,
    /// One slot ends exactly when the other starts.
    TouchingTimes,
    /// No adjacency restriction.
    Disabled,
}

/// Tunable hard-constraint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingPolicy {
    /// Slots offered on every exam day.
    pub catalog: SlotCatalog,
    /// Maximum exams one student may sit on one date.
    pub max_exams_per_day: usize,
    /// Back-to-back rule.
    pub adjacency: AdjacencyRule,
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self {
            catalog: SlotCatalog::default(),
            max_exams_per_day: 2,
            adjacency: AdjacencyRule::Ordinal,
        }
    }
}

impl SchedulingPolicy {
    /// Sets the slot catalog.
    pub fn with_catalog(mut self, catalog: SlotCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Sets the per-day exam limit.
    pub fn with_max_exams_per_day(mut self, max: usize) -> Self {
        self.max_exams_per_day = max;
        self
    }

    /// Sets the adjacency rule.
    pub fn with_adjacency(mut self, rule: AdjacencyRule) -> Self {
        self.adjacency = rule;
        self
    }

    /// Checks the catalog and the daily limit.
    pub fn validate(&self) -> Result<(), PolicyError> {
        self.catalog.validate()?;
        if self.max_exams_per_day == 0 {
            return Err(PolicyError::ZeroDailyLimit);
        }
        Ok(())
    }

    /// Catalog ordinal of a slot.
    #[inline]
    pub fn ordinal_of(&self, slot: &ExamSlot) -> Option<usize> {
        self.catalog.ordinal_of(slot)
    }

    /// Whether two slots are back-to-back under this policy.
    pub fn are_adjacent(&self, a: &ExamSlot, b: &ExamSlot) -> bool {
        if !a.same_day(b) {
            return false;
        }
        match self.adjacency {
            AdjacencyRule::Ordinal => match (self.ordinal_of(a), self.ordinal_of(b)) {
                (Some(x), Some(y)) => x.abs_diff(y) == 1,
                _ => false,
            },
            AdjacencyRule::TouchingTimes => a.touches(b),
            AdjacencyRule::Disabled => false,
        }
    }
}
