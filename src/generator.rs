//! Slot catalog generation.
//!
//! Expands a per-day [`SlotCatalog`] over a date range into the ordered
//! list of concrete [`ExamSlot`]s a scheduling run may use.

use chrono::NaiveDate;

use crate::models::{ExamSlot, SlotCatalog};

/// Produces the slots of an exam period.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use exam_schedule::generator::SlotGenerator;
/// use exam_schedule::models::SlotCatalog;
///
/// let catalog = SlotCatalog::default();
/// let start = NaiveDate::from_ymd_opt(2025, 6, 2);
/// let end = NaiveDate::from_ymd_opt(2025, 6, 4);
/// let slots = SlotGenerator::new(&catalog).generate(start, end);
/// assert_eq!(slots.len(), 12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SlotGenerator<'a> {
    catalog: &'a SlotCatalog,
}

impl<'a> SlotGenerator<'a> {
    /// Creates a generator over a catalog.
    pub fn new(catalog: &'a SlotCatalog) -> Self {
        Self { catalog }
    }

    /// Slots for every date in `[start, end]`, chronological.
    ///
    /// Returns an empty list if either bound is missing or `end < start`.
    pub fn generate(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<ExamSlot> {
        let (Some(start), Some(end)) = (start, end) else {
            return Vec::new();
        };
        if end < start {
            return Vec::new();
        }

        start
            .iter_days()
            .take_while(|d| *d <= end)
            .flat_map(|d| self.catalog.slots_on(d))
            .collect()
    }
}
