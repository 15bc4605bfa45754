//! Greedy exam scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `AssignmentEngine` places courses one at a time, largest enrollment
//! first, into the earliest slot and the first classroom (searched
//! round-robin from where the previous placement left off) that every
//! placement rule admits. Placements are never revisited, so a course can
//! end up unscheduled even when some rearrangement would fit it.
//!
//! # KPI
//!
//! `ScheduleKpi` summarises a run: placement rate, exam days used, slot
//! utilisation and seat fill.
//!
//! # References
//!
//! - Carter, Laporte & Lee (1996), "Examination Timetabling: Algorithmic
//!   Strategies and Applications"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated Timetabling"

mod engine;
mod kpi;
mod result;

pub use engine::AssignmentEngine;
pub use kpi::ScheduleKpi;
pub use result::SchedulingResult;
