//! Examination timetabling.
//!
//! Assigns course exams to (date, slot, classroom) triples under the usual
//! hard constraints of an exam period, and audits finished timetables
//! against the same constraints.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Classroom`, `Student`, `Course`,
//!   `Enrollment`, `ExamSlot`, `SlotCatalog`, `Session`, `Schedule`
//! - **`policy`**: Tunable constraint settings (slot catalog, daily limit,
//!   adjacency rule)
//! - **`generator`**: Expands a slot catalog over a date range
//! - **`conflict`**: Placement rules shared by the scheduler and the auditor
//! - **`scheduler`**: Greedy `AssignmentEngine`, `SchedulingResult`, `ScheduleKpi`
//! - **`validation`**: Post-hoc `Validator` producing a `ValidationReport`
//!
//! # Hard constraints
//!
//! 1. A classroom seats every student enrolled in the course it hosts.
//! 2. A classroom hosts at most one exam per slot.
//! 3. No student sits two exams in the same slot.
//! 4. No student sits more than two exams on one date.
//! 5. No student sits exams in adjacent slots of the same date.
//!
//! The scheduler is a greedy heuristic: it never backtracks, so a course can
//! be left unscheduled even when a feasible timetable exists. Unplaced
//! courses are reported as data, not as errors.
//!
//! # Logging
//!
//! The engine and validator emit `tracing` events and spans. No subscriber
//! is installed by this crate.
//!
//! # References
//!
//! - Carter, Laporte & Lee (1996), "Examination Timetabling: Algorithmic
//!   Strategies and Applications"
//! - Qu et al. (2009), "A Survey of Search Methodologies and Automated System
//!   Development for Examination Timetabling"

pub mod conflict;
pub mod error;
pub mod generator;
pub mod models;
pub mod policy;
pub mod scheduler;
pub mod validation;

pub use error::{PolicyError, ScheduleError};
