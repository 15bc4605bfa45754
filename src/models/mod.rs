//! Exam timetabling domain models.
//!
//! Provides the data types an exam period is described with: the rooms,
//! the people, what they are enrolled in, the slots exams can occupy,
//! and the sessions a scheduling run produces.
//!
//! # Relationships
//!
//! | Type | Keyed by | Refers to |
//! |------|----------|-----------|
//! | `Classroom` | id | |
//! | `Student` | id | |
//! | `Course` | code | |
//! | `Enrollment` | (student id, course code) | `Student`, `Course` |
//! | `ExamSlot` | value | |
//! | `Session` | course code | `Course`, `Classroom`, `ExamSlot` |
//! | `Schedule` | | owns all of the above |

mod catalog;
mod classroom;
mod enrollment;
mod schedule;
mod session;
mod slot;
mod student;

pub use catalog::{SlotCatalog, SlotTemplate};
pub use classroom::Classroom;
pub use enrollment::Enrollment;
pub use schedule::{Schedule, ScheduleSummary};
pub use session::Session;
pub use slot::ExamSlot;
pub use student::{Course, Student};
