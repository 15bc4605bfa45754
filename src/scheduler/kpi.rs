//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement rate | scheduled courses / all courses |
//! | Exam days | distinct dates holding at least one session |
//! | Slot utilisation | sessions / (slots × classrooms) |
//! | Seat fill | seated students / seats in the rooms used |

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::SchedulingResult;
use crate::models::Schedule;

/// Exam schedule performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleKpi {
    /// Courses considered.
    pub total_courses: usize,
    /// Courses with a session.
    pub scheduled_courses: usize,
    /// Courses without a session.
    pub unscheduled_courses: usize,
    /// Fraction of courses placed (0.0..1.0). 1.0 when there are no courses.
    pub placement_rate: f64,
    /// Distinct dates used.
    pub exam_days: usize,
    /// Fraction of (slot, classroom) pairs holding an exam.
    pub slot_utilization: f64,
    /// Fraction of offered seats actually taken.
    pub seat_fill: f64,
    /// Sessions per classroom.
    pub sessions_by_classroom: HashMap<String, usize>,
}

impl ScheduleKpi {
    /// Computes KPIs for a run.
    ///
    /// # Arguments
    /// * `schedule` - The schedule the run was made on (rooms, slots, enrollment).
    /// * `result` - The run's output.
    pub fn calculate(schedule: &Schedule, result: &SchedulingResult) -> Self {
        let scheduled = result.scheduled_count();
        let unscheduled = result.unscheduled().len();
        let total = scheduled + unscheduled;

        let mut days = BTreeSet::new();
        let mut by_room: HashMap<String, usize> = HashMap::new();
        let mut seated: u64 = 0;
        let mut seats: u64 = 0;

        for session in result.sessions() {
            days.insert(session.slot.date);
            *by_room.entry(session.classroom_id.clone()).or_insert(0) += 1;
            seated += schedule.enrolled_count(&session.course_code) as u64;
            if let Some(room) = schedule.classroom(&session.classroom_id) {
                seats += u64::from(room.capacity);
            }
        }

        let pairs = schedule.slots().len() * schedule.classrooms().len();

        Self {
            total_courses: total,
            scheduled_courses: scheduled,
            unscheduled_courses: unscheduled,
            placement_rate: ratio(scheduled as f64, total as f64, 1.0),
            exam_days: days.len(),
            slot_utilization: ratio(scheduled as f64, pairs as f64, 0.0),
            seat_fill: ratio(seated as f64, seats as f64, 0.0),
            sessions_by_classroom: by_room,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_placement_rate: f64, min_seat_fill: f64) -> bool {
        self.placement_rate >= min_placement_rate && self.seat_fill >= min_seat_fill
    }
}

fn ratio(num: f64, den: f64, empty: f64) -> f64 {
    if den <= 0.0 {
        empty
    } else {
        num / den
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Course, Student};
    use crate::scheduler::AssignmentEngine;
    use chrono::NaiveDate;

    fn sample() -> Schedule {
        let mut s = Schedule::new();
        s.add_classroom(Classroom::new("R1", 10)).unwrap();
        s.add_classroom(Classroom::new("R2", 10)).unwrap();
        for i in 0..12 {
            s.add_student(Student::new(format!("S{i}"))).unwrap();
        }
        for code in ["A", "B", "HUGE"] {
            s.add_course(Course::new(code)).unwrap();
        }
        for i in 0..5 {
            s.enroll(&format!("S{i}"), "A").unwrap();
        }
        for i in 5..10 {
            s.enroll(&format!("S{i}"), "B").unwrap();
        }
        for i in 0..12 {
            s.enroll(&format!("S{i}"), "HUGE").unwrap();
        }
        s
    }

    #[test]
    fn test_kpi_basic() {
        let mut s = sample();
        let day = NaiveDate::from_ymd_opt(2025, 6, 2);
        let result = AssignmentEngine::new().generate(&mut s, day, day);
        let kpi = ScheduleKpi::calculate(&s, &result);

        assert_eq!(kpi.total_courses, 3);
        assert_eq!(kpi.scheduled_courses, 2);
        assert_eq!(kpi.unscheduled_courses, 1);
        assert!((kpi.placement_rate - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.exam_days, 1);
        // 2 sessions over 4 slots × 2 rooms
        assert!((kpi.slot_utilization - 0.25).abs() < 1e-10);
        // 10 seated in 20 seats
        assert!((kpi.seat_fill - 0.5).abs() < 1e-10);
        assert_eq!(kpi.sessions_by_classroom["R1"], 1);
        assert_eq!(kpi.sessions_by_classroom["R2"], 1);
    }

    #[test]
    fn test_kpi_empty() {
        let mut s = Schedule::new();
        let result = AssignmentEngine::new().generate(&mut s, None, None);
        let kpi = ScheduleKpi::calculate(&s, &result);
        assert_eq!(kpi.total_courses, 0);
        assert!((kpi.placement_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.slot_utilization, 0.0);
        assert_eq!(kpi.seat_fill, 0.0);
        assert!(kpi.sessions_by_classroom.is_empty());
    }

    #[test]
    fn test_meets_thresholds() {
        let mut s = sample();
        let day = NaiveDate::from_ymd_opt(2025, 6, 2);
        let result = AssignmentEngine::new().generate(&mut s, day, day);
        let kpi = ScheduleKpi::calculate(&s, &result);
        assert!(kpi.meets_thresholds(0.5, 0.5));
        assert!(!kpi.meets_thresholds(1.0, 0.0));
    }
}
