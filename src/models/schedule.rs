//! Schedule aggregate.
//!
//! A schedule owns the exam-period inputs (classrooms, students, courses,
//! enrollment) and the derived output of the last scheduling run (slot
//! catalog and sessions). Inputs are edited through checked methods so the
//! aggregate stays referentially consistent; output is replaced wholesale
//! by every run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Classroom, Course, Enrollment, ExamSlot, Session, Student};
use crate::error::ScheduleError;

/// Inputs and output of one exam period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    classrooms: Vec<Classroom>,
    students: Vec<Student>,
    courses: Vec<Course>,
    enrollment: Enrollment,
    slots: Vec<ExamSlot>,
    sessions: Vec<Session>,
}

/// Entity and session counts of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub courses: usize,
    pub students: usize,
    pub classrooms: usize,
    pub sessions: usize,
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Courses: {} | Students: {} | Classrooms: {} | Sessions: {}",
            self.courses, self.students, self.classrooms, self.sessions
        )
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- inputs ----

    /// Adds a classroom.
    pub fn add_classroom(&mut self, classroom: Classroom) -> Result<(), ScheduleError> {
        if self.classroom(&classroom.id).is_some() {
            return Err(ScheduleError::DuplicateClassroom(classroom.id));
        }
        self.classrooms.push(classroom);
        Ok(())
    }

    /// Adds a student.
    pub fn add_student(&mut self, student: Student) -> Result<(), ScheduleError> {
        if self.student(&student.id).is_some() {
            return Err(ScheduleError::DuplicateStudent(student.id));
        }
        self.students.push(student);
        Ok(())
    }

    /// Adds a course.
    pub fn add_course(&mut self, course: Course) -> Result<(), ScheduleError> {
        if self.course(&course.code).is_some() {
            return Err(ScheduleError::DuplicateCourse(course.code));
        }
        self.courses.push(course);
        Ok(())
    }

    /// Enrolls a student in a course.
    ///
    /// Returns `Ok(false)` if the student was already enrolled.
    pub fn enroll(&mut self, student_id: &str, course_code: &str) -> Result<bool, ScheduleError> {
        self.require_student(student_id)?;
        self.require_course(course_code)?;
        Ok(self.enrollment.insert(student_id, course_code))
    }

    /// Withdraws a student from a course.
    ///
    /// Returns `Ok(false)` if the student was not enrolled.
    pub fn withdraw(&mut self, student_id: &str, course_code: &str) -> Result<bool, ScheduleError> {
        self.require_student(student_id)?;
        self.require_course(course_code)?;
        Ok(self.enrollment.remove(student_id, course_code))
    }

    /// Removes a classroom and every session held in it.
    pub fn remove_classroom(&mut self, id: &str) -> Result<Classroom, ScheduleError> {
        let idx = self
            .classrooms
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ScheduleError::UnknownClassroom(id.to_string()))?;
        self.sessions.retain(|s| s.classroom_id != id);
        Ok(self.classrooms.remove(idx))
    }

    /// Removes a student and their enrollments.
    ///
    /// Sessions stay; they now seat one student fewer.
    pub fn remove_student(&mut self, id: &str) -> Result<Student, ScheduleError> {
        let idx = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ScheduleError::UnknownStudent(id.to_string()))?;
        self.enrollment.remove_student(id);
        Ok(self.students.remove(idx))
    }

    /// Removes a course, its enrollments and its session.
    pub fn remove_course(&mut self, code: &str) -> Result<Course, ScheduleError> {
        let idx = self
            .courses
            .iter()
            .position(|c| c.code == code)
            .ok_or_else(|| ScheduleError::UnknownCourse(code.to_string()))?;
        self.enrollment.remove_course(code);
        self.sessions.retain(|s| s.course_code != code);
        Ok(self.courses.remove(idx))
    }

    // ---- output ----

    /// Discards the slot catalog and all sessions.
    pub fn clear_output(&mut self) {
        self.slots.clear();
        self.sessions.clear();
    }

    /// Replaces the slot catalog.
    pub fn set_slots(&mut self, slots: Vec<ExamSlot>) {
        self.slots = slots;
    }

    /// Attaches a session produced elsewhere (e.g. reloaded from storage).
    pub fn add_session(&mut self, session: Session) -> Result<(), ScheduleError> {
        self.require_course(&session.course_code)?;
        if self.classroom(&session.classroom_id).is_none() {
            return Err(ScheduleError::UnknownClassroom(session.classroom_id));
        }
        if self.session_for_course(&session.course_code).is_some() {
            return Err(ScheduleError::AlreadyScheduled(session.course_code));
        }
        self.sessions.push(session);
        Ok(())
    }

    /// Appends a session without checks. Callers guarantee consistency.
    pub(crate) fn push_session(&mut self, session: Session) {
        self.sessions.push(session);
    }

    // ---- queries ----

    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn enrollment(&self) -> &Enrollment {
        &self.enrollment
    }

    /// Slot catalog of the last run.
    pub fn slots(&self) -> &[ExamSlot] {
        &self.slots
    }

    /// Sessions in acceptance order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn classroom(&self, id: &str) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.id == id)
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Number of students enrolled in a course.
    pub fn enrolled_count(&self, course_code: &str) -> usize {
        self.enrollment.headcount(course_code)
    }

    /// The session of a course, if it has been scheduled.
    pub fn session_for_course(&self, course_code: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.course_code == course_code)
    }

    /// A student's sessions in chronological order.
    pub fn sessions_for_student(&self, student_id: &str) -> Vec<&Session> {
        self.sorted_sessions(|s| self.enrollment.contains(student_id, &s.course_code))
    }

    /// A classroom's sessions in chronological order.
    pub fn sessions_for_classroom(&self, classroom_id: &str) -> Vec<&Session> {
        self.sorted_sessions(|s| s.classroom_id == classroom_id)
    }

    /// Sessions on a date in chronological order.
    pub fn sessions_on(&self, date: NaiveDate) -> Vec<&Session> {
        self.sorted_sessions(|s| s.slot.date == date)
    }

    /// Entity and session counts.
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            courses: self.courses.len(),
            students: self.students.len(),
            classrooms: self.classrooms.len(),
            sessions: self.sessions.len(),
        }
    }

    fn sorted_sessions(&self, keep: impl Fn(&Session) -> bool) -> Vec<&Session> {
        let mut out: Vec<&Session> = self.sessions.iter().filter(|s| keep(s)).collect();
        out.sort_by(|a, b| a.slot.cmp(&b.slot));
        out
    }

    fn require_student(&self, id: &str) -> Result<(), ScheduleError> {
        match self.student(id) {
            Some(_) => Ok(()),
            None => Err(ScheduleError::UnknownStudent(id.to_string())),
        }
    }

    fn require_course(&self, code: &str) -> Result<(), ScheduleError> {
        match self.course(code) {
            Some(_) => Ok(()),
            None => Err(ScheduleError::UnknownCourse(code.to_string())),
        }
    }
}
