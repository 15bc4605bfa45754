//! Enrollment relation.
//!
//! Stores which students sit which course as one set of
//! (student, course) pairs with two lookup indices derived from it.
//! Both indices are updated by the same calls, so "students of a course"
//! and "courses of a student" always agree.
//!
//! Iteration order is sorted by ID. Insertion order carries no meaning.
//!
//! Serialized form is the flat list of `(student, course)` pairs; both
//! indices are rebuilt from it on load.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Bidirectional student ↔ course membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct Enrollment {
    by_course: BTreeMap<String, BTreeSet<String>>,
    by_student: BTreeMap<String, BTreeSet<String>>,
}

impl Enrollment {
    /// Creates an empty relation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a (student, course) pair.
    ///
    /// Returns `false` if the pair was already present.
    pub fn insert(&mut self, student_id: &str, course_code: &str) -> bool {
        let added = self
            .by_course
            .entry(course_code.to_string())
            .or_default()
            .insert(student_id.to_string());
        if added {
            self.by_student
                .entry(student_id.to_string())
                .or_default()
                .insert(course_code.to_string());
        }
        added
    }

    /// Removes a (student, course) pair.
    ///
    /// Returns `false` if the pair was not present.
    pub fn remove(&mut self, student_id: &str, course_code: &str) -> bool {
        let removed = remove_edge(&mut self.by_course, course_code, student_id);
        if removed {
            remove_edge(&mut self.by_student, student_id, course_code);
        }
        removed
    }

    /// Removes every pair involving the given course.
    pub fn remove_course(&mut self, course_code: &str) {
        if let Some(students) = self.by_course.remove(course_code) {
            for student in students {
                remove_edge(&mut self.by_student, &student, course_code);
            }
        }
    }

    /// Removes every pair involving the given student.
    pub fn remove_student(&mut self, student_id: &str) {
        if let Some(courses) = self.by_student.remove(student_id) {
            for course in courses {
                remove_edge(&mut self.by_course, &course, student_id);
            }
        }
    }

    /// Whether the student is enrolled in the course.
    pub fn contains(&self, student_id: &str, course_code: &str) -> bool {
        self.by_course
            .get(course_code)
            .is_some_and(|s| s.contains(student_id))
    }

    /// Students enrolled in a course, sorted by ID.
    pub fn students_of<'a>(&'a self, course_code: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.by_course
            .get(course_code)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Courses a student is enrolled in, sorted by code.
    pub fn courses_of<'a>(&'a self, student_id: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.by_student
            .get(student_id)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Number of students enrolled in a course.
    pub fn headcount(&self, course_code: &str) -> usize {
        self.by_course.get(course_code).map_or(0, BTreeSet::len)
    }

    /// Whether two courses have at least one student in common.
    pub fn share_student(&self, a: &str, b: &str) -> bool {
        match (self.by_course.get(a), self.by_course.get(b)) {
            (Some(sa), Some(sb)) => !sa.is_disjoint(sb),
            _ => false,
        }
    }

    /// Total number of (student, course) pairs.
    pub fn len(&self) -> usize {
        self.by_course.values().map(BTreeSet::len).sum()
    }

    /// Whether the relation holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.by_course.is_empty()
    }

    /// Every (student, course) pair, sorted by student then course.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.by_student.iter().flat_map(|(student, courses)| {
            courses
                .iter()
                .map(move |course| (student.as_str(), course.as_str()))
        })
    }
}

impl From<Vec<(String, String)>> for Enrollment {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut enrollment = Self::new();
        for (student, course) in &pairs {
            enrollment.insert(student, course);
        }
        enrollment
    }
}

impl From<Enrollment> for Vec<(String, String)> {
    fn from(enrollment: Enrollment) -> Self {
        enrollment
            .pairs()
            .map(|(s, c)| (s.to_string(), c.to_string()))
            .collect()
    }
}

fn remove_edge(index: &mut BTreeMap<String, BTreeSet<String>>, key: &str, member: &str) -> bool {
    let Some(members) = index.get_mut(key) else {
        return false;
    };
    let removed = members.remove(member);
    if members.is_empty() {
        index.remove(key);
    }
    removed
}
