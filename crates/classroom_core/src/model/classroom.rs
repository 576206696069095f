//! Classroom domain model.
//!
//! # Responsibility
//! - Own enrolled students and scheduled assignments for one classroom.
//! - Mediate every lookup scoped to this classroom.
//!
//! # Invariants
//! - Students are keyed by id; re-enrolling the same id overwrites silently.
//! - Assignments preserve scheduling order.
//! - Submission lookup by prompt returns the first match in scheduling order.

use crate::model::assignment::{Assignment, AssignmentId};
use crate::model::student::Student;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named container of enrolled students and scheduled assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique key within the registry.
    pub name: String,
    students: BTreeMap<String, Student>,
    assignments: Vec<Assignment>,
}

impl Classroom {
    /// Creates an empty classroom named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: BTreeMap::new(),
            assignments: Vec::new(),
        }
    }

    /// Enrolls `student`, overwriting any existing enrollment for the same id.
    pub fn enroll(&mut self, student: Student) {
        self.students.insert(student.id.clone(), student);
    }

    /// Returns whether a student with `student_id` is enrolled here.
    pub fn has_student(&self, student_id: &str) -> bool {
        self.students.contains_key(student_id)
    }

    /// Returns enrolled student ids in sorted order.
    ///
    /// An empty vector is a valid result for an existing classroom.
    pub fn student_ids(&self) -> Vec<String> {
        self.students.keys().cloned().collect()
    }

    /// Appends a new assignment and returns its stable id.
    pub fn schedule(&mut self, prompt: impl Into<String>) -> AssignmentId {
        let assignment = Assignment::new(prompt);
        let id = assignment.id;
        self.assignments.push(assignment);
        id
    }

    /// Finds the first assignment whose prompt equals `prompt`.
    ///
    /// First match in scheduling order wins; a later assignment with the
    /// same prompt is shadowed.
    pub fn find_assignment_mut(&mut self, prompt: &str) -> Option<&mut Assignment> {
        self.assignments.iter_mut().find(|a| a.prompt == prompt)
    }

    /// Returns scheduled assignments in scheduling order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }
}
