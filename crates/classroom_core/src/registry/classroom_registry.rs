//! Classroom registry operations.
//!
//! # Responsibility
//! - Provide the single entry point for every mutating or query operation.
//! - Enforce lookup preconditions before touching classroom state.
//!
//! # Invariants
//! - Every operation either completes and mutates state, or reports a named
//!   condition and leaves state unchanged; no partial mutation.
//! - `classrooms` keys always equal the contained classroom's `name`.
//! - Removal cascades; a recreated classroom starts empty.

use crate::model::assignment::AssignmentId;
use crate::model::classroom::Classroom;
use crate::model::student::Student;
use log::warn;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Named failure conditions for registry operations.
///
/// All variants are recoverable and local to the operation that produced
/// them; none terminate the interpreter session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A classroom with this name already exists.
    DuplicateClassroom(String),
    /// No classroom with this name exists.
    ClassroomNotFound(String),
    /// Submission rejected: classroom missing or student not enrolled in it.
    InvalidSubmissionContext {
        student_id: String,
        class_name: String,
    },
    /// Classroom and student are valid but no assignment matches the prompt.
    AssignmentNotFound {
        class_name: String,
        prompt: String,
    },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateClassroom(name) => write!(f, "classroom already exists: {name}"),
            Self::ClassroomNotFound(name) => write!(f, "classroom not found: {name}"),
            Self::InvalidSubmissionContext {
                student_id,
                class_name,
            } => write!(
                f,
                "invalid classroom or student for submission: student {student_id} in {class_name}"
            ),
            Self::AssignmentNotFound { class_name, prompt } => {
                write!(f, "assignment not found in {class_name}: {prompt}")
            }
        }
    }
}

impl Error for RegistryError {}

/// Result of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// Identity of the assignment that matched the prompt.
    pub assignment_id: AssignmentId,
    /// `false` when the student had already submitted (idempotent no-op).
    pub newly_recorded: bool,
}

/// Process-wide owner of all classrooms.
///
/// Constructed explicitly at startup and injected into the dispatcher;
/// there is no lazily-initialized global instance.
#[derive(Debug, Default)]
pub struct ClassroomRegistry {
    classrooms: BTreeMap<String, Classroom>,
}

impl ClassroomRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty classroom under `name`.
    ///
    /// # Errors
    /// - `DuplicateClassroom` when the name is taken; the existing
    ///   classroom's student/assignment state is left untouched.
    pub fn create_classroom(&mut self, name: &str) -> RegistryResult<()> {
        if self.classrooms.contains_key(name) {
            warn!("event=create_classroom module=registry status=duplicate name={name}");
            return Err(RegistryError::DuplicateClassroom(name.to_string()));
        }
        self.classrooms
            .insert(name.to_string(), Classroom::new(name));
        Ok(())
    }

    /// Removes the classroom under `name`, cascading to its students and
    /// assignments.
    ///
    /// # Errors
    /// - `ClassroomNotFound` when absent. Non-fatal; the session continues.
    pub fn remove_classroom(&mut self, name: &str) -> RegistryResult<()> {
        if self.classrooms.remove(name).is_none() {
            warn!("event=remove_classroom module=registry status=not_found name={name}");
            return Err(RegistryError::ClassroomNotFound(name.to_string()));
        }
        Ok(())
    }

    /// Returns the names of all classrooms, sorted.
    pub fn classroom_names(&self) -> Vec<String> {
        self.classrooms.keys().cloned().collect()
    }

    /// Read access to one classroom, if present.
    pub fn get_classroom(&self, name: &str) -> Option<&Classroom> {
        self.classrooms.get(name)
    }

    /// Enrolls `student_id` into `class_name`.
    ///
    /// Re-enrolling an already-enrolled id overwrites silently, which is an
    /// observable no-op since students carry identity only.
    ///
    /// # Errors
    /// - `ClassroomNotFound` when the classroom is absent.
    pub fn enroll_student(&mut self, student_id: &str, class_name: &str) -> RegistryResult<()> {
        let room = self.classroom_mut(class_name)?;
        room.enroll(Student::new(student_id));
        Ok(())
    }

    /// Returns the sorted student ids enrolled in `class_name`.
    ///
    /// An empty vector is a valid, non-error result.
    ///
    /// # Errors
    /// - `ClassroomNotFound` when the classroom is absent.
    pub fn student_ids(&self, class_name: &str) -> RegistryResult<Vec<String>> {
        let room = self.classroom(class_name)?;
        Ok(room.student_ids())
    }

    /// Schedules a new assignment with `prompt` into `class_name`.
    ///
    /// Returns the new assignment's stable id. Duplicate prompts are
    /// permitted; the new assignment is a distinct entity.
    ///
    /// # Errors
    /// - `ClassroomNotFound` when the classroom is absent.
    pub fn schedule_assignment(
        &mut self,
        class_name: &str,
        prompt: &str,
    ) -> RegistryResult<AssignmentId> {
        let room = self.classroom_mut(class_name)?;
        Ok(room.schedule(prompt))
    }

    /// Records `student_id` as a submitter on the first assignment in
    /// `class_name` whose prompt equals `prompt`.
    ///
    /// Resubmission is idempotent: the call succeeds again and
    /// `newly_recorded` is `false`.
    ///
    /// # Errors
    /// - `InvalidSubmissionContext` when the classroom is absent or the
    ///   student is not enrolled in it.
    /// - `AssignmentNotFound` when no assignment matches the prompt.
    pub fn submit_assignment(
        &mut self,
        student_id: &str,
        class_name: &str,
        prompt: &str,
    ) -> RegistryResult<SubmissionOutcome> {
        let room = match self.classrooms.get_mut(class_name) {
            Some(room) if room.has_student(student_id) => room,
            _ => {
                warn!(
                    "event=submit_assignment module=registry status=invalid_context \
                     student={student_id} class={class_name}"
                );
                return Err(RegistryError::InvalidSubmissionContext {
                    student_id: student_id.to_string(),
                    class_name: class_name.to_string(),
                });
            }
        };

        match room.find_assignment_mut(prompt) {
            Some(assignment) => {
                let newly_recorded = assignment.record_submission(student_id);
                Ok(SubmissionOutcome {
                    assignment_id: assignment.id,
                    newly_recorded,
                })
            }
            None => {
                warn!(
                    "event=submit_assignment module=registry status=assignment_not_found \
                     class={class_name}"
                );
                Err(RegistryError::AssignmentNotFound {
                    class_name: class_name.to_string(),
                    prompt: prompt.to_string(),
                })
            }
        }
    }

    fn classroom(&self, class_name: &str) -> RegistryResult<&Classroom> {
        self.classrooms.get(class_name).ok_or_else(|| {
            warn!("event=lookup_classroom module=registry status=not_found name={class_name}");
            RegistryError::ClassroomNotFound(class_name.to_string())
        })
    }

    fn classroom_mut(&mut self, class_name: &str) -> RegistryResult<&mut Classroom> {
        match self.classrooms.get_mut(class_name) {
            Some(room) => Ok(room),
            None => {
                warn!(
                    "event=lookup_classroom module=registry status=not_found name={class_name}"
                );
                Err(RegistryError::ClassroomNotFound(class_name.to_string()))
            }
        }
    }
}
