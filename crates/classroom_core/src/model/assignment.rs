//! Assignment domain model.
//!
//! # Responsibility
//! - Pair a prompt with the set of students who have submitted against it.
//! - Keep submission recording idempotent.
//!
//! # Invariants
//! - `id` is stable and never reused for another assignment.
//! - `submitters` grows monotonically; there is no un-submit.
//! - Two assignments may share a prompt and still be distinct entities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Stable identifier for a scheduled assignment.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Submission resolution matches on prompt text, not on this id; the id
/// exists so assignments with equal prompts keep distinct identity.
pub type AssignmentId = Uuid;

/// One scheduled assignment within a classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Stable entity identity, assigned at scheduling time.
    pub id: AssignmentId,
    /// Prompt text shown to students. Also the lookup key for submissions.
    pub prompt: String,
    /// Ids of students recorded as having submitted. Sorted for
    /// deterministic enumeration.
    pub submitters: BTreeSet<String>,
}

impl Assignment {
    /// Creates an assignment with a generated stable id and no submitters.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.into(),
            submitters: BTreeSet::new(),
        }
    }

    /// Records `student_id` as a submitter.
    ///
    /// Returns `true` when the submitter was newly recorded, `false` when
    /// the student had already submitted. Resubmission is a silent no-op.
    pub fn record_submission(&mut self, student_id: impl Into<String>) -> bool {
        self.submitters.insert(student_id.into())
    }

    /// Returns whether `student_id` has submitted this assignment.
    pub fn has_submission(&self, student_id: &str) -> bool {
        self.submitters.contains(student_id)
    }
}
