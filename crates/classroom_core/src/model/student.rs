//! Student domain model.
//!
//! # Responsibility
//! - Hold student identity for enrollment bookkeeping.
//!
//! # Invariants
//! - Identity is the `id` string; two students with equal ids are the same
//!   student as far as the registry is concerned.

use serde::{Deserialize, Serialize};

/// Enrollment record for one student.
///
/// Carries identity only. Created on enrollment and dropped when the owning
/// classroom is removed; there is no explicit unenroll operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Caller-supplied stable identifier.
    pub id: String,
}

impl Student {
    /// Creates an enrollment record for `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
