//! Domain model for the virtual classroom registry.
//!
//! # Responsibility
//! - Define the canonical entities owned by the registry.
//! - Keep entity-local invariants next to the data they guard.
//!
//! # Invariants
//! - Ownership is a strict tree: registry -> classroom -> student/assignment.
//! - No entity is shared across two owners and no cycles exist.

pub mod assignment;
pub mod classroom;
pub mod student;
