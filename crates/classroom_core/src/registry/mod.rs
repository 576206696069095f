//! Registry layer: ownership root and operation contracts.
//!
//! # Responsibility
//! - Own every classroom and expose the mutating/query operations.
//! - Return semantic errors (`DuplicateClassroom`, `ClassroomNotFound`, ...)
//!   instead of masking missing state.
//!
//! # Invariants
//! - Failed operations leave registry state untouched.
//! - Every classroom is reachable under exactly its own name.

pub mod classroom_registry;
