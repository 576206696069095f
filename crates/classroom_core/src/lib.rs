//! Core domain logic for the virtual classroom registry.
//! This crate is the single source of truth for business invariants.

pub mod command;
pub mod logging;
pub mod model;
pub mod registry;

pub use command::dispatcher::{CommandDispatcher, Dispatch};
pub use command::parser::{parse_line, Command, ParseError, ParseResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assignment::{Assignment, AssignmentId};
pub use model::classroom::Classroom;
pub use model::student::Student;
pub use registry::classroom_registry::{
    ClassroomRegistry, RegistryError, RegistryResult, SubmissionOutcome,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
