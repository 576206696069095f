//! Command dispatcher over the injected registry.
//!
//! # Responsibility
//! - Execute one parsed command against the registry.
//! - Render exactly one human-readable outcome per command (success line or
//!   diagnostic; only `help` spans multiple lines).
//!
//! # Invariants
//! - The registry instance is injected at construction; the dispatcher never
//!   reaches for global state.
//! - Domain errors are rendered and swallowed; the session continues.

use crate::command::parser::{parse_line, Command, ParseError};
use crate::registry::classroom_registry::{ClassroomRegistry, RegistryResult};

const HELP_TEXT: &str = "\
Available commands:
add_classroom <name>
remove_classroom <name>
list_classrooms
add_student <id> <className>
list_students <className>
schedule_assignment <className> <details>
submit_assignment <id> <className> <details>
help
exit";

/// Outcome of dispatching one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Outcome text to show the operator; the session continues.
    Reply(String),
    /// Blank input; nothing to show, the session continues.
    Silent,
    /// Farewell text to show; the session ends with exit code 0.
    Exit(String),
}

/// Interpreter boundary owning the process-wide registry.
pub struct CommandDispatcher {
    registry: ClassroomRegistry,
}

impl CommandDispatcher {
    /// Creates a dispatcher over an explicitly constructed registry.
    pub fn new(registry: ClassroomRegistry) -> Self {
        Self { registry }
    }

    /// Read access to the owned registry, mainly for assertions in tests.
    pub fn registry(&self) -> &ClassroomRegistry {
        &self.registry
    }

    /// Parses and executes one raw input line.
    pub fn dispatch_line(&mut self, line: &str) -> Dispatch {
        match parse_line(line) {
            Ok(command) => self.dispatch(command),
            Err(ParseError::EmptyInput) => Dispatch::Silent,
            Err(err) => Dispatch::Reply(err.to_string()),
        }
    }

    /// Executes one parsed command.
    pub fn dispatch(&mut self, command: Command) -> Dispatch {
        match command {
            Command::AddClassroom { name } => render(
                self.registry
                    .create_classroom(&name)
                    .map(|()| format!("Classroom {name} has been created.")),
            ),
            Command::RemoveClassroom { name } => render(
                self.registry
                    .remove_classroom(&name)
                    .map(|()| format!("Classroom {name} has been removed.")),
            ),
            Command::ListClassrooms => {
                let names = self.registry.classroom_names();
                if names.is_empty() {
                    Dispatch::Reply("No classrooms available.".to_string())
                } else {
                    Dispatch::Reply(names.join("\n"))
                }
            }
            Command::AddStudent {
                student_id,
                class_name,
            } => render(self.registry.enroll_student(&student_id, &class_name).map(
                |()| format!("Student {student_id} has been enrolled in {class_name}."),
            )),
            Command::ListStudents { class_name } => {
                render(self.registry.student_ids(&class_name).map(|ids| {
                    if ids.is_empty() {
                        format!("No students in {class_name}")
                    } else {
                        ids.join("\n")
                    }
                }))
            }
            Command::ScheduleAssignment {
                class_name,
                details,
            } => render(
                self.registry
                    .schedule_assignment(&class_name, &details)
                    .map(|_id| format!("Assignment for {class_name} has been scheduled.")),
            ),
            Command::SubmitAssignment {
                student_id,
                class_name,
                details,
            } => render(
                self.registry
                    .submit_assignment(&student_id, &class_name, &details)
                    .map(|_outcome| {
                        format!("Assignment submitted by Student {student_id} in {class_name}.")
                    }),
            ),
            Command::Help => Dispatch::Reply(HELP_TEXT.to_string()),
            Command::Exit => Dispatch::Exit("Exiting classroom manager.".to_string()),
        }
    }
}

/// Renders an operation outcome as one reply line, success or diagnostic.
fn render(outcome: RegistryResult<String>) -> Dispatch {
    match outcome {
        Ok(line) => Dispatch::Reply(line),
        Err(err) => Dispatch::Reply(err.to_string()),
    }
}
