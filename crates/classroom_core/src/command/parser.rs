//! Line parser for interpreter commands.
//!
//! # Responsibility
//! - Split one input line into a typed [`Command`] per the interpreter
//!   grammar, or report a descriptive [`ParseError`].
//!
//! # Invariants
//! - Argument split points are command-specific: some commands take the rest
//!   of the line as one argument, others take leading whitespace tokens.
//! - A successfully parsed command carries every argument its registry
//!   operation needs; downstream code never re-validates argument counts.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ParseResult = Result<Command, ParseError>;

/// One fully-parsed interpreter command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add_classroom <name>`; name is the rest of the line.
    AddClassroom { name: String },
    /// `remove_classroom <name>`; name is the rest of the line.
    RemoveClassroom { name: String },
    /// `list_classrooms`
    ListClassrooms,
    /// `add_student <id> <className>`; two whitespace-split tokens.
    AddStudent {
        student_id: String,
        class_name: String,
    },
    /// `list_students <className>`; name is the rest of the line.
    ListStudents { class_name: String },
    /// `schedule_assignment <className> <details>`; first token plus remainder.
    ScheduleAssignment {
        class_name: String,
        details: String,
    },
    /// `submit_assignment <id> <className> <details>`; two tokens plus remainder.
    SubmitAssignment {
        student_id: String,
        class_name: String,
        details: String,
    },
    /// `help`
    Help,
    /// `exit`
    Exit,
}

/// Parse failures for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line is empty or whitespace-only; callers should skip it silently.
    EmptyInput,
    /// First token is not a known command name.
    UnknownCommand(String),
    /// Known command with a missing or ill-shaped argument list.
    MalformedCommand {
        command: &'static str,
        usage: &'static str,
    },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input"),
            Self::UnknownCommand(_) => {
                write!(f, "Unknown command. Type 'help' for commands.")
            }
            Self::MalformedCommand { command, usage } => {
                if usage.is_empty() {
                    write!(f, "Malformed command: `{command}` takes no arguments")
                } else {
                    write!(f, "Malformed command: usage is `{command} {usage}`")
                }
            }
        }
    }
}

impl Error for ParseError {}

/// Parses one raw input line into a [`Command`].
///
/// # Errors
/// - `EmptyInput` for blank lines.
/// - `UnknownCommand` when the first token is not in the command table.
/// - `MalformedCommand` when required arguments are missing or extra tokens
///   are present where the grammar allows none.
pub fn parse_line(line: &str) -> ParseResult {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (trimmed, ""),
    };

    match head {
        "add_classroom" => Ok(Command::AddClassroom {
            name: required_rest("add_classroom", "<name>", rest)?,
        }),
        "remove_classroom" => Ok(Command::RemoveClassroom {
            name: required_rest("remove_classroom", "<name>", rest)?,
        }),
        "list_classrooms" => {
            no_arguments("list_classrooms", rest)?;
            Ok(Command::ListClassrooms)
        }
        "add_student" => {
            let mut tokens = rest.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(student_id), Some(class_name), None) => Ok(Command::AddStudent {
                    student_id: student_id.to_string(),
                    class_name: class_name.to_string(),
                }),
                _ => Err(ParseError::MalformedCommand {
                    command: "add_student",
                    usage: "<id> <className>",
                }),
            }
        }
        "list_students" => Ok(Command::ListStudents {
            class_name: required_rest("list_students", "<className>", rest)?,
        }),
        "schedule_assignment" => {
            let (class_name, details) = token_then_rest(rest).ok_or(
                ParseError::MalformedCommand {
                    command: "schedule_assignment",
                    usage: "<className> <details>",
                },
            )?;
            Ok(Command::ScheduleAssignment {
                class_name: class_name.to_string(),
                details: details.to_string(),
            })
        }
        "submit_assignment" => {
            let (student_id, after_id) =
                token_then_rest(rest).ok_or(ParseError::MalformedCommand {
                    command: "submit_assignment",
                    usage: "<id> <className> <details>",
                })?;
            let (class_name, details) =
                token_then_rest(after_id).ok_or(ParseError::MalformedCommand {
                    command: "submit_assignment",
                    usage: "<id> <className> <details>",
                })?;
            Ok(Command::SubmitAssignment {
                student_id: student_id.to_string(),
                class_name: class_name.to_string(),
                details: details.to_string(),
            })
        }
        "help" => {
            no_arguments("help", rest)?;
            Ok(Command::Help)
        }
        "exit" => {
            no_arguments("exit", rest)?;
            Ok(Command::Exit)
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn required_rest(command: &'static str, usage: &'static str, rest: &str) -> Result<String, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MalformedCommand { command, usage });
    }
    Ok(rest.to_string())
}

fn no_arguments(command: &'static str, rest: &str) -> Result<(), ParseError> {
    if rest.is_empty() {
        return Ok(());
    }
    Err(ParseError::MalformedCommand { command, usage: "" })
}

/// Splits `input` into its first whitespace token and the non-empty remainder.
fn token_then_rest(input: &str) -> Option<(&str, &str)> {
    let (token, rest) = input.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    if token.is_empty() || rest.is_empty() {
        return None;
    }
    Some((token, rest))
}
