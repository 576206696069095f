//! Command boundary: line parsing and dispatch.
//!
//! # Responsibility
//! - Turn one raw input line into a typed command or a parse failure.
//! - Execute typed commands against the injected registry and render one
//!   human-readable outcome per command.
//!
//! # Invariants
//! - Registry operations are never invoked with undefined arguments;
//!   malformed input is rejected during parsing.
//! - No domain error terminates the session; only `exit` does.

pub mod dispatcher;
pub mod parser;
