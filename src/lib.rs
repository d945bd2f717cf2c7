//! # doge
//!
//! doge is a small, dynamically typed scripting language implemented as a
//! three-stage pipeline: a lexer, a Pratt parser, and a tree-walking
//! evaluator over a shared value model and lexically nested environments.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ExecError,
    interpreter::{
        environment::Env, evaluator::core::eval_program, lexer::Lexer, parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the expression and statement enums that represent
/// source code as a tree, plus the operator enums whose `Display`
/// implementations reproduce the source spellings for error messages.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Models operators as dedicated enums.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating code. Parse errors are collected in batches; runtime errors
/// propagate singly; `ExecError` combines both for the pipeline entry point.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Renders the exact message texts the shell and scripts observe.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the value model
/// and environments to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values,
///   environments.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive shell and the file runner.
///
/// Implements the line-at-a-time shell with its persistent environment and
/// the script runner the command line dispatches to.
pub mod repl;

/// Runs a source string through the full pipeline in the given environment.
///
/// The source is lexed and parsed first; if the parser collected any errors,
/// they are returned as a batch and nothing is evaluated. Otherwise the
/// program is evaluated and its result value returned.
///
/// # Errors
/// Returns `ExecError::Parse` with the collected parse errors, or
/// `ExecError::Runtime` when evaluation fails.
///
/// # Examples
/// ```
/// use doge::{interpreter::environment::Environment, interpreter::value::core::Value, run_source};
///
/// let env = Environment::root();
///
/// assert_eq!(run_source("2 * (5 + 10)", &env), Ok(Value::Integer(30)));
///
/// // Bindings persist in the caller's environment.
/// run_source("greeting = \"such wow\"", &env).unwrap();
/// assert_eq!(env.borrow().get("greeting"), Some(Value::from("such wow")));
///
/// // Runtime failures surface as errors, never as values.
/// assert!(run_source("missing + 1", &env).is_err());
/// ```
pub fn run_source(source: &str, env: &Env) -> Result<Value, ExecError> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(ExecError::Parse(parser.take_errors()));
    }

    eval_program(&program, env).map_err(ExecError::Runtime)
}
