/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// AST. Parse errors include expectation mismatches, invalid numeric
/// literals, and tokens no expression can start with. They are collected on
/// the parser and reported as a batch.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, unknown operators, name lookup failures, index violations,
/// builtin argument violations, and import failures.
pub mod runtime_error;
/// Pipeline errors.
///
/// Combines the parse and runtime families into the single error type
/// returned by the crate-level entry point.
pub mod exec_error;

pub use exec_error::ExecError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
