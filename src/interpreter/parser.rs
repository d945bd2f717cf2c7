/// Core parsing machinery.
///
/// Holds the parser state (two-token lookahead, collected errors), the
/// operator-precedence ladder, and the Pratt expression engine that the rest
/// of the parser plugs into.
pub mod core;

/// Literal and name parsing.
///
/// Parses number, string, boolean, array and hash literals, grouped
/// expressions, and identifiers (including the assignment special case).
pub mod literal;

/// Control-flow and compound expression parsing.
///
/// Parses `if`, `while` and `for` expressions, function literals, call
/// expressions and index expressions.
pub mod control;

/// Statement parsing.
///
/// Parses programs, statements (`return`, `break`, expression statements) and
/// braced blocks.
pub mod statement;
