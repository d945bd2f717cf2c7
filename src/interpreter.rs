/// Turns source text into tokens.
///
/// Defines the token model and the pull-based lexer the parser consumes.
///
/// # Responsibilities
/// - Recognizes all punctuation, operators, literals and keywords.
/// - Preserves the source spelling of literals for the parser.
/// - Surfaces unknown bytes as `ILLEGAL` tokens and exhaustion as `EOF`.
pub mod lexer;

/// Turns tokens into an abstract syntax tree.
///
/// A Pratt parser with two tokens of lookahead. Errors are collected rather
/// than fatal: parsing continues on a best-effort basis and the caller
/// decides what to do with the batch.
///
/// # Responsibilities
/// - Implements the operator-precedence ladder.
/// - Builds `Program`, statement and expression nodes.
/// - Accumulates parse errors for batched reporting.
pub mod parser;

/// Walks the syntax tree and computes values.
///
/// A recursive tree-walking evaluator: expressions produce values, sentinel
/// values thread `return`/`break` through blocks, and runtime errors
/// propagate out through `Result`.
///
/// # Responsibilities
/// - Implements operator semantics over the value model.
/// - Manages scopes: leaky conditional/loop frames, hermetic `for` frames,
///   fresh frames for function calls.
/// - Hosts the builtin functions.
pub mod evaluator;

/// Runtime values.
///
/// The tagged value union, value equality and printing, and the hash-key
/// projection for hash-literal keys.
pub mod value;

/// Lexically nested environments.
///
/// Name→value frames with outer-chain lookup and the write-delegation
/// behavior conditionals and loops rely on.
pub mod environment;
