use crate::{
    ast::{AssignOperator, InfixOperator, PrefixOperator},
    error::ParseError,
};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can be raised during evaluation.
///
/// Runtime errors propagate like exceptions: every sub-evaluation forwards
/// them with `?`, user code cannot intercept them, and the shell or file
/// runner prints them as `ERROR: <message>`.
pub enum RuntimeError {
    /// An infix operator was applied to operands of two different types that
    /// have no common interpretation.
    TypeMismatch {
        /// Type tag of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right:    &'static str,
    },
    /// An infix operator is not defined for the matched operand types.
    UnknownInfixOperator {
        /// Type tag of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right:    &'static str,
    },
    /// A prefix operator is not defined for its operand type.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type tag of the operand.
        right:    &'static str,
    },
    /// A name was neither bound in the environment chain nor a builtin.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// Call of a value that is neither a function nor a builtin.
    NotAFunction {
        /// Type tag of the called value.
        type_name: &'static str,
    },
    /// A value of an unhashable type was used as a hash key.
    UnusableHashKey {
        /// Type tag of the offending key.
        type_name: &'static str,
    },
    /// The index operator was applied to a value that does not support it.
    IndexNotSupported {
        /// Type tag of the indexed value.
        type_name: &'static str,
    },
    /// An array index was outside the valid range.
    IndexOutOfBounds,
    /// A string index was outside the valid range.
    StringIndexOutOfRange,
    /// A string was indexed with a non-integer value.
    StringIndexNotInteger,
    /// A compound assignment targeted a name with no existing binding.
    UninitializedAssignment,
    /// A compound assignment mixed operand types.
    CompoundTypeMismatch {
        /// The assignment operator.
        operator: AssignOperator,
        /// Type tag of the current value.
        left:     &'static str,
        /// Type tag of the new value.
        right:    &'static str,
    },
    /// A compound assignment operator is not defined for its operand type.
    UnknownAssignOperator {
        /// The assignment operator.
        operator: AssignOperator,
    },
    /// Integer division or modulo by zero.
    DivisionByZero,
    /// A shift operator received a negative shift amount.
    NegativeShift {
        /// The offending amount.
        amount: i64,
    },
    /// Evaluation nested deeper than the interpreter allows.
    RecursionLimitExceeded,
    /// A builtin received the wrong number of arguments.
    WrongArgumentCount {
        /// The number of arguments supplied.
        got:  usize,
        /// The number of arguments required.
        want: usize,
    },
    /// A builtin received an argument it cannot work with.
    InvalidArgument {
        /// Full message text describing the violation.
        message: String,
    },
    /// `import` could not locate a file and no `DOGEROOT` is set.
    ImportNotFound,
    /// `import` failed to read a resolved file.
    ImportFailed {
        /// The import path as written in the program.
        path: String,
    },
    /// An imported file contained syntax errors.
    ImportParse {
        /// The import path as written in the program.
        path:   String,
        /// The parse errors collected from the imported file.
        errors: Vec<ParseError>,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),
            Self::UnusableHashKey { type_name } => write!(f, "unusable as hash key: {type_name}"),
            Self::IndexNotSupported { type_name } => {
                write!(f, "index operator not supported: {type_name}")
            },
            Self::IndexOutOfBounds => write!(f, "index out of bounds"),
            Self::StringIndexOutOfRange => write!(f, "Index out of range!"),
            Self::StringIndexNotInteger => write!(f, "Index for string can only be integer!"),
            Self::UninitializedAssignment => {
                write!(f, "cannot assign to uninitialized identifier!")
            },
            Self::CompoundTypeMismatch { operator,
                                         left,
                                         right, } => {
                write!(f, "cannot use {operator} with types: {left} and {right}")
            },
            Self::UnknownAssignOperator { operator } => {
                write!(f, "Unknown assign operator {operator}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NegativeShift { amount } => write!(f, "negative shift amount: {amount}"),
            Self::RecursionLimitExceeded => write!(f, "maximum recursion depth exceeded"),
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::InvalidArgument { message } => write!(f, "{message}"),
            Self::ImportNotFound => write!(f, "couldn't find file"),
            Self::ImportFailed { path } => write!(f, "cannot import file '{path}'"),
            Self::ImportParse { path, errors } => {
                write!(f, "errors while importing file '{path}'")?;
                for error in errors {
                    write!(f, "\n\t{error}")?;
                }
                Ok(())
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
