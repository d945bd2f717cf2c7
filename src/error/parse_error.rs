#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// The parser collects these instead of aborting; a failed sub-parse records
/// its error and parsing continues on a best-effort basis.
pub enum ParseError {
    /// The token after the current one was not the expected kind.
    UnexpectedToken {
        /// The kind of token the parser expected.
        expected: &'static str,
        /// The kind of token actually found.
        found:    &'static str,
    },
    /// No expression can start with the current token.
    NoPrefixParseFn {
        /// The kind of the offending token.
        kind: &'static str,
    },
    /// An integer literal could not be parsed into a 64-bit value.
    InvalidIntegerLiteral {
        /// The literal text as spelled in the source.
        literal: String,
    },
    /// A float literal could not be parsed into a 64-bit value.
    InvalidFloatLiteral {
        /// The literal text as spelled in the source.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParseFn { kind } => {
                write!(f, "no prefix parse function for {kind} found")
            },
            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse {literal:?} as integer")
            },
            Self::InvalidFloatLiteral { literal } => {
                write!(f, "could not parse {literal:?} as float")
            },
        }
    }
}

impl std::error::Error for ParseError {}
