use crate::error::{ParseError, RuntimeError};

#[derive(Debug, Clone, PartialEq)]
/// The combined error of running a source string through the full pipeline.
///
/// Parse errors arrive as the batch the parser collected; runtime errors are
/// single failures that aborted evaluation.
pub enum ExecError {
    /// The source failed to parse.
    Parse(Vec<ParseError>),
    /// The program failed during evaluation.
    Runtime(RuntimeError),
}

impl std::fmt::Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ExecError {}

impl From<RuntimeError> for ExecError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl From<Vec<ParseError>> for ExecError {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}
