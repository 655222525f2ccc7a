//! Crate-level error type

use std::fmt;
use std::path::PathBuf;

use crate::io::ParseError;
use crate::matrix::MatrixError;

/// Errors surfaced by the file collaborators, operation selection and
/// configuration, wrapping the core parse and matrix errors
#[derive(Debug)]
pub enum Error {
    /// Malformed matrix text
    Parse(ParseError),
    /// Malformed matrix file
    ParseFile { path: PathBuf, source: ParseError },
    /// Incompatible operands or failed arithmetic
    Matrix(MatrixError),
    /// Reading or writing a file failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Unknown operation name
    InvalidOperation(String),
    /// Configuration could not be loaded
    Config(::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "{}", err),
            Error::ParseFile { path, source } => write!(f, "{}: {}", path.display(), source),
            Error::Matrix(err) => write!(f, "{}", err),
            Error::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Error::InvalidOperation(name) => write!(
                f,
                "Invalid operation `{}`. Please enter add, subtract, or multiply.",
                name
            ),
            Error::Config(err) => write!(f, "Configuration error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::ParseFile { source, .. } => Some(source),
            Error::Matrix(err) => Some(err),
            Error::Io { source, .. } => Some(source),
            Error::InvalidOperation(_) => None,
            Error::Config(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<MatrixError> for Error {
    fn from(err: MatrixError) -> Self {
        Error::Matrix(err)
    }
}

impl From<::config::ConfigError> for Error {
    fn from(err: ::config::ConfigError) -> Self {
        Error::Config(err)
    }
}
