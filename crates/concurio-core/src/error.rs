use std::fmt;

/// Result type for concurio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the core pipeline
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Log parsing failed (malformed header or record line)
    Parse(String),

    /// The log's mode is not supported by the requested operation
    UnsupportedMode(String),

    /// Statistics computation failed (insufficient samples, unknown level)
    Statistics(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::UnsupportedMode(token) => write!(f, "Unsupported mode: {}", token),
            Error::Statistics(msg) => write!(f, "Statistics error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(_) | Error::UnsupportedMode(_) | Error::Statistics(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
