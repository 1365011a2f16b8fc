use std::fmt;
use std::io;

/// Custom error type for the FontMat application
#[derive(Debug)]
pub enum Error {
    /// IO operations errors
    Io(io::Error),
    /// Command line errors
    Config(String),
    /// Static font table is inconsistent
    Mapping(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Mapping(msg) => write!(f, "Font table error: {}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type alias for FontMat operations
pub type Result<T> = std::result::Result<T, Error>;
