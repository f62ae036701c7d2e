use std::fmt::{Display, Formatter};
use std::io;

/// Errors returned while configuring a `Signer` or signing a request.
#[derive(Debug)]
pub enum Error {
    /// Missing or blank configuration: credentials, or a bucket with no default to fall back to.
    Config(String),
    /// The request itself is not signable (blank key, expiration out of range).
    Validation(String),
    /// Malformed signed URL or unreadable configuration file.
    Io(io::Error),
}

impl Error {
    pub(crate) fn config<T: ToString>(msg: T) -> Self {
        Self::Config(msg.to_string())
    }

    pub(crate) fn validation<T: ToString>(msg: T) -> Self {
        Self::Validation(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::Validation(msg) => write!(f, "invalid request: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::Io(io::Error::new(io::ErrorKind::InvalidInput, e))
    }
}
