//! Unified error type.

use std::fmt;

/// The error type returned by helloapp's fallible operations.
///
/// Request-level outcomes (404, 406) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type
/// surfaces process-level failures: binding the listen socket, accepting
/// a connection, or rejecting a bad `PORT` value at startup.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Config(String),
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
