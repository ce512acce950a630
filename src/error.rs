use std::fmt;

use thiserror::Error;

/// Broad classification of a failed service call.
///
/// The display layer picks presentation by kind; everything else about the
/// underlying failure is reduced to a message string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced an HTTP response (DNS, refused, timeout).
    Transport,
    /// The backend answered with a non-success status.
    Api,
    /// The response arrived but its body could not be decoded.
    MalformedResponse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Transport => "transport",
            ErrorKind::Api => "api",
            ErrorKind::MalformedResponse => "malformed-response",
        };
        f.write_str(label)
    }
}

/// A failed backend exchange, normalized to a kind and a display message.
///
/// The original error object never crosses into the display layer — only its
/// derived message string does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Api(String),
    #[error("{0}")]
    MalformedResponse(String),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Transport(_) => ErrorKind::Transport,
            ServiceError::Api(_) => ErrorKind::Api,
            ServiceError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// The message string carried to the display layer.
    pub fn message(&self) -> &str {
        match self {
            ServiceError::Transport(msg)
            | ServiceError::Api(msg)
            | ServiceError::MalformedResponse(msg) => msg,
        }
    }
}
