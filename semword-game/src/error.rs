//! Error taxonomy shared by every client of the game service.
use thiserror::Error;

/// Failure of a single request against the game service.
///
/// The `Display` output is the human-readable message surfaced to callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("{0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The body was not the JSON shape the operation expects.
    #[error("invalid JSON payload: {0}")]
    Decode(String),
    /// The JSON parsed but lacks a field the operation requires.
    #[error("{0}")]
    InvalidResponse(String),
}

impl RequestError {
    /// HTTP status carried by the error, if the service answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Rejection of user input before any request is issued.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("guess is empty")]
    EmptyGuess,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_surfaced_message() {
        let err = RequestError::Status {
            status: 400,
            message: "Joker type is required".into(),
        };
        assert_eq!(err.to_string(), "Joker type is required");
        assert_eq!(err.status(), Some(400));
        assert_eq!(RequestError::Network("offline".into()).status(), None);
    }
}
