//! Error types for the chat service.

use thiserror::Error;

/// Result type alias for chat operations
pub type ChatResult<T> = Result<T, ChatError>;

/// Validation failures raised by the chat service.
///
/// Every variant classifies as [`ErrorCode::InvalidArgument`]; the `Display`
/// output of each variant is the exact wire message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChatError {
    #[error("not enough users")]
    NotEnoughUsers,

    #[error("invalid id")]
    InvalidId,

    #[error("empty sender")]
    EmptySender,

    #[error("empty message")]
    EmptyMessage,
}

impl ChatError {
    /// Classify the error. All current failures are invalid arguments; the
    /// core raises no other kind.
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}

/// Classification attached to every service error, mirroring rpc status
/// codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidArgument,
}

impl ErrorCode {
    /// Wire form of the code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_the_wire_literals() {
        assert_eq!(ChatError::NotEnoughUsers.to_string(), "not enough users");
        assert_eq!(ChatError::InvalidId.to_string(), "invalid id");
        assert_eq!(ChatError::EmptySender.to_string(), "empty sender");
        assert_eq!(ChatError::EmptyMessage.to_string(), "empty message");
    }

    #[test]
    fn every_error_classifies_as_invalid_argument() {
        for error in [
            ChatError::NotEnoughUsers,
            ChatError::InvalidId,
            ChatError::EmptySender,
            ChatError::EmptyMessage,
        ] {
            assert_eq!(error.code(), ErrorCode::InvalidArgument);
            assert_eq!(error.code().as_str(), "INVALID_ARGUMENT");
        }
    }
}
