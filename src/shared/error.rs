//! Error Taxonomy
//!
//! Two layers of errors cross this crate:
//!
//! - `StoreError` - failures talking to the hosted record service. Every read
//!   and write surfaces these to the caller; nothing is retried
//!   automatically, the UI owns user-visible messaging and manual retry.
//! - `DmError` - failures of the direct-messaging core, wrapping `StoreError`
//!   where a store call was involved.
//!
//! There is one latent fault class with no variant here: two near-simultaneous
//! first-contact resolves can each create a conversation for the same user
//! pair (see `dm::resolver`). It is never detected at runtime, so it is
//! documentation rather than an error value.
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread
//! boundaries.
use thiserror::Error;

/// Failures of the hosted record service
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Network failure or service-side error on a read or write
    #[error("store unavailable: {message}")]
    Unavailable {
        /// Human-readable error message
        message: String,
    },

    /// The service rejected the credentials attached to the request
    #[error("not authorized by store: {message}")]
    Auth {
        /// Human-readable error message
        message: String,
    },

    /// The service refused a write (e.g. a sender outside the conversation)
    #[error("store rejected the write: {message}")]
    Rejected {
        /// Human-readable error message
        message: String,
    },
}

impl StoreError {
    /// Create a new unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a new auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a new rejected-write error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::unavailable(format!("network error: {}", err))
    }
}

/// Failures of the direct-messaging core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DmError {
    /// No signed-in user; the acting identity is required
    #[error("not signed in")]
    NotAuthenticated,

    /// Send attempted with empty or whitespace-only text
    #[error("message text is empty")]
    EmptyMessage,

    /// Conversation requested between a user and themselves
    #[error("cannot start a conversation with yourself")]
    SelfConversation,

    /// A store read or write failed underneath a messaging operation
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_error() {
        let error = StoreError::unavailable("connection refused");
        match error {
            StoreError::Unavailable { message } => {
                assert_eq!(message, "connection refused");
            }
            _ => panic!("Expected Unavailable"),
        }
    }

    #[test]
    fn test_rejected_error() {
        let error = StoreError::rejected("sender is not a participant");
        match error {
            StoreError::Rejected { message } => {
                assert_eq!(message, "sender is not a participant");
            }
            _ => panic!("Expected Rejected"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = StoreError::unavailable("timed out");
        let display = format!("{}", error);
        assert!(display.contains("store unavailable"));
        assert!(display.contains("timed out"));
    }

    #[test]
    fn test_dm_error_from_store_error() {
        let store_error = StoreError::auth("token expired");
        let dm_error: DmError = store_error.clone().into();
        match dm_error {
            DmError::Store(inner) => assert_eq!(inner, store_error),
            _ => panic!("Expected Store variant"),
        }
    }

    #[test]
    fn test_dm_error_display() {
        assert_eq!(format!("{}", DmError::NotAuthenticated), "not signed in");
        assert_eq!(format!("{}", DmError::EmptyMessage), "message text is empty");
    }
}
