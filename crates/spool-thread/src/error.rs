//! Error types for the thread adapter.

use spool_client::ApiError;
use spool_core::ThreadId;

/// Errors raised by [`Thread`](crate::thread::Thread) operations.
///
/// Remote failures are carried transparently as [`ThreadError::Api`]; the
/// other variants are raised locally, before any request is issued.
#[derive(Debug, thiserror::Error)]
pub enum ThreadError {
    /// A constructor argument was unusable (e.g. a blank thread id).
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },

    /// The thread was deleted; no further operations may succeed.
    #[error("thread {thread_id} was deleted")]
    Deleted {
        /// The identifier the thread had when it was deleted.
        thread_id: ThreadId,
    },

    /// The operation needs a bound thread, but none was ever created.
    #[error("thread has not been created")]
    NeverCreated,

    /// A remote call failed; the underlying error is unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ThreadError {
    /// Shortcut for an [`ThreadError::InvalidArgument`].
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let err = ThreadError::invalid_argument("thread id is blank");
        assert_eq!(err.to_string(), "invalid argument: thread id is blank");

        let err = ThreadError::Deleted {
            thread_id: ThreadId::from("thread_1"),
        };
        assert_eq!(err.to_string(), "thread thread_1 was deleted");

        assert_eq!(
            ThreadError::NeverCreated.to_string(),
            "thread has not been created"
        );
    }

    #[test]
    fn api_errors_pass_through_unchanged() {
        let api = ApiError::Api {
            status: 503,
            message: "overloaded".into(),
            code: None,
            retryable: true,
        };
        let display = api.to_string();
        let err = ThreadError::from(api);
        // transparent: the adapter adds no wrapping text
        assert_eq!(err.to_string(), display);
    }

    #[test]
    fn is_std_error() {
        let err = ThreadError::NeverCreated;
        let _: &dyn std::error::Error = &err;
    }
}
