//! # Threads API trait
//!
//! Core abstraction over the remote assistant service's thread endpoints.
//! The adapter in `spool-thread` consumes this trait as an injected
//! capability; [`HttpThreadsClient`](crate::http::HttpThreadsClient) is the
//! production implementation and tests substitute their own.
//!
//! Every method maps to exactly one remote request. Retrying and rate-limit
//! handling are the caller's concern.

use async_trait::async_trait;

use spool_core::ThreadId;

use crate::error::ApiError;
use crate::types::{
    CreateThreadRequest, DeletionStatus, ListMessagesQuery, MessagePage, ThreadObject,
};

/// Result type alias for threads API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Remote thread operations.
///
/// Implementors must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait ThreadsApi: Send + Sync {
    /// Create a new thread, optionally seeded with initial messages.
    ///
    /// Returns the created thread; its `id` is assigned by the service.
    async fn create_thread(&self, request: &CreateThreadRequest) -> ApiResult<ThreadObject>;

    /// Delete the thread with the given id.
    async fn delete_thread(&self, thread_id: &ThreadId) -> ApiResult<DeletionStatus>;

    /// List one page of messages in the thread.
    ///
    /// Ordering and paging are controlled by `query`; the service's
    /// defaults apply for unset fields.
    async fn list_messages(
        &self,
        thread_id: &ThreadId,
        query: &ListMessagesQuery,
    ) -> ApiResult<MessagePage>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threads_api_is_object_safe() {
        fn assert_object_safe(_: &dyn ThreadsApi) {}
        let _ = assert_object_safe;
    }

    #[test]
    fn threads_api_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ThreadsApi>();
    }
}
