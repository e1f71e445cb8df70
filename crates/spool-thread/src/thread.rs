//! The thread adapter.
//!
//! [`Thread`] binds lazily: a fresh adapter holds no identifier until the
//! first `create()` succeeds, whether called explicitly or implied by
//! `messages()`. A resumed adapter is bound from the start and never issues
//! a create call.

use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;

use futures::Stream;
use futures::stream;
use tracing::{debug, info};

use spool_client::{CreateThreadRequest, ListMessagesQuery, NewMessage, ThreadsApi};
use spool_core::{MessageId, ThreadId, ThreadMessage};

use crate::error::ThreadError;

/// Boxed stream of messages returned by [`Thread::messages`].
pub type MessageStream =
    Pin<Box<dyn Stream<Item = Result<ThreadMessage, ThreadError>> + Send>>;

// ─────────────────────────────────────────────────────────────────────────────
// Lifecycle state
// ─────────────────────────────────────────────────────────────────────────────

/// Observable lifecycle state of a [`Thread`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreadState {
    /// No remote thread exists yet; `create()` has not run.
    Unbound,
    /// A remote thread exists and its identifier is held.
    Bound,
    /// The remote thread was deleted; the identifier is retained locally.
    Deleted,
}

/// Internal binding. `Deleted` keeps the id so errors can name the thread.
#[derive(Clone, Debug)]
enum Binding {
    Unbound,
    Bound(ThreadId),
    Deleted(ThreadId),
}

// ─────────────────────────────────────────────────────────────────────────────
// Thread
// ─────────────────────────────────────────────────────────────────────────────

/// Adapter for one server-side conversation thread.
///
/// Holds a reference to an injected [`ThreadsApi`] capability; the client is
/// shared, not owned. All mutating operations take `&mut self`, so sharing
/// one instance across tasks requires external synchronization.
pub struct Thread {
    /// Remote capability.
    client: Arc<dyn ThreadsApi>,
    /// Current binding.
    binding: Binding,
    /// Creation options applied on (lazy) create.
    options: CreateThreadRequest,
}

impl std::fmt::Debug for Thread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thread")
            .field("binding", &self.binding)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Thread {
    /// A fresh, unbound thread with default creation options.
    ///
    /// The remote thread is created lazily on first use.
    #[must_use]
    pub fn new(client: Arc<dyn ThreadsApi>) -> Self {
        Self {
            client,
            binding: Binding::Unbound,
            options: CreateThreadRequest::default(),
        }
    }

    /// A fresh, unbound thread that will be seeded with `messages` when the
    /// remote thread is created.
    #[must_use]
    pub fn with_seed(client: Arc<dyn ThreadsApi>, messages: Vec<NewMessage>) -> Self {
        Self::with_options(client, CreateThreadRequest::with_messages(messages))
    }

    /// A fresh, unbound thread with full creation options.
    #[must_use]
    pub fn with_options(client: Arc<dyn ThreadsApi>, options: CreateThreadRequest) -> Self {
        Self {
            client,
            binding: Binding::Unbound,
            options,
        }
    }

    /// Resume an existing remote thread by id.
    ///
    /// No remote call is issued; the thread is assumed to exist. Fails with
    /// [`ThreadError::InvalidArgument`] when the id is blank.
    pub fn resume(
        client: Arc<dyn ThreadsApi>,
        id: impl Into<ThreadId>,
    ) -> Result<Self, ThreadError> {
        let id = id.into();
        if id.is_blank() {
            return Err(ThreadError::invalid_argument("thread id is blank"));
        }
        Ok(Self {
            client,
            binding: Binding::Bound(id),
            options: CreateThreadRequest::default(),
        })
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ThreadState {
        match self.binding {
            Binding::Unbound => ThreadState::Unbound,
            Binding::Bound(_) => ThreadState::Bound,
            Binding::Deleted(_) => ThreadState::Deleted,
        }
    }

    /// The bound identifier, if any.
    ///
    /// Present in both `Bound` and `Deleted` states.
    #[must_use]
    pub fn id(&self) -> Option<&ThreadId> {
        match &self.binding {
            Binding::Unbound => None,
            Binding::Bound(id) | Binding::Deleted(id) => Some(id),
        }
    }

    /// Whether the thread was deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        matches!(self.binding, Binding::Deleted(_))
    }

    /// Create the remote thread.
    ///
    /// Already bound: no-op, returns the existing id. Deleted: fails without
    /// a remote call. Unbound: issues exactly one create call with the
    /// stored options and binds the returned id. A failed create leaves the
    /// thread unbound.
    pub async fn create(&mut self) -> Result<ThreadId, ThreadError> {
        match &self.binding {
            Binding::Deleted(id) => Err(ThreadError::Deleted {
                thread_id: id.clone(),
            }),
            Binding::Bound(id) => {
                debug!(thread_id = %id, "create is a no-op, thread already bound");
                Ok(id.clone())
            }
            Binding::Unbound => {
                let thread = self.client.create_thread(&self.options).await?;
                info!(thread_id = %thread.id, "thread created");
                self.binding = Binding::Bound(thread.id.clone());
                Ok(thread.id)
            }
        }
    }

    /// Delete the remote thread.
    ///
    /// Issues exactly one delete call and marks the adapter deleted; every
    /// subsequent operation fails. Fails without a remote call when the
    /// thread was never created or is already deleted. A failed delete
    /// leaves the thread bound.
    pub async fn delete(&mut self) -> Result<(), ThreadError> {
        let id = match &self.binding {
            Binding::Unbound => return Err(ThreadError::NeverCreated),
            Binding::Deleted(id) => {
                return Err(ThreadError::Deleted {
                    thread_id: id.clone(),
                });
            }
            Binding::Bound(id) => id.clone(),
        };

        let ack = self.client.delete_thread(&id).await?;
        debug!(thread_id = %id, deleted = ack.deleted, "delete acknowledged");
        info!(thread_id = %id, "thread deleted");
        self.binding = Binding::Deleted(id);
        Ok(())
    }

    /// Stream the thread's messages.
    ///
    /// On an unbound thread this triggers an implicit [`create`](Self::create)
    /// first. The returned stream is lazy (the first list request is issued
    /// when the stream is polled) and follows the service's cursor
    /// pagination. Each call returns a fresh stream starting from the first
    /// page. On a deleted thread this fails without issuing a request.
    pub async fn messages(&mut self) -> Result<MessageStream, ThreadError> {
        let id = match &self.binding {
            Binding::Deleted(id) => {
                return Err(ThreadError::Deleted {
                    thread_id: id.clone(),
                });
            }
            Binding::Bound(id) => id.clone(),
            Binding::Unbound => self.create().await?,
        };

        Ok(page_stream(Arc::clone(&self.client), id))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Message paging
// ─────────────────────────────────────────────────────────────────────────────

/// Paging state carried between polls of a [`MessageStream`].
struct PageWalk {
    client: Arc<dyn ThreadsApi>,
    thread_id: ThreadId,
    buffered: VecDeque<ThreadMessage>,
    cursor: Option<MessageId>,
    exhausted: bool,
}

/// Build a stream that yields buffered messages and fetches the next page
/// on demand, following `has_more` / `last_id` cursors.
fn page_stream(client: Arc<dyn ThreadsApi>, thread_id: ThreadId) -> MessageStream {
    let walk = PageWalk {
        client,
        thread_id,
        buffered: VecDeque::new(),
        cursor: None,
        exhausted: false,
    };

    Box::pin(stream::try_unfold(walk, |mut walk| async move {
        loop {
            if let Some(message) = walk.buffered.pop_front() {
                return Ok(Some((message, walk)));
            }
            if walk.exhausted {
                return Ok(None);
            }

            let query = ListMessagesQuery {
                after: walk.cursor.clone(),
                ..ListMessagesQuery::default()
            };
            let page = walk
                .client
                .list_messages(&walk.thread_id, &query)
                .await
                .map_err(ThreadError::from)?;

            debug!(
                thread_id = %walk.thread_id,
                count = page.data.len(),
                has_more = page.has_more,
                "fetched message page"
            );

            walk.exhausted = !page.has_more || page.data.is_empty();
            walk.cursor = page.last_id.clone();
            walk.buffered.extend(page.data);
        }
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
