//! Wire types for the thread endpoints.
//!
//! Field names match the live service exactly; outbound structs omit empty
//! optional fields from the JSON body.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use spool_core::{MessageId, Role, ThreadId, ThreadMessage};

// ─────────────────────────────────────────────────────────────────────────────
// Outbound: thread creation
// ─────────────────────────────────────────────────────────────────────────────

/// A message to seed a thread with at creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    /// Author role.
    pub role: Role,
    /// Plain text content.
    pub content: String,
    /// Optional key-value metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

impl NewMessage {
    /// A user-authored seed message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            metadata: None,
        }
    }

    /// An assistant-authored seed message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            metadata: None,
        }
    }
}

/// Body of a thread-creation request.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateThreadRequest {
    /// Messages to seed the thread with, oldest first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<NewMessage>,
    /// Optional key-value metadata for the thread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

impl CreateThreadRequest {
    /// A request seeded with the given messages.
    #[must_use]
    pub fn with_messages(messages: Vec<NewMessage>) -> Self {
        Self {
            messages,
            metadata: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inbound: thread and deletion ack
// ─────────────────────────────────────────────────────────────────────────────

/// A thread as returned by the service.
#[derive(Clone, Debug, Deserialize)]
pub struct ThreadObject {
    /// Service-assigned identifier.
    pub id: ThreadId,
    /// Object tag (`"thread"`).
    pub object: String,
    /// Creation time (unix seconds).
    pub created_at: i64,
    /// Key-value metadata.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Acknowledgement of a thread deletion.
#[derive(Clone, Debug, Deserialize)]
pub struct DeletionStatus {
    /// Identifier of the deleted thread.
    pub id: ThreadId,
    /// Object tag (`"thread.deleted"`).
    pub object: String,
    /// Whether the resource was deleted.
    pub deleted: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Message listing
// ─────────────────────────────────────────────────────────────────────────────

/// Sort order for message listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Query parameters for listing messages.
///
/// All fields are optional; the service's defaults apply when unset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListMessagesQuery {
    /// Page size (service default 20, maximum 100).
    pub limit: Option<u32>,
    /// Sort order by creation time.
    pub order: Option<SortOrder>,
    /// Cursor: return results after this message id.
    pub after: Option<MessageId>,
    /// Cursor: return results before this message id.
    pub before: Option<MessageId>,
}

impl ListMessagesQuery {
    /// Render the set fields as URL query pairs.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.to_string()));
        }
        if let Some(after) = &self.after {
            pairs.push(("after", after.as_str().to_owned()));
        }
        if let Some(before) = &self.before {
            pairs.push(("before", before.as_str().to_owned()));
        }
        pairs
    }
}

/// One page of a thread's messages.
#[derive(Clone, Debug, Deserialize)]
pub struct MessagePage {
    /// Object tag (`"list"`).
    pub object: String,
    /// Messages in service order.
    pub data: Vec<ThreadMessage>,
    /// Id of the first message on this page.
    pub first_id: Option<MessageId>,
    /// Id of the last message on this page, used as the cursor for the next.
    pub last_id: Option<MessageId>,
    /// Whether more messages exist beyond this page.
    pub has_more: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
