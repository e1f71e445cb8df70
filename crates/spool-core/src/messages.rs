//! Message types for the thread conversation model.
//!
//! A [`ThreadMessage`] is a read-only projection of one entry in a thread's
//! remote history. The service returns message bodies as an ordered list of
//! typed content blocks; text is nested one level down (`text.value`) to
//! leave room for annotations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{MessageId, ThreadId};

// ─────────────────────────────────────────────────────────────────────────────
// Role
// ─────────────────────────────────────────────────────────────────────────────

/// Author role of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Written by the end user.
    User,
    /// Written by the assistant.
    Assistant,
    /// Any role this crate does not know about yet.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Content blocks
// ─────────────────────────────────────────────────────────────────────────────

/// Text payload of a [`MessageContent::Text`] block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    /// The text itself.
    pub value: String,
    /// Service annotations (citations, file references). Kept as raw JSON.
    #[serde(default)]
    pub annotations: Vec<Value>,
}

/// Reference to an uploaded image file in a message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFileRef {
    /// Identifier of the uploaded file.
    pub file_id: String,
}

/// One content block of a message, as returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    /// A block of text.
    Text {
        /// Text payload.
        text: TextContent,
    },
    /// An image attached by file id.
    ImageFile {
        /// File reference.
        image_file: ImageFileRef,
    },
}

impl MessageContent {
    /// Convenience constructor for a plain text block.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            text: TextContent {
                value: value.into(),
                annotations: Vec::new(),
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ThreadMessage
// ─────────────────────────────────────────────────────────────────────────────

/// One message in a thread's history.
///
/// Read-only: messages are produced by the service and never mutated locally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreadMessage {
    /// Message identifier.
    pub id: MessageId,
    /// Thread this message belongs to.
    pub thread_id: ThreadId,
    /// Author role.
    pub role: Role,
    /// Ordered content blocks.
    pub content: Vec<MessageContent>,
    /// Creation time (unix seconds).
    pub created_at: i64,
    /// Key-value metadata attached by the caller that created the message.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl ThreadMessage {
    /// Concatenated text of all text blocks, in block order.
    ///
    /// Non-text blocks are skipped. Multiple text blocks are joined with a
    /// newline.
    #[must_use]
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                MessageContent::Text { text } => Some(text.value.as_str()),
                MessageContent::ImageFile { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
