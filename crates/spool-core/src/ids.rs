//! Branded ID newtypes for type safety.
//!
//! The remote service assigns every resource an opaque string identifier.
//! Each resource kind gets a distinct newtype wrapper around `String` so a
//! thread id cannot be passed where a message id is expected.
//!
//! [`ThreadId`] and [`MessageId`] are minted by the service and only ever
//! constructed from received strings. [`RequestId`] is client-side (UUID v7,
//! time-ordered) and exists to correlate HTTP request log lines.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! remote_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create from an existing string value.
            #[must_use]
            pub fn from_string(s: String) -> Self {
                Self(s)
            }

            /// Return the inner string as a slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume self and return the inner `String`.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the identifier is empty or whitespace-only.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

remote_id! {
    /// Identifier of a server-side conversation thread.
    ThreadId
}

remote_id! {
    /// Identifier of a message within a thread.
    MessageId
}

/// Client-generated identifier for one outgoing HTTP request.
///
/// UUID v7 (time-ordered), attached to request log lines so a single call
/// can be followed through the logs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Create a new random request id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Return the inner string as a slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string() {
        let id = ThreadId::from_string("thread_abc123".to_owned());
        assert_eq!(id.as_str(), "thread_abc123");
    }

    #[test]
    fn from_str_ref() {
        let id = MessageId::from("msg_abc123");
        assert_eq!(id.as_str(), "msg_abc123");
    }

    #[test]
    fn deref_to_str() {
        let id = ThreadId::from("hello");
        let s: &str = &id;
        assert_eq!(s, "hello");
    }

    #[test]
    fn display() {
        let id = ThreadId::from("thread_1");
        assert_eq!(format!("{id}"), "thread_1");
    }

    #[test]
    fn into_string() {
        let id = MessageId::from("convert");
        let s: String = id.into();
        assert_eq!(s, "convert");
    }

    #[test]
    fn into_inner() {
        let id = ThreadId::from("inner");
        assert_eq!(id.into_inner(), "inner");
    }

    #[test]
    fn blank_detection() {
        assert!(ThreadId::from("").is_blank());
        assert!(ThreadId::from("   ").is_blank());
        assert!(!ThreadId::from("thread_1").is_blank());
    }

    #[test]
    fn serde_roundtrip_is_bare_string() {
        let id = ThreadId::from("thread_xyz");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"thread_xyz\"");
        let back: ThreadId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_in_struct() {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Envelope {
            thread_id: ThreadId,
            message_id: MessageId,
        }

        let env = Envelope {
            thread_id: ThreadId::from("thread_1"),
            message_id: MessageId::from("msg_1"),
        };
        let json = serde_json::to_string(&env).unwrap();
        let back: Envelope = serde_json::from_str(&json).unwrap();
        assert_eq!(env, back);
    }

    #[test]
    fn hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        let id = ThreadId::from("same");
        let _ = set.insert(id.clone());
        let _ = set.insert(id);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn request_id_is_uuid_v7() {
        let id = RequestId::new();
        let parsed = Uuid::parse_str(id.as_str()).expect("should be valid UUID");
        assert_eq!(parsed.get_version(), Some(uuid::Version::SortRand));
    }

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn request_id_default_creates_new() {
        assert_ne!(RequestId::default(), RequestId::default());
    }
}
