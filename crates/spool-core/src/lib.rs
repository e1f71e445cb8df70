//! # spool-core
//!
//! Foundation types for the spool SDK.
//!
//! This crate provides the shared vocabulary the other spool crates depend on:
//!
//! - **Branded IDs**: [`ThreadId`] and [`MessageId`] as newtypes over the
//!   opaque identifiers the remote service assigns, plus [`RequestId`] for
//!   correlating HTTP request logs
//! - **Messages**: [`ThreadMessage`] and its content blocks, the read-only
//!   projection of a thread's history
//! - **Logging**: `tracing` subscriber setup and an in-memory capture layer
//!   for test assertions
//!
//! [`ThreadId`]: ids::ThreadId
//! [`MessageId`]: ids::MessageId
//! [`RequestId`]: ids::RequestId
//! [`ThreadMessage`]: messages::ThreadMessage

#![deny(unsafe_code)]

pub mod ids;
pub mod logging;
pub mod messages;

pub use ids::{MessageId, RequestId, ThreadId};
pub use messages::{ImageFileRef, MessageContent, Role, TextContent, ThreadMessage};
