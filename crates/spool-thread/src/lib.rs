//! # spool-thread
//!
//! Lifecycle adapter for server-side conversation threads.
//!
//! A [`Thread`] wraps an injected [`ThreadsApi`] capability and tracks one
//! remote thread through its lifecycle:
//!
//! ```text
//! Unbound ──create()──▶ Bound ──delete()──▶ Deleted
//!    │                    ▲
//!    └── messages() ──────┘   (implicit create on first use)
//! ```
//!
//! No transition leaves `Deleted`: every operation on a deleted thread fails
//! without touching the network. Remote failures propagate unchanged; the
//! adapter performs no retries and no translation of remote errors.
//!
//! One adapter instance is single-caller: mutating operations take
//! `&mut self`, so shared use requires external synchronization (e.g. a
//! `tokio::sync::Mutex` around the `Thread`).
//!
//! [`ThreadsApi`]: spool_client::ThreadsApi

#![deny(unsafe_code)]

pub mod error;
pub mod thread;

pub use error::ThreadError;
pub use thread::{MessageStream, Thread, ThreadState};
