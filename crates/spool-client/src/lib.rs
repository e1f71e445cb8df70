//! # spool-client
//!
//! Client for the remote assistant service's thread endpoints.
//!
//! The [`ThreadsApi`] trait is the capability the rest of the SDK consumes:
//! create a thread, delete a thread, list a thread's messages. One trait
//! method is one HTTP request: no retries and no hidden pagination.
//! [`HttpThreadsClient`] is the `reqwest` implementation; tests substitute
//! their own implementations.
//!
//! ```no_run
//! use spool_client::{ClientConfig, HttpThreadsClient};
//!
//! let client = HttpThreadsClient::new(ClientConfig::new("sk-..."));
//! ```

#![deny(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use api::{ApiResult, ThreadsApi};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::HttpThreadsClient;
pub use types::{
    CreateThreadRequest, DeletionStatus, ListMessagesQuery, MessagePage, NewMessage, SortOrder,
    ThreadObject,
};
