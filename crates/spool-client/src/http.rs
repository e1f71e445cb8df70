//! HTTP implementation of [`ThreadsApi`] over `reqwest`.
//!
//! One trait call is one request. Responses are decoded from the body text
//! so decode failures carry the JSON error; non-2xx responses are mapped
//! through [`parse_api_error`](crate::error::parse_api_error).

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use spool_core::{RequestId, ThreadId};

use crate::api::{ApiResult, ThreadsApi};
use crate::config::ClientConfig;
use crate::error::{ApiError, parse_api_error};
use crate::types::{
    CreateThreadRequest, DeletionStatus, ListMessagesQuery, MessagePage, ThreadObject,
};

/// Default API base URL.
const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Beta header required by the threads endpoints.
const BETA_HEADER: &str = "assistants=v2";

/// HTTP client for the thread endpoints.
pub struct HttpThreadsClient {
    /// Configuration.
    config: ClientConfig,
    /// HTTP client (reused across requests).
    client: reqwest::Client,
    /// Resolved base URL.
    base_url: String,
}

impl HttpThreadsClient {
    /// Create a new client.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a new client with a shared `reqwest` client.
    #[must_use]
    pub fn with_client(config: ClientConfig, client: reqwest::Client) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        info!(base_url = %base_url, "threads client initialized");

        Self {
            config,
            client,
            base_url,
        }
    }

    /// Build the thread collection endpoint URL.
    fn threads_url(&self) -> String {
        format!("{}/v1/threads", self.base_url)
    }

    /// Build the endpoint URL for one thread.
    fn thread_url(&self, thread_id: &ThreadId) -> String {
        format!("{}/v1/threads/{thread_id}", self.base_url)
    }

    /// Build the message listing endpoint URL for one thread.
    fn messages_url(&self, thread_id: &ThreadId) -> String {
        format!("{}/v1/threads/{thread_id}/messages", self.base_url)
    }

    /// Build HTTP headers for a request.
    fn build_headers(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", self.config.api_key);
        let _ = headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).map_err(|e| ApiError::Auth {
                message: format!("Invalid authorization header: {e}"),
            })?,
        );
        let _ = headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let _ = headers.insert("openai-beta", HeaderValue::from_static(BETA_HEADER));

        if let Some(org) = &self.config.organization {
            let _ = headers.insert(
                "openai-organization",
                HeaderValue::from_str(org).map_err(|e| ApiError::Auth {
                    message: format!("Invalid organization header: {e}"),
                })?,
            );
        }

        Ok(headers)
    }

    /// Send a prepared request and decode the JSON response body.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        request_id: &RequestId,
    ) -> ApiResult<T> {
        let mut request = request.headers(self.build_headers()?);
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = parse_api_error(&body, status.as_u16());
            warn!(
                request_id = %request_id,
                status = status.as_u16(),
                category = err.category(),
                "request failed"
            );
            return Err(err);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ThreadsApi for HttpThreadsClient {
    async fn create_thread(&self, request: &CreateThreadRequest) -> ApiResult<ThreadObject> {
        let request_id = RequestId::new();
        debug!(
            request_id = %request_id,
            seed_messages = request.messages.len(),
            "creating thread"
        );

        let thread: ThreadObject = self
            .dispatch(
                self.client.post(self.threads_url()).json(request),
                &request_id,
            )
            .await?;

        debug!(request_id = %request_id, thread_id = %thread.id, "thread created");
        Ok(thread)
    }

    async fn delete_thread(&self, thread_id: &ThreadId) -> ApiResult<DeletionStatus> {
        let request_id = RequestId::new();
        debug!(request_id = %request_id, thread_id = %thread_id, "deleting thread");

        self.dispatch(
            self.client.delete(self.thread_url(thread_id)),
            &request_id,
        )
        .await
    }

    async fn list_messages(
        &self,
        thread_id: &ThreadId,
        query: &ListMessagesQuery,
    ) -> ApiResult<MessagePage> {
        let request_id = RequestId::new();
        debug!(request_id = %request_id, thread_id = %thread_id, "listing messages");

        self.dispatch(
            self.client
                .get(self.messages_url(thread_id))
                .query(&query.to_query_pairs()),
            &request_id,
        )
        .await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
