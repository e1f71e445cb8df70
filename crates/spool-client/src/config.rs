//! Client configuration.

use std::time::Duration;

use crate::api::ApiResult;
use crate::error::ApiError;

/// Environment variable holding the API key.
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the base URL.
const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Environment variable holding the organization id.
const ORG_ENV: &str = "OPENAI_ORG_ID";

/// Configuration for [`HttpThreadsClient`](crate::http::HttpThreadsClient).
///
/// # Example
///
/// ```no_run
/// use spool_client::ClientConfig;
///
/// let config = ClientConfig::new("sk-...")
///     .base_url("https://api.openai.com")
///     .organization("org-...");
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Base URL override (testing, proxies, compatible services).
    pub base_url: Option<String>,
    /// Optional organization id for multi-org accounts.
    pub organization: Option<String>,
    /// Optional per-request timeout.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration with the given API key and defaults elsewhere.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            organization: None,
            timeout: None,
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the organization id, sent as the `OpenAI-Organization` header.
    #[must_use]
    pub fn organization(mut self, org: impl Into<String>) -> Self {
        self.organization = Some(org.into());
        self
    }

    /// Set a per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a configuration from the environment.
    ///
    /// Reads `OPENAI_API_KEY` (required), `OPENAI_BASE_URL` and
    /// `OPENAI_ORG_ID` (optional).
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
    }

    /// Build a configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ApiResult<Self> {
        let api_key = lookup(API_KEY_ENV).ok_or_else(|| ApiError::Auth {
            message: format!("{API_KEY_ENV} is not set"),
        })?;
        Ok(Self {
            api_key,
            base_url: lookup(BASE_URL_ENV),
            organization: lookup(ORG_ENV),
            timeout: None,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
