//! UserSource trait and the GitHub REST client.
//!
//! One request per call, no retries and no pagination. The response status
//! is checked before the body is parsed so rate limiting and server errors
//! surface as [`FetchError::Status`] instead of a confusing parse failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::constants::{ACCEPT, API_VERSION, API_VERSION_HEADER, USER_AGENT, USERS_PATH};
use crate::models::UserRecord;

/// Longest slice of an error response body kept for diagnostics.
const MAX_ERROR_BODY: usize = 200;

/// Errors from fetching the user listing.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("requested user count must be at least 1")]
    InvalidCount,

    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("unexpected response payload from {url}: {source}")]
    Payload {
        url: String,
        source: serde_json::Error,
    },
}

/// Source of user records.
///
/// [`GithubClient`] talks to the network; tests plug in canned sources.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch up to `count` users in the order the source returns them.
    async fn fetch_users(&self, count: u32) -> Result<Vec<UserRecord>, FetchError>;
}

/// GitHub REST API client for the `/users` listing.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    /// Build a client rooted at `base_url` (e.g. `https://api.github.com`).
    ///
    /// `timeout` bounds the whole request; `None` waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| FetchError::Transport {
            url: base_url.to_string(),
            source: e,
        })?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Full URL of the users resource.
    pub fn users_url(&self) -> String {
        format!("{}{USERS_PATH}", self.base_url)
    }
}

#[async_trait]
impl UserSource for GithubClient {
    async fn fetch_users(&self, count: u32) -> Result<Vec<UserRecord>, FetchError> {
        if count == 0 {
            return Err(FetchError::InvalidCount);
        }

        let url = self.users_url();
        tracing::debug!(%url, count, "fetching users");

        let transport = |source| FetchError::Transport {
            url: url.clone(),
            source,
        };

        let resp = self
            .client
            .get(&url)
            .query(&[("per_page", count)])
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header(API_VERSION_HEADER, API_VERSION)
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;

        if !status.is_success() {
            tracing::debug!(%url, %status, "user listing request rejected");
            return Err(FetchError::Status {
                url,
                status,
                body: truncate_body(&body),
            });
        }

        let users = parse_users(&body).map_err(|source| FetchError::Payload {
            url: url.clone(),
            source,
        })?;
        tracing::debug!(%url, parsed = users.len(), "parsed user listing");

        Ok(users)
    }
}

/// Parse a JSON array of user objects, preserving order.
pub fn parse_users(body: &str) -> Result<Vec<UserRecord>, serde_json::Error> {
    serde_json::from_str(body)
}

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_users_preserves_order() {
        let body = r#"[
            {"login":"Zed","id":9,"type":"User"},
            {"login":"amy","id":2},
            {"login":"Bob","id":5,"type":"Organization"}
        ]"#;
        let users = parse_users(body).unwrap();
        let logins: Vec<_> = users.iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, ["Zed", "amy", "Bob"]);
        assert!(users[1].kind.is_none());
    }

    #[test]
    fn parse_users_rejects_object_payload() {
        // Error bodies from the API are objects, not arrays.
        let result = parse_users(r#"{"message":"API rate limit exceeded"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn parse_users_rejects_missing_id() {
        let result = parse_users(r#"[{"login":"amy"}]"#);
        assert!(result.unwrap_err().to_string().contains("id"));
    }

    #[test]
    fn parse_users_accepts_empty_array() {
        assert!(parse_users("[]").unwrap().is_empty());
    }

    #[test]
    fn new_rejects_non_http_base_url() {
        let result = GithubClient::new("ftp://example.com", None);
        assert!(matches!(result, Err(FetchError::InvalidBaseUrl(_))));
    }

    #[test]
    fn users_url_trims_trailing_slash() {
        let client = GithubClient::new("https://api.github.com/", None).unwrap();
        assert_eq!(client.users_url(), "https://api.github.com/users");
    }

    #[tokio::test]
    async fn zero_count_is_rejected_without_a_request() {
        let client = GithubClient::new("http://127.0.0.1:9", None).unwrap();
        let result = client.fetch_users(0).await;
        assert!(matches!(result, Err(FetchError::InvalidCount)));
    }

    #[test]
    fn truncate_body_limits_length() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.chars().count(), MAX_ERROR_BODY + 1);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate_body("  short  "), "short");
    }
}
