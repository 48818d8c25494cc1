//! Blocking client for the GitHub public events endpoint.

use reqwest::blocking;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;

use crate::error::FetchError;
use crate::event::Event;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// GitHub rejects anonymous requests without a User-Agent.
const CLIENT_IDENT: &str = "gitpulse";

#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: blocking::Client,
}

impl Client {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Points the client at an alternative host. Used by tests to exercise
    /// the error classification against a local fixture server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: blocking::Client::new(),
        }
    }

    /// Fetches the first page of recent activity for `handle`, newest first.
    ///
    /// Exactly one request is made; every failure is terminal. Individual
    /// record shape is not validated here, the formatter's defaults absorb
    /// missing fields.
    pub fn fetch_events(&self, handle: &str) -> Result<Vec<Event>, FetchError> {
        let url = format!("{}/users/{}/events", self.base_url, handle);

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, CLIENT_IDENT)
            .send()
            .map_err(|err| FetchError::Network(err.without_url().to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::UserNotFound(handle.to_string()));
        }
        if status == StatusCode::FORBIDDEN {
            return Err(FetchError::RateLimited);
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .map_err(|err| FetchError::Network(err.without_url().to_string()))?;

        serde_json::from_str(&body).map_err(|_| FetchError::MalformedResponse)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
