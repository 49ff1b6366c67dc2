//! Reflective Journal REST API client implementation.
//!
//! The [`JournalApiClient`] provides a type-safe interface for interacting
//! with the Reflective Journal REST API.
//!
//! # Example
//!
//! ```rust,ignore
//! use journal_sdk::api::JournalApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JournalApiClient::new("http://localhost:8000")?;
//!
//!     // Ask the chat engine
//!     let reply = client.send_chat_message("What made me happy lately?").await?;
//!     println!("Answer: {}", reply.answer);
//!
//!     // Read an entry
//!     if let Some(entry) = client.get_diary_entry("2024-01-01").await? {
//!         println!("{}: {} words", entry.date, entry.text.split_whitespace().count());
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult, ErrorBody};
use crate::api::types::*;
use crate::network::{API_URL_ENV, DEFAULT_API_URL};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring [`JournalApiClient`].
#[derive(Debug, Clone)]
pub struct JournalApiClientBuilder {
    base_url: String,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
}

impl JournalApiClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<JournalApiClient> {
        let mut builder = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10);

        // Build default headers
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        for (name, value) in self.default_headers {
            let header_name = reqwest::header::HeaderName::try_from(name.as_str())
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = reqwest::header::HeaderValue::from_str(&value)
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        builder = builder.default_headers(headers);

        let http_client = builder.build()?;

        Ok(JournalApiClient {
            http_client,
            base_url: self.base_url,
        })
    }
}

/// Reflective Journal REST API client.
///
/// Provides methods for the journal chat, aggregate stats, and diary entry
/// endpoints. Stateless between calls; cloning shares the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct JournalApiClient {
    http_client: Client,
    base_url: String,
}

impl JournalApiClient {
    /// Create a new client with the given base URL.
    ///
    /// Uses default settings (30s timeout, connection pooling).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        JournalApiClientBuilder::new(base_url).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(base_url: impl Into<String>) -> JournalApiClientBuilder {
        JournalApiClientBuilder::new(base_url)
    }

    /// Create a client from the `JOURNAL_API_URL` environment variable.
    ///
    /// Falls back to [`DEFAULT_API_URL`] when the variable is unset. The
    /// environment is read here, at the caller's request, never at load
    /// time.
    pub fn from_env() -> ApiResult<Self> {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Execute a GET request.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self.http_client.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a POST request with a JSON body.
    async fn post<T: DeserializeOwned, B: Serialize>(&self, url: &str, body: &B) -> ApiResult<T> {
        let response = self.http_client.post(url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Shared response handler: decode success bodies, normalize failures.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Deserialize(format!("Failed to deserialize response: {}", e)));
        }

        Err(Self::parse_error_response(response).await)
    }

    /// Parse an error response into an [`ApiError::Status`].
    ///
    /// Prefers the backend's `detail` message; falls back to
    /// `"Error {status}: {statusText}"` when the body is missing or not
    /// JSON.
    async fn parse_error_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let fallback = format!(
            "Error {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        );

        let error_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read error response body: {}", e);
                return ApiError::Status {
                    status: status.as_u16(),
                    message: fallback,
                };
            }
        };

        let message = serde_json::from_str::<ErrorBody>(&error_text)
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or(fallback);

        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }

    // =========================================================================
    // Validation helpers
    // =========================================================================

    /// Validate that a date string is `YYYY-MM-DD`.
    fn validate_date(date: &str) -> ApiResult<()> {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            ApiError::InvalidParameter(format!("date must be YYYY-MM-DD, got '{}'", date))
        })?;
        Ok(())
    }

    // =========================================================================
    // Chat endpoints
    // =========================================================================

    /// Send a question to the journal chat engine.
    ///
    /// Returns the engine's answer.
    pub async fn send_chat_message(&self, question: impl Into<String>) -> ApiResult<ChatResponse> {
        let url = format!("{}/journal/chat", self.base_url);
        let request = ChatRequest {
            question: question.into(),
        };
        self.post(&url, &request).await
    }

    // =========================================================================
    // Stats endpoints
    // =========================================================================

    /// Get aggregate statistics, propagating any failure.
    pub async fn try_get_stats(&self) -> ApiResult<StatsResponse> {
        let url = format!("{}/journal/stats", self.base_url);
        self.get(&url).await
    }

    /// Get aggregate statistics.
    ///
    /// Never fails: any network or HTTP error is logged as a warning and
    /// converted to `None`, so a stats widget can degrade without taking the
    /// caller down. Use [`try_get_stats`](Self::try_get_stats) when the
    /// underlying error matters.
    pub async fn get_stats(&self) -> Option<StatsResponse> {
        match self.try_get_stats().await {
            Ok(stats) => Some(stats),
            Err(e) => {
                tracing::warn!("Failed to fetch journal stats: {}", e);
                None
            }
        }
    }

    // =========================================================================
    // Diary endpoints
    // =========================================================================

    /// Get the diary entry for a date (`YYYY-MM-DD`).
    ///
    /// Returns `Ok(None)` when the backend reports no entry for that date
    /// with a `null` body. Backends that answer 404 instead surface an
    /// [`ApiError::Status`].
    pub async fn get_diary_entry(&self, date: &str) -> ApiResult<Option<DiaryEntry>> {
        Self::validate_date(date)?;
        let url = format!("{}/journal/diary/{}", self.base_url, urlencoding::encode(date));
        self.get(&url).await
    }

    /// Save a diary entry.
    ///
    /// When `date` is `None` it is omitted from the request body and the
    /// backend files the entry under today's date.
    pub async fn save_diary_entry(
        &self,
        text: impl Into<String>,
        date: Option<&str>,
    ) -> ApiResult<SaveEntryResponse> {
        if let Some(d) = date {
            Self::validate_date(d)?;
        }
        let url = format!("{}/journal/diary/save", self.base_url);
        let request = SaveEntryRequest {
            text: text.into(),
            date: date.map(|d| d.to_string()),
        };
        self.post(&url, &request).await
    }

    /// List the dates of all stored diary entries (`YYYY-MM-DD`, newest first).
    pub async fn list_diary_entries(&self) -> ApiResult<Vec<String>> {
        let url = format!("{}/journal/diary/list", self.base_url);
        self.get(&url).await
    }
}
