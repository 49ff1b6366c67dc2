//! Network URL constants for the Reflective Journal SDK.

/// Default REST API base URL (local backend during development).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable consulted by [`JournalApiClient::from_env`](crate::api::JournalApiClient::from_env).
pub const API_URL_ENV: &str = "JOURNAL_API_URL";
