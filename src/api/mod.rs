//! REST API client module for the Reflective Journal backend.
//!
//! This module provides a type-safe HTTP client for the journal chat,
//! aggregate stats, and diary entry endpoints.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use journal_sdk::api::JournalApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client with default settings
//!     let client = JournalApiClient::new("http://localhost:8000")?;
//!
//!     // Chat with the journal
//!     let reply = client.send_chat_message("How did last week go?").await?;
//!     println!("Answer: {}", reply.answer);
//!
//!     // Save and re-read an entry
//!     client.save_diary_entry("Quiet day, lots of reading.", Some("2024-01-01")).await?;
//!     let entry = client.get_diary_entry("2024-01-01").await?;
//!     println!("Entry: {:?}", entry);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```rust,ignore
//! use journal_sdk::api::JournalApiClient;
//! use std::time::Duration;
//!
//! let client = JournalApiClient::builder("http://localhost:8000")
//!     .timeout(Duration::from_secs(60))
//!     .header("X-Custom-Header", "value")
//!     .build()?;
//! ```
//!
//! The base URL can also come from the environment, read explicitly at
//! construction:
//!
//! ```rust,ignore
//! // Uses JOURNAL_API_URL, or http://localhost:8000 when unset
//! let client = JournalApiClient::from_env()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for
//! `Result<T, ApiError>`, except [`JournalApiClient::get_stats`] which
//! converts any failure into `None` after logging it:
//!
//! ```rust,ignore
//! use journal_sdk::api::{JournalApiClient, ApiError};
//!
//! match client.get_diary_entry("2024-01-01").await {
//!     Ok(Some(entry)) => println!("Found entry: {}", entry.text),
//!     Ok(None) => println!("No entry for that date"),
//!     Err(e) if e.is_not_found() => println!("Backend has no diary route"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{JournalApiClient, JournalApiClientBuilder};
pub use error::{ApiError, ApiResult, ErrorBody};
pub use types::*;
