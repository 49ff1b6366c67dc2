//! # Reflective Journal Rust SDK
//!
//! A Rust SDK for interacting with the Reflective Journal API.
//!
//! ## Modules
//!
//! - [`api`]: REST API client for chat, stats, and diary entries
//! - [`network`]: Network URL constants and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use journal_sdk::api::JournalApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create API client
//!     let client = JournalApiClient::new("http://localhost:8000")?;
//!
//!     // Ask the journal chat a question
//!     let reply = client.send_chat_message("How was my week?").await?;
//!     println!("Answer: {}", reply.answer);
//!
//!     // Fetch aggregate stats (never fails — logs and returns None instead)
//!     if let Some(stats) = client.get_stats().await {
//!         println!("{} entries so far", stats.total_entries);
//!     }
//!
//!     // Save today's entry
//!     let saved = client.save_diary_entry("Slept well, long walk.", None).await?;
//!     println!("{}: {}", saved.status, saved.message);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Network URL constants (default API endpoint and environment variable).
pub mod network;

/// REST API client module for chat, stats, and diary entries.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use journal_sdk::prelude::*;
/// ```
pub mod prelude {
    // API module exports
    pub use crate::api::{
        ApiError, ApiResult, JournalApiClient, JournalApiClientBuilder,
        // Common types
        ChatRequest, ChatResponse,
        DiaryEntry, SaveEntryRequest, SaveEntryResponse,
        EmotionCount, StatsResponse, TrendDataset, WeeklyTrends,
    };

    // Network constants
    pub use crate::network::{API_URL_ENV, DEFAULT_API_URL};
}
