//! Diary entry types for the Reflective Journal REST API.

use serde::{Deserialize, Serialize};

/// A stored diary entry, as returned by GET /journal/diary/{date}.
///
/// The word and character counts are only present on backends that store
/// entries in the database; file-backed deployments return just the date
/// and text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Entry date in `YYYY-MM-DD` form
    pub date: String,
    /// Raw entry text
    pub text: String,
    /// Word count
    #[serde(default)]
    pub word_count: Option<u32>,
    /// Character count
    #[serde(default)]
    pub char_count: Option<u32>,
}

/// Request body for POST /journal/diary/save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveEntryRequest {
    /// Raw entry text
    pub text: String,
    /// Entry date in `YYYY-MM-DD` form; the backend uses today when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Response for POST /journal/diary/save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveEntryResponse {
    /// Outcome status (usually "ok")
    pub status: String,
    /// Human-readable confirmation message
    pub message: String,
}
