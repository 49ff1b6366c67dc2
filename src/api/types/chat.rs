//! Chat-related types for the Reflective Journal REST API.

use serde::{Deserialize, Serialize};

/// Request body for POST /journal/chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's question for the journal chat engine
    pub question: String,
}

/// Response for POST /journal/chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The chat engine's answer
    pub answer: String,
}
