//! API response and request types for the Reflective Journal REST API.
//!
//! This module contains all the type definitions used by the API client,
//! organized by category.

pub mod chat;
pub mod diary;
pub mod stats;

// Re-export all types for convenience
pub use chat::*;
pub use diary::*;
pub use stats::*;
