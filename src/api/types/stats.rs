//! Statistics types for the Reflective Journal REST API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One emotion with its global occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionCount {
    /// Normalized emotion name
    pub name: String,
    /// Number of occurrences
    pub value: u64,
}

/// One line of the weekly trends chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendDataset {
    /// Capitalized emotion name
    pub label: String,
    /// Per-day share of that day's emotions, rounded percentages
    pub data: Vec<u32>,
    /// Chart line color
    #[serde(rename = "borderColor", default)]
    pub border_color: String,
}

/// Last-7-days emotion trends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyTrends {
    /// Weekday labels, oldest first
    #[serde(default)]
    pub dates: Vec<String>,
    /// One dataset per charted emotion
    #[serde(default)]
    pub datasets: Vec<TrendDataset>,
}

/// Response for GET /journal/stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Total number of diary entries
    #[serde(default)]
    pub total_entries: u64,
    /// Global emotion occurrence counts
    #[serde(default)]
    pub emotion_counts: HashMap<String, u64>,
    /// Top emotions overall (at most five)
    #[serde(default)]
    pub top_emotions: Vec<EmotionCount>,
    /// Emotion counts for the current month
    #[serde(default)]
    pub month_emotions: HashMap<String, u64>,
    /// Last-7-days trends for the frontend chart
    #[serde(default)]
    pub weekly_trends: WeeklyTrends,
}
