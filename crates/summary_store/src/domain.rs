use serde::{Deserialize, Serialize};

/// Structured summary of a single video's topic.
///
/// Only ever built from a complete model response; unknown or missing fields
/// are rejected during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicSummary {
    pub topic_name: String,
    pub topic_summary: String,
}
