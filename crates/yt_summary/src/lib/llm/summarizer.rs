use std::future::Future;

use summary_store::TopicSummary;

use crate::parser::VideoId;

const TOPIC_SUMMARY_PROMPT: &str = include_str!("./prompts/topic_summary.txt");

/// The external LLM service, seen as something that turns a transcript into
/// a [`TopicSummary`].
pub trait Summarizer {
    type Error: Into<anyhow::Error>;

    /// `video_id` is carried for tracing only.
    fn summarize(
        &self,
        transcript: &str,
        video_id: &VideoId,
    ) -> impl Future<Output = Result<TopicSummary, Self::Error>> + Send;
}

/// Builds the single-turn prompt: the JSON shape instruction followed by the
/// transcript verbatim.
pub fn build_prompt(transcript: &str) -> String {
    format!("{TOPIC_SUMMARY_PROMPT}\nTranscription:\n{transcript}\n")
}

/// Parses model output that must be exactly a `topic_name`/`topic_summary`
/// object.
pub fn parse_summary(text: &str) -> Result<TopicSummary, serde_json::Error> {
    serde_json::from_str(text)
}
