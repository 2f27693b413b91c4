pub mod batch;
pub mod config;
mod error;
mod llm;
pub mod parser;
mod processor;
pub mod server;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::Error;
pub use llm::gemini;
pub use llm::summarizer::{build_prompt, parse_summary, Summarizer};
pub use processor::{
    builder::SummaryPipelineBuilder, PipelineError, PipelineStage, SummaryPipeline,
};
pub use summary_store::{JsonFileStore, SummaryStore, TopicSummary};
