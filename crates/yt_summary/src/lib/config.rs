//! Default values for everything the binary lets you override.

/// Model used for summarization unless `GEMINI_MODEL` says otherwise.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// File written by the batch entry point.
pub const DEFAULT_OUTPUT_PATH: &str = "summary.json";

/// Video summarized by the batch entry point when no URL is given.
pub const SAMPLE_VIDEO_URL: &str = "https://www.youtube.com/watch?v=1xue6AgPOyM";

/// Transcript languages tried in order.
pub const DEFAULT_LANGUAGES: &[&str] = &["en"];

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const YOUTUBE_BASE_URL: &str = "https://www.youtube.com";
