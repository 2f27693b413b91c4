use reqwest::Client;
use serde::{Deserialize, Serialize};
use summary_store::TopicSummary;

use crate::{
    config::{DEFAULT_MODEL, GEMINI_BASE_URL},
    llm::summarizer::{build_prompt, parse_summary},
    parser::VideoId,
    Summarizer,
};

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    generation_config: GenerationConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No transcript provided for summarization")]
    EmptyTranscript,
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("No text in model response")]
    EmptyResponse,
    #[error("Model response is not a topic summary: {0}")]
    MalformedSummary(#[from] serde_json::Error),
}

/// Sampling settings sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub thinking_config: ThinkingConfig,
    pub response_mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    /// `-1` leaves the reasoning budget up to the model
    pub thinking_budget: i32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            thinking_config: ThinkingConfig {
                thinking_budget: -1,
            },
            response_mime_type: "application/json".into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content>,
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
    #[serde(default)]
    pub thought: bool,
}

impl GenerateContentResponse {
    /// Text of the first candidate, skipping thought summaries.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text = parts
            .iter()
            .filter(|p| !p.thought)
            .filter_map(|p| p.text.as_deref())
            .collect::<String>();

        (!text.is_empty()).then_some(text)
    }
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            generation_config: GenerationConfig::default(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn send_generate_request(
        &self,
        prompt: impl Into<String>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart {
                    text: prompt.into(),
                }],
            }],
            generation_config: &self.generation_config,
        };

        let resp = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        Ok(resp.json::<GenerateContentResponse>().await?)
    }
}

impl Summarizer for GeminiClient {
    type Error = GeminiError;

    #[tracing::instrument(skip_all, fields(%video_id, model = %self.model))]
    async fn summarize(
        &self,
        transcript: &str,
        video_id: &VideoId,
    ) -> Result<TopicSummary, Self::Error> {
        if transcript.is_empty() {
            tracing::warn!("No transcript provided for summarization");
            return Err(GeminiError::EmptyTranscript);
        }
        if self.api_key.trim().is_empty() {
            tracing::error!("Gemini API key is not configured");
            return Err(GeminiError::MissingApiKey);
        }

        let response = self
            .send_generate_request(build_prompt(transcript))
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let text = response
            .text()
            .ok_or(GeminiError::EmptyResponse)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        parse_summary(&text)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to parse model response"))
            .map_err(GeminiError::from)
    }
}
