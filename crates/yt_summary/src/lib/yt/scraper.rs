use std::ops::Deref;

use crate::{
    config::{DEFAULT_LANGUAGES, YOUTUBE_BASE_URL},
    parser::{parse_transcript_xml, VideoId, YtHtmlDocument},
    types::{CaptionTrack, PlayerResponse, TranscriptSegment},
    yt::{TranscriptError, TranscriptFetcher},
};

/// Reads transcripts straight off the YouTube watch page and its caption
/// tracks.
pub struct Scraper {
    client: reqwest::Client,
    base_url: String,
    languages: Vec<String>,
}

impl Default for Scraper {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: YOUTUBE_BASE_URL.into(),
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl Deref for Scraper {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl Scraper {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Language codes to try, in order of preference. An empty list keeps the
    /// current languages.
    pub fn with_languages<I, L>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let languages = languages.into_iter().map(Into::into).collect::<Vec<_>>();
        if !languages.is_empty() {
            self.languages = languages;
        }
        self
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_watch_page(
        &self,
        video_id: &VideoId,
    ) -> Result<YtHtmlDocument, TranscriptError> {
        let resp = self
            .get(format!("{}/watch", self.base_url))
            .query(&[("v", video_id.as_str())])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            return Err(TranscriptError::Http {
                status: resp.status().as_u16(),
            });
        }

        Ok(resp.text().await?.into())
    }

    #[tracing::instrument(skip_all, fields(language = %track.language_code))]
    async fn fetch_caption_track(
        &self,
        track: &CaptionTrack,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        // srv3 is a different XML dialect; the default format is the one we parse
        let url = track.base_url.replace("&fmt=srv3", "");

        let resp = self
            .get(url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            return Err(TranscriptError::Http {
                status: resp.status().as_u16(),
            });
        }

        let xml = resp.text().await?;
        Ok(parse_transcript_xml(&xml)?)
    }

    fn select_track<'a>(
        &self,
        video_id: &VideoId,
        player_response: &'a PlayerResponse,
    ) -> Result<&'a CaptionTrack, TranscriptError> {
        if let Some(status) = &player_response.playability_status {
            if status.status != "OK" {
                return Err(TranscriptError::VideoUnavailable {
                    video_id: video_id.clone(),
                    reason: status
                        .reason
                        .clone()
                        .unwrap_or_else(|| status.status.clone()),
                });
            }
        }

        let tracks = player_response
            .caption_tracks()
            .ok_or_else(|| TranscriptError::TranscriptsDisabled(video_id.clone()))?;

        player_response
            .find_track(&self.languages)
            .ok_or_else(|| TranscriptError::NoTranscriptFound {
                video_id: video_id.clone(),
                requested: self.languages.clone(),
                available: tracks.iter().map(|t| t.language_code.clone()).collect(),
            })
    }
}

impl TranscriptFetcher for Scraper {
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let doc = self.fetch_watch_page(video_id).await?;

        if doc.is_rate_limited() {
            return Err(TranscriptError::TooManyRequests);
        }

        let player_response = doc.to_json::<PlayerResponse>()?;
        let track = self.select_track(video_id, &player_response)?;

        tracing::debug!(
            language = %track.language_code,
            generated = track.is_generated(),
            "Selected caption track"
        );

        self.fetch_caption_track(track).await
    }
}
