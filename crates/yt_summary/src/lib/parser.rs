//! # Yt Parser
//!
//! This module provides the pure parsing pieces of the pipeline: pulling a
//! video identifier out of a user supplied URL, extracting the player
//! response from a watch page, and turning caption XML into transcript
//! segments.

use std::{fmt, ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::{error::Error, types::TranscriptSegment};

const WATCH_URL_MARKER: &str = "youtube.com/watch?v=";
const SHORT_URL_MARKER: &str = "youtu.be/";

static YT_PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});\s*(?:var\s+meta\b|</script>)",
    )
    .unwrap()
});

static CAPTION_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<text\s+start="([^"]*)"(?:\s+dur="([^"]*)")?[^>]*>(.*?)</text>"#).unwrap()
});

static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// A non-empty YouTube video identifier.
///
/// Only constructed through [`extract_video_id`] (or [`VideoId::new`], which
/// enforces the same non-empty rule).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Result<Self, Error> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::InvalidUrlFormat(id));
        }
        Ok(VideoId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for VideoId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the video identifier from a watch URL or a short link.
///
/// * `.../youtube.com/watch?v=ID&...` yields everything after `v=` up to the
///   next `&`.
/// * `.../youtu.be/ID` yields the final path segment.
///
/// Anything else, or an empty identifier, is [`Error::InvalidUrlFormat`].
pub fn extract_video_id(url: &str) -> Result<VideoId, Error> {
    let id = if let Some((_, rest)) = url.split_once(WATCH_URL_MARKER) {
        rest.split('&').next().unwrap_or_default()
    } else if url.contains(SHORT_URL_MARKER) {
        url.rsplit('/').next().unwrap_or_default()
    } else {
        return Err(Error::InvalidUrlFormat(url.to_string()));
    };

    VideoId::new(id).map_err(|_| Error::InvalidUrlFormat(url.to_string()))
}

/// Parses the timedtext XML served for a caption track.
///
/// Segments keep document order. Inline markup is dropped and entities are
/// decoded twice since YouTube escapes caption text on top of the XML escaping.
pub fn parse_transcript_xml(xml: &str) -> Result<Vec<TranscriptSegment>, Error> {
    if !xml.contains("<transcript") {
        return Err(Error::ParseError(
            "Caption response is missing the <transcript> root element",
        ));
    }

    let segments = CAPTION_TEXT_RE
        .captures_iter(xml)
        .map(|cap| -> Result<TranscriptSegment, Error> {
            let start = cap[1]
                .parse::<f64>()
                .map_err(|_| Error::ParseError("Invalid caption 'start' attribute"))?;
            let duration = cap
                .get(2)
                .map(|d| d.as_str().parse::<f64>())
                .transpose()
                .map_err(|_| Error::ParseError("Invalid caption 'dur' attribute"))?
                .unwrap_or_default();

            let once = html_escape::decode_html_entities(&cap[3]);
            let twice = html_escape::decode_html_entities(&once);
            let text = MARKUP_RE.replace_all(&twice, "").into_owned();

            Ok(TranscriptSegment {
                text,
                start,
                duration,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(segments)
}

pub struct YtHtmlDocument(String);

impl Deref for YtHtmlDocument {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl YtHtmlDocument {
    pub fn new(doc: String) -> Self {
        YtHtmlDocument(doc)
    }

    /// YouTube serves a captcha page instead of the watch page once an IP is
    /// flagged for too many requests.
    pub fn is_rate_limited(&self) -> bool {
        self.contains(r#"class="g-recaptcha""#)
    }

    /// Deserializes the `ytInitialPlayerResponse` script data.
    pub fn to_json<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let raw = YT_PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .ok_or(Error::ParseError(
                "Failed to extract ytInitialPlayerResponse from the page's script tag",
            ))?;

        Ok(serde_json::from_str(raw.as_str())?)
    }
}

impl From<String> for YtHtmlDocument {
    fn from(value: String) -> Self {
        YtHtmlDocument(value)
    }
}
