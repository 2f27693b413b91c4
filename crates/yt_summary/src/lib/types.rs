use serde::Deserialize;

/// One caption unit of a transcript, in the order the service returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: 0.0,
            duration: 0.0,
        }
    }
}

/// The parts of `ytInitialPlayerResponse` needed to locate caption tracks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub playability_status: Option<PlayabilityStatus>,
    pub captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
pub struct PlayabilityStatus {
    pub status: String,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    pub tracklist: Option<CaptionTracklist>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTracklist {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    /// `"asr"` for auto-generated tracks, absent for manually created ones
    pub kind: Option<String>,
}

impl CaptionTrack {
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

impl PlayerResponse {
    /// Caption tracks, or `None` when captions are disabled for the video.
    pub fn caption_tracks(&self) -> Option<&[CaptionTrack]> {
        self.captions
            .as_ref()
            .and_then(|c| c.tracklist.as_ref())
            .map(|t| t.caption_tracks.as_slice())
            .filter(|tracks| !tracks.is_empty())
    }

    /// Picks the first track matching `languages` in order, preferring
    /// manually created tracks over generated ones for each language.
    pub fn find_track(&self, languages: &[String]) -> Option<&CaptionTrack> {
        let tracks = self.caption_tracks()?;

        languages.iter().find_map(|lang| {
            let mut candidates = tracks.iter().filter(|t| &t.language_code == lang);
            candidates
                .clone()
                .find(|t| !t.is_generated())
                .or_else(|| candidates.find(|t| t.is_generated()))
        })
    }
}
