//! LRCLIB lyrics source.
//!
//! Uses the public search endpoint, which needs no API key and returns both
//! synced (LRC) and plain lyrics per track.

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::lyrics::provider::{LyricsCandidate, LyricsQuery, LyricsSource};

pub const LRCLIB_BASE_URL: &str = "https://lrclib.net";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LrclibTrack {
    track_name: Option<String>,
    artist_name: Option<String>,
    #[serde(default)]
    instrumental: bool,
    plain_lyrics: Option<String>,
    synced_lyrics: Option<String>,
}

pub struct LrclibSource {
    client: Client,
    base_url: String,
}

impl LrclibSource {
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl LyricsSource for LrclibSource {
    fn name(&self) -> &'static str {
        "lrclib"
    }

    fn search(&self, query: &LyricsQuery) -> Result<Vec<LyricsCandidate>> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if !query.title.is_empty() {
            params.push(("track_name", &query.title));
            if !query.artist.is_empty() {
                params.push(("artist_name", &query.artist));
            }
        } else if !query.artist.is_empty() {
            params.push(("q", &query.artist));
        } else {
            debug!("lrclib: nothing to search for");
            return Ok(Vec::new());
        }

        let url = format!("{}/api/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .map_err(|e| Error::source_query(self.name(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::source_query(self.name(), format!("HTTP {}", status)));
        }

        let tracks: Vec<LrclibTrack> = response
            .json()
            .map_err(|e| Error::source_query(self.name(), format!("Parse error: {}", e)))?;

        debug!("lrclib returned {} tracks", tracks.len());

        Ok(tracks
            .into_iter()
            .filter(|t| !t.instrumental)
            .filter_map(|t| self.candidate(t))
            .collect())
    }
}

impl LrclibSource {
    /// Synced lyrics win over plain; tracks with neither are skipped.
    fn candidate(&self, track: LrclibTrack) -> Option<LyricsCandidate> {
        let non_empty = |s: Option<String>| s.filter(|t| !t.trim().is_empty());

        let (text, synced) = match non_empty(track.synced_lyrics) {
            Some(text) => (text, true),
            None => (non_empty(track.plain_lyrics)?, false),
        };

        let description = match (track.artist_name, track.track_name) {
            (Some(artist), Some(title)) => format!("{} - {}", artist, title),
            (None, Some(title)) => title,
            (Some(artist), None) => artist,
            (None, None) => String::new(),
        };

        Some(LyricsCandidate {
            source: self.name().to_string(),
            description,
            text,
            synced,
        })
    }
}
