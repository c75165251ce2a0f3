//! lyrics.ovh lyrics source. Plain text only, looked up by exact artist and title.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::lyrics::provider::{LyricsCandidate, LyricsQuery, LyricsSource};

pub const LYRICS_OVH_BASE_URL: &str = "https://api.lyrics.ovh";

#[derive(Debug, Deserialize)]
struct LyricsOvhResponse {
    lyrics: Option<String>,
}

pub struct LyricsOvhSource {
    client: Client,
    base_url: String,
}

impl LyricsOvhSource {
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl LyricsSource for LyricsOvhSource {
    fn name(&self) -> &'static str {
        "lyrics_ovh"
    }

    fn search(&self, query: &LyricsQuery) -> Result<Vec<LyricsCandidate>> {
        if query.artist.is_empty() || query.title.is_empty() {
            debug!("lyrics_ovh: needs both artist and title");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/v1/{}/{}",
            self.base_url,
            urlencoding::encode(&query.artist),
            urlencoding::encode(&query.title)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::source_query(self.name(), e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(Error::source_query(self.name(), format!("HTTP {}", status)));
        }

        let body: LyricsOvhResponse = response
            .json()
            .map_err(|e| Error::source_query(self.name(), format!("Parse error: {}", e)))?;

        Ok(body
            .lyrics
            .filter(|text| !text.trim().is_empty())
            .map(|text| LyricsCandidate {
                source: self.name().to_string(),
                description: format!("{} - {}", query.artist, query.title),
                text,
                synced: false,
            })
            .into_iter()
            .collect())
    }
}
