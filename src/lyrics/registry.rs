//! Ordered collection of [`LyricsSource`]s.

use std::time::Duration;

use tracing::{debug, warn};

use super::provider::{LyricsCandidate, LyricsQuery, LyricsSource};
use super::providers::{LrclibSource, LyricsOvhSource};
use crate::config::{LyricsConfig, SourceKind};
use crate::error::{Error, Result};

/// Sources in query order.
///
/// Sources are queried one after another. A source that fails is logged and
/// skipped so the remaining sources still get a chance.
pub struct SourceRegistry {
    sources: Vec<Box<dyn LyricsSource>>,
    max_per_source: usize,
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            max_per_source: usize::MAX,
        }
    }

    /// Build the HTTP client and register the configured sources in order.
    pub fn from_config(config: &LyricsConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::source_query("http", e.to_string()))?;

        let mut registry = Self::new().with_max_per_source(config.max_candidates_per_source);
        for kind in &config.sources {
            match kind {
                SourceKind::Lrclib => registry.register(Box::new(LrclibSource::with_base_url(
                    client.clone(),
                    config.lrclib_url.clone(),
                ))),
                SourceKind::LyricsOvh => registry.register(Box::new(
                    LyricsOvhSource::with_base_url(client.clone(), config.lyrics_ovh_url.clone()),
                )),
            }
        }
        Ok(registry)
    }

    /// Keep at most `max` candidates from each source. Zero means unlimited.
    pub fn with_max_per_source(mut self, max: usize) -> Self {
        self.max_per_source = if max == 0 { usize::MAX } else { max };
        self
    }

    pub fn register(&mut self, source: Box<dyn LyricsSource>) {
        self.sources.push(source);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Query every source in order and concatenate their candidates.
    pub fn search_all(&self, query: &LyricsQuery) -> Vec<LyricsCandidate> {
        let mut candidates = Vec::new();

        for source in &self.sources {
            match source.search(query) {
                Ok(found) => {
                    debug!("{} returned {} candidates", source.name(), found.len());
                    candidates.extend(found.into_iter().take(self.max_per_source));
                }
                Err(e) => {
                    warn!("Lyrics source {} failed: {}", source.name(), e);
                }
            }
        }

        candidates
    }
}
