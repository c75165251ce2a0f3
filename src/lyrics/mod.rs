//! Lyrics handling: pulling embedded lyrics out to sidecar files, and
//! importing lyrics from online sources into the audio file.
//!
//! # Module layout
//!
//! - [`provider`] -- The [`LyricsSource`] trait and shared query/candidate types.
//! - [`providers`] -- Concrete sources (LRCLIB, lyrics.ovh).
//! - [`registry`] -- Ordered source list with per-source failure isolation.
//! - [`import`] -- The interactive search, select and embed flow.

pub mod import;
pub mod provider;
pub mod providers;
pub mod registry;

pub use import::{ImportOutcome, ImportSession};
pub use provider::{LyricsCandidate, LyricsQuery, LyricsSource};
pub use registry::SourceRegistry;

use std::path::{Path, PathBuf};

use tagprobe_av::MediaBackend;

use crate::config::OutputConfig;
use crate::error::{Error, Result};
use crate::record::embedded_lyrics;

/// Where sidecar lyrics files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidecar {
    pub dir: PathBuf,
    /// Extension without the dot.
    pub extension: String,
}

impl Default for Sidecar {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

impl From<&OutputConfig> for Sidecar {
    fn from(config: &OutputConfig) -> Self {
        Self {
            dir: config.lyrics_dir.clone(),
            extension: config.lyrics_extension.clone(),
        }
    }
}

impl Sidecar {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    /// `<dir>/<audio stem>.<extension>`
    pub fn path_for(&self, audio: &Path) -> PathBuf {
        let stem = audio
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "lyrics".to_string());
        self.dir.join(format!("{}.{}", stem, self.extension))
    }

    /// Write `text` verbatim, creating the directory if needed.
    pub fn save(&self, audio: &Path, text: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(|e| Error::write(&self.dir, e))?;

        let path = self.path_for(audio);
        std::fs::write(&path, text).map_err(|e| Error::write(&path, e))?;

        tracing::info!("Saved lyrics to {:?}", path);
        Ok(path)
    }
}

/// Result of [`extract`].
#[derive(Debug)]
pub enum ExtractOutcome {
    /// The file carries no lyrics tag.
    NoLyrics,
    /// Lyrics were found; the sidecar write may still have failed.
    Found { sidecar: Result<PathBuf> },
}

/// Copy the embedded lyrics tag of `path` into a sidecar file.
pub fn extract(backend: &dyn MediaBackend, path: &Path, sidecar: &Sidecar) -> Result<ExtractOutcome> {
    let probe = backend.probe(path).map_err(Error::from_probe)?;

    match embedded_lyrics(&probe) {
        Some(text) => Ok(ExtractOutcome::Found {
            sidecar: sidecar.save(path, &text),
        }),
        None => Ok(ExtractOutcome::NoLyrics),
    }
}
