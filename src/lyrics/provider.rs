//! Trait definition and types for online lyrics sources.

use crate::error::Result;
use crate::record::MediaRecord;

/// What to look lyrics up by. Fields may be empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LyricsQuery {
    pub title: String,
    pub artist: String,
}

impl LyricsQuery {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    pub fn from_record(record: &MediaRecord) -> Self {
        Self {
            title: record.title.trim().to_string(),
            artist: record.artist.trim().to_string(),
        }
    }
}

/// One lyrics text offered by a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsCandidate {
    /// Name of the source that returned it (e.g. "lrclib").
    pub source: String,
    /// What the source says the text belongs to, e.g. "Artist - Title".
    pub description: String,
    pub text: String,
    /// Whether `text` carries LRC timestamps.
    pub synced: bool,
}

impl LyricsCandidate {
    /// Label shown in the selection list.
    pub fn label(&self) -> String {
        let mut label = format!("[{}]", self.source);
        if !self.description.is_empty() {
            label.push(' ');
            label.push_str(&self.description);
        }
        if self.synced {
            label.push_str(" (synced)");
        }
        label
    }
}

/// A single online lyrics service.
///
/// `Ok(vec![])` means the source answered but had nothing; errors are for
/// transport failures and unexpected responses.
pub trait LyricsSource {
    /// Short, lowercase identifier (e.g. `"lrclib"`).
    fn name(&self) -> &'static str;

    fn search(&self, query: &LyricsQuery) -> Result<Vec<LyricsCandidate>>;
}
