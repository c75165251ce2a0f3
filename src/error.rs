//! Error type for tagprobe operations.
//!
//! Tool-level failures from `tagprobe-av` are mapped onto these kinds at the
//! call site, because the same underlying failure (e.g. `ToolFailed`) means a
//! probe error in one place and a transcode error in another.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the info and lyrics commands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or malformed user input.
    #[error("{0}")]
    Argument(String),

    /// The audio file does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// ffprobe is not installed.
    #[error("ffprobe is not available. Please install it first.")]
    ProbeUnavailable,

    /// ffprobe ran but could not read the file.
    #[error("ffprobe error: {0}")]
    Probe(String),

    /// Writing lyrics into the file failed; the original is unchanged.
    #[error("Failed to embed lyrics: {0}")]
    Transcode(String),

    /// An output file could not be written.
    #[error("Failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },

    /// One lyrics source failed. Callers log these and move on.
    #[error("{source_name}: {message}")]
    SourceQuery {
        source_name: String,
        message: String,
    },

    /// No network connection for online lookups.
    #[error("No internet connection: {0}")]
    Connectivity(String),

    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Write {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create a source query error.
    pub fn source_query(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceQuery {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Interpret an error returned while probing a file.
    pub fn from_probe(err: tagprobe_av::Error) -> Self {
        use tagprobe_av::Error as AvError;

        match err {
            AvError::ToolNotFound { .. } => Self::ProbeUnavailable,
            AvError::FileNotFound { path } => Self::FileNotFound { path },
            AvError::ToolFailed { message, .. } => Self::Probe(message),
            other => Self::Probe(other.to_string()),
        }
    }

    /// Interpret an error returned while embedding a tag.
    pub fn from_embed(err: tagprobe_av::Error) -> Self {
        use tagprobe_av::Error as AvError;

        match err {
            AvError::FileNotFound { path } => Self::FileNotFound { path },
            AvError::ToolNotFound { tool } => Self::Transcode(format!("{} is not installed", tool)),
            AvError::ToolFailed { message, .. } => Self::Transcode(message),
            other => Self::Transcode(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_error_mapping() {
        assert!(matches!(
            Error::from_probe(tagprobe_av::Error::tool_not_found("ffprobe")),
            Error::ProbeUnavailable
        ));
        assert!(matches!(
            Error::from_probe(tagprobe_av::Error::tool_failed("ffprobe", "Invalid data")),
            Error::Probe(ref m) if m == "Invalid data"
        ));
        assert!(matches!(
            Error::from_probe(tagprobe_av::Error::file_not_found("/x.mp3")),
            Error::FileNotFound { .. }
        ));
    }

    #[test]
    fn test_embed_error_mapping() {
        assert!(matches!(
            Error::from_embed(tagprobe_av::Error::tool_failed("ffmpeg", "muxer error")),
            Error::Transcode(ref m) if m == "muxer error"
        ));
        assert!(matches!(
            Error::from_embed(tagprobe_av::Error::tool_not_found("ffmpeg")),
            Error::Transcode(_)
        ));
    }
}
