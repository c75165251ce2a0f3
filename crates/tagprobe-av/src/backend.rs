//! The capability seam between tag logic and the external tools.

use crate::embed::{embed_tag, LYRICS_TAG};
use crate::probe::{probe_with_program, ProbeOutput};
use crate::tools::{check_program, resolve_tool_path, ToolInfo};
use crate::Result;
use std::path::{Path, PathBuf};

/// Read and rewrite media metadata.
///
/// [`FfmpegCli`] is the production implementation. Anything that only needs
/// to inspect or tag files should accept `&dyn MediaBackend` so it can be
/// exercised without the tools installed.
pub trait MediaBackend {
    /// Inspect `path` and return the container and stream metadata.
    fn probe(&self, path: &Path) -> Result<ProbeOutput>;

    /// Store `lyrics` in the container metadata of `path`.
    ///
    /// Implementations must leave the file unmodified when they fail.
    fn embed_lyrics(&self, path: &Path, lyrics: &str) -> Result<()>;
}

/// [`MediaBackend`] backed by the `ffprobe` and `ffmpeg` executables.
#[derive(Debug, Clone)]
pub struct FfmpegCli {
    ffprobe: PathBuf,
    ffmpeg: PathBuf,
}

impl Default for FfmpegCli {
    fn default() -> Self {
        Self::new()
    }
}

impl FfmpegCli {
    /// Use the tools found on `PATH`.
    pub fn new() -> Self {
        Self::with_paths("ffprobe", "ffmpeg")
    }

    /// Use explicit executable paths.
    pub fn with_paths(ffprobe: impl Into<PathBuf>, ffmpeg: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe: ffprobe.into(),
            ffmpeg: ffmpeg.into(),
        }
    }

    /// Prefer configured paths that exist, then `PATH`.
    pub fn from_config(ffprobe: Option<&Path>, ffmpeg: Option<&Path>) -> Self {
        Self {
            ffprobe: resolve_tool_path("ffprobe", ffprobe),
            ffmpeg: resolve_tool_path("ffmpeg", ffmpeg),
        }
    }

    pub fn ffprobe_path(&self) -> &Path {
        &self.ffprobe
    }

    pub fn ffmpeg_path(&self) -> &Path {
        &self.ffmpeg
    }

    /// Status of the two programs this backend runs, ffprobe first.
    pub fn check_tools(&self) -> Vec<ToolInfo> {
        vec![
            check_program("ffprobe", &self.ffprobe),
            check_program("ffmpeg", &self.ffmpeg),
        ]
    }
}

impl MediaBackend for FfmpegCli {
    fn probe(&self, path: &Path) -> Result<ProbeOutput> {
        probe_with_program(&self.ffprobe, path)
    }

    fn embed_lyrics(&self, path: &Path, lyrics: &str) -> Result<()> {
        embed_tag(&self.ffmpeg, path, LYRICS_TAG, lyrics).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_missing_ffprobe_is_tool_not_found() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let backend = FfmpegCli::with_paths("nonexistent_tool_12345", "nonexistent_tool_12345");

        assert!(matches!(
            backend.probe(file.path()),
            Err(Error::ToolNotFound { .. })
        ));
    }

    #[test]
    fn test_check_tools_reports_missing() {
        let backend = FfmpegCli::with_paths("nonexistent_tool_12345", "nonexistent_tool_12345");
        let tools = backend.check_tools();

        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["ffprobe", "ffmpeg"]);
        assert!(tools.iter().all(|t| !t.available));
    }

    #[cfg(unix)]
    #[test]
    fn test_from_config_without_paths_uses_names_or_path_lookup() {
        let backend = FfmpegCli::from_config(None, None);
        assert!(backend.ffprobe_path().ends_with("ffprobe"));
        assert!(backend.ffmpeg_path().ends_with("ffmpeg"));
    }
}
