//! Container tag rewriting via the ffmpeg CLI.

use crate::{Error, Result, Workspace};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Tag key used when embedding lyrics.
pub const LYRICS_TAG: &str = "lyrics";

/// Rewrite `input` with `key=value` added to its container metadata.
///
/// All streams are copied without re-encoding. ffmpeg writes into a
/// [`Workspace`] next to the input; the result is renamed over the original
/// only after ffmpeg exits successfully. On failure the workspace is dropped
/// and the original file is left as it was.
pub fn embed_tag(ffmpeg: &Path, input: &Path, key: &str, value: &str) -> Result<PathBuf> {
    if !input.exists() {
        return Err(Error::file_not_found(input));
    }
    if key.is_empty() || key.contains('=') {
        return Err(Error::InvalidInput(format!("Invalid tag key: {:?}", key)));
    }

    let workspace = Workspace::new(input)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Embedding tag {:?} into {:?}", key, input);

    let output = Command::new(ffmpeg)
        .args(["-v", "error", "-y", "-i"])
        .arg(workspace.input())
        .args(["-map", "0", "-c", "copy", "-metadata"])
        .arg(format!("{}={}", key, value))
        .arg(workspace.output())
        .output()
        .map_err(|e| Error::from_spawn("ffmpeg", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        #[cfg(feature = "tracing")]
        tracing::warn!("ffmpeg exited with {}: {}", output.status, stderr);

        workspace.cleanup();
        let message = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            stderr
        };
        return Err(Error::tool_failed("ffmpeg", message));
    }

    workspace.finalize()
}
