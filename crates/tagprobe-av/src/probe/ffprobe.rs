//! FFprobe-based media probing.

use super::types::ProbeOutput;
use crate::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Probe a media file using the `ffprobe` found on `PATH`.
pub fn probe_with_ffprobe(path: &Path) -> Result<ProbeOutput> {
    probe_with_program(Path::new("ffprobe"), path)
}

/// Probe a media file using a specific ffprobe executable.
///
/// A single attempt is made. A missing executable maps to
/// [`Error::ToolNotFound`]; a non-zero exit maps to [`Error::ToolFailed`]
/// carrying the tool's stderr.
pub fn probe_with_program(program: &Path, path: &Path) -> Result<ProbeOutput> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Running {:?} on {:?}", program, path);

    let output = Command::new(program)
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .map_err(|e| Error::from_spawn("ffprobe", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed("ffprobe", stderr.trim().to_string()));
    }

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error("ffprobe", format!("Invalid UTF-8: {}", e)))?;

    parse_ffprobe_json(&json_str)
}

/// Parse the JSON document printed by ffprobe.
pub fn parse_ffprobe_json(json: &str) -> Result<ProbeOutput> {
    serde_json::from_str(json).map_err(|e| Error::parse_error("ffprobe", e.to_string()))
}
