//! Locating ffprobe/ffmpeg and reporting whether they run.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Status of one external program.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name, e.g. "ffprobe".
    pub name: String,
    /// Whether `<program> -version` ran successfully.
    pub available: bool,
    /// Version number from the banner, e.g. "6.1.1".
    pub version: Option<String>,
    /// Resolved executable path.
    pub path: Option<PathBuf>,
}

/// Run `program -version` and report it under `name`.
///
/// `program` may be a bare name (looked up on `PATH`) or a path.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use tagprobe_av::check_program;
///
/// let info = check_program("ffprobe", Path::new("ffprobe"));
/// if info.available {
///     println!("ffprobe version: {:?}", info.version);
/// }
/// ```
pub fn check_program(name: &str, program: &Path) -> ToolInfo {
    let unavailable = || ToolInfo {
        name: name.to_string(),
        available: false,
        version: None,
        path: None,
    };

    let output = match Command::new(program).arg("-version").output() {
        Ok(output) if output.status.success() => output,
        _ => return unavailable(),
    };

    let banner = String::from_utf8_lossy(&output.stdout);
    let version = banner.lines().next().and_then(parse_version_banner);

    let path = if program.components().count() > 1 {
        Some(program.to_path_buf())
    } else {
        which::which(program).ok()
    };

    ToolInfo {
        name: name.to_string(),
        available: true,
        version,
        path,
    }
}

/// `"ffprobe version 6.1.1-3ubuntu5 Copyright (c) ..."` gives `"6.1.1-3ubuntu5"`.
fn parse_version_banner(line: &str) -> Option<String> {
    let mut words = line.split_whitespace();
    words.find(|w| *w == "version")?;
    words.next().map(str::to_string)
}

/// Require that a tool is available, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
///
/// Falls back to the bare name when neither resolves, so the spawn itself
/// reports [`Error::ToolNotFound`] at the point of use.
pub fn resolve_tool_path(name: &str, config_path: Option<&Path>) -> PathBuf {
    if let Some(path) = config_path {
        if path.exists() {
            return path.to_path_buf();
        }
        #[cfg(feature = "tracing")]
        tracing::warn!("Configured {} path {:?} does not exist", name, path);
    }

    require_tool(name).unwrap_or_else(|_| PathBuf::from(name))
}
