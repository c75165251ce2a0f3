//! Scratch space for rewriting a file in place.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Workspace for rewriting a single file.
///
/// The temporary directory is created next to the input so the final rename
/// stays on one filesystem and replaces the original atomically. The output
/// keeps the input's file name, which lets ffmpeg pick the same muxer.
///
/// Dropping the workspace without calling [`Workspace::finalize`] discards
/// the output and leaves the input untouched.
///
/// # Example
///
/// ```no_run
/// use tagprobe_av::Workspace;
///
/// let workspace = Workspace::new("/path/to/song.flac")?;
/// // Write the rewritten file to workspace.output(), then swap it in
/// workspace.finalize()?;
/// # Ok::<(), tagprobe_av::Error>(())
/// ```
pub struct Workspace {
    temp_dir: TempDir,
    input_path: PathBuf,
    output_path: PathBuf,
}

impl Workspace {
    /// Create a new workspace for rewriting `input`.
    pub fn new<P: AsRef<Path>>(input: P) -> Result<Self> {
        let input = input.as_ref();

        let file_name = input
            .file_name()
            .ok_or_else(|| Error::InvalidInput(format!("Invalid input file path: {:?}", input)))?;

        let parent = match input.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let temp_dir = tempfile::Builder::new()
            .prefix(".tagprobe-")
            .tempdir_in(parent)
            .map_err(|e| Error::Workspace(e.to_string()))?;

        let output_path = temp_dir.path().join(file_name);

        Ok(Self {
            temp_dir,
            input_path: input.to_path_buf(),
            output_path,
        })
    }

    /// Get the input file path.
    pub fn input(&self) -> &Path {
        &self.input_path
    }

    /// Get the output file path.
    pub fn output(&self) -> &Path {
        &self.output_path
    }

    /// Get the temp directory path.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Rename the output over the input.
    pub fn finalize(self) -> Result<PathBuf> {
        if !self.output_path.exists() {
            return Err(Error::Workspace(format!(
                "Output file does not exist: {:?}",
                self.output_path
            )));
        }

        std::fs::rename(&self.output_path, &self.input_path).map_err(|e| {
            Error::Workspace(format!("Failed to replace {:?}: {}", self.input_path, e))
        })?;

        Ok(self.input_path)
    }

    /// Clean up without finalizing (discard output).
    pub fn cleanup(self) {
        drop(self.temp_dir);
    }
}
