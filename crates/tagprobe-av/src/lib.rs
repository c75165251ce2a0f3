//! # tagprobe-av
//!
//! Thin, blocking wrappers around the ffmpeg command-line tools.
//!
//! This crate provides functionality for:
//! - Probing audio files with `ffprobe` and returning its raw JSON structure
//! - Rewriting a single container-level tag with `ffmpeg` (stream copy), swapping
//!   the result in place only when the tool succeeds
//! - Detecting whether the external tools are installed
//!
//! Everything above the process boundary talks to [`MediaBackend`], so callers
//! can substitute a fake in tests.
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use tagprobe_av::probe;
//!
//! let output = probe("/path/to/song.flac")?;
//! if let Some(stream) = output.first_audio_stream() {
//!     println!("Codec: {:?}", stream.codec_name);
//! }
//! # Ok::<(), tagprobe_av::Error>(())
//! ```

mod backend;
mod embed;
mod error;
pub mod probe;
pub mod tools;
pub mod workspace;

// Re-exports
pub use backend::{FfmpegCli, MediaBackend};
pub use embed::{embed_tag, LYRICS_TAG};
pub use error::{Error, Result};
pub use probe::{ProbeFormat, ProbeOutput, ProbeStream};
pub use tools::{check_program, require_tool, ToolInfo};
pub use workspace::Workspace;

/// Probe a media file with the `ffprobe` found on `PATH`.
///
/// # Example
///
/// ```no_run
/// use tagprobe_av::probe;
///
/// let output = probe("/path/to/song.mp3")?;
/// println!("Duration: {:?}", output.format.duration);
/// # Ok::<(), tagprobe_av::Error>(())
/// ```
pub fn probe<P: AsRef<std::path::Path>>(path: P) -> Result<ProbeOutput> {
    probe::probe_with_ffprobe(path.as_ref())
}
