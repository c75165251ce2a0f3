//! # tagprobe
//!
//! Reads audio metadata through `ffprobe`, prints it as aligned tables or
//! JSON, and manages lyrics: extracting embedded lyrics to `.lrc` sidecar
//! files, or importing them from online sources and embedding them with
//! `ffmpeg`.
//!
//! The external tools are reached only through
//! [`tagprobe_av::MediaBackend`], so everything here can run against a fake.

pub mod config;
pub mod connectivity;
pub mod error;
pub mod lyrics;
pub mod present;
pub mod record;

pub use error::{Error, Result};
pub use record::MediaRecord;
