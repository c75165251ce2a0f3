//! Concrete lyrics source implementations.
//!
//! Each submodule wraps a single external API and implements the
//! [`LyricsSource`](super::LyricsSource) trait.

pub mod lrclib;
pub mod lyrics_ovh;

pub use lrclib::LrclibSource;
pub use lyrics_ovh::LyricsOvhSource;
