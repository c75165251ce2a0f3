//! Raw ffprobe output types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level structure printed by `ffprobe -show_format -show_streams`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeOutput {
    /// Container-level information.
    #[serde(default)]
    pub format: ProbeFormat,
    /// Every stream in the container, in file order.
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

/// The `format` section.
///
/// ffprobe reports most numbers as strings; they are kept that way so that
/// a malformed value surfaces at display time rather than failing the probe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeFormat {
    pub filename: Option<String>,
    /// Container identifier (e.g., "mov,mp4,m4a,3gp,3g2,mj2").
    pub format_name: Option<String>,
    pub format_long_name: Option<String>,
    /// Duration in seconds as a decimal string.
    pub duration: Option<String>,
    pub size: Option<String>,
    /// Overall bit rate in bits per second.
    pub bit_rate: Option<String>,
    /// Container-level tags, keyed by the spelling found in the file.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// One entry of the `streams` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeStream {
    #[serde(default)]
    pub index: u32,
    /// "audio", "video", "subtitle", "data" or "attachment".
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,
    pub codec_long_name: Option<String>,
    pub sample_rate: Option<String>,
    pub channels: Option<u32>,
    pub channel_layout: Option<String>,
    pub bit_rate: Option<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl ProbeStream {
    /// Whether this stream carries audio.
    pub fn is_audio(&self) -> bool {
        self.codec_type.as_deref() == Some("audio")
    }
}

impl ProbeOutput {
    /// The first audio stream in file order, if any.
    pub fn first_audio_stream(&self) -> Option<&ProbeStream> {
        self.streams.iter().find(|s| s.is_audio())
    }

    /// Container-level tags.
    pub fn format_tags(&self) -> &BTreeMap<String, String> {
        &self.format.tags
    }
}
