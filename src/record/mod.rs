//! Normalized view of a probed audio file.
//!
//! [`MediaRecord::from_probe`] turns raw ffprobe output into the fixed set of
//! fields shown to the user. Missing or malformed values become empty fields;
//! normalization itself never fails.

pub mod aliases;
pub mod format;

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tagprobe_av::ProbeOutput;

use aliases::{ALBUM, ARTIST, LYRICS, TITLE};
use format::{format_bit_rate, format_duration, format_name_from_path, format_sample_rate, parse_bit_rate};

/// Canonical metadata for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaRecord {
    pub file: String,
    /// Derived from the file extension, not the container label.
    pub format: String,
    /// Seconds, as reported by ffprobe.
    pub duration: Option<String>,
    /// Bits per second; the audio stream's rate when known, else the container's.
    pub bit_rate: Option<u64>,
    pub codec: String,
    pub sample_rate: Option<String>,
    pub channels: Option<u32>,
    pub channel_layout: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub has_lyrics: bool,
    /// Container tags not shown elsewhere in the record.
    pub tags: BTreeMap<String, String>,
}

impl MediaRecord {
    /// Build a record from probe output for `path`.
    pub fn from_probe(path: &Path, probe: &ProbeOutput) -> Self {
        let format_tags = probe.format_tags();

        let mut record = MediaRecord {
            file: path.display().to_string(),
            format: format_name_from_path(path),
            duration: probe.format.duration.clone(),
            bit_rate: parse_bit_rate(probe.format.bit_rate.as_deref()),
            title: TITLE.value_or_empty(format_tags),
            artist: ARTIST.value_or_empty(format_tags),
            album: ALBUM.value_or_empty(format_tags),
            has_lyrics: LYRICS.resolve(format_tags).is_some(),
            tags: generic_tags(format_tags),
            ..Default::default()
        };

        if let Some(stream) = probe.first_audio_stream() {
            record.codec = stream.codec_name.clone().unwrap_or_default();
            record.sample_rate = stream.sample_rate.clone();
            record.channels = stream.channels;
            record.channel_layout = stream.channel_layout.clone().unwrap_or_default();
            if let Some(bps) = parse_bit_rate(stream.bit_rate.as_deref()) {
                record.bit_rate = Some(bps);
            }
        } else {
            tracing::debug!("No audio stream in {:?}", path);
        }

        record
    }

    /// Display rows in table order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("File", self.file.clone()),
            ("Format", self.format.clone()),
            ("Title", self.title.clone()),
            ("Artist", self.artist.clone()),
            ("Album", self.album.clone()),
            ("Duration", format_duration(self.duration.as_deref())),
            ("Bitrate", format_bit_rate(self.bit_rate)),
            ("Codec", self.codec.clone()),
            ("Sample Rate", format_sample_rate(self.sample_rate.as_deref())),
            (
                "Channels",
                self.channels.map(|c| c.to_string()).unwrap_or_default(),
            ),
            ("Channel Layout", self.channel_layout.clone()),
            ("Lyrics", if self.has_lyrics { "Yes" } else { "No" }.to_string()),
        ]
    }
}

/// Container tags minus every lyrics spelling and the keys that resolved
/// title, artist and album.
fn generic_tags(tags: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let shown: Vec<&str> = [TITLE, ARTIST, ALBUM]
        .iter()
        .filter_map(|group| group.resolve(tags).map(|(key, _)| key))
        .collect();

    tags.iter()
        .filter(|(key, _)| !LYRICS.contains_key(key) && !shown.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// The embedded lyrics text, if any alias carries a non-empty value.
pub fn embedded_lyrics(probe: &ProbeOutput) -> Option<String> {
    LYRICS
        .resolve(probe.format_tags())
        .map(|(_, text)| text)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
