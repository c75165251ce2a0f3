use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::lyrics::providers::{lrclib::LRCLIB_BASE_URL, lyrics_ovh::LYRICS_OVH_BASE_URL};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub lyrics: LyricsConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,

    #[serde(default)]
    pub ffprobe_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory for sidecar lyrics files, relative to the working directory
    #[serde(default = "default_lyrics_dir")]
    pub lyrics_dir: PathBuf,

    /// Extension of sidecar lyrics files, without the dot
    #[serde(default = "default_lyrics_extension")]
    pub lyrics_extension: String,
}

fn default_lyrics_dir() -> PathBuf {
    PathBuf::from("result")
}

fn default_lyrics_extension() -> String {
    "lrc".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            lyrics_dir: default_lyrics_dir(),
            lyrics_extension: default_lyrics_extension(),
        }
    }
}

/// Online lyrics sources, queried in the order listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Lrclib,
    LyricsOvh,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LyricsConfig {
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceKind>,

    /// Per-request HTTP timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Check that the network is reachable before an import
    #[serde(default = "default_true")]
    pub check_connectivity: bool,

    /// host:port used for the connectivity check
    #[serde(default = "default_connectivity_host")]
    pub connectivity_host: String,

    /// Display columns shown for each candidate in the selection list
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,

    /// Candidates kept from a single source
    #[serde(default = "default_max_candidates")]
    pub max_candidates_per_source: usize,

    #[serde(default = "default_lrclib_url")]
    pub lrclib_url: String,

    #[serde(default = "default_lyrics_ovh_url")]
    pub lyrics_ovh_url: String,
}

fn default_sources() -> Vec<SourceKind> {
    vec![SourceKind::Lrclib, SourceKind::LyricsOvh]
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_user_agent() -> String {
    format!("tagprobe/{}", env!("CARGO_PKG_VERSION"))
}
fn default_true() -> bool {
    true
}
fn default_connectivity_host() -> String {
    "lrclib.net:443".to_string()
}
fn default_preview_width() -> usize {
    80
}
fn default_max_candidates() -> usize {
    5
}
fn default_lrclib_url() -> String {
    LRCLIB_BASE_URL.to_string()
}
fn default_lyrics_ovh_url() -> String {
    LYRICS_OVH_BASE_URL.to_string()
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            check_connectivity: default_true(),
            connectivity_host: default_connectivity_host(),
            preview_width: default_preview_width(),
            max_candidates_per_source: default_max_candidates(),
            lrclib_url: default_lrclib_url(),
            lyrics_ovh_url: default_lyrics_ovh_url(),
        }
    }
}
