//! Media file probing module.
//!
//! Runs `ffprobe` in JSON mode and hands back its format and stream sections
//! as typed, but otherwise untouched, values. Interpretation of the fields is
//! left to the caller.

mod ffprobe;
mod types;

pub use ffprobe::{parse_ffprobe_json, probe_with_ffprobe, probe_with_program};
pub use types::*;
