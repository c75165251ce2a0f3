//! Display formatting for numeric probe fields.
//!
//! ffprobe reports numbers as strings. Anything that does not parse renders
//! as an empty string instead of failing the whole record.

use std::path::Path;

/// Seconds as `MM.SS`, fraction discarded. Minutes do not roll over into hours.
pub fn format_duration(seconds: Option<&str>) -> String {
    let Some(secs) = seconds.and_then(|s| s.trim().parse::<f64>().ok()) else {
        return String::new();
    };
    if !secs.is_finite() || secs < 0.0 {
        return String::new();
    }

    let total = secs.trunc() as u64;
    format!("{:02}.{:02}", total / 60, total % 60)
}

/// Bits per second as whole kilobits, e.g. `320 kbps`.
pub fn format_bit_rate(bits_per_sec: Option<u64>) -> String {
    match bits_per_sec {
        Some(bps) => format!("{} kbps", bps / 1000),
        None => String::new(),
    }
}

/// Parse a bit rate string. Decimal values are truncated.
pub fn parse_bit_rate(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim();
    raw.parse::<u64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.trunc() as u64)
    })
}

pub fn format_sample_rate(raw: Option<&str>) -> String {
    match raw.map(str::trim).and_then(|s| s.parse::<u32>().ok()) {
        Some(hz) => format!("{} Hz", hz),
        None => String::new(),
    }
}

/// Lower-cased extension without the dot, e.g. `song.M4A` gives `m4a`.
pub fn format_name_from_path(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
