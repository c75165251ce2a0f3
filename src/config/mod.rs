mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./tagprobe.toml", "~/.config/tagprobe/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.lyrics.timeout_secs == 0 {
        anyhow::bail!("lyrics.timeout_secs must be greater than 0");
    }

    if config.lyrics.preview_width == 0 {
        anyhow::bail!("lyrics.preview_width must be greater than 0");
    }

    let ext = &config.output.lyrics_extension;
    if ext.is_empty() || ext.contains(&['/', '\\', '.'][..]) {
        anyhow::bail!("output.lyrics_extension must be a bare extension, got {:?}", ext);
    }

    for (name, path) in [
        ("ffprobe", &config.tools.ffprobe_path),
        ("ffmpeg", &config.tools.ffmpeg_path),
    ] {
        if let Some(path) = path {
            if !path.exists() {
                tracing::warn!("Configured {} path does not exist: {:?}", name, path);
            }
        }
    }

    Ok(())
}
