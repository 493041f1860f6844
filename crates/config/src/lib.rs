pub mod schema;

pub use schema::{table_to_props, BarSettings, SbarConfig};

use sbar_core::{Result, SbarError};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `SbarConfig::default()` if
/// the file doesn't exist so a plugin script always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<SbarConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(SbarConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| SbarError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| SbarError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path: `<config_dir>/sbar.toml` when sketchybar
/// provided a config directory (`Event::config_dir`),
/// `~/.config/sketchybar/sbar.toml` otherwise.
///
/// The config directory comes in as a value rather than being read from the
/// environment here; the event snapshot is the only place the process
/// environment is captured.
pub fn default_path(config_dir: Option<&Path>) -> PathBuf {
    let base = match config_dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config").join("sketchybar")
        }
    };
    base.join("sbar.toml")
}
