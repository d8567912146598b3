use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// UI settings read from `config.toml` in the platform config directory
/// (e.g. `~/.config/cartui/config.toml`). Every field is optional in the
/// file; a missing file means defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout for the draw loop, in milliseconds.
    pub tick_rate_ms: u64,
    /// Capture mouse events (wheel scrolls the list).
    pub mouse: bool,
    /// Override for the log file location.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse: true,
            log_file: None,
        }
    }
}

impl Config {
    fn path() -> Option<PathBuf> {
        ProjectDirs::from("org", "cartui", "cartui")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}
