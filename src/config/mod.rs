// SPDX-License-Identifier: MPL-2.0
//! User preferences, loaded from and saved to a `settings.toml` file.
//!
//! Preferences are deliberately small: everything else in the app is
//! per-session component state. A malformed or missing file always falls
//! back to defaults so startup can never fail on preferences.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedReels";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether feed items start muted. The feed defaults to muted so
    /// autoplaying media never surprises the user with sound.
    #[serde(default)]
    pub start_muted: Option<bool>,
    /// Whether the focused item resumes playback automatically.
    #[serde(default)]
    pub autoplay: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_muted: Some(true),
            autoplay: Some(true),
        }
    }
}

impl Config {
    /// Effective mute default, resolving an absent field.
    #[must_use]
    pub fn start_muted(&self) -> bool {
        self.start_muted.unwrap_or(true)
    }

    /// Effective autoplay setting, resolving an absent field.
    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.autoplay.unwrap_or(true)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
