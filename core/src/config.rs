// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::ConfigError;

/// The name of the application, used for config directories and as default namespace.
pub const APP_NAME: &str = "plaincal";

/// Default product identifier written as `PRODID`.
pub const DEFAULT_PRODUCT_ID: &str = "-//plaincal//plaincal//EN";

/// Configuration of the conversion, the `[core]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Namespace token appended to every event UID.
    pub owner: String,

    /// Display name of the calendar (`X-WR-CALNAME`).
    pub calendar_name: String,

    /// Product identifier (`PRODID`).
    pub product_id: String,

    /// Default output path when none is given on the command line.
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: APP_NAME.to_string(),
            calendar_name: APP_NAME.to_string(),
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            output: None,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    ///
    /// # Errors
    /// If the output path refers to the home or config directory and it cannot be found.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        if let Some(output) = &self.output {
            self.output = Some(expand_path(output)?);
        }

        // An empty owner would produce UIDs ending in `-`
        if self.owner.trim().is_empty() {
            tracing::warn!("empty owner in config, using {APP_NAME}");
            self.owner = APP_NAME.to_string();
        }

        Ok(())
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path_str = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_owned()))?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path_str.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path_str.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.to_owned())
}

fn get_home_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)
}

fn get_config_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or(ConfigError::ConfigDirNotFound)
}
