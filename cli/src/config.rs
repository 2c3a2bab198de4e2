// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use plaincal_core::{APP_NAME, Config};

const PLAINCAL_CONFIG_ENV: &str = "PLAINCAL_CONFIG";

/// Load the configuration.
///
/// The file is taken from `path`, then from `$PLAINCAL_CONFIG`, then from the
/// user config directory. Only a missing file in the config directory falls
/// back to the defaults.
///
/// # Errors
/// If a given file cannot be read, or any file cannot be parsed.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(PLAINCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !fs::try_exists(&config).await.unwrap_or(false) {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(Config::default());
        }
        config
    };

    let mut config = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?
        .core;

    config.normalize()?;
    Ok(config)
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
