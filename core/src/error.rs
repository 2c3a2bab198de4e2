// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Errors raised while reading a clock time token such as `09:30`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The token does not consist of exactly two `:`-separated parts.
    #[error("Invalid time format: '{0}'")]
    Format(String),

    /// One of the parts is not an integer.
    #[error("Invalid time numbers: '{0}'")]
    Numbers(String),

    /// Hour or minute outside the clock range.
    #[error("Hour must be in 0..23 and minutes in 0..59, got: '{0}'")]
    OutOfRange(String),
}

/// Errors raised while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The home directory could not be determined for `~` expansion.
    #[error("User-specific home directory not found")]
    HomeDirNotFound,

    /// The user config directory could not be determined.
    #[error("User-specific config directory not found")]
    ConfigDirNotFound,

    /// A path is not valid unicode and cannot be expanded.
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
}
