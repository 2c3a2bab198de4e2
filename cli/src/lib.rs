// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of plaincal.

mod cli;
mod cmd_convert;
mod config;

pub use crate::cli::{Cli, run};
pub use crate::cmd_convert::{CmdConvert, Input};
pub use crate::config::parse_config;
