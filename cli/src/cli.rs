// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use plaincal_core::APP_NAME;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::cmd_convert::CmdConvert;
use crate::config::parse_config;

/// Run the plaincal command-line interface.
pub async fn run() -> ExitCode {
    init_tracing();
    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr at WARN level unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The conversion to run
    pub command: CmdConvert,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Turn a plaintext event list into an iCalendar file.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $PLAINCAL_CONFIG, then to \
$XDG_CONFIG_HOME/plaincal/config.toml on Linux and MacOS, %LOCALAPPDATA%/plaincal/config.toml \
on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .args(CmdConvert::args())
    }

    /// Parse the command-line arguments
    ///
    /// # Errors
    /// Never fails for now, invalid arguments exit through clap.
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    ///
    /// # Errors
    /// If the arguments are invalid.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    ///
    /// # Errors
    /// Never fails for now, kept fallible like the parsers.
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        let command = CmdConvert::from(&matches);
        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Load the configuration and run the conversion
    ///
    /// # Errors
    /// If the configuration cannot be loaded or the conversion fails.
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(self.config).await?;
        self.command.run(config).await
    }
}
