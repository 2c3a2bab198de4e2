// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use jiff::Timestamp;
use jiff::civil::Date;
use plaincal_core::{
    CalendarOptions, CalendarWriter, Config, default_min_date, filter_from, group, parse,
};
use tokio::{fs, io::AsyncReadExt};

/// Output path used when neither `--out` nor the config names one.
pub const DEFAULT_OUTPUT: &str = "calendar.ics";

/// Where the event list is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input, given as `-`.
    Stdin,

    /// A file.
    File(PathBuf),
}

impl Input {
    async fn read_to_string(&self) -> Result<String, Box<dyn Error>> {
        match self {
            Input::Stdin => {
                let mut buf = String::new();
                tokio::io::stdin().read_to_string(&mut buf).await?;
                Ok(buf)
            }
            Input::File(path) => {
                if !fs::try_exists(path).await.unwrap_or(false) {
                    return Err(format!("Input file not found: {}", path.display()).into());
                }
                let text = fs::read_to_string(path)
                    .await
                    .map_err(|e| format!("Failed to read input file {}: {e}", path.display()))?;
                Ok(text)
            }
        }
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        match path.as_os_str() == "-" {
            true => Input::Stdin,
            false => Input::File(path),
        }
    }
}

/// Convert an event list into a calendar file, the default command.
#[derive(Debug, Clone)]
pub struct CmdConvert {
    /// Event list to read.
    pub input: Input,

    /// Events starting before this date are dropped, today when `None`.
    pub min_date: Option<Date>,

    /// Output path, overrides the config.
    pub out: Option<PathBuf>,
}

impl CmdConvert {
    /// Arguments of the command, attached to the top-level command.
    pub fn args() -> [Arg; 3] {
        [
            arg!(<INPUT> "Event list to convert, - for standard input")
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
            arg!(-m --"min-date" <DATE> "Skip events starting before this date (YYYY-MM-DD)")
                .long_help(
                    "\
Skip events starting before this date, given as YYYY-MM-DD. Defaults to today in Europe/Zurich.",
                )
                .required(false)
                .value_parser(parse_date),
            arg!(-o --out <PATH> "Path of the calendar file to write")
                .long_help(
                    "\
Path of the calendar file to write. Defaults to `output` in the config, or calendar.ics.",
                )
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        ]
    }

    /// Read the command from the top-level matches.
    pub fn from(matches: &ArgMatches) -> Self {
        let input = match matches.get_one::<PathBuf>("INPUT") {
            Some(path) => Input::from(path.clone()),
            None => unreachable!(),
        };

        Self {
            input,
            min_date: matches.get_one("min-date").copied(),
            out: matches.get_one("out").cloned(),
        }
    }

    /// Read the input, convert it and write the calendar file.
    ///
    /// # Errors
    /// If the input cannot be read or the output cannot be written.
    pub async fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting event list...");
        let text = self.input.read_to_string().await?;
        let (path, count) = self.write_calendar(&text, &config, Timestamp::now()).await?;
        println!("Wrote {} ({count} events)", path.display());
        Ok(())
    }

    /// Convert `text` and write the calendar file, returning its path and the
    /// number of events written.
    ///
    /// # Errors
    /// If the output cannot be written.
    pub async fn write_calendar(
        &self,
        text: &str,
        config: &Config,
        stamp: Timestamp,
    ) -> Result<(PathBuf, usize), Box<dyn Error>> {
        let events = group(parse(text.lines()));
        let min_date = self.min_date.unwrap_or_else(default_min_date);
        let events = filter_from(events, min_date);

        let writer = CalendarWriter::new(CalendarOptions::from(config));
        let ics = writer.write_to_string(&events, stamp)?;

        let path = self.output_path(config);
        fs::write(&path, ics)
            .await
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        Ok((path, events.len()))
    }

    fn output_path(&self, config: &Config) -> PathBuf {
        self.out
            .clone()
            .or_else(|| config.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

fn parse_date(s: &str) -> Result<Date, String> {
    Date::strptime("%Y-%m-%d", s).map_err(|_| format!("expected YYYY-MM-DD, got '{s}'"))
}
