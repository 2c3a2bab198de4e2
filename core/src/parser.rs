// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Line parser: turns the lines of a plaintext event list into [`Record`]s.
//!
//! A line looks like
//!
//! ```text
//! 2025-11-03 09:00-24:00 night shift # bring coffee
//! 2025-06-01 vacation begin
//! 2025-01-10 rent 1200
//! ```
//!
//! Lines that do not start with a date are not events and are skipped without
//! a word. A line with a malformed time is reported as a [`LineDiagnostic`].

use std::fmt;
use std::sync::OnceLock;

use jiff::civil::{Date, Time};
use regex::Regex;

use crate::html::{extract_anchor, unescape};
use crate::{DayOffset, Record, TimeError, parse_clock_time};

const CODE_FENCE: &str = "```";

/// Result of parsing a whole list, with the lines that had to be dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    /// Recognized lines, in input order.
    pub records: Vec<Record>,

    /// Lines dropped because of an invalid time.
    pub diagnostics: Vec<LineDiagnostic>,
}

/// Which end of a time range a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBound {
    /// The first time of the line.
    Start,

    /// The time after the `-`.
    End,
}

impl fmt::Display for TimeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeBound::Start => write!(f, "start"),
            TimeBound::End => write!(f, "end"),
        }
    }
}

/// A dated line that was dropped because its time could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {bound} time on line {line_number}: {raw:?} -> {error}")]
pub struct LineDiagnostic {
    /// 1-based line number.
    pub line_number: usize,

    /// The line as read.
    pub raw: String,

    /// Start or end time.
    pub bound: TimeBound,

    /// What is wrong with the time.
    #[source]
    pub error: TimeError,
}

/// Parses lines into records, logging dropped lines at WARN level.
#[tracing::instrument(skip_all)]
pub fn parse<I>(lines: I) -> Vec<Record>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let parsed = parse_with_diagnostics(lines);
    for d in &parsed.diagnostics {
        tracing::warn!(
            line = d.line_number,
            raw = %d.raw,
            "invalid {} time: {}",
            d.bound,
            d.error
        );
    }
    tracing::debug!(count = parsed.records.len(), "lines parsed");
    parsed.records
}

/// Parses lines into records and returns the dropped lines as values.
pub fn parse_with_diagnostics<I>(lines: I) -> Parsed
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut parsed = Parsed::default();
    for (i, raw) in lines.into_iter().enumerate() {
        let raw = raw.as_ref();
        match parse_line(raw) {
            Ok(Some(record)) => parsed.records.push(record),
            Ok(None) => {}
            Err((bound, error)) => parsed.diagnostics.push(LineDiagnostic {
                line_number: i + 1,
                raw: raw.to_string(),
                bound,
                error,
            }),
        }
    }
    parsed
}

/// Parses one line. `Ok(None)` means the line is not an event.
fn parse_line(raw: &str) -> Result<Option<Record>, (TimeBound, TimeError)> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(CODE_FENCE) || line.ends_with(CODE_FENCE) {
        return Ok(None);
    }

    let Some(caps) = date_regex().captures(line) else {
        return Ok(None);
    };
    let (Some(date), Some(rest)) = (caps.get(1), caps.get(2)) else {
        return Ok(None);
    };
    let Ok(date) = date.as_str().parse::<Date>() else {
        tracing::debug!(date = date.as_str(), "not a calendar date, line skipped");
        return Ok(None);
    };
    let rest = rest.as_str().trim();

    // The comment is cut off first so that nothing inside it is interpreted
    let (main, comment) = match rest.split_once('#') {
        Some((main, comment)) => (main.trim(), Some(comment.trim())),
        None => (rest, None),
    };

    let (main, link) = extract_anchor(main);

    let mut times = TimeRange::default();
    let mut title: &str = &main;
    if let Some(caps) = time_regex().captures(&main) {
        title = caps.get(3).map_or("", |m| m.as_str()).trim();
        if let Some(start) = caps.get(1) {
            let (time, offset) =
                parse_clock_time(start.as_str()).map_err(|e| (TimeBound::Start, e))?;
            times.start = Some((time, offset));
        }
        if let Some(end) = caps.get(2) {
            let (time, offset) = parse_clock_time(end.as_str()).map_err(|e| (TimeBound::End, e))?;
            times.end = Some((time, offset));
        }
    }

    // A comment disables amount detection, even an empty one
    let mut amount = None;
    if comment.is_none()
        && let Some(caps) = amount_regex().captures(title)
        && let (Some(head), Some(digits)) = (caps.get(1), caps.get(2))
    {
        title = head.as_str();
        amount = Some(digits.as_str());
    }

    let (title, is_span_start, is_span_end) = strip_span_keyword(title);

    let note = build_note(comment, amount);
    let (start_time, start_day_offset) = times.start.unzip();
    let (end_time, end_day_offset) = times.end.unzip();
    Ok(Some(Record {
        date,
        start_time,
        start_day_offset: start_day_offset.unwrap_or_default(),
        end_time,
        end_day_offset: end_day_offset.unwrap_or_default(),
        title: unescape(title).trim().to_string(),
        link,
        note,
        is_span_start,
        is_span_end,
        consumed: false,
        raw: raw.to_string(),
    }))
}

#[derive(Debug, Default)]
struct TimeRange {
    start: Option<(Time, DayOffset)>,
    end: Option<(Time, DayOffset)>,
}

fn strip_span_keyword(title: &str) -> (&str, bool, bool) {
    if let Some(head) = strip_suffix_ignore_ascii_case(title, " begin") {
        (head.trim(), true, false)
    } else if let Some(head) = strip_suffix_ignore_ascii_case(title, " end") {
        (head.trim(), false, true)
    } else {
        (title, false, false)
    }
}

fn strip_suffix_ignore_ascii_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let (head, tail) = (s.get(..split)?, s.get(split..)?);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

fn build_note(comment: Option<&str>, amount: Option<&str>) -> Option<String> {
    let parts: Vec<String> = comment
        .filter(|c| !c.is_empty())
        .map(|c| unescape(c).into_owned())
        .into_iter()
        .chain(amount.map(|digits| format!("Amount: {digits}")))
        .collect();

    match parts.is_empty() {
        true => None,
        false => Some(parts.join("; ")),
    }
}

fn date_regex() -> &'static Regex {
    const RE: &str = r"^([0-9]{4}-[0-9]{2}-[0-9]{2})\s+(.*)$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(RE).unwrap())
}

fn time_regex() -> &'static Regex {
    const RE: &str = r"^([0-9]{1,2}:[0-9]{2})(?:-([0-9]{1,2}:[0-9]{2}))?\s+(.*)$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(RE).unwrap())
}

fn amount_regex() -> &'static Regex {
    const RE: &str = r"^(.*\S)\s+([0-9]{2,})\s*$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(RE).unwrap())
}
