// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value formatting for iCalendar values.
//!
//! This module provides functions to format the iCalendar value types
//! used by the writer, as defined in RFC 5545 Section 3.3.

use std::io::{self, Write};

use jiff::Timestamp;
use jiff::civil::{Date, DateTime, Weekday};
use jiff::tz::Offset;

use crate::component::YearlyRule;
use crate::formatter::Formatter;
use crate::keyword::{KW_RRULE_BYDAY, KW_RRULE_BYMONTH, KW_RRULE_FREQ, KW_RRULE_FREQ_YEARLY};

/// Format a date value as `YYYYMMDD`.
pub fn write_date<W: Write>(f: &mut Formatter<W>, date: Date) -> io::Result<()> {
    write!(f, "{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Format a local date-time value as `YYYYMMDDTHHMMSS`.
pub fn write_date_time<W: Write>(f: &mut Formatter<W>, datetime: DateTime) -> io::Result<()> {
    write_date(f, datetime.date())?;
    write!(
        f,
        "T{:02}{:02}{:02}",
        datetime.hour(),
        datetime.minute(),
        datetime.second()
    )
}

/// Format a UTC date-time value as `YYYYMMDDTHHMMSSZ`.
pub fn write_utc_date_time<W: Write>(f: &mut Formatter<W>, timestamp: Timestamp) -> io::Result<()> {
    write_date_time(f, timestamp.to_zoned(jiff::tz::TimeZone::UTC).datetime())?;
    write!(f, "Z")
}

/// Format a UTC offset value as `+HHMM` (or `+HHMMSS` when seconds are present).
pub fn write_utc_offset<W: Write>(f: &mut Formatter<W>, offset: Offset) -> io::Result<()> {
    let total = offset.seconds();
    let sign = if total < 0 { "-" } else { "+" };
    let total = total.unsigned_abs();
    let (hour, minute, second) = (total / 3600, (total % 3600) / 60, total % 60);
    write!(f, "{sign}{hour:02}{minute:02}")?;
    if second != 0 {
        write!(f, "{second:02}")?;
    }
    Ok(())
}

/// Format a yearly recurrence rule, e.g. `FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU`.
pub fn write_yearly_rule<W: Write>(f: &mut Formatter<W>, rule: YearlyRule) -> io::Result<()> {
    write!(
        f,
        "{KW_RRULE_FREQ}={KW_RRULE_FREQ_YEARLY};{KW_RRULE_BYMONTH}={};{KW_RRULE_BYDAY}={}{}",
        rule.month,
        rule.week,
        weekday_code(rule.weekday)
    )
}

const fn weekday_code(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "MO",
        Weekday::Tuesday => "TU",
        Weekday::Wednesday => "WE",
        Weekday::Thursday => "TH",
        Weekday::Friday => "FR",
        Weekday::Saturday => "SA",
        Weekday::Sunday => "SU",
    }
}

/// Escape a TEXT value (RFC 5545 Section 3.3.11).
///
/// Backslash, semicolon, comma and newline are escaped; carriage returns are dropped.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}
