// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property formatting for iCalendar properties.
//!
//! Every function writes one complete content line, including the CRLF.

use std::io::{self, Write};

use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::Offset;

use crate::component::{DateOrDateTime, XProperty, YearlyRule};
use crate::formatter::Formatter;
use crate::formatter::value::{
    escape_text, write_date, write_date_time, write_utc_date_time, write_utc_offset,
    write_yearly_rule,
};
use crate::keyword::{KW_DATE, KW_RRULE, KW_TZID, KW_VALUE};

/// Write a property whose value needs no escaping (`PRODID`, `UID`, `URL`, ...).
pub fn write_prop_raw<W: Write>(f: &mut Formatter<W>, name: &str, value: &str) -> io::Result<()> {
    write!(f, "{name}:{value}")?;
    f.writeln()
}

/// Write a TEXT property, escaping the value.
pub fn write_prop_text<W: Write>(f: &mut Formatter<W>, name: &str, text: &str) -> io::Result<()> {
    write!(f, "{name}:{}", escape_text(text))?;
    f.writeln()
}

/// Write a non-standard property.
pub fn write_prop_xname<W: Write>(f: &mut Formatter<W>, prop: &XProperty) -> io::Result<()> {
    write_prop_raw(f, &prop.name, &prop.value)
}

/// Write `DTSTART`/`DTEND` style properties.
pub fn write_prop_date_or_datetime<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    value: &DateOrDateTime,
) -> io::Result<()> {
    match value {
        DateOrDateTime::Date(date) => {
            write!(f, "{name};{KW_VALUE}={KW_DATE}:")?;
            write_date(f, *date)?;
        }
        DateOrDateTime::Local { datetime, tzid } => {
            write!(f, "{name};{KW_TZID}={tzid}:")?;
            write_date_time(f, *datetime)?;
        }
    }
    f.writeln()
}

/// Write a floating date-time property, as used by timezone observances.
pub fn write_prop_floating<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    datetime: DateTime,
) -> io::Result<()> {
    write!(f, "{name}:")?;
    write_date_time(f, datetime)?;
    f.writeln()
}

/// Write a UTC date-time property such as `DTSTAMP`.
pub fn write_prop_utc<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    timestamp: Timestamp,
) -> io::Result<()> {
    write!(f, "{name}:")?;
    write_utc_date_time(f, timestamp)?;
    f.writeln()
}

/// Write `TZOFFSETFROM`/`TZOFFSETTO`.
pub fn write_prop_utc_offset<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    offset: Offset,
) -> io::Result<()> {
    write!(f, "{name}:")?;
    write_utc_offset(f, offset)?;
    f.writeln()
}

/// Write an `RRULE` that repeats yearly.
pub fn write_prop_rrule<W: Write>(f: &mut Formatter<W>, rule: YearlyRule) -> io::Result<()> {
    write!(f, "{KW_RRULE}:")?;
    write_yearly_rule(f, rule)?;
    f.writeln()
}
