// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component formatting for iCalendar components.
//!
//! This module provides functions to format the components defined in
//! [`crate::component`] as described in RFC 5545 Section 3.6.

use std::io::{self, Write};

use crate::component::{Observance, ObservanceKind, VCalendar, VEvent, VTimeZone};
use crate::formatter::Formatter;
use crate::formatter::property::{
    write_prop_date_or_datetime, write_prop_floating, write_prop_raw, write_prop_rrule,
    write_prop_text, write_prop_utc, write_prop_utc_offset, write_prop_xname,
};
use crate::keyword::{
    KW_BEGIN, KW_CALSCALE, KW_DAYLIGHT, KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP, KW_DTSTART, KW_END,
    KW_METHOD, KW_PRODID, KW_STANDARD, KW_SUMMARY, KW_TZID, KW_TZNAME, KW_TZOFFSETFROM,
    KW_TZOFFSETTO, KW_UID, KW_URL, KW_VCALENDAR, KW_VERSION, KW_VERSION_2_0, KW_VEVENT,
    KW_VTIMEZONE,
};

/// Format a `VCalendar` component.
pub fn write_vcalendar<W: Write>(f: &mut Formatter<W>, calendar: &VCalendar) -> io::Result<()> {
    with_block(f, KW_VCALENDAR, |f| {
        // Required properties
        write_prop_raw(f, KW_PRODID, &calendar.prod_id)?;
        write_prop_raw(f, KW_VERSION, KW_VERSION_2_0)?;

        // Optional properties
        if let Some(calscale) = &calendar.calscale {
            write_prop_raw(f, KW_CALSCALE, calscale)?;
        }
        if let Some(method) = &calendar.method {
            write_prop_raw(f, KW_METHOD, method)?;
        }

        // X-properties
        for prop in &calendar.x_properties {
            write_prop_xname(f, prop)?;
        }

        // Components
        for tz in &calendar.timezones {
            write_vtimezone(f, tz)?;
        }
        for event in &calendar.events {
            write_vevent(f, event)?;
        }

        Ok(())
    })
}

fn write_vtimezone<W: Write>(f: &mut Formatter<W>, tz: &VTimeZone) -> io::Result<()> {
    with_block(f, KW_VTIMEZONE, |f| {
        write_prop_text(f, KW_TZID, &tz.tzid)?;
        for prop in &tz.x_properties {
            write_prop_xname(f, prop)?;
        }
        for observance in &tz.observances {
            write_observance(f, observance)?;
        }
        Ok(())
    })
}

fn write_observance<W: Write>(f: &mut Formatter<W>, observance: &Observance) -> io::Result<()> {
    let name = match observance.kind {
        ObservanceKind::Standard => KW_STANDARD,
        ObservanceKind::Daylight => KW_DAYLIGHT,
    };
    with_block(f, name, |f| {
        write_prop_utc_offset(f, KW_TZOFFSETFROM, observance.offset_from)?;
        write_prop_utc_offset(f, KW_TZOFFSETTO, observance.offset_to)?;
        write_prop_text(f, KW_TZNAME, &observance.name)?;
        write_prop_floating(f, KW_DTSTART, observance.dtstart)?;
        write_prop_rrule(f, observance.rule)
    })
}

fn write_vevent<W: Write>(f: &mut Formatter<W>, event: &VEvent) -> io::Result<()> {
    with_block(f, KW_VEVENT, |f| {
        write_prop_raw(f, KW_UID, &event.uid)?;
        write_prop_utc(f, KW_DTSTAMP, event.dtstamp)?;
        write_prop_date_or_datetime(f, KW_DTSTART, &event.start)?;
        write_prop_date_or_datetime(f, KW_DTEND, &event.end)?;
        write_prop_text(f, KW_SUMMARY, &event.summary)?;
        if let Some(description) = &event.description {
            write_prop_text(f, KW_DESCRIPTION, description)?;
        }
        if let Some(url) = &event.url {
            write_prop_raw(f, KW_URL, url)?;
        }
        Ok(())
    })
}

fn with_block<W: Write, F: FnOnce(&mut Formatter<W>) -> io::Result<()>>(
    f: &mut Formatter<W>,
    name: &str,
    write_content: F,
) -> io::Result<()> {
    write!(f, "{KW_BEGIN}:{name}")?;
    f.writeln()?;

    write_content(f)?;

    write!(f, "{KW_END}:{name}")?;
    f.writeln()
}
