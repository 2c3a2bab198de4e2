// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Renders events as an iCalendar document.

use std::io::{self, Write};

use jiff::Timestamp;
use plaincal_ical::formatter::escape_text;
use plaincal_ical::{DateOrDateTime, FormatOptions, VCalendar, VEvent, XProperty};

use crate::{Config, Event, EventTime, TZID, slugify, vtimezone};

/// Header values of the rendered calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    /// `PRODID` of the document.
    pub product_id: String,

    /// Display name of the calendar.
    pub calendar_name: String,

    /// Namespace token appended to every UID.
    pub owner: String,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for CalendarOptions {
    fn from(config: &Config) -> Self {
        Self {
            product_id: config.product_id.clone(),
            calendar_name: config.calendar_name.clone(),
            owner: config.owner.clone(),
        }
    }
}

/// Writes events as a calendar with the fixed civil timezone.
#[derive(Debug, Clone)]
pub struct CalendarWriter {
    options: CalendarOptions,
}

impl CalendarWriter {
    /// Creates a writer folding lines at 75 octets.
    pub fn new(options: CalendarOptions) -> Self {
        Self { options }
    }

    /// Builds the calendar object, `stamp` becomes the `DTSTAMP` of every event.
    pub fn to_calendar(&self, events: &[Event], stamp: Timestamp) -> VCalendar {
        let mut calendar = VCalendar::new(self.options.product_id.clone());
        calendar.calscale = Some("GREGORIAN".to_string());
        calendar.method = Some("PUBLISH".to_string());
        calendar.x_properties = vec![
            XProperty::new("X-WR-CALNAME", escape_text(&self.options.calendar_name)),
            XProperty::new("X-WR-TIMEZONE", TZID),
        ];
        calendar.timezones = vec![vtimezone()];
        calendar.events = events
            .iter()
            .map(|e| to_vevent(e, &self.options.owner, stamp))
            .collect();
        calendar
    }

    /// Writes the calendar document.
    ///
    /// # Errors
    /// If writing to `w` fails.
    #[tracing::instrument(skip_all, fields(events = events.len()))]
    pub fn write(&self, events: &[Event], stamp: Timestamp, w: &mut impl Write) -> io::Result<()> {
        let calendar = self.to_calendar(events, stamp);
        FormatOptions::default().write(&calendar, w)
    }

    /// Writes the calendar document into a string.
    ///
    /// # Errors
    /// If formatting fails.
    pub fn write_to_string(&self, events: &[Event], stamp: Timestamp) -> io::Result<String> {
        let calendar = self.to_calendar(events, stamp);
        FormatOptions::default().write_to_string(&calendar)
    }
}

/// Renders events with the given options into a string.
///
/// # Errors
/// If formatting fails.
pub fn render_to_string(
    events: &[Event],
    options: CalendarOptions,
    stamp: Timestamp,
) -> io::Result<String> {
    CalendarWriter::new(options).write_to_string(events, stamp)
}

/// Deterministic UID: `<slug>-<start>-<owner>`.
pub fn event_uid(event: &Event, owner: &str) -> String {
    let start = match &event.time {
        EventTime::Timed { start, .. } => start.strftime("%Y%m%dT%H%M%S").to_string(),
        EventTime::AllDay { start, .. } | EventTime::MultiDay { start, .. } => {
            start.strftime("%Y%m%d").to_string()
        }
    };
    format!("{}-{start}-{owner}", slugify(&event.title))
}

fn to_vevent(event: &Event, owner: &str, stamp: Timestamp) -> VEvent {
    let (start, end) = match &event.time {
        EventTime::Timed { start, end } => (
            DateOrDateTime::Local {
                datetime: start.datetime(),
                tzid: TZID.to_string(),
            },
            DateOrDateTime::Local {
                datetime: end.datetime(),
                tzid: TZID.to_string(),
            },
        ),
        EventTime::AllDay { start, end } | EventTime::MultiDay { start, end } => {
            (DateOrDateTime::Date(*start), DateOrDateTime::Date(*end))
        }
    };

    VEvent {
        uid: event_uid(event, owner),
        dtstamp: stamp,
        start,
        end,
        summary: event.title.clone(),
        description: event.note.clone().filter(|s| !s.is_empty()),
        url: event.link.clone().filter(|s| !s.is_empty()),
    }
}
