// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Components that can be written by the formatter.
//!
//! Only the subset needed for publishing one-shot events is modelled: a calendar
//! with its header properties, timezone definitions built from yearly observance
//! rules, and events whose start and end are either dates or local date-times.

use jiff::Timestamp;
use jiff::civil::{self, Weekday};
use jiff::tz::Offset;

/// A `VCALENDAR` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCalendar {
    /// Product identifier (`PRODID`).
    pub prod_id: String,

    /// Calendar scale (`CALSCALE`), e.g. `GREGORIAN`.
    pub calscale: Option<String>,

    /// Method (`METHOD`), e.g. `PUBLISH`.
    pub method: Option<String>,

    /// Non-standard properties written after the standard header.
    pub x_properties: Vec<XProperty>,

    /// Timezone definitions referenced by the events.
    pub timezones: Vec<VTimeZone>,

    /// Events, written in order.
    pub events: Vec<VEvent>,
}

impl VCalendar {
    /// Creates an empty calendar with the given product identifier.
    #[must_use]
    pub fn new(prod_id: impl Into<String>) -> Self {
        Self {
            prod_id: prod_id.into(),
            calscale: None,
            method: None,
            x_properties: Vec::new(),
            timezones: Vec::new(),
            events: Vec::new(),
        }
    }
}

/// A non-standard `X-` property, written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XProperty {
    /// Property name including the `X-` prefix.
    pub name: String,

    /// Raw property value.
    pub value: String,
}

impl XProperty {
    /// Creates a new property.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A `VTIMEZONE` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VTimeZone {
    /// Timezone identifier (`TZID`).
    pub tzid: String,

    /// Non-standard properties, e.g. `X-LIC-LOCATION`.
    pub x_properties: Vec<XProperty>,

    /// Standard and daylight observances.
    pub observances: Vec<Observance>,
}

/// Kind of a timezone observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservanceKind {
    /// `STANDARD` sub-component.
    Standard,

    /// `DAYLIGHT` sub-component.
    Daylight,
}

/// A `STANDARD` or `DAYLIGHT` sub-component that repeats every year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observance {
    /// Standard or daylight.
    pub kind: ObservanceKind,

    /// First onset, in the local time before the transition.
    pub dtstart: civil::DateTime,

    /// Offset in use before the transition.
    pub offset_from: Offset,

    /// Offset in use after the transition.
    pub offset_to: Offset,

    /// Abbreviation, e.g. `CET`.
    pub name: String,

    /// Yearly recurrence of the onset.
    pub rule: YearlyRule,
}

/// `FREQ=YEARLY;BYMONTH=<month>;BYDAY=<week><weekday>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyRule {
    /// Month, 1 to 12.
    pub month: i8,

    /// Week within the month, negative counts from the end (`-1` is the last).
    pub week: i8,

    /// Day of the week.
    pub weekday: Weekday,
}

/// A `VEVENT` with fixed start and end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VEvent {
    /// Unique identifier (`UID`).
    pub uid: String,

    /// Creation stamp (`DTSTAMP`), written in UTC.
    pub dtstamp: Timestamp,

    /// Start (`DTSTART`).
    pub start: DateOrDateTime,

    /// End (`DTEND`), exclusive.
    pub end: DateOrDateTime,

    /// Summary (`SUMMARY`).
    pub summary: String,

    /// Description (`DESCRIPTION`).
    pub description: Option<String>,

    /// Link (`URL`).
    pub url: Option<String>,
}

/// Value of a `DTSTART` or `DTEND` property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOrDateTime {
    /// `VALUE=DATE`.
    Date(civil::Date),

    /// Local date-time qualified by a `TZID` parameter.
    Local {
        /// Wall clock date-time.
        datetime: civil::DateTime,

        /// Timezone identifier, should match a `VTIMEZONE` of the calendar.
        tzid: String,
    },
}
