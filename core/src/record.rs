// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Time};

use crate::DayOffset;

/// One recognized line of the event list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Date the line starts with.
    pub date: Date,

    /// Start time, `None` for lines without a time range.
    pub start_time: Option<Time>,

    /// Day the start time belongs to.
    pub start_day_offset: DayOffset,

    /// End time of a `H:MM-H:MM` range.
    pub end_time: Option<Time>,

    /// Day the end time belongs to, [`DayOffset::NextDay`] for `24:00`.
    pub end_day_offset: DayOffset,

    /// Title with markup replaced by its label and entities decoded.
    pub title: String,

    /// URL of the hyperlink found on the line.
    pub link: Option<String>,

    /// Comment and/or extracted amount.
    pub note: Option<String>,

    /// Line opens a multi-day span (`... begin`).
    pub is_span_start: bool,

    /// Line closes a multi-day span (`... end`).
    pub is_span_end: bool,

    /// Set by the grouper once the record is part of an emitted event.
    pub consumed: bool,

    /// The line as read, for diagnostics.
    pub raw: String,
}

impl Record {
    /// Creates an all-day record with the given title and nothing else set.
    pub fn new(date: Date, title: impl Into<String>) -> Self {
        Self {
            date,
            start_time: None,
            start_day_offset: DayOffset::SameDay,
            end_time: None,
            end_day_offset: DayOffset::SameDay,
            title: title.into(),
            link: None,
            note: None,
            is_span_start: false,
            is_span_end: false,
            consumed: false,
            raw: String::new(),
        }
    }

    /// Whether the line carries a start or end time.
    pub fn is_timed(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some()
    }
}
