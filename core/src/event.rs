// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::Zoned;
use jiff::civil::Date;

use crate::datetime::start_of_day;

/// A finalized calendar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Summary of the event.
    pub title: String,

    /// URL attached to the event.
    pub link: Option<String>,

    /// Free-form description.
    pub note: Option<String>,

    /// When the event happens.
    pub time: EventTime,
}

/// Start and end of an [`Event`], one variant per kind of event.
///
/// End bounds are exclusive and never before the start. Wall clock times in the
/// spring-forward gap resolve to after the transition, so a timed event lying
/// entirely inside the gap ends up with zero length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTime {
    /// An event with a wall clock start and end in the civil timezone.
    Timed {
        /// Start instant.
        start: Zoned,
        /// End instant.
        end: Zoned,
    },

    /// A single whole day, `end` is the day after `start`.
    AllDay {
        /// The day of the event.
        start: Date,
        /// The day after.
        end: Date,
    },

    /// A span of whole days closed by an `end` marker.
    MultiDay {
        /// First day of the span.
        start: Date,
        /// Day after the last day of the span.
        end: Date,
    },
}

/// Kind of an [`Event`], without its times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// See [`EventTime::Timed`].
    Timed,
    /// See [`EventTime::AllDay`].
    AllDay,
    /// See [`EventTime::MultiDay`].
    MultiDay,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Timed => write!(f, "timed"),
            EventKind::AllDay => write!(f, "all-day"),
            EventKind::MultiDay => write!(f, "multi-day"),
        }
    }
}

impl Event {
    /// The kind of the event.
    pub fn kind(&self) -> EventKind {
        match self.time {
            EventTime::Timed { .. } => EventKind::Timed,
            EventTime::AllDay { .. } => EventKind::AllDay,
            EventTime::MultiDay { .. } => EventKind::MultiDay,
        }
    }

    /// The date the event starts on, local to the civil timezone for timed events.
    pub fn start_date(&self) -> Date {
        match &self.time {
            EventTime::Timed { start, .. } => start.date(),
            EventTime::AllDay { start, .. } | EventTime::MultiDay { start, .. } => *start,
        }
    }

    /// The instant used to order events, local midnight for date events.
    pub(crate) fn sort_key(&self) -> Option<Zoned> {
        match &self.time {
            EventTime::Timed { start, .. } => Some(start.clone()),
            EventTime::AllDay { start, .. } | EventTime::MultiDay { start, .. } => {
                start_of_day(*start)
            }
        }
    }
}
