// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Time};

use crate::TimeError;

/// Which day a clock time belongs to, relative to the date of its line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayOffset {
    /// The time is on the line's date.
    #[default]
    SameDay,

    /// The time is on the day after the line's date, e.g. `24:00`.
    NextDay,
}

impl DayOffset {
    /// Shift the given date by this offset, `None` past the last representable date.
    pub fn apply(self, date: Date) -> Option<Date> {
        match self {
            DayOffset::SameDay => Some(date),
            DayOffset::NextDay => date.tomorrow().ok(),
        }
    }
}

/// Parses a `H:MM` clock time.
///
/// `24:00` is accepted as midnight of the following day and yields `00:00` with
/// [`DayOffset::NextDay`]. Every other time must be within `0:00..=23:59`.
pub fn parse_clock_time(token: &str) -> Result<(Time, DayOffset), TimeError> {
    let mut parts = token.split(':');
    let (Some(hour), Some(minute), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(TimeError::Format(token.to_string()));
    };

    let (Ok(hour), Ok(minute)) = (hour.parse::<i32>(), minute.parse::<i32>()) else {
        return Err(TimeError::Numbers(token.to_string()));
    };

    if hour == 24 && minute == 0 {
        return Ok((Time::midnight(), DayOffset::NextDay));
    }

    i8::try_from(hour)
        .ok()
        .zip(i8::try_from(minute).ok())
        .and_then(|(h, m)| Time::new(h, m, 0, 0).ok())
        .map(|time| (time, DayOffset::SameDay))
        .ok_or_else(|| TimeError::OutOfRange(token.to_string()))
}
