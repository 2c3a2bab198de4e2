// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use jiff::civil::{Date, DateTime};
use plaincal_core::{Event, EventKind, EventTime, TZID};

/// Asserts that an event is timed with the given wall clock bounds.
///
/// # Panics
///
/// Panics if the event is not timed or the bounds differ.
pub fn assert_timed(event: &Event, start: DateTime, end: DateTime) {
    let EventTime::Timed { start: s, end: e } = &event.time else {
        panic!("Expected a timed event, got {}", event.kind());
    };
    assert_eq!(s.datetime(), start, "Start mismatch");
    assert_eq!(e.datetime(), end, "End mismatch");
    assert_eq!(s.time_zone().iana_name(), Some(TZID), "Timezone mismatch");
    assert!(s.timestamp() < e.timestamp(), "End must be after start");
}

/// Asserts that an event is a date event of the given kind and bounds.
///
/// # Panics
///
/// Panics if the kind or the bounds differ.
pub fn assert_dates(event: &Event, kind: EventKind, start: Date, end: Date) {
    assert_eq!(event.kind(), kind, "Kind mismatch");
    match event.time {
        EventTime::AllDay { start: s, end: e } | EventTime::MultiDay { start: s, end: e } => {
            assert_eq!(s, start, "Start mismatch");
            assert_eq!(e, end, "End mismatch");
        }
        EventTime::Timed { .. } => unreachable!(),
    }
}

/// Asserts that every content line ends in CRLF and fits in 75 octets.
///
/// # Panics
///
/// Panics on a bare LF or an overlong line.
pub fn assert_content_lines(ics: &str) {
    assert!(ics.ends_with("\r\n"), "Document must end with CRLF");
    for line in ics.split_terminator("\r\n") {
        assert!(!line.contains('\n'), "Bare LF in line: {line:?}");
        assert!(line.len() <= 75, "Line longer than 75 octets: {line:?}");
    }
}

/// Asserts that a collection has the expected length.
///
/// # Panics
///
/// Panics if the length doesn't match.
pub fn assert_len<T>(collection: &[T], expected_len: usize) {
    assert_eq!(
        collection.len(),
        expected_len,
        "Expected {} items, got {}",
        expected_len,
        collection.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_len_with_matching_length() {
        assert_len(&[1, 2, 3], 3);
    }

    #[test]
    #[should_panic(expected = "Expected 10 items, got 3")]
    fn test_assert_len_panics_on_mismatch() {
        assert_len(&[1, 2, 3], 10);
    }

    #[test]
    #[should_panic(expected = "Line longer than 75 octets")]
    fn test_assert_content_lines_panics_on_long_line() {
        assert_content_lines(&format!("{}\r\n", "x".repeat(76)));
    }
}
