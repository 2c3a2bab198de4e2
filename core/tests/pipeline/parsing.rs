// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Line parsing over whole inputs.

use jiff::civil::{Time, date, time};
use plaincal_core::{DayOffset, TimeBound, TimeError, parse, parse_with_diagnostics};

use crate::common::{SAMPLE_INPUT, assert_len};

#[test]
fn parse_sample_keeps_input_order() {
    let records = parse(SAMPLE_INPUT.lines());
    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        ["rent", "plan", "vacation", "vacation", "vacation", "night shift"]
    );
    assert!(records.iter().all(|r| !r.consumed));
}

#[test]
fn parse_sample_reports_one_diagnostic() {
    let parsed = parse_with_diagnostics(SAMPLE_INPUT.lines());
    assert_len(&parsed.records, 6);
    assert_len(&parsed.diagnostics, 1);

    let d = &parsed.diagnostics[0];
    assert_eq!(d.line_number, 7);
    assert_eq!(d.raw, "2025-03-03 25:99 broken");
    assert_eq!(d.bound, TimeBound::Start);
    assert_eq!(d.error, TimeError::OutOfRange("25:99".to_string()));
}

#[test]
fn parse_night_shift_rolls_over() {
    let records = parse(["2025-11-03 09:00-24:00 night shift"]);
    let r = &records[0];
    assert_eq!(r.date, date(2025, 11, 3));
    assert_eq!(r.start_time, Some(time(9, 0, 0, 0)));
    assert_eq!(r.start_day_offset, DayOffset::SameDay);
    assert_eq!(r.end_time, Some(Time::midnight()));
    assert_eq!(r.end_day_offset, DayOffset::NextDay);
}

#[test]
fn parse_start_24_00_is_next_day() {
    let records = parse(["2025-11-03 24:00-01:30 late"]);
    assert_eq!(records[0].start_time, Some(Time::midnight()));
    assert_eq!(records[0].start_day_offset, DayOffset::NextDay);
    assert_eq!(records[0].end_day_offset, DayOffset::SameDay);
}

#[test]
fn parse_rejects_every_out_of_range_time() {
    for (line, bound) in [
        ("2025-01-01 24:01 x", TimeBound::Start),
        ("2025-01-01 12:60 x", TimeBound::Start),
        ("2025-01-01 99:00-10:00 x", TimeBound::Start),
        ("2025-01-01 10:00-24:15 x", TimeBound::End),
        ("2025-01-01 10:00-30:00 x", TimeBound::End),
    ] {
        let parsed = parse_with_diagnostics([line]);
        assert!(parsed.records.is_empty(), "{line}");
        assert_eq!(parsed.diagnostics[0].bound, bound, "{line}");
    }
}

#[test]
fn parse_accepts_crlf_input() {
    let records = parse("2025-04-01 dentist\r\n2025-04-02 rent 900\r\n".lines());
    assert_len(&records, 2);
    assert_eq!(records[0].title, "dentist");
    assert_eq!(records[1].note.as_deref(), Some("Amount: 900"));
}

#[test]
fn parse_entities_in_title_and_comment() {
    let records = parse(["2025-04-01 Caf&eacute; &amp; cake # &#8364;5 &lt;cash&gt;"]);
    assert_eq!(records[0].title, "Café & cake");
    assert_eq!(records[0].note.as_deref(), Some("€5 <cash>"));
}

#[test]
fn parse_entities_beyond_latin1_and_without_semicolon() {
    let records = parse([
        "2025-01-01 Fjord &Aring;lesund",
        "2025-01-02 AT&amp T",
        "2025-01-03 caf&eacute &copy 2025",
        "2025-01-04 x &hearts; y # &Oslash;stergaard &amp co",
    ]);
    assert_len(&records, 4);
    assert_eq!(records[0].title, "Fjord Ålesund");
    assert_eq!(records[1].title, "AT& T");
    assert_eq!(records[2].title, "café ©");
    assert_eq!(records[2].note.as_deref(), Some("Amount: 2025"));
    assert_eq!(records[3].title, "x ♥ y");
    assert_eq!(records[3].note.as_deref(), Some("Østergaard & co"));
}
