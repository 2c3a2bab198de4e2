// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Rendering of events into calendar documents.

use jiff::civil::date;
use plaincal_core::{CalendarOptions, CalendarWriter, filter_from, render_to_string};

use crate::common::{
    SAMPLE_INPUT, assert_content_lines, events_from, fixed_stamp, test_config,
};

const SAMPLE_CALENDAR: &str = "BEGIN:VCALENDAR\r
PRODID:-//plaincal//plaincal//EN\r
VERSION:2.0\r
CALSCALE:GREGORIAN\r
METHOD:PUBLISH\r
X-WR-CALNAME:Test calendar\r
X-WR-TIMEZONE:Europe/Zurich\r
BEGIN:VTIMEZONE\r
TZID:Europe/Zurich\r
X-LIC-LOCATION:Europe/Zurich\r
BEGIN:DAYLIGHT\r
TZOFFSETFROM:+0100\r
TZOFFSETTO:+0200\r
TZNAME:CEST\r
DTSTART:19700329T020000\r
RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU\r
END:DAYLIGHT\r
BEGIN:STANDARD\r
TZOFFSETFROM:+0200\r
TZOFFSETTO:+0100\r
TZNAME:CET\r
DTSTART:19701025T030000\r
RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU\r
END:STANDARD\r
END:VTIMEZONE\r
BEGIN:VEVENT\r
UID:rent-20250110-jdoe\r
DTSTAMP:20250110T120000Z\r
DTSTART;VALUE=DATE:20250110\r
DTEND;VALUE=DATE:20250111\r
SUMMARY:rent\r
DESCRIPTION:Amount: 1200\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:plan-20250202T100000-jdoe\r
DTSTAMP:20250110T120000Z\r
DTSTART;TZID=Europe/Zurich:20250202T100000\r
DTEND;TZID=Europe/Zurich:20250202T110000\r
SUMMARY:plan\r
URL:file:///docs/plan.pdf\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:vacation-20250601-jdoe\r
DTSTAMP:20250110T120000Z\r
DTSTART;VALUE=DATE:20250601\r
DTEND;VALUE=DATE:20250606\r
SUMMARY:vacation\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:night_shift-20251103T090000-jdoe\r
DTSTAMP:20250110T120000Z\r
DTSTART;TZID=Europe/Zurich:20251103T090000\r
DTEND;TZID=Europe/Zurich:20251104T000000\r
SUMMARY:night shift\r
DESCRIPTION:bring coffee\r
END:VEVENT\r
END:VCALENDAR\r
";

#[test]
fn render_sample_document() {
    let config = test_config("jdoe", "Test calendar");
    let events = filter_from(events_from(SAMPLE_INPUT), date(2025, 1, 1));
    let ics = render_to_string(&events, CalendarOptions::from(&config), fixed_stamp()).unwrap();
    assert_eq!(ics, SAMPLE_CALENDAR);
}

#[test]
fn render_is_deterministic() {
    let events = events_from(SAMPLE_INPUT);
    let writer = CalendarWriter::new(CalendarOptions::default());
    let first = writer.write_to_string(&events, fixed_stamp()).unwrap();
    let second = writer.write_to_string(&events, fixed_stamp()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn render_writer_matches_string() {
    let events = events_from(SAMPLE_INPUT);
    let writer = CalendarWriter::new(CalendarOptions::default());
    let mut buffer = Vec::new();
    writer.write(&events, fixed_stamp(), &mut buffer).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        writer.write_to_string(&events, fixed_stamp()).unwrap()
    );
}

#[test]
fn render_escapes_and_folds() {
    let input = format!(
        "2025-08-01 lunch, then; coffee # {}\n",
        "a rather long comment that keeps going, ".repeat(4)
    );
    let events = events_from(&input);
    let ics = render_to_string(&events, CalendarOptions::default(), fixed_stamp()).unwrap();
    assert_content_lines(&ics);
    assert!(ics.contains("SUMMARY:lunch\\, then\\; coffee\r\n"));

    let unfolded = ics.replace("\r\n ", "");
    assert!(unfolded.contains("DESCRIPTION:a rather long comment that keeps going\\, a rather"));
}

#[test]
fn render_empty_calendar_still_has_timezone() {
    let ics = render_to_string(&[], CalendarOptions::default(), fixed_stamp()).unwrap();
    assert_content_lines(&ics);
    assert!(ics.contains("BEGIN:VTIMEZONE\r\n"));
    assert!(!ics.contains("BEGIN:VEVENT"));
}
