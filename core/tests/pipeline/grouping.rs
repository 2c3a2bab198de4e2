// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Grouping of parsed lines into events.

use jiff::civil::date;
use plaincal_core::{EventKind, group, parse};

use crate::common::{
    SAMPLE_INPUT, assert_dates, assert_len, assert_timed, events_from, titles,
};

#[test]
fn group_sample() {
    let events = events_from(SAMPLE_INPUT);
    assert_len(&events, 4);

    let rent = &events[0];
    assert_dates(rent, EventKind::AllDay, date(2025, 1, 10), date(2025, 1, 11));
    assert_eq!(rent.note.as_deref(), Some("Amount: 1200"));

    let plan = &events[1];
    assert_timed(
        plan,
        date(2025, 2, 2).at(10, 0, 0, 0),
        date(2025, 2, 2).at(11, 0, 0, 0),
    );
    assert_eq!(plan.link.as_deref(), Some("file:///docs/plan.pdf"));

    let vacation = &events[2];
    assert_dates(
        vacation,
        EventKind::MultiDay,
        date(2025, 6, 1),
        date(2025, 6, 6),
    );

    let shift = &events[3];
    assert_timed(
        shift,
        date(2025, 11, 3).at(9, 0, 0, 0),
        date(2025, 11, 4).at(0, 0, 0, 0),
    );
    assert_eq!(shift.note.as_deref(), Some("bring coffee"));
}

#[test]
fn group_pairs_spans_regardless_of_input_order() {
    let events = events_from(
        "2025-06-05 Vacation End\n\
         2025-06-02 vacation\n\
         2025-06-01 vacation begin\n",
    );
    assert_len(&events, 1);
    assert_dates(
        &events[0],
        EventKind::MultiDay,
        date(2025, 6, 1),
        date(2025, 6, 6),
    );
    assert_eq!(events[0].title, "vacation");
}

#[test]
fn group_same_key_lines_outside_span_survive() {
    let events = events_from(
        "2025-05-30 vacation\n\
         2025-06-01 vacation begin\n\
         2025-06-05 vacation end\n\
         2025-06-07 vacation\n",
    );
    assert_eq!(
        events.iter().map(|e| e.kind()).collect::<Vec<_>>(),
        [EventKind::AllDay, EventKind::MultiDay, EventKind::AllDay]
    );
}

#[test]
fn group_other_titles_inside_span_survive() {
    let events = events_from(
        "2025-06-01 course begin\n\
         2025-06-02 09:00 standup\n\
         2025-06-03 course end\n",
    );
    assert_eq!(titles(&events), ["course", "standup"]);
}

#[test]
fn group_unmatched_end_and_unclosed_begin() {
    let events = events_from(
        "2025-02-01 moving end\n\
         2025-03-01 renovation begin\n",
    );
    assert_len(&events, 1);
    assert_dates(
        &events[0],
        EventKind::AllDay,
        date(2025, 2, 1),
        date(2025, 2, 2),
    );
}

#[test]
fn group_end_not_after_start_gets_next_day() {
    let events = events_from(
        "2025-03-10 22:00-01:00 party\n\
         2025-03-11 08:00-08:00 shift\n",
    );
    assert_timed(
        &events[0],
        date(2025, 3, 10).at(22, 0, 0, 0),
        date(2025, 3, 11).at(1, 0, 0, 0),
    );
    assert_timed(
        &events[1],
        date(2025, 3, 11).at(8, 0, 0, 0),
        date(2025, 3, 12).at(8, 0, 0, 0),
    );
}

#[test]
fn group_ties_keep_input_order() {
    let events = events_from(
        "2025-07-01 b\n\
         2025-07-01 a\n\
         2025-07-01 c\n",
    );
    assert_eq!(titles(&events), ["b", "a", "c"]);
}

#[test]
fn group_timed_and_date_events_interleave_by_start() {
    let events = events_from(
        "2025-07-02 00:30 early\n\
         2025-07-02 holiday\n\
         2025-07-01 23:00 late\n",
    );
    assert_eq!(titles(&events), ["late", "holiday", "early"]);
}

#[test]
fn group_does_not_depend_on_record_order() {
    let lines = [
        "2025-06-05 trip end",
        "2025-06-01 trip begin",
        "2025-06-03 10:00 call",
    ];
    let forward = group(parse(lines));
    let backward = group(parse(lines.iter().rev()));
    assert_eq!(forward, backward);
}
