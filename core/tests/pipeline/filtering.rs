// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Minimum date filtering of grouped events.

use jiff::civil::date;
use plaincal_core::{default_min_date, filter_from, today};

use crate::common::{SAMPLE_INPUT, events_from, titles};

#[test]
fn filter_keeps_start_on_min_date() {
    let events = filter_from(events_from(SAMPLE_INPUT), date(2025, 6, 1));
    assert_eq!(titles(&events), ["vacation", "night shift"]);
}

#[test]
fn filter_drops_everything_before() {
    let events = filter_from(events_from(SAMPLE_INPUT), date(2025, 11, 4));
    assert!(events.is_empty());
}

#[test]
fn filter_keeps_all_with_early_min_date() {
    let events = filter_from(events_from(SAMPLE_INPUT), date(2000, 1, 1));
    assert_eq!(events.len(), 4);
}

#[test]
fn filter_is_monotonic() {
    let all = events_from(SAMPLE_INPUT);
    let mut previous = usize::MAX;
    for month in 1..=12 {
        let kept = filter_from(all.clone(), date(2025, month, 1)).len();
        assert!(kept <= previous, "month {month}");
        previous = kept;
    }
}

#[test]
fn default_min_date_is_today() {
    let before = today();
    let min = default_min_date();
    assert!(min >= before);
    assert!(min <= today());
}
