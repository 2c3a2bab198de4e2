// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use jiff::Timestamp;
use plaincal_core::{Config, Event, group, parse};

/// A small event list touching every line feature.
pub const SAMPLE_INPUT: &str = r#"# Events 2025

```
2025-01-01 inside a code fence is still ignored```
2025-01-10 rent 1200
2025-02-02 10:00 <a href="/docs/plan.pdf">plan</a>
2025-03-03 25:99 broken
2025-06-01 vacation begin
2025-06-03 vacation
2025-06-05 vacation end
2025-11-03 09:00-24:00 night shift # bring coffee
not an event
"#;

/// Parses and groups the given input.
pub fn events_from(input: &str) -> Vec<Event> {
    group(parse(input.lines()))
}

/// Titles of the events, in order.
pub fn titles(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.title.as_str()).collect()
}

/// A fixed `DTSTAMP` so that rendered documents are reproducible.
pub fn fixed_stamp() -> Timestamp {
    Timestamp::from_second(1_736_510_400).unwrap() // 2025-01-10T12:00:00Z
}

/// Creates a configuration with the given owner and calendar name.
#[must_use]
pub fn test_config(owner: &str, calendar_name: &str) -> Config {
    Config {
        owner: owner.to_string(),
        calendar_name: calendar_name.to_string(),
        ..Config::default()
    }
}
