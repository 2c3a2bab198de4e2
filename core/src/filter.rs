// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::{Event, today};

/// Keeps the events starting on or after `min_date`.
pub fn filter_from(events: Vec<Event>, min_date: Date) -> Vec<Event> {
    let total = events.len();
    let kept: Vec<Event> = events
        .into_iter()
        .filter(|e| e.start_date() >= min_date)
        .collect();
    tracing::debug!(%min_date, total, kept = kept.len(), "events filtered");
    kept
}

/// The default lower bound for [`filter_from`], today in the civil timezone.
pub fn default_min_date() -> Date {
    today()
}
