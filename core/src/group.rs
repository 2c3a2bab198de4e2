// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event grouper: reduces parsed records into calendar events.
//!
//! Records marked `begin` wait in a queue keyed by the slug of their title until an `end`
//! record with the same slug closes them into a multi-day event. Everything else turns
//! into a standalone timed or all-day event.

use std::collections::{HashMap, VecDeque};

use jiff::ToSpan;
use jiff::civil::{Date, DateTime, Time};

use crate::datetime::at_local;
use crate::{Event, EventTime, Record, slugify};

/// Groups records into events sorted by start.
#[tracing::instrument(skip_all, fields(records = records.len()))]
pub fn group(mut records: Vec<Record>) -> Vec<Event> {
    records.sort_by_key(|r| r.date);
    let slugs: Vec<String> = records.iter().map(|r| slugify(&r.title)).collect();

    let mut events = Vec::with_capacity(records.len());
    let mut pending: HashMap<&str, VecDeque<usize>> = HashMap::new();
    for i in 0..records.len() {
        let slug = slugs[i].as_str();
        if records[i].is_span_start {
            pending.entry(slug).or_default().push_back(i);
            records[i].consumed = true;
        } else if records[i].is_span_end {
            match pending.get_mut(slug).and_then(VecDeque::pop_front) {
                Some(begin) => {
                    for j in begin..=i {
                        if slugs[j] == slug {
                            records[j].consumed = true;
                        }
                    }
                    events.extend(multi_day(&records[begin], &records[i]));
                }
                None => {
                    tracing::debug!(title = %records[i].title, "span end without begin");
                    records[i].consumed = true;
                    events.extend(all_day(&records[i]));
                }
            }
        }
    }

    for (slug, queue) in &pending {
        for &i in queue {
            tracing::debug!(slug, raw = %records[i].raw, "span begin never closed, dropped");
        }
    }

    for record in records.iter().filter(|r| !r.consumed) {
        let event = match record.is_timed() {
            true => timed(record),
            false => all_day(record),
        };
        events.extend(event);
    }

    events.sort_by_cached_key(|e| e.sort_key().map(|zdt| zdt.timestamp()));
    tracing::debug!(count = events.len(), "events grouped");
    events
}

fn multi_day(begin: &Record, end: &Record) -> Option<Event> {
    let Ok(end_date) = end.date.tomorrow() else {
        warn_overflow(end);
        return None;
    };

    Some(Event {
        title: first_non_empty(Some(&begin.title), Some(&end.title)).unwrap_or_default(),
        link: first_non_empty(begin.link.as_ref(), end.link.as_ref()),
        note: first_non_empty(begin.note.as_ref(), end.note.as_ref()),
        time: EventTime::MultiDay {
            start: begin.date,
            end: end_date,
        },
    })
}

fn all_day(record: &Record) -> Option<Event> {
    let Ok(end) = record.date.tomorrow() else {
        warn_overflow(record);
        return None;
    };

    Some(standalone(
        record,
        EventTime::AllDay {
            start: record.date,
            end,
        },
    ))
}

fn timed(record: &Record) -> Option<Event> {
    let Some((start, end)) = timed_bounds(record) else {
        warn_overflow(record);
        return None;
    };

    let (Some(start), Some(end)) = (
        at_local(start.date(), start.time()),
        at_local(end.date(), end.time()),
    ) else {
        warn_overflow(record);
        return None;
    };

    Some(standalone(record, EventTime::Timed { start, end }))
}

/// Wall clock start and end of a timed record.
fn timed_bounds(record: &Record) -> Option<(DateTime, DateTime)> {
    let start_date = record.start_day_offset.apply(record.date)?;
    let start = start_date.to_datetime(record.start_time.unwrap_or(Time::midnight()));

    let end = match record.end_time {
        Some(end_time) => {
            let end_date: Date = record.end_day_offset.apply(record.date)?;
            end_date.to_datetime(end_time)
        }
        None => start.checked_add(1.hour()).ok()?,
    };

    let end = match end <= start {
        true => end.checked_add(1.day()).ok()?,
        false => end,
    };
    Some((start, end))
}

fn standalone(record: &Record, time: EventTime) -> Event {
    Event {
        title: record.title.clone(),
        link: record.link.clone(),
        note: record.note.clone(),
        time,
    }
}

fn first_non_empty(preferred: Option<&String>, fallback: Option<&String>) -> Option<String> {
    preferred
        .filter(|s| !s.is_empty())
        .or(fallback.filter(|s| !s.is_empty()))
        .cloned()
}

fn warn_overflow(record: &Record) {
    tracing::warn!(raw = %record.raw, "date out of range, event dropped");
}
