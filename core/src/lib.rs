// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Turn a plaintext event list into calendar events.
//!
//! The pipeline is [`parse`] → [`group`] → [`filter_from`] → [`CalendarWriter`].

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod config;
mod datetime;
mod error;
mod event;
mod filter;
mod group;
mod html;
mod parser;
mod record;
mod render;
mod slug;

pub use crate::config::{APP_NAME, Config, DEFAULT_PRODUCT_ID};
pub use crate::datetime::{DayOffset, TZID, civil_time_zone, parse_clock_time, today, vtimezone};
pub use crate::error::{ConfigError, TimeError};
pub use crate::event::{Event, EventKind, EventTime};
pub use crate::filter::{default_min_date, filter_from};
pub use crate::group::group;
pub use crate::html::{extract_anchor, unescape};
pub use crate::parser::{LineDiagnostic, Parsed, TimeBound, parse, parse_with_diagnostics};
pub use crate::record::Record;
pub use crate::render::{CalendarOptions, CalendarWriter, event_uid, render_to_string};
pub use crate::slug::{SLUG_FALLBACK, SLUG_MAX_LEN, slugify};
