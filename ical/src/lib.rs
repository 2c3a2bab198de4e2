// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Write iCalendar (RFC 5545) documents made of one-shot events.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else, clippy::match_bool)]

pub mod component;
pub mod formatter;
pub mod keyword;

pub use crate::component::{
    DateOrDateTime, Observance, ObservanceKind, VCalendar, VEvent, VTimeZone, XProperty,
    YearlyRule,
};
pub use crate::formatter::{FoldingStyle, FormatOptions, Formatter, format};
