// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Sample inputs and pipeline helpers (fixtures)
//! - Custom assertion helpers

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_content_lines, assert_dates, assert_len, assert_timed};
#[allow(unused_imports)]
pub use fixtures::{SAMPLE_INPUT, events_from, fixed_stamp, test_config, titles};
