// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for the plaincal-core crate.
//!
//! These tests feed raw event lists through the public functions and check the
//! resulting events and calendar documents.

mod filtering;
mod grouping;
mod parsing;
mod rendering;
