// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod clock;
mod zone;

pub use clock::{DayOffset, parse_clock_time};
pub use zone::{TZID, civil_time_zone, today, vtimezone};
pub(crate) use zone::{at_local, start_of_day};
