// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use jiff::Zoned;
use jiff::civil::{Date, Time, Weekday, date};
use jiff::tz::{TimeZone, offset};
use plaincal_ical::{Observance, ObservanceKind, VTimeZone, XProperty, YearlyRule};

/// Identifier of the civil timezone all timed events are expressed in.
pub const TZID: &str = "Europe/Zurich";

/// Same rules as [`vtimezone`], used when the database lacks [`TZID`].
const TZ_POSIX: &str = "CET-1CEST,M3.5.0,M10.5.0/3";

/// The civil timezone (CET/CEST) used for every timed event.
pub fn civil_time_zone() -> &'static TimeZone {
    static TZ: OnceLock<TimeZone> = OnceLock::new();
    TZ.get_or_init(|| match TimeZone::get(TZID) {
        Ok(tz) => tz,
        Err(err) => {
            tracing::warn!(tzid = TZID, %err, "timezone not found, using POSIX rules");
            TimeZone::posix(TZ_POSIX).unwrap_or_else(|_| TimeZone::fixed(offset(1)))
        }
    })
}

/// Today's date in the civil timezone.
pub fn today() -> Date {
    Zoned::now().with_time_zone(civil_time_zone().clone()).date()
}

/// Combine a date and a wall clock time in the civil timezone.
///
/// Ambiguous times resolve to the earlier instant, times inside a DST gap move forward.
pub(crate) fn at_local(date: Date, time: Time) -> Option<Zoned> {
    date.to_datetime(time)
        .to_zoned(civil_time_zone().clone())
        .ok()
}

/// Local midnight of the date, used to order date-only events among timed ones.
pub(crate) fn start_of_day(date: Date) -> Option<Zoned> {
    at_local(date, Time::midnight())
}

/// The `VTIMEZONE` definition matching [`civil_time_zone`].
pub fn vtimezone() -> VTimeZone {
    VTimeZone {
        tzid: TZID.to_string(),
        x_properties: vec![XProperty::new("X-LIC-LOCATION", TZID)],
        observances: vec![
            Observance {
                kind: ObservanceKind::Daylight,
                dtstart: date(1970, 3, 29).at(2, 0, 0, 0),
                offset_from: offset(1),
                offset_to: offset(2),
                name: "CEST".to_string(),
                rule: YearlyRule {
                    month: 3,
                    week: -1,
                    weekday: Weekday::Sunday,
                },
            },
            Observance {
                kind: ObservanceKind::Standard,
                dtstart: date(1970, 10, 25).at(3, 0, 0, 0),
                offset_from: offset(2),
                offset_to: offset(1),
                name: "CET".to_string(),
                rule: YearlyRule {
                    month: 10,
                    week: -1,
                    weekday: Weekday::Sunday,
                },
            },
        ],
    }
}
