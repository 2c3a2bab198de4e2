// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545.

pub const KW_BEGIN: &str = "BEGIN";
pub const KW_END: &str = "END";

pub const KW_VCALENDAR: &str = "VCALENDAR";
pub const KW_VEVENT: &str = "VEVENT";
pub const KW_VTIMEZONE: &str = "VTIMEZONE";
pub const KW_STANDARD: &str = "STANDARD";
pub const KW_DAYLIGHT: &str = "DAYLIGHT";

// Section 3.2 - Property Parameters
pub const KW_TZID: &str = "TZID";
pub const KW_VALUE: &str = "VALUE";

// Section 3.3 - Property Value Data Types
pub const KW_DATE: &str = "DATE";

// Section 3.3.10 - Recurrence Rule
pub const KW_RRULE_FREQ: &str = "FREQ";
pub const KW_RRULE_FREQ_YEARLY: &str = "YEARLY";
pub const KW_RRULE_BYMONTH: &str = "BYMONTH";
pub const KW_RRULE_BYDAY: &str = "BYDAY";

// Section 3.7 - Calendar Properties
pub const KW_CALSCALE: &str = "CALSCALE";
pub const KW_METHOD: &str = "METHOD";
pub const KW_PRODID: &str = "PRODID";
pub const KW_VERSION: &str = "VERSION";
pub const KW_VERSION_2_0: &str = "2.0";

// Section 3.8.1 - Descriptive Component Properties
pub const KW_DESCRIPTION: &str = "DESCRIPTION";
pub const KW_SUMMARY: &str = "SUMMARY";

// Section 3.8.2 - Date and Time Component Properties
pub const KW_DTEND: &str = "DTEND";
pub const KW_DTSTART: &str = "DTSTART";

// Section 3.8.3 - Time Zone Component Properties
pub const KW_TZNAME: &str = "TZNAME";
pub const KW_TZOFFSETFROM: &str = "TZOFFSETFROM";
pub const KW_TZOFFSETTO: &str = "TZOFFSETTO";

// Section 3.8.4 - Relationship Component Properties
pub const KW_UID: &str = "UID";
pub const KW_URL: &str = "URL";

// Section 3.8.5 - Recurrence Component Properties
pub const KW_RRULE: &str = "RRULE";

// Section 3.8.7 - Change Management Component Properties
pub const KW_DTSTAMP: &str = "DTSTAMP";
