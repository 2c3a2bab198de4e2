// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The bits of HTML that show up in hand-written event lists: a hyperlink
//! around the title and character references.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Replace the first `<a href="URL">LABEL</a>` with `LABEL` and return the URL.
///
/// URLs that are absolute local paths are turned into `file://` URLs.
pub fn extract_anchor(text: &str) -> (Cow<'_, str>, Option<String>) {
    const RE: &str = r#"(?i)<a\s+href="([^"]+)">([^<]+)</a>"#;
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let Some(caps) = re.captures(text) else {
        return (Cow::Borrowed(text), None);
    };
    let (Some(all), Some(href), Some(label)) = (caps.get(0), caps.get(1), caps.get(2)) else {
        return (Cow::Borrowed(text), None);
    };

    let mut replaced = String::with_capacity(text.len());
    replaced.push_str(&text[..all.start()]);
    replaced.push_str(label.as_str());
    replaced.push_str(&text[all.end()..]);

    let href = href.as_str();
    let url = match href.starts_with('/') {
        true => format!("file://{href}"),
        false => href.to_string(),
    };
    (Cow::Owned(replaced), Some(url))
}

/// Decode character references the way HTML5 does in text: the full named
/// entity table, legacy names without the trailing `;`, and numeric references.
/// Unknown references are kept verbatim.
pub fn unescape(text: &str) -> Cow<'_, str> {
    htmlize::unescape(text)
}
