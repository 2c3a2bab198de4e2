// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Maximum number of characters kept in a slug.
pub const SLUG_MAX_LEN: usize = 80;

/// Slug used when nothing of the title survives.
pub const SLUG_FALLBACK: &str = "event";

/// Normalize a title into a key: lowercase, whitespace runs collapsed into `_`,
/// everything outside `[a-z0-9_@-]` dropped, at most [`SLUG_MAX_LEN`] characters.
///
/// Used both to pair multi-day markers and to build event UIDs.
pub fn slugify(title: &str) -> String {
    let lower = title.trim().to_lowercase();

    let mut slug = String::with_capacity(lower.len());
    let mut in_whitespace = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '@' | '-') {
            slug.push(c);
        }
    }

    // all remaining characters are ASCII
    slug.truncate(SLUG_MAX_LEN);
    match slug.is_empty() {
        true => SLUG_FALLBACK.to_string(),
        false => slug,
    }
}
