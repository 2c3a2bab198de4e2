// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) formatter module.
//!
//! This module writes [`VCalendar`] values as RFC 5545 text to any
//! `std::io::Write` implementer, with CRLF line endings and line folding.
//!
//! # Example
//!
//! ```
//! use plaincal_ical::{VCalendar, format};
//!
//! let calendar = VCalendar::new("-//Example Corp.//Cal Client 1.0//EN");
//! let ics = format(&calendar).unwrap();
//! assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
//! ```

mod component;
mod property;
mod value;

use std::io::{self, Write};

use crate::component::VCalendar;
use crate::formatter::component::write_vcalendar;

pub use crate::formatter::value::escape_text;

/// Convenience function to format a `VCalendar` to a `String` (uses default options).
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails or if the output
/// contains invalid UTF-8 data.
pub fn format(calendar: &VCalendar) -> io::Result<String> {
    FormatOptions::default().write_to_string(calendar)
}

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Write a `VCalendar` to any `Write` implementer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&self, calendar: &VCalendar, w: &mut impl Write) -> io::Result<()> {
        let mut formatter = Formatter::new(w, *self);
        formatter.write_calendar(calendar)?;
        formatter.flush()
    }

    /// Write a `VCalendar` to a `String`.
    ///
    /// # Errors
    /// Returns an error if writing fails or if the output contains invalid UTF-8 data.
    pub fn write_to_string(&self, calendar: &VCalendar) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write(calendar, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }

    /// Both SPACE and TAB are 1 byte.
    const fn continuation_len() -> usize {
        1
    }
}

/// iCalendar formatter that writes to any `Write` implementer.
///
/// Everything written through the `Write` impl counts towards the current
/// content line and gets folded; [`Formatter::writeln`] terminates the line.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    writer: W,
    options: FormatOptions,
    /// Current line length in bytes (excluding the pending CRLF).
    line_length: usize,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line_length: 0,
        }
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a `VCalendar` to the underlying writer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_calendar(&mut self, calendar: &VCalendar) -> io::Result<()> {
        write_vcalendar(self, calendar)
    }

    /// Write a CRLF line ending.
    pub(crate) fn writeln(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n")?;
        self.line_length = 0;
        Ok(())
    }

    fn insert_fold(&mut self) -> io::Result<()> {
        self.writer
            .write_all(self.options.folding_style.as_bytes())?;
        self.line_length = FoldingStyle::continuation_len();
        Ok(())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(max_len) = self.options.folding else {
            self.writer.write_all(buf)?;
            return Ok(buf.len());
        };

        let mut remaining = buf;
        while !remaining.is_empty() {
            if self.line_length >= max_len {
                self.insert_fold()?;
            }

            let available = max_len.saturating_sub(self.line_length);
            let mut len = safe_write_length(remaining, available);
            if len == 0 {
                // The next character does not fit. Fold unless the line is
                // already a bare continuation, in which case it must go out anyway.
                if self.line_length > FoldingStyle::continuation_len() {
                    self.insert_fold()?;
                    continue;
                }
                len = safe_write_length(remaining, 4).max(1);
            }

            let (head, tail) = remaining.split_at(len);
            self.writer.write_all(head)?;
            self.line_length += head.len();
            remaining = tail;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Largest prefix of `buf` not longer than `max_bytes` that ends on a UTF-8
/// character boundary.
fn safe_write_length(buf: &[u8], max_bytes: usize) -> usize {
    if max_bytes >= buf.len() {
        return buf.len();
    }

    let mut pos = max_bytes;
    // 10xxxxxx is a continuation byte, step back to the start of the sequence
    while pos > 0 && buf.get(pos).is_some_and(|b| b & 0xC0 == 0x80) {
        pos -= 1;
    }
    pos
}
