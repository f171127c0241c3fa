//! Canonical working text.
//!
//! Extracted book text arrives with mixed line endings, decomposed accents,
//! stray control characters and ragged spacing. Chapter and paragraph
//! detection depend on blank lines, so those survive normalization while every
//! other whitespace run is collapsed.

use unicode_normalization::UnicodeNormalization;

/// Normalize raw extracted text.
///
/// - `\r\n` and lone `\r` become `\n`
/// - NFC composition, so `a` + combining acute compares equal to `á`
/// - form feeds become paragraph breaks; other control characters and the
///   BOM are dropped
/// - any other whitespace run becomes one space, trailing spaces are removed
/// - three or more newlines become one blank line
pub fn normalize(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(unified.len());
    let mut pending_space = false;
    let mut newlines = 0usize;

    for c in unified.nfc() {
        if c == '\n' {
            pending_space = false;
            newlines += 1;
            continue;
        }
        // Form feed marks a PDF page break.
        if c == '\u{c}' {
            pending_space = false;
            newlines += 2;
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if c == '\u{feff}' || c.is_control() {
            continue;
        }

        if newlines > 0 {
            if !out.is_empty() {
                out.push_str(if newlines >= 2 { "\n\n" } else { "\n" });
            }
            newlines = 0;
        } else if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

/// Collapse every whitespace run, newlines included, into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
