//! Text analysis: normalization, stop words, keyword ranking and segmentation.
//!
//! Everything here is pure and total. The helpers in this file measure length
//! in characters, never bytes, so truncation is always safe on accented text.

pub mod keywords;
pub mod lexicon;
pub mod normalize;
pub mod segment;

pub use keywords::{Keyword, extract_keywords};
pub use normalize::{collapse_whitespace, normalize};
pub use segment::{Chapter, detect_chapters, extract_paragraphs, extract_sentences};

/// Suffix appended when text is shortened.
pub const ELLIPSIS: &str = "...";

/// Number of characters in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The first `max` characters of `s`, without any marker.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte, _)) => &s[..byte],
        None => s,
    }
}

/// Shorten `s` to at most `max` characters, ending in `...` when cut.
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if char_len(s) <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut out = truncate_chars(s, keep).trim_end().to_string();
    out.push_str(ELLIPSIS);
    out
}

/// Uppercase the first character.
pub fn capitalize_first(s: &str) -> String {
    let s = s.trim();
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// URL-safe slug: lowercase ASCII alphanumerics joined by single dashes.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
