//! Structural segmentation: sentences, paragraphs and chapters.
//!
//! All three are heuristic. Sentence and paragraph extraction filter by length
//! so fragments and walls of text never reach a card; chapter detection falls
//! back to ten equal slices when no heading is recognized.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{char_len, collapse_whitespace, truncate_chars};

/// Sentences must be strictly longer than this.
pub const MIN_SENTENCE_CHARS: usize = 40;
/// Sentences must be strictly shorter than this.
pub const MAX_SENTENCE_CHARS: usize = 500;
/// Paragraphs must be strictly longer than this.
pub const MIN_PARAGRAPH_CHARS: usize = 100;

/// Characters of text following a heading that belong to its chapter.
const CHAPTER_WINDOW_CHARS: usize = 2000;
const CHAPTER_TITLE_CHARS: usize = 60;
const ARTIFICIAL_SECTIONS: usize = 10;
/// Artificial sections at or below this trimmed length are dropped.
const MIN_SECTION_CHARS: usize = 100;

pub(crate) static RE_PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Heading patterns, tried in order against each trimmed line.
static HEADING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^(cap[ií]tulo|chapter)\s*(\d+|[ivxlc]+)\b[:.\s-]*(.{0,50})$",
        r"(?i)^(parte|part)\s*(\d+|[ivxlc]+)\b[:.\s-]*(.{0,50})$",
        r"(?i)^(secci[oó]n|section)\s*(\d+)\b[:.\s-]*(.{0,50})$",
        r"^(\d{1,2})[.)]\s+(.{5,50})$",
        r"(?i)^(introducci[oó]n|introduction|pr[oó]logo|prologue|prefacio|preface|conclusi[oó]n|conclusion|ep[ií]logo|epilogue)$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// A detected or synthesized chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Heading line, or `Sección N` for artificial slices.
    pub title: String,
    /// The text window belonging to this chapter.
    pub content: String,
    /// Byte offset of the chapter start in the source text.
    pub start: usize,
    /// Whether this chapter is an artificial slice rather than a heading.
    pub synthetic: bool,
}

/// Split text into sentences of useful length.
///
/// A boundary is `.`, `!` or `?` followed by whitespace and then an uppercase
/// letter. Line breaks inside the text are treated as spaces.
pub fn extract_sentences(text: &str) -> Vec<String> {
    let flat = text.replace('\n', " ");
    split_sentences(&flat)
        .into_iter()
        .map(str::trim)
        .filter(|s| {
            let len = char_len(s);
            len > MIN_SENTENCE_CHARS && len < MAX_SENTENCE_CHARS
        })
        .map(str::to_string)
        .collect()
}

/// Raw sentence spans, unfiltered.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut start = 0usize;
    let mut iter = text.char_indices().peekable();

    while let Some((idx, ch)) = iter.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let end = idx + ch.len_utf8();

        // Require at least one whitespace character, then an uppercase letter.
        let mut saw_space = false;
        while let Some(&(_, next)) = iter.peek() {
            if next.is_whitespace() {
                saw_space = true;
                iter.next();
            } else {
                break;
            }
        }
        match iter.peek() {
            Some(&(next_idx, next)) if saw_space && next.is_uppercase() => {
                spans.push(&text[start..end]);
                start = next_idx;
            }
            _ => {}
        }
    }

    if start < text.len() {
        spans.push(&text[start..]);
    }
    spans
}

/// Split text on blank lines into whitespace-collapsed paragraphs.
pub fn extract_paragraphs(text: &str) -> Vec<String> {
    RE_PARAGRAPH_BREAK
        .split(text)
        .map(collapse_whitespace)
        .filter(|p| char_len(p) > MIN_PARAGRAPH_CHARS)
        .collect()
}

/// Detect chapter headings line by line, or slice the text into sections.
pub fn detect_chapters(text: &str) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut offset = 0usize;

    for line in text.split('\n') {
        let trimmed = line.trim();
        let len = char_len(trimmed);
        if len > 3 && len < 100 && HEADING_PATTERNS.iter().any(|re| re.is_match(trimmed)) {
            chapters.push(Chapter {
                title: truncate_chars(trimmed, CHAPTER_TITLE_CHARS).trim().to_string(),
                content: truncate_chars(&text[offset..], CHAPTER_WINDOW_CHARS).to_string(),
                start: offset,
                synthetic: false,
            });
        }
        offset += line.len() + 1;
    }

    if chapters.is_empty() {
        chapters = artificial_sections(text);
    }
    chapters
}

/// Ten equal-length slices titled `Sección N`, dropping near-empty ones.
fn artificial_sections(text: &str) -> Vec<Chapter> {
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let total_chars = boundaries.len() - 1;
    let section_chars = total_chars / ARTIFICIAL_SECTIONS;
    if section_chars == 0 {
        return Vec::new();
    }

    (0..ARTIFICIAL_SECTIONS)
        .filter_map(|i| {
            let start = boundaries[i * section_chars];
            let end = boundaries[((i + 1) * section_chars).min(total_chars)];
            let content = &text[start..end];
            (char_len(content.trim()) > MIN_SECTION_CHARS).then(|| Chapter {
                title: format!("Sección {}", i + 1),
                content: content.to_string(),
                start,
                synthetic: true,
            })
        })
        .collect()
}
