//! Reading pages: paragraph-aligned chunks of bounded size.
//!
//! Paragraphs are packed into a page until the next one would overflow it.
//! A paragraph longer than a whole page is split on its own, preferring the
//! last sentence end inside a lookback window before the limit.

use crate::text::segment::RE_PARAGRAPH_BREAK;
use crate::text::{char_len, truncate_chars};

const PARAGRAPH_JOIN: &str = "\n\n";
const SENTENCE_END: &str = ". ";

/// Split `text` into pages of at most `chunk_size` characters.
///
/// Every non-whitespace character of `text` lands on exactly one page, in
/// order. `lookback` must be smaller than `chunk_size`.
pub fn paginate(text: &str, chunk_size: usize, lookback: usize) -> Vec<String> {
    let mut pages = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    let paragraphs = RE_PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty());

    for para in paragraphs {
        let para_chars = char_len(para);

        if para_chars > chunk_size {
            flush(&mut pages, &mut current, &mut current_chars);
            split_long(para, chunk_size, lookback, &mut pages);
            continue;
        }

        if !current.is_empty() && current_chars + PARAGRAPH_JOIN.len() + para_chars > chunk_size {
            flush(&mut pages, &mut current, &mut current_chars);
        }
        if !current.is_empty() {
            current.push_str(PARAGRAPH_JOIN);
            current_chars += PARAGRAPH_JOIN.len();
        }
        current.push_str(para);
        current_chars += para_chars;
    }
    flush(&mut pages, &mut current, &mut current_chars);

    tracing::debug!(pages = pages.len(), chunk_size, "paginated");
    pages
}

fn flush(pages: &mut Vec<String>, current: &mut String, current_chars: &mut usize) {
    if !current.is_empty() {
        pages.push(std::mem::take(current));
        *current_chars = 0;
    }
}

/// Cut one oversized paragraph into page-sized pieces.
fn split_long(para: &str, chunk_size: usize, lookback: usize, pages: &mut Vec<String>) {
    let mut rest = para;
    while char_len(rest) > chunk_size {
        let window = truncate_chars(rest, chunk_size);
        let search_from = truncate_chars(window, chunk_size.saturating_sub(lookback)).len();

        let cut = match window[search_from..].rfind(SENTENCE_END) {
            // Keep the period on this page.
            Some(pos) => search_from + pos + 1,
            None => window.len(),
        };

        let piece = rest[..cut].trim_end();
        if !piece.is_empty() {
            pages.push(piece.to_string());
        }
        rest = rest[cut..].trim_start();
    }
    if !rest.is_empty() {
        pages.push(rest.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_whitespace(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn short_paragraphs_share_a_page() {
        let pages = paginate("Uno.\n\nDos.\n\nTres.", 2000, 500);
        assert_eq!(pages, vec!["Uno.\n\nDos.\n\nTres.".to_string()]);
    }

    #[test]
    fn page_breaks_between_paragraphs() {
        let a = "a".repeat(150);
        let b = "b".repeat(150);
        let pages = paginate(&format!("{a}\n\n{b}"), 250, 100);
        assert_eq!(pages, vec![a, b]);
    }

    #[test]
    fn long_paragraph_splits_at_sentence_end() {
        let sentence = "Esta es una frase de prueba bastante ordinaria. ";
        let para = sentence.repeat(20);
        let pages = paginate(&para, 300, 100);
        assert!(pages.len() > 1);
        for page in &pages {
            assert!(char_len(page) <= 300);
            assert!(page.ends_with('.'));
        }
    }

    #[test]
    fn unbroken_text_hard_cut_on_char_boundary() {
        let para = "ñ".repeat(1000);
        let pages = paginate(&para, 300, 100);
        assert_eq!(pages.len(), 4);
        assert_eq!(char_len(&pages[0]), 300);
        assert_eq!(char_len(&pages[3]), 100);
    }

    #[test]
    fn nothing_lost() {
        let text = format!(
            "Intro breve.\n\n{}\n\n  \n\n{}\n\nFinal.",
            "Una oración larga que se repite. ".repeat(90),
            "x".repeat(2500)
        );
        let pages = paginate(&text, 2000, 500);
        assert!(pages.iter().all(|p| char_len(p) <= 2000));
        assert_eq!(non_whitespace(&pages.concat()), non_whitespace(&text));
    }

    #[test]
    fn blank_text_has_no_pages() {
        assert!(paginate("", 2000, 500).is_empty());
        assert!(paginate(" \n\n \n", 2000, 500).is_empty());
    }
}
