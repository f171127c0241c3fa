//! HTML text via `scraper`.
//!
//! Block-level elements (headings, paragraphs, list items, quotes) become
//! paragraphs separated by blank lines, so headings stay on their own line
//! for chapter detection.

use scraper::{Html, Selector};

use super::{ContentFormat, SourceError, SourceResult, SourceText, TextSource};

pub struct HtmlSource;

impl TextSource for HtmlSource {
    fn format(&self) -> ContentFormat {
        ContentFormat::Html
    }

    fn extract(&self, data: &[u8]) -> SourceResult<SourceText> {
        let document = Html::parse_document(&String::from_utf8_lossy(data));
        let text = block_text(&document);
        if text.is_empty() {
            return Err(SourceError::EmptyDocument {
                origin: "(html)".into(),
            });
        }
        Ok(SourceText {
            text,
            title: first_text(&document, "title"),
            author: meta_content(&document, "author"),
        })
    }
}

/// Text of every block element, one paragraph each, in document order.
pub(crate) fn block_text(document: &Html) -> String {
    let Ok(blocks) = Selector::parse("h1, h2, h3, h4, h5, h6, p, li, blockquote, pre") else {
        return String::new();
    };
    document
        .select(&blocks)
        .map(|el| el.text().collect::<Vec<_>>().join(" "))
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Trimmed text of the first element matching `selector`.
pub(crate) fn first_text(document: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    document
        .select(&sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn meta_content(document: &Html, name: &str) -> Option<String> {
    let sel = Selector::parse("meta").ok()?;
    document
        .select(&sel)
        .find(|el| el.value().attr("name").is_some_and(|n| n.eq_ignore_ascii_case(name)))
        .and_then(|el| el.value().attr("content"))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}
