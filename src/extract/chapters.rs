//! Chapter summaries from representative sentences.
//!
//! A section is summarized by its first sentence, its middle sentence (when it
//! has more than two) and its last sentence (when it has more than four).

use super::{ExtractedItem, ExtractionContext, Extractor};
use crate::text::{collapse_whitespace, extract_sentences, truncate_chars, truncate_with_ellipsis};

/// Summarizes every detected chapter or artificial section.
pub struct ChapterExtractor;

impl Extractor for ChapterExtractor {
    fn name(&self) -> &'static str {
        "chapters"
    }

    fn extract(&self, ctx: &ExtractionContext<'_>) -> Vec<ExtractedItem> {
        ctx.chapters
            .iter()
            .map(|chapter| {
                let sentences = extract_sentences(&chapter.content);
                ExtractedItem::ChapterSummary {
                    title: chapter.title.clone(),
                    summary: summarize_sentences(&sentences, &chapter.content, ctx.summary_chars),
                }
            })
            .collect()
    }
}

/// First/middle/last sentence summary, at most `max_chars` long.
///
/// With no usable sentences, the start of `fallback` is returned instead.
pub fn summarize_sentences(sentences: &[String], fallback: &str, max_chars: usize) -> String {
    if sentences.is_empty() {
        let flat = collapse_whitespace(fallback);
        return truncate_chars(&flat, max_chars).to_string();
    }

    let mut picked = vec![sentences[0].as_str()];
    if sentences.len() > 2 {
        picked.push(sentences[sentences.len() / 2].as_str());
    }
    if sentences.len() > 4 {
        picked.push(sentences[sentences.len() - 1].as_str());
    }
    truncate_with_ellipsis(&picked.join(" "), max_chars)
}
