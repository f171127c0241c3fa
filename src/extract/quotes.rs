//! Quote extraction: quoted passages first, then salient statements.

use std::sync::LazyLock;

use regex::Regex;

use super::{ExtractedItem, ExtractionContext, Extractor};

const MAX_QUOTES: usize = 15;

/// Text between curly, angled or straight double quotes, 30 to 200 chars.
static RE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[“"«]([^“”"«»]{30,200})[”"»]"#).unwrap());

/// Words that mark a sentence as a statement worth quoting.
const SALIENCE_MARKERS: &[&str] = &[
    " es ",
    " significa ",
    " importante ",
    " clave ",
    " fundamental ",
    " esencial ",
];

/// Collects quoted passages and salient sentences, deduplicated.
pub struct QuoteExtractor;

impl Extractor for QuoteExtractor {
    fn name(&self) -> &'static str {
        "quotes"
    }

    fn extract(&self, ctx: &ExtractionContext<'_>) -> Vec<ExtractedItem> {
        let mut quotes: Vec<String> = Vec::new();

        for caps in RE_QUOTED.captures_iter(ctx.text) {
            let quote = caps[1].split_whitespace().collect::<Vec<_>>().join(" ");
            if !quotes.contains(&quote) {
                quotes.push(quote);
            }
        }

        for sentence in ctx.sentences {
            if quotes.len() >= MAX_QUOTES {
                break;
            }
            if SALIENCE_MARKERS.iter().any(|m| sentence.contains(m)) && !quotes.contains(sentence) {
                quotes.push(sentence.clone());
            }
        }

        quotes.truncate(MAX_QUOTES);
        quotes
            .into_iter()
            .map(|text| ExtractedItem::Quote { text })
            .collect()
    }
}
