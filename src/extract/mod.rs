//! Extraction passes over normalized book text.
//!
//! Each pass implements [`Extractor`]: a pure function from the shared
//! [`ExtractionContext`] to a bounded list of [`ExtractedItem`]s. Passes are
//! independent of each other and never fail; a pass that finds nothing returns
//! an empty list. The card synthesizer only sees the collected
//! [`Extractions`], so a smarter pass can replace a regex one without touching
//! card assembly.

pub mod actions;
pub mod chapters;
pub mod definitions;
pub mod questions;
pub mod quotes;

use serde::{Deserialize, Serialize};

use crate::text::{Chapter, Keyword};

pub use actions::ActionExtractor;
pub use chapters::{ChapterExtractor, summarize_sentences};
pub use definitions::DefinitionExtractor;
pub use questions::QuestionExtractor;
pub use quotes::QuoteExtractor;

/// One item found by an extraction pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractedItem {
    Definition { term: String, definition: String },
    Quote { text: String },
    Question { question: String, answer: String },
    Action { text: String },
    ChapterSummary { title: String, summary: String },
}

/// Shared, precomputed inputs for every extraction pass.
pub struct ExtractionContext<'a> {
    /// Normalized text.
    pub text: &'a str,
    /// Sentences of the whole text.
    pub sentences: &'a [String],
    /// Lowercased copies of `sentences`, index-aligned.
    pub lower_sentences: Vec<String>,
    /// Ranked keywords.
    pub keywords: &'a [Keyword],
    /// Detected or synthesized chapters.
    pub chapters: &'a [Chapter],
    /// Target length of a chapter summary.
    pub summary_chars: usize,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(
        text: &'a str,
        sentences: &'a [String],
        keywords: &'a [Keyword],
        chapters: &'a [Chapter],
        summary_chars: usize,
    ) -> Self {
        Self {
            text,
            sentences,
            lower_sentences: sentences.iter().map(|s| s.to_lowercase()).collect(),
            keywords,
            chapters,
            summary_chars,
        }
    }

    /// Sentences mentioning `word` (lowercase), in text order.
    pub fn sentences_with<'s>(&'s self, word: &'s str) -> impl Iterator<Item = &'a str> + 's {
        self.sentences
            .iter()
            .zip(&self.lower_sentences)
            .filter(move |(_, lower)| lower.contains(word))
            .map(|(s, _)| s.as_str())
    }
}

/// A single extraction pass. Passes are shared across batch workers.
pub trait Extractor: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Run the pass. Must be total and respect its own output cap.
    fn extract(&self, ctx: &ExtractionContext<'_>) -> Vec<ExtractedItem>;
}

/// The standard set of passes, in card order.
pub fn default_extractors() -> Vec<Box<dyn Extractor>> {
    vec![
        Box::new(ChapterExtractor),
        Box::new(DefinitionExtractor),
        Box::new(QuoteExtractor),
        Box::new(QuestionExtractor),
        Box::new(ActionExtractor),
    ]
}

/// Definition found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub term: String,
    pub definition: String,
}

/// Study question with its extracted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyQuestion {
    pub question: String,
    pub answer: String,
}

/// Chapter heading with its short summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSummary {
    pub title: String,
    pub summary: String,
}

/// Everything the passes found, grouped by kind and kept in pass order.
#[derive(Debug, Clone, Default)]
pub struct Extractions {
    pub chapters: Vec<ChapterSummary>,
    pub definitions: Vec<Definition>,
    pub quotes: Vec<String>,
    pub questions: Vec<StudyQuestion>,
    pub actions: Vec<String>,
}

impl Extractions {
    /// Run every pass and group the results.
    pub fn collect(ctx: &ExtractionContext<'_>, extractors: &[Box<dyn Extractor>]) -> Self {
        let mut out = Self::default();
        for extractor in extractors {
            let items = extractor.extract(ctx);
            tracing::debug!(pass = extractor.name(), items = items.len(), "extraction pass");
            for item in items {
                out.push(item);
            }
        }
        out
    }

    fn push(&mut self, item: ExtractedItem) {
        match item {
            ExtractedItem::Definition { term, definition } => {
                self.definitions.push(Definition { term, definition })
            }
            ExtractedItem::Quote { text } => self.quotes.push(text),
            ExtractedItem::Question { question, answer } => {
                self.questions.push(StudyQuestion { question, answer })
            }
            ExtractedItem::Action { text } => self.actions.push(text),
            ExtractedItem::ChapterSummary { title, summary } => {
                self.chapters.push(ChapterSummary { title, summary })
            }
        }
    }

    /// Whether every pass came back empty.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
            && self.definitions.is_empty()
            && self.quotes.is_empty()
            && self.questions.is_empty()
            && self.actions.is_empty()
    }
}
