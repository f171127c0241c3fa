//! The study pipeline: raw book text in, one [`StudyBook`] out.
//!
//! Stages, in order:
//! 1. Normalize the raw text and reject inputs that are too short
//! 2. Rank keywords and segment sentences, paragraphs and chapters
//! 3. Run every extraction pass over the shared context
//! 4. Synthesize the bounded card deck
//! 5. Categorize from the title and the opening of the text
//! 6. Paginate for the reader
//! 7. Derive study tasks and assemble the record
//!
//! Every invocation owns its intermediates; the pipeline itself only holds
//! configuration and the extraction passes, so one instance can serve many
//! books concurrently.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardSynthesizer};
use crate::category::{Category, categorize};
use crate::config::PipelineConfig;
use crate::error::{StudyError, StudyResult};
use crate::extract::{ExtractionContext, Extractions, Extractor, default_extractors};
use crate::paginate::paginate;
use crate::text::lexicon::StopWords;
use crate::text::{
    Keyword, char_len, detect_chapters, extract_keywords, extract_paragraphs, extract_sentences,
    normalize, slugify, truncate_chars,
};

/// Value of [`StudyBook::source`] for decks built by this engine.
pub const ENGINE_SOURCE: &str = "internal-engine";

/// The categorizer only reads this much of the text after the title.
const CATEGORY_WINDOW_CHARS: usize = 5000;
const MAX_TASKS: usize = 10;
const DEFAULT_TITLE: &str = "Libro";

// ── Output record ───────────────────────────────────────────────────────

/// A follow-up exercise derived from the book's action points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyTask {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Everything produced for one book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub category: Category,
    pub cards: Vec<Card>,
    pub pages: Vec<String>,
    pub tasks: Vec<StudyTask>,
    /// Characters of the raw input, before normalization.
    pub total_characters: usize,
    pub source: String,
}

// ── Pipeline ────────────────────────────────────────────────────────────

/// A configured pipeline, reusable across books.
pub struct StudyPipeline {
    config: PipelineConfig,
    stop_words: StopWords,
    extractors: Vec<Box<dyn Extractor>>,
}

impl StudyPipeline {
    /// Build a pipeline with the standard extraction passes.
    pub fn new(config: PipelineConfig) -> StudyResult<Self> {
        Self::with_extractors(config, default_extractors())
    }

    /// Build a pipeline with a custom set of extraction passes.
    pub fn with_extractors(
        config: PipelineConfig,
        extractors: Vec<Box<dyn Extractor>>,
    ) -> StudyResult<Self> {
        config.validate()?;
        let stop_words = StopWords::with_extra(&config.extra_stop_words);
        Ok(Self {
            config,
            stop_words,
            extractors,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process a book, stamping ids with the current time in milliseconds.
    pub fn process(&self, raw: &str, title: &str, author: &str) -> StudyResult<StudyBook> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        self.process_at(raw, title, author, timestamp)
    }

    /// Process a book with a fixed timestamp. Same inputs, same output.
    pub fn process_at(
        &self,
        raw: &str,
        title: &str,
        author: &str,
        timestamp: u64,
    ) -> StudyResult<StudyBook> {
        let title = match title.trim() {
            "" => DEFAULT_TITLE,
            t => t,
        };

        // 1. Normalize and check there is enough to work with.
        let text = normalize(raw);
        let length = char_len(&text);
        if length < self.config.min_input_chars {
            return Err(StudyError::InputTooShort {
                length,
                minimum: self.config.min_input_chars,
            });
        }
        tracing::info!(title, chars = length, "processing book");

        // 2. Lexical and structural analysis.
        let keywords = extract_keywords(&text, &self.stop_words, self.config.max_keywords);
        let sentences = extract_sentences(&text);
        let paragraphs = extract_paragraphs(&text);
        let chapters = detect_chapters(&text);
        tracing::info!(
            keywords = keywords.len(),
            sentences = sentences.len(),
            paragraphs = paragraphs.len(),
            chapters = chapters.len(),
            "text analyzed"
        );

        // 3. Extraction passes.
        let ctx = ExtractionContext::new(
            &text,
            &sentences,
            &keywords,
            &chapters,
            self.config.card_content_chars,
        );
        let found = Extractions::collect(&ctx, &self.extractors);
        tracing::info!(
            definitions = found.definitions.len(),
            quotes = found.quotes.len(),
            questions = found.questions.len(),
            actions = found.actions.len(),
            "extraction complete"
        );

        // 4. Cards.
        let cards = CardSynthesizer::new(&self.config, title, timestamp).synthesize(
            &ctx,
            &paragraphs,
            &found,
        );

        // 5. Category.
        let category = categorize(title, truncate_chars(&text, CATEGORY_WINDOW_CHARS));

        // 6. Pages.
        let pages = paginate(&text, self.config.chunk_size, self.config.page_lookback);

        // 7. Tasks and record.
        let slug = slugify(title);
        let tasks = found
            .actions
            .iter()
            .take(MAX_TASKS)
            .enumerate()
            .map(|(i, action)| StudyTask {
                id: format!("{slug}-task-{i}-{timestamp}"),
                text: action.clone(),
                completed: false,
            })
            .collect();

        let book = StudyBook {
            id: format!("book-{slug}-{timestamp}"),
            title: title.to_string(),
            author: author.to_string(),
            description: format!(
                "Libro procesado: {title}. {} tarjetas de estudio generadas automáticamente.",
                cards.len()
            ),
            category,
            cards,
            pages,
            tasks,
            total_characters: char_len(raw),
            source: ENGINE_SOURCE.to_string(),
        };
        tracing::info!(
            id = %book.id,
            cards = book.cards.len(),
            pages = book.pages.len(),
            category = %book.category,
            "study deck ready"
        );
        Ok(book)
    }

    /// Ranked keywords of `raw`, after normalization.
    pub fn keywords(&self, raw: &str) -> Vec<Keyword> {
        extract_keywords(&normalize(raw), &self.stop_words, self.config.max_keywords)
    }

    /// Reading pages of `raw`, after normalization.
    pub fn pages(&self, raw: &str) -> Vec<String> {
        paginate(
            &normalize(raw),
            self.config.chunk_size,
            self.config.page_lookback,
        )
    }

    /// Category of `raw` under `title`.
    pub fn category(&self, raw: &str, title: &str) -> Category {
        let text = normalize(raw);
        categorize(title, truncate_chars(&text, CATEGORY_WINDOW_CHARS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> String {
        [
            "Capítulo 1: El poder de los hábitos",
            "",
            "Los hábitos son la base de cualquier transformación personal duradera. Debes empezar con cambios pequeños que puedas repetir cada día sin esfuerzo. La disciplina es la capacidad de mantener esos cambios cuando la motivación desaparece.",
            "",
            "Capítulo 2: La productividad sostenible",
            "",
            "La productividad no consiste en hacer más cosas, sino en hacer las correctas. Para lograr resultados constantes necesitas proteger tus mañanas de interrupciones. El éxito llega como consecuencia natural de los hábitos bien elegidos.",
        ]
        .join("\n")
    }

    fn pipeline() -> StudyPipeline {
        StudyPipeline::new(PipelineConfig::default()).unwrap()
    }

    #[test]
    fn short_input_rejected() {
        let err = pipeline().process_at("   demasiado corto   ", "T", "A", 1).unwrap_err();
        assert!(matches!(
            err,
            StudyError::InputTooShort {
                length: 15,
                minimum: 100
            }
        ));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = PipelineConfig {
            min_cards: 50,
            max_cards: 40,
            ..PipelineConfig::default()
        };
        assert!(matches!(
            StudyPipeline::new(config),
            Err(StudyError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn record_metadata() {
        let book = pipeline()
            .process_at(&sample(), "Hábitos Atómicos", "Autor", 42)
            .unwrap();
        assert_eq!(book.id, "book-h-bitos-at-micos-42");
        assert_eq!(book.author, "Autor");
        assert_eq!(book.source, ENGINE_SOURCE);
        assert_eq!(book.total_characters, sample().chars().count());
        assert_eq!(
            book.description,
            format!(
                "Libro procesado: Hábitos Atómicos. {} tarjetas de estudio generadas automáticamente.",
                book.cards.len()
            )
        );
        assert!((30..=40).contains(&book.cards.len()));
        assert_eq!(book.category, Category::DesarrolloPersonal);
        assert_eq!(book.pages.len(), 1);
    }

    #[test]
    fn tasks_come_from_actions() {
        let book = pipeline().process_at(&sample(), "T", "A", 9).unwrap();
        assert!(!book.tasks.is_empty());
        assert!(book.tasks.len() <= MAX_TASKS);
        assert_eq!(book.tasks[0].id, "t-task-0-9");
        assert!(book.tasks.iter().all(|t| !t.completed));
    }

    #[test]
    fn blank_title_gets_default() {
        let book = pipeline().process_at(&sample(), "  ", "A", 1).unwrap();
        assert_eq!(book.title, DEFAULT_TITLE);
    }

    #[test]
    fn serialized_fields_are_camel_case() {
        let book = pipeline().process_at(&sample(), "T", "A", 1).unwrap();
        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("totalCharacters").is_some());
        assert_eq!(json["category"], "desarrollo-personal");
        assert_eq!(json["tasks"][0]["completed"], false);
    }
}
