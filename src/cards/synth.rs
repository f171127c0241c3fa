//! Ordered card assembly.
//!
//! Cards are appended in a fixed priority order: overview, keyword concepts,
//! chapters, definitions, quotes, questions and actions. When that leaves the
//! deck short of `min_cards`, three fill passes top it up: distributed key
//! paragraphs, unused keywords as vocabulary and finally cycled sentences.
//! The deck is cut to `max_cards` at the end.

use std::collections::HashSet;

use super::{CHAPTER_ICON, Card, CardKind};
use crate::config::PipelineConfig;
use crate::extract::{ExtractionContext, Extractions, summarize_sentences};
use crate::text::{capitalize_first, slugify, truncate_chars, truncate_with_ellipsis};

const CONCEPT_KEYWORDS: usize = 10;
const CONCEPT_SENTENCES: usize = 2;
const MAX_CHAPTER_CARDS: usize = 8;
const MAX_QUOTE_CARDS: usize = 8;
const MAX_QUESTION_CARDS: usize = 10;
const MAX_ACTION_CARDS: usize = 8;
const QUESTION_TITLE_CHARS: usize = 50;
const PARAGRAPH_TITLE_KEYWORDS: usize = 2;

/// Used when the text has no usable sentence at all.
pub const PLACEHOLDER_CONTENT: &str = "Contenido del libro para estudio.";

/// Slug used when the title has no ASCII letters or digits.
const FALLBACK_SLUG: &str = "libro";

/// Builds the card deck for one book.
pub struct CardSynthesizer<'c> {
    config: &'c PipelineConfig,
    title: String,
    slug: String,
    timestamp: u64,
    cards: Vec<Card>,
}

impl<'c> CardSynthesizer<'c> {
    pub fn new(config: &'c PipelineConfig, title: &str, timestamp: u64) -> Self {
        let slug = match slugify(title) {
            s if s.is_empty() => FALLBACK_SLUG.to_string(),
            s => s,
        };
        Self {
            config,
            title: title.trim().to_string(),
            slug,
            timestamp,
            cards: Vec::new(),
        }
    }

    /// Run every assembly step and return the deck.
    pub fn synthesize(
        mut self,
        ctx: &ExtractionContext<'_>,
        paragraphs: &[String],
        found: &Extractions,
    ) -> Vec<Card> {
        let concept_words = self.primary_cards(ctx, found);
        let primary = self.cards.len();

        if self.short() {
            self.paragraph_fill(ctx, paragraphs);
        }
        if self.short() {
            self.vocabulary_fill(ctx, &concept_words);
        }
        self.sentence_fill(ctx);

        self.cards.truncate(self.config.max_cards);
        tracing::debug!(
            primary,
            filled = self.cards.len().saturating_sub(primary),
            total = self.cards.len(),
            "cards synthesized"
        );
        self.cards
    }

    fn short(&self) -> bool {
        self.cards.len() < self.config.min_cards
    }

    fn push(&mut self, kind: CardKind, title: &str, content: &str) -> &mut Card {
        let id = format!("{}-card-{}-{}", self.slug, self.cards.len(), self.timestamp);
        self.cards.push(Card::new(id, kind, title, content));
        let last = self.cards.len() - 1;
        &mut self.cards[last]
    }

    fn clip<'s>(&self, s: &'s str) -> &'s str {
        truncate_chars(s, self.config.card_content_chars)
    }

    // ── Primary cards ───────────────────────────────────────────────────

    /// Steps that draw on extractions. Returns the keywords used as concepts.
    fn primary_cards(&mut self, ctx: &ExtractionContext<'_>, found: &Extractions) -> HashSet<String> {
        let overview = summarize_sentences(ctx.sentences, ctx.text, self.config.summary_chars);
        let title = format!("Resumen: {}", self.title);
        self.push(CardKind::Summary, &title, &overview);

        let mut concept_words = HashSet::new();
        for keyword in ctx.keywords.iter().take(CONCEPT_KEYWORDS) {
            let relevant: Vec<&str> = ctx
                .sentences_with(&keyword.word)
                .take(CONCEPT_SENTENCES)
                .collect();
            if relevant.is_empty() {
                continue;
            }
            let content = self.clip(&relevant.join(" ")).to_string();
            self.push(CardKind::Concept, &capitalize_first(&keyword.word), &content);
            concept_words.insert(keyword.word.clone());
        }

        for chapter in found.chapters.iter().take(MAX_CHAPTER_CARDS) {
            let card = self.push(CardKind::Summary, &chapter.title, &chapter.summary);
            card.icon = CHAPTER_ICON.to_string();
        }

        for def in &found.definitions {
            let content = self.clip(&def.definition).to_string();
            self.push(CardKind::Definition, &def.term, &content);
        }

        for (i, quote) in found.quotes.iter().take(MAX_QUOTE_CARDS).enumerate() {
            let content = self.clip(quote).to_string();
            self.push(CardKind::Quote, &format!("Cita {}", i + 1), &content);
        }

        for q in found.questions.iter().take(MAX_QUESTION_CARDS) {
            let title = format!("{}...", truncate_chars(&q.question, QUESTION_TITLE_CHARS));
            let content = format!("Pregunta: {}\n\nRespuesta: {}", q.question, q.answer);
            self.push(CardKind::Question, &title, &content);
        }

        for (i, action) in found.actions.iter().take(MAX_ACTION_CARDS).enumerate() {
            let content = self.clip(action).to_string();
            self.push(CardKind::Action, &format!("Acción {}", i + 1), &content);
        }

        concept_words
    }

    // ── Fill passes ─────────────────────────────────────────────────────

    /// Key paragraphs spread evenly over the book.
    fn paragraph_fill(&mut self, ctx: &ExtractionContext<'_>, paragraphs: &[String]) {
        if paragraphs.is_empty() {
            return;
        }
        let needed = self.config.min_cards - self.cards.len();
        let step = (paragraphs.len() / needed).max(1);

        for para in paragraphs.iter().step_by(step) {
            if !self.short() {
                break;
            }
            let named: Vec<String> = ctx
                .keywords
                .iter()
                .filter(|k| k.appears_in(para))
                .take(PARAGRAPH_TITLE_KEYWORDS)
                .map(|k| capitalize_first(&k.word))
                .collect();
            let title = if named.is_empty() {
                format!("Punto Clave {}", self.cards.len() + 1)
            } else {
                named.join(" & ")
            };
            let content = truncate_with_ellipsis(para, self.config.keypoint_chars);
            self.push(CardKind::Keypoint, &title, &content);
        }
    }

    /// Keywords that did not get a concept card.
    fn vocabulary_fill(&mut self, ctx: &ExtractionContext<'_>, concept_words: &HashSet<String>) {
        for keyword in ctx.keywords {
            if !self.short() {
                break;
            }
            if concept_words.contains(&keyword.word) {
                continue;
            }
            let relevant: Vec<&str> = ctx
                .sentences_with(&keyword.word)
                .take(CONCEPT_SENTENCES)
                .collect();
            let content = if relevant.is_empty() {
                format!(
                    "Concepto importante del libro: {}. Este término aparece frecuentemente y es clave para entender el contenido.",
                    keyword.word
                )
            } else {
                self.clip(&relevant.join(" ")).to_string()
            };
            self.push(CardKind::Vocabulary, &capitalize_first(&keyword.word), &content);
        }
    }

    /// Cycle through sentences until the minimum is met.
    fn sentence_fill(&mut self, ctx: &ExtractionContext<'_>) {
        while self.short() {
            let n = self.cards.len();
            let content = match ctx.sentences.len() {
                0 => PLACEHOLDER_CONTENT.to_string(),
                count => self.clip(&ctx.sentences[n % count]).to_string(),
            };
            self.push(CardKind::Keypoint, &format!("Punto de Estudio {}", n + 1), &content);
        }
    }
}
