//! Study question generation.
//!
//! One definition question per top keyword, answered with the first sentences
//! that mention it, followed by a few generic comprehension questions answered
//! from sentences on the matching topic.

use std::sync::LazyLock;

use regex::Regex;

use super::{ExtractedItem, ExtractionContext, Extractor};
use crate::text::{char_len, truncate_chars};

const MAX_QUESTIONS: usize = 25;
/// Only the best keywords get a question.
const KEYWORD_QUESTIONS: usize = 20;
const ANSWER_SENTENCES: usize = 2;
const ANSWER_CHARS: usize = 300;
/// Answers at or below this length are replaced by a generic line.
const MIN_ANSWER_CHARS: usize = 50;

/// Generic questions and the topic that answers them.
static GENERIC_QUESTIONS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        (
            "¿Cuál es la idea principal del libro?",
            r"(?i)idea principal|tema central|prop[oó]sito|objetivo",
        ),
        (
            "¿Qué enseña el autor sobre el éxito?",
            r"(?i)[eé]xito|logro|meta|objetivo",
        ),
        (
            "¿Cómo se aplica este conocimiento?",
            r"(?i)aplicar|implementar|pr[aá]ctica|ejercicio",
        ),
        (
            "¿Cuáles son los principios fundamentales?",
            r"(?i)principio|fundamento|base|esencial",
        ),
    ]
    .into_iter()
    .map(|(q, p)| (q, Regex::new(p).unwrap()))
    .collect()
});

/// Builds question/answer pairs from keywords and topic sentences.
pub struct QuestionExtractor;

impl Extractor for QuestionExtractor {
    fn name(&self) -> &'static str {
        "questions"
    }

    fn extract(&self, ctx: &ExtractionContext<'_>) -> Vec<ExtractedItem> {
        let mut questions = Vec::new();

        for keyword in ctx.keywords.iter().take(KEYWORD_QUESTIONS) {
            let relevant: Vec<&str> = ctx
                .sentences_with(&keyword.word)
                .take(ANSWER_SENTENCES)
                .collect();
            if relevant.is_empty() {
                continue;
            }
            let joined = relevant.join(" ");
            let answer = truncate_chars(&joined, ANSWER_CHARS);
            let answer = if char_len(answer) > MIN_ANSWER_CHARS {
                answer.to_string()
            } else {
                format!("Concepto clave relacionado con {}.", keyword.word)
            };
            questions.push(ExtractedItem::Question {
                question: format!(
                    "¿Qué es o qué significa \"{}\" en el contexto del libro?",
                    keyword.word
                ),
                answer,
            });
        }

        for (question, topic) in GENERIC_QUESTIONS.iter() {
            let relevant: Vec<&str> = ctx
                .sentences
                .iter()
                .filter(|s| topic.is_match(s))
                .take(ANSWER_SENTENCES)
                .map(String::as_str)
                .collect();
            if relevant.is_empty() {
                continue;
            }
            questions.push(ExtractedItem::Question {
                question: (*question).to_string(),
                answer: truncate_chars(&relevant.join(" "), ANSWER_CHARS).to_string(),
            });
        }

        questions.truncate(MAX_QUESTIONS);
        questions
    }
}
