//! Frequency-weighted keyword ranking.
//!
//! A deliberately simple term-frequency score with two boosts: long words look
//! rarer (`× 1.5` above seven characters) and words seen more than three times
//! are salient (`× 1.3`). The ranking is reproducible byte-for-byte: ties keep
//! the order in which words first appear.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::char_len;
use super::lexicon::StopWords;

/// Tokens must be longer than this many characters.
const MIN_WORD_CHARS: usize = 4;
/// Words longer than this get the length bonus.
const LONG_WORD_CHARS: usize = 7;
const LENGTH_BONUS: f64 = 1.5;
/// Words seen more often than this get the repetition bonus.
const REPEAT_THRESHOLD: usize = 3;
const REPEAT_BONUS: f64 = 1.3;

/// A ranked significant word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Lowercase word.
    pub word: String,
    /// Number of occurrences in the text.
    pub frequency: usize,
    /// `frequency × length bonus × repetition bonus`.
    pub score: f64,
}

impl Keyword {
    /// Whether `sentence` mentions this keyword (case-insensitive).
    pub fn appears_in(&self, sentence: &str) -> bool {
        sentence.to_lowercase().contains(&self.word)
    }
}

/// Score one word given its frequency.
pub fn score(word: &str, frequency: usize) -> f64 {
    let length_bonus = if char_len(word) > LONG_WORD_CHARS {
        LENGTH_BONUS
    } else {
        1.0
    };
    let repeat_bonus = if frequency > REPEAT_THRESHOLD {
        REPEAT_BONUS
    } else {
        1.0
    };
    frequency as f64 * length_bonus * repeat_bonus
}

/// Rank the significant words of `text`, best first, at most `max_keywords`.
pub fn extract_keywords(text: &str, stop_words: &StopWords, max_keywords: usize) -> Vec<Keyword> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();

    // First-seen order is kept in `order`; counts live in the map.
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in cleaned.split_whitespace() {
        if char_len(word) <= MIN_WORD_CHARS || stop_words.contains(word) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut ranked: Vec<Keyword> = order
        .into_iter()
        .map(|word| {
            let frequency = counts[word];
            Keyword {
                word: word.to_string(),
                frequency,
                score: score(word, frequency),
            }
        })
        .collect();

    // `sort_by` is stable, so equal scores stay in first-seen order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(max_keywords);
    ranked
}
