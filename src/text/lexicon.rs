//! Fixed word tables: the bilingual (Spanish/English) stop-word set and
//! diacritic folding used for accent-insensitive matching.

use std::collections::HashSet;
use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const SPANISH: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "de", "del", "al", "a", "en",
    "con", "por", "para", "es", "son", "fue", "ser", "tiene", "han", "que", "se", "no",
    "si", "y", "o", "pero", "como", "mas", "más", "muy", "su", "sus", "este", "esta",
    "estos", "estas", "todo", "nada", "algo", "cuando", "donde", "porque", "aunque",
    "durante", "entre", "sobre", "hasta", "desde", "hacia", "segun", "según", "sin",
    "sino", "mientras", "cada", "cual", "cuál", "tambien", "también", "ademas", "además",
    "otro", "otros", "otra", "otras", "puede", "pueden", "hacer", "hace", "hacen",
    "forma", "parte", "tipo", "manera", "caso", "casos", "vez", "veces", "ano", "anos",
    "año", "años", "dia", "dias", "día", "días", "persona", "personas", "cosa", "cosas",
    "hecho", "hechos", "lugar", "lugares", "tiempo", "momento", "nuestro", "nuestra",
    "nuestros", "nuestras", "ellos", "ellas", "usted", "ustedes", "siempre", "entonces",
    "tienen", "estaba", "estar", "están", "había", "habia", "sobre", "todos", "todas",
    "mismo", "misma", "mucho", "mucha", "muchos", "muchas", "puedes", "donde", "dónde",
];

const ENGLISH: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
    "by", "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must",
    "shall", "can", "it", "its", "this", "that", "these", "those", "i", "you", "he",
    "she", "we", "they", "what", "which", "who", "where", "when", "why", "how", "all",
    "each", "every", "both", "few", "more", "most", "other", "some", "such", "not",
    "only", "own", "same", "so", "than", "too", "very", "just", "also", "now", "here",
    "there", "then", "any", "about", "into", "their", "there", "which", "would", "after",
    "before", "being", "because", "while", "through", "these", "those", "other",
];

/// The built-in stop-word set, loaded once.
static BASE_STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SPANISH.iter().chain(ENGLISH).copied().collect());

/// Stop-word lookup: the built-in set plus caller-supplied extras.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    extra: HashSet<String>,
}

impl StopWords {
    /// Extend the built-in set with additional words (matched lowercase).
    pub fn with_extra<S: AsRef<str>>(extra: &[S]) -> Self {
        Self {
            extra: extra
                .iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Whether `word` (already lowercase) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        BASE_STOP_WORDS.contains(word) || self.extra.contains(word)
    }
}

/// Whether `word` is in the built-in set.
pub fn is_stop_word(word: &str) -> bool {
    BASE_STOP_WORDS.contains(word)
}

/// Strip combining marks after canonical decomposition: `éxito` → `exito`.
pub fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
