//! Definition extraction: "X es Y.", "se define X como Y.", "concepto: Y.".

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{ExtractedItem, ExtractionContext, Extractor};
use crate::text::lexicon::is_stop_word;
use crate::text::{capitalize_first, char_len};

const MAX_DEFINITIONS: usize = 20;
const MIN_TERM_CHARS: usize = 3;
const MIN_DEFINITION_CHARS: usize = 20;
/// Words of a labelled definition used as its term.
const LABELLED_TERM_WORDS: usize = 5;

/// `Term [word] es|son|significa|... definition.`
static RE_COPULA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(\p{L}+(?:\s+\p{Ll}+)?)\s+(?i:es|son|significa|se define como|se refiere a|consiste en)\s+([^.]+\.)",
    )
    .unwrap()
});

/// `se define|conoce|denomina|llama X como Y.`
static RE_NAMED_AS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bse\s+(?:define|conoce|denomina|llama)\s+([^.]+?)\s+como\s+([^.]+\.)").unwrap()
});

/// `Definición: Y.` / `Concepto: Y.`
static RE_LABELLED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(definici[oó]n|concepto):\s*([^.]+\.)").unwrap()
});

/// Finds definitional statements.
pub struct DefinitionExtractor;

impl Extractor for DefinitionExtractor {
    fn name(&self) -> &'static str {
        "definitions"
    }

    fn extract(&self, ctx: &ExtractionContext<'_>) -> Vec<ExtractedItem> {
        let mut found = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (re, labelled) in [(&*RE_COPULA, false), (&*RE_NAMED_AS, false), (&*RE_LABELLED, true)] {
            for caps in re.captures_iter(ctx.text) {
                if found.len() >= MAX_DEFINITIONS {
                    return found;
                }
                let (Some(term), Some(definition)) = (caps.get(1), caps.get(2)) else {
                    continue;
                };
                let definition = definition
                    .as_str()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ");
                // The label itself ("Concepto") names nothing.
                let term = if labelled {
                    leading_words(&definition)
                } else {
                    term.as_str().split_whitespace().collect::<Vec<_>>().join(" ")
                };

                if char_len(&term) <= MIN_TERM_CHARS || char_len(&definition) <= MIN_DEFINITION_CHARS {
                    continue;
                }
                let key = if labelled { &definition } else { &term };
                if !seen.insert(key.to_lowercase()) {
                    continue;
                }
                found.push(ExtractedItem::Definition {
                    term: capitalize_first(&term),
                    definition,
                });
            }
        }
        found
    }
}

/// First few words of `definition`, without trailing stop words or punctuation.
fn leading_words(definition: &str) -> String {
    let mut words: Vec<&str> = definition
        .split_whitespace()
        .take(LABELLED_TERM_WORDS)
        .map(|w| w.trim_end_matches(|c: char| !c.is_alphanumeric()))
        .collect();
    while words
        .last()
        .is_some_and(|w| w.is_empty() || is_stop_word(&w.to_lowercase()))
    {
        words.pop();
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definitions(text: &str) -> Vec<(String, String)> {
        let ctx = ExtractionContext::new(text, &[], &[], &[], 300);
        DefinitionExtractor
            .extract(&ctx)
            .into_iter()
            .map(|item| match item {
                ExtractedItem::Definition { term, definition } => (term, definition),
                other => panic!("unexpected item {other:?}"),
            })
            .collect()
    }

    #[test]
    fn copula_definition() {
        let found = definitions("El éxito es el resultado de hábitos diarios.");
        assert_eq!(
            found,
            vec![("El éxito".to_string(), "el resultado de hábitos diarios.".to_string())]
        );
    }

    #[test]
    fn named_as_definition() {
        let found = definitions("A este proceso se le conoce como la curva del olvido. Se denomina interés compuesto como el crecimiento exponencial del capital.");
        assert!(found.iter().any(|(term, def)| term == "Interés compuesto"
            && def == "el crecimiento exponencial del capital."));
    }

    #[test]
    fn labelled_definition_named_by_its_text() {
        let found = definitions("Concepto: la mentalidad de crecimiento permite aprender de los errores.");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "La mentalidad de crecimiento permite");
    }

    #[test]
    fn repeated_labels_all_kept() {
        let text = "Concepto: la mentalidad de crecimiento permite aprender de los errores. \
                    Concepto: el interés compuesto multiplica el capital con el tiempo. \
                    Definición: el hábito nace de repetir una conducta con constancia.";
        let found = definitions(text);
        let terms: Vec<&str> = found.iter().map(|(term, _)| term.as_str()).collect();
        assert_eq!(
            terms,
            vec![
                "La mentalidad de crecimiento permite",
                "El interés compuesto multiplica",
                "El hábito nace de repetir",
            ]
        );
        assert_eq!(found[1].1, "el interés compuesto multiplica el capital con el tiempo.");
    }

    #[test]
    fn short_definitions_rejected() {
        assert!(definitions("La vida es bella.").is_empty());
    }

    #[test]
    fn duplicate_terms_kept_once() {
        let text = "La disciplina es la base de todo progreso personal. La disciplina es la base de todo progreso personal.";
        assert_eq!(definitions(text).len(), 1);
    }

    #[test]
    fn capped_at_twenty() {
        let text: String = (0..40)
            .map(|i| {
                let suffix = "x".repeat(i + 1);
                format!("Término{suffix} significa una idea suficientemente larga número {i}. ")
            })
            .collect();
        assert_eq!(definitions(&text).len(), MAX_DEFINITIONS);
    }
}
