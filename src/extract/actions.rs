//! Action point extraction from obligation, step and goal phrasing.

use std::sync::LazyLock;

use regex::Regex;

use super::{ExtractedItem, ExtractionContext, Extractor};
use crate::text::char_len;

const MAX_ACTIONS: usize = 15;
const MIN_ACTION_CHARS: usize = 20;

static ACTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "debes empezar por ...", "hay que anotar ..."
        r"(?i)\b(?:debes|tiene que|hay que|necesitas|puedes|importante)\s+([^.!?]+[.!?])",
        // "Paso 1: ...", "Ejercicio: ..."
        r"(?i)\b(?:paso|ejercicio|pr[aá]ctica|actividad|acci[oó]n)\b\s*\d*[:.\s]*([^.!?]+[.!?])",
        // "para lograr ...", "cómo implementar ..."
        r"(?i)\b(?:para|c[oó]mo)\s+(?:lograr|conseguir|alcanzar|implementar)\s+([^.!?]+[.!?])",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Finds actionable instructions in the text.
pub struct ActionExtractor;

impl Extractor for ActionExtractor {
    fn name(&self) -> &'static str {
        "actions"
    }

    fn extract(&self, ctx: &ExtractionContext<'_>) -> Vec<ExtractedItem> {
        let mut actions: Vec<String> = Vec::new();

        'patterns: for re in ACTION_PATTERNS.iter() {
            for caps in re.captures_iter(ctx.text) {
                if actions.len() >= MAX_ACTIONS {
                    break 'patterns;
                }
                let action = caps[1].split_whitespace().collect::<Vec<_>>().join(" ");
                if char_len(&action) > MIN_ACTION_CHARS && !actions.contains(&action) {
                    actions.push(action);
                }
            }
        }

        actions
            .into_iter()
            .map(|text| ExtractedItem::Action { text })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(text: &str) -> Vec<String> {
        let ctx = ExtractionContext::new(text, &[], &[], &[], 300);
        ActionExtractor
            .extract(&ctx)
            .into_iter()
            .map(|item| match item {
                ExtractedItem::Action { text } => text,
                other => panic!("unexpected item {other:?}"),
            })
            .collect()
    }

    #[test]
    fn obligation_phrasing() {
        let found = actions("Para avanzar debes escribir tus metas cada mañana antes de empezar.");
        assert_eq!(found, vec!["escribir tus metas cada mañana antes de empezar.".to_string()]);
    }

    #[test]
    fn numbered_step() {
        let found = actions("Paso 3: revisa tu lista de tareas al final de la semana!");
        assert_eq!(found, vec!["revisa tu lista de tareas al final de la semana!".to_string()]);
    }

    #[test]
    fn goal_phrasing() {
        let found = actions("Veamos cómo alcanzar la libertad financiera con pequeños ahorros.");
        assert_eq!(found, vec!["la libertad financiera con pequeños ahorros.".to_string()]);
    }

    #[test]
    fn short_captures_rejected() {
        assert!(actions("Hay que irse ya.").is_empty());
    }

    #[test]
    fn words_containing_markers_do_not_match() {
        assert!(actions("Los pasos del camino fueron largos y agotadores para todos.").is_empty());
    }

    #[test]
    fn duplicates_removed_and_capped() {
        let repeated = "Debes leer veinte páginas cada día sin excepción. ".repeat(3);
        assert_eq!(actions(&repeated).len(), 1);

        let many: String = (0..30)
            .map(|i| format!("Necesitas completar la tarea número {i} del cuaderno. "))
            .collect();
        assert_eq!(actions(&many).len(), MAX_ACTIONS);
    }
}
