//! End-to-end tests for the study pipeline.
//!
//! These run whole books through `StudyPipeline` and check the guarantees a
//! caller relies on: deck bounds, card length limits, determinism, page
//! coverage and keyword hygiene.

use studydeck::category::Category;
use studydeck::config::PipelineConfig;
use studydeck::error::StudyError;
use studydeck::pipeline::StudyPipeline;
use studydeck::text::lexicon::{StopWords, is_stop_word};
use studydeck::text::{char_len, detect_chapters, extract_keywords, normalize};

const SENTENCES: &[&str] = &[
    "La constancia diaria transforma pequeños esfuerzos en resultados extraordinarios.",
    "Un hábito es una conducta repetida que termina ejecutándose de forma automática.",
    "Debes anotar cada mañana las tres tareas más importantes de la jornada.",
    "La productividad depende más de la energía disponible que del tiempo invertido.",
    "Para lograr metas ambiciosas conviene dividirlas en pasos pequeños y medibles.",
    "El entorno influye en las decisiones mucho más de lo que solemos admitir.",
    "La disciplina consiste en mantener el rumbo cuando la motivación desaparece.",
    "Cada recaída ofrece información valiosa sobre los obstáculos que aún persisten.",
    "Reducir la fricción de las buenas conductas facilita que se repitan solas.",
    "La identidad personal se construye con cada pequeña victoria acumulada.",
];

fn pipeline() -> StudyPipeline {
    StudyPipeline::new(PipelineConfig::default()).unwrap()
}

/// Deterministic book-like text of roughly `target_chars` characters,
/// five sentences per paragraph, without chapter headings.
fn book_text(target_chars: usize) -> String {
    let mut text = String::new();
    let mut i = 0usize;
    while char_len(&text) < target_chars {
        if i > 0 {
            text.push_str(if i % 5 == 0 { "\n\n" } else { " " });
        }
        text.push_str(SENTENCES[i % SENTENCES.len()]);
        i += 1;
    }
    text
}

fn non_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

// ── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn empty_input_rejected() {
    for raw in ["", "   \n\n  ", "Muy corto."] {
        let err = pipeline().process_at(raw, "Libro", "Autor", 1).unwrap_err();
        assert!(matches!(err, StudyError::InputTooShort { minimum: 100, .. }));
    }
}

#[test]
fn long_text_without_headings_uses_synthetic_chapters() {
    let text = book_text(50_000);
    let chapters = detect_chapters(&normalize(&text));
    assert_eq!(chapters.len(), 10);
    assert!(chapters.iter().all(|c| c.synthetic));

    let book = pipeline().process_at(&text, "Sin Capítulos", "Autor", 1).unwrap();
    assert!((30..=40).contains(&book.cards.len()));
    assert!(book.cards.iter().any(|c| c.title == "Sección 1"));
}

#[test]
fn repeated_word_gets_repetition_bonus() {
    let text = normalize(&"El éxito es el resultado de hábitos diarios. ".repeat(5));
    let keywords = extract_keywords(&text, &StopWords::default(), 60);
    let habits = keywords.iter().find(|k| k.word == "hábitos").unwrap();
    assert_eq!(habits.frequency, 5);
    assert!((habits.score - 6.5).abs() < 1e-9);
}

#[test]
fn short_text_padded_to_exact_minimum() {
    let text = book_text(400);
    assert!(char_len(&text) >= 400 && char_len(&text) < 500);
    let book = pipeline().process_at(&text, "Breve", "Autor", 1).unwrap();
    assert_eq!(book.cards.len(), 30);
}

#[test]
fn habits_book_categorized_as_personal_development() {
    let text = format!(
        "{}\n\nEl hábito de la disciplina multiplica la productividad de cualquier persona.",
        book_text(2_000)
    );
    let book = pipeline().process_at(&text, "Atomic Habits", "James Clear", 1).unwrap();
    assert_eq!(book.category, Category::DesarrolloPersonal);
}

// ── Properties ──────────────────────────────────────────────────────────

#[test]
fn deck_size_always_within_bounds() {
    for size in [150, 900, 5_000, 20_000, 80_000] {
        let book = pipeline().process_at(&book_text(size), "Libro", "Autor", 1).unwrap();
        assert!(
            (30..=40).contains(&book.cards.len()),
            "{size} chars gave {} cards",
            book.cards.len()
        );
    }
}

#[test]
fn custom_bounds_respected() {
    let config = PipelineConfig {
        min_cards: 5,
        max_cards: 12,
        ..PipelineConfig::default()
    };
    let pipeline = StudyPipeline::new(config).unwrap();
    for size in [300, 30_000] {
        let book = pipeline.process_at(&book_text(size), "Libro", "Autor", 1).unwrap();
        assert!((5..=12).contains(&book.cards.len()));
    }
}

#[test]
fn same_input_same_output() {
    let text = book_text(12_000);
    let a = pipeline().process_at(&text, "Libro", "Autor", 77).unwrap();
    let b = pipeline().process_at(&text, "Libro", "Autor", 77).unwrap();
    assert_eq!(a, b);
}

#[test]
fn card_titles_and_content_bounded() {
    let mut text = book_text(30_000);
    text.push_str("\n\n");
    text.push_str(&"Una oración interminable sin punto final que sigue y sigue ".repeat(40));
    let book = pipeline().process_at(&text, &"Título larguísimo ".repeat(10), "Autor", 1).unwrap();
    for card in &book.cards {
        assert!(char_len(&card.title) <= 60, "title too long: {}", card.title);
        assert!(char_len(&card.content) <= 350, "content too long: {}", card.content);
    }
}

#[test]
fn card_ids_unique() {
    let book = pipeline().process_at(&book_text(20_000), "Libro", "Autor", 3).unwrap();
    let mut ids: Vec<&str> = book.cards.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), book.cards.len());
}

#[test]
fn pages_cover_all_text() {
    let mut text = book_text(25_000);
    text.push_str("\n\n");
    text.push_str(&"x".repeat(4_500));
    let book = pipeline().process_at(&text, "Libro", "Autor", 1).unwrap();

    assert!(!book.pages.is_empty());
    assert!(book.pages.iter().all(|p| char_len(p) <= 2000));
    assert_eq!(
        non_whitespace(&book.pages.concat()),
        non_whitespace(&normalize(&text))
    );
}

#[test]
fn category_is_one_of_the_fixed_labels() {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    for (title, size) in [("Padre Rico", 3_000), ("Scrum", 1_000), ("", 500)] {
        let book = pipeline().process_at(&book_text(size), title, "Autor", 1).unwrap();
        let json = serde_json::to_value(&book).unwrap();
        let label = json["category"].as_str().unwrap();
        assert!(labels.contains(&label));
    }
}

#[test]
fn keywords_exclude_stop_words_and_short_tokens() {
    let text = normalize(&book_text(15_000));
    let keywords = extract_keywords(&text, &StopWords::default(), 60);
    assert!(!keywords.is_empty() && keywords.len() <= 60);
    for kw in &keywords {
        assert!(char_len(&kw.word) > 4, "short keyword {}", kw.word);
        assert!(!is_stop_word(&kw.word), "stop word {}", kw.word);
    }
    assert!(keywords.windows(2).all(|w| w[0].score >= w[1].score));
}
