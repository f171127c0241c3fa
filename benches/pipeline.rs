//! Benchmarks for the study pipeline stages.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use studydeck::config::PipelineConfig;
use studydeck::paginate::paginate;
use studydeck::pipeline::StudyPipeline;
use studydeck::text::lexicon::StopWords;
use studydeck::text::{detect_chapters, extract_keywords, extract_sentences, normalize};

const PARAGRAPH: &str = "La constancia diaria transforma pequeños esfuerzos en resultados \
    extraordinarios. Un hábito es una conducta repetida que termina ejecutándose de forma \
    automática. Debes anotar cada mañana las tres tareas más importantes de la jornada. \
    La disciplina consiste en mantener el rumbo cuando la motivación desaparece.";

fn book(paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|i| {
            if i % 25 == 0 {
                format!("Capítulo {}\n\n{PARAGRAPH}", i / 25 + 1)
            } else {
                PARAGRAPH.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn bench_text(c: &mut Criterion) {
    let text = normalize(&book(250));
    let stop_words = StopWords::default();

    c.bench_function("keywords_80k", |b| {
        b.iter(|| black_box(extract_keywords(&text, &stop_words, 60)))
    });
    c.bench_function("sentences_80k", |b| {
        b.iter(|| black_box(extract_sentences(&text)))
    });
    c.bench_function("chapters_80k", |b| {
        b.iter(|| black_box(detect_chapters(&text)))
    });
    c.bench_function("paginate_80k", |b| {
        b.iter(|| black_box(paginate(&text, 2000, 500)))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = StudyPipeline::new(PipelineConfig::default()).unwrap();
    let small = book(10);
    let large = book(250);

    c.bench_function("process_3k", |b| {
        b.iter(|| black_box(pipeline.process_at(&small, "Libro", "Autor", 1).unwrap()))
    });
    c.bench_function("process_80k", |b| {
        b.iter(|| black_box(pipeline.process_at(&large, "Libro", "Autor", 1).unwrap()))
    });
}

criterion_group!(benches, bench_text, bench_pipeline);
criterion_main!(benches);
