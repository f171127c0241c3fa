// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # studydeck
//!
//! A deterministic, extractive engine that turns the plain text of a book into
//! a bounded deck of study cards, a topical category and reading pages. No
//! external service is involved: every card is built from keyword statistics,
//! sentence and chapter segmentation and a handful of pattern-based extractors.
//!
//! ## Architecture
//!
//! - **Text** (`text`): normalization, stop words, keyword ranking, segmentation
//! - **Extraction** (`extract`): definitions, quotes, questions, actions, chapter summaries
//! - **Cards** (`cards`): ordered, length-bounded card assembly with fill passes
//! - **Category** (`category`): keyword-bucket classifier over eight labels
//! - **Pages** (`paginate`): paragraph-aligned reading chunks
//! - **Pipeline** (`pipeline`): the above combined into one [`pipeline::StudyBook`]
//! - **Sources** (`source`): PDF, EPUB, HTML and plain-text files to raw text
//!
//! ## Library usage
//!
//! ```no_run
//! use studydeck::config::PipelineConfig;
//! use studydeck::pipeline::StudyPipeline;
//!
//! let pipeline = StudyPipeline::new(PipelineConfig::default()).unwrap();
//! let text = std::fs::read_to_string("libro.txt").unwrap();
//! let book = pipeline.process(&text, "Hábitos Atómicos", "James Clear").unwrap();
//! println!("{} cards in {}", book.cards.len(), book.category);
//! ```

pub mod cards;
pub mod category;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod paginate;
pub mod pipeline;
pub mod source;
pub mod text;
