//! Rich diagnostic error types for the studydeck engine.
//!
//! The card pipeline itself is total: extractors and segmenters degrade to
//! fallbacks instead of failing. The only rejection a caller sees from
//! processing is [`StudyError::InputTooShort`]; everything else here comes from
//! configuration handling and the surrounding I/O.

use miette::Diagnostic;
use thiserror::Error;

use crate::source::SourceError;

/// Top-level error type for the studydeck engine.
#[derive(Debug, Error, Diagnostic)]
pub enum StudyError {
    #[error("insufficient text: {length} characters after normalization, at least {minimum} required")]
    #[diagnostic(
        code(studydeck::input_too_short),
        help(
            "Not enough text could be extracted from the file. A PDF made of \
             scanned images has no text layer; try a TXT or EPUB edition instead."
        )
    )]
    InputTooShort { length: usize, minimum: usize },

    #[error("invalid pipeline configuration: {message}")]
    #[diagnostic(
        code(studydeck::config::invalid),
        help(
            "Check the card bounds (1 <= min_cards <= max_cards) and the page \
             sizes (chunk_size >= 200, page_lookback < chunk_size)."
        )
    )]
    InvalidConfig { message: String },

    #[error("failed to read config file \"{path}\"")]
    #[diagnostic(
        code(studydeck::config::read),
        help("Check that the file exists and is readable.")
    )]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file \"{path}\": {message}")]
    #[diagnostic(
        code(studydeck::config::parse),
        help(
            "The configuration must be valid TOML. Generate a commented default \
             with `studydeck config init <path>` and edit from there."
        )
    )]
    ConfigParse { path: String, message: String },

    #[error("serialization error: {message}")]
    #[diagnostic(
        code(studydeck::serialize),
        help("The study deck could not be rendered in the requested output format.")
    )]
    Serialize { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Source(#[from] SourceError),

    #[error("I/O error: {source}")]
    #[diagnostic(
        code(studydeck::io),
        help("A filesystem operation failed. Check file paths and permissions.")
    )]
    Io {
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for StudyError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

/// Convenience alias for studydeck results.
pub type StudyResult<T> = std::result::Result<T, StudyError>;
