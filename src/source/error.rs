//! Rich diagnostic error types for book text sources.

use miette::Diagnostic;
use thiserror::Error;

/// Errors from reading a book file into text.
#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("unsupported book format: \"{format}\"")]
    #[diagnostic(
        code(studydeck::source::unsupported_format),
        help(
            "Supported formats are pdf, epub, html and plain text (.txt, .md). \
             Rename the file with a matching extension or convert it first."
        )
    )]
    UnsupportedFormat { format: String },

    #[error("parse error in {format} book: {message}")]
    #[diagnostic(
        code(studydeck::source::parse_error),
        help("The file could not be parsed. Verify it is a valid {format} file and not corrupted.")
    )]
    ParseError { format: String, message: String },

    #[error("empty document: no text extracted from \"{origin}\"")]
    #[diagnostic(
        code(studydeck::source::empty),
        help(
            "The file contains no extractable text. Scanned PDFs need OCR \
             before they can be turned into study cards."
        )
    )]
    EmptyDocument { origin: String },

    #[error("failed to read \"{path}\"")]
    #[diagnostic(
        code(studydeck::source::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for text source results.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
