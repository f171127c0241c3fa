//! Book files to raw text.
//!
//! Each supported format (PDF, EPUB, HTML, plain text) implements
//! [`TextSource`]. The card pipeline never sees bytes; it receives the plain
//! text and the title found here.

pub mod epub;
pub mod error;
pub mod html;
pub mod pdf;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::{SourceError, SourceResult};

/// Supported book formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Pdf,
    Epub,
    Html,
    PlainText,
}

impl ContentFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentFormat::Pdf => "pdf",
            ContentFormat::Epub => "epub",
            ContentFormat::Html => "html",
            ContentFormat::PlainText => "text",
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text pulled out of a book file, with whatever metadata the format carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceText {
    pub text: String,
    pub title: Option<String>,
    pub author: Option<String>,
}

/// A format-specific text extractor.
pub trait TextSource {
    /// Extract the book text from raw file bytes.
    fn extract(&self, data: &[u8]) -> SourceResult<SourceText>;

    /// The format this source handles.
    fn format(&self) -> ContentFormat;
}

/// The extractor for a format.
pub fn source_for(format: ContentFormat) -> Box<dyn TextSource> {
    match format {
        ContentFormat::Pdf => Box::new(pdf::PdfSource),
        ContentFormat::Epub => Box::new(epub::EpubSource),
        ContentFormat::Html => Box::new(html::HtmlSource),
        ContentFormat::PlainText => Box::new(PlainTextSource),
    }
}

/// Detect the format from a file extension.
pub fn detect_format(path: &Path) -> Option<ContentFormat> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "pdf" => Some(ContentFormat::Pdf),
        "epub" => Some(ContentFormat::Epub),
        "html" | "htm" | "xhtml" => Some(ContentFormat::Html),
        "txt" | "text" | "md" => Some(ContentFormat::PlainText),
        _ => None,
    }
}

/// Read a book file, detect its format and extract its text.
///
/// A book without an embedded title is named after its file stem.
pub fn read_book(path: &Path) -> SourceResult<SourceText> {
    let format = detect_format(path).ok_or_else(|| SourceError::UnsupportedFormat {
        format: path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "(none)".into()),
    })?;

    let data = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut book = source_for(format).extract(&data).map_err(|e| match e {
        SourceError::EmptyDocument { .. } => SourceError::EmptyDocument {
            origin: path.display().to_string(),
        },
        other => other,
    })?;

    if book.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
        book.title = path
            .file_stem()
            .map(|s| s.to_string_lossy().replace(['_', '-'], " "));
    }

    tracing::debug!(
        path = %path.display(),
        %format,
        chars = book.text.chars().count(),
        "book text extracted"
    );
    Ok(book)
}

/// Plain text, decoded lossily as UTF-8.
struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn format(&self) -> ContentFormat {
        ContentFormat::PlainText
    }

    fn extract(&self, data: &[u8]) -> SourceResult<SourceText> {
        let text = String::from_utf8_lossy(data).into_owned();
        if text.trim().is_empty() {
            return Err(SourceError::EmptyDocument {
                origin: "(text)".into(),
            });
        }
        Ok(SourceText {
            text,
            ..Default::default()
        })
    }
}
