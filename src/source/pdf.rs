//! PDF text via `pdf-extract`.
//!
//! Page breaks come through as form feeds; normalization later turns them
//! into paragraph breaks.

use super::{ContentFormat, SourceError, SourceResult, SourceText, TextSource};

pub struct PdfSource;

impl TextSource for PdfSource {
    fn format(&self) -> ContentFormat {
        ContentFormat::Pdf
    }

    fn extract(&self, data: &[u8]) -> SourceResult<SourceText> {
        let text = pdf_extract::extract_text_from_mem(data).map_err(|e| SourceError::ParseError {
            format: "pdf".into(),
            message: e.to_string(),
        })?;

        if text.trim().is_empty() {
            return Err(SourceError::EmptyDocument {
                origin: "(pdf)".into(),
            });
        }

        Ok(SourceText {
            text,
            ..Default::default()
        })
    }
}
