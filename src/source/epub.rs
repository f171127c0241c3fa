//! EPUB text via `epub`, with each spine item's XHTML read by `scraper`.

use std::io::Cursor;

use scraper::Html;

use super::html::block_text;
use super::{ContentFormat, SourceError, SourceResult, SourceText, TextSource};

pub struct EpubSource;

impl TextSource for EpubSource {
    fn format(&self) -> ContentFormat {
        ContentFormat::Epub
    }

    fn extract(&self, data: &[u8]) -> SourceResult<SourceText> {
        let cursor = Cursor::new(data.to_vec());
        let mut doc =
            epub::doc::EpubDoc::from_reader(cursor).map_err(|e| SourceError::ParseError {
                format: "epub".into(),
                message: e.to_string(),
            })?;

        let title = doc.mdata("title").map(|m| m.value.clone());
        let author = doc.mdata("creator").map(|m| m.value.clone());

        let mut spine_text = Vec::new();
        for chapter in 0..doc.get_num_chapters() {
            doc.set_current_chapter(chapter);
            let Some((content, _mime)) = doc.get_current_str() else {
                continue;
            };
            let text = block_text(&Html::parse_document(&content));
            if !text.is_empty() {
                spine_text.push(text);
            }
        }

        if spine_text.is_empty() {
            return Err(SourceError::EmptyDocument {
                origin: "(epub)".into(),
            });
        }

        Ok(SourceText {
            text: spine_text.join("\n\n"),
            title,
            author,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_epub_is_a_parse_error() {
        let result = EpubSource.extract(b"This is not an EPUB");
        assert!(matches!(result, Err(SourceError::ParseError { .. })));
    }
}
