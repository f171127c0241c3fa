//! Rendering a [`StudyBook`] for people and for other programs.
//!
//! JSON is the full record. Markdown is a printable deck: a title page
//! followed by one section per card with its position in the deck.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StudyError, StudyResult};
use crate::pipeline::StudyBook;

/// Output format of a rendered deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Markdown,
}

impl ExportFormat {
    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(format!("unknown export format \"{other}\" (expected json or markdown)")),
        }
    }
}

/// Render `book` in `format`.
pub fn render(book: &StudyBook, format: ExportFormat) -> StudyResult<String> {
    match format {
        ExportFormat::Json => to_json(book),
        ExportFormat::Markdown => Ok(to_markdown(book)),
    }
}

/// Pretty-printed JSON of the whole record.
pub fn to_json(book: &StudyBook) -> StudyResult<String> {
    serde_json::to_string_pretty(book).map_err(|e| StudyError::Serialize {
        message: e.to_string(),
    })
}

/// Printable Markdown deck.
pub fn to_markdown(book: &StudyBook) -> String {
    let total = book.cards.len();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "# {}\n", book.title);
    let _ = writeln!(out, "*{}*\n", book.author);
    let _ = writeln!(out, "- Categoría: `{}`", book.category);
    let _ = writeln!(out, "- Tarjetas: {total}");
    let _ = writeln!(out, "- Páginas de lectura: {}\n", book.pages.len());
    let _ = writeln!(out, "{}", book.description);

    for (i, card) in book.cards.iter().enumerate() {
        let _ = writeln!(out, "\n---\n");
        let _ = writeln!(out, "## {} {}\n", card.icon, card.title);
        let _ = writeln!(out, "{}\n", card.content);
        let _ = writeln!(out, "*{}/{total}*", i + 1);
    }

    if !book.tasks.is_empty() {
        let _ = writeln!(out, "\n---\n\n## Tareas\n");
        for task in &book.tasks {
            let mark = if task.completed { "x" } else { " " };
            let _ = writeln!(out, "- [{mark}] {}", task.text);
        }
    }
    out
}

/// Pages for the reader; when the book has none, one page per card.
pub fn reader_pages(book: &StudyBook) -> Vec<String> {
    if !book.pages.is_empty() {
        return book.pages.clone();
    }
    book.cards
        .iter()
        .map(|card| format!("{} {}\n\n{}", card.icon, card.title, card.content))
        .collect()
}
