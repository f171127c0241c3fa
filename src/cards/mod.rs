//! Study cards and their assembly.
//!
//! A [`Card`] is the unit the reader shows: a short title, a body of bounded
//! length, an icon and a type. Every card is built through [`Card::new`],
//! which enforces the title and content limits, so no synthesis step can
//! produce an oversized card.

pub mod synth;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::truncate_with_ellipsis;

pub use synth::CardSynthesizer;

/// Longest card title, in characters, ellipsis included.
pub const MAX_TITLE_CHARS: usize = 60;
/// Longest card body, in characters, ellipsis included.
pub const MAX_CONTENT_CHARS: usize = 350;

/// Icon used for chapter summary cards, which are typed as summaries.
pub const CHAPTER_ICON: &str = "📑";

// ── Types ───────────────────────────────────────────────────────────────

/// What a card teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Concept,
    Summary,
    Question,
    Quote,
    Definition,
    Keypoint,
    Vocabulary,
    Action,
}

impl CardKind {
    pub const ALL: [CardKind; 8] = [
        CardKind::Concept,
        CardKind::Summary,
        CardKind::Question,
        CardKind::Quote,
        CardKind::Definition,
        CardKind::Keypoint,
        CardKind::Vocabulary,
        CardKind::Action,
    ];

    /// Default icon for this kind.
    pub fn icon(self) -> &'static str {
        match self {
            CardKind::Concept => "💡",
            CardKind::Summary => "📖",
            CardKind::Question => "❓",
            CardKind::Quote => "💬",
            CardKind::Definition => "📚",
            CardKind::Keypoint => "🔑",
            CardKind::Vocabulary => "📝",
            CardKind::Action => "✅",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardKind::Concept => "concept",
            CardKind::Summary => "summary",
            CardKind::Question => "question",
            CardKind::Quote => "quote",
            CardKind::Definition => "definition",
            CardKind::Keypoint => "keypoint",
            CardKind::Vocabulary => "vocabulary",
            CardKind::Action => "action",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One study card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub content: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: CardKind,
}

impl Card {
    /// Build a card, clamping title and content to their limits.
    pub fn new(id: impl Into<String>, kind: CardKind, title: &str, content: &str) -> Self {
        Self {
            id: id.into(),
            title: truncate_with_ellipsis(title.trim(), MAX_TITLE_CHARS),
            content: truncate_with_ellipsis(content.trim(), MAX_CONTENT_CHARS),
            icon: kind.icon().to_string(),
            kind,
        }
    }
}
