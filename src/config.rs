//! Pipeline configuration, persisted as TOML.
//!
//! One configuration struct covers every knob the card pipeline exposes. All
//! fields have defaults, so a partial TOML file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StudyError, StudyResult};

/// Tunable parameters for one run of the study pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Minimum number of cards in a deck; the fill passes pad up to this.
    #[serde(default = "default_min_cards")]
    pub min_cards: usize,
    /// Hard upper bound on the number of cards.
    #[serde(default = "default_max_cards")]
    pub max_cards: usize,
    /// Target size in characters of one reading page.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// How far back from a page limit to look for a sentence break.
    #[serde(default = "default_page_lookback")]
    pub page_lookback: usize,
    /// Maximum number of ranked keywords.
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,
    /// Inputs shorter than this (trimmed, normalized) are rejected.
    #[serde(default = "default_min_input_chars")]
    pub min_input_chars: usize,
    /// Length of the whole-book overview summary.
    #[serde(default = "default_summary_chars")]
    pub summary_chars: usize,
    /// Length of concept, chapter, definition, quote and action content.
    #[serde(default = "default_card_content_chars")]
    pub card_content_chars: usize,
    /// Length of paragraph-based key point content.
    #[serde(default = "default_keypoint_chars")]
    pub keypoint_chars: usize,
    /// Additional stop words, merged with the built-in bilingual set.
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

fn default_min_cards() -> usize {
    30
}
fn default_max_cards() -> usize {
    40
}
fn default_chunk_size() -> usize {
    2000
}
fn default_page_lookback() -> usize {
    500
}
fn default_max_keywords() -> usize {
    60
}
fn default_min_input_chars() -> usize {
    100
}
fn default_summary_chars() -> usize {
    350
}
fn default_card_content_chars() -> usize {
    300
}
fn default_keypoint_chars() -> usize {
    350
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_cards: default_min_cards(),
            max_cards: default_max_cards(),
            chunk_size: default_chunk_size(),
            page_lookback: default_page_lookback(),
            max_keywords: default_max_keywords(),
            min_input_chars: default_min_input_chars(),
            summary_chars: default_summary_chars(),
            card_content_chars: default_card_content_chars(),
            keypoint_chars: default_keypoint_chars(),
            extra_stop_words: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Check the invariants the pipeline relies on.
    pub fn validate(&self) -> StudyResult<()> {
        if self.min_cards == 0 {
            return Err(invalid("min_cards must be > 0"));
        }
        if self.min_cards > self.max_cards {
            return Err(invalid(format!(
                "min_cards ({}) must not exceed max_cards ({})",
                self.min_cards, self.max_cards
            )));
        }
        if self.chunk_size < 200 {
            return Err(invalid(format!(
                "chunk_size must be >= 200, got {}",
                self.chunk_size
            )));
        }
        if self.page_lookback >= self.chunk_size {
            return Err(invalid(format!(
                "page_lookback ({}) must be smaller than chunk_size ({})",
                self.page_lookback, self.chunk_size
            )));
        }
        if self.max_keywords == 0 {
            return Err(invalid("max_keywords must be > 0"));
        }
        Ok(())
    }

    /// Load from a TOML file and validate.
    pub fn load(path: &Path) -> StudyResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StudyError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| StudyError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> StudyResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| StudyError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> StudyError {
    StudyError::InvalidConfig {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_cards, 30);
        assert_eq!(config.max_cards, 40);
        assert_eq!(config.chunk_size, 2000);
    }

    #[test]
    fn min_above_max_rejected() {
        let config = PipelineConfig {
            min_cards: 50,
            max_cards: 40,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StudyError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn zero_min_rejected() {
        let config = PipelineConfig {
            min_cards: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn lookback_must_fit_in_chunk() {
        let config = PipelineConfig {
            chunk_size: 400,
            page_lookback: 400,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: PipelineConfig = toml::from_str("max_cards = 50\n").unwrap();
        assert_eq!(config.max_cards, 50);
        assert_eq!(config.min_cards, 30);
        assert!(config.extra_stop_words.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("studydeck.toml");
        let config = PipelineConfig {
            max_cards: 50,
            extra_stop_words: vec!["capitulo".into()],
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = PipelineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_rejects_invalid_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "min_cards = 10\nmax_cards = 5\n").unwrap();
        assert!(matches!(
            PipelineConfig::load(&path),
            Err(StudyError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "min_cards = \"many\"\n").unwrap();
        assert!(matches!(
            PipelineConfig::load(&path),
            Err(StudyError::ConfigParse { .. })
        ));
    }
}
