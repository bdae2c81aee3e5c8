//! Core types for the vocabulary trainer.

use crate::error::{Result, VocabError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Marker some word lists use in place of a plural for uncountable nouns.
pub const NO_PLURAL_SENTINEL: &str = "—";

/// Noun sub-category carried in the part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NounKind {
    Common,
    Compound,
    Uncountable,
}

/// Grammatical category of a vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun(NounKind),
    Verb,
    ReflexiveVerb,
    Adjective,
    Adverb,
    Other(String),
}

impl PartOfSpeech {
    /// Classify a free-form tag such as `noun(compound)` or `reflexive-verb`.
    pub fn from_tag(tag: &str) -> Self {
        let normalized: String = tag
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();
        let normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");

        if normalized.starts_with("noun") {
            let kind = if normalized.contains("uncountable") {
                NounKind::Uncountable
            } else if normalized.contains("compound") {
                NounKind::Compound
            } else {
                NounKind::Common
            };
            Self::Noun(kind)
        } else if normalized.contains("adverb") {
            Self::Adverb
        } else if normalized.contains("adjective") {
            Self::Adjective
        } else if normalized.contains("reflexive") && normalized.contains("verb") {
            Self::ReflexiveVerb
        } else if normalized.contains("verb") {
            Self::Verb
        } else {
            Self::Other(normalized)
        }
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, Self::Noun(_))
    }

    pub fn is_verb(&self) -> bool {
        matches!(self, Self::Verb | Self::ReflexiveVerb)
    }
}

/// A single vocabulary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    pub pos: PartOfSpeech,
    /// Definite article for nouns, empty otherwise.
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    pub meaning: String,
    pub examples: Vec<String>,
    pub set: String,
}

impl VocabEntry {
    /// The phrase a learner is expected to say, e.g. `der Tisch — Tische`.
    pub fn expected_answer(&self) -> String {
        if !self.pos.is_noun() {
            return self.word.clone();
        }
        let singular = format!("{} {}", self.gender, self.word).trim().to_string();
        match &self.plural {
            Some(plural) => format!("{} {} {}", singular, NO_PLURAL_SENTINEL, plural),
            None => singular,
        }
    }
}

/// Normalize a raw plural field: empty, blank and the sentinel mean "none".
pub fn normalize_plural(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() || trimmed == NO_PLURAL_SENTINEL {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Study mode for a vocabulary set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    Study,
    ReviewMistakes,
}

impl Default for StudyMode {
    fn default() -> Self {
        Self::Study
    }
}

impl StudyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::ReviewMistakes => "review_mistakes",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "study" => Some(Self::Study),
            "review" | "review_mistakes" | "review mistakes" => Some(Self::ReviewMistakes),
            _ => None,
        }
    }
}

/// Trainer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerSettings {
    pub vocab_path: PathBuf,
    /// Language handed to the transcription service.
    pub language_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_set: Option<String>,
    pub default_mode: StudyMode,
    /// Fixed seed for reproducible word selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for TrainerSettings {
    fn default() -> Self {
        Self {
            vocab_path: PathBuf::from("german_vocab.json"),
            language_code: "de-DE".to_string(),
            default_set: None,
            default_mode: StudyMode::default(),
            seed: None,
        }
    }
}

impl TrainerSettings {
    /// Load settings from the environment (and a `.env` file if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build settings from a variable lookup, falling back to defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(path) = lookup("VOCAB_PATH") {
            settings.vocab_path = PathBuf::from(path);
        }
        if let Some(language) = lookup("VOCAB_LANGUAGE") {
            settings.language_code = language;
        }
        if let Some(set) = lookup("VOCAB_SET").filter(|s| !s.trim().is_empty()) {
            settings.default_set = Some(set);
        }
        if let Some(mode) = lookup("VOCAB_MODE") {
            settings.default_mode =
                StudyMode::from_str(&mode).ok_or_else(|| VocabError::InvalidSetting {
                    key: "VOCAB_MODE".to_string(),
                    value: mode.clone(),
                })?;
        }
        if let Some(seed) = lookup("VOCAB_SEED") {
            let parsed = seed.trim().parse::<u64>().map_err(|_| VocabError::InvalidSetting {
                key: "VOCAB_SEED".to_string(),
                value: seed.clone(),
            })?;
            settings.seed = Some(parsed);
        }

        Ok(settings)
    }
}
