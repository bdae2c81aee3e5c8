//! Vocabulary loading.
//!
//! # Format
//! ```json
//! [
//!   {
//!     "word": "Tisch",
//!     "pos": "noun",
//!     "gender": "der",
//!     "plural": "Tische",
//!     "meaning": "table",
//!     "examples": ["Der Tisch ist groß."],
//!     "set": "A1"
//!   }
//! ]
//! ```
//!
//! `set` may also be spelled `source_file`. `plural` may be empty or `—` for
//! uncountable nouns, and `examples` may be a single string.

use crate::error::{Result, VocabError};
use crate::types::{normalize_plural, PartOfSpeech, VocabEntry};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Vocabulary grouped into independent sets.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    sets: BTreeMap<String, Vec<VocabEntry>>,
}

impl Vocabulary {
    /// Read and parse a JSON vocabulary file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| VocabError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let vocab = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            entries = vocab.len(),
            sets = vocab.sets.len(),
            "loaded vocabulary"
        );
        Ok(vocab)
    }

    /// Parse JSON vocabulary content.
    pub fn from_json(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: Vec<RawEntry> = serde_json::from_str(content)?;
        let entries = raw
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.build(index))
            .collect::<Result<Vec<_>>>()?;
        Self::from_entries(entries)
    }

    /// Group entries by set, rejecting duplicate words within a set.
    pub fn from_entries(entries: Vec<VocabEntry>) -> Result<Self> {
        let mut sets: BTreeMap<String, Vec<VocabEntry>> = BTreeMap::new();
        let mut seen = HashSet::new();

        for entry in entries {
            if !seen.insert((entry.set.clone(), entry.word.clone())) {
                return Err(VocabError::DuplicateWord {
                    set: entry.set,
                    word: entry.word,
                });
            }
            sets.entry(entry.set.clone()).or_default().push(entry);
        }

        Ok(Self { sets })
    }

    /// Sorted distinct set names.
    pub fn sets(&self) -> Vec<&str> {
        self.sets.keys().map(String::as_str).collect()
    }

    pub fn contains_set(&self, set: &str) -> bool {
        self.sets.contains_key(set)
    }

    /// Entries of a set in file order; empty for unknown sets.
    pub fn entries_in(&self, set: &str) -> &[VocabEntry] {
        self.sets.get(set).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find(&self, set: &str, word: &str) -> Option<&VocabEntry> {
        self.entries_in(set).iter().find(|entry| entry.word == word)
    }

    pub fn total_in(&self, set: &str) -> usize {
        self.entries_in(set).len()
    }

    /// Total number of entries across all sets.
    pub fn len(&self) -> usize {
        self.sets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawExamples {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    word: Option<String>,
    pos: Option<String>,
    gender: Option<String>,
    plural: Option<String>,
    meaning: Option<String>,
    examples: Option<RawExamples>,
    #[serde(alias = "source_file")]
    set: Option<String>,
}

impl RawEntry {
    fn build(self, index: usize) -> Result<VocabEntry> {
        let word = required(self.word, index, "word")?;
        let pos = required(self.pos, index, "pos")?;
        let meaning = self
            .meaning
            .ok_or(VocabError::MissingField { index, field: "meaning" })?;
        let set = required(self.set, index, "set")?;

        let examples = match self.examples {
            Some(RawExamples::One(text)) if !text.trim().is_empty() => vec![text],
            Some(RawExamples::One(_)) | None => vec![],
            Some(RawExamples::Many(list)) => list
                .into_iter()
                .filter(|example| !example.trim().is_empty())
                .collect(),
        };

        Ok(VocabEntry {
            word,
            pos: PartOfSpeech::from_tag(&pos),
            gender: self.gender.unwrap_or_default().trim().to_string(),
            plural: normalize_plural(self.plural.as_deref()),
            meaning,
            examples,
            set,
        })
    }
}

fn required(value: Option<String>, index: usize, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(VocabError::MissingField { index, field }),
    }
}
