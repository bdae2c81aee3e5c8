//! Answer checking for spoken vocabulary drills.
//!
//! A transcript is lower-cased and split on whitespace, then compared with
//! the entry's expected forms by token:
//! - verbs need every part of the lemma somewhere in the transcript
//! - nouns need `article word` as a contiguous run, plus the plural run
//!   unless the noun has no plural
//! - everything else needs the word as a standalone token

use crate::types::{PartOfSpeech, VocabEntry};
use serde::{Deserialize, Serialize};

/// Result of checking a transcript against a vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Whether the singular form (or the word itself) was found.
    pub singular_matched: bool,
    /// Plural outcome, `None` when no plural is expected.
    pub plural_matched: Option<bool>,
    /// Normalized transcript (for display).
    pub transcript_normalized: String,
}

/// Check a transcript against an entry.
pub fn check(entry: &VocabEntry, transcript: &str) -> bool {
    check_detailed(entry, transcript).is_correct
}

/// Check a transcript and report which forms matched.
pub fn check_detailed(entry: &VocabEntry, transcript: &str) -> MatchResult {
    let tokens = tokenize(transcript);
    let transcript_normalized = tokens.join(" ");

    let (singular_matched, plural_matched) = match &entry.pos {
        PartOfSpeech::Verb | PartOfSpeech::ReflexiveVerb => {
            let parts = tokenize(&entry.word);
            (parts.iter().all(|part| tokens.contains(part)), None)
        }
        PartOfSpeech::Noun(_) => {
            let singular = tokenize(&format!("{} {}", entry.gender, entry.word));
            let plural = entry
                .plural
                .as_deref()
                .map(|plural| contains_run(&tokens, &tokenize(plural)));
            (contains_run(&tokens, &singular), plural)
        }
        PartOfSpeech::Adjective | PartOfSpeech::Adverb | PartOfSpeech::Other(_) => {
            let word = entry.word.trim().to_lowercase();
            (tokens.contains(&word), None)
        }
    };

    let is_correct = singular_matched && plural_matched.unwrap_or(true);
    tracing::trace!(
        word = %entry.word,
        transcript = %transcript_normalized,
        singular_matched,
        ?plural_matched,
        "checked answer"
    );

    MatchResult {
        is_correct,
        singular_matched,
        plural_matched,
        transcript_normalized,
    }
}

/// Lower-case and split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whether `needle` appears as an unbroken run anywhere in `haystack`.
///
/// An empty needle always matches.
pub fn contains_run(haystack: &[String], needle: &[String]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}
