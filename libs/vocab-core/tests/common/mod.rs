//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use vocab_core::{StudyMode, TrainerSettings, TrainerSession, Vocabulary};

static TRACING: Once = Once::new();

/// Route library logs to the test output. Filter with RUST_LOG.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Two small sets: nouns and verbs in A1, adjectives in A2.
pub fn sample_vocab_json() -> &'static str {
    r#"[
        {"word": "Tisch", "pos": "noun", "gender": "der", "plural": "Tische",
         "meaning": "table", "examples": ["Der Tisch ist neu."], "set": "A1"},
        {"word": "Regen", "pos": "noun(uncountable)", "gender": "der", "plural": "—",
         "meaning": "rain", "examples": [], "set": "A1"},
        {"word": "sich freuen", "pos": "reflexive-verb", "gender": "", "plural": "",
         "meaning": "to be glad", "examples": [], "set": "A1"},
        {"word": "schnell", "pos": "adjective", "gender": "", "plural": "",
         "meaning": "fast", "examples": [], "set": "A2"}
    ]"#
}

pub fn sample_vocab() -> Vocabulary {
    Vocabulary::from_json(sample_vocab_json()).expect("sample vocabulary parses")
}

pub fn settings(set: &str, mode: StudyMode) -> TrainerSettings {
    TrainerSettings {
        default_set: Some(set.to_string()),
        default_mode: mode,
        seed: Some(11),
        ..TrainerSettings::default()
    }
}

pub fn session(set: &str) -> TrainerSession {
    init_tracing();
    TrainerSession::new(sample_vocab(), settings(set, StudyMode::Study))
        .expect("session starts")
}

/// A transcript that answers `word` from the sample vocabulary correctly.
pub fn correct_transcript(word: &str) -> &'static str {
    match word {
        "Tisch" => "der tisch die tische",
        "Regen" => "der regen",
        "sich freuen" => "ich freuen sich",
        "schnell" => "schnell",
        other => panic!("no transcript for {other}"),
    }
}
