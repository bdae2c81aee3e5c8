//! Core of a spoken German vocabulary trainer.
//!
//! Provides:
//! - Vocabulary loading from JSON word lists grouped into sets
//! - Answer checking of speech transcripts by part of speech
//! - Per-set progress tracking with study and review-mistakes modes
//! - A UI-free session driver for shells that record and transcribe audio

pub mod error;
pub mod matching;
pub mod progress;
pub mod session;
pub mod types;
pub mod vocab;

pub use error::{Result, VocabError};
pub use matching::{check, check_detailed, contains_run, tokenize, MatchResult};
pub use progress::{
    AttemptOutcome, ModeEntry, ProgressState, ProgressSummary, ProgressTracker, QueueStep,
};
pub use session::{Feedback, Prompt, TrainerSession};
pub use types::{NounKind, PartOfSpeech, StudyMode, TrainerSettings, VocabEntry};
pub use vocab::Vocabulary;
