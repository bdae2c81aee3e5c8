//! Study session driver.
//!
//! Holds the state a shell needs between user actions: the selected set, the
//! mode, the word currently presented and the progress of every set. The shell
//! records audio and transcribes it; the session only sees the transcript.

use crate::error::{Result, VocabError};
use crate::matching::{check_detailed, MatchResult};
use crate::progress::{AttemptOutcome, ModeEntry, ProgressSummary, ProgressTracker};
use crate::types::{StudyMode, TrainerSettings, VocabEntry};
use crate::vocab::Vocabulary;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// What to show the learner next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Prompt {
    Word { word: String, meaning: String, expected: String },
    /// Every word of the set has been studied.
    SetComplete,
    /// No mistakes left to review.
    ReviewComplete,
}

/// Feedback for a submitted transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub correct: bool,
    pub transcript: String,
    pub expected: String,
    pub examples: Vec<String>,
    pub matched: MatchResult,
    pub outcome: AttemptOutcome,
}

pub struct TrainerSession {
    vocab: Vocabulary,
    settings: TrainerSettings,
    progress: ProgressTracker,
    selected_set: String,
    mode: StudyMode,
    current: Option<String>,
    rng: StdRng,
}

impl TrainerSession {
    /// Start on the configured set (or the first one) in the configured mode.
    pub fn new(vocab: Vocabulary, settings: TrainerSettings) -> Result<Self> {
        let selected_set = match &settings.default_set {
            Some(set) if vocab.contains_set(set) => set.clone(),
            Some(set) => return Err(VocabError::UnknownSet(set.clone())),
            None => vocab.sets().first().map(|s| s.to_string()).unwrap_or_default(),
        };
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut session = Self {
            vocab,
            mode: settings.default_mode,
            settings,
            progress: ProgressTracker::new(),
            selected_set,
            current: None,
            rng,
        };
        session.progress.init(&session.selected_set);
        let mode = session.mode;
        session.set_mode(mode);
        Ok(session)
    }

    pub fn settings(&self) -> &TrainerSettings {
        &self.settings
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn selected_set(&self) -> &str {
        &self.selected_set
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    /// Switch to another set. Progress of the previous set is kept.
    pub fn select_set(&mut self, set: &str) -> Result<()> {
        if !self.vocab.contains_set(set) {
            return Err(VocabError::UnknownSet(set.to_string()));
        }
        if set != self.selected_set {
            tracing::info!(set, "selected vocabulary set");
            self.selected_set = set.to_string();
            self.current = None;
            self.progress.init(set);
            let mode = self.mode;
            self.set_mode(mode);
        }
        Ok(())
    }

    pub fn set_mode(&mut self, mode: StudyMode) -> ModeEntry {
        self.mode = mode;
        self.current = None;
        self.progress.enter_mode(&self.selected_set, mode)
    }

    /// The word being asked, picking one if none is presented.
    pub fn next_prompt(&mut self) -> Prompt {
        if self.current.is_none() {
            self.current = self.progress.select_next(
                &self.selected_set,
                self.mode,
                self.vocab.entries_in(&self.selected_set),
                &mut self.rng,
            );
        }

        match self.current() {
            Some(entry) => Prompt::Word {
                word: entry.word.clone(),
                meaning: entry.meaning.clone(),
                expected: entry.expected_answer(),
            },
            None => match self.mode {
                StudyMode::Study => Prompt::SetComplete,
                StudyMode::ReviewMistakes => Prompt::ReviewComplete,
            },
        }
    }

    pub fn current(&self) -> Option<&VocabEntry> {
        let word = self.current.as_deref()?;
        self.vocab.find(&self.selected_set, word)
    }

    /// Check a transcript against the current word and record the attempt.
    ///
    /// Returns `None` when no word is presented.
    pub fn submit(&mut self, transcript: &str) -> Option<Feedback> {
        let entry = self.current()?.clone();
        let matched = check_detailed(&entry, transcript);
        let outcome = self
            .progress
            .record_attempt(&self.selected_set, &entry.word, matched.is_correct);

        // Review words come back through the queue front on the next prompt.
        self.current = None;

        Some(Feedback {
            correct: matched.is_correct,
            transcript: transcript.trim().to_string(),
            expected: entry.expected_answer(),
            examples: entry.examples,
            matched,
            outcome,
        })
    }

    pub fn summary(&mut self) -> ProgressSummary {
        let total = self.vocab.total_in(&self.selected_set);
        self.progress.summary(&self.selected_set, total)
    }
}
