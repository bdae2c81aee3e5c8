//! Per-set study progress and word selection.
//!
//! Each vocabulary set owns a [`ProgressState`]. In study mode words are drawn
//! at random from those not yet reviewed. In review mode the mistakes are
//! snapshotted into a queue: a correct answer drops the front word, a wrong
//! one sends it to the back, unless it is the last word left, in which case
//! it is asked again.

use crate::types::{StudyMode, VocabEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// What happened to the review queue after an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStep {
    /// Front word answered correctly and removed.
    Advanced,
    /// Front word answered wrongly and moved to the back.
    Rotated,
    /// Only word left was answered wrongly and stays at the front.
    Repeated,
}

/// Result of recording one attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    pub word: String,
    pub correct: bool,
    /// First evaluation of this word; only these move the counters.
    pub first_time: bool,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub in_mistakes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_step: Option<QueueStep>,
}

/// Result of switching modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeEntry {
    Study,
    Review { queued: usize },
    /// Review requested with no mistakes recorded.
    NothingToReview,
}

/// Counters for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub reviewed: usize,
    pub correct: u32,
    pub wrong: u32,
    pub mistakes_left: usize,
}

/// Progress for one vocabulary set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressState {
    pub reviewed: HashSet<String>,
    pub correct: u32,
    pub wrong: u32,
    /// Words not yet mastered, in the order they were first missed.
    pub mistakes: Vec<String>,
    pub review_queue: VecDeque<String>,
    pub mode: StudyMode,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an evaluated attempt for `word`.
    pub fn record_attempt(&mut self, word: &str, correct: bool) -> AttemptOutcome {
        let first_time = !self.reviewed.contains(word);

        if correct {
            if first_time {
                self.correct += 1;
            }
            self.mistakes.retain(|w| w != word);
        } else {
            if first_time {
                self.wrong += 1;
            }
            if !self.is_mistake(word) {
                self.mistakes.push(word.to_string());
            }
        }
        self.reviewed.insert(word.to_string());

        let queue_step = if self.mode == StudyMode::ReviewMistakes {
            self.advance_queue(word, correct)
        } else {
            None
        };

        tracing::debug!(word, correct, first_time, ?queue_step, "recorded attempt");

        AttemptOutcome {
            word: word.to_string(),
            correct,
            first_time,
            correct_count: self.correct,
            wrong_count: self.wrong,
            in_mistakes: self.is_mistake(word),
            queue_step,
        }
    }

    fn advance_queue(&mut self, word: &str, correct: bool) -> Option<QueueStep> {
        if self.review_queue.front().map(String::as_str) != Some(word) {
            return None;
        }

        if correct {
            self.review_queue.pop_front();
            Some(QueueStep::Advanced)
        } else if self.review_queue.len() > 1 {
            self.review_queue.rotate_left(1);
            Some(QueueStep::Rotated)
        } else {
            Some(QueueStep::Repeated)
        }
    }

    /// Switch mode. Entering review snapshots the current mistakes.
    pub fn enter_mode(&mut self, mode: StudyMode) -> ModeEntry {
        self.mode = mode;
        self.review_queue.clear();

        let entry = match mode {
            StudyMode::Study => ModeEntry::Study,
            StudyMode::ReviewMistakes => {
                let mut seen = HashSet::new();
                self.review_queue = self
                    .mistakes
                    .iter()
                    .filter(|word| seen.insert(word.as_str()))
                    .cloned()
                    .collect();
                if self.review_queue.is_empty() {
                    ModeEntry::NothingToReview
                } else {
                    ModeEntry::Review {
                        queued: self.review_queue.len(),
                    }
                }
            }
        };

        tracing::debug!(mode = mode.as_str(), ?entry, "entered mode");
        entry
    }

    /// Next word to present, or `None` once the set or queue is exhausted.
    ///
    /// `entries` are the set's entries; only study mode draws from them.
    pub fn select_next<R>(
        &self,
        mode: StudyMode,
        entries: &[VocabEntry],
        rng: &mut R,
    ) -> Option<String>
    where
        R: Rng + ?Sized,
    {
        let next = match mode {
            StudyMode::Study => {
                let remaining: Vec<&VocabEntry> = entries
                    .iter()
                    .filter(|entry| !self.reviewed.contains(&entry.word))
                    .collect();
                remaining.choose(rng).map(|entry| entry.word.clone())
            }
            StudyMode::ReviewMistakes => self.review_queue.front().cloned(),
        };

        tracing::debug!(mode = mode.as_str(), next = ?next, "selected next word");
        next
    }

    pub fn is_mistake(&self, word: &str) -> bool {
        self.mistakes.iter().any(|w| w == word)
    }

    pub fn summary(&self, total: usize) -> ProgressSummary {
        ProgressSummary {
            total,
            reviewed: self.reviewed.len(),
            correct: self.correct,
            wrong: self.wrong,
            mistakes_left: self.mistakes.len(),
        }
    }
}

/// Progress for every set in a session, keyed by set name.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    states: HashMap<String, ProgressState>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create zeroed progress for `key` if absent.
    pub fn init(&mut self, key: &str) -> &mut ProgressState {
        self.states.entry(key.to_string()).or_insert_with(|| {
            tracing::debug!(set = key, "initialized progress");
            ProgressState::new()
        })
    }

    pub fn state(&self, key: &str) -> Option<&ProgressState> {
        self.states.get(key)
    }

    pub fn record_attempt(&mut self, key: &str, word: &str, correct: bool) -> AttemptOutcome {
        self.init(key).record_attempt(word, correct)
    }

    pub fn enter_mode(&mut self, key: &str, mode: StudyMode) -> ModeEntry {
        self.init(key).enter_mode(mode)
    }

    pub fn select_next<R>(
        &mut self,
        key: &str,
        mode: StudyMode,
        entries: &[VocabEntry],
        rng: &mut R,
    ) -> Option<String>
    where
        R: Rng + ?Sized,
    {
        self.init(key).select_next(mode, entries, rng)
    }

    pub fn summary(&mut self, key: &str, total: usize) -> ProgressSummary {
        self.init(key).summary(total)
    }
}
