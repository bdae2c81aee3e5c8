//! End-to-end study and review sessions over the sample vocabulary.

mod common;

use pretty_assertions::assert_eq;
use vocab_core::{
    ModeEntry, Prompt, ProgressSummary, QueueStep, StudyMode, TrainerSession, VocabError,
};

fn prompted_word(session: &mut TrainerSession) -> String {
    match session.next_prompt() {
        Prompt::Word { word, .. } => word,
        other => panic!("expected a word, got {other:?}"),
    }
}

/// Study every word of A1, answering only the nouns correctly.
#[test]
fn test_study_set_to_completion() {
    let mut session = common::session("A1");
    let mut seen = Vec::new();

    for _ in 0..3 {
        let word = prompted_word(&mut session);
        let transcript = if word == "sich freuen" {
            "freuen"
        } else {
            common::correct_transcript(&word)
        };
        let feedback = session.submit(transcript).unwrap();
        assert_eq!(feedback.correct, word != "sich freuen");
        assert!(feedback.outcome.first_time);
        seen.push(word);
    }

    seen.sort();
    assert_eq!(seen, vec!["Regen", "Tisch", "sich freuen"]);
    assert_eq!(session.next_prompt(), Prompt::SetComplete);
    assert!(session.submit("der tisch").is_none());
    assert_eq!(
        session.summary(),
        ProgressSummary {
            total: 3,
            reviewed: 3,
            correct: 2,
            wrong: 1,
            mistakes_left: 1,
        }
    );
}

/// Miss everything, then clear the mistakes in review mode.
#[test]
fn test_review_mistakes_until_done() {
    let mut session = common::session("A1");
    while let Prompt::Word { .. } = session.next_prompt() {
        session.submit("").unwrap();
    }

    assert_eq!(
        session.set_mode(StudyMode::ReviewMistakes),
        ModeEntry::Review { queued: 3 }
    );

    // First pass: wrong answers rotate through the whole queue.
    let mut first_pass = Vec::new();
    for _ in 0..3 {
        let word = prompted_word(&mut session);
        let feedback = session.submit("ähm").unwrap();
        assert_eq!(feedback.outcome.queue_step, Some(QueueStep::Rotated));
        first_pass.push(word);
    }
    let mut sorted = first_pass.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["Regen", "Tisch", "sich freuen"]);

    // Second pass: same order, now correct.
    for expected in &first_pass {
        let word = prompted_word(&mut session);
        assert_eq!(&word, expected);
        let feedback = session.submit(common::correct_transcript(&word)).unwrap();
        assert_eq!(feedback.outcome.queue_step, Some(QueueStep::Advanced));
    }

    assert_eq!(session.next_prompt(), Prompt::ReviewComplete);
    let summary = session.summary();
    assert_eq!(summary.mistakes_left, 0);
    assert_eq!((summary.correct, summary.wrong), (0, 3));
}

#[test]
fn test_last_mistake_is_repeated() {
    let mut session = common::session("A2");
    assert_eq!(prompted_word(&mut session), "schnell");
    session.submit("langsam").unwrap();

    session.set_mode(StudyMode::ReviewMistakes);
    for _ in 0..3 {
        assert_eq!(prompted_word(&mut session), "schnell");
        let feedback = session.submit("langsam").unwrap();
        assert_eq!(feedback.outcome.queue_step, Some(QueueStep::Repeated));
    }
    assert_eq!(prompted_word(&mut session), "schnell");
    let feedback = session.submit("schnell").unwrap();
    assert!(feedback.correct);
    assert_eq!(session.next_prompt(), Prompt::ReviewComplete);
}

#[test]
fn test_review_with_no_mistakes() {
    let mut session = common::session("A2");
    assert_eq!(session.set_mode(StudyMode::ReviewMistakes), ModeEntry::NothingToReview);
    assert_eq!(session.next_prompt(), Prompt::ReviewComplete);
}

#[test]
fn test_sets_keep_separate_progress() {
    let mut session = common::session("A2");
    prompted_word(&mut session);
    session.submit("schnell").unwrap();

    session.select_set("A1").unwrap();
    assert_eq!(session.summary().reviewed, 0);

    session.select_set("A2").unwrap();
    assert_eq!(session.summary().correct, 1);
    assert_eq!(session.next_prompt(), Prompt::SetComplete);
}

#[test]
fn test_unknown_set_is_rejected() {
    let mut session = common::session("A1");
    assert!(matches!(
        session.select_set("C2"),
        Err(VocabError::UnknownSet(set)) if set == "C2"
    ));
    assert_eq!(session.selected_set(), "A1");

    let result = TrainerSession::new(
        common::sample_vocab(),
        common::settings("C2", StudyMode::Study),
    );
    assert!(matches!(result, Err(VocabError::UnknownSet(_))));
}

#[test]
fn test_feedback_reveals_forms_and_examples() {
    let mut session = common::session("A1");
    loop {
        let word = prompted_word(&mut session);
        let feedback = session.submit("der tisch").unwrap();
        if word == "Tisch" {
            assert!(!feedback.correct);
            assert_eq!(feedback.expected, "der Tisch — Tische");
            assert_eq!(feedback.examples, vec!["Der Tisch ist neu.".to_string()]);
            assert_eq!(feedback.matched.plural_matched, Some(false));
            break;
        }
    }
}

#[test]
fn test_prompt_shows_meaning() {
    let mut session = common::session("A2");
    assert_eq!(
        session.next_prompt(),
        Prompt::Word {
            word: "schnell".to_string(),
            meaning: "fast".to_string(),
            expected: "schnell".to_string(),
        }
    );
}
