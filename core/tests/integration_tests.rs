//! Integration tests for taskdeck-core
//!
//! These tests verify that the pieces work together in realistic usage
//! scenarios:
//! - Task list edits flowing through persistence and back
//! - Wire-format compatibility with the original browser storage entry
//! - Recovery from malformed or partially-valid stored data
//! - Full quiz runs from first question to restart

use serde_json::Value;

use taskdeck_core::{Quiz, QuizPhase, TaskId, TaskInput, TaskList, TaskStore};

fn input(title: &str, minutes: &str) -> TaskInput {
    TaskInput::parse(title, minutes).expect("valid input")
}

// =============================================================================
// Test 1: Persistence Round Trip
// =============================================================================

/// Edits made to the list survive a save/load cycle, and ticking continues
/// to honor the per-task rules afterwards.
#[test]
fn test_edit_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = TaskStore::at_dir(dir.path());

    let mut list = TaskList::new();
    let read = list.add(input("Read", "5"));
    let write = list.add(input("Write", "2"));
    list.toggle(write);
    list.tick();

    store.save(&list).unwrap();
    let mut restored = store.load();

    assert_eq!(restored.len(), 2);
    assert_eq!(restored.get(read).unwrap().remaining_seconds, 299);
    assert_eq!(restored.get(write).unwrap().remaining_seconds, 120);
    assert!(restored.get(write).unwrap().completed);

    // Ticking the restored list still skips the completed task.
    restored.tick();
    assert_eq!(restored.get(read).unwrap().remaining_seconds, 298);
    assert_eq!(restored.get(write).unwrap().remaining_seconds, 120);
}

/// The saved entry uses the browser-era field names so an existing stored
/// value and ours are interchangeable.
#[test]
fn test_wire_format_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let store = TaskStore::at_dir(dir.path());

    let mut list = TaskList::new();
    list.add(input("Read", "5"));
    store.save(&list).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    let entry = &value.as_array().unwrap()[0];

    assert!(entry.get("id").unwrap().is_i64());
    assert_eq!(entry.get("title").unwrap(), "Read");
    assert_eq!(entry.get("timeLimit").unwrap(), 5);
    assert_eq!(entry.get("remainingTime").unwrap(), 300);
    assert_eq!(entry.get("completed").unwrap(), false);
    assert!(entry.get("time_limit_minutes").is_none());
}

/// A value written by the original browser app loads unchanged.
#[test]
fn test_loads_legacy_browser_payload() {
    let dir = tempfile::tempdir().unwrap();
    let store = TaskStore::at_dir(dir.path());
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(
        store.path(),
        r#"[{"id":1712345678901,"title":"Ship it","timeLimit":25,"remainingTime":1432,"completed":false}]"#,
    )
    .unwrap();

    let list = store.load();
    let task = list.get(TaskId(1_712_345_678_901)).unwrap();
    assert_eq!(task.title, "Ship it");
    assert_eq!(task.time_limit_minutes, 25);
    assert_eq!(task.remaining_seconds, 1432);
    assert!(!task.completed);
}

// =============================================================================
// Test 2: Defensive Loading
// =============================================================================

/// Partially-valid stored data is normalized field by field instead of
/// being rejected wholesale.
#[test]
fn test_load_normalizes_partial_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = TaskStore::at_dir(dir.path());
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(
        store.path(),
        r#"[{"title":"No timer"},{"timeLimit":3},"junk",17]"#,
    )
    .unwrap();

    let list = store.load();
    assert_eq!(list.len(), 2);

    let no_timer = &list.tasks()[0];
    assert_eq!(no_timer.title, "No timer");
    assert_eq!(no_timer.remaining_seconds, 0);

    let untitled = &list.tasks()[1];
    assert_eq!(untitled.title, "");
    assert_eq!(untitled.time_limit_minutes, 3);
    assert_eq!(untitled.remaining_seconds, 180);
}

/// Malformed payloads never panic and never surface an error: the app
/// just starts empty.
#[test]
fn test_load_survives_malformed_payloads() {
    let dir = tempfile::tempdir().unwrap();
    let store = TaskStore::at_dir(dir.path());
    std::fs::create_dir_all(dir.path()).unwrap();

    for payload in ["", "null", "\"tasks\"", "{\"a\":1}", "[1,2,", "\u{0}\u{1}"] {
        std::fs::write(store.path(), payload).unwrap();
        assert!(store.load().is_empty(), "payload {payload:?}");
    }
}

// =============================================================================
// Test 3: Full Quiz Runs
// =============================================================================

/// A perfect run: four correct answers, the expected headline, four
/// "Correct" summary lines, and a clean restart.
#[test]
fn test_quiz_perfect_run_and_restart() {
    let mut quiz = Quiz::with_default_questions();

    for expected_index in 0..4 {
        assert_eq!(quiz.current_index(), expected_index);
        let correct = quiz.current_question().unwrap().correct_index();
        assert!(quiz.answer(correct));
        quiz.advance();
    }

    assert_eq!(quiz.phase(), QuizPhase::Finished);
    assert!(quiz.score_line().contains("You scored 4 out of 4"));
    let correct_lines = quiz
        .results()
        .iter()
        .enumerate()
        .filter(|(i, r)| r.summary_line(i + 1).contains("✅ Correct"))
        .count();
    assert_eq!(correct_lines, 4);

    quiz.restart();
    assert_eq!(quiz.phase(), QuizPhase::Showing);
    assert_eq!(quiz.score(), 0);
    assert!(quiz.results().is_empty());
    assert_eq!(quiz.current_index(), 0);
}

/// An all-wrong run still records one result per question and scores zero.
#[test]
fn test_quiz_all_wrong_run() {
    let mut quiz = Quiz::with_default_questions();

    for _ in 0..4 {
        let question = quiz.current_question().unwrap();
        let wrong = (question.correct_index() + 1) % question.answers.len();
        assert!(quiz.answer(wrong));
        quiz.advance();
    }

    assert_eq!(quiz.phase(), QuizPhase::Finished);
    assert_eq!(quiz.score(), 0);
    assert!(quiz.score_line().contains("You scored 0 out of 4"));
    assert_eq!(quiz.results().len(), 4);
    assert!(quiz.results().iter().all(|r| !r.was_correct));
}
