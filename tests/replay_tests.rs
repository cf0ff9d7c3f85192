// Integration tests for the replay module
//
// Tests the core functionality of the replay engine including:
// - Loading JSONL log files
// - Replaying individual turns
// - Validating expected moves
// - Generating statistics

use frostflight::config::Config;
use frostflight::move_selector::Focus;
use frostflight::replay::ReplayEngine;
use frostflight::types::Direction;
use std::path::PathBuf;

/// Helper function to get the path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

fn engine() -> ReplayEngine {
    ReplayEngine::new(Config::default_hardcoded(), false)
}

#[test]
fn test_load_log_file_food_pursuit() {
    let entries = engine()
        .load_log_file(fixture_path("food_pursuit.jsonl"))
        .expect("Failed to load food_pursuit.jsonl");

    assert_eq!(entries.len(), 3, "Expected 3 log entries");
    assert_eq!(entries[0].turn, 0);
    assert_eq!(entries[0].you_id, "frost");
    assert_eq!(entries[0].focus, Some(Focus::Food));
    assert_eq!(entries[2].chosen_move, "right");
}

#[test]
fn test_replay_all_food_pursuit_matches() {
    let engine = engine();
    let entries = engine
        .load_log_file(fixture_path("food_pursuit.jsonl"))
        .unwrap();

    let results = engine.replay_all(&entries);
    assert_eq!(results.len(), 3);
    for result in &results {
        assert!(
            result.matches,
            "Turn {}: logged {} but replayed {}",
            result.turn,
            result.original_move.as_str(),
            result.replayed_move.as_str()
        );
        assert_eq!(result.replayed_focus, Focus::Food);
    }

    let stats = engine.generate_stats(&results);
    assert_eq!(stats.total_turns, 3);
    assert_eq!(stats.matches, 3);
    assert_eq!(stats.mismatches, 0);
    assert_eq!(stats.match_rate, 100.0);
}

#[test]
fn test_replay_uses_logged_snake_id() {
    // The rival is listed first; replaying as the rival would pick a different snake
    let engine = engine();
    let entries = engine
        .load_log_file(fixture_path("rival_danger.jsonl"))
        .unwrap();

    let results = engine.replay_all(&entries);
    assert_eq!(results.len(), 1);
    let result = &results[0];

    // Only food on the board sits under the rival's danger zone
    assert_eq!(result.replayed_focus, Focus::Avoid);
    // Logged "down" would run into our own neck
    assert_eq!(result.original_move, Direction::Down);
    assert!(!result.matches);
    assert_ne!(result.replayed_move, Direction::Down);

    let stats = engine.generate_stats(&results);
    assert_eq!(stats.mismatches, 1);
}

#[test]
fn test_legacy_entries_assume_first_snake() {
    let engine = engine();
    let entries = engine
        .load_log_file(fixture_path("legacy_format.jsonl"))
        .expect("blank lines should be skipped");

    assert_eq!(entries.len(), 1);
    assert!(entries[0].you_id.is_empty());

    let result = engine.replay_entry(&entries[0]).unwrap();
    assert!(result.matches);
    assert_eq!(result.replayed_move, Direction::Up);
    assert_eq!(result.original_focus, None);
}

#[test]
fn test_replay_specific_turns() {
    let engine = engine();
    let entries = engine
        .load_log_file(fixture_path("food_pursuit.jsonl"))
        .unwrap();

    let results = engine.replay_turns(&entries, &[2]).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].turn, 2);
    assert_eq!(results[0].replayed_move, Direction::Right);

    assert!(engine.replay_turns(&entries, &[99]).is_err());
}

#[test]
fn test_validate_expected_moves() {
    let engine = engine();
    let entries = engine
        .load_log_file(fixture_path("food_pursuit.jsonl"))
        .unwrap();

    assert!(engine
        .validate_expected_moves(
            &entries,
            &[(0, vec![Direction::Up]), (2, vec![Direction::Right, Direction::Left])]
        )
        .is_ok());

    let err = engine
        .validate_expected_moves(&entries, &[(1, vec![Direction::Down])])
        .unwrap_err();
    assert!(err.contains("Turn 1"), "unexpected error: {}", err);
}

#[test]
fn test_missing_log_file_is_an_error() {
    assert!(engine()
        .load_log_file(fixture_path("does_not_exist.jsonl"))
        .is_err());
}
