//! Banker's Safety Checker Tests.
//!
//! Covers construction (shape checks, Need derivation, sequence search and validation),
//! the clamped step cursor, and the state derived from it.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::{classroom_checker, init_tracing, rows};
use osvis_core::bankers::{ProcessStatus, SafetyChecker};
use osvis_core::config::SafeSequenceSource;
use osvis_core::{EngineError, scenario};

// ══════════════════════════════════════════════════════════
// 1. Construction
// ══════════════════════════════════════════════════════════

#[test]
fn need_is_max_minus_allocation() {
    let checker = classroom_checker();
    assert_eq!(
        checker.need().to_rows(),
        rows([[7, 4, 3], [1, 2, 2], [6, 0, 0], [0, 1, 1], [4, 3, 1]])
    );
    assert_eq!(checker.process_count(), 5);
    assert_eq!(checker.resource_count(), 3);
}

/// The repeated-pass search lands on the same order the classroom material ships.
#[test]
fn computed_sequence_matches_supplied_sequence() {
    init_tracing();
    let computed = scenario::safety_checker(SafeSequenceSource::Computed).unwrap();
    assert_eq!(computed.sequence(), &[1, 3, 4, 0, 2]);
    assert_eq!(computed.sequence(), classroom_checker().sequence());
}

#[test]
fn allocation_row_count_mismatch_is_rejected() {
    let max = rows(scenario::MAX);
    let allocation = rows(scenario::ALLOCATION)[..4].to_vec();
    let err = SafetyChecker::new(&max, &allocation, &scenario::AVAILABLE).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidMatrixShape {
            matrix: "allocation",
            expected_rows: 5,
            expected_cols: 3,
            rows: 4,
            cols: 3,
        }
    );
}

#[test]
fn available_width_must_match_matrix_columns() {
    let err = SafetyChecker::new(
        &rows(scenario::MAX),
        &rows(scenario::ALLOCATION),
        &[3, 3],
    )
    .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidMatrixShape {
            matrix: "max",
            expected_rows: 5,
            expected_cols: 2,
            rows: 5,
            cols: 3,
        }
    );
}

#[test]
fn allocation_above_max_is_rejected() {
    let err = SafetyChecker::new(&[vec![2, 2]], &[vec![1, 3]], &[0, 0]).unwrap_err();
    assert_eq!(
        err,
        EngineError::AllocationExceedsMax {
            process: 0,
            resource: 1,
            allocation: 3,
            max: 2,
        }
    );
}

#[test]
fn returned_allocation_overflowing_units_is_rejected() {
    init_tracing();
    let err = SafetyChecker::new(&[vec![1], vec![1]], &[vec![1], vec![1]], &[u32::MAX])
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::ResourceOverflow {
            process: 0,
            resource: 0,
        }
    );

    let err = SafetyChecker::with_sequence(
        &[vec![0, 2], vec![0, 2]],
        &[vec![0, 1], vec![0, 1]],
        &[0, u32::MAX - 1],
        vec![1, 0],
    )
    .unwrap_err();
    assert_eq!(
        err,
        EngineError::ResourceOverflow {
            process: 0,
            resource: 1,
        }
    );
}

#[test]
fn unsafe_state_reports_completed_and_blocked() {
    init_tracing();
    // P0 needs 1 and fits; P1 needs 2 but only 1 unit is ever free.
    let err = SafetyChecker::new(&[vec![1], vec![3]], &[vec![0], vec![1]], &[1]).unwrap_err();
    assert_eq!(
        err,
        EngineError::UnsafeState {
            completed: vec![0],
            blocked: vec![1],
        }
    );
}

#[test]
fn fully_blocked_state_has_empty_completed_prefix() {
    let err = SafetyChecker::new(&[vec![2], vec![2]], &[vec![1], vec![1]], &[0]).unwrap_err();
    assert_eq!(
        err,
        EngineError::UnsafeState {
            completed: vec![],
            blocked: vec![0, 1],
        }
    );
}

#[rstest]
#[case::too_short(vec![1, 3, 4, 0])]
#[case::duplicate(vec![1, 3, 4, 0, 0])]
#[case::unknown_process(vec![1, 3, 4, 0, 9])]
#[case::infeasible_first_step(vec![0, 1, 2, 3, 4])]
fn supplied_sequence_must_replay(#[case] sequence: Vec<usize>) {
    let err = SafetyChecker::with_sequence(
        &rows(scenario::MAX),
        &rows(scenario::ALLOCATION),
        &scenario::AVAILABLE,
        sequence,
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::InvalidSafeSequence { .. }), "{err}");
}

#[test]
fn alternative_safe_order_is_accepted() {
    // Restarting the scan after every pick yields this order instead.
    let checker = SafetyChecker::with_sequence(
        &rows(scenario::MAX),
        &rows(scenario::ALLOCATION),
        &scenario::AVAILABLE,
        vec![1, 3, 0, 2, 4],
    )
    .unwrap();
    assert_eq!(checker.sequence(), &[1, 3, 0, 2, 4]);
}

#[test]
fn no_processes_is_trivially_safe() {
    let checker = SafetyChecker::new(&[], &[], &[4, 2]).unwrap();
    assert!(checker.sequence().is_empty());
    assert!(checker.is_complete());
    assert_eq!(checker.current_highlight(), None);
    assert_eq!(checker.current_available(), vec![4, 2]);
}

// ══════════════════════════════════════════════════════════
// 2. Cursor
// ══════════════════════════════════════════════════════════

#[test]
fn current_available_accumulates_completed_allocations() {
    let mut checker = classroom_checker();
    let mut seen = vec![checker.current_available()];
    while !checker.is_complete() {
        checker.advance();
        seen.push(checker.current_available());
    }
    assert_eq!(
        seen,
        vec![
            vec![3, 3, 2],
            vec![5, 3, 2],
            vec![7, 4, 3],
            vec![7, 4, 5],
            vec![7, 5, 5],
            vec![10, 5, 7],
        ]
    );
}

#[test]
fn highlight_follows_sequence_then_clears() {
    let mut checker = classroom_checker();
    let mut highlights = Vec::new();
    for _ in 0..6 {
        highlights.push(checker.current_highlight());
        checker.advance();
    }
    assert_eq!(
        highlights,
        vec![Some(1), Some(3), Some(4), Some(0), Some(2), None]
    );
}

#[test]
fn advance_at_terminal_step_is_a_no_op() {
    let mut checker = classroom_checker();
    for _ in 0..5 {
        checker.advance();
    }
    let before = checker.snapshot();
    checker.advance();
    assert_eq!(checker.step(), 5);
    assert_eq!(checker.snapshot(), before);
}

#[test]
fn retreat_at_step_zero_is_a_no_op() {
    let mut checker = classroom_checker();
    let before = checker.snapshot();
    checker.retreat();
    assert_eq!(checker.step(), 0);
    assert_eq!(checker.snapshot(), before);
}

#[test]
fn retreat_undoes_advance() {
    let mut checker = classroom_checker();
    checker.advance();
    checker.advance();
    let at_two = checker.snapshot();
    checker.advance();
    checker.retreat();
    assert_eq!(checker.snapshot(), at_two);
}

#[test]
fn reset_returns_to_initial_state() {
    let mut checker = classroom_checker();
    let initial = checker.snapshot();
    checker.advance();
    checker.advance();
    checker.advance();
    checker.reset();
    assert_eq!(checker.snapshot(), initial);
}

// ══════════════════════════════════════════════════════════
// 3. Derived display state
// ══════════════════════════════════════════════════════════

#[test]
fn statuses_after_two_completions() {
    let mut checker = classroom_checker();
    checker.advance();
    checker.advance();
    // Completed: P1, P3. Executing: P4.
    assert_eq!(
        checker.snapshot().statuses,
        vec![
            ProcessStatus::Waiting,
            ProcessStatus::Completed,
            ProcessStatus::Waiting,
            ProcessStatus::Completed,
            ProcessStatus::Executing,
        ]
    );
    assert_eq!(checker.last_completed(), Some(3));
    assert_eq!(checker.snapshot().completed(), &[1, 3]);
}

#[test]
fn completed_prefix_of_hand_built_snapshot_is_clamped() {
    let mut snapshot = classroom_checker().snapshot();
    snapshot.step = snapshot.sequence.len() + 3;
    assert_eq!(snapshot.completed(), &[1, 3, 4, 0, 2]);

    snapshot.step = 0;
    assert!(snapshot.completed().is_empty());
}

#[test]
fn headline_tracks_step() {
    let mut checker = classroom_checker();
    assert_eq!(
        checker.headline(),
        "Step 1: Checking if P1 can be allocated resources"
    );
    checker.advance();
    assert_eq!(
        checker.headline(),
        "Step 2: Checking if P3 can be allocated resources"
    );
    for _ in 0..4 {
        checker.advance();
    }
    assert_eq!(
        checker.headline(),
        "Safety Check Complete - System is in Safe State"
    );
}

#[test]
fn snapshot_serializes_for_renderers() {
    let mut checker = classroom_checker();
    checker.advance();
    let json = serde_json::to_value(checker.snapshot()).unwrap();
    assert_eq!(json["step"], 1);
    assert_eq!(json["highlight"], 3);
    assert_eq!(json["current_available"], serde_json::json!([5, 3, 2]));
    assert_eq!(json["statuses"][1], "Completed");
}
