//! Page Replacement Policy Tests.
//!
//! Exercises each `ReplacementPolicy` in isolation: fills and hits are recorded by
//! slot and reference position, then `victim` is queried directly.

use rstest::rstest;

use osvis_core::paging::policies::{
    FifoPolicy, LruPolicy, OptimalPolicy, PolicyKind, ReplacementPolicy,
};

// ══════════════════════════════════════════════════════════
// 1. FIFO
// ══════════════════════════════════════════════════════════

#[test]
fn fifo_round_robin_eviction_order() {
    let mut policy = FifoPolicy::new(3);
    for slot in 0..3 {
        policy.record_fill(slot, slot);
    }

    // Each victim is refilled, so the pointer walks 0, 1, 2 and wraps.
    for (position, expected) in [0, 1, 2, 0].into_iter().enumerate() {
        let victim = policy.victim(&[9, 9, 9], &[]);
        assert_eq!(victim, expected);
        policy.record_fill(victim, 3 + position);
    }
}

#[test]
fn fifo_ignores_hits() {
    let mut policy = FifoPolicy::new(3);
    for slot in 0..3 {
        policy.record_fill(slot, slot);
    }
    policy.record_hit(0, 3);
    policy.record_hit(0, 4);
    assert_eq!(policy.victim(&[1, 2, 3], &[]), 0);
}

#[test]
fn fifo_reset_rewinds_pointer() {
    let mut policy = FifoPolicy::new(2);
    policy.record_fill(0, 0);
    policy.record_fill(1, 1);
    policy.record_fill(0, 2);
    assert_eq!(policy.victim(&[1, 2], &[]), 1);
    policy.reset();
    assert_eq!(policy.victim(&[1, 2], &[]), 0);
}

// ══════════════════════════════════════════════════════════
// 2. LRU
// ══════════════════════════════════════════════════════════

#[test]
fn lru_evicts_oldest_use() {
    let mut policy = LruPolicy::new(3);
    policy.record_fill(0, 0);
    policy.record_fill(1, 1);
    policy.record_fill(2, 2);
    assert_eq!(policy.victim(&[1, 2, 3], &[]), 0);

    // Re-reference slot 0: slot 1 becomes least recent.
    policy.record_hit(0, 3);
    assert_eq!(policy.victim(&[1, 2, 3], &[]), 1);

    policy.record_hit(1, 4);
    assert_eq!(policy.victim(&[1, 2, 3], &[]), 2);
}

#[rstest]
#[case::all_equal([5, 5, 5], 0)]
#[case::tie_at_back([7, 5, 5], 1)]
#[case::single_minimum([7, 6, 5], 2)]
fn lru_ties_go_to_lowest_slot(#[case] last_used: [usize; 3], #[case] expected: usize) {
    let mut policy = LruPolicy::new(3);
    for (slot, position) in last_used.into_iter().enumerate() {
        policy.record_fill(slot, position);
    }
    assert_eq!(policy.victim(&[1, 2, 3], &[]), expected);
}

// ══════════════════════════════════════════════════════════
// 3. Optimal
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::farthest_next_use(vec![1, 2, 3], vec![1, 2, 3], 2)]
#[case::never_again(vec![1, 2, 3], vec![3, 1], 1)]
#[case::all_never_again(vec![1, 2, 3], vec![], 0)]
#[case::two_never_again(vec![1, 2, 3], vec![1], 1)]
fn optimal_victim(
    #[case] resident: Vec<u32>,
    #[case] upcoming: Vec<u32>,
    #[case] expected: usize,
) {
    let mut policy = OptimalPolicy::new();
    assert_eq!(policy.victim(&resident, &upcoming), expected);
}

#[test]
fn optimal_ignores_history() {
    let mut policy = OptimalPolicy::new();
    policy.record_fill(0, 0);
    policy.record_hit(2, 10);
    assert_eq!(policy.victim(&[4, 5, 6], &[6, 5, 4]), 0);
}

// ══════════════════════════════════════════════════════════
// 4. Construction
// ══════════════════════════════════════════════════════════

#[test]
fn build_returns_matching_kind() {
    for kind in PolicyKind::ALL {
        assert_eq!(kind.build(3).kind(), kind);
    }
}

#[rstest]
#[case(PolicyKind::Fifo, "FIFO")]
#[case(PolicyKind::Lru, "LRU")]
#[case(PolicyKind::Optimal, "Optimal")]
fn labels(#[case] kind: PolicyKind, #[case] label: &str) {
    assert_eq!(kind.to_string(), label);
}
