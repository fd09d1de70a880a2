//! Property-based invariant tests for partitioning and selection.
//!
//! These tests verify structural invariants that must hold for any valid
//! inputs (unique keys; target keys drawn from the data unless noted):
//!
//! 1. Partition disjointness: every data key lands in exactly one pane.
//! 2. Target ordering: present target entries follow the target key order.
//! 3. Source ordering: source entries follow data order, minus target keys.
//! 4. Unresolvable target keys become holes, in place, never compacted.
//! 5. Move left removes exactly the enabled selection, remainder in order.
//! 6. Move right prepends the enabled selection to the old target keys.
//! 7. Select-all union then difference behaves as set algebra.
//! 8. Resync from a combined set yields disjoint panes whose union is the
//!    combined set.
//! 9. A move always empties both selections.

use std::collections::BTreeSet;

use duolist_core::{Direction, Pane, TransferConfig, TransferEngine, TransferItem, partition};
use proptest::prelude::*;

// ── Strategies ────────────────────────────────────────────────────────────

/// Unique record keys plus a shuffled subset of them as target keys and a
/// disabled flag per record.
fn arb_world() -> impl Strategy<Value = (Vec<TransferItem<()>>, Vec<String>)> {
    prop::collection::btree_set("[a-z]{1,5}", 1..24)
        .prop_flat_map(|keys| {
            let keys: Vec<String> = keys.into_iter().collect();
            let len = keys.len();
            let target = proptest::sample::subsequence(keys.clone(), 0..=len).prop_shuffle();
            let disabled = prop::collection::vec(any::<bool>(), len);
            (Just(keys), target, disabled)
        })
        .prop_map(|(keys, target, disabled)| {
            let data: Vec<TransferItem<()>> = keys
                .iter()
                .zip(disabled)
                .map(|(key, disabled)| TransferItem::new(key.clone(), ()).disabled(disabled))
                .collect();
            (data, target)
        })
}

/// A world plus a subset of the target keys to select in the target pane.
fn arb_world_with_target_selection()
-> impl Strategy<Value = (Vec<TransferItem<()>>, Vec<String>, Vec<String>)> {
    arb_world().prop_flat_map(|(data, target)| {
        let len = target.len();
        let selection = proptest::sample::subsequence(target.clone(), 0..=len);
        (Just(data), Just(target), selection)
    })
}

/// A world plus a subset of the source keys to select in the source pane.
fn arb_world_with_source_selection()
-> impl Strategy<Value = (Vec<TransferItem<()>>, Vec<String>, Vec<String>)> {
    arb_world().prop_flat_map(|(data, target)| {
        let source_keys: Vec<String> = data
            .iter()
            .map(|item| item.key().to_owned())
            .filter(|key| !target.contains(key))
            .collect();
        let len = source_keys.len();
        let selection = proptest::sample::subsequence(source_keys, 0..=len);
        (Just(data), Just(target), selection)
    })
}

fn arb_key_vec(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,4}", 0..max_len)
}

// ── 1. Partition disjointness ─────────────────────────────────────────────

proptest! {
    #[test]
    fn partition_covers_every_key_exactly_once((data, target_keys) in arb_world()) {
        let split = partition(&data, &target_keys, None);

        let mut seen = split.source_keys();
        seen.extend(split.present_target().map(|entry| entry.key.clone()));
        let unique: BTreeSet<&String> = seen.iter().collect();
        prop_assert_eq!(unique.len(), seen.len(), "a key landed in both panes");

        let mut seen_sorted = seen;
        seen_sorted.sort();
        let mut expected: Vec<String> = data.iter().map(|item| item.key().to_owned()).collect();
        expected.sort();
        prop_assert_eq!(seen_sorted, expected);
    }
}

// ── 2. Target ordering ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn target_pane_follows_target_key_order((data, target_keys) in arb_world()) {
        let split = partition(&data, &target_keys, None);
        let actual: Vec<String> = split.present_target().map(|entry| entry.key.clone()).collect();
        let data_keys: BTreeSet<&str> = data.iter().map(TransferItem::key).collect();
        let expected: Vec<String> = target_keys
            .iter()
            .filter(|key| data_keys.contains(key.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(actual, expected);
    }
}

// ── 3. Source ordering ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn source_pane_follows_data_order((data, target_keys) in arb_world()) {
        let split = partition(&data, &target_keys, None);
        let expected: Vec<String> = data
            .iter()
            .map(|item| item.key().to_owned())
            .filter(|key| !target_keys.contains(key))
            .collect();
        prop_assert_eq!(split.source_keys(), expected);
    }
}

// ── 4. Holes stay in place ────────────────────────────────────────────────

proptest! {
    #[test]
    fn ghost_target_key_leaves_a_hole_in_place((data, target_keys) in arb_world()) {
        // Uppercase never collides with the lowercase key alphabet.
        let mut with_ghost = vec!["GHOST".to_owned()];
        with_ghost.extend(target_keys.clone());

        let split = partition(&data, &with_ghost, None);
        prop_assert!(split.has_holes());
        prop_assert!(split.target[0].is_none());
        prop_assert_eq!(split.target.len(), with_ghost.len());
    }
}

// ── 5. Move left removes exactly the enabled selection ────────────────────

proptest! {
    #[test]
    fn move_left_removes_selection_in_order(
        (data, target_keys, selection) in arb_world_with_target_selection()
    ) {
        let mut engine = TransferEngine::new(TransferConfig::new());
        engine.select_all(Pane::Target, &selection, true);

        let outcome = engine.move_to(Direction::Left, &data, &target_keys);

        let disabled: BTreeSet<&str> = data
            .iter()
            .filter(|item| item.is_disabled())
            .map(TransferItem::key)
            .collect();
        let moved: BTreeSet<&str> = outcome.moved_keys.iter().map(String::as_str).collect();
        let expected: Vec<String> = target_keys
            .iter()
            .filter(|key| !moved.contains(key.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(&outcome.new_target_keys, &expected);

        // The enabled part of the selection moved; the disabled part did not.
        for key in &selection {
            prop_assert_eq!(
                moved.contains(key.as_str()),
                !disabled.contains(key.as_str()),
                "key {} mishandled by the disabled filter", key
            );
        }
    }
}

// ── 6. Move right prepends the enabled selection ──────────────────────────

proptest! {
    #[test]
    fn move_right_prepends_enabled_selection(
        (data, target_keys, selection) in arb_world_with_source_selection()
    ) {
        let mut engine = TransferEngine::new(TransferConfig::new());
        engine.select_all(Pane::Source, &selection, true);

        let outcome = engine.move_to(Direction::Right, &data, &target_keys);

        let disabled: BTreeSet<&str> = data
            .iter()
            .filter(|item| item.is_disabled())
            .map(TransferItem::key)
            .collect();
        // Selection state iterates sorted, so the expected prefix is the
        // sorted enabled selection.
        let mut expected: Vec<String> = selection
            .iter()
            .filter(|key| !disabled.contains(key.as_str()))
            .cloned()
            .collect();
        expected.sort();
        expected.extend(target_keys.iter().cloned());
        prop_assert_eq!(outcome.new_target_keys, expected);
    }
}

// ── 7. Select-all union / difference ──────────────────────────────────────

proptest! {
    #[test]
    fn select_all_is_union_then_difference(
        base in arb_key_vec(16),
        candidates in arb_key_vec(16),
    ) {
        let mut engine: TransferEngine<()> = TransferEngine::new(TransferConfig::new());
        engine.select_all(Pane::Source, &base, true);
        engine.select_all(Pane::Source, &candidates, true);

        let union: BTreeSet<String> = base.iter().chain(candidates.iter()).cloned().collect();
        prop_assert_eq!(engine.selection().pane(Pane::Source), &union);

        engine.select_all(Pane::Source, &candidates, false);
        let difference: BTreeSet<String> = base
            .iter()
            .filter(|key| !candidates.contains(*key))
            .cloned()
            .collect();
        prop_assert_eq!(engine.selection().pane(Pane::Source), &difference);
    }
}

// ── 8. Resync disjointness and union ──────────────────────────────────────

proptest! {
    #[test]
    fn resync_is_a_disjoint_split_of_the_combined_set(
        combined in arb_key_vec(20),
        target_keys in arb_key_vec(20),
    ) {
        let mut engine: TransferEngine<()> = TransferEngine::new(TransferConfig::new());
        engine.resync_selected(&combined, &target_keys);

        let source = engine.selection().pane(Pane::Source);
        let target = engine.selection().pane(Pane::Target);
        prop_assert!(source.intersection(target).next().is_none());

        let union: BTreeSet<String> = source.union(target).cloned().collect();
        let expected: BTreeSet<String> = combined.iter().cloned().collect();
        prop_assert_eq!(union, expected);

        for key in target {
            prop_assert!(target_keys.contains(key), "{} not a target key", key);
        }
    }
}

// ── 9. A move empties both selections ─────────────────────────────────────

proptest! {
    #[test]
    fn any_move_clears_both_selections(
        (data, target_keys, selection) in arb_world_with_source_selection(),
        go_right in any::<bool>(),
    ) {
        let mut engine = TransferEngine::new(TransferConfig::new());
        engine.select_all(Pane::Source, &selection, true);
        engine.select_all(Pane::Target, &target_keys, true);

        let direction = if go_right { Direction::Right } else { Direction::Left };
        engine.move_to(direction, &data, &target_keys);
        prop_assert_eq!(engine.selection().selected_count(), 0);
    }
}
