//! Property-based tests for SortedSet laws.
//!
//! These tests verify that SortedSet keeps its ordering and uniqueness
//! guarantees and that its set algebra behaves like set algebra.

use proptest::prelude::*;
use sortkit::collections::SortedSet;

fn sorted_unique(mut elements: Vec<i32>) -> Vec<i32> {
    elements.sort_unstable();
    elements.dedup();
    elements
}

fn sorted_unique_strings(mut elements: Vec<String>) -> Vec<String> {
    elements.sort_unstable();
    elements.dedup();
    elements
}

// =============================================================================
// Ordering Law
// Description: Enumeration is the ascending sort of the inserted elements
// with duplicates collapsed
// =============================================================================

proptest! {
    #[test]
    fn prop_enumeration_is_sorted_and_unique(
        elements in prop::collection::vec(-50i32..50, 0..80)
    ) {
        let set: SortedSet<i32> = elements.iter().copied().collect();
        prop_assert_eq!(set.into_vec(), sorted_unique(elements));
    }
}

proptest! {
    #[test]
    fn prop_string_enumeration_is_strictly_ascending(
        elements in prop::collection::vec("[a-cA-C àáÀÅçÇéßæÆœ1\u{0301}\u{0308}-]{0,4}", 0..40)
    ) {
        use sortkit::comparable::Comparable;
        use std::cmp::Ordering;

        let set: SortedSet<String> = elements.iter().cloned().collect();
        for pair in set.as_slice().windows(2) {
            prop_assert_eq!(pair[0].compare_to(&pair[1]), Ordering::Less);
            prop_assert_eq!(pair[1].compare_to(&pair[0]), Ordering::Greater);
        }
        prop_assert_eq!(set.len(), sorted_unique_strings(elements.clone()).len());
        for element in &elements {
            prop_assert!(set.has(element));
        }
    }
}

// =============================================================================
// Idempotence Law
// Description: add(x); add(x) == add(x)
// =============================================================================

proptest! {
    #[test]
    fn prop_add_is_idempotent(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        value: i32
    ) {
        let mut once: SortedSet<i32> = elements.into_iter().collect();
        once.add(value);
        let mut twice = once.clone();
        twice.add(value);

        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// Delete Law
// Description: Deleting an absent element changes nothing; deleting a
// present element removes exactly that element
// =============================================================================

proptest! {
    #[test]
    fn prop_delete_removes_exactly_one(
        elements in prop::collection::vec(-20i32..20, 0..50),
        value in -25i32..25
    ) {
        let mut set: SortedSet<i32> = elements.into_iter().collect();
        let before = set.clone();
        let was_present = set.has(&value);

        prop_assert_eq!(set.delete(&value), was_present);
        prop_assert!(!set.has(&value));

        if was_present {
            prop_assert_eq!(set.len() + 1, before.len());
            let mut restored = set.clone();
            restored.add(value);
            prop_assert_eq!(restored, before);
        } else {
            prop_assert_eq!(set, before);
        }
    }
}

// =============================================================================
// Clear Law
// =============================================================================

proptest! {
    #[test]
    fn prop_clear_empties(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut set: SortedSet<i32> = elements.into_iter().collect();
        set.clear();

        prop_assert_eq!(set.size(), 0);
        prop_assert_eq!(set.iter().next(), None);
    }
}

// =============================================================================
// Membership Law
// Description: has(x) iff x was inserted
// =============================================================================

proptest! {
    #[test]
    fn prop_has_matches_insertions(
        elements in prop::collection::vec(-20i32..20, 0..50),
        probe in -25i32..25
    ) {
        let set: SortedSet<i32> = elements.iter().copied().collect();
        prop_assert_eq!(set.has(&probe), elements.contains(&probe));
    }
}

// =============================================================================
// Round-Trip Law
// =============================================================================

proptest! {
    #[test]
    fn prop_round_trip_through_iteration(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let original: SortedSet<i32> = elements.into_iter().collect();
        let copy: SortedSet<i32> = original.iter().copied().collect();

        prop_assert_eq!(copy.as_slice(), original.as_slice());
    }
}

// =============================================================================
// Set Algebra Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_intersection_partition_union(
        left in prop::collection::vec(-15i32..15, 0..30),
        right in prop::collection::vec(-15i32..15, 0..30)
    ) {
        let set_a: SortedSet<i32> = left.into_iter().collect();
        let set_b: SortedSet<i32> = right.into_iter().collect();

        let only_a = set_a.difference(&set_b);
        let both = set_a.intersection(&set_b);
        let only_b = set_b.difference(&set_a);
        let union = set_a.union(&set_b);

        prop_assert!(only_a.is_disjoint_from(&both));
        prop_assert!(only_a.is_disjoint_from(&only_b));
        prop_assert!(both.is_disjoint_from(&only_b));
        prop_assert_eq!(only_a.len() + both.len() + only_b.len(), union.len());
        prop_assert_eq!(only_a.union(&both).union(&only_b), union);
    }
}

proptest! {
    #[test]
    fn prop_symmetric_difference_is_union_minus_intersection(
        left in prop::collection::vec(-15i32..15, 0..30),
        right in prop::collection::vec(-15i32..15, 0..30)
    ) {
        let set_a: SortedSet<i32> = left.into_iter().collect();
        let set_b: SortedSet<i32> = right.into_iter().collect();

        let expected = set_a.union(&set_b).difference(&set_a.intersection(&set_b));
        prop_assert_eq!(set_a.symmetric_difference(&set_b), expected);
    }
}

proptest! {
    #[test]
    fn prop_intersection_is_commutative(
        left in prop::collection::vec(-15i32..15, 0..30),
        right in prop::collection::vec(-15i32..15, 0..30)
    ) {
        let set_a: SortedSet<i32> = left.into_iter().collect();
        let set_b: SortedSet<i32> = right.into_iter().collect();

        prop_assert_eq!(set_a.intersection(&set_b), set_b.intersection(&set_a));
    }
}

proptest! {
    #[test]
    fn prop_subset_and_superset_are_inverses(
        left in prop::collection::vec(-8i32..8, 0..10),
        right in prop::collection::vec(-8i32..8, 0..16)
    ) {
        let set_a: SortedSet<i32> = left.into_iter().collect();
        let set_b: SortedSet<i32> = right.into_iter().collect();

        prop_assert_eq!(set_a.is_subset_of(&set_b), set_b.is_superset_of(&set_a));
        prop_assert_eq!(set_b.is_subset_of(&set_a), set_a.is_superset_of(&set_b));
        prop_assert!(set_a.intersection(&set_b).is_subset_of(&set_a));
        prop_assert!(set_a.union(&set_b).is_superset_of(&set_b));
    }
}

proptest! {
    #[test]
    fn prop_disjoint_iff_intersection_empty(
        left in prop::collection::vec(-15i32..15, 0..20),
        right in prop::collection::vec(-15i32..15, 0..20)
    ) {
        let set_a: SortedSet<i32> = left.into_iter().collect();
        let set_b: SortedSet<i32> = right.into_iter().collect();

        prop_assert_eq!(
            set_a.is_disjoint_from(&set_b),
            set_a.intersection(&set_b).is_empty()
        );
    }
}

proptest! {
    #[test]
    fn prop_union_size_bound(
        left in prop::collection::vec(-15i32..15, 0..20),
        right in prop::collection::vec(-15i32..15, 0..20)
    ) {
        let set_a: SortedSet<i32> = left.into_iter().collect();
        let set_b: SortedSet<i32> = right.into_iter().collect();
        let union = set_a.union(&set_b);

        prop_assert!(union.len() <= set_a.len() + set_b.len());
        prop_assert_eq!(
            union.len() == set_a.len() + set_b.len(),
            set_a.is_disjoint_from(&set_b)
        );
    }
}
