use crate::sorted_set::SortedSet;
use proptest::collection::vec as pvec;
use proptest::prelude::*;
use std::collections::BTreeSet as StdBTreeSet;
use test_strategy::proptest;

#[derive(Debug, Clone)]
enum Operation {
    Insert(u16),
    InsertHint { hint: usize, key: u16 },
    Remove(u16),
    Contains(u16),
    LowerBound(u16),
    UpperBound(u16),
    Clear,
}

// A custom strategy that gives unequal weights to the different operations.
// `Insert` and `InsertHint` outweigh `Remove` so that, on average, the sets
// grow the more operations are executed. The key space is kept narrow so
// duplicate insertions and hits are frequent.
fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        40 => any::<u16>().prop_map(|k| Operation::Insert(k % 512)),
        25 => (any::<usize>(), any::<u16>())
            .prop_map(|(hint, k)| Operation::InsertHint { hint, key: k % 512 }),
        15 => any::<u16>().prop_map(|k| Operation::Remove(k % 512)),
        10 => any::<u16>().prop_map(|k| Operation::Contains(k % 512)),
        4 => any::<u16>().prop_map(|k| Operation::LowerBound(k % 512)),
        4 => any::<u16>().prop_map(|k| Operation::UpperBound(k % 512)),
        1 => Just(Operation::Clear),
    ]
}

// Runs a comprehensive test for the major SortedSet operations.
// Results are validated against a standard BTreeSet.
#[proptest(cases = 10)]
fn comprehensive(#[strategy(pvec(operation_strategy(), 100..1_000))] ops: Vec<Operation>) {
    let mut set = SortedSet::new();
    let mut std_set = StdBTreeSet::new();

    for op in ops.into_iter() {
        execute_operation(&mut std_set, &mut set, op);
        prop_assert_eq!(set.len(), std_set.len());
        // Sortedness and uniqueness must hold after every operation.
        prop_assert_eq!(Ok(()), set.check_invariant());
    }

    // The flat set iterates in the same sorted order as the reference.
    let items: Vec<u16> = set.iter().copied().collect();
    let std_items: Vec<u16> = std_set.iter().copied().collect();
    prop_assert_eq!(items, std_items);
}

// For any key and any hint position, hinted insertion leaves the set in the
// state plain insertion produces; only the lookup cost may differ.
#[proptest]
fn hint_independence(
    #[strategy(pvec(any::<u16>(), 0..64))] seed: Vec<u16>,
    key: u16,
    hint: usize,
) {
    let base = SortedSet::from_vec(seed);
    let hint = hint % (base.len() + 1);

    let mut plain = base.clone();
    let expected = plain.insert(key);

    let mut hinted = base;
    prop_assert_eq!(hinted.insert_hint(hint, key), expected);
    prop_assert_eq!(hinted.as_slice(), plain.as_slice());
}

// Bulk construction sorts and deduplicates arbitrary input.
#[proptest]
fn from_vec_matches_reference(#[strategy(pvec(any::<u16>(), 0..200))] input: Vec<u16>) {
    let set = SortedSet::from_vec(input.clone());
    let std_set: StdBTreeSet<u16> = input.into_iter().collect();

    let items: Vec<u16> = set.into_vec();
    let std_items: Vec<u16> = std_set.into_iter().collect();
    prop_assert_eq!(items, std_items);
}

// Given an operation, executes it on the given flat set and standard set,
// verifying that the result of the operation is equal in both.
fn execute_operation(std_set: &mut StdBTreeSet<u16>, set: &mut SortedSet<u16>, op: Operation) {
    match op {
        Operation::Insert(key) => {
            let std_inserted = std_set.insert(key);

            eprintln!("Insert({key})");
            let (pos, inserted) = set.insert(key);
            assert_eq!(std_inserted, inserted);
            assert_eq!(set.get(pos), Some(&key));
        }
        Operation::InsertHint { hint, key } => {
            let hint = hint % (set.len() + 1);
            let std_inserted = std_set.insert(key);

            eprintln!("InsertHint({hint}, {key})");
            let (pos, inserted) = set.insert_hint(hint, key);
            assert_eq!(std_inserted, inserted);
            assert_eq!(set.get(pos), Some(&key));
        }
        Operation::Remove(key) => {
            let std_removed = std_set.remove(&key);

            eprintln!("Remove({key})");
            assert_eq!(std_removed, set.remove(&key));
        }
        Operation::Contains(key) => {
            eprintln!("Contains({key})");
            assert_eq!(std_set.contains(&key), set.contains(&key));
            assert_eq!(usize::from(std_set.contains(&key)), set.count(&key));
        }
        Operation::LowerBound(key) => {
            eprintln!("LowerBound({key})");
            // The lower bound is the number of elements ordered before the key.
            let expected = std_set.range(..key).count();
            assert_eq!(expected, set.lower_bound(&key));
            assert!(set.lower_bound(&key) <= set.upper_bound(&key));
        }
        Operation::UpperBound(key) => {
            eprintln!("UpperBound({key})");
            // The upper bound is the number of elements not ordered after the key.
            let expected = std_set.range(..=key).count();
            assert_eq!(expected, set.upper_bound(&key));
        }
        Operation::Clear => {
            eprintln!("Clear");
            std_set.clear();
            set.clear();
        }
    }
}
