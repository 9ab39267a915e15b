//! Property-based tests for WeightedRandomSet
//!
//! Random sequences of operations are replayed against a `HashMap` model.

use std::collections::{HashMap, HashSet};

use moulberry_utils::probability::WeightedRandomSet;
use proptest::prelude::*;

use crate::common::seeded;

#[derive(Debug, Clone)]
enum Op {
    Insert(u8, f32),
    Remove(u8),
    Pop(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<u8>(), 1e-3f32..1e9).prop_map(|(e, w)| Op::Insert(e, w)),
        2 => any::<u8>().prop_map(Op::Remove),
        1 => any::<u64>().prop_map(Op::Pop),
    ]
}

fn model_total(model: &HashMap<u8, f32>) -> f32 {
    model.values().sum()
}

proptest! {
    /// Membership, length and total weight track a plain map
    #[test]
    fn operations_match_model(ops in prop::collection::vec(op(), 1..200)) {
        let mut set = WeightedRandomSet::new();
        let mut model: HashMap<u8, f32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(e, w) => {
                    let inserted = set.insert(e, w).unwrap();
                    prop_assert_eq!(inserted, !model.contains_key(&e));
                    model.entry(e).or_insert(w);
                },
                Op::Remove(e) => {
                    prop_assert_eq!(set.remove(&e), model.remove(&e).is_some());
                },
                Op::Pop(seed) => {
                    let popped = set.pop_with(&mut seeded(seed));
                    match popped {
                        Some(e) => {
                            prop_assert!(model.remove(&e).is_some());
                        },
                        None => {
                            prop_assert!(model.is_empty());
                        },
                    }
                },
            }

            prop_assert_eq!(set.len(), model.len());
            for (e, w) in &model {
                prop_assert_eq!(set.weight_of(e), Some(*w));
            }
            let expected = model_total(&model);
            prop_assert!((set.total_weight() - expected).abs() <= 1e-3 * expected);
            prop_assert_eq!(set.total_weight() > 0.0, !set.is_empty());
        }
    }

    /// Iteration yields exactly the elements, each once
    #[test]
    fn iteration_is_a_permutation(
        elements in prop::collection::hash_set(any::<u16>(), 0..100),
        removed in prop::collection::vec(any::<u16>(), 0..50),
        seed in any::<u64>(),
    ) {
        let mut set: WeightedRandomSet<u16> = elements.iter().copied().collect();
        let mut expected = elements;
        for e in &removed {
            set.remove(e);
            expected.remove(e);
        }

        let yielded: Vec<u16> = set.iter_with(seeded(seed)).copied().collect();
        let unique: HashSet<u16> = yielded.iter().copied().collect();
        prop_assert_eq!(yielded.len(), unique.len());
        prop_assert_eq!(unique, expected);
    }

    /// Sampling only ever returns members
    #[test]
    fn samples_are_members(
        entries in prop::collection::hash_map(any::<u8>(), 1e-3f32..1e9, 1..50),
        seed in any::<u64>(),
    ) {
        let mut set = WeightedRandomSet::new();
        for (&e, &w) in &entries {
            set.insert(e, w).unwrap();
        }

        let mut rng = seeded(seed);
        for _ in 0..50 {
            let sample = set.sample_with(&mut rng).copied();
            prop_assert!(sample.is_some_and(|e| entries.contains_key(&e)));
        }
    }

    /// Inserting only keeps the tree perfectly balanced
    #[test]
    fn inserts_keep_tree_balanced(count in 1usize..2000) {
        let set: WeightedRandomSet<usize> = (0..count).collect();
        let optimal = usize::BITS - (count - 1).leading_zeros();
        prop_assert_eq!(set.depth(), optimal as usize);
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn pop_everything_then_reuse() {
        let mut set: WeightedRandomSet<u8> = (0..=255).collect();
        let mut rng = seeded(3);
        let mut popped = 0;
        while set.pop_with(&mut rng).is_some() {
            popped += 1;
        }
        assert_eq!(popped, 256);
        assert_eq!(set.total_weight(), 0.0);

        set.insert(1, 2.0).unwrap();
        assert_eq!(set.sample_with(&mut rng), Some(&1));
    }
}
