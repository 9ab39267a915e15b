//! Statistical tests for WeightedRandomSet
//!
//! Draw counts are compared against exact probabilities with a tolerance of
//! one percentage point. Seeded RNGs keep the runs reproducible.

use std::collections::HashMap;

use moulberry_utils::probability::WeightedRandomSet;

use crate::common::{seeded, set_of};

const TRIALS: usize = 200_000;
const TOLERANCE: f64 = 0.01;

const WEIGHTS: [(usize, f32); 3] = [(0, 17.0), (1, 32.0), (2, 51.0)];

fn ratio(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let ratio = count as f64 / TRIALS as f64;
    ratio
}

#[test]
fn sample_frequency_matches_weight() {
    let set = set_of(&WEIGHTS);
    assert_eq!(set.total_weight(), 100.0);
    assert_eq!(set.len(), 3);

    let mut rng = seeded(1337);
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for _ in 0..TRIALS {
        let sample = set.sample_with(&mut rng).expect("set is not empty");
        *counts.entry(*sample).or_default() += 1;
    }

    for (element, weight) in WEIGHTS {
        let expected = f64::from(weight) / 100.0;
        let actual = ratio(counts[&element]);
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "element {element}: expected {expected}, got {actual}"
        );
    }
}

#[test]
fn pop_frequency_matches_weight() {
    let template = set_of(&WEIGHTS);
    let mut rng = seeded(7);
    let mut counts = [0usize; 3];

    for _ in 0..TRIALS {
        let mut set = template.clone();
        let popped = set.pop_with(&mut rng).expect("set is not empty");
        counts[popped] += 1;
        assert_eq!(set.len(), 2);
    }

    for (element, weight) in WEIGHTS {
        let expected = f64::from(weight) / 100.0;
        assert!((ratio(counts[element]) - expected).abs() < TOLERANCE);
    }
}

/// Probability that `element` is yielded at `position` when drawing without
/// replacement proportionally to weight
fn theoretical(position: usize, element: usize) -> f64 {
    let w: Vec<f64> = WEIGHTS.iter().map(|&(_, weight)| f64::from(weight)).collect();
    let total: f64 = w.iter().sum();

    let mut p = 0.0;
    for first in 0..3 {
        for second in 0..3 {
            if second == first {
                continue;
            }
            let third = 3 - first - second;
            let order = [first, second, third];
            if order[position] != element {
                continue;
            }
            p += w[first] / total * (w[second] / (total - w[first]));
        }
    }
    p
}

#[test]
fn iteration_order_matches_weight() {
    let set: WeightedRandomSet<usize> = set_of(&WEIGHTS);
    let mut rng = seeded(42);
    let mut counts = [[0usize; 3]; 3];

    for _ in 0..TRIALS {
        for (position, &element) in set.iter_with(&mut rng).enumerate() {
            counts[position][element] += 1;
        }
    }

    for (position, row) in counts.iter().enumerate() {
        for (element, &count) in row.iter().enumerate() {
            let expected = theoretical(position, element);
            let actual = ratio(count);
            assert!(
                (actual - expected).abs() < TOLERANCE,
                "position {position}, element {element}: expected {expected}, got {actual}"
            );
        }
    }
}

#[test]
fn theoretical_rows_sum_to_one() {
    for position in 0..3 {
        let sum: f64 = (0..3).map(|element| theoretical(position, element)).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}

#[test]
fn sampling_stays_uniform_after_removing_dominant_element() {
    let mut set = set_of(&[("heavy", 1e8), ("b", 1.0), ("c", 1.0)]);
    assert!(set.remove("heavy"));
    assert_eq!(set.total_weight(), 2.0);

    let mut rng = seeded(11);
    let mut b = 0;
    for _ in 0..TRIALS {
        if set.sample_with(&mut rng) == Some(&"b") {
            b += 1;
        }
    }

    let actual = ratio(b);
    assert!((actual - 0.5).abs() < TOLERANCE, "expected 0.5, got {actual}");
}

#[test]
fn iteration_after_dominant_element_is_weighted() {
    let set = set_of(&[("heavy", 1e8), ("b", 1.0), ("c", 1.0)]);
    let mut rng = seeded(12);
    let mut b_second = 0;

    for _ in 0..TRIALS {
        let order: Vec<&str> = set.iter_with(&mut rng).copied().collect();
        assert_eq!(order.len(), 3);
        if order[0] == "heavy" && order[1] == "b" {
            b_second += 1;
        }
    }

    let actual = ratio(b_second);
    assert!((actual - 0.5).abs() < TOLERANCE, "expected 0.5, got {actual}");
}
