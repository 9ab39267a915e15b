//! Weighted random selection
//!
//! - [`WeightedRandomSet`] - a set where each element has a weight, supporting
//!   weighted sampling, weighted removal and weighted-random-order iteration
//! - [`Iter`] - the iterator returned by [`WeightedRandomSet::iter`]

mod iter;
mod tree;
mod weighted_set;

pub use iter::Iter;
pub use weighted_set::WeightedRandomSet;
