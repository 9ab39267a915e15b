//! Hash set with weighted random sampling

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use rand::Rng;
use rand::rngs::ThreadRng;

use super::iter::Iter;
use super::tree::{NodeId, SumTree};
use crate::error::{Error, Result};
use crate::functional::ExceptionalConsumer;

/// A set whose elements carry positive weights
///
/// Sampling, popping and insertion are `O(log n)`. Elements are stored in a
/// balanced sum tree indexed by a hash map, so membership tests are `O(1)`.
///
/// Equality follows set semantics: two sets are equal when they hold the same
/// elements, whatever their weights.
///
/// # Examples
///
/// ```
/// use moulberry_utils::probability::WeightedRandomSet;
///
/// let mut loot = WeightedRandomSet::new();
/// loot.insert("common", 90.0).unwrap();
/// loot.insert("rare", 9.0).unwrap();
/// loot.insert("legendary", 1.0).unwrap();
///
/// assert_eq!(loot.total_weight(), 100.0);
/// assert!(loot.sample().is_some());
///
/// // Every element exactly once, heavier ones tending to come first
/// assert_eq!(loot.iter().count(), 3);
/// ```
#[derive(Clone)]
pub struct WeightedRandomSet<E> {
    tree: SumTree<E>,
    index: HashMap<E, NodeId>,
}

impl<E> WeightedRandomSet<E>
where
    E: Eq + Hash + Clone,
{
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: SumTree::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an element with the given weight
    ///
    /// Returns `Ok(false)` if the element is already present; its weight is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWeight`] if `weight` is not finite or not positive,
    /// [`Error::WeightOverflow`] if the total weight would become infinite.
    /// The set is left unchanged either way.
    pub fn insert(&mut self, element: E, weight: f32) -> Result<bool> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidWeight(weight));
        }
        if self.index.contains_key(&element) {
            return Ok(false);
        }
        if !(self.total_weight() + weight).is_finite() {
            return Err(Error::WeightOverflow(weight));
        }
        Ok(self.insert_checked(element, weight))
    }

    /// Insert an element with weight `1.0`
    pub fn insert_unit(&mut self, element: E) -> bool {
        self.insert_checked(element, 1.0)
    }

    fn insert_checked(&mut self, element: E, weight: f32) -> bool {
        if self.index.contains_key(&element) {
            return false;
        }
        let leaf = self.tree.insert(element.clone(), weight);
        self.index.insert(element, leaf);
        true
    }

    /// Remove an element, returning whether it was present
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(leaf) = self.index.remove(element) else {
            return false;
        };
        self.remove_leaf(leaf).is_some()
    }

    fn remove_leaf(&mut self, leaf: NodeId) -> Option<E> {
        let index = &mut self.index;
        self.tree.remove_leaf(leaf, |moved, to| {
            if let Some(slot) = index.get_mut(moved) {
                *slot = to;
            }
        })
    }

    /// Check whether an element is present
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(element)
    }

    /// Weight an element was inserted with
    #[must_use]
    pub fn weight_of<Q>(&self, element: &Q) -> Option<f32>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(element).map(|&leaf| self.tree.node(leaf).weight)
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the set has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Sum of all weights (`0` when empty)
    #[must_use]
    pub fn total_weight(&self) -> f32 {
        self.tree.total_weight()
    }

    /// Height of the backing tree in edges (`0` for zero or one element)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Pick a random element with probability `weight / total_weight`
    #[must_use]
    pub fn sample(&self) -> Option<&E> {
        self.sample_with(&mut rand::thread_rng())
    }

    /// [`sample`](Self::sample) using the given random source
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&E> {
        let leaf = self.pick(rng)?;
        self.tree.element(leaf)
    }

    /// Remove and return a random element, chosen as in [`sample`](Self::sample)
    pub fn pop(&mut self) -> Option<E> {
        self.pop_with(&mut rand::thread_rng())
    }

    /// [`pop`](Self::pop) using the given random source
    pub fn pop_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<E> {
        let leaf = self.pick(rng)?;
        let element = self.remove_leaf(leaf)?;
        self.index.remove(&element);
        Some(element)
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<NodeId> {
        if self.is_empty() {
            return None;
        }
        let value = rng.r#gen::<f32>() * self.total_weight();
        self.tree.find(value)
    }

    /// Iterate in weighted-random order without replacement
    pub fn iter(&self) -> Iter<'_, E, ThreadRng> {
        self.iter_with(rand::thread_rng())
    }

    /// [`iter`](Self::iter) using the given random source
    pub fn iter_with<R: Rng>(&self, rng: R) -> Iter<'_, E, R> {
        Iter::new(&self.tree, self.len(), rng)
    }

    /// Elements in unspecified (hash) order
    pub fn elements(&self) -> impl Iterator<Item = &E> {
        self.index.keys()
    }

    /// Elements and their weights in unspecified (hash) order
    pub fn entries(&self) -> impl Iterator<Item = (&E, f32)> {
        self.index.iter().map(|(element, &leaf)| (element, self.tree.node(leaf).weight))
    }

    /// Keep only the elements for which `keep` returns `true`
    ///
    /// Returns whether anything was removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&E) -> bool) -> bool {
        let doomed: Vec<E> = self.index.keys().filter(|&e| !keep(e)).cloned().collect();
        for element in &doomed {
            self.remove(element);
        }
        !doomed.is_empty()
    }

    /// Keep only elements that are also in `other`
    pub fn retain_all(&mut self, other: &HashSet<E>) -> bool {
        self.retain(|e| other.contains(e))
    }

    /// Remove every element yielded by `elements`
    ///
    /// Returns whether anything was removed.
    pub fn remove_all<'a, I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        elements
            .into_iter()
            .fold(false, |modified, element| self.remove(element) || modified)
    }

    /// Whether every element of `elements` is present
    #[must_use]
    pub fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        elements.into_iter().all(|element| self.contains(element))
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.tree.clear();
        self.index.clear();
    }

    /// Pop elements in weighted-random order into `consumer` until the set is
    /// empty or the consumer fails
    ///
    /// The element handed to a failing consumer has already been removed.
    ///
    /// # Errors
    ///
    /// The first error returned by `consumer`.
    pub fn try_drain<X>(
        &mut self,
        mut consumer: impl ExceptionalConsumer<E, X>,
    ) -> std::result::Result<(), X> {
        let mut rng = rand::thread_rng();
        while let Some(element) = self.pop_with(&mut rng) {
            consumer.accept(element)?;
        }
        Ok(())
    }
}

impl<E> Default for WeightedRandomSet<E>
where
    E: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> PartialEq for WeightedRandomSet<E>
where
    E: Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.elements().all(|e| other.contains(e))
    }
}

impl<E> Eq for WeightedRandomSet<E> where E: Eq + Hash + Clone {}

impl<E> fmt::Debug for WeightedRandomSet<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.index.keys()).finish()
    }
}

impl<E> Extend<E> for WeightedRandomSet<E>
where
    E: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.insert_unit(element);
        }
    }
}

impl<E> FromIterator<E> for WeightedRandomSet<E>
where
    E: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, E> IntoIterator for &'a WeightedRandomSet<E>
where
    E: Eq + Hash + Clone,
{
    type Item = &'a E;
    type IntoIter = Iter<'a, E, ThreadRng>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
