//! A set of values kept in ascending order of an explicit, caller-supplied
//! weight. Weights are unique within the set.
//!
//! Position lookups are binary searches over the sorted backing `Vec`;
//! splicing is a linear shift. A parallel `HashSet` of weights makes the
//! duplicate / missing checks O(1) and is updated in lockstep with the `Vec`.

use std::collections::HashSet;
use std::hash::Hash;

use thiserror::Error;

/// A weight was already present on insert, or absent on remove.
/// The set is unchanged when this is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("weight rejected by ordered set")]
pub struct Rejected;

#[derive(Debug, Clone)]
struct Weighted<T, K> {
    value: T,
    weight: K,
}

#[derive(Debug, Clone)]
pub struct TotalOrderedSet<T, K> {
    weights: HashSet<K>,
    elements: Vec<Weighted<T, K>>,
}

impl<T, K> Default for TotalOrderedSet<T, K> {
    fn default() -> Self {
        Self {
            weights: HashSet::new(),
            elements: Vec::new(),
        }
    }
}

impl<T, K: Ord + Hash + Clone> TotalOrderedSet<T, K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` at the position its `weight` dictates and return that
    /// 0-based index.
    pub fn insert(&mut self, value: T, weight: K) -> Result<usize, Rejected> {
        if self.weights.contains(&weight) {
            return Err(Rejected);
        }
        // lower bound
        let index = self.elements.partition_point(|e| e.weight < weight);
        self.weights.insert(weight.clone());
        self.elements.insert(index, Weighted { value, weight });
        Ok(index)
    }

    /// Remove the element holding `weight` and return the index it occupied.
    /// Located by weight alone, never by comparing values, so `value` only
    /// documents the caller's intent.
    pub fn remove(&mut self, _value: &T, weight: &K) -> Result<usize, Rejected> {
        if !self.weights.contains(weight) {
            return Err(Rejected);
        }
        let index = self
            .elements
            .binary_search_by(|e| e.weight.cmp(weight))
            .map_err(|_| Rejected)?;
        self.elements.remove(index);
        self.weights.remove(weight);
        Ok(index)
    }

    #[must_use]
    pub fn contains_weight(&self, weight: &K) -> bool {
        self.weights.contains(weight)
    }
}

impl<T, K> TotalOrderedSet<T, K> {
    /// Element at `index` in ascending-weight order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index).map(|e| &e.value)
    }

    /// Lowest-weight element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// `(weight, value)` pairs in ascending-weight order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &T)> {
        self.elements.iter().map(|e| (&e.weight, &e.value))
    }
}
