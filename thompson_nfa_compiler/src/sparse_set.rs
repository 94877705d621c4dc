//! A set of NFA states with O(1) insert, membership and clear.
//!
//! Based on: https://research.swtch.com/sparse
//!
//! The capacity is fixed to the number of states in the NFA being
//! simulated, so every `StateId` of that NFA fits.

use crate::nfa::StateId;

/// A set of state IDs below a fixed capacity.
///
/// Elements are kept in insertion order. An ID is in the set iff
/// `sparse[id] < len && dense[sparse[id]] == id`.
#[derive(Clone, Debug)]
pub(crate) struct SparseSet {
    len: usize,
    dense: Vec<StateId>,
    sparse: Vec<usize>,
}

impl SparseSet {
    /// Create an empty set that can hold IDs in `[0, capacity)`.
    pub(crate) fn new(capacity: usize) -> SparseSet {
        SparseSet { len: 0, dense: vec![0; capacity], sparse: vec![0; capacity] }
    }

    #[cfg_attr(not(feature = "logging"), allow(dead_code))]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `id`. Returns false if it was already present.
    ///
    /// Panics if `id` is not below the capacity.
    #[inline]
    pub(crate) fn insert(&mut self, id: StateId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.dense[self.len] = id;
        self.sparse[id] = self.len;
        self.len += 1;
        true
    }

    #[inline]
    pub(crate) fn contains(&self, id: StateId) -> bool {
        let i = self.sparse[id];
        i < self.len && self.dense[i] == id
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.dense[..self.len].iter().copied()
    }
}
