//! Ordered set of selected medians with O(1) membership.

use crate::error::{PMedianError, Result};

/// The medians currently selected, kept in selection order alongside a
/// presence bitmap over all `n` nodes.
///
/// Selection order matters: local search scans medians in this order and a
/// swap replaces a median in place, so the position of every other median is
/// preserved.
///
/// # Examples
///
/// ```
/// use u_pmedian::models::MedianSet;
///
/// let mut set = MedianSet::new(5);
/// assert!(set.insert(3));
/// assert!(set.insert(1));
/// assert!(!set.insert(3));
/// assert_eq!(set.as_slice(), &[3, 1]);
/// assert_eq!(set.complement().collect::<Vec<_>>(), vec![0, 2, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedianSet {
    order: Vec<usize>,
    member: Vec<bool>,
}

impl MedianSet {
    /// Creates an empty set over nodes `0..num_nodes`.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            order: Vec::new(),
            member: vec![false; num_nodes],
        }
    }

    /// Builds a set from explicit indices, keeping their order.
    ///
    /// Fails on an index outside `0..num_nodes` or a repeated index.
    pub fn from_indices(num_nodes: usize, indices: &[usize]) -> Result<Self> {
        let mut set = Self::new(num_nodes);
        set.order.reserve(indices.len());
        for &node in indices {
            if node >= num_nodes {
                return Err(PMedianError::invalid_solution(format!(
                    "node {node} is out of range for {num_nodes} nodes"
                )));
            }
            if !set.insert(node) {
                return Err(PMedianError::invalid_solution(format!(
                    "node {node} appears more than once"
                )));
            }
        }
        Ok(set)
    }

    /// Adds a median. Returns `false` if it was already selected.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn insert(&mut self, node: usize) -> bool {
        if self.member[node] {
            return false;
        }
        self.member[node] = true;
        self.order.push(node);
        true
    }

    /// Replaces the median at position `pos` with `node`, returning the
    /// median that was removed.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range or `node` is already selected.
    pub fn replace_at(&mut self, pos: usize, node: usize) -> usize {
        assert!(!self.member[node], "node {node} is already a median");
        let removed = std::mem::replace(&mut self.order[pos], node);
        self.member[removed] = false;
        self.member[node] = true;
        removed
    }

    /// Returns `true` if `node` is selected.
    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        self.member[node]
    }

    /// Number of selected medians.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no median is selected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of nodes the set ranges over.
    pub fn num_nodes(&self) -> usize {
        self.member.len()
    }

    /// Selected medians in selection order.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Unselected nodes in ascending index order.
    pub fn complement(&self) -> impl Iterator<Item = usize> + '_ {
        self.member
            .iter()
            .enumerate()
            .filter(|(_, &selected)| !selected)
            .map(|(i, _)| i)
    }

    /// Consumes the set, returning the medians in selection order.
    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }
}
