//! Collection traits consumed by code that only needs the data-structure API.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;
use crate::types::ValueNode;

static GENERATION: AtomicU64 = AtomicU64::new(1);

/// Fresh, process-unique mutation stamp.
///
/// Every tree takes a new stamp on construction and on each mutation, so a
/// stamp identifies one exact state of one tree (or of its clones).
pub(crate) fn next_generation() -> u64 {
    GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Read access to a tree's arena, used by iterators and cursors.
pub trait TreeView {
    type Node: ValueNode;

    fn nodes(&self) -> &[Self::Node];
    fn root_index(&self) -> Option<u32>;
    /// Mutation stamp; changes on every insert and clear.
    fn generation(&self) -> u64;
}

/// An ordered multiset of values.
pub trait SortedCollection<T: Ord> {
    /// Inserts `value`, returning the arena index of the new node.
    fn insert(&mut self, value: T) -> u32;

    /// Inserts a value that may be absent.
    ///
    /// # Errors
    ///
    /// [`Error::AbsentValue`](crate::Error::AbsentValue) when `value` is `None`.
    fn try_insert(&mut self, value: Option<T>) -> Result<u32>;

    fn contains(&self, value: &T) -> bool;
    fn size(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn clear(&mut self);
}

/// A sorted collection with sticky iterator bounds.
///
/// Bounds set through [`set_iterator_min`](Self::set_iterator_min) and
/// [`set_iterator_max`](Self::set_iterator_max) apply to every iterator
/// created afterwards, until overwritten. `None` removes the bound.
pub trait IterableSortedCollection<T: Ord>: SortedCollection<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn set_iterator_min(&mut self, min: Option<T>);
    fn set_iterator_max(&mut self, max: Option<T>);
    fn iterator(&self) -> Self::Iter<'_>;
}
