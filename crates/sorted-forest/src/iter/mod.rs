//! Bounded ascending iteration.
//!
//! Both iterators keep an explicit stack of pending ancestors: nodes whose
//! values are still to be yielded, with the smallest on top. The stack is
//! extended lazily, one descent per yielded value, so creating an iterator
//! costs O(height) regardless of tree size.

use std::iter::FusedIterator;

use crate::collection::TreeView;
use crate::error::{Error, Result};
use crate::types::ValueNode;
use crate::util::{get_l, get_r};

/// Closed `[min, max]` range; an absent bound leaves that side open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IterBounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for IterBounds<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T: Ord> IterBounds<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// `true` when `value` lies within the range.
    pub fn contains(&self, value: &T) -> bool {
        self.min.as_ref().map_or(true, |m| value >= m)
            && self.max.as_ref().map_or(true, |m| value <= m)
    }
}

/// Pushes the in-range nodes on the leftmost path from `node`.
///
/// A node below `min` has nothing in range on its left, so only its right
/// subtree is followed. Otherwise the node is pushed when it is within `max`
/// and the walk continues left. Right subtrees of pushed nodes are explored
/// when those nodes are popped; a node above `max` is never pushed, so its
/// right subtree is never visited.
fn descend<N>(
    arena: &[N],
    stack: &mut Vec<u32>,
    mut node: Option<u32>,
    min: Option<&N::Value>,
    max: Option<&N::Value>,
) where
    N: ValueNode,
    N::Value: Ord,
{
    while let Some(i) = node {
        let value = arena[i as usize].value();
        if min.is_some_and(|m| value < m) {
            node = get_r(arena, i);
            continue;
        }
        if max.map_or(true, |m| value <= m) {
            stack.push(i);
        }
        node = get_l(arena, i);
    }
}

/// Ascending iterator over the values of a tree, optionally bounded.
///
/// Borrows the tree, so the tree cannot be modified while the iterator is
/// alive.
pub struct BoundedIter<'a, N: ValueNode> {
    arena: &'a [N],
    stack: Vec<u32>,
    min: Option<&'a N::Value>,
    max: Option<&'a N::Value>,
}

impl<'a, N> BoundedIter<'a, N>
where
    N: ValueNode,
    N::Value: Ord,
{
    pub fn new(
        arena: &'a [N],
        root: Option<u32>,
        min: Option<&'a N::Value>,
        max: Option<&'a N::Value>,
    ) -> Self {
        let mut stack = Vec::new();
        descend(arena, &mut stack, root, min, max);
        Self {
            arena,
            stack,
            min,
            max,
        }
    }

    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Next value in ascending order.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] when no values remain.
    pub fn try_next(&mut self) -> Result<&'a N::Value> {
        let i = self.stack.pop().ok_or(Error::Exhausted)?;
        let arena = self.arena;
        descend(arena, &mut self.stack, get_r(arena, i), self.min, self.max);
        Ok(arena[i as usize].value())
    }
}

impl<'a, N> Iterator for BoundedIter<'a, N>
where
    N: ValueNode,
    N::Value: Ord,
{
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.arena.len()))
    }
}

impl<N> FusedIterator for BoundedIter<'_, N>
where
    N: ValueNode,
    N::Value: Ord,
{
}

/// Detached ascending cursor that owns its bounds and holds no borrow.
///
/// The cursor remembers the tree's mutation stamp at creation; stepping it
/// after the tree was modified fails with [`Error::StaleCursor`] instead of
/// walking links that may have been rotated away.
#[derive(Clone, Debug)]
pub struct RangeCursor<T> {
    stack: Vec<u32>,
    bounds: IterBounds<T>,
    generation: u64,
}

impl<T: Ord> RangeCursor<T> {
    pub fn new<V>(tree: &V, bounds: IterBounds<T>) -> Self
    where
        V: TreeView,
        V::Node: ValueNode<Value = T>,
    {
        let mut stack = Vec::new();
        descend(
            tree.nodes(),
            &mut stack,
            tree.root_index(),
            bounds.min.as_ref(),
            bounds.max.as_ref(),
        );
        Self {
            stack,
            bounds,
            generation: tree.generation(),
        }
    }

    pub fn bounds(&self) -> &IterBounds<T> {
        &self.bounds
    }

    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Next value of `tree` in ascending order.
    ///
    /// # Errors
    ///
    /// - [`Error::StaleCursor`] if `tree` is not in the state the cursor was
    ///   created from.
    /// - [`Error::Exhausted`] when no values remain.
    #[allow(clippy::should_implement_trait)]
    pub fn next<'t, V>(&mut self, tree: &'t V) -> Result<&'t T>
    where
        V: TreeView,
        V::Node: ValueNode<Value = T>,
    {
        if tree.generation() != self.generation {
            return Err(Error::StaleCursor);
        }
        let i = self.stack.pop().ok_or(Error::Exhausted)?;
        let arena = tree.nodes();
        descend(
            arena,
            &mut self.stack,
            get_r(arena, i),
            self.bounds.min.as_ref(),
            self.bounds.max.as_ref(),
        );
        Ok(arena[i as usize].value())
    }
}
