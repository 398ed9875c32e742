use std::fmt::{Debug, Display};

use crate::collection::{next_generation, SortedCollection, TreeView};
use crate::error::{Error, Result};
use crate::iter::{BoundedIter, IterBounds, RangeCursor};
use crate::node::BstNode;
use crate::util::{self, first, last, print::print};

/// Unbalanced binary search tree.
///
/// Values comparing less than or equal to a node go to its left subtree, so
/// duplicates are kept and pile up on the left. Inserting in sorted order
/// degenerates the tree into a chain; every operation walks it iteratively.
#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    root: Option<u32>,
    arena: Vec<BstNode<T>>,
    generation: u64,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            arena: Vec::new(),
            generation: next_generation(),
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn nodes(&self) -> &[BstNode<T>] {
        &self.arena
    }

    pub fn value(&self, idx: u32) -> &T {
        &self.arena[idx as usize].v
    }

    pub fn left(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].l
    }

    pub fn right(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].r
    }

    pub fn parent(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].p
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of values, counted by walking the whole tree.
    pub fn size(&self) -> usize {
        util::size(&self.arena, self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.generation = next_generation();
    }

    /// Smallest value.
    pub fn first(&self) -> Option<&T> {
        first(&self.arena, self.root).map(|i| self.value(i))
    }

    /// Largest value.
    pub fn last(&self) -> Option<&T> {
        last(&self.arena, self.root).map(|i| self.value(i))
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value` and returns the arena index of its node.
    pub fn insert(&mut self, value: T) -> u32 {
        self.arena.push(BstNode::new(value));
        let idx = (self.arena.len() - 1) as u32;
        self.root = util::insert(&mut self.arena, self.root, idx);
        self.generation = next_generation();
        idx
    }

    /// Inserts a value that may be absent.
    ///
    /// # Errors
    ///
    /// [`Error::AbsentValue`] when `value` is `None`.
    pub fn try_insert(&mut self, value: Option<T>) -> Result<u32> {
        let value = value.ok_or(Error::AbsentValue)?;
        Ok(self.insert(value))
    }

    pub fn contains(&self, value: &T) -> bool {
        util::find(&self.arena, self.root, value).is_some()
    }

    /// Ascending iterator over all values.
    pub fn iter(&self) -> BoundedIter<'_, BstNode<T>> {
        BoundedIter::new(&self.arena, self.root, None, None)
    }

    /// Ascending iterator over the values in the closed range `[min, max]`.
    pub fn range<'a>(
        &'a self,
        min: Option<&'a T>,
        max: Option<&'a T>,
    ) -> BoundedIter<'a, BstNode<T>> {
        BoundedIter::new(&self.arena, self.root, min, max)
    }

    /// Detached cursor over the values in `bounds`.
    pub fn range_cursor(&self, bounds: IterBounds<T>) -> RangeCursor<T> {
        RangeCursor::new(self, bounds)
    }

    /// Checks parent links and value order.
    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        util::assert_ordered_tree(&self.arena, self.root)
    }
}

impl<T: Display> BinarySearchTree<T> {
    /// Values in breadth-first order, e.g. `[ 10, 7, 12 ]`.
    pub fn to_level_order_string(&self) -> String {
        util::print::level_order_string(&self.arena, self.root, |n| n.v.to_string())
    }

    /// Values in ascending order, e.g. `[ 7, 10, 12 ]`.
    pub fn to_in_order_string(&self) -> String {
        util::print::in_order_string(&self.arena, self.root, |n| n.v.to_string())
    }
}

impl<T: Debug> BinarySearchTree<T> {
    /// Indented structural dump for debugging.
    pub fn print(&self, tab: &str) -> String {
        print(&self.arena, self.root, tab, |i, n| format!("Node[{i}] {{ {:?} }}", n.v))
    }
}

impl<T> TreeView for BinarySearchTree<T> {
    type Node = BstNode<T>;

    fn nodes(&self) -> &[BstNode<T>] {
        &self.arena
    }

    fn root_index(&self) -> Option<u32> {
        self.root
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T: Ord> SortedCollection<T> for BinarySearchTree<T> {
    fn insert(&mut self, value: T) -> u32 {
        BinarySearchTree::insert(self, value)
    }

    fn try_insert(&mut self, value: Option<T>) -> Result<u32> {
        BinarySearchTree::try_insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        BinarySearchTree::contains(self, value)
    }

    fn size(&self) -> usize {
        BinarySearchTree::size(self)
    }

    fn is_empty(&self) -> bool {
        BinarySearchTree::is_empty(self)
    }

    fn clear(&mut self) {
        BinarySearchTree::clear(self)
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = BoundedIter<'a, BstNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
