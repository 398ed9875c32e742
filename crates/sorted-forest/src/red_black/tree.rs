use std::fmt::{Debug, Display};

use crate::collection::{next_generation, IterableSortedCollection, SortedCollection, TreeView};
use crate::error::{Error, Result};
use crate::iter::{BoundedIter, IterBounds, RangeCursor};
use crate::node::RbNode;
use crate::types::Color;
use crate::util::{self, first, last, print::print};

use super::util as rb;

/// Red-black balanced search tree with sticky iterator bounds.
///
/// Duplicates are kept. After every insertion the root is black, no red
/// node has a red parent, and all root-to-leaf paths cross the same number
/// of black nodes.
#[derive(Clone, Debug)]
pub struct RedBlackTree<T> {
    root: Option<u32>,
    arena: Vec<RbNode<T>>,
    bounds: IterBounds<T>,
    generation: u64,
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RedBlackTree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            arena: Vec::new(),
            bounds: IterBounds::default(),
            generation: next_generation(),
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn nodes(&self) -> &[RbNode<T>] {
        &self.arena
    }

    pub fn value(&self, idx: u32) -> &T {
        &self.arena[idx as usize].v
    }

    pub fn color(&self, idx: u32) -> Color {
        self.arena[idx as usize].c
    }

    pub fn is_black(&self, idx: u32) -> bool {
        self.color(idx) == Color::Black
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

    /// Drops every node. Iterator bounds are kept.
    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.generation = next_generation();
    }

    pub fn first(&self) -> Option<&T> {
        first(&self.arena, self.root).map(|i| self.value(i))
    }

    pub fn last(&self) -> Option<&T> {
        last(&self.arena, self.root).map(|i| self.value(i))
    }

    /// Black nodes on every root-to-leaf path, `None` if they disagree.
    pub fn black_height(&self) -> Option<usize> {
        rb::black_height(&self.arena, self.root)
    }

    /// Lower bound used by iterators created from now on.
    pub fn set_iterator_min(&mut self, min: Option<T>) {
        self.bounds.min = min;
    }

    /// Upper bound used by iterators created from now on.
    pub fn set_iterator_max(&mut self, max: Option<T>) {
        self.bounds.max = max;
    }

    pub fn set_iterator_bounds(&mut self, bounds: IterBounds<T>) {
        self.bounds = bounds;
    }

    pub fn iterator_bounds(&self) -> &IterBounds<T> {
        &self.bounds
    }
}

impl<T: Ord> RedBlackTree<T> {
    fn place(&mut self, value: T) -> Result<u32> {
        self.arena.push(RbNode::new(value));
        let idx = (self.arena.len() - 1) as u32;
        self.generation = next_generation();
        self.root = rb::insert(&mut self.arena, self.root, idx)?;
        Ok(idx)
    }

    /// Inserts `value`, rebalancing as needed, and returns the arena index
    /// of its node.
    pub fn insert(&mut self, value: T) -> u32 {
        self.place(value)
            .expect("balancer only rotates adjacent parent/child pairs")
    }

    /// Inserts a value that may be absent.
    ///
    /// # Errors
    ///
    /// [`Error::AbsentValue`] when `value` is `None`.
    pub fn try_insert(&mut self, value: Option<T>) -> Result<u32> {
        let value = value.ok_or(Error::AbsentValue)?;
        self.place(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        util::find(&self.arena, self.root, value).is_some()
    }

    /// Ascending iterator honoring the bounds set with
    /// [`set_iterator_min`](Self::set_iterator_min) and
    /// [`set_iterator_max`](Self::set_iterator_max).
    pub fn iterator(&self) -> BoundedIter<'_, RbNode<T>> {
        BoundedIter::new(
            &self.arena,
            self.root,
            self.bounds.min.as_ref(),
            self.bounds.max.as_ref(),
        )
    }

    /// Ascending iterator over all values, ignoring configured bounds.
    pub fn iter(&self) -> BoundedIter<'_, RbNode<T>> {
        BoundedIter::new(&self.arena, self.root, None, None)
    }

    /// Ascending iterator over the values in the closed range `[min, max]`.
    pub fn range<'a>(
        &'a self,
        min: Option<&'a T>,
        max: Option<&'a T>,
    ) -> BoundedIter<'a, RbNode<T>> {
        BoundedIter::new(&self.arena, self.root, min, max)
    }

    /// Detached cursor over the values in `bounds`.
    pub fn range_cursor(&self, bounds: IterBounds<T>) -> RangeCursor<T> {
        RangeCursor::new(self, bounds)
    }

    /// Checks order, parent links and the red-black properties.
    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        rb::assert_red_black_tree(&self.arena, self.root)
    }
}

impl<T: Ord + Clone> RedBlackTree<T> {
    /// Detached cursor using the configured iterator bounds.
    pub fn cursor(&self) -> RangeCursor<T> {
        self.range_cursor(self.bounds.clone())
    }
}

impl<T: Display> RedBlackTree<T> {
    /// Values with color tags in breadth-first order, e.g.
    /// `[ D(b), C(b), F(b), B(r), G(r) ]`.
    pub fn to_level_order_string(&self) -> String {
        util::print::level_order_string(&self.arena, self.root, |n| {
            format!("{}({})", n.v, n.c.tag())
        })
    }

    /// Values in ascending order, e.g. `[ B, C, D ]`.
    pub fn to_in_order_string(&self) -> String {
        util::print::in_order_string(&self.arena, self.root, |n| n.v.to_string())
    }
}

impl<T: Debug> RedBlackTree<T> {
    /// Indented structural dump with colors, for debugging.
    pub fn print(&self, tab: &str) -> String {
        print(&self.arena, self.root, tab, |i, n| {
            format!("Node[{i}] {} {{ {:?} }}", n.c, n.v)
        })
    }
}

impl<T> TreeView for RedBlackTree<T> {
    type Node = RbNode<T>;

    fn nodes(&self) -> &[RbNode<T>] {
        &self.arena
    }

    fn root_index(&self) -> Option<u32> {
        self.root
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T: Ord> SortedCollection<T> for RedBlackTree<T> {
    fn insert(&mut self, value: T) -> u32 {
        RedBlackTree::insert(self, value)
    }

    fn try_insert(&mut self, value: Option<T>) -> Result<u32> {
        RedBlackTree::try_insert(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        RedBlackTree::contains(self, value)
    }

    fn size(&self) -> usize {
        RedBlackTree::size(self)
    }

    fn is_empty(&self) -> bool {
        RedBlackTree::is_empty(self)
    }

    fn clear(&mut self) {
        RedBlackTree::clear(self)
    }
}

impl<T: Ord> IterableSortedCollection<T> for RedBlackTree<T> {
    type Iter<'a>
        = BoundedIter<'a, RbNode<T>>
    where
        Self: 'a,
        T: 'a;

    fn set_iterator_min(&mut self, min: Option<T>) {
        RedBlackTree::set_iterator_min(self, min)
    }

    fn set_iterator_max(&mut self, max: Option<T>) {
        RedBlackTree::set_iterator_max(self, max)
    }

    fn iterator(&self) -> Self::Iter<'_> {
        RedBlackTree::iterator(self)
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for RedBlackTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = BoundedIter<'a, RbNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
