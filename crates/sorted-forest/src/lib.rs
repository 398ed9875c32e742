//! Arena-based ordered trees.
//!
//! A plain binary search tree, a red-black balanced variant, and a bounded
//! ascending iterator shared by both. Equal values are kept and ordered to
//! the left.
//!
//! Nodes live in a `Vec` arena owned by the tree; all "pointers" are
//! `Option<u32>` indices into it, including the parent back-reference used
//! by rotations and the red-black repair walk.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`], [`ValueNode`], [`ColoredNode`] traits and [`Color`] |
//! | [`node`] | [`BstNode`] and [`RbNode`] |
//! | [`util`] | descent insert, find, size, in-order/level-order walks, printing |
//! | [`rotation`] | [`rotation::rotate`], the single-step rotation primitive |
//! | [`red_black`] | repair walk, invariant checker, [`RedBlackTree`] |
//! | [`iter`] | [`BoundedIter`], [`RangeCursor`], [`IterBounds`] |
//! | [`collection`] | [`SortedCollection`] and [`IterableSortedCollection`] |
//!
//! # Example
//!
//! ```
//! use sorted_forest::RedBlackTree;
//!
//! let mut tree: RedBlackTree<i32> = [10, 20, 30, 40, 50].into_iter().collect();
//! tree.set_iterator_min(Some(20));
//! tree.set_iterator_max(Some(40));
//! let values: Vec<i32> = tree.iterator().copied().collect();
//! assert_eq!(values, vec![20, 30, 40]);
//! tree.assert_valid().unwrap();
//! ```

pub mod bst;
pub mod collection;
pub mod error;
pub mod iter;
pub mod node;
pub mod red_black;
pub mod rotation;
pub mod types;
pub mod util;

pub use bst::BinarySearchTree;
pub use collection::{IterableSortedCollection, SortedCollection, TreeView};
pub use error::{Error, Result};
pub use iter::{BoundedIter, IterBounds, RangeCursor};
pub use node::{BstNode, RbNode};
pub use red_black::RedBlackTree;
pub use types::{Color, ColoredNode, Node, ValueNode};
