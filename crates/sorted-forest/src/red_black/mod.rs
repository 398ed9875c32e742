//! Red-black balancing on top of the ordered-tree arena.

pub mod tree;
pub mod util;

pub use tree::RedBlackTree;
pub use util::{assert_red_black_tree, black_height, ensure_red_property, insert};
