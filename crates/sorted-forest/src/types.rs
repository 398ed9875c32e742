//! Node trait definitions.
//!
//! Nodes are stored in a [`Vec`]-backed arena owned by a tree. Every
//! structural link is an `Option<u32>` index into that arena, so the parent
//! link is a plain back-reference and never affects ownership.

use std::fmt;

/// Structural links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A node that carries an ordered value.
pub trait ValueNode: Node {
    type Value;

    fn value(&self) -> &Self::Value;
}

/// Red-black node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// The other color.
    pub fn flipped(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Single-letter tag used by the level-order rendering.
    pub fn tag(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Red-black specific node behavior.
pub trait ColoredNode: ValueNode {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    fn flip_color(&mut self) {
        let c = self.color().flipped();
        self.set_color(c);
    }
}
