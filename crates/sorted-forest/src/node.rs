use crate::types::{Color, ColoredNode, Node, ValueNode};

/// Plain binary-search-tree node.
#[derive(Clone, Debug)]
pub struct BstNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: T,
}

impl<T> BstNode<T> {
    pub fn new(v: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            v,
        }
    }
}

/// Red-black tree node. New nodes start out red.
#[derive(Clone, Debug)]
pub struct RbNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: T,
    pub c: Color,
}

impl<T> RbNode<T> {
    pub fn new(v: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            v,
            c: Color::Red,
        }
    }
}

macro_rules! impl_links {
    ($ty:ident) => {
        impl<T> Node for $ty<T> {
            fn p(&self) -> Option<u32> {
                self.p
            }

            fn l(&self) -> Option<u32> {
                self.l
            }

            fn r(&self) -> Option<u32> {
                self.r
            }

            fn set_p(&mut self, v: Option<u32>) {
                self.p = v;
            }

            fn set_l(&mut self, v: Option<u32>) {
                self.l = v;
            }

            fn set_r(&mut self, v: Option<u32>) {
                self.r = v;
            }
        }

        impl<T> ValueNode for $ty<T> {
            type Value = T;

            fn value(&self) -> &T {
                &self.v
            }
        }
    };
}

impl_links!(BstNode);
impl_links!(RbNode);

impl<T> ColoredNode for RbNode<T> {
    fn color(&self) -> Color {
        self.c
    }

    fn set_color(&mut self, color: Color) {
        self.c = color;
    }
}
