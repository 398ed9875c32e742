//! Arena-level tree utilities shared by both tree variants.
//!
//! Every function takes the arena slice plus node indices and walks it with
//! explicit loops or work-lists, so a degenerate (list-shaped) plain BST of
//! any depth never recurses.

pub mod print;

use std::collections::VecDeque;

use crate::types::{Node, ValueNode};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes under `root`, counted by a full traversal.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut pending: Vec<u32> = root.into_iter().collect();
    while let Some(i) = pending.pop() {
        count += 1;
        pending.extend(get_l(arena, i));
        pending.extend(get_r(arena, i));
    }
    count
}

/// Finds a node holding a value equal to `value`, pruning by comparison.
pub fn find<N>(arena: &[N], root: Option<u32>, value: &N::Value) -> Option<u32>
where
    N: ValueNode,
    N::Value: Ord,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match value.cmp(arena[i as usize].value()) {
            std::cmp::Ordering::Equal => return Some(i),
            std::cmp::Ordering::Less => get_l(arena, i),
            std::cmp::Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Attaches the detached `node` below the leaf reached by ordered descent.
///
/// Values comparing less than or equal to a node go left, greater go right,
/// so equal values pile up in left subtrees. Returns the root.
pub fn insert<N>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32>
where
    N: ValueNode,
    N::Value: Ord,
{
    let Some(mut curr) = root else {
        set_p(arena, node, None);
        return Some(node);
    };

    loop {
        let go_left = arena[node as usize].value() <= arena[curr as usize].value();
        let child = if go_left {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match child {
            Some(c) => curr = c,
            None => {
                if go_left {
                    set_l(arena, curr, Some(node));
                } else {
                    set_r(arena, curr, Some(node));
                }
                set_p(arena, node, Some(curr));
                log::trace!(
                    "attached node {node} as {} child of {curr}",
                    if go_left { "left" } else { "right" }
                );
                return root;
            }
        }
    }
}

/// Node indices in breadth-first (level) order.
pub fn level_order<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut queue: VecDeque<u32> = root.into_iter().collect();
    while let Some(i) = queue.pop_front() {
        out.push(i);
        queue.extend(get_l(arena, i));
        queue.extend(get_r(arena, i));
    }
    out
}

/// Node indices in ascending (in-order) order.
pub fn in_order<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        out.push(i);
        curr = next(arena, i);
    }
    out
}

/// Checks parent consistency and ascending in-order values.
///
/// Returns a description of the first violation found.
pub fn assert_ordered_tree<N>(arena: &[N], root: Option<u32>) -> Result<(), String>
where
    N: ValueNode,
    N::Value: Ord,
{
    let Some(root) = root else {
        return Ok(());
    };
    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    let mut pending = vec![root];
    let mut seen = 0usize;
    while let Some(i) = pending.pop() {
        seen += 1;
        if seen > arena.len() {
            return Err("Cycle in child links".to_string());
        }
        for (child, side) in [(get_l(arena, i), "left"), (get_r(arena, i), "right")] {
            if let Some(c) = child {
                if get_p(arena, c) != Some(i) {
                    return Err(format!("Broken parent link on {side} child of node {i}"));
                }
                pending.push(c);
            }
        }
    }

    let mut prev_node: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if arena[prev as usize].value() > arena[i as usize].value() {
                return Err("Node order violated".to_string());
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
