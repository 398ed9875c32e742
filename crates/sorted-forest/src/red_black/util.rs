use crate::error::Result;
use crate::rotation::rotate;
use crate::types::{Color, ColoredNode};
use crate::util::{assert_ordered_tree, get_l, get_p, get_r};

#[inline]
fn is_red<N: ColoredNode>(arena: &[N], i: u32) -> bool {
    arena[i as usize].is_red()
}

#[inline]
fn flip<N: ColoredNode>(arena: &mut [N], i: u32) {
    arena[i as usize].flip_color();
}

/// Inserts the detached red `node` and restores the red-black properties.
///
/// The node is attached by ordered descent (equal values go left), repaired
/// with [`ensure_red_property`], and the resulting root is forced black.
/// Returns the new root.
pub fn insert<N>(arena: &mut [N], root: Option<u32>, node: u32) -> Result<Option<u32>>
where
    N: ColoredNode,
    N::Value: Ord,
{
    arena[node as usize].set_color(Color::Red);
    let root = crate::util::insert(arena, root, node);
    let root = ensure_red_property(arena, root, node)?;
    if let Some(r) = root {
        arena[r as usize].set_color(Color::Black);
    }
    Ok(root)
}

/// Repairs red-red adjacency starting at `node`, walking upward.
///
/// - parent black, or `node` black or root: nothing to do;
/// - red aunt: flip grandparent, parent and aunt, continue at grandparent;
/// - black/absent aunt, `node` and parent on the same side: rotate the
///   parent over the grandparent and swap their colors;
/// - black/absent aunt, opposite sides: rotate `node` over the parent and
///   then over the grandparent, swap colors of `node` and grandparent, and
///   continue at the original parent.
///
/// The root may be left red; [`insert`] blackens it afterwards. Returns the
/// root after any rotations.
pub fn ensure_red_property<N: ColoredNode>(
    arena: &mut [N],
    mut root: Option<u32>,
    node: u32,
) -> Result<Option<u32>> {
    let mut n = node;
    loop {
        let Some(p) = get_p(arena, n) else {
            return Ok(root);
        };
        if !is_red(arena, n) || !is_red(arena, p) {
            return Ok(root);
        }
        // A red parent is never the root once the root has been blackened.
        let Some(g) = get_p(arena, p) else {
            return Ok(root);
        };

        let parent_is_left = get_l(arena, g) == Some(p);
        let aunt = if parent_is_left {
            get_r(arena, g)
        } else {
            get_l(arena, g)
        };

        if let Some(a) = aunt.filter(|&a| is_red(arena, a)) {
            log::debug!("red aunt {a}: recoloring {g}, {p}, {a}");
            flip(arena, g);
            flip(arena, p);
            flip(arena, a);
            n = g;
            continue;
        }

        let node_is_left = get_l(arena, p) == Some(n);
        if node_is_left == parent_is_left {
            log::debug!("aligned violation at {n}: rotating {p} over {g}");
            root = rotate(arena, root, Some(p), Some(g))?;
            flip(arena, p);
            flip(arena, g);
            return Ok(root);
        }

        log::debug!("unaligned violation at {n}: double rotation over {p} and {g}");
        root = rotate(arena, root, Some(n), Some(p))?;
        root = rotate(arena, root, Some(n), Some(g))?;
        flip(arena, n);
        flip(arena, g);
        n = p;
    }
}

/// Checks order, parent links and every red-black property.
///
/// Returns a description of the first violation found.
pub fn assert_red_black_tree<N>(
    arena: &[N],
    root: Option<u32>,
) -> std::result::Result<(), String>
where
    N: ColoredNode,
    N::Value: Ord,
{
    assert_ordered_tree(arena, root)?;
    let Some(root) = root else {
        return Ok(());
    };
    if !arena[root as usize].is_black() {
        return Err("Root is not black".to_string());
    }

    // Post-order walk computing black heights bottom-up.
    let mut heights: Vec<Option<usize>> = vec![None; arena.len()];
    let mut pending = vec![(root, false)];
    while let Some((i, children_done)) = pending.pop() {
        let l = get_l(arena, i);
        let r = get_r(arena, i);
        if !children_done {
            pending.push((i, true));
            pending.extend(r.map(|r| (r, false)));
            pending.extend(l.map(|l| (l, false)));
            continue;
        }

        if is_red(arena, i) {
            if l.is_some_and(|l| is_red(arena, l)) {
                return Err("Red node has red left child".to_string());
            }
            if r.is_some_and(|r| is_red(arena, r)) {
                return Err("Red node has red right child".to_string());
            }
        }

        let lh = l.map_or(0, |l| heights[l as usize].unwrap_or(0));
        let rh = r.map_or(0, |r| heights[r as usize].unwrap_or(0));
        if lh != rh {
            return Err("Black height mismatch".to_string());
        }
        heights[i as usize] = Some(lh + usize::from(arena[i as usize].is_black()));
    }

    Ok(())
}

/// Black height of the tree (number of black nodes on any root-to-leaf
/// path), or `None` when the paths disagree.
pub fn black_height<N: ColoredNode>(arena: &[N], root: Option<u32>) -> Option<usize> {
    let mut expected: Option<usize> = None;
    let mut pending: Vec<(Option<u32>, usize)> = vec![(root, 0)];
    while let Some((curr, count)) = pending.pop() {
        match curr {
            None => match expected {
                Some(e) if e != count => return None,
                _ => expected = Some(count),
            },
            Some(i) => {
                let count = count + usize::from(arena[i as usize].is_black());
                pending.push((get_l(arena, i), count));
                pending.push((get_r(arena, i), count));
            }
        }
    }
    expected
}
