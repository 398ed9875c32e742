//! Single-step tree rotation, the primitive all rebalancing is built from.

use crate::error::{Error, Result};
use crate::types::Node;
use crate::util::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Rotates `child` up over its direct `parent`.
///
/// When `child` is the left child of `parent` this is a right rotation:
/// `child` takes the position of `parent`, the former right subtree of
/// `child` becomes the left subtree of `parent`, and `parent` becomes the
/// right child of `child`. A right child yields the mirror-image left
/// rotation. All affected parent links are updated before returning and the
/// in-order sequence of the subtree is unchanged.
///
/// Returns the root of the tree after the rotation, which is `child` when
/// `parent` was the root.
///
/// # Errors
///
/// - [`Error::NullReference`] if either node is absent or not in the arena.
/// - [`Error::NotDirectlyRelated`] if `child` is not a child of `parent`.
///
/// Nothing is modified when an error is returned.
pub fn rotate<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    child: Option<u32>,
    parent: Option<u32>,
) -> Result<Option<u32>> {
    let (Some(c), Some(p)) = (child, parent) else {
        return Err(Error::NullReference);
    };
    if c as usize >= arena.len() || p as usize >= arena.len() {
        return Err(Error::NullReference);
    }

    let is_left = get_l(arena, p) == Some(c);
    if !is_left && get_r(arena, p) != Some(c) {
        return Err(Error::NotDirectlyRelated);
    }

    let g = get_p(arena, p);
    if is_left {
        let inner = get_r(arena, c);
        set_l(arena, p, inner);
        if let Some(inner) = inner {
            set_p(arena, inner, Some(p));
        }
        set_r(arena, c, Some(p));
    } else {
        let inner = get_l(arena, c);
        set_r(arena, p, inner);
        if let Some(inner) = inner {
            set_p(arena, inner, Some(p));
        }
        set_l(arena, c, Some(p));
    }
    set_p(arena, p, Some(c));
    set_p(arena, c, g);

    log::trace!(
        "{} rotation: node {c} over node {p}",
        if is_left { "right" } else { "left" }
    );

    match g {
        Some(g) => {
            if get_l(arena, g) == Some(p) {
                set_l(arena, g, Some(c));
            } else {
                set_r(arena, g, Some(c));
            }
            Ok(root)
        }
        None => Ok(Some(c)),
    }
}
