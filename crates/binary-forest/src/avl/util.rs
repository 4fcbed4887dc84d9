use tracing::trace;

use crate::error::TreeError;
use crate::types::{Node, Side};
use crate::util::{attach, get_l, get_p, get_r, set_l, set_p, set_r, splice, transplant};

use super::types::AvlNodeLike;

/// Stored height of `node`, `-1` for an absent child.
#[inline]
pub fn height_of<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> i32 {
    node.map_or(-1, |i| arena[i as usize].height())
}

#[inline]
fn update_height<N: AvlNodeLike>(arena: &mut [N], i: u32) {
    let h = 1 + height_of(arena, get_l(arena, i)).max(height_of(arena, get_r(arena, i)));
    arena[i as usize].set_height(h);
}

/// `height(left) - height(right)`.
#[inline]
pub fn balance_factor<N: AvlNodeLike>(arena: &[N], i: u32) -> i32 {
    height_of(arena, get_l(arena, i)) - height_of(arena, get_r(arena, i))
}

/// Rotates `x` down to the left; its right child takes its place.
pub fn rotate_left<N: AvlNodeLike>(arena: &mut [N], root: Option<u32>, x: u32) -> Result<Option<u32>, TreeError> {
    let y = get_r(arena, x).ok_or(TreeError::InvalidRotationState)?;
    trace!(pivot = x, child = y, "avl rotate left");
    let yl = get_l(arena, y);
    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }
    let root = transplant(arena, root, x, Some(y));
    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    update_height(arena, x);
    update_height(arena, y);
    Ok(root)
}

/// Rotates `x` down to the right; its left child takes its place.
pub fn rotate_right<N: AvlNodeLike>(arena: &mut [N], root: Option<u32>, x: u32) -> Result<Option<u32>, TreeError> {
    let y = get_l(arena, x).ok_or(TreeError::InvalidRotationState)?;
    trace!(pivot = x, child = y, "avl rotate right");
    let yr = get_r(arena, y);
    set_l(arena, x, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(x));
    }
    let root = transplant(arena, root, x, Some(y));
    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
    update_height(arena, x);
    update_height(arena, y);
    Ok(root)
}

/// Restores balance at `node` with a single or double rotation. A balanced
/// node is left alone.
fn rebalance<N: AvlNodeLike>(arena: &mut [N], root: Option<u32>, node: u32) -> Result<Option<u32>, TreeError> {
    let bf = balance_factor(arena, node);
    if bf > 1 {
        let l = get_l(arena, node).ok_or(TreeError::InvalidRotationState)?;
        if balance_factor(arena, l) >= 0 {
            rotate_right(arena, root, node)
        } else {
            let root = rotate_left(arena, root, l)?;
            rotate_right(arena, root, node)
        }
    } else if bf < -1 {
        let r = get_r(arena, node).ok_or(TreeError::InvalidRotationState)?;
        if balance_factor(arena, r) <= 0 {
            rotate_left(arena, root, node)
        } else {
            let root = rotate_right(arena, root, r)?;
            rotate_left(arena, root, node)
        }
    } else {
        Ok(root)
    }
}

/// Climbs from the parent of a freshly attached leaf. One rotation restores
/// the pre-insert height of the subtree, so the walk stops there.
fn insert_fixup<N: AvlNodeLike>(arena: &mut [N], mut root: Option<u32>, parent: u32) -> Result<Option<u32>, TreeError> {
    if get_l(arena, parent).is_some() && get_r(arena, parent).is_some() {
        return Ok(root);
    }
    let mut curr = Some(parent);
    while let Some(c) = curr {
        update_height(arena, c);
        if let Some(g) = get_p(arena, c) {
            if balance_factor(arena, g).abs() > 1 {
                trace!(node = g, "avl insert fixup");
                root = rebalance(arena, root, g)?;
                break;
            }
        }
        curr = get_p(arena, c);
    }
    Ok(root)
}

pub fn insert_left<N: AvlNodeLike>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
    parent: u32,
) -> Result<Option<u32>, TreeError> {
    attach(arena, node, parent, Side::Left);
    insert_fixup(arena, root, parent)
}

pub fn insert_right<N: AvlNodeLike>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
    parent: u32,
) -> Result<Option<u32>, TreeError> {
    attach(arena, node, parent, Side::Right);
    insert_fixup(arena, root, parent)
}

/// Unlinks a node with at most one child, then walks every ancestor up to
/// the root, refreshing heights and rotating where needed.
pub fn remove<N: AvlNodeLike>(arena: &mut [N], root: Option<u32>, node: u32) -> Result<Option<u32>, TreeError> {
    let mut curr = get_p(arena, node);
    let mut root = splice(arena, root, node);
    while let Some(c) = curr {
        update_height(arena, c);
        root = rebalance(arena, root, c)?;
        curr = get_p(arena, c);
    }
    Ok(root)
}

/// Checks stored heights and the balance bound on every node.
pub fn assert_avl_tree<N: AvlNodeLike>(arena: &[N], root: Option<u32>) -> Result<(), String> {
    fn check<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> Result<i32, String> {
        let Some(i) = node else {
            return Ok(-1);
        };
        let n = &arena[i as usize];
        let lh = check(arena, n.l())?;
        let rh = check(arena, n.r())?;
        if (lh - rh).abs() > 1 {
            return Err(format!("Node[{i}] is unbalanced: {lh} vs {rh}"));
        }
        let h = 1 + lh.max(rh);
        if n.height() != h {
            return Err(format!("Node[{i}] stores height {} instead of {h}", n.height()));
        }
        Ok(h)
    }
    check(arena, root).map(|_| ())
}
