use tracing::trace;

use crate::error::TreeError;
use crate::types::{Node, Side};
use crate::util::{attach, get_l, get_p, get_r, set_l, set_p, set_r, splice, transplant};

use super::types::{Color, RbNodeLike};

/// Color of a link; the absent link is the black nil leaf.
#[inline]
pub fn color_of<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> Color {
    node.map_or(Color::Black, |i| arena[i as usize].color())
}

#[inline]
fn is_red<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> bool {
    color_of(arena, node) == Color::Red
}

#[inline]
fn paint<N: RbNodeLike>(arena: &mut [N], node: Option<u32>, color: Color) {
    if let Some(i) = node {
        arena[i as usize].set_color(color);
    }
}

pub fn rotate_left<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> Result<Option<u32>, TreeError> {
    let y = get_r(arena, x).ok_or(TreeError::InvalidRotationState)?;
    trace!(pivot = x, child = y, "rb rotate left");
    let yl = get_l(arena, y);
    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }
    let root = transplant(arena, root, x, Some(y));
    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    Ok(root)
}

pub fn rotate_right<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> Result<Option<u32>, TreeError> {
    let y = get_l(arena, x).ok_or(TreeError::InvalidRotationState)?;
    trace!(pivot = x, child = y, "rb rotate right");
    let yr = get_r(arena, y);
    set_l(arena, x, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(x));
    }
    let root = transplant(arena, root, x, Some(y));
    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
    Ok(root)
}

pub fn insert_root<N: RbNodeLike>(arena: &mut [N], node: u32) -> Option<u32> {
    arena[node as usize].set_color(Color::Black);
    Some(node)
}

pub fn insert_left<N: RbNodeLike>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
    parent: u32,
) -> Result<Option<u32>, TreeError> {
    attach(arena, node, parent, Side::Left);
    insert_fixup(arena, root, node)
}

pub fn insert_right<N: RbNodeLike>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
    parent: u32,
) -> Result<Option<u32>, TreeError> {
    attach(arena, node, parent, Side::Right);
    insert_fixup(arena, root, node)
}

/// Repairs a red node `z` that may sit under a red parent.
fn insert_fixup<N: RbNodeLike>(arena: &mut [N], mut root: Option<u32>, mut z: u32) -> Result<Option<u32>, TreeError> {
    while let Some(mut p) = get_p(arena, z) {
        if !is_red(arena, Some(p)) {
            break;
        }
        // A red parent is never the root.
        let g = get_p(arena, p).ok_or(TreeError::InvalidRotationState)?;
        if get_l(arena, g) == Some(p) {
            let u = get_r(arena, g);
            if is_red(arena, u) {
                trace!(node = z, "rb insert: red uncle, recolor");
                paint(arena, Some(p), Color::Black);
                paint(arena, u, Color::Black);
                paint(arena, Some(g), Color::Red);
                z = g;
                continue;
            }
            if get_r(arena, p) == Some(z) {
                z = p;
                root = rotate_left(arena, root, z)?;
                p = get_p(arena, z).ok_or(TreeError::InvalidRotationState)?;
            }
            paint(arena, Some(p), Color::Black);
            paint(arena, Some(g), Color::Red);
            root = rotate_right(arena, root, g)?;
        } else {
            let u = get_l(arena, g);
            if is_red(arena, u) {
                trace!(node = z, "rb insert: red uncle, recolor");
                paint(arena, Some(p), Color::Black);
                paint(arena, u, Color::Black);
                paint(arena, Some(g), Color::Red);
                z = g;
                continue;
            }
            if get_l(arena, p) == Some(z) {
                z = p;
                root = rotate_right(arena, root, z)?;
                p = get_p(arena, z).ok_or(TreeError::InvalidRotationState)?;
            }
            paint(arena, Some(p), Color::Black);
            paint(arena, Some(g), Color::Red);
            root = rotate_left(arena, root, g)?;
        }
    }
    paint(arena, root, Color::Black);
    Ok(root)
}

/// Unlinks a node with at most one child. Removing a black node leaves its
/// replacement one black short, which the fix-up then pays back.
pub fn remove<N: RbNodeLike>(arena: &mut [N], root: Option<u32>, node: u32) -> Result<Option<u32>, TreeError> {
    let color = arena[node as usize].color();
    let x = get_l(arena, node).or(get_r(arena, node));
    let x_parent = get_p(arena, node);
    let root = splice(arena, root, node);
    if color == Color::Black {
        delete_fixup(arena, root, x, x_parent)
    } else {
        Ok(root)
    }
}

/// `x` carries an extra black. It may be the nil leaf, so its parent is
/// tracked separately.
fn delete_fixup<N: RbNodeLike>(
    arena: &mut [N],
    mut root: Option<u32>,
    mut x: Option<u32>,
    mut x_parent: Option<u32>,
) -> Result<Option<u32>, TreeError> {
    while x != root && !is_red(arena, x) {
        let p = x_parent.ok_or(TreeError::InvalidRotationState)?;
        if get_l(arena, p) == x {
            let mut w = get_r(arena, p).ok_or(TreeError::InvalidRotationState)?;
            if is_red(arena, Some(w)) {
                trace!(node = p, "rb delete: red sibling");
                paint(arena, Some(w), Color::Black);
                paint(arena, Some(p), Color::Red);
                root = rotate_left(arena, root, p)?;
                w = get_r(arena, p).ok_or(TreeError::InvalidRotationState)?;
            }
            if !is_red(arena, get_l(arena, w)) && !is_red(arena, get_r(arena, w)) {
                trace!(node = p, "rb delete: black nephews, move up");
                paint(arena, Some(w), Color::Red);
                x = Some(p);
                x_parent = get_p(arena, p);
            } else {
                if !is_red(arena, get_r(arena, w)) {
                    trace!(node = p, "rb delete: near nephew red");
                    paint(arena, get_l(arena, w), Color::Black);
                    paint(arena, Some(w), Color::Red);
                    root = rotate_right(arena, root, w)?;
                    w = get_r(arena, p).ok_or(TreeError::InvalidRotationState)?;
                }
                trace!(node = p, "rb delete: far nephew red");
                let pc = color_of(arena, Some(p));
                paint(arena, Some(w), pc);
                paint(arena, Some(p), Color::Black);
                paint(arena, get_r(arena, w), Color::Black);
                root = rotate_left(arena, root, p)?;
                x = root;
                x_parent = None;
            }
        } else {
            let mut w = get_l(arena, p).ok_or(TreeError::InvalidRotationState)?;
            if is_red(arena, Some(w)) {
                trace!(node = p, "rb delete: red sibling");
                paint(arena, Some(w), Color::Black);
                paint(arena, Some(p), Color::Red);
                root = rotate_right(arena, root, p)?;
                w = get_l(arena, p).ok_or(TreeError::InvalidRotationState)?;
            }
            if !is_red(arena, get_l(arena, w)) && !is_red(arena, get_r(arena, w)) {
                trace!(node = p, "rb delete: black nephews, move up");
                paint(arena, Some(w), Color::Red);
                x = Some(p);
                x_parent = get_p(arena, p);
            } else {
                if !is_red(arena, get_l(arena, w)) {
                    trace!(node = p, "rb delete: near nephew red");
                    paint(arena, get_r(arena, w), Color::Black);
                    paint(arena, Some(w), Color::Red);
                    root = rotate_left(arena, root, w)?;
                    w = get_l(arena, p).ok_or(TreeError::InvalidRotationState)?;
                }
                trace!(node = p, "rb delete: far nephew red");
                let pc = color_of(arena, Some(p));
                paint(arena, Some(w), pc);
                paint(arena, Some(p), Color::Black);
                paint(arena, get_l(arena, w), Color::Black);
                root = rotate_right(arena, root, p)?;
                x = root;
                x_parent = None;
            }
        }
    }
    paint(arena, x, Color::Black);
    Ok(root)
}

/// Checks the red-black rules: black root, no red node with a red child and
/// the same number of black nodes on every path down to a nil leaf.
pub fn assert_red_black_tree<N: RbNodeLike>(arena: &[N], root: Option<u32>) -> Result<(), String> {
    fn black_height<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> Result<usize, String> {
        let Some(i) = node else {
            return Ok(1);
        };
        let n = &arena[i as usize];
        if n.color() == Color::Red && (is_red(arena, n.l()) || is_red(arena, n.r())) {
            return Err(format!("Red Node[{i}] has a red child"));
        }
        let lb = black_height(arena, n.l())?;
        let rb = black_height(arena, n.r())?;
        if lb != rb {
            return Err(format!("Node[{i}] black heights differ: {lb} vs {rb}"));
        }
        Ok(lb + usize::from(n.color() == Color::Black))
    }
    if is_red(arena, root) {
        return Err("Root is red".to_string());
    }
    black_height(arena, root).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::RbNode;
    use crate::util::assert_links;

    fn node(k: i32) -> RbNode<i32, ()> {
        RbNode::new(k, ())
    }

    #[test]
    fn nil_is_black() {
        let arena: Vec<RbNode<i32, ()>> = Vec::new();
        assert_eq!(color_of(&arena, None), Color::Black);
    }

    #[test]
    fn straight_line_insert_rotates_at_grandparent() {
        let mut arena = vec![node(3), node(2), node(1)];
        let root = insert_root(&mut arena, 0);
        let root = insert_left(&mut arena, root, 1, 0).unwrap();
        let root = insert_left(&mut arena, root, 2, 1).unwrap();
        assert_eq!(root, Some(1));
        assert_eq!(arena[1].color, Color::Black);
        assert_eq!((arena[0].color, arena[2].color), (Color::Red, Color::Red));
        assert_links(&arena, root).unwrap();
        assert_red_black_tree(&arena, root).unwrap();
    }

    #[test]
    fn red_uncle_recolors() {
        let mut arena = vec![node(2), node(1), node(3), node(0)];
        let root = insert_root(&mut arena, 0);
        let root = insert_left(&mut arena, root, 1, 0).unwrap();
        let root = insert_right(&mut arena, root, 2, 0).unwrap();
        let root = insert_left(&mut arena, root, 3, 1).unwrap();
        assert_eq!(root, Some(0));
        assert_eq!(arena[0].color, Color::Black);
        assert_eq!((arena[1].color, arena[2].color), (Color::Black, Color::Black));
        assert_eq!(arena[3].color, Color::Red);
        assert_red_black_tree(&arena, root).unwrap();
    }

    #[test]
    fn removing_black_leaf_borrows_from_sibling() {
        let mut arena = vec![node(2), node(1), node(3), node(4)];
        let root = insert_root(&mut arena, 0);
        let root = insert_left(&mut arena, root, 1, 0).unwrap();
        let root = insert_right(&mut arena, root, 2, 0).unwrap();
        let root = insert_right(&mut arena, root, 3, 2).unwrap();
        // 1 is a black leaf, its sibling 3 has a red far child 4.
        let root = remove(&mut arena, root, 1).unwrap();
        assert_eq!(root, Some(2));
        assert_eq!((arena[2].l, arena[2].r), (Some(0), Some(3)));
        assert_eq!(arena[0].color, Color::Black);
        assert_eq!(arena[3].color, Color::Black);
        assert_red_black_tree(&arena, root).unwrap();
    }

    #[test]
    fn missing_sibling_is_reported() {
        // A lone black child under a black root: not a valid tree.
        let mut arena = vec![node(2), node(1)];
        let root = insert_root(&mut arena, 0);
        attach(&mut arena, 1, 0, Side::Left);
        arena[1].color = Color::Black;
        assert!(assert_red_black_tree(&arena, root).is_err());
        assert_eq!(remove(&mut arena, root, 1), Err(TreeError::InvalidRotationState));
    }
}
