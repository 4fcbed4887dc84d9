use crate::types::{Node, Side};
use crate::util::{attach, splice};

pub fn insert_left<N: Node>(arena: &mut [N], root: Option<u32>, node: u32, parent: u32) -> Option<u32> {
    attach(arena, node, parent, Side::Left);
    root
}

pub fn insert_right<N: Node>(arena: &mut [N], root: Option<u32>, node: u32, parent: u32) -> Option<u32> {
    attach(arena, node, parent, Side::Right);
    root
}

/// Unlinks a node with at most one child. No rebalancing.
pub fn remove<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    splice(arena, root, node)
}
