//! Node trait definitions.
//!
//! Every tree keeps its nodes in a [`Vec`]-backed arena. A "pointer" is an
//! `Option<u32>` index into that arena, so parent back-references are plain
//! indices and never keep a node alive. All tree-manipulation functions take
//! the arena as `&mut [N]` (or `&mut Vec<N>` when they grow or shrink it) and
//! work with indices.

/// Parent-linked binary tree node (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value payload of a node.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;

    /// Both halves of the payload, used to move an entry between two nodes
    /// without touching the topology.
    fn entry_mut(&mut self) -> (&mut K, &mut V);

    fn into_entry(self) -> (K, V)
    where
        Self: Sized;
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Comparator derived from [`PartialOrd`]. Trees take any
/// `Fn(&K, &K) -> i32` that is negative, zero or positive like `a.cmp(b)`.
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
