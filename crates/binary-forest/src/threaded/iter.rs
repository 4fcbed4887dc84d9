//! Walks that follow threads instead of keeping a stack.

use crate::types::Node;
use crate::util::{first, last};

use super::types::ThreadNode;

/// Ascending walk over a tree with successor threads.
pub struct InOrder<'a, K, V> {
    arena: &'a [ThreadNode<K, V>],
    curr: Option<u32>,
}

impl<'a, K, V> InOrder<'a, K, V> {
    pub(crate) fn new(arena: &'a [ThreadNode<K, V>], root: Option<u32>) -> Self {
        Self {
            arena,
            curr: first(arena, root),
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let n = &arena[self.curr? as usize];
        self.curr = if n.rt { n.r } else { first(arena, n.r) };
        Some((&n.k, &n.v))
    }
}

/// Descending walk over a tree with predecessor threads.
pub struct ReverseInOrder<'a, K, V> {
    arena: &'a [ThreadNode<K, V>],
    curr: Option<u32>,
}

impl<'a, K, V> ReverseInOrder<'a, K, V> {
    pub(crate) fn new(arena: &'a [ThreadNode<K, V>], root: Option<u32>) -> Self {
        Self {
            arena,
            curr: last(arena, root),
        }
    }
}

impl<'a, K, V> Iterator for ReverseInOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let n = &arena[self.curr? as usize];
        self.curr = if n.lt { n.l } else { last(arena, n.l) };
        Some((&n.k, &n.v))
    }
}

/// Pre-order walk over a tree with successor threads.
///
/// After a node without a left child, the successor threads lead up to the
/// first ancestor whose right subtree is still unvisited.
pub struct PreOrder<'a, K, V> {
    arena: &'a [ThreadNode<K, V>],
    curr: Option<u32>,
}

impl<'a, K, V> PreOrder<'a, K, V> {
    pub(crate) fn new(arena: &'a [ThreadNode<K, V>], root: Option<u32>) -> Self {
        Self { arena, curr: root }
    }
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let i = self.curr?;
        let n = &arena[i as usize];
        self.curr = match n.l() {
            Some(l) => Some(l),
            None => {
                let mut c = i;
                while let (true, Some(r)) = (arena[c as usize].rt, arena[c as usize].r) {
                    c = r;
                }
                arena[c as usize].r()
            }
        };
        Some((&n.k, &n.v))
    }
}
