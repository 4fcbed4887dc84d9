use std::fmt::Debug;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::binary_tree::BinaryTree;
use crate::error::TreeError;
use crate::traverse::{Pairs, TraversalOrder};
use crate::types::{default_comparator, KvNode, Node, Side};
use crate::util::{
    assert_links, assert_order, find, first, height, higher, last, locate, lower, next, prev, print, swap_entries,
    transplant, Slot,
};

use super::iter::{InOrder, PreOrder, ReverseInOrder};
use super::types::{DoubleThreads, LeftThreading, LeftThreads, RightThreading, RightThreads, ThreadNode, Threading};

/// Unbalanced search tree whose empty child links are threads to the
/// in-order neighbours. `T` picks the threaded sides.
pub struct ThreadedTree<K, V, T, C = fn(&K, &K) -> i32>
where
    T: Threading,
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<ThreadNode<K, V>>,
    root: Option<u32>,
    comparator: C,
    _threading: PhantomData<T>,
}

pub type RightThreadedTree<K, V, C = fn(&K, &K) -> i32> = ThreadedTree<K, V, RightThreads, C>;
pub type LeftThreadedTree<K, V, C = fn(&K, &K) -> i32> = ThreadedTree<K, V, LeftThreads, C>;
pub type DoubleThreadedTree<K, V, C = fn(&K, &K) -> i32> = ThreadedTree<K, V, DoubleThreads, C>;

impl<K, V, T> ThreadedTree<K, V, T, fn(&K, &K) -> i32>
where
    K: PartialOrd,
    T: Threading,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V, T> Default for ThreadedTree<K, V, T, fn(&K, &K) -> i32>
where
    K: PartialOrd,
    T: Threading,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, T, C> ThreadedTree<K, V, T, C>
where
    T: Threading,
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
            _threading: PhantomData,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[ThreadNode<K, V>] {
        &self.arena
    }

    pub fn search_mut(&mut self, key: &K) -> Result<&mut V, TreeError> {
        match find(&self.arena, self.root, key, &self.comparator) {
            Some(i) => Ok(&mut self.arena[i as usize].v),
            None => Err(TreeError::KeyNotFound),
        }
    }

    fn entry(&self, idx: Option<u32>) -> Option<(&K, &V)> {
        idx.map(|i| {
            let n = &self.arena[i as usize];
            (&n.k, &n.v)
        })
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.entry(first(&self.arena, self.root))
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.entry(last(&self.arena, self.root))
    }

    pub fn successor(&self, key: &K) -> Option<(&K, &V)> {
        self.entry(higher(&self.arena, self.root, key, &self.comparator))
    }

    pub fn predecessor(&self, key: &K) -> Option<(&K, &V)> {
        self.entry(lower(&self.arena, self.root, key, &self.comparator))
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// In-order neighbour after `i`, by thread when there is one.
    fn succ(&self, i: u32) -> Option<u32> {
        let n = &self.arena[i as usize];
        if let Some(r) = n.r() {
            return first(&self.arena, Some(r));
        }
        if T::RIGHT {
            return if n.rt { n.r } else { None };
        }
        next(&self.arena, i)
    }

    /// In-order neighbour before `i`, by thread when there is one.
    fn pred(&self, i: u32) -> Option<u32> {
        let n = &self.arena[i as usize];
        if let Some(l) = n.l() {
            return last(&self.arena, Some(l));
        }
        if T::LEFT {
            return if n.lt { n.l } else { None };
        }
        prev(&self.arena, i)
    }

    fn attach(&mut self, idx: u32, parent: u32, side: Side) {
        let arena = &mut self.arena;
        arena[idx as usize].p = Some(parent);
        match side {
            Side::Left => {
                if T::LEFT {
                    arena[idx as usize].l = arena[parent as usize].l;
                    arena[idx as usize].lt = arena[parent as usize].lt;
                }
                if T::RIGHT {
                    arena[idx as usize].r = Some(parent);
                    arena[idx as usize].rt = true;
                }
                arena[parent as usize].set_l(Some(idx));
            }
            Side::Right => {
                if T::RIGHT {
                    arena[idx as usize].r = arena[parent as usize].r;
                    arena[idx as usize].rt = arena[parent as usize].rt;
                }
                if T::LEFT {
                    arena[idx as usize].l = Some(parent);
                    arena[idx as usize].lt = true;
                }
                arena[parent as usize].set_r(Some(idx));
            }
        }
    }

    /// Unlinks `z`, which has at most one real child, handing its threads to
    /// whichever node takes over its in-order position.
    fn unlink(&mut self, z: u32) {
        let (zl, zr, zlt, zrt) = {
            let n = &self.arena[z as usize];
            (n.l, n.r, n.lt, n.rt)
        };
        let p = self.arena[z as usize].p;
        let l = self.arena[z as usize].l();
        let r = self.arena[z as usize].r();
        match l.or(r) {
            None => {
                if let Some(p) = p {
                    let parent = &mut self.arena[p as usize];
                    if parent.l() == Some(z) {
                        parent.l = zl;
                        parent.lt = zlt;
                    } else {
                        parent.r = zr;
                        parent.rt = zrt;
                    }
                } else {
                    self.root = None;
                }
            }
            Some(c) => {
                if let Some(l) = l {
                    if T::RIGHT {
                        if let Some(pr) = last(&self.arena, Some(l)) {
                            trace!(node = z, pred = pr, "successor thread handed to predecessor");
                            self.arena[pr as usize].r = zr;
                            self.arena[pr as usize].rt = zrt;
                        }
                    }
                } else if T::LEFT {
                    if let Some(su) = first(&self.arena, r) {
                        trace!(node = z, succ = su, "predecessor thread handed to successor");
                        self.arena[su as usize].l = zl;
                        self.arena[su as usize].lt = zlt;
                    }
                }
                self.root = transplant(&mut self.arena, self.root, z, Some(c));
            }
        }
        let n = &mut self.arena[z as usize];
        n.p = None;
        n.l = None;
        n.r = None;
        n.lt = false;
        n.rt = false;
    }

    /// Takes the unlinked node at `idx` out of the arena, moving the last
    /// node into its slot. Besides the parent and child links, the threads
    /// of the moved node's in-order neighbours are redirected.
    fn release(&mut self, idx: u32) -> ThreadNode<K, V> {
        let last = (self.arena.len() - 1) as u32;
        if idx != last {
            let pred = self.pred(last);
            let succ = self.succ(last);
            let moved = &self.arena[last as usize];
            let (p, l, r) = (moved.p, moved.l(), moved.r());
            match p {
                Some(p) => {
                    if self.arena[p as usize].l() == Some(last) {
                        self.arena[p as usize].l = Some(idx);
                    } else {
                        self.arena[p as usize].r = Some(idx);
                    }
                }
                None => {
                    if self.root == Some(last) {
                        self.root = Some(idx);
                    }
                }
            }
            for c in l.into_iter().chain(r) {
                self.arena[c as usize].p = Some(idx);
            }
            if let Some(pr) = pred {
                let n = &mut self.arena[pr as usize];
                if n.rt && n.r == Some(last) {
                    n.r = Some(idx);
                }
            }
            if let Some(su) = succ {
                let n = &mut self.arena[su as usize];
                if n.lt && n.l == Some(last) {
                    n.l = Some(idx);
                }
            }
        }
        self.arena.swap_remove(idx as usize)
    }

    /// Checks links, key order and that every thread points at the right
    /// in-order neighbour.
    pub fn validate(&self) -> Result<(), String> {
        assert_links(&self.arena, self.root)?;
        assert_order(&self.arena, self.root, &self.comparator)?;
        let mut prev_node: Option<u32> = None;
        let mut curr = first(&self.arena, self.root);
        while let Some(i) = curr {
            let following = next(&self.arena, i);
            let n = &self.arena[i as usize];
            if n.lt && !T::LEFT {
                return Err(format!("Node[{i}] has an unexpected left thread"));
            }
            if n.rt && !T::RIGHT {
                return Err(format!("Node[{i}] has an unexpected right thread"));
            }
            if T::LEFT && n.l().is_none() && (n.l != prev_node || n.lt != prev_node.is_some()) {
                return Err(format!("Node[{i}] left thread does not point at its predecessor"));
            }
            if T::RIGHT && n.r().is_none() && (n.r != following || n.rt != following.is_some()) {
                return Err(format!("Node[{i}] right thread does not point at its successor"));
            }
            prev_node = Some(i);
            curr = following;
        }
        Ok(())
    }
}

impl<K, V, T, C> ThreadedTree<K, V, T, C>
where
    T: RightThreading,
    C: Fn(&K, &K) -> i32,
{
    pub fn inorder(&self) -> InOrder<'_, K, V> {
        InOrder::new(&self.arena, self.root)
    }

    pub fn iter(&self) -> InOrder<'_, K, V> {
        self.inorder()
    }

    pub fn preorder(&self) -> PreOrder<'_, K, V> {
        PreOrder::new(&self.arena, self.root)
    }
}

impl<K, V, T, C> ThreadedTree<K, V, T, C>
where
    T: LeftThreading,
    C: Fn(&K, &K) -> i32,
{
    pub fn reverse_inorder(&self) -> ReverseInOrder<'_, K, V> {
        ReverseInOrder::new(&self.arena, self.root)
    }
}

impl<K, V, T, C> ThreadedTree<K, V, T, C>
where
    K: Debug,
    V: Debug,
    T: Threading,
    C: Fn(&K, &K) -> i32,
{
    pub fn dump(&self) -> String {
        print(&self.arena, self.root, "", &describe::<K, V>)
    }
}

fn describe<K, V>(n: &ThreadNode<K, V>) -> String {
    match (n.lt, n.rt) {
        (true, true) => format!("pred={} succ={}", fmt_link(n.l), fmt_link(n.r)),
        (true, false) => format!("pred={}", fmt_link(n.l)),
        (false, true) => format!("succ={}", fmt_link(n.r)),
        (false, false) => String::new(),
    }
}

fn fmt_link(link: Option<u32>) -> String {
    link.map_or_else(|| "∅".to_string(), |i| i.to_string())
}

impl<K, V, T, C> BinaryTree<K, V> for ThreadedTree<K, V, T, C>
where
    T: Threading,
    C: Fn(&K, &K) -> i32,
{
    fn search(&self, key: &K) -> Result<&V, TreeError> {
        match find(&self.arena, self.root, key, &self.comparator) {
            Some(i) => Ok(self.arena[i as usize].value()),
            None => Err(TreeError::KeyNotFound),
        }
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), TreeError> {
        let (parent, side) = match locate(&self.arena, self.root, &key, &self.comparator) {
            Slot::Occupied(_) => return Err(TreeError::DuplicateKey),
            Slot::Vacant { parent, side } => (parent, side),
        };
        self.arena.push(ThreadNode::new(key, value));
        let idx = (self.arena.len() - 1) as u32;
        match parent {
            None => self.root = Some(idx),
            Some(p) => self.attach(idx, p, side),
        }
        debug!(len = self.arena.len(), "inserted entry");
        Ok(())
    }

    fn delete(&mut self, key: &K) -> Result<V, TreeError> {
        let mut z = find(&self.arena, self.root, key, &self.comparator).ok_or(TreeError::KeyNotFound)?;
        let n = &self.arena[z as usize];
        if let (Some(_), Some(r)) = (n.l(), n.r()) {
            if let Some(y) = first(&self.arena, Some(r)) {
                swap_entries(&mut self.arena, z, y);
                z = y;
            }
        }
        self.unlink(z);
        let removed = self.release(z);
        debug!(len = self.arena.len(), "deleted entry");
        let (_, value) = removed.into_entry();
        Ok(value)
    }

    fn traverse<'a>(&'a self, order: TraversalOrder) -> Result<Pairs<'a, K, V>, TreeError>
    where
        K: 'a,
        V: 'a,
    {
        match order {
            TraversalOrder::In if T::RIGHT => Ok(Box::new(InOrder::new(&self.arena, self.root))),
            TraversalOrder::Pre if T::RIGHT => Ok(Box::new(PreOrder::new(&self.arena, self.root))),
            TraversalOrder::ReverseIn if T::LEFT => Ok(Box::new(ReverseInOrder::new(&self.arena, self.root))),
            _ => Err(TreeError::UnsupportedTraversal(order)),
        }
    }

    fn len(&self) -> usize {
        self.arena.len()
    }

    fn height(&self) -> Option<usize> {
        height(&self.arena, self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [i32; 11] = [23, 4, 30, 11, 7, 34, 20, 24, 22, 15, 1];

    fn fill<T: Threading>(tree: &mut ThreadedTree<i32, i32, T>) {
        for k in KEYS {
            tree.insert(k, -k).unwrap();
            tree.validate().unwrap();
        }
    }

    fn keys<'a>(iter: impl Iterator<Item = (&'a i32, &'a i32)>) -> Vec<i32> {
        iter.map(|(k, _)| *k).collect()
    }

    #[test]
    fn right_threaded_walks() {
        let mut tree = RightThreadedTree::new();
        fill(&mut tree);
        assert_eq!(keys(tree.inorder()), vec![1, 4, 7, 11, 15, 20, 22, 23, 24, 30, 34]);
        assert_eq!(keys(tree.preorder()), vec![23, 4, 1, 11, 7, 20, 15, 22, 30, 24, 34]);
        assert_eq!(
            tree.traverse(TraversalOrder::ReverseIn).err(),
            Some(TreeError::UnsupportedTraversal(TraversalOrder::ReverseIn))
        );
        assert_eq!(
            tree.traverse(TraversalOrder::Level).err(),
            Some(TreeError::UnsupportedTraversal(TraversalOrder::Level))
        );
        assert!(tree.arena().iter().all(|n| !n.lt));
    }

    #[test]
    fn left_threaded_walks() {
        let mut tree = LeftThreadedTree::new();
        fill(&mut tree);
        assert_eq!(keys(tree.reverse_inorder()), vec![34, 30, 24, 23, 22, 20, 15, 11, 7, 4, 1]);
        assert_eq!(
            tree.traverse(TraversalOrder::In).err(),
            Some(TreeError::UnsupportedTraversal(TraversalOrder::In))
        );
        assert!(tree.arena().iter().all(|n| !n.rt));
    }

    #[test]
    fn double_threaded_walks_both_ways() {
        let mut tree = DoubleThreadedTree::new();
        fill(&mut tree);
        let forward = keys(tree.traverse(TraversalOrder::In).unwrap());
        let mut backward = keys(tree.traverse(TraversalOrder::ReverseIn).unwrap());
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(keys(tree.traverse(TraversalOrder::Pre).unwrap()).len(), KEYS.len());
        assert_eq!(
            tree.traverse(TraversalOrder::Post).err(),
            Some(TreeError::UnsupportedTraversal(TraversalOrder::Post))
        );
    }

    #[test]
    fn deletes_hand_over_threads() {
        let mut tree = DoubleThreadedTree::new();
        fill(&mut tree);
        // Two leaves, then 20 (left child only), 4 (right child only), the
        // root 23 (two children) and 30 (right child only).
        for k in [1, 22, 20, 4, 23, 30] {
            assert_eq!(tree.delete(&k), Ok(-k));
            tree.validate().unwrap();
        }
        assert_eq!(keys(tree.inorder()), vec![7, 11, 15, 24, 34]);
        assert_eq!(keys(tree.preorder()), vec![24, 11, 7, 15, 34]);
        assert_eq!(keys(tree.reverse_inorder()), vec![34, 24, 15, 11, 7]);
        assert_eq!(tree.delete(&30), Err(TreeError::KeyNotFound));
    }

    #[test]
    fn drain_to_empty() {
        let mut tree = RightThreadedTree::new();
        fill(&mut tree);
        for k in KEYS {
            tree.delete(&k).unwrap();
            tree.validate().unwrap();
        }
        assert!(tree.is_empty());
        assert_eq!(tree.inorder().next(), None);
        assert_eq!(tree.height(), None);
    }

    #[test]
    fn duplicate_insert_changes_nothing() {
        let mut tree = LeftThreadedTree::new();
        fill(&mut tree);
        let before = tree.dump();
        assert_eq!(tree.insert(22, 0), Err(TreeError::DuplicateKey));
        assert_eq!(tree.dump(), before);
        assert_eq!(tree.search(&22), Ok(&-22));
    }

    #[test]
    fn dump_shows_threads() {
        let mut tree = RightThreadedTree::new();
        tree.insert(2, ()).unwrap();
        tree.insert(1, ()).unwrap();
        assert_eq!(
            tree.dump(),
            "Node[0] { 2 = () }\nL=Node[1] [succ=0] { 1 = () }\n  L=∅\n  R=∅\nR=∅"
        );
    }
}
