use crate::binary_tree::BinaryTree;
use crate::error::TreeError;
use crate::linked_tree::{LinkedTree, TreeOps};
use crate::traverse::{Pairs, TraversalOrder, Walker};
use crate::types::default_comparator;

use super::types::RbNode;
use super::util;

pub struct RbOps;

impl<K, V> TreeOps<K, V, RbNode<K, V>> for RbOps {
    fn node(key: K, value: V) -> RbNode<K, V> {
        RbNode::new(key, value)
    }

    fn insert_left(
        arena: &mut [RbNode<K, V>],
        root: Option<u32>,
        node: u32,
        parent: u32,
    ) -> Result<Option<u32>, TreeError> {
        util::insert_left(arena, root, node, parent)
    }

    fn insert_right(
        arena: &mut [RbNode<K, V>],
        root: Option<u32>,
        node: u32,
        parent: u32,
    ) -> Result<Option<u32>, TreeError> {
        util::insert_right(arena, root, node, parent)
    }

    fn unlink(arena: &mut [RbNode<K, V>], root: Option<u32>, node: u32) -> Result<Option<u32>, TreeError> {
        util::remove(arena, root, node)
    }

    fn insert_root(arena: &mut [RbNode<K, V>], node: u32) -> Option<u32> {
        util::insert_root(arena, node)
    }

    fn describe(node: &RbNode<K, V>) -> String {
        format!("{:?}", node.color)
    }
}

/// Red-black tree. The longest root-to-leaf path is at most twice the
/// shortest; every update does at most three rotations.
pub struct RbTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    inner: LinkedTree<K, V, RbNode<K, V>, RbOps, C>,
}

impl<K, V> RbTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for RbTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: LinkedTree::with_comparator(comparator),
        }
    }

    pub fn search_mut(&mut self, key: &K) -> Result<&mut V, TreeError> {
        self.inner.search_mut(key)
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.inner.first()
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.inner.last()
    }

    pub fn successor(&self, key: &K) -> Option<(&K, &V)> {
        self.inner.successor(key)
    }

    pub fn predecessor(&self, key: &K) -> Option<(&K, &V)> {
        self.inner.predecessor(key)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn root_index(&self) -> Option<u32> {
        self.inner.root_index()
    }

    pub fn arena(&self) -> &[RbNode<K, V>] {
        self.inner.arena()
    }

    pub fn iter(&self) -> Walker<'_, K, V, RbNode<K, V>> {
        self.inner.walk(TraversalOrder::In)
    }

    pub fn preorder(&self) -> Walker<'_, K, V, RbNode<K, V>> {
        self.inner.walk(TraversalOrder::Pre)
    }

    pub fn inorder(&self) -> Walker<'_, K, V, RbNode<K, V>> {
        self.inner.walk(TraversalOrder::In)
    }

    pub fn postorder(&self) -> Walker<'_, K, V, RbNode<K, V>> {
        self.inner.walk(TraversalOrder::Post)
    }

    pub fn levelorder(&self) -> Walker<'_, K, V, RbNode<K, V>> {
        self.inner.walk(TraversalOrder::Level)
    }

    pub fn reverse_inorder(&self) -> Walker<'_, K, V, RbNode<K, V>> {
        self.inner.walk(TraversalOrder::ReverseIn)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.inner.validate()?;
        util::assert_red_black_tree(self.inner.arena(), self.inner.root_index())
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    pub fn dump(&self) -> String {
        self.inner.dump()
    }
}

impl<K, V, C> BinaryTree<K, V> for RbTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn search(&self, key: &K) -> Result<&V, TreeError> {
        self.inner.search(key)
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), TreeError> {
        self.inner.insert(key, value)
    }

    fn delete(&mut self, key: &K) -> Result<V, TreeError> {
        self.inner.delete(key)
    }

    fn traverse<'a>(&'a self, order: TraversalOrder) -> Result<Pairs<'a, K, V>, TreeError>
    where
        K: 'a,
        V: 'a,
    {
        Ok(Box::new(self.inner.walk(order)))
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn height(&self) -> Option<usize> {
        self.inner.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::Color;

    const KEYS: [i32; 11] = [23, 4, 30, 11, 7, 34, 20, 24, 22, 15, 1];

    fn sample() -> RbTree<i32, &'static str> {
        let mut tree = RbTree::new();
        for k in KEYS {
            tree.insert(k, "v").unwrap();
            tree.validate().unwrap();
        }
        tree
    }

    fn colored_preorder(tree: &RbTree<i32, &'static str>) -> Vec<(i32, Color)> {
        let arena = tree.arena();
        let mut out = Vec::new();
        let mut stack: Vec<u32> = tree.root_index().into_iter().collect();
        while let Some(i) = stack.pop() {
            let n = &arena[i as usize];
            out.push((n.k, n.color));
            stack.extend(n.r);
            stack.extend(n.l);
        }
        out
    }

    #[test]
    fn sample_tree_colors() {
        use Color::{Black as B, Red as R};
        let tree = sample();
        assert_eq!(tree.height(), Some(3));
        assert_eq!(
            colored_preorder(&tree),
            vec![(20, B), (7, R), (4, B), (1, R), (11, B), (15, R), (23, R), (22, B), (30, B), (24, R), (34, R)]
        );
    }

    #[test]
    fn delete_internal_node_recolors() {
        use Color::{Black as B, Red as R};
        let mut tree = sample();
        assert_eq!(tree.delete(&20), Ok("v"));
        tree.validate().unwrap();
        assert_eq!(
            colored_preorder(&tree),
            vec![(22, B), (7, R), (4, B), (1, R), (11, B), (15, R), (30, R), (23, B), (24, R), (34, B)]
        );
    }

    #[test]
    fn ascending_inserts_then_full_drain() {
        let mut tree = RbTree::new();
        for k in 1..=10 {
            tree.insert(k, k).unwrap();
            tree.validate().unwrap();
        }
        assert_eq!(tree.height(), Some(4));
        assert_eq!(tree.preorder().next(), Some((&4, &4)));
        for k in 1..=10 {
            assert_eq!(tree.delete(&k), Ok(k));
            tree.validate().unwrap();
        }
        assert!(tree.is_empty());
        assert_eq!(tree.root_index(), None);
    }

    #[test]
    fn duplicate_is_rejected() {
        let mut tree = sample();
        assert_eq!(tree.insert(7, "other"), Err(TreeError::DuplicateKey));
        assert_eq!(tree.search(&7), Ok(&"v"));
        assert_eq!(tree.len(), 11);
    }

    #[test]
    fn dump_shows_colors() {
        let mut tree = RbTree::new();
        tree.insert(1, ()).unwrap();
        assert_eq!(tree.dump(), "Node[0] [Black] { 1 = () }\nL=∅\nR=∅");
    }
}
