use crate::binary_tree::BinaryTree;
use crate::error::TreeError;
use crate::linked_tree::{LinkedTree, TreeOps};
use crate::traverse::{Pairs, TraversalOrder, Walker};
use crate::types::default_comparator;

use super::types::AvlNode;
use super::util;

pub struct AvlOps;

impl<K, V> TreeOps<K, V, AvlNode<K, V>> for AvlOps {
    fn node(key: K, value: V) -> AvlNode<K, V> {
        AvlNode::new(key, value)
    }

    fn insert_left(
        arena: &mut [AvlNode<K, V>],
        root: Option<u32>,
        node: u32,
        parent: u32,
    ) -> Result<Option<u32>, TreeError> {
        util::insert_left(arena, root, node, parent)
    }

    fn insert_right(
        arena: &mut [AvlNode<K, V>],
        root: Option<u32>,
        node: u32,
        parent: u32,
    ) -> Result<Option<u32>, TreeError> {
        util::insert_right(arena, root, node, parent)
    }

    fn unlink(arena: &mut [AvlNode<K, V>], root: Option<u32>, node: u32) -> Result<Option<u32>, TreeError> {
        util::remove(arena, root, node)
    }

    fn describe(node: &AvlNode<K, V>) -> String {
        format!("h={}", node.height)
    }
}

/// Height-balanced binary search tree.
///
/// Lookups, inserts and deletes are `O(log n)`. An insert needs at most one
/// single or double rotation; a delete may rotate at every ancestor.
pub struct AvlTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    inner: LinkedTree<K, V, AvlNode<K, V>, AvlOps, C>,
}

impl<K, V> AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlTree<K, V, C>
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

    pub fn arena(&self) -> &[AvlNode<K, V>] {
        self.inner.arena()
    }

    pub fn iter(&self) -> Walker<'_, K, V, AvlNode<K, V>> {
        self.inner.walk(TraversalOrder::In)
    }

    pub fn preorder(&self) -> Walker<'_, K, V, AvlNode<K, V>> {
        self.inner.walk(TraversalOrder::Pre)
    }

    pub fn inorder(&self) -> Walker<'_, K, V, AvlNode<K, V>> {
        self.inner.walk(TraversalOrder::In)
    }

    pub fn postorder(&self) -> Walker<'_, K, V, AvlNode<K, V>> {
        self.inner.walk(TraversalOrder::Post)
    }

    pub fn levelorder(&self) -> Walker<'_, K, V, AvlNode<K, V>> {
        self.inner.walk(TraversalOrder::Level)
    }

    pub fn reverse_inorder(&self) -> Walker<'_, K, V, AvlNode<K, V>> {
        self.inner.walk(TraversalOrder::ReverseIn)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.inner.validate()?;
        util::assert_avl_tree(self.inner.arena(), self.inner.root_index())
    }
}

impl<K, V, C> AvlTree<K, V, C>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    pub fn dump(&self) -> String {
        self.inner.dump()
    }
}

impl<K, V, C> BinaryTree<K, V> for AvlTree<K, V, C>
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
