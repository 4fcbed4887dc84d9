use crate::binary_tree::BinaryTree;
use crate::error::TreeError;
use crate::linked_tree::{LinkedTree, TreeOps};
use crate::traverse::{Pairs, TraversalOrder, Walker};
use crate::types::default_comparator;

use super::types::BstNode;
use super::util;

pub struct BstOps;

impl<K, V> TreeOps<K, V, BstNode<K, V>> for BstOps {
    fn node(key: K, value: V) -> BstNode<K, V> {
        BstNode::new(key, value)
    }

    fn insert_left(
        arena: &mut [BstNode<K, V>],
        root: Option<u32>,
        node: u32,
        parent: u32,
    ) -> Result<Option<u32>, TreeError> {
        Ok(util::insert_left(arena, root, node, parent))
    }

    fn insert_right(
        arena: &mut [BstNode<K, V>],
        root: Option<u32>,
        node: u32,
        parent: u32,
    ) -> Result<Option<u32>, TreeError> {
        Ok(util::insert_right(arena, root, node, parent))
    }

    fn unlink(arena: &mut [BstNode<K, V>], root: Option<u32>, node: u32) -> Result<Option<u32>, TreeError> {
        Ok(util::remove(arena, root, node))
    }
}

/// Binary search tree without any balancing; its shape depends entirely on
/// insertion order.
pub struct BinarySearchTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    inner: LinkedTree<K, V, BstNode<K, V>, BstOps, C>,
}

impl<K, V> BinarySearchTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for BinarySearchTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> BinarySearchTree<K, V, C>
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

    pub fn arena(&self) -> &[BstNode<K, V>] {
        self.inner.arena()
    }

    pub fn iter(&self) -> Walker<'_, K, V, BstNode<K, V>> {
        self.inner.walk(TraversalOrder::In)
    }

    pub fn preorder(&self) -> Walker<'_, K, V, BstNode<K, V>> {
        self.inner.walk(TraversalOrder::Pre)
    }

    pub fn inorder(&self) -> Walker<'_, K, V, BstNode<K, V>> {
        self.inner.walk(TraversalOrder::In)
    }

    pub fn postorder(&self) -> Walker<'_, K, V, BstNode<K, V>> {
        self.inner.walk(TraversalOrder::Post)
    }

    pub fn levelorder(&self) -> Walker<'_, K, V, BstNode<K, V>> {
        self.inner.walk(TraversalOrder::Level)
    }

    pub fn reverse_inorder(&self) -> Walker<'_, K, V, BstNode<K, V>> {
        self.inner.walk(TraversalOrder::ReverseIn)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.inner.validate()
    }
}

impl<K, V, C> BinarySearchTree<K, V, C>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    pub fn dump(&self) -> String {
        self.inner.dump()
    }
}

impl<K, V, C> BinaryTree<K, V> for BinarySearchTree<K, V, C>
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
