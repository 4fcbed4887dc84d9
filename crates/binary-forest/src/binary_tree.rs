use crate::error::TreeError;
use crate::traverse::{Pairs, TraversalOrder};

/// Operations shared by every tree variant.
///
/// Failures never modify the tree: a rejected `insert` keeps the old value,
/// a `delete` of an absent key is a no-op that reports `KeyNotFound`.
pub trait BinaryTree<K, V> {
    fn search(&self, key: &K) -> Result<&V, TreeError>;

    /// Inserts a new entry. Existing keys are never overwritten.
    fn insert(&mut self, key: K, value: V) -> Result<(), TreeError>;

    /// Removes the entry for `key` and returns its value.
    fn delete(&mut self, key: &K) -> Result<V, TreeError>;

    /// Lazy one-shot walk in the requested order.
    fn traverse<'a>(&'a self, order: TraversalOrder) -> Result<Pairs<'a, K, V>, TreeError>
    where
        K: 'a,
        V: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    /// Height in edges of the longest root-to-leaf path, `None` when empty.
    fn height(&self) -> Option<usize>;
}
