use std::fmt::Debug;
use std::marker::PhantomData;

use tracing::debug;

use crate::error::TreeError;
use crate::traverse::{TraversalOrder, Walker};
use crate::types::{KvNode, Side};
use crate::util::{
    assert_links, assert_order, find, first, height, higher, last, locate, lower, print, release,
    swap_entries, Slot,
};

/// Variant-specific steps plugged into [`LinkedTree`].
///
/// Every callback receives the arena and the current root and returns the
/// new root, so rotations near the top can replace it.
pub trait TreeOps<K, V, N>
where
    N: KvNode<K, V>,
{
    fn node(key: K, value: V) -> N;

    /// Installs `node` as the root of an empty tree.
    fn insert_root(_arena: &mut [N], node: u32) -> Option<u32> {
        Some(node)
    }

    fn insert_left(arena: &mut [N], root: Option<u32>, node: u32, parent: u32) -> Result<Option<u32>, TreeError>;

    fn insert_right(arena: &mut [N], root: Option<u32>, node: u32, parent: u32) -> Result<Option<u32>, TreeError>;

    /// Detaches `node`, which has at most one child, and repairs the tree
    /// above it. On return nothing links to `node`.
    fn unlink(arena: &mut [N], root: Option<u32>, node: u32) -> Result<Option<u32>, TreeError>;

    /// Extra text shown next to the node index by `dump`.
    fn describe(_node: &N) -> String {
        String::new()
    }
}

/// Arena-backed search tree core shared by the parent-linked variants.
///
/// Holds the arena, the root and the comparator; all structural decisions
/// are delegated to `O`.
pub struct LinkedTree<K, V, N, O, C>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<N>,
    root: Option<u32>,
    comparator: C,
    _kv: PhantomData<(K, V)>,
    _ops: PhantomData<O>,
}

impl<K, V, N, O, C> LinkedTree<K, V, N, O, C>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
            _kv: PhantomData,
            _ops: PhantomData,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[N] {
        &self.arena
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn search(&self, key: &K) -> Result<&V, TreeError> {
        match self.find(key) {
            Some(i) => Ok(self.arena[i as usize].value()),
            None => Err(TreeError::KeyNotFound),
        }
    }

    pub fn search_mut(&mut self, key: &K) -> Result<&mut V, TreeError> {
        match self.find(key) {
            Some(i) => Ok(self.arena[i as usize].value_mut()),
            None => Err(TreeError::KeyNotFound),
        }
    }

    pub fn insert(&mut self, key: K, value: V) -> Result<(), TreeError> {
        let slot = locate(&self.arena, self.root, &key, &self.comparator);
        let (parent, side) = match slot {
            Slot::Occupied(_) => return Err(TreeError::DuplicateKey),
            Slot::Vacant { parent, side } => (parent, side),
        };
        self.arena.push(O::node(key, value));
        let idx = (self.arena.len() - 1) as u32;
        self.root = match parent {
            None => O::insert_root(&mut self.arena, idx),
            Some(p) => match side {
                Side::Left => O::insert_left(&mut self.arena, self.root, idx, p)?,
                Side::Right => O::insert_right(&mut self.arena, self.root, idx, p)?,
            },
        };
        debug!(len = self.arena.len(), "inserted entry");
        Ok(())
    }

    pub fn delete(&mut self, key: &K) -> Result<V, TreeError> {
        let mut idx = self.find(key).ok_or(TreeError::KeyNotFound)?;
        let node = &self.arena[idx as usize];
        if let (Some(_), Some(r)) = (node.l(), node.r()) {
            if let Some(succ) = first(&self.arena, Some(r)) {
                swap_entries(&mut self.arena, idx, succ);
                idx = succ;
            }
        }
        let root = O::unlink(&mut self.arena, self.root, idx)?;
        let (removed, root) = release(&mut self.arena, root, idx);
        self.root = root;
        debug!(len = self.arena.len(), "deleted entry");
        let (_, value) = removed.into_entry();
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn height(&self) -> Option<usize> {
        height(&self.arena, self.root)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    fn entry(&self, idx: Option<u32>) -> Option<(&K, &V)> {
        idx.map(|i| {
            let n = &self.arena[i as usize];
            (n.key(), n.value())
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

    pub fn walk(&self, order: TraversalOrder) -> Walker<'_, K, V, N> {
        Walker::new(&self.arena, self.root, order)
    }

    /// Link and ordering checks common to every variant.
    pub fn validate(&self) -> Result<(), String> {
        assert_links(&self.arena, self.root)?;
        assert_order(&self.arena, self.root, &self.comparator)
    }
}

impl<K, V, N, O, C> LinkedTree<K, V, N, O, C>
where
    K: Debug,
    V: Debug,
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
{
    pub fn dump(&self) -> String {
        print(&self.arena, self.root, "", &O::describe)
    }
}
