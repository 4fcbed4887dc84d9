use crate::types::{KvNode, Node};

/// Which sides of a threaded tree carry in-order threads.
pub trait Threading {
    /// Empty left links point at the in-order predecessor.
    const LEFT: bool;
    /// Empty right links point at the in-order successor.
    const RIGHT: bool;
}

/// Threading with successor threads, enables the stackless ascending walks.
pub trait RightThreading: Threading {}

/// Threading with predecessor threads, enables the stackless descending walk.
pub trait LeftThreading: Threading {}

#[derive(Clone, Copy, Debug, Default)]
pub struct RightThreads;

#[derive(Clone, Copy, Debug, Default)]
pub struct LeftThreads;

#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleThreads;

impl Threading for RightThreads {
    const LEFT: bool = false;
    const RIGHT: bool = true;
}

impl Threading for LeftThreads {
    const LEFT: bool = true;
    const RIGHT: bool = false;
}

impl Threading for DoubleThreads {
    const LEFT: bool = true;
    const RIGHT: bool = true;
}

impl RightThreading for RightThreads {}
impl RightThreading for DoubleThreads {}
impl LeftThreading for LeftThreads {}
impl LeftThreading for DoubleThreads {}

/// Node of a threaded tree.
///
/// `lt` / `rt` are set when the raw `l` / `r` link is a thread rather than a
/// child. The [`Node`] accessors only ever report real children, so the
/// shared navigation helpers see a plain binary search tree; thread upkeep
/// works on the raw fields directly.
#[derive(Clone, Debug)]
pub struct ThreadNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    pub lt: bool,
    pub rt: bool,
}

impl<K, V> ThreadNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            lt: false,
            rt: false,
        }
    }
}

impl<K, V> Node for ThreadNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        if self.lt {
            None
        } else {
            self.l
        }
    }

    fn r(&self) -> Option<u32> {
        if self.rt {
            None
        } else {
            self.r
        }
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
        self.lt = false;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
        self.rt = false;
    }
}

impl<K, V> KvNode<K, V> for ThreadNode<K, V> {
    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> &V {
        &self.v
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }

    fn entry_mut(&mut self) -> (&mut K, &mut V) {
        (&mut self.k, &mut self.v)
    }

    fn into_entry(self) -> (K, V) {
        (self.k, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threads_are_hidden_from_child_accessors() {
        let mut n = ThreadNode::new(1, ());
        n.r = Some(4);
        n.rt = true;
        assert_eq!(n.r(), None);
        n.set_r(Some(2));
        assert!(!n.rt);
        assert_eq!(n.r(), Some(2));
    }
}
