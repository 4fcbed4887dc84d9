//! Navigation and surgery helpers shared by every tree. Threaded nodes only
//! report real children through [`Node`], so the read-only helpers work on
//! them as well.
//!
//! Every helper works on a `Vec`-backed arena of [`Node`]s and returns the
//! (possibly new) root index instead of holding a reference to the tree.

pub mod print;

use crate::types::{KvNode, Node, Side};

pub use print::print;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Height of the tree in edges; `None` for an empty tree.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> Option<usize> {
    let mut max = None;
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 0)).into_iter().collect();
    while let Some((i, depth)) = stack.pop() {
        if max.map_or(true, |m| depth > m) {
            max = Some(depth);
        }
        if let Some(l) = get_l(arena, i) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, i) {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// Result of a key descent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The key is stored at this index.
    Occupied(u32),
    /// The key is absent; a new node would hang off `parent` on `side`
    /// (or become the root when `parent` is `None`).
    Vacant { parent: Option<u32>, side: Side },
}

/// Descends from `root` comparing `key` against each node.
pub fn locate<K, V, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Slot
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut parent = None;
    let mut side = Side::Left;
    while let Some(i) = curr {
        let cmp = comparator(key, arena[i as usize].key());
        if cmp == 0 {
            return Slot::Occupied(i);
        }
        parent = Some(i);
        if cmp < 0 {
            side = Side::Left;
            curr = get_l(arena, i);
        } else {
            side = Side::Right;
            curr = get_r(arena, i);
        }
    }
    Slot::Vacant { parent, side }
}

/// Finds a node by key.
pub fn find<K, V, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    match locate(arena, root, key, comparator) {
        Slot::Occupied(i) => Some(i),
        Slot::Vacant { .. } => None,
    }
}

/// Node with the smallest key strictly greater than `key`. `key` itself does
/// not have to be present.
pub fn higher<K, V, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut best = None;
    while let Some(i) = curr {
        if comparator(key, arena[i as usize].key()) < 0 {
            best = Some(i);
            curr = get_l(arena, i);
        } else {
            curr = get_r(arena, i);
        }
    }
    best
}

/// Node with the largest key strictly less than `key`.
pub fn lower<K, V, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut best = None;
    while let Some(i) = curr {
        if comparator(key, arena[i as usize].key()) > 0 {
            best = Some(i);
            curr = get_r(arena, i);
        } else {
            curr = get_l(arena, i);
        }
    }
    best
}

/// Hangs `node` off `parent` as its left or right child.
pub fn attach<N: Node>(arena: &mut [N], node: u32, parent: u32, side: Side) {
    match side {
        Side::Left => set_l(arena, parent, Some(node)),
        Side::Right => set_r(arena, parent, Some(node)),
    }
    set_p(arena, node, Some(parent));
}

/// Replaces the subtree rooted at `u` with the one rooted at `v` in `u`'s
/// parent slot. `u`'s own links are left untouched.
pub fn transplant<N: Node>(arena: &mut [N], root: Option<u32>, u: u32, v: Option<u32>) -> Option<u32> {
    let p = get_p(arena, u);
    let root = match p {
        None => v,
        Some(p) => {
            if get_l(arena, p) == Some(u) {
                set_l(arena, p, v);
            } else {
                set_r(arena, p, v);
            }
            root
        }
    };
    if let Some(v) = v {
        set_p(arena, v, p);
    }
    root
}

/// Removes `node`, which has at most one child, by moving that child into its
/// slot. The node's own links are cleared so it can be released.
pub fn splice<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let child = get_l(arena, node).or(get_r(arena, node));
    let root = transplant(arena, root, node, child);
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);
    root
}

/// Exchanges the key/value payloads of two nodes, leaving the topology and
/// any balancing metadata where it is.
pub fn swap_entries<K, V, N>(arena: &mut [N], a: u32, b: u32)
where
    N: KvNode<K, V>,
{
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = arena.split_at_mut(hi as usize);
    let (lo_key, lo_value) = head[lo as usize].entry_mut();
    let (hi_key, hi_value) = tail[0].entry_mut();
    std::mem::swap(lo_key, hi_key);
    std::mem::swap(lo_value, hi_value);
}

/// Takes the detached node at `idx` out of the arena.
///
/// The arena stays dense: the last node moves into slot `idx` and the links
/// that referenced it (its parent's child link or the root, its children's
/// parent links) are rewritten. `idx` must not be linked from anywhere.
pub fn release<N: Node>(arena: &mut Vec<N>, mut root: Option<u32>, idx: u32) -> (N, Option<u32>) {
    let last = (arena.len() - 1) as u32;
    if idx != last {
        match get_p(arena, last) {
            Some(p) => {
                if get_l(arena, p) == Some(last) {
                    set_l(arena, p, Some(idx));
                } else {
                    set_r(arena, p, Some(idx));
                }
            }
            None => {
                if root == Some(last) {
                    root = Some(idx);
                }
            }
        }
        if let Some(l) = get_l(arena, last) {
            set_p(arena, l, Some(idx));
        }
        if let Some(r) = get_r(arena, last) {
            set_p(arena, r, Some(idx));
        }
    }
    (arena.swap_remove(idx as usize), root)
}

/// Checks parent back-references and that every arena slot is reachable.
pub fn assert_links<N: Node>(arena: &[N], root: Option<u32>) -> Result<(), String> {
    let Some(root) = root else {
        return if arena.is_empty() {
            Ok(())
        } else {
            Err("Empty tree with live nodes".to_string())
        };
    };

    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    let mut stack = vec![root];
    let mut seen = 0usize;
    while let Some(i) = stack.pop() {
        seen += 1;
        if seen > arena.len() {
            return Err("Cycle in child links".to_string());
        }
        if let Some(l) = get_l(arena, i) {
            if get_p(arena, l) != Some(i) {
                return Err("Broken parent link on left child".to_string());
            }
            stack.push(l);
        }
        if let Some(r) = get_r(arena, i) {
            if get_p(arena, r) != Some(i) {
                return Err("Broken parent link on right child".to_string());
            }
            stack.push(r);
        }
    }
    if seen != arena.len() {
        return Err(format!("{} of {} nodes reachable", seen, arena.len()));
    }
    Ok(())
}

/// Checks that an in-order walk yields strictly ascending keys.
pub fn assert_order<K, V, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = first(arena, root);
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) >= 0 {
                return Err("Node order violated".to_string());
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bst::BstNode;
    use crate::types::default_comparator;

    fn chain(keys: &[i32]) -> (Vec<BstNode<i32, ()>>, Option<u32>) {
        let mut arena = Vec::new();
        let mut root = None;
        for &k in keys {
            arena.push(BstNode::new(k, ()));
            let n = (arena.len() - 1) as u32;
            match locate(&arena, root, &k, &default_comparator::<i32>) {
                Slot::Vacant { parent: None, .. } => root = Some(n),
                Slot::Vacant {
                    parent: Some(p),
                    side,
                } => attach(&mut arena, n, p, side),
                Slot::Occupied(_) => unreachable!(),
            }
        }
        (arena, root)
    }

    #[test]
    fn navigation_follows_key_order() {
        let (arena, root) = chain(&[5, 3, 8, 1, 4, 9]);
        let mut keys = Vec::new();
        let mut curr = first(&arena, root);
        while let Some(i) = curr {
            keys.push(arena[i as usize].k);
            curr = next(&arena, i);
        }
        assert_eq!(keys, vec![1, 3, 4, 5, 8, 9]);

        let mut back = Vec::new();
        let mut curr = last(&arena, root);
        while let Some(i) = curr {
            back.push(arena[i as usize].k);
            curr = prev(&arena, i);
        }
        assert_eq!(back, vec![9, 8, 5, 4, 3, 1]);
        assert_eq!(height(&arena, root), Some(2));
        assert_eq!(height::<BstNode<i32, ()>>(&[], None), None);
    }

    #[test]
    fn release_keeps_links_consistent() {
        let (mut arena, root) = chain(&[5, 3, 8, 1]);
        // Detach leaf 1 (index 3 is last, so move 8 instead).
        let eight = find(&arena, root, &8, &default_comparator::<i32>).unwrap();
        let root = transplant(&mut arena, root, eight, None);
        set_p(&mut arena, eight, None);
        let (node, root) = release(&mut arena, root, eight);
        assert_eq!(node.k, 8);
        assert_links(&arena, root).unwrap();
        assert_order(&arena, root, &default_comparator::<i32>).unwrap();
        assert_eq!(find(&arena, root, &1, &default_comparator::<i32>), Some(eight));
    }

    #[test]
    fn swap_entries_moves_payload_only() {
        let (mut arena, root) = chain(&[2, 1, 3]);
        swap_entries(&mut arena, 1, 2);
        assert_eq!(arena[1].k, 3);
        assert_eq!(arena[2].k, 1);
        assert_links(&arena, root).unwrap();
        assert!(assert_order(&arena, root, &default_comparator::<i32>).is_err());
    }
}
