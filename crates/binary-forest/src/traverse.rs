//! Traversal orders and the external walker for parent-linked trees.
//!
//! Every traversal is an explicit iterator that owns its own state (a stack
//! or a queue) and yields one `(key, value)` pair per call to `next`. An
//! iterator makes exactly one pass; call `traverse` again to restart.

use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::TreeError;
use crate::types::KvNode;

/// Boxed lazy sequence of `(key, value)` pairs returned by
/// [`BinaryTree::traverse`](crate::BinaryTree::traverse).
pub type Pairs<'a, K, V> = Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Node, left, right.
    Pre,
    /// Left, node, right: ascending keys.
    In,
    /// Left, right, node.
    Post,
    /// Breadth-first, left to right on each level, starting at the root.
    Level,
    /// Right, node, left: descending keys.
    ReverseIn,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 5] = [
        TraversalOrder::Pre,
        TraversalOrder::In,
        TraversalOrder::Post,
        TraversalOrder::Level,
        TraversalOrder::ReverseIn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalOrder::Pre => "pre",
            TraversalOrder::In => "in",
            TraversalOrder::Post => "post",
            TraversalOrder::Level => "level",
            TraversalOrder::ReverseIn => "reverse-in",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalOrder {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre" | "preorder" => Ok(TraversalOrder::Pre),
            "in" | "inorder" => Ok(TraversalOrder::In),
            "post" | "postorder" => Ok(TraversalOrder::Post),
            "level" | "levelorder" => Ok(TraversalOrder::Level),
            "reverse-in" | "reverse" | "outorder" => Ok(TraversalOrder::ReverseIn),
            _ => Err(TreeError::InvalidTraversal(s.to_string())),
        }
    }
}

enum WalkState {
    Pre(Vec<u32>),
    In { stack: Vec<u32>, curr: Option<u32> },
    Post(Vec<(u32, bool)>),
    Level(VecDeque<u32>),
    ReverseIn { stack: Vec<u32>, curr: Option<u32> },
}

/// External walker over any parent-linked arena tree, in any
/// [`TraversalOrder`].
pub struct Walker<'a, K, V, N> {
    arena: &'a [N],
    state: WalkState,
    _kv: PhantomData<(&'a K, &'a V)>,
}

impl<'a, K, V, N> Walker<'a, K, V, N>
where
    N: KvNode<K, V>,
{
    pub fn new(arena: &'a [N], root: Option<u32>, order: TraversalOrder) -> Self {
        let state = match order {
            TraversalOrder::Pre => WalkState::Pre(root.into_iter().collect()),
            TraversalOrder::In => WalkState::In {
                stack: Vec::new(),
                curr: root,
            },
            TraversalOrder::Post => WalkState::Post(root.map(|r| (r, false)).into_iter().collect()),
            TraversalOrder::Level => WalkState::Level(root.into_iter().collect()),
            TraversalOrder::ReverseIn => WalkState::ReverseIn {
                stack: Vec::new(),
                curr: root,
            },
        };
        Self {
            arena,
            state,
            _kv: PhantomData,
        }
    }

    fn advance(&mut self) -> Option<u32> {
        let arena = self.arena;
        match &mut self.state {
            WalkState::Pre(stack) => {
                let i = stack.pop()?;
                stack.extend(arena[i as usize].r());
                stack.extend(arena[i as usize].l());
                Some(i)
            }
            WalkState::In { stack, curr } => {
                while let Some(c) = *curr {
                    stack.push(c);
                    *curr = arena[c as usize].l();
                }
                let i = stack.pop()?;
                *curr = arena[i as usize].r();
                Some(i)
            }
            WalkState::ReverseIn { stack, curr } => {
                while let Some(c) = *curr {
                    stack.push(c);
                    *curr = arena[c as usize].r();
                }
                let i = stack.pop()?;
                *curr = arena[i as usize].l();
                Some(i)
            }
            WalkState::Post(stack) => loop {
                let (i, expanded) = stack.pop()?;
                if expanded {
                    return Some(i);
                }
                stack.push((i, true));
                if let Some(r) = arena[i as usize].r() {
                    stack.push((r, false));
                }
                if let Some(l) = arena[i as usize].l() {
                    stack.push((l, false));
                }
            },
            WalkState::Level(queue) => {
                let i = queue.pop_front()?;
                queue.extend(arena[i as usize].l());
                queue.extend(arena[i as usize].r());
                Some(i)
            }
        }
    }
}

impl<'a, K, V, N> Iterator for Walker<'a, K, V, N>
where
    N: KvNode<K, V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.advance()?;
        let n = &self.arena[i as usize];
        Some((n.key(), n.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_order_names() {
        assert_eq!("pre".parse::<TraversalOrder>(), Ok(TraversalOrder::Pre));
        assert_eq!("InOrder".parse::<TraversalOrder>(), Ok(TraversalOrder::In));
        assert_eq!(" level ".parse::<TraversalOrder>(), Ok(TraversalOrder::Level));
        assert_eq!(
            "reverse-in".parse::<TraversalOrder>(),
            Ok(TraversalOrder::ReverseIn)
        );
        assert_eq!(
            "sideways".parse::<TraversalOrder>(),
            Err(TreeError::InvalidTraversal("sideways".to_string()))
        );
    }

    #[test]
    fn display_round_trips() {
        for order in TraversalOrder::ALL {
            assert_eq!(order.to_string().parse::<TraversalOrder>(), Ok(order));
        }
    }
}
