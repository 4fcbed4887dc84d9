//! Arena-based binary search trees.
//!
//! A family of ordered maps that share one capability trait,
//! [`BinaryTree`]:
//!
//! - [`BinarySearchTree`]: no balancing, shape follows insertion order.
//! - [`AvlTree`]: height-balanced.
//! - [`RbTree`]: red-black.
//! - [`RightThreadedTree`], [`LeftThreadedTree`], [`DoubleThreadedTree`]:
//!   unbalanced trees whose empty child links are threads to the in-order
//!   neighbours, walked without a stack.
//!
//! All "pointers" are `Option<u32>` indices into a `Vec<N>` arena owned by
//! the tree. Removing a node moves the last arena slot into the hole, so the
//! arena never holds dead entries.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`KvNode`] traits, comparator |
//! [`util`] | navigation, splicing and arena compaction helpers |
//! [`traverse`] | [`TraversalOrder`] and the stack-based [`Walker`] |
//! [`linked_tree`] | core shared by the parent-linked variants |
//! [`bst`] / [`avl`] / [`red_black`] | variant nodes, fix-ups and trees |
//! [`threaded`] | threaded node, [`Threading`] markers and iterators |

pub mod avl;
pub mod binary_tree;
pub mod bst;
pub mod error;
pub mod linked_tree;
pub mod red_black;
pub mod threaded;
pub mod traverse;
pub mod types;
pub mod util;

pub use avl::AvlTree;
pub use binary_tree::BinaryTree;
pub use bst::BinarySearchTree;
pub use error::TreeError;
pub use red_black::RbTree;
pub use threaded::{DoubleThreadedTree, LeftThreadedTree, RightThreadedTree, ThreadedTree, Threading};
pub use traverse::{Pairs, TraversalOrder, Walker};
pub use types::{default_comparator, KvNode, Node};
