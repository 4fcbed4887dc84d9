//! AVL tree: height-balanced, every node's subtrees differ in height by at
//! most one.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::AvlTree;
pub use types::{AvlNode, AvlNodeLike};
pub use util::{assert_avl_tree, rotate_left, rotate_right};
