//! Plain (unbalanced) binary search tree.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::BinarySearchTree;
pub use types::BstNode;
