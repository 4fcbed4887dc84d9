//! Threaded binary search trees.
//!
//! Empty child links are reused as "threads" to the in-order neighbours so
//! that ordered walks need neither recursion nor a stack. Which sides are
//! threaded is chosen by a [`Threading`] marker type.

pub mod iter;
pub mod tree;
pub mod types;

pub use iter::{InOrder, PreOrder, ReverseInOrder};
pub use tree::{DoubleThreadedTree, LeftThreadedTree, RightThreadedTree, ThreadedTree};
pub use types::{DoubleThreads, LeftThreading, LeftThreads, RightThreading, RightThreads, ThreadNode, Threading};
