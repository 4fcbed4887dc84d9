//! Red-black tree.
//!
//! The absent link doubles as the black nil leaf: [`util::color_of`] reports
//! `None` as black, so the fix-up loops never branch on a missing child just
//! to read its color.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::RbTree;
pub use types::{Color, RbNode, RbNodeLike};
pub use util::{assert_red_black_tree, color_of, rotate_left, rotate_right};
