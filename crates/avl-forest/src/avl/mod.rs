//! The balanced-tree engine.

pub mod node;
pub(crate) mod ordered;
pub(crate) mod position;
pub mod print;
pub(crate) mod range;
pub(crate) mod rotate;
pub mod tree;
pub mod validate;

pub use node::{subtree_size, AvlNode, Link};
pub use print::print;
pub use tree::{default_less, AvlTree, Iter};
pub use validate::{height as subtree_height, height_bound};
