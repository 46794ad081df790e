//! An order-statistic AVL tree and the collections built on it.
//!
//! One balanced-tree engine, parameterised by element type, strict
//! order, merge policy, range aggregate, and node allocator, generates
//! all of the provided collections:
//!
//! | Collection | Drop-in for | Engine configuration |
//! |------------|-------------|----------------------|
//! | [`AvlList`] | `Vec` (positional) | never merge, order unused |
//! | [`AvlSet`]  | ordered set | merge equal elements |
//! | [`AvlBag`]  | ordered multiset | never merge |
//! | [`AvlMap`]  | ordered map | overwrite value on key equality |
//!
//! The engine itself is exposed as [`AvlTree`]: positional access by
//! subtree sizes, ordered access by a strict order, and aggregated range
//! queries over a user-supplied monoid, all maintained through every
//! rotation.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`avl`] | node layout, rotation algebra, tree facade, validation |
//! | [`aggregate`] | [`RangeAggregate`] protocol and the unit default |
//! | [`merge`] | [`MergePolicy`] protocol and the standard mergers |
//! | [`alloc`] | [`NodeAllocator`] protocol and the boxing defaults |
//! | [`list`] / [`set`] / [`bag`] / [`map`] | the collection facades |

pub mod aggregate;
pub mod alloc;
pub mod avl;
pub mod bag;
pub mod error;
pub mod list;
pub mod map;
pub mod merge;
pub mod set;

pub use aggregate::{NoAggregate, RangeAggregate};
pub use alloc::{BoxAllocator, CountingAllocator, NodeAllocator};
pub use avl::{default_less, subtree_size, AvlNode, AvlTree, Iter, Link};
pub use bag::AvlBag;
pub use error::TreeError;
pub use list::AvlList;
pub use map::AvlMap;
pub use merge::{MergeAssign, MergeCount, MergeIfEqual, MergePolicy, NeverMerge};
pub use set::AvlSet;
