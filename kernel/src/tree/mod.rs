//! Self-balancing priority tree.
//!
//! [`PriorityTree`] is an AVL tree parameterized over its key type and an
//! explicit ordering capability ([`KeyOrder`]). It is used as a min-priority
//! queue by the informed search: there is no decrease-key, duplicates are
//! always accepted, and the minimum is extracted with
//! [`PriorityTree::delete_min`].

mod avl;
mod check;
mod order;

pub use avl::{Iter, PriorityTree, TreeError, ALLOWED_IMBALANCE};
pub use check::{BalanceReport, BalanceViolation};
pub use order::{FnOrder, KeyOrder, NaturalOrder};
