//! Balance self-check for [`super::PriorityTree`].
//!
//! Heights are recomputed bottom-up without trusting any cached value, then
//! compared against the cache and the AVL bound.

use super::avl::{Link, ALLOWED_IMBALANCE};

/// One node that failed the self-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceViolation {
    /// Position of the node in in-order traversal (0-based).
    pub in_order_index: usize,
    /// Height stored on the node.
    pub cached_height: i32,
    /// Height recomputed from the subtree.
    pub actual_height: i32,
    /// Recomputed `height(left) - height(right)`.
    pub balance_factor: i32,
}

impl BalanceViolation {
    /// The cached height disagrees with the recomputed one.
    #[must_use]
    pub fn is_stale_height(&self) -> bool {
        self.cached_height != self.actual_height
    }

    /// The balance factor is outside `[-1, 1]`.
    #[must_use]
    pub fn is_imbalanced(&self) -> bool {
        self.balance_factor.abs() > ALLOWED_IMBALANCE
    }
}

/// Result of [`super::PriorityTree::check_balance`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceReport {
    /// Number of nodes visited.
    pub nodes_checked: usize,
    /// Every failing node, in in-order position.
    pub violations: Vec<BalanceViolation>,
}

impl BalanceReport {
    /// No violations were found.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.violations.is_empty()
    }
}

pub(crate) fn check<K>(root: &Link<K>) -> BalanceReport {
    let mut report = BalanceReport::default();
    let mut index = 0;
    walk(root, &mut report, &mut index);
    report.violations.sort_by_key(|v| v.in_order_index);
    report
}

/// Returns the recomputed height of `link`.
fn walk<K>(link: &Link<K>, report: &mut BalanceReport, index: &mut usize) -> i32 {
    let Some(node) = link else {
        return -1;
    };
    let left = walk(&node.left, report, index);
    let position = *index;
    *index += 1;
    let right = walk(&node.right, report, index);

    let actual = left.max(right) + 1;
    let factor = left - right;
    report.nodes_checked += 1;
    if factor.abs() > ALLOWED_IMBALANCE || node.height != actual {
        report.violations.push(BalanceViolation {
            in_order_index: position,
            cached_height: node.height,
            actual_height: actual,
            balance_factor: factor,
        });
    }
    actual
}
