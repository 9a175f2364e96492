//! AVL tree with owned recursive nodes.
//!
//! Every subtree is an `Option<Box<Node<K>>>` owned by exactly one parent.
//! Rotations are ownership transfers: a subtree is `take()`n out of its
//! parent, re-linked, and the new subtree root is handed back to the caller.
//! No node is ever reachable from two places.
//!
//! # Height convention
//!
//! A leaf has height 0 and an absent subtree has height -1, so for every node
//! `height = max(height(left), height(right)) + 1`.
//!
//! # Duplicates
//!
//! Keys that compare `Equal` to a node are routed to its right subtree
//! ("equal or greater goes right"). Insertion never rejects a key.

use std::cmp::Ordering;
use std::fmt::{self, Write as _};

use super::check::{self, BalanceReport};
use super::order::{KeyOrder, NaturalOrder};

/// Maximum permitted `|height(left) - height(right)|` at any node.
pub const ALLOWED_IMBALANCE: i32 = 1;

pub(crate) type Link<K> = Option<Box<Node<K>>>;

#[derive(Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: i32,
}

impl<K> Node<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 0,
        })
    }
}

/// Cached height of a subtree; -1 when absent.
pub(crate) fn height<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

fn refresh_height<K>(node: &mut Node<K>) {
    node.height = height(&node.left).max(height(&node.right)) + 1;
}

/// Failure of an operation that needs at least one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The tree holds no keys.
    Empty,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "priority tree is empty"),
        }
    }
}

impl std::error::Error for TreeError {}

/// AVL-balanced ordered container and min-priority queue.
///
/// Ordering is supplied by `O` (see [`KeyOrder`]); the default
/// [`NaturalOrder`] uses the key's `Ord` implementation.
///
/// | Operation      | Cost      |
/// |----------------|-----------|
/// | `insert`       | O(log n)  |
/// | `find_min`     | O(log n)  |
/// | `delete_min`   | O(log n)  |
/// | `remove`       | O(log n)  |
/// | `contains`     | O(log n)  |
/// | `make_empty`   | O(n)      |
#[derive(Debug)]
pub struct PriorityTree<K, O = NaturalOrder> {
    root: Link<K>,
    len: usize,
    order: O,
}

impl<K: Ord> PriorityTree<K> {
    /// Create an empty tree ordered by `K: Ord`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_order(NaturalOrder)
    }
}

impl<K: Ord> Default for PriorityTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, O: KeyOrder<K>> PriorityTree<K, O> {
    /// Create an empty tree ordered by the given comparator.
    #[must_use]
    pub fn with_order(order: O) -> Self {
        Self {
            root: None,
            len: 0,
            order,
        }
    }

    /// The comparator this tree was built with.
    #[must_use]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Insert a key. Duplicates are accepted and placed to the right of
    /// their equals.
    pub fn insert(&mut self, key: K) {
        let root = self.root.take();
        self.root = Some(insert_into(root, key, &self.order));
        self.len += 1;
    }

    /// Whether the tree holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys held (duplicates counted individually).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Height of the root; -1 for an empty tree.
    #[must_use]
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Drop every key.
    pub fn make_empty(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Whether some stored key compares `Equal` to `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match self.order.compare(key, &node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// The smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Empty`] if the tree holds no keys.
    pub fn find_min(&self) -> Result<&K, TreeError> {
        let mut node = self.root.as_deref().ok_or(TreeError::Empty)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// Alias for [`find_min`](Self::find_min).
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Empty`] if the tree holds no keys.
    pub fn peek_min(&self) -> Result<&K, TreeError> {
        self.find_min()
    }

    /// The largest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Empty`] if the tree holds no keys.
    pub fn find_max(&self) -> Result<&K, TreeError> {
        let mut node = self.root.as_deref().ok_or(TreeError::Empty)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.key)
    }

    /// Remove the leftmost node and return its key.
    ///
    /// Every ancestor on the path back to the root is rebalanced.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Empty`] if the tree holds no keys.
    pub fn delete_min(&mut self) -> Result<K, TreeError> {
        let root = self.root.take().ok_or(TreeError::Empty)?;
        let (rest, min) = delete_min_from(root);
        self.root = rest;
        self.len -= 1;
        Ok(min)
    }

    /// Remove one key that compares `Equal` to `key`.
    ///
    /// Returns `Ok(false)` if no such key is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Empty`] if the tree holds no keys.
    pub fn remove(&mut self, key: &K) -> Result<bool, TreeError> {
        let root = self.root.take().ok_or(TreeError::Empty)?;
        let mut removed = false;
        self.root = remove_from(Some(root), key, &self.order, &mut removed);
        if removed {
            self.len -= 1;
        }
        Ok(removed)
    }

    /// In-order iterator: keys in non-decreasing order under `O`.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root)
    }

    /// Recompute every height from scratch and report nodes whose cached
    /// height is stale or whose balance factor exceeds
    /// [`ALLOWED_IMBALANCE`].
    ///
    /// Diagnostic only; normal operation never calls this.
    #[must_use]
    pub fn check_balance(&self) -> BalanceReport {
        check::check(&self.root)
    }
}

impl<K: fmt::Display, O> PriorityTree<K, O> {
    /// Sideways dump of the tree: right subtree above, left below, each
    /// line `key(height)` indented by depth.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.root.is_none() {
            out.push_str("Empty tree\n");
        } else {
            render_subtree(&self.root, 0, &mut out);
        }
        out
    }
}

impl<'a, K, O: KeyOrder<K>> IntoIterator for &'a PriorityTree<K, O> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn render_subtree<K: fmt::Display>(link: &Link<K>, depth: usize, out: &mut String) {
    if let Some(node) = link {
        render_subtree(&node.right, depth + 1, out);
        let _ = writeln!(
            out,
            "{:indent$}{}({})",
            "",
            node.key,
            node.height,
            indent = depth * 3
        );
        render_subtree(&node.left, depth + 1, out);
    }
}

// ---------------------------------------------------------------------------
// Structural operations
// ---------------------------------------------------------------------------

fn insert_into<K, O: KeyOrder<K>>(link: Link<K>, key: K, order: &O) -> Box<Node<K>> {
    let Some(mut node) = link else {
        return Node::leaf(key);
    };
    if order.compare(&key, &node.key) == Ordering::Less {
        node.left = Some(insert_into(node.left.take(), key, order));
    } else {
        node.right = Some(insert_into(node.right.take(), key, order));
    }
    balance(node)
}

/// Detach the leftmost node of a subtree. Returns the rebalanced remainder
/// and the detached key.
fn delete_min_from<K>(mut node: Box<Node<K>>) -> (Link<K>, K) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (right, key)
        }
        Some(left) => {
            let (rest, min) = delete_min_from(left);
            node.left = rest;
            (Some(balance(node)), min)
        }
    }
}

fn remove_from<K, O: KeyOrder<K>>(
    link: Link<K>,
    key: &K,
    order: &O,
    removed: &mut bool,
) -> Link<K> {
    let mut node = link?;
    match order.compare(key, &node.key) {
        Ordering::Less => node.left = remove_from(node.left.take(), key, order, removed),
        Ordering::Greater => node.right = remove_from(node.right.take(), key, order, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (Some(left), Some(right)) => {
                    // Successor replaces this key; it leaves the right subtree.
                    let (rest, successor) = delete_min_from(right);
                    node.key = successor;
                    node.left = Some(left);
                    node.right = rest;
                }
                (Some(only), None) | (None, Some(only)) => return Some(only),
                (None, None) => return None,
            }
        }
    }
    Some(balance(node))
}

/// Restore the AVL invariant at `node`, assuming both subtrees already
/// satisfy it and differ in height by at most two.
fn balance<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let factor = height(&node.left) - height(&node.right);
    if factor > ALLOWED_IMBALANCE {
        let outer = node
            .left
            .as_ref()
            .is_none_or(|left| height(&left.left) >= height(&left.right));
        if outer {
            rotate_right(node)
        } else {
            double_rotate_right(node)
        }
    } else if factor < -ALLOWED_IMBALANCE {
        let outer = node
            .right
            .as_ref()
            .is_none_or(|right| height(&right.right) >= height(&right.left));
        if outer {
            rotate_left(node)
        } else {
            double_rotate_left(node)
        }
    } else {
        refresh_height(&mut node);
        node
    }
}

/// Single rotation with the left child: the left child becomes the subtree
/// root and `node` becomes its right child.
fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.left.take() else {
        refresh_height(&mut node);
        return node;
    };
    node.left = pivot.right.take();
    refresh_height(&mut node);
    pivot.right = Some(node);
    refresh_height(&mut pivot);
    pivot
}

/// Mirror of [`rotate_right`].
fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.right.take() else {
        refresh_height(&mut node);
        return node;
    };
    node.right = pivot.left.take();
    refresh_height(&mut node);
    pivot.left = Some(node);
    refresh_height(&mut pivot);
    pivot
}

/// Left-right case: rotate the left child left, then `node` right.
fn double_rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    if let Some(left) = node.left.take() {
        node.left = Some(rotate_left(left));
    }
    rotate_right(node)
}

/// Right-left case: rotate the right child right, then `node` left.
fn double_rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    if let Some(right) = node.right.take() {
        node.right = Some(rotate_right(right));
    }
    rotate_left(node)
}

// ---------------------------------------------------------------------------
// In-order iteration
// ---------------------------------------------------------------------------

/// In-order iterator over a [`PriorityTree`].
#[derive(Debug)]
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: &'a Link<K>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}
