//! A mutable, unbalanced BST. Every value lives in exactly one `Box`ed node owned by its parent's
//! link (or by the tree itself for the root). There are no parent pointers: deletion rebuilds the
//! links on the way back up the search path instead.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//! assert!(tree.find_min().is_err());
//!
//! for value in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.inorder_traversal(), vec![20, 30, 40, 50, 60, 70, 80]);
//!
//! // Inserting a duplicate changes nothing.
//! assert!(!tree.insert(40));
//! assert_eq!(tree.size(), 7);
//!
//! // Deleting reports whether anything was removed.
//! assert!(tree.delete(&30));
//! assert!(!tree.delete(&30));
//! assert_eq!(tree.inorder_traversal(), vec![20, 40, 50, 60, 70, 80]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::{Extremum, TreeError};

/// An owning pointer to a subtree, or `None` at the bottom of the tree.
type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree holding distinct values. This can be used for inserting,
/// searching for, and deleting values, and for walking them in ascending order.
///
/// Nothing keeps the tree balanced so inserting already sorted values produces a tree whose
/// height equals its size. Operations other than `delete` walk the tree with loops so such trees
/// are still safe to build, search, iterate, clone, and drop. `delete` recurses once per level on
/// the path to the value it removes.
pub struct Tree<T> {
    root: Link<T>,
    /// How many nodes are reachable from `root`.
    size: usize,
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Dropping a `Box<Node>` drops its children recursively which could overflow the stack on a
    // degenerate tree. Detach every node first so each one is dropped childless.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Which child slot of its parent a node hangs from.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl<T: Clone> Clone for Tree<T> {
    // Copies keep the original's shape. Each node is copied childless into a flat list where it
    // always comes after its parent, then the list is drained from the back so every copy already
    // holds its children when it is linked into its parent.
    fn clone(&self) -> Self {
        let mut copies: Vec<(Box<Node<T>>, Option<(usize, Side)>)> = Vec::with_capacity(self.size);
        let mut stack: Vec<(&Node<T>, Option<(usize, Side)>)> =
            self.root().map(|n| (n, None)).into_iter().collect();
        while let Some((node, parent)) = stack.pop() {
            let index = copies.len();
            copies.push((Node::new_boxed(node.value.clone()), parent));
            stack.extend(node.left.as_deref().map(|n| (n, Some((index, Side::Left)))));
            stack.extend(node.right.as_deref().map(|n| (n, Some((index, Side::Right)))));
        }

        let mut root = None;
        while let Some((copy, parent)) = copies.pop() {
            match parent {
                Some((index, Side::Left)) => copies[index].0.left = Some(copy),
                Some((index, Side::Right)) => copies[index].0.right = Some(copy),
                None => root = Some(copy),
            }
        }

        Self {
            root,
            size: self.size,
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns how many values the tree holds. This is tracked on every insert and delete so it
    /// doesn't walk the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty tree has
    /// a height of 0 and a tree with a single node has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.extend([2, 1, 3]);
    /// assert_eq!(tree.height(), 2);
    ///
    /// // Nothing rebalances the tree.
    /// tree.extend([4, 5, 6]);
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Returns an iterator over the values of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.size)
    }

    /// Collects every value in ascending order into a new `Vec`. The tree is left untouched so
    /// this can be called repeatedly.
    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the smallest value in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Extremum, Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.find_min(), Err(TreeError::EmptyTree(Extremum::Minimum)));
    ///
    /// tree.extend([5, 3, 8]);
    /// assert_eq!(tree.find_min(), Ok(&3));
    /// ```
    pub fn find_min(&self) -> Result<&T, TreeError> {
        self.root()
            .map(|n| &n.leftmost().value)
            .ok_or(TreeError::EmptyTree(Extremum::Minimum))
    }

    /// Returns the largest value in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree holds no values.
    pub fn find_max(&self) -> Result<&T, TreeError> {
        self.root()
            .map(|n| &n.rightmost().value)
            .ok_or(TreeError::EmptyTree(Extremum::Maximum))
    }

    /// Returns `true` if a value equal to `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(40);
    ///
    /// assert!(tree.search(&40));
    /// assert!(!tree.search(&90));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// Inserts `value` into the tree as a new leaf. If an equal value is already present nothing
    /// changes. Returns whether a new node was created.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    debug!("ignoring insert of a value already in the tree");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(value));
        self.size += 1;
        trace!("inserted a new leaf, tree size is now {}", self.size);
        true
    }

    /// Removes the value equal to `value` from the tree. Returns `false` (and leaves the tree as it
    /// was) if no such value exists.
    ///
    /// A node with two children isn't unlinked. Instead it takes the value of its in-order
    /// successor, the smallest value in its right subtree, and the successor's node is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.search(&2));
    /// assert_eq!(tree.inorder_traversal(), vec![1, 3]);
    ///
    /// assert!(!tree.delete(&42));
    /// assert_eq!(tree.size(), 2);
    /// ```
    ///
    /// # Panics
    ///
    /// This recurses once for every node on the path to `value` (and on to its successor), so on
    /// a degenerate tree deleting a value far from the root can overflow the thread's stack. A
    /// chain of tens of thousands of nodes is enough on a default 2 MiB thread stack.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let (root, deleted) = Node::delete_from(self.root.take(), value);
        self.root = root;
        if deleted {
            self.size -= 1;
            trace!("deleted a node, tree size is now {}", self.size);
        }

        deleted
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        node
    }

    /// Deletes `value` from the subtree behind `link`. Returns the link that should replace it
    /// and whether a node was removed.
    fn delete_from(link: Link<T>, value: &T) -> (Link<T>, bool)
    where
        T: Ord,
    {
        match link {
            None => (None, false),
            Some(node) => node.delete(value),
        }
    }

    fn delete(mut self: Box<Self>, value: &T) -> (Link<T>, bool)
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => {
                let (left, deleted) = Self::delete_from(self.left.take(), value);
                self.left = left;
                (Some(self), deleted)
            }
            Ordering::Equal => (self.unlink(), true),
            Ordering::Greater => {
                let (right, deleted) = Self::delete_from(self.right.take(), value);
                self.right = right;
                (Some(self), deleted)
            }
        }
    }

    /// Removes this node's value from the tree, returning whatever should take the node's place.
    fn unlink(mut self: Box<Self>) -> Link<T> {
        match (self.left.take(), self.right.take()) {
            (None, None) => {
                trace!("removing a leaf");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("replacing a node with its only child");
                Some(child)
            }
            (Some(left), Some(right)) => {
                trace!("replacing a node's value with its in-order successor");
                let (right, successor) = right.delete_min();
                self.value = successor;
                self.left = Some(left);
                self.right = right;
                Some(self)
            }
        }
    }

    /// Removes the smallest node in this subtree. Returns the new subtree and that node's value.
    ///
    /// The smallest node never has a left child so it is always either a leaf or has exactly one
    /// (right) child to take its place.
    fn delete_min(mut self: Box<Self>) -> (Link<T>, T) {
        match self.left.take() {
            None => {
                let Self { value, right, .. } = *self;
                (right, value)
            }
            Some(left) => {
                let (left, min) = left.delete_min();
                self.left = left;
                (Some(self), min)
            }
        }
    }
}

/// An iterator over the values of a [`Tree`] in ascending order.
///
/// This is created by [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose value hasn't been yielded yet but whose left subtree has been.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, size: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: size,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Two trees are equal when they hold the same values, whatever their shapes.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Renders as `Empty BST` or, for example, `BST([1, 2, 3])`.
impl<T: fmt::Debug> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty BST");
        }

        f.write_str("BST(")?;
        f.debug_list().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}
