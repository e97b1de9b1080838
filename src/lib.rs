//! This crate exposes an ordered container backed by a plain, unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search for, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because both comparisons are strict, a value is stored at most once. Inserting
//! a value that is already present leaves the tree unchanged.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the number
//! of `Node`s on the longest path from the root `Node` to a leaf `Node`). This tree
//! does nothing to keep its height near `O(lg N)` so, in the worst case (e.g. values
//! inserted in sorted order), operations take `O(N)`. BSTs naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! The tree is a single-owner structure with no interior mutability. Sharing one between
//! threads requires the caller to serialize writers against everything else, e.g. with a
//! `RwLock`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod ordered;

pub use error::{Extremum, TreeError};
pub use ordered::{Iter, Tree};
