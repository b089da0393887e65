//! This crate exposes a Binary Search Tree of symbiote hosts, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a node. Here the stored record *is* the
//! node: every [`Host`] owns up to two child `Host`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Host` in the tree, all the `Host`s in its left subtree have a
//!    name less than its own name.
//! 2. For every `Host` in the tree, all the `Host`s in its right subtree have a
//!    name greater than its own name.
//!
//! > Note that some `Host`s have no children. These are called "leaf nodes".
//!
//! Names are compared byte-wise, so ordering is case-sensitive. The tree isn't
//! self-balancing: its shape is decided entirely by insertion order, which
//! makes the traversal based queries (preorder, in-order and level order)
//! easy to reason about.
//!
//! ## Suitability
//!
//! Hosts are ranked by a suitability score derived from their compatibility
//! and stability. [`HostTree::new`] uses [`default_suitability`]; any other
//! [`Scorer`] can be supplied through [`HostTree::with_scorer`].
//!
//! ```
//! use host_tree::{parse_hosts, HostTree};
//!
//! let input = "3\nEddie Brock\n40\n50\nfalse\nCletus Kasady\n90\n20\ntrue\nAnne Weying\n10\n10\ntrue\n";
//! let tree: HostTree = parse_hosts(input.as_bytes()).unwrap().into_iter().collect();
//!
//! assert_eq!(tree.find_most_suitable().map(|h| h.name()), Some("Cletus Kasady"));
//! assert_eq!(tree.hosts_with_antibodies().len(), 2);
//! assert_eq!(tree.hosts_within_suitability_range(0, 50).len(), 1);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod host;
mod parse;
mod tree;

#[cfg(test)]
mod test;

pub use host::{default_suitability, Host, Scorer};
pub use parse::{parse_hosts, read_hosts, Field, ParseError};
pub use tree::{HostTree, Iter};
