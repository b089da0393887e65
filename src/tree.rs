//! A plain (unbalanced) BST of [`Host`]s keyed by name. Mutations walk down to the link that
//! owns the affected host and re-link it in place. Nothing here recurses, so a tree that
//! degenerates into a list (e.g. built from sorted input) is only limited by the heap.
//!
//! # Examples
//!
//! ```
//! use host_tree::{Host, HostTree};
//!
//! let mut tree = HostTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find_most_suitable().is_none());
//!
//! tree.insert(Host::new("Eddie Brock", 40, 50, false));
//! tree.insert(Host::new("Cletus Kasady", 90, 20, true));
//! assert_eq!(tree.find_most_suitable().map(Host::name), Some("Cletus Kasady"));
//!
//! // Inserting the same name again overwrites the attributes.
//! tree.insert(Host::new("Eddie Brock", 90, 90, false));
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.find_most_suitable().map(Host::name), Some("Eddie Brock"));
//!
//! // Deleting a host hands back its record.
//! let deleted = tree.delete("Cletus Kasady");
//!
//! assert_eq!(deleted.map(|host| host.compatibility()), Some(90));
//! assert!(tree.find("Cletus Kasady").is_none());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::io;

use tracing::debug;

use crate::host::{default_suitability, Host, Scorer};

/// A Binary Search Tree of hosts ordered by name. This can be used for inserting, finding, and
/// deleting hosts as well as querying them by suitability.
pub struct HostTree {
    root: Option<Box<Host>>,
    scorer: Scorer,
}

impl Default for HostTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HostTree {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Host>> = self.root.take().into_iter().collect();
        while let Some(mut host) = stack.pop() {
            stack.extend(host.left.take());
            stack.extend(host.right.take());
        }
    }
}

impl fmt::Debug for HostTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostTree")
            .field("root", &self.root())
            .finish_non_exhaustive()
    }
}

impl HostTree {
    /// Generates a new, empty `HostTree` scoring hosts with [`default_suitability`].
    pub fn new() -> Self {
        Self::with_scorer(default_suitability)
    }

    /// Generates a new, empty `HostTree` scoring hosts with `scorer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use host_tree::{Host, HostTree};
    ///
    /// let mut tree = HostTree::with_scorer(|compatibility, stability| compatibility * stability);
    /// tree.insert(Host::new("Eddie Brock", 4, 5, false));
    ///
    /// let eddie = tree.find("Eddie Brock").unwrap();
    /// assert_eq!(tree.suitability(eddie), 20);
    /// ```
    pub fn with_scorer(scorer: Scorer) -> Self {
        Self { root: None, scorer }
    }

    /// The root of the tree, if the tree isn't empty.
    pub fn root(&self) -> Option<&Host> {
        self.root.as_deref()
    }

    /// Scores `host` with this tree's scorer.
    pub fn suitability(&self, host: &Host) -> i32 {
        (self.scorer)(host.compatibility(), host.stability())
    }

    /// Whether the tree has no hosts.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the hosts in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterates over the hosts in ascending name order.
    ///
    /// # Examples
    ///
    /// ```
    /// use host_tree::{Host, HostTree};
    ///
    /// let tree: HostTree = ["b", "c", "a"]
    ///     .into_iter()
    ///     .map(|name| Host::new(name, 0, 0, false))
    ///     .collect();
    ///
    /// let names: Vec<_> = tree.iter().map(Host::name).collect();
    /// assert_eq!(names, ["a", "b", "c"]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root())
    }

    /// Finds the host with the given name.
    pub fn find(&self, name: &str) -> Option<&Host> {
        let mut current = self.root();
        while let Some(host) = current {
            current = match name.cmp(host.name()) {
                Ordering::Less => host.left(),
                Ordering::Equal => return Some(host),
                Ordering::Greater => host.right(),
            };
        }

        None
    }

    /// Inserts the given host into the tree. Inserting a host whose name is already present
    /// overwrites the existing host's compatibility, stability and antibodies; the shape of the
    /// tree doesn't change.
    pub fn insert(&mut self, host: Host) {
        let host = host.detached();
        let link = search_link(&mut self.root, host.name());
        match link {
            Some(node) => {
                debug!(name = node.name(), "updated host");
                node.update_from(&host);
            }
            None => {
                debug!(name = host.name(), "inserted host");
                *link = Some(Box::new(host));
            }
        }
    }

    /// Inserts every host in order. Later hosts overwrite earlier hosts with the same name.
    pub fn build_tree(&mut self, hosts: impl IntoIterator<Item = Host>) {
        let mut inserted = 0usize;
        for host in hosts {
            self.insert(host);
            inserted += 1;
        }
        debug!(inserted, "built tree");
    }

    /// Deletes the host with the given name and returns it. If the tree doesn't contain a host
    /// with that name, nothing happens.
    ///
    /// A host with two children is replaced by its in-order successor (the leftmost host of its
    /// right subtree), which is unlinked from its old position first.
    pub fn delete(&mut self, name: &str) -> Option<Host> {
        let link = search_link(&mut self.root, name);
        let Some(mut node) = link.take() else {
            debug!(name, "no host to delete");
            return None;
        };

        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (None, Some(child)) | (Some(child), None) => Some(child),
            (Some(left), Some(mut right)) => {
                let mut successor = match take_leftmost(&mut right) {
                    Some(mut successor) => {
                        successor.right = Some(right);
                        successor
                    }
                    // `right` has no left subtree so it is the successor itself.
                    None => right,
                };
                successor.left = Some(left);
                Some(successor)
            }
        };

        debug!(name, "deleted host");
        Some(*node)
    }

    /// Finds the host with the highest suitability using a preorder traversal. Ties go to the
    /// host visited first and only positive scores are considered, so a tree where every host
    /// scores zero or less yields `None`.
    pub fn find_most_suitable(&self) -> Option<&Host> {
        let mut best = None;
        let mut best_score = 0;
        let mut stack: Vec<&Host> = self.root().into_iter().collect();

        while let Some(host) = stack.pop() {
            let score = self.suitability(host);
            if score > best_score {
                best = Some(host);
                best_score = score;
            }

            // Right first so the left subtree is visited first.
            stack.extend(host.right());
            stack.extend(host.left());
        }

        best
    }

    /// Collects every host with antibodies in ascending name order.
    pub fn hosts_with_antibodies(&self) -> Vec<&Host> {
        self.iter().filter(|host| host.has_antibodies()).collect()
    }

    /// Collects every host whose suitability lies in `min..=max`, in level order.
    ///
    /// # Examples
    ///
    /// ```
    /// use host_tree::{Host, HostTree};
    ///
    /// let mut tree = HostTree::new();
    /// tree.insert(Host::new("m", 20, 20, false)); // 40
    /// tree.insert(Host::new("z", 10, 10, false)); // 20
    /// tree.insert(Host::new("a", 50, 50, false)); // 100
    ///
    /// let names: Vec<_> = tree
    ///     .hosts_within_suitability_range(20, 60)
    ///     .into_iter()
    ///     .map(Host::name)
    ///     .collect();
    /// assert_eq!(names, ["m", "z"]);
    /// ```
    pub fn hosts_within_suitability_range(&self, min: i32, max: i32) -> Vec<&Host> {
        let mut in_range = Vec::new();
        let mut queue: VecDeque<&Host> = self.root().into_iter().collect();

        while let Some(host) = queue.pop_front() {
            if (min..=max).contains(&self.suitability(host)) {
                in_range.push(host);
            }

            queue.extend(host.left());
            queue.extend(host.right());
        }

        in_range
    }

    /// Removes every host with a suitability between 0 and 100 (inclusive) and then every
    /// remaining host with antibodies. Returns how many hosts were removed.
    pub fn cleanup(&mut self) -> usize {
        let weak = owned_names(self.hosts_within_suitability_range(0, 100));
        for name in &weak {
            self.delete(name);
        }

        let immune = owned_names(self.hosts_with_antibodies());
        for name in &immune {
            self.delete(name);
        }

        let removed = weak.len() + immune.len();
        debug!(removed, "cleaned up tree");
        removed
    }

    /// Writes the tree to `out`, one host per line. See the [`Display`][fmt::Display]
    /// implementation for the layout.
    pub fn write_tree<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Prints the tree to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

fn owned_names(hosts: Vec<&Host>) -> Vec<String> {
    hosts.into_iter().map(|host| host.name().to_owned()).collect()
}

/// Walks down from `link` to the link holding the host named `name`, or to the empty link where
/// that host would be inserted.
fn search_link<'a>(mut link: &'a mut Option<Box<Host>>, name: &str) -> &'a mut Option<Box<Host>> {
    loop {
        let go_left = match link.as_deref() {
            Some(node) if node.name() != name => name < node.name(),
            _ => break,
        };
        let node = link.as_mut().unwrap();
        link = if go_left {
            &mut node.left
        } else {
            &mut node.right
        };
    }

    link
}

/// Unlinks the leftmost host below `host` (reached through its left link), re-linking that
/// host's right subtree in its place. Returns `None` if `host` has no left child.
fn take_leftmost(host: &mut Host) -> Option<Box<Host>> {
    let mut link = &mut host.left;
    loop {
        match link.as_deref() {
            Some(node) if node.left.is_some() => {}
            _ => break,
        }
        link = &mut link.as_mut().unwrap().left;
    }

    let mut leftmost = link.take()?;
    *link = leftmost.right.take();
    Some(leftmost)
}

/// Which edge led to the host being rendered.
#[derive(Clone, Copy)]
enum Side {
    Root,
    Left,
    Right,
}

impl Side {
    fn marker(self) -> &'static str {
        match self {
            Side::Root => "+--- ",
            Side::Left => "|-L- ",
            Side::Right => "|-R- ",
        }
    }
}

/// Renders the tree top-down. The root is marked `+--- `, and every other host sits one tab deeper
/// than its parent, marked `|-L- ` or `|-R- `. A missing sibling of a present child is rendered as
/// `null`. An empty tree renders as nothing.
impl fmt::Display for HostTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(Option<&Host>, usize, Side)> = self
            .root()
            .map(|root| (Some(root), 0, Side::Root))
            .into_iter()
            .collect();

        while let Some((current, depth, side)) = stack.pop() {
            write!(f, "{}{}", "\t".repeat(depth), side.marker())?;

            let Some(host) = current else {
                writeln!(f, "null")?;
                continue;
            };
            writeln!(f, "{host}")?;

            if host.left().is_some() || host.right().is_some() {
                stack.push((host.right(), depth + 1, Side::Right));
                stack.push((host.left(), depth + 1, Side::Left));
            }
        }

        Ok(())
    }
}

impl FromIterator<Host> for HostTree {
    fn from_iter<I: IntoIterator<Item = Host>>(hosts: I) -> Self {
        let mut tree = Self::new();
        tree.build_tree(hosts);
        tree
    }
}

impl Extend<Host> for HostTree {
    fn extend<I: IntoIterator<Item = Host>>(&mut self, hosts: I) {
        self.build_tree(hosts);
    }
}

impl<'a> IntoIterator for &'a HostTree {
    type Item = &'a Host;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the hosts of a [`HostTree`]. Created by [`HostTree::iter`].
pub struct Iter<'a> {
    /// Hosts whose left subtree has been (or is being) visited but which haven't been yielded.
    stack: Vec<&'a Host>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Host>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Host>) {
        while let Some(host) = current {
            self.stack.push(host);
            current = host.left();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Host;

    fn next(&mut self) -> Option<Self::Item> {
        let host = self.stack.pop()?;
        self.push_left_spine(host.right());
        Some(host)
    }
}
