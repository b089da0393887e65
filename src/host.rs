//! The record stored in a [`HostTree`][crate::HostTree]. A `Host` is both the payload and the
//! node: it owns its two children directly, there is no wrapper node type.

use std::fmt;

/// Computes a suitability score from a host's compatibility and stability.
pub type Scorer = fn(i32, i32) -> i32;

/// The default [`Scorer`]: the sum of compatibility and stability, saturating at the `i32`
/// bounds.
///
/// # Examples
///
/// ```
/// use host_tree::default_suitability;
///
/// assert_eq!(default_suitability(40, 50), 90);
/// assert_eq!(default_suitability(i32::MAX, 1), i32::MAX);
/// ```
pub fn default_suitability(compatibility: i32, stability: i32) -> i32 {
    compatibility.saturating_add(stability)
}

/// A potential host. The name is the key the tree orders by; the remaining attributes are
/// overwritten in place when a host with the same name is inserted again. A host is scored by
/// the tree holding it, see [`HostTree::suitability`][crate::HostTree::suitability].
#[derive(Debug)]
pub struct Host {
    name: String,
    compatibility: i32,
    stability: i32,
    has_antibodies: bool,
    pub(crate) left: Option<Box<Host>>,
    pub(crate) right: Option<Box<Host>>,
}

impl Host {
    /// Creates a detached host, i.e. one without children.
    ///
    /// # Examples
    ///
    /// ```
    /// use host_tree::Host;
    ///
    /// let host = Host::new("Eddie Brock", 80, 30, false);
    ///
    /// assert_eq!(host.name(), "Eddie Brock");
    /// assert_eq!(host.compatibility(), 80);
    /// assert!(host.left().is_none() && host.right().is_none());
    /// ```
    pub fn new(
        name: impl Into<String>,
        compatibility: i32,
        stability: i32,
        has_antibodies: bool,
    ) -> Self {
        Self {
            name: name.into(),
            compatibility,
            stability,
            has_antibodies,
            left: None,
            right: None,
        }
    }

    /// The key this host is ordered by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How compatible this host is with the symbiote.
    pub fn compatibility(&self) -> i32 {
        self.compatibility
    }

    /// The mental stability of this host.
    pub fn stability(&self) -> i32 {
        self.stability
    }

    /// Whether this host carries antibodies.
    pub fn has_antibodies(&self) -> bool {
        self.has_antibodies
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Host> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Host> {
        self.right.as_deref()
    }

    /// Copies the mutable attributes of `other` into `self`. Name and children are untouched.
    pub(crate) fn update_from(&mut self, other: &Host) {
        self.compatibility = other.compatibility;
        self.stability = other.stability;
        self.has_antibodies = other.has_antibodies;
    }

    /// Unlinks both children, returning the now detached host.
    pub(crate) fn detached(mut self) -> Self {
        self.left = None;
        self.right = None;
        self
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (compatibility: {}, stability: {}, antibodies: {})",
            self.name, self.compatibility, self.stability, self.has_antibodies
        )
    }
}
