
use crate::{Host, HostTree};

/// Asserts the BST invariant: an in-order walk yields strictly ascending names.
pub(crate) fn assert_ordered(tree: &HostTree) {
    let names: Vec<_> = tree.iter().map(Host::name).collect();
    assert!(
        names.windows(2).all(|pair| pair[0] < pair[1]),
        "names out of order: {names:?}"
    );
}
