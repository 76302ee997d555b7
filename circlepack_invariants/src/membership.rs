// Copyright 2026 the Circlepack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Set-membership predicates over a subtree's flattened node names.
//!
//! These check structural containment and leakage: that a subtree holds
//! exactly an expected set of nodes (by full name, order irrelevant,
//! duplicates forbidden) and that no leaf class exists where only packages are
//! expected. Like the geometric predicates, they verify; they never enforce.

use alloc::vec;
use alloc::vec::Vec;

/// A node in the visualized hierarchy, as far as membership checks care.
pub trait Hierarchy {
    /// Fully-qualified name, unique in the tree.
    fn full_name(&self) -> &str;

    /// Whether the node has no children in the visible tree.
    fn is_leaf(&self) -> bool;

    /// Whether the node is a package (an interior grouping rather than a
    /// class). An empty package is a leaf but not a class.
    fn is_package(&self) -> bool;

    /// The node's children.
    fn children(&self) -> impl Iterator<Item = &Self>;
}

/// The subtree rooted at `root`, flattened depth-first, root included.
pub fn self_and_descendants<N: Hierarchy>(root: &N) -> Vec<&N> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.children());
    }
    out
}

/// Whether `nodes` is exactly the set named by `expected`.
///
/// Compares sorted full names, so order is irrelevant; a duplicate on either
/// side fails the comparison.
pub fn contain_exactly_nodes<N: Hierarchy>(nodes: &[&N], expected: &[&str]) -> bool {
    let mut actual: Vec<&str> = nodes.iter().map(|node| node.full_name()).collect();
    actual.sort_unstable();
    let mut expected: Vec<&str> = expected.to_vec();
    expected.sort_unstable();
    actual == expected
}

/// Whether the leaves of the subtree rooted at `root` are exactly the nodes
/// named by `expected`.
pub fn contain_only_classes<N: Hierarchy>(root: &N, expected: &[&str]) -> bool {
    let leaves: Vec<&N> = self_and_descendants(root)
        .into_iter()
        .filter(|node| node.is_leaf())
        .collect();
    contain_exactly_nodes(&leaves, expected)
}

/// Whether the subtree rooted at `root` contains no leaf class — every leaf,
/// if any, is an (empty) package.
pub fn contain_no_classes<N: Hierarchy>(root: &N) -> bool {
    self_and_descendants(root)
        .iter()
        .all(|node| !node.is_leaf() || node.is_package())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;

    struct TestNode {
        full_name: String,
        package: bool,
        children: Vec<TestNode>,
    }

    impl Hierarchy for TestNode {
        fn full_name(&self) -> &str {
            &self.full_name
        }

        fn is_leaf(&self) -> bool {
            self.children.is_empty()
        }

        fn is_package(&self) -> bool {
            self.package
        }

        fn children(&self) -> impl Iterator<Item = &Self> {
            self.children.iter()
        }
    }

    fn package(full_name: &str, children: Vec<TestNode>) -> TestNode {
        TestNode {
            full_name: String::from(full_name),
            package: true,
            children,
        }
    }

    fn class(full_name: &str) -> TestNode {
        TestNode {
            full_name: String::from(full_name),
            package: false,
            children: Vec::new(),
        }
    }

    /// a ── b ── X, Y
    ///   └─ c ── Z
    fn sample_tree() -> TestNode {
        package(
            "a",
            vec![
                package("a.b", vec![class("a.b.X"), class("a.b.Y")]),
                package("a.c", vec![class("a.c.Z")]),
            ],
        )
    }

    #[test]
    fn flattening_visits_the_whole_subtree() {
        let root = sample_tree();
        let all = self_and_descendants(&root);
        assert!(contain_exactly_nodes(
            &all,
            &["a", "a.b", "a.b.X", "a.b.Y", "a.c", "a.c.Z"]
        ));
    }

    #[test]
    fn exact_leaf_set_passes() {
        let root = sample_tree();
        assert!(contain_only_classes(
            &root,
            &["a.b.X", "a.b.Y", "a.c.Z"]
        ));
        // Order is irrelevant.
        assert!(contain_only_classes(
            &root,
            &["a.c.Z", "a.b.X", "a.b.Y"]
        ));
    }

    #[test]
    fn subset_and_superset_fail() {
        let root = sample_tree();
        assert!(!contain_only_classes(&root, &["a.b.X", "a.b.Y"]));
        assert!(!contain_only_classes(
            &root,
            &["a.b.X", "a.b.Y", "a.c.Z", "a.c.W"]
        ));
    }

    #[test]
    fn duplicates_are_forbidden() {
        let root = sample_tree();
        assert!(!contain_only_classes(
            &root,
            &["a.b.X", "a.b.X", "a.b.Y", "a.c.Z"]
        ));
    }

    #[test]
    fn leaf_free_subtree_contains_no_classes() {
        let empty_packages = package("a", vec![package("a.b", vec![])]);
        assert!(contain_no_classes(&empty_packages));
    }

    #[test]
    fn any_class_leaf_fails_contain_no_classes() {
        let root = sample_tree();
        assert!(!contain_no_classes(&root));

        let one_class = package("a", vec![class("a.X")]);
        assert!(!contain_no_classes(&one_class));
    }
}
