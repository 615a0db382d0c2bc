// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Nearest common ancestor resolution over a [`ViewTree`]'s parent pointers.

use rustc_hash::FxHashSet;

use crate::{NodeId, ViewTree};

/// Walks from a node up to its root, starting with the node itself. The walk yields at
/// most [`ViewTree::node_count`] items, so it terminates even if the parent chain were
/// ever corrupted into a loop.
#[derive(Debug, Clone)]
pub struct AncestorIter<'a> {
    tree: &'a ViewTree,
    next: Option<NodeId>,
    remaining: usize,
}

impl Iterator for AncestorIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.tree.parent_of(current);
        Some(current)
    }
}

impl ViewTree {
    /// Ancestor chain of `node`, inclusive of `node`. Empty if `node` is not in this
    /// tree.
    #[must_use]
    pub fn ancestors(&self, node: NodeId) -> AncestorIter<'_> {
        AncestorIter {
            tree: self,
            next: self.contains(node).then_some(node),
            remaining: self.node_count(),
        }
    }

    #[must_use]
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|it| it == ancestor)
    }
}

/// Finds the node a constraint between `a` and `b` has to be installed on.
///
/// - If `b` is [`None`] the constraint only involves `a`, so the answer is `a`.
/// - Otherwise it is the deepest node that is an ancestor-or-self of both, or [`None`]
///   if `a` and `b` live in disjoint trees.
///
/// The direct parent / sibling cases are answered without building the ancestor chain.
#[must_use]
pub fn find_common_ancestor(tree: &ViewTree, a: NodeId, b: Option<NodeId>) -> Option<NodeId> {
    let Some(b) = b else {
        return Some(a);
    };

    if a == b {
        return tree.contains(a).then_some(a);
    }

    let parent_of_a = tree.parent_of(a);
    let parent_of_b = tree.parent_of(b);
    if parent_of_a == Some(b) {
        return Some(b);
    }
    if parent_of_b == Some(a) {
        return Some(a);
    }
    if parent_of_a.is_some() && parent_of_a == parent_of_b {
        return parent_of_a;
    }

    let chain_of_a: FxHashSet<NodeId> = tree.ancestors(a).collect();
    tree.ancestors(b).find(|it| chain_of_a.contains(it))
}
