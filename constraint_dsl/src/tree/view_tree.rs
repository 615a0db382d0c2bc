// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`ViewTree`] is an arena of view nodes linked by parent pointers, plus the layout
//! guides anchored to them. Every node owns the constraints installed on it, so there is
//! no side table that maps nodes to constraints.
//!
//! Nodes and guides are addressed by [`NodeId`] and [`GuideId`] handles. Handles are
//! allocated from monotonically increasing counters and are never reused.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{ConstraintError, ConstraintId, ConstraintResult, DEBUG_CONSTRAINT_DSL,
            GuideId, InlineVec, InstalledConstraint, NodeId, RelatedItem, ok};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: InlineVec<NodeId>,
    pub(crate) constraints: Vec<InstalledConstraint>,
    pub(crate) uses_constraint_layout: bool,
}

impl ViewNode {
    fn new(id: NodeId, parent: Option<NodeId>) -> Self {
        Self {
            id,
            parent,
            children: InlineVec::new(),
            constraints: Vec::new(),
            uses_constraint_layout: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> NodeId { self.id }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> { self.parent }

    #[must_use]
    pub fn children(&self) -> &[NodeId] { &self.children }

    /// Constraints installed on this node, in installation order.
    #[must_use]
    pub fn constraints(&self) -> &[InstalledConstraint] { &self.constraints }

    /// Set once a builder scope has been opened on this node.
    #[must_use]
    pub fn uses_constraint_layout(&self) -> bool { self.uses_constraint_layout }
}

/// A non-rendering region that can take part in relations. A guide has no children and
/// is not part of the parent chain; for target resolution it stands in for the node that
/// owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutGuide {
    pub id: GuideId,
    pub owning_node: Option<NodeId>,
}

#[derive(Debug, Default)]
pub struct ViewTree {
    nodes: FxHashMap<NodeId, ViewNode>,
    guides: FxHashMap<GuideId, LayoutGuide>,
    next_node_id: usize,
    next_guide_id: usize,
    next_constraint_id: u64,
}

impl ViewTree {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    fn generate_node_id(&mut self) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    fn generate_guide_id(&mut self) -> GuideId {
        let id = GuideId(self.next_guide_id);
        self.next_guide_id += 1;
        id
    }

    pub(crate) fn generate_constraint_id(&mut self) -> ConstraintId {
        let id = ConstraintId(self.next_constraint_id);
        self.next_constraint_id += 1;
        id
    }

    /// Adds a node with no parent. A tree may hold any number of roots, ie: it is really
    /// a forest.
    pub fn add_root(&mut self) -> NodeId {
        let id = self.generate_node_id();
        self.nodes.insert(id, ViewNode::new(id, None));
        id
    }

    /// # Errors
    ///
    /// [`ConstraintError::NodeNotFound`] if `parent` is not in this tree.
    pub fn add_child(&mut self, parent: NodeId) -> ConstraintResult<NodeId> {
        self.try_get(parent)?;
        let id = self.generate_node_id();
        self.nodes.insert(id, ViewNode::new(id, Some(parent)));
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(id);
        }
        Ok(id)
    }

    /// # Errors
    ///
    /// [`ConstraintError::NodeNotFound`] if `owner` is not in this tree.
    pub fn add_guide(&mut self, owner: NodeId) -> ConstraintResult<GuideId> {
        self.try_get(owner)?;
        let id = self.generate_guide_id();
        self.guides.insert(
            id,
            LayoutGuide {
                id,
                owning_node: Some(owner),
            },
        );
        Ok(id)
    }

    /// A guide that isn't anchored to any node. It can't be related to unless the
    /// constraint names its target explicitly.
    pub fn add_unowned_guide(&mut self) -> GuideId {
        let id = self.generate_guide_id();
        self.guides.insert(
            id,
            LayoutGuide {
                id,
                owning_node: None,
            },
        );
        id
    }

    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&ViewNode> { self.nodes.get(&node) }

    pub(crate) fn get_mut(&mut self, node: NodeId) -> Option<&mut ViewNode> {
        self.nodes.get_mut(&node)
    }

    /// # Errors
    ///
    /// [`ConstraintError::NodeNotFound`] if `node` is not in this tree.
    pub fn try_get(&self, node: NodeId) -> ConstraintResult<&ViewNode> {
        self.nodes
            .get(&node)
            .ok_or(ConstraintError::NodeNotFound { node })
    }

    #[must_use]
    pub fn guide(&self, guide: GuideId) -> Option<&LayoutGuide> { self.guides.get(&guide) }

    /// # Errors
    ///
    /// [`ConstraintError::GuideNotFound`] if `guide` is not in this tree.
    pub fn try_guide(&self, guide: GuideId) -> ConstraintResult<&LayoutGuide> {
        self.guides
            .get(&guide)
            .ok_or(ConstraintError::GuideNotFound { guide })
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool { self.nodes.contains_key(&node) }

    #[must_use]
    pub fn contains_guide(&self, guide: GuideId) -> bool { self.guides.contains_key(&guide) }

    #[must_use]
    pub fn node_count(&self) -> usize { self.nodes.len() }

    #[must_use]
    pub fn guide_count(&self) -> usize { self.guides.len() }

    #[must_use]
    pub fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|it| it.parent)
    }

    /// Empty if `node` is not in this tree.
    #[must_use]
    pub fn children_of(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map(|it| it.children.as_slice())
            .unwrap_or_default()
    }

    /// Empty if `node` is not in this tree.
    #[must_use]
    pub fn constraints_on(&self, node: NodeId) -> &[InstalledConstraint] {
        self.nodes
            .get(&node)
            .map(|it| it.constraints.as_slice())
            .unwrap_or_default()
    }

    /// Total number of constraints installed anywhere in the tree.
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.nodes.values().map(|it| it.constraints.len()).sum()
    }

    /// Moves `node` (and its subtree) under `new_parent`, or makes it a root when
    /// `new_parent` is [`None`]. Moving a node under its current parent does nothing.
    ///
    /// Like a view leaving its old superview, the move uninstalls every constraint that
    /// refers to a node in the moved subtree (a guide counts as its owning node) and whose
    /// owner no longer contains both of the nodes it refers to. Constraints whose owner is
    /// still an ancestor-or-self of both ends stay where they are. Returns how many
    /// constraints were uninstalled.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::NodeNotFound`] if either node is not in this tree.
    /// - [`ConstraintError::WouldCreateCycle`] if `new_parent` is `node` or one of its
    ///   descendants.
    pub fn reparent(
        &mut self,
        node: NodeId,
        new_parent: Option<NodeId>,
    ) -> ConstraintResult<usize> {
        let old_parent = self.try_get(node)?.parent;

        if let Some(new_parent) = new_parent {
            self.try_get(new_parent)?;
            if self.ancestors(new_parent).any(|it| it == node) {
                return Err(ConstraintError::WouldCreateCycle { node, new_parent });
            }
        }

        if old_parent == new_parent {
            return Ok(0);
        }

        if let Some(old_parent_node) = old_parent.and_then(|it| self.nodes.get_mut(&it)) {
            old_parent_node.children.retain(|child| *child != node);
        }
        if let Some(new_parent_node) = new_parent.and_then(|it| self.nodes.get_mut(&it)) {
            new_parent_node.children.push(node);
        }
        if let Some(moved) = self.nodes.get_mut(&node) {
            moved.parent = new_parent;
        }

        let purged = self.purge_constraints_stranded_by_move(node);

        DEBUG_CONSTRAINT_DSL.then(|| {
            tracing::debug!(
                message = "🌳 reparent",
                node = ?node,
                old_parent = ?old_parent,
                new_parent = ?new_parent,
                purged_constraints = purged
            );
        });

        Ok(purged)
    }

    /// Uninstalls the constraints that refer to the subtree rooted at `moved` and whose
    /// owner is no longer an ancestor-or-self of their subject and related node.
    fn purge_constraints_stranded_by_move(&mut self, moved: NodeId) -> usize {
        let subtree: FxHashSet<NodeId> = self
            .tree_walk_dfs(moved)
            .unwrap_or_default()
            .into_iter()
            .collect();

        let mut stranded: Vec<(NodeId, ConstraintId)> = vec![];
        for owner in self.nodes.values() {
            for installed in &owner.constraints {
                let constraint = &installed.constraint;
                let related_anchor =
                    constraint.related.and_then(|related| self.anchor_of(related));
                let touches_subtree = subtree.contains(&constraint.subject)
                    || related_anchor.is_some_and(|it| subtree.contains(&it));
                if !touches_subtree {
                    continue;
                }
                let still_contained = self.is_ancestor_or_self(owner.id, constraint.subject)
                    && related_anchor
                        .is_none_or(|it| self.is_ancestor_or_self(owner.id, it));
                if !still_contained {
                    stranded.push((owner.id, installed.id));
                }
            }
        }

        for (owner, id) in &stranded {
            if let Some(owner_node) = self.nodes.get_mut(owner) {
                owner_node.constraints.retain(|installed| installed.id != *id);
            }
        }
        stranded.len()
    }

    /// The node a related item stands for: the node itself, or the owner of a guide.
    fn anchor_of(&self, related: RelatedItem) -> Option<NodeId> {
        match related {
            RelatedItem::Node(node) => Some(node),
            RelatedItem::Guide(guide) => self.guides.get(&guide).and_then(|it| it.owning_node),
        }
    }

    /// Removes `node` and all its descendants, along with the guides they own. Every
    /// constraint left in the tree that refers to a removed node or guide is uninstalled
    /// too. Returns the removed nodes in DFS order.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::NodeNotFound`] if `node` is not in this tree.
    pub fn remove_subtree(&mut self, node: NodeId) -> ConstraintResult<Vec<NodeId>> {
        let parent = self.try_get(node)?.parent;
        let deletion_list = self.tree_walk_dfs(node).unwrap_or_default();
        let deleted_nodes: FxHashSet<NodeId> = deletion_list.iter().copied().collect();

        if let Some(parent_node) = parent.and_then(|it| self.nodes.get_mut(&it)) {
            parent_node.children.retain(|child| *child != node);
        }

        for id in &deletion_list {
            self.nodes.remove(id);
        }

        let deleted_guides: FxHashSet<GuideId> = self
            .guides
            .values()
            .filter(|guide| {
                guide
                    .owning_node
                    .is_some_and(|owner| deleted_nodes.contains(&owner))
            })
            .map(|guide| guide.id)
            .collect();
        self.guides.retain(|id, _| !deleted_guides.contains(id));

        let mut purged = 0;
        for remaining in self.nodes.values_mut() {
            let before = remaining.constraints.len();
            remaining.constraints.retain(|installed| {
                let constraint = &installed.constraint;
                let refers_to_deleted_node = deleted_nodes
                    .iter()
                    .any(|deleted| constraint.references_node(*deleted));
                let refers_to_deleted_guide = deleted_guides
                    .iter()
                    .any(|deleted| constraint.references_guide(*deleted));
                !refers_to_deleted_node && !refers_to_deleted_guide
            });
            purged += before - remaining.constraints.len();
        }

        DEBUG_CONSTRAINT_DSL.then(|| {
            tracing::debug!(
                message = "🌳 remove_subtree",
                node = ?node,
                removed_nodes = ?deletion_list,
                removed_guides = ?deleted_guides,
                purged_constraints = purged
            );
        });

        Ok(deletion_list)
    }

    /// DFS walk of the subtree rooted at `node`, including `node`. [`None`] if `node` is
    /// not in this tree.
    #[must_use]
    pub fn tree_walk_dfs(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.contains(node) {
            return None;
        }
        let mut collected_nodes = vec![];
        let mut stack = vec![node];

        while let Some(node_id) = stack.pop() {
            let Some(current) = self.nodes.get(&node_id) else {
                continue;
            };
            collected_nodes.push(current.id);
            stack.extend(current.children.iter().rev().copied());
        }

        Some(collected_nodes)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::CommonResult;

    /// ```text
    /// root
    /// ├── a
    /// │   ├── a1
    /// │   └── a2
    /// └── b
    /// ```
    fn create_tree() -> CommonResult<(ViewTree, [NodeId; 5])> {
        let mut tree = ViewTree::new();
        let root = tree.add_root();
        let a = tree.add_child(root)?;
        let a1 = tree.add_child(a)?;
        let a2 = tree.add_child(a)?;
        let b = tree.add_child(root)?;
        ok!((tree, [root, a, a1, a2, b]))
    }

    #[test]
    fn test_add_nodes() -> CommonResult<()> {
        let (tree, [root, a, a1, a2, b]) = create_tree()?;

        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.parent_of(root), None);
        assert_eq!(tree.parent_of(a1), Some(a));
        assert_eq!(tree.children_of(root), &[a, b]);
        assert_eq!(tree.children_of(a), &[a1, a2]);
        assert!(tree.children_of(b).is_empty());

        ok!()
    }

    #[test]
    fn test_add_child_to_missing_parent() {
        let mut tree = ViewTree::new();
        let result = tree.add_child(NodeId(99));
        assert_eq!(result, Err(ConstraintError::NodeNotFound { node: NodeId(99) }));
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_guides() -> CommonResult<()> {
        let (mut tree, [_, a, ..]) = create_tree()?;
        let owned = tree.add_guide(a)?;
        let unowned = tree.add_unowned_guide();

        assert_eq!(tree.guide_count(), 2);
        assert_eq!(tree.try_guide(owned)?.owning_node, Some(a));
        assert_eq!(tree.try_guide(unowned)?.owning_node, None);
        assert_eq!(
            tree.add_guide(NodeId(99)),
            Err(ConstraintError::NodeNotFound { node: NodeId(99) })
        );

        ok!()
    }

    #[test]
    fn test_tree_walk_dfs() -> CommonResult<()> {
        let (tree, [root, a, a1, a2, b]) = create_tree()?;

        assert_eq!(tree.tree_walk_dfs(root), Some(vec![root, a, a1, a2, b]));
        assert_eq!(tree.tree_walk_dfs(a), Some(vec![a, a1, a2]));
        assert_eq!(tree.tree_walk_dfs(NodeId(99)), None);

        ok!()
    }

    #[test]
    fn test_reparent() -> CommonResult<()> {
        let (mut tree, [root, a, a1, a2, b]) = create_tree()?;

        tree.reparent(a2, Some(b))?;
        assert_eq!(tree.parent_of(a2), Some(b));
        assert_eq!(tree.children_of(a), &[a1]);
        assert_eq!(tree.children_of(b), &[a2]);

        tree.reparent(b, None)?;
        assert_eq!(tree.parent_of(b), None);
        assert_eq!(tree.children_of(root), &[a]);

        ok!()
    }

    #[test]
    fn test_reparent_rejects_cycles() -> CommonResult<()> {
        let (mut tree, [root, a, a1, ..]) = create_tree()?;

        assert_eq!(
            tree.reparent(root, Some(a1)),
            Err(ConstraintError::WouldCreateCycle {
                node: root,
                new_parent: a1
            })
        );
        assert_eq!(
            tree.reparent(a, Some(a)),
            Err(ConstraintError::WouldCreateCycle {
                node: a,
                new_parent: a
            })
        );
        assert_eq!(tree.parent_of(a), Some(root));

        ok!()
    }

    fn left_equal_to(subject: NodeId, related: RelatedItem) -> crate::Constraint {
        crate::Constraint {
            related: Some(related),
            related_attribute: crate::Attribute::Left,
            ..crate::Constraint::to_constant(
                subject,
                crate::Attribute::Left,
                crate::Relation::Equal,
                0.0,
                crate::Priority::REQUIRED,
                "test".into(),
            )
        }
    }

    #[test]
    fn test_reparent_uninstalls_constraints_leaving_their_owner() -> CommonResult<()> {
        let (mut tree, [root, a, a1, a2, b]) = create_tree()?;
        let a1_guide = tree.add_guide(a1)?;

        // Owned by a, which stops containing a1.
        let stale = tree.install(left_equal_to(a1, RelatedItem::Node(a)), a)?;
        let stale_via_guide = tree.install(left_equal_to(a2, RelatedItem::Guide(a1_guide)), a)?;
        // Stays valid: root is still an ancestor of both ends.
        let kept_on_root = tree.install(left_equal_to(a1, RelatedItem::Node(b)), root)?;
        // Lives entirely inside the moved subtree.
        let kept_inside = tree.install(left_equal_to(a1, RelatedItem::Guide(a1_guide)), a1)?;

        assert_eq!(tree.reparent(a1, Some(b))?, 2);

        assert!(!tree.is_installed(&stale));
        assert!(!tree.is_installed(&stale_via_guide));
        assert!(tree.is_installed(&kept_on_root));
        assert!(tree.is_installed(&kept_inside));
        assert!(tree.constraints_on(a).is_empty());

        ok!()
    }

    #[test]
    fn test_reparent_under_same_parent_keeps_constraints() -> CommonResult<()> {
        let (mut tree, [_, a, a1, ..]) = create_tree()?;
        let item = tree.install(left_equal_to(a1, RelatedItem::Node(a)), a)?;

        assert_eq!(tree.reparent(a1, Some(a))?, 0);
        assert!(tree.is_installed(&item));
        assert_eq!(tree.children_of(a).len(), 2);

        ok!()
    }

    #[test]
    fn test_remove_subtree() -> CommonResult<()> {
        let (mut tree, [root, a, a1, a2, b]) = create_tree()?;
        let guide = tree.add_guide(a1)?;
        let kept_guide = tree.add_guide(b)?;

        let removed = tree.remove_subtree(a)?;

        assert_eq!(removed, vec![a, a1, a2]);
        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.children_of(root), &[b]);
        assert!(!tree.contains(a1));
        assert!(!tree.contains_guide(guide));
        assert!(tree.contains_guide(kept_guide));
        assert_eq!(
            tree.remove_subtree(a),
            Err(ConstraintError::NodeNotFound { node: a })
        );

        ok!()
    }

    #[test]
    fn test_handles_are_not_reused() -> CommonResult<()> {
        let (mut tree, [_, a, ..]) = create_tree()?;
        tree.remove_subtree(a)?;
        let fresh = tree.add_root();
        assert_eq!(fresh, NodeId(5));
        ok!()
    }
}
