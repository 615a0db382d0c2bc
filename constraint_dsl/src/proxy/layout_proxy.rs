// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`LayoutProxy`] is the builder handed to a [`crate::layout`] callback. It is bound to
//! one subject node, and every call on it creates one constraint, works out which node
//! owns it, installs it there, and records the resulting [`LayoutItem`].
//!
//! ```text
//! set(attr, to(..))           ──► install on subject
//! make(attr, equal_to(..))    ──► related item ──► owning node ──┐
//!                                                                ▼
//!                  .on(target) ──► install on target    or    nearest common ancestor
//! ```

use std::fmt::{Debug, Formatter, Result};

use crate::{Attribute, ConstantRelation, Constraint, ConstraintError, ConstraintResult,
            DEBUG_CONSTRAINT_DSL, DisplayCapabilities, ItemRelation, LayoutItem, NodeId,
            Priority, RelatedItem, ViewTree, find_common_ancestor,
            identifier_or_default};

/// Mutable state that carries over from one builder call to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ProxyState {
    pub(crate) priority: Priority,
}

pub struct LayoutProxy<'a> {
    tree: &'a mut ViewTree,
    subject: NodeId,
    state: ProxyState,
    capabilities: &'a dyn DisplayCapabilities,
    items: Vec<LayoutItem>,
}

impl Debug for LayoutProxy<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("LayoutProxy")
            .field("subject", &self.subject)
            .field("state", &self.state)
            .field("is_high_density", &self.capabilities.is_high_density())
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl<'a> LayoutProxy<'a> {
    /// Binds a builder to `subject`, and marks `subject` as laid out by constraints.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::NodeNotFound`] if `subject` is not in `tree`.
    pub fn new(
        tree: &'a mut ViewTree,
        subject: NodeId,
        capabilities: &'a dyn DisplayCapabilities,
    ) -> ConstraintResult<Self> {
        let subject_node = tree
            .get_mut(subject)
            .ok_or(ConstraintError::NodeNotFound { node: subject })?;
        subject_node.uses_constraint_layout = true;

        Ok(Self {
            tree,
            subject,
            state: ProxyState::default(),
            capabilities,
            items: Vec::new(),
        })
    }
}

impl LayoutProxy<'_> {
    #[must_use]
    pub fn subject(&self) -> NodeId { self.subject }

    /// Priority given to the next constraint this builder creates.
    #[must_use]
    pub fn priority(&self) -> Priority { self.state.priority }

    #[must_use]
    pub fn capabilities(&self) -> &dyn DisplayCapabilities { self.capabilities }

    #[must_use]
    pub fn tree(&self) -> &ViewTree { self.tree }

    /// Every item created so far in this scope, in creation order.
    #[must_use]
    pub fn items(&self) -> &[LayoutItem] { &self.items }

    #[must_use]
    pub fn into_items(self) -> Vec<LayoutItem> { self.items }

    /// Sets the priority of every constraint created after this call. Values outside
    /// `[1, 1000]` are clamped, and a warning is logged.
    pub fn set_priority(&mut self, requested: i32) {
        let (priority, was_clamped) = Priority::clamp_from(requested);
        if was_clamped {
            tracing::warn!(
                message = "⚠️ Layout priority must be between 1 and 1000, clamping it",
                requested = requested,
                clamped = %priority
            );
        }
        self.state.priority = priority;
    }

    pub fn set_priority_required(&mut self) { self.state.priority = Priority::REQUIRED; }

    pub fn set_priority_default_high(&mut self) {
        self.state.priority = Priority::DEFAULT_HIGH;
    }

    pub fn set_priority_default_low(&mut self) {
        self.state.priority = Priority::DEFAULT_LOW;
    }

    pub fn set_priority_fitting_size_level(&mut self) {
        self.state.priority = Priority::FITTING_SIZE_LEVEL;
    }

    /// `subject.attribute <relation> constant`, installed on the subject itself.
    ///
    /// # Errors
    ///
    /// Only fails if the subject has gone missing from the tree.
    pub fn set(
        &mut self,
        attribute: Attribute,
        relation: ConstantRelation,
    ) -> ConstraintResult<LayoutItem> {
        let ConstantRelation {
            relation,
            constant,
            identifier,
        } = relation;

        let constraint = Constraint::to_constant(
            self.subject,
            attribute,
            relation,
            constant,
            self.state.priority,
            identifier_or_default(identifier.as_deref()),
        );

        let item = self.tree.install(constraint, self.subject)?;
        Ok(self.record(item))
    }

    /// `subject.attribute <relation> related.related_attribute * multiplier + constant`.
    ///
    /// The constraint is installed on the node passed to [`ItemRelation::on`] if there is
    /// one. Otherwise it goes on the nearest common ancestor of the subject and the
    /// related node (for a guide, the node that owns it).
    ///
    /// # Errors
    ///
    /// Nothing is installed when this returns an error.
    /// - [`ConstraintError::NodeNotFound`] / [`ConstraintError::GuideNotFound`] for stale
    ///   handles.
    /// - [`ConstraintError::GuideWithoutOwner`] if the related guide isn't anchored to a
    ///   node and there is no explicit target.
    /// - [`ConstraintError::NoCommonAncestor`] if subject and related node are in
    ///   disjoint trees.
    pub fn make(
        &mut self,
        attribute: Attribute,
        relation: ItemRelation,
    ) -> ConstraintResult<LayoutItem> {
        let constant = relation.composed_constant();
        let ItemRelation {
            relation,
            related,
            related_attribute,
            multiplier,
            target,
            identifier,
            ..
        } = relation;

        let target = match target {
            Some(explicit_target) => {
                self.tree.try_get(explicit_target)?;
                self.validate_related(related)?;
                explicit_target
            }
            None => self.resolve_target(related)?,
        };

        let constraint = Constraint {
            subject: self.subject,
            attribute,
            relation,
            related: Some(related),
            related_attribute,
            multiplier,
            constant,
            priority: self.state.priority,
            identifier: identifier_or_default(identifier.as_deref()),
        };

        let item = self.tree.install(constraint, target)?;
        Ok(self.record(item))
    }

    fn validate_related(&self, related: RelatedItem) -> ConstraintResult<()> {
        match related {
            RelatedItem::Node(node) => self.tree.try_get(node).map(|_| ()),
            RelatedItem::Guide(guide) => self.tree.try_guide(guide).map(|_| ()),
        }
    }

    /// The node that stands in for `related` during common ancestor resolution.
    fn anchor_of(&self, related: RelatedItem) -> ConstraintResult<NodeId> {
        match related {
            RelatedItem::Node(node) => self.tree.try_get(node).map(|it| it.id()),
            RelatedItem::Guide(guide) => self
                .tree
                .try_guide(guide)?
                .owning_node
                .ok_or(ConstraintError::GuideWithoutOwner { guide }),
        }
    }

    pub(crate) fn resolve_target(&self, related: RelatedItem) -> ConstraintResult<NodeId> {
        let anchor = self.anchor_of(related)?;
        let target = find_common_ancestor(self.tree, self.subject, Some(anchor));

        DEBUG_CONSTRAINT_DSL.then(|| {
            tracing::debug!(
                message = "🌳 resolve_target",
                subject = %self.subject,
                related = %related,
                anchor = %anchor,
                target = ?target
            );
        });

        target.ok_or(ConstraintError::NoCommonAncestor {
            subject: self.subject,
            related: anchor,
        })
    }

    fn record(&mut self, item: LayoutItem) -> LayoutItem {
        self.items.push(item.clone());
        item
    }

    /// Uninstalls every constraint this scope created and forgets them.
    pub(crate) fn roll_back(&mut self) -> usize {
        let items = std::mem::take(&mut self.items);
        items
            .iter()
            .filter(|item| self.tree.uninstall(item))
            .count()
    }
}
