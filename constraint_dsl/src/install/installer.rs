// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Registers constraints on the node that owns them, and manages their lifecycle once
//! they are there.
//!
//! A constraint goes through these states:
//!
//! ```text
//! install ──► active ◄──► inactive
//!               │            │
//!               └─ uninstall ┴──► gone (can't be reinstalled, build a new one)
//! ```
//!
//! Every lifecycle operation is idempotent for a single item.

use serde::{Deserialize, Serialize};

use crate::{Constraint, ConstraintId, ConstraintResult, DEBUG_CONSTRAINT_DSL,
            LayoutItem, NodeId, ViewTree};

/// A constraint as it is stored in its owning node's constraint set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstalledConstraint {
    pub id: ConstraintId,
    pub constraint: Constraint,
    pub is_active: bool,
}

impl ViewTree {
    /// Appends `constraint` to `target`'s constraint set, active. There is no
    /// deduplication, installing an equal constraint twice gives two entries.
    ///
    /// # Errors
    ///
    /// [`crate::ConstraintError::NodeNotFound`] if `target` is not in this tree. Nothing
    /// is installed in that case.
    pub fn install(
        &mut self,
        constraint: Constraint,
        target: NodeId,
    ) -> ConstraintResult<LayoutItem> {
        self.try_get(target)?;
        let id = self.generate_constraint_id();

        DEBUG_CONSTRAINT_DSL.then(|| {
            tracing::debug!(
                message = "📌 install",
                id = %id,
                target = %target,
                constraint = %constraint
            );
        });

        if let Some(target_node) = self.get_mut(target) {
            target_node.constraints.push(InstalledConstraint {
                id,
                constraint: constraint.clone(),
                is_active: true,
            });
        }

        Ok(LayoutItem {
            id,
            constraint,
            target,
        })
    }

    /// Removes the item's constraint from its owning node. Returns `false` if it was
    /// already gone.
    pub fn uninstall(&mut self, item: &LayoutItem) -> bool {
        let Some(target_node) = self.get_mut(item.target) else {
            return false;
        };
        let before = target_node.constraints.len();
        target_node.constraints.retain(|it| it.id != item.id);
        let removed = target_node.constraints.len() != before;

        DEBUG_CONSTRAINT_DSL.then(|| {
            tracing::debug!(message = "🧹 uninstall", id = %item.id, removed = removed);
        });

        removed
    }

    /// Returns `false` (and does nothing) if the item is not installed.
    pub fn activate(&mut self, item: &LayoutItem) -> bool { self.set_active(item, true) }

    /// Returns `false` (and does nothing) if the item is not installed.
    pub fn deactivate(&mut self, item: &LayoutItem) -> bool {
        self.set_active(item, false)
    }

    fn set_active(&mut self, item: &LayoutItem, is_active: bool) -> bool {
        let Some(installed) = self.find_installed_mut(item) else {
            return false;
        };
        installed.is_active = is_active;
        true
    }

    #[must_use]
    pub fn is_installed(&self, item: &LayoutItem) -> bool {
        self.find_installed(item).is_some()
    }

    /// `false` for an item that is not installed.
    #[must_use]
    pub fn is_active(&self, item: &LayoutItem) -> bool {
        self.find_installed(item).is_some_and(|it| it.is_active)
    }

    #[must_use]
    pub fn find_installed(&self, item: &LayoutItem) -> Option<&InstalledConstraint> {
        self.constraints_on(item.target)
            .iter()
            .find(|it| it.id == item.id)
    }

    fn find_installed_mut(&mut self, item: &LayoutItem) -> Option<&mut InstalledConstraint> {
        self.get_mut(item.target)?
            .constraints
            .iter_mut()
            .find(|it| it.id == item.id)
    }
}
