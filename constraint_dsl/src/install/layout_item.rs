// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Constraint, ConstraintId, DEFAULT_LAYOUT_ITEMS_SIZE, NodeId, ViewTree};

/// Returned by every builder operation. Pairs the constraint with the node it was
/// actually installed on, which is not necessarily its subject.
///
/// The item is a plain value: dropping it leaves the constraint installed. Use
/// [`ViewTree::uninstall`] (or [`LayoutItemsExt::uninstall_all`]) to remove it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub id: ConstraintId,
    pub constraint: Constraint,
    pub target: NodeId,
}

/// Items produced by one composite operation, in a fixed order.
pub type LayoutItems = SmallVec<[LayoutItem; DEFAULT_LAYOUT_ITEMS_SIZE]>;

/// Bulk lifecycle operations over a group of items. Each returns how many of the items
/// were still installed, and so were actually affected.
pub trait LayoutItemsExt {
    fn activate_all(&self, tree: &mut ViewTree) -> usize;
    fn deactivate_all(&self, tree: &mut ViewTree) -> usize;
    fn uninstall_all(&self, tree: &mut ViewTree) -> usize;
}

impl LayoutItemsExt for [LayoutItem] {
    fn activate_all(&self, tree: &mut ViewTree) -> usize {
        self.iter().filter(|item| tree.activate(item)).count()
    }

    fn deactivate_all(&self, tree: &mut ViewTree) -> usize {
        self.iter().filter(|item| tree.deactivate(item)).count()
    }

    fn uninstall_all(&self, tree: &mut ViewTree) -> usize {
        self.iter().filter(|item| tree.uninstall(item)).count()
    }
}
