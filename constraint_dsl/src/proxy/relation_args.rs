// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Right hand sides of relations, built with small constructor functions and refined
//! with chained setters:
//!
//! ```
//! use r3bl_constraint_dsl::{Attribute, NodeId, equal_to, to_more_than};
//!
//! let at_least_44 = to_more_than(44.0).identifier("tap_target");
//! assert_eq!(at_least_44.constant, 44.0);
//!
//! let half_width_inset = equal_to(NodeId(1), Attribute::Width)
//!     .times(0.5)
//!     .plus(10.0)
//!     .minus(3.0);
//! assert_eq!(half_width_inset.composed_constant(), 7.0);
//! ```

use crate::{Attribute, NodeId, RelatedItem, Relation};

/// Compares an attribute of the subject to a plain constant. Used by
/// [`crate::LayoutProxy::set`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantRelation {
    pub relation: Relation,
    pub constant: f64,
    pub identifier: Option<String>,
}

impl ConstantRelation {
    #[must_use]
    pub fn new(relation: Relation, constant: f64) -> Self {
        Self {
            relation,
            constant,
            identifier: None,
        }
    }

    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

/// `attribute == constant`.
#[must_use]
pub fn to(constant: f64) -> ConstantRelation { ConstantRelation::new(Relation::Equal, constant) }

/// `attribute >= constant`.
#[must_use]
pub fn to_more_than(constant: f64) -> ConstantRelation {
    ConstantRelation::new(Relation::GreaterThanOrEqual, constant)
}

/// `attribute <= constant`.
#[must_use]
pub fn to_less_than(constant: f64) -> ConstantRelation {
    ConstantRelation::new(Relation::LessThanOrEqual, constant)
}

/// Compares an attribute of the subject to an attribute of a related node or guide.
/// Used by [`crate::LayoutProxy::make`].
///
/// The final constant of the constraint is `constant - negative_constant`, see
/// [`ItemRelation::composed_constant`].
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRelation {
    pub relation: Relation,
    pub related: RelatedItem,
    pub related_attribute: Attribute,
    pub multiplier: f64,
    pub constant: f64,
    pub negative_constant: f64,
    /// Installs on this node instead of the nearest common ancestor.
    pub target: Option<NodeId>,
    pub identifier: Option<String>,
}

impl ItemRelation {
    #[must_use]
    pub fn new(
        relation: Relation,
        related: impl Into<RelatedItem>,
        related_attribute: Attribute,
    ) -> Self {
        Self {
            relation,
            related: related.into(),
            related_attribute,
            multiplier: 1.0,
            constant: 0.0,
            negative_constant: 0.0,
            target: None,
            identifier: None,
        }
    }

    #[must_use]
    pub fn times(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn plus(mut self, constant: f64) -> Self {
        self.constant = constant;
        self
    }

    #[must_use]
    pub fn minus(mut self, negative_constant: f64) -> Self {
        self.negative_constant = negative_constant;
        self
    }

    #[must_use]
    pub fn on(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    #[must_use]
    pub fn composed_constant(&self) -> f64 { self.constant - self.negative_constant }
}

/// `attribute == related.related_attribute`.
#[must_use]
pub fn equal_to(related: impl Into<RelatedItem>, related_attribute: Attribute) -> ItemRelation {
    ItemRelation::new(Relation::Equal, related, related_attribute)
}

/// `attribute >= related.related_attribute`.
#[must_use]
pub fn greater_than(
    related: impl Into<RelatedItem>,
    related_attribute: Attribute,
) -> ItemRelation {
    ItemRelation::new(Relation::GreaterThanOrEqual, related, related_attribute)
}

/// `attribute <= related.related_attribute`.
#[must_use]
pub fn less_than(related: impl Into<RelatedItem>, related_attribute: Attribute) -> ItemRelation {
    ItemRelation::new(Relation::LessThanOrEqual, related, related_attribute)
}
