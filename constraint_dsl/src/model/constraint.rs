// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use crate::{Attribute, GuideId, NodeId, Priority, Relation};

/// Identity of an installed constraint. Unique within one [`crate::ViewTree`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ConstraintId(pub u64);

impl Display for ConstraintId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "📐┆constraint: {}┆", self.0) }
}

/// The second participant of a constraint: either a node or a layout guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelatedItem {
    Node(NodeId),
    Guide(GuideId),
}

impl From<NodeId> for RelatedItem {
    fn from(node: NodeId) -> Self { RelatedItem::Node(node) }
}

impl From<GuideId> for RelatedItem {
    fn from(guide: GuideId) -> Self { RelatedItem::Guide(guide) }
}

impl Display for RelatedItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RelatedItem::Node(node) => write!(f, "{node}"),
            RelatedItem::Guide(guide) => write!(f, "{guide}"),
        }
    }
}

/// A linear relation between two layout attributes:
///
/// ```text
/// subject.attribute <relation> related.related_attribute * multiplier + constant
/// ```
///
/// When `related` is [`None`] the right hand side is just `constant`, and
/// `related_attribute` is [`Attribute::NotAnAttribute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub subject: NodeId,
    pub attribute: Attribute,
    pub relation: Relation,
    pub related: Option<RelatedItem>,
    pub related_attribute: Attribute,
    pub multiplier: f64,
    pub constant: f64,
    pub priority: Priority,
    pub identifier: String,
}

impl Constraint {
    /// `subject.attribute <relation> constant`.
    #[must_use]
    pub fn to_constant(
        subject: NodeId,
        attribute: Attribute,
        relation: Relation,
        constant: f64,
        priority: Priority,
        identifier: String,
    ) -> Self {
        Self {
            subject,
            attribute,
            relation,
            related: None,
            related_attribute: Attribute::NotAnAttribute,
            multiplier: 1.0,
            constant,
            priority,
            identifier,
        }
    }

    #[must_use]
    pub fn references_node(&self, node: NodeId) -> bool {
        self.subject == node || self.related == Some(RelatedItem::Node(node))
    }

    #[must_use]
    pub fn references_guide(&self, guide: GuideId) -> bool {
        self.related == Some(RelatedItem::Guide(guide))
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "[{}] {}.{} {} ",
            self.identifier, self.subject, self.attribute, self.relation
        )?;
        match self.related {
            Some(related) => write!(
                f,
                "{related}.{} * {} + {}",
                self.related_attribute, self.multiplier, self.constant
            )?,
            None => write!(f, "{}", self.constant)?,
        }
        write!(f, " {}", self.priority)
    }
}
