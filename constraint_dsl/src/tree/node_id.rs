// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Display},
          ops::Deref};

use serde::{Deserialize, Serialize};

/// Handle to a node in a [`crate::ViewTree`]. Handles are never reused, so a handle to a
/// removed node stays invalid.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl From<usize> for NodeId {
    fn from(id: usize) -> Self { Self(id) }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self { id.0 }
}

impl Deref for NodeId {
    type Target = usize;

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl NodeId {
    fn pretty_print(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "🔑┆node: {}┆", self.0)
    }
}

impl Debug for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.pretty_print(f)
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.pretty_print(f)
    }
}

/// Handle to a layout guide in a [`crate::ViewTree`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GuideId(pub usize);

impl From<usize> for GuideId {
    fn from(id: usize) -> Self { Self(id) }
}

impl From<GuideId> for usize {
    fn from(id: GuideId) -> Self { id.0 }
}

impl Deref for GuideId {
    type Target = usize;

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl GuideId {
    fn pretty_print(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "🧭┆guide: {}┆", self.0)
    }
}

impl Debug for GuideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.pretty_print(f)
    }
}

impl Display for GuideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.pretty_print(f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_node_id_pretty_print() {
        let id = NodeId::from(42);
        assert_eq!(format!("{id}"), "🔑┆node: 42┆");
        assert_eq!(format!("{id:?}"), "🔑┆node: 42┆");
        assert_eq!(*id, 42);
    }

    #[test]
    fn test_guide_id_pretty_print() {
        let id = GuideId::from(7);
        assert_eq!(format!("{id}"), "🧭┆guide: 7┆");
        assert_eq!(usize::from(id), 7);
    }
}
