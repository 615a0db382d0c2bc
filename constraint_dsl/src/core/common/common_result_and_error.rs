// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors produced while building and installing constraints.
//!
//! There are two result types:
//! 1. [`ConstraintResult`] is returned by every builder operation, so callers can match
//!    on the exact [`ConstraintError`] variant.
//! 2. [`CommonResult`] is [`miette::Result`], used by the builder scope and its
//!    callback. A [`ConstraintError`] converts into it with `?`.

use crate::{GuideId, NodeId};

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
pub type CommonResult<T> = miette::Result<T>;

/// Result of a single builder, resolver or installer operation.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Nothing is ever left half installed when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ConstraintError {
    #[error("🌳 Couldn't find a common ancestor for {subject} and {related}")]
    #[diagnostic(
        code(r3bl_constraint_dsl::no_common_ancestor),
        help(
            "Both nodes have to be part of the same tree before they can be related. \
             Add them under a shared root, or pass an explicit target with `on(..)`"
        )
    )]
    NoCommonAncestor { subject: NodeId, related: NodeId },

    #[error("🧭 {guide} is not anchored to any node, so it can't be related to")]
    #[diagnostic(
        code(r3bl_constraint_dsl::guide_without_owner),
        help("Create the guide with `ViewTree::add_guide(owner)`")
    )]
    GuideWithoutOwner { guide: GuideId },

    #[error("🔍 {node} does not exist in this tree")]
    #[diagnostic(code(r3bl_constraint_dsl::node_not_found))]
    NodeNotFound { node: NodeId },

    #[error("🔍 {guide} does not exist in this tree")]
    #[diagnostic(code(r3bl_constraint_dsl::guide_not_found))]
    GuideNotFound { guide: GuideId },

    #[error("🔁 Moving {node} under {new_parent} would create a cycle")]
    #[diagnostic(
        code(r3bl_constraint_dsl::would_create_cycle),
        help("A node can't become a child of itself or of one of its descendants")
    )]
    WouldCreateCycle { node: NodeId, new_parent: NodeId },
}
