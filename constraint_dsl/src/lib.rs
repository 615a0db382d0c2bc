// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_constraint_dsl
//!
//! A small builder DSL for layout constraints. You describe intents like "pin all edges
//! to the parent with an 8pt inset" or "be half as wide as the sidebar", and the builder
//! turns each one into a linear relation between two layout attributes:
//!
//! ```text
//! subject.attribute <relation> related.attribute * multiplier + constant   @priority
//! ```
//!
//! Every relation is installed on the node that has to own it. For a relation between
//! two nodes that is their nearest common ancestor in the [`ViewTree`]; for a relation
//! to a constant it is the subject itself. Solving the constraints is somebody else's
//! job, this crate stops once each constraint sits on the right node.
//!
//! # Example
//!
//! ```
//! use r3bl_constraint_dsl::{Attribute, CommonResult, EdgeInsets, LayoutItemsExt,
//!                           LayoutSize, ViewTree, equal_to, layout, ok};
//!
//! fn main() -> CommonResult<()> {
//!     // screen
//!     // ├── avatar
//!     // └── card
//!     let mut tree = ViewTree::new();
//!     let screen = tree.add_root();
//!     let avatar = tree.add_child(screen)?;
//!     let card = tree.add_child(screen)?;
//!
//!     let items = layout(&mut tree, card, None, |it| {
//!         it.align_all_edges(screen, EdgeInsets::uniform(16.0), Some("card"))?;
//!         it.set_priority_default_high();
//!         it.make(Attribute::Top, equal_to(avatar, Attribute::Bottom).plus(8.0))?;
//!         ok!()
//!     })?
//!     .into_items();
//!
//!     let avatar_items = layout(&mut tree, avatar, None, |it| {
//!         it.set_size(LayoutSize::new(48.0, 48.0), Some("avatar"))?;
//!         ok!()
//!     })?
//!     .into_items();
//!
//!     // Relations between siblings live on their parent, sizes live on the node.
//!     assert_eq!(tree.constraints_on(screen).len(), 5);
//!     assert_eq!(tree.constraints_on(avatar).len(), 2);
//!     assert_eq!(items[1].constraint.identifier, "card_top");
//!
//!     avatar_items.deactivate_all(&mut tree);
//!     assert!(!tree.is_active(&avatar_items[0]));
//!     ok!()
//! }
//! ```
//!
//! # Modules
//!
//! - [`model`]: attributes, relations, priorities, identifiers and the [`Constraint`]
//!   value itself.
//! - [`tree`]: the [`ViewTree`] arena and [`find_common_ancestor`].
//! - [`install`]: installing constraints on nodes, and their lifecycle.
//! - [`proxy`]: the [`LayoutProxy`] builder, its composites, and [`layout`].
//! - [`core`]: errors ([`ConstraintError`]) and logging ([`TracingConfig`]).
//!
//! # Logging
//!
//! Diagnostics go through [`tracing`]. Out of range priorities are reported with
//! [`tracing::warn!`]. Flip [`DEBUG_CONSTRAINT_DSL`] to see every install and every
//! target resolution at debug level. If your app doesn't set up a subscriber itself,
//! use [`try_initialize_logging_global`].

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Enables debug logging of target resolution, installs and tree mutations.
pub const DEBUG_CONSTRAINT_DSL: bool = false;

// Attach modules.
pub mod core;
pub mod install;
pub mod model;
pub mod proxy;
pub mod tree;

// Re-export.
pub use crate::core::*;
pub use install::*;
pub use model::*;
pub use proxy::*;
pub use tree::*;
