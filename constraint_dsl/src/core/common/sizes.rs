// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tuning parameters for stack allocated lists. Smaller is better here, since anything
//! that outgrows these sizes simply [`smallvec::SmallVec::spilled`] onto the heap.

use smallvec::SmallVec;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;

/// The largest composite (aligning all four edges) produces this many items.
pub const DEFAULT_LAYOUT_ITEMS_SIZE: usize = 4;
