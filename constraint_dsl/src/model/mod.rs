// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod attribute;
pub mod constraint;
pub mod geometry;
pub mod identifier;
pub mod priority;

// Re-export.
pub use attribute::*;
pub use constraint::*;
pub use geometry::*;
pub use identifier::*;
pub use priority::*;
