// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod installer;
pub mod layout_item;

// Re-export.
pub use installer::*;
pub use layout_item::*;
