// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ancestors;
pub mod node_id;
pub mod view_tree;

// Re-export.
pub use ancestors::*;
pub use node_id::*;
pub use view_tree::*;
