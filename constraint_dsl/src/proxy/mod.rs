// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod capabilities;
pub mod composites;
pub mod layout_proxy;
pub mod layout_scope;
pub mod relation_args;

// Re-export.
pub use capabilities::*;
pub use layout_proxy::*;
pub use layout_scope::*;
pub use relation_args::*;
