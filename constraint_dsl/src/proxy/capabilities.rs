// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// What the builder needs to know about the display it lays out for. Only the hairline
/// composites consult it.
///
/// Any `Fn() -> bool` closure is a [`DisplayCapabilities`], which makes it easy to pin
/// the answer in tests.
pub trait DisplayCapabilities {
    fn is_high_density(&self) -> bool;
}

impl<F> DisplayCapabilities for F
where
    F: Fn() -> bool,
{
    fn is_high_density(&self) -> bool { self() }
}

/// Ratio of physical pixels to layout points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    pub scale: f64,
}

impl DisplayScale {
    pub const STANDARD: Self = Self { scale: 1.0 };
    pub const HIGH_DENSITY: Self = Self { scale: 2.0 };
}

impl Default for DisplayScale {
    fn default() -> Self { Self::STANDARD }
}

impl DisplayCapabilities for DisplayScale {
    fn is_high_density(&self) -> bool { self.scale > 1.0 }
}

/// Used by [`crate::layout`] when no capabilities are passed in.
pub static STANDARD_DISPLAY: DisplayScale = DisplayScale::STANDARD;
