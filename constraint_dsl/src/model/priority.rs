// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          ops::Deref};

use serde::{Deserialize, Serialize};

/// Layout priority of a constraint, always in `[1, 1000]`. Use [`Priority::clamp_from`]
/// to turn an arbitrary integer into one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Priority(u16);

impl Priority {
    pub const MIN_VALUE: u16 = 1;
    pub const MAX_VALUE: u16 = 1000;

    pub const REQUIRED: Self = Self(1000);
    pub const DEFAULT_HIGH: Self = Self(750);
    pub const DEFAULT_LOW: Self = Self(250);
    pub const FITTING_SIZE_LEVEL: Self = Self(50);

    /// Returns the priority for `requested`, clamped to `[1, 1000]`, and whether it had to
    /// be clamped.
    #[must_use]
    pub fn clamp_from(requested: i32) -> (Self, bool) {
        match u16::try_from(requested) {
            Ok(value) if (Self::MIN_VALUE..=Self::MAX_VALUE).contains(&value) => {
                (Self(value), false)
            }
            _ if requested > i32::from(Self::MAX_VALUE) => (Self::REQUIRED, true),
            _ => (Self(Self::MIN_VALUE), true),
        }
    }

    #[must_use]
    pub fn value(self) -> u16 { self.0 }
}

impl Default for Priority {
    fn default() -> Self { Self::REQUIRED }
}

impl Deref for Priority {
    type Target = u16;

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "@{}", self.0) }
}
