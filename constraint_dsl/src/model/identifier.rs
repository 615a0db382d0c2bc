// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

/// Debug identifier given to every constraint that is created without one, so that it is
/// easy to tell which constraints came from this crate.
pub const DEFAULT_IDENTIFIER: &str = "MNSCRPT";

/// Suffixes that composite operations append to their base identifier, eg:
/// `"<id>_left"` or `"<id>_center_x"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum IdentifierSuffix {
    Left,
    Top,
    Right,
    Bottom,
    CenterX,
    CenterY,
    Height,
    Width,
}

#[must_use]
pub fn identifier_or_default(identifier: Option<&str>) -> String {
    identifier.unwrap_or(DEFAULT_IDENTIFIER).to_string()
}

/// `"<identifier>_<suffix>"`, using [`DEFAULT_IDENTIFIER`] when there is no identifier.
#[must_use]
pub fn suffixed_identifier(identifier: Option<&str>, suffix: IdentifierSuffix) -> String {
    format!("{}_{suffix}", identifier.unwrap_or(DEFAULT_IDENTIFIER))
}
