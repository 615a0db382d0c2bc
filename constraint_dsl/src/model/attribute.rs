// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Positional attribute of a node (or guide) that a constraint refers to. Used both as
/// the subject attribute and as the related attribute of a relation.
///
/// [`Attribute::NotAnAttribute`] is the related attribute of a constraint that compares
/// the subject attribute to a plain constant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Attribute {
    Left,
    Right,
    Top,
    Bottom,
    Leading,
    Trailing,
    Width,
    Height,
    CenterX,
    CenterY,
    LastBaseline,
    FirstBaseline,
    LeftMargin,
    RightMargin,
    TopMargin,
    BottomMargin,
    LeadingMargin,
    TrailingMargin,
    CenterXWithinMargins,
    CenterYWithinMargins,
    NotAnAttribute,
}

impl Attribute {
    /// Width and height are the only attributes that make sense without a related item.
    #[must_use]
    pub fn is_dimension(self) -> bool { matches!(self, Attribute::Width | Attribute::Height) }

    #[must_use]
    pub fn is_margin_relative(self) -> bool {
        matches!(
            self,
            Attribute::LeftMargin
                | Attribute::RightMargin
                | Attribute::TopMargin
                | Attribute::BottomMargin
                | Attribute::LeadingMargin
                | Attribute::TrailingMargin
                | Attribute::CenterXWithinMargins
                | Attribute::CenterYWithinMargins
        )
    }
}

/// Comparison operator of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Relation {
    #[strum(to_string = "==")]
    Equal,
    #[strum(to_string = ">=")]
    GreaterThanOrEqual,
    #[strum(to_string = "<=")]
    LessThanOrEqual,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;

    #[test_case(Attribute::Left, "Left")]
    #[test_case(Attribute::CenterX, "CenterX")]
    #[test_case(Attribute::LastBaseline, "LastBaseline")]
    #[test_case(Attribute::CenterYWithinMargins, "CenterYWithinMargins")]
    #[test_case(Attribute::NotAnAttribute, "NotAnAttribute")]
    fn test_attribute_display(attribute: Attribute, expected: &str) {
        assert_eq!(attribute.to_string(), expected);
    }

    #[test]
    fn test_relation_display() {
        assert_eq!(Relation::Equal.to_string(), "==");
        assert_eq!(Relation::GreaterThanOrEqual.to_string(), ">=");
        assert_eq!(Relation::LessThanOrEqual.to_string(), "<=");
    }

    #[test]
    fn test_attribute_kinds() {
        let dimensions = Attribute::iter().filter(|it| it.is_dimension()).count();
        let margins = Attribute::iter().filter(|it| it.is_margin_relative()).count();
        assert_eq!(Attribute::iter().count(), 21);
        assert_eq!(dimensions, 2);
        assert_eq!(margins, 8);
    }
}
