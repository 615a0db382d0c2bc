// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shorthands that expand into several [`LayoutProxy::set`] / [`LayoutProxy::make`]
//! calls. The items come back in a fixed order so callers can destructure them by
//! position. Each primitive picks up the priority that is current when it is created.

use smallvec::smallvec;

use crate::{Attribute, ConstraintResult, EdgeInsets, IdentifierSuffix, LayoutItem,
            LayoutItems, LayoutProxy, LayoutSize, RelatedItem, equal_to,
            suffixed_identifier, to};

impl LayoutProxy<'_> {
    /// Pins all four edges to `related`, returning `[left, top, right, bottom]`. Left and
    /// top add their inset, right and bottom subtract theirs.
    ///
    /// # Errors
    ///
    /// See [`LayoutProxy::make`]. The target is resolved before the first edge, so when
    /// resolution fails nothing is installed or recorded.
    pub fn align_all_edges(
        &mut self,
        related: impl Into<RelatedItem>,
        insets: EdgeInsets,
        identifier: Option<&str>,
    ) -> ConstraintResult<LayoutItems> {
        let related = related.into();
        self.resolve_target(related)?;
        let left = self.make(
            Attribute::Left,
            equal_to(related, Attribute::Left)
                .plus(insets.left)
                .identifier(suffixed_identifier(identifier, IdentifierSuffix::Left)),
        )?;
        let top = self.make(
            Attribute::Top,
            equal_to(related, Attribute::Top)
                .plus(insets.top)
                .identifier(suffixed_identifier(identifier, IdentifierSuffix::Top)),
        )?;
        let right = self.make(
            Attribute::Right,
            equal_to(related, Attribute::Right)
                .minus(insets.right)
                .identifier(suffixed_identifier(identifier, IdentifierSuffix::Right)),
        )?;
        let bottom = self.make(
            Attribute::Bottom,
            equal_to(related, Attribute::Bottom)
                .minus(insets.bottom)
                .identifier(suffixed_identifier(identifier, IdentifierSuffix::Bottom)),
        )?;
        Ok(smallvec![left, top, right, bottom])
    }

    /// Aligns both centers with `related`, returning `[center_x, center_y]`.
    ///
    /// # Errors
    ///
    /// See [`LayoutProxy::make`]. Like [`LayoutProxy::align_all_edges`], nothing is
    /// installed when the target cannot be resolved.
    pub fn center_in(
        &mut self,
        related: impl Into<RelatedItem>,
        identifier: Option<&str>,
    ) -> ConstraintResult<LayoutItems> {
        let related = related.into();
        self.resolve_target(related)?;
        let center_x = self.make(
            Attribute::CenterX,
            equal_to(related, Attribute::CenterX)
                .identifier(suffixed_identifier(identifier, IdentifierSuffix::CenterX)),
        )?;
        let center_y = self.make(
            Attribute::CenterY,
            equal_to(related, Attribute::CenterY)
                .identifier(suffixed_identifier(identifier, IdentifierSuffix::CenterY)),
        )?;
        Ok(smallvec![center_x, center_y])
    }

    /// Fixes the subject's size, returning `[height, width]`.
    ///
    /// # Errors
    ///
    /// See [`LayoutProxy::set`].
    pub fn set_size(
        &mut self,
        size: LayoutSize,
        identifier: Option<&str>,
    ) -> ConstraintResult<LayoutItems> {
        let height = self.set(
            Attribute::Height,
            to(size.height)
                .identifier(suffixed_identifier(identifier, IdentifierSuffix::Height)),
        )?;
        let width = self.set(
            Attribute::Width,
            to(size.width).identifier(suffixed_identifier(identifier, IdentifierSuffix::Width)),
        )?;
        Ok(smallvec![height, width])
    }

    /// A one device pixel tall line: height `0.5` on high density displays, `1.0`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// See [`LayoutProxy::set`].
    pub fn make_horizontal_hairline(
        &mut self,
        identifier: Option<&str>,
    ) -> ConstraintResult<LayoutItem> {
        self.hairline(Attribute::Height, identifier)
    }

    /// A one device pixel wide line: width `0.5` on high density displays, `1.0`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// See [`LayoutProxy::set`].
    pub fn make_vertical_hairline(
        &mut self,
        identifier: Option<&str>,
    ) -> ConstraintResult<LayoutItem> {
        self.hairline(Attribute::Width, identifier)
    }

    fn hairline(
        &mut self,
        attribute: Attribute,
        identifier: Option<&str>,
    ) -> ConstraintResult<LayoutItem> {
        let thickness = if self.capabilities().is_high_density() { 0.5 } else { 1.0 };
        let relation = match identifier {
            Some(identifier) => to(thickness).identifier(identifier),
            None => to(thickness),
        };
        self.set(attribute, relation)
    }
}
