// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, DEBUG_CONSTRAINT_DSL, DisplayCapabilities, LayoutItem,
            LayoutProxy, NodeId, STANDARD_DISPLAY, ViewTree, ok};

/// Opens a builder scope on `subject`, runs `callback` with it, and hands the builder
/// (and the [`LayoutItem`]s it collected) back.
///
/// When `capabilities` is [`None`], a standard density display is assumed.
///
/// If `callback` returns an error, every constraint it already installed is uninstalled
/// before the error is returned, so a failed scope leaves the tree as it found it
/// (except for the subject's `uses_constraint_layout` flag).
///
/// ```
/// use r3bl_constraint_dsl::{Attribute, CommonResult, ViewTree, equal_to, layout, ok, to};
///
/// fn main() -> CommonResult<()> {
///     let mut tree = ViewTree::new();
///     let root = tree.add_root();
///     let title = tree.add_child(root)?;
///     let subtitle = tree.add_child(root)?;
///
///     let proxy = layout(&mut tree, subtitle, None, |it| {
///         it.set(Attribute::Height, to(20.0))?;
///         it.make(Attribute::Top, equal_to(title, Attribute::Bottom).plus(8.0))?;
///         ok!()
///     })?;
///     let items = proxy.into_items();
///
///     assert_eq!(items.len(), 2);
///     assert_eq!(items[0].target, subtitle);
///     assert_eq!(items[1].target, root);
///     ok!()
/// }
/// ```
///
/// # Errors
///
/// - [`crate::ConstraintError::NodeNotFound`] if `subject` is not in `tree`.
/// - Whatever `callback` returns.
pub fn layout<'a, F>(
    tree: &'a mut ViewTree,
    subject: NodeId,
    capabilities: Option<&'a dyn DisplayCapabilities>,
    callback: F,
) -> CommonResult<LayoutProxy<'a>>
where
    F: FnOnce(&mut LayoutProxy<'a>) -> CommonResult<()>,
{
    let standard_display: &'a dyn DisplayCapabilities = &STANDARD_DISPLAY;
    let capabilities = capabilities.unwrap_or(standard_display);
    let mut proxy = LayoutProxy::new(tree, subject, capabilities)?;

    if let Err(report) = callback(&mut proxy) {
        let rolled_back = proxy.roll_back();
        tracing::warn!(
            message = "⚠️ Layout scope failed, uninstalled its constraints",
            subject = %subject,
            rolled_back = rolled_back,
            error = %report
        );
        return Err(report);
    }

    DEBUG_CONSTRAINT_DSL.then(|| {
        tracing::debug!(
            message = "✅ layout scope done",
            subject = %subject,
            items = proxy.items().len()
        );
    });

    Ok(proxy)
}

/// Same as [`layout`], except the collected items replace the contents of `items`
/// instead of being returned with the builder. `items` is left untouched on error.
///
/// # Errors
///
/// See [`layout`].
pub fn layout_into<'a, F>(
    tree: &'a mut ViewTree,
    subject: NodeId,
    items: &mut Vec<LayoutItem>,
    capabilities: Option<&'a dyn DisplayCapabilities>,
    callback: F,
) -> CommonResult<()>
where
    F: FnOnce(&mut LayoutProxy<'a>) -> CommonResult<()>,
{
    let proxy = layout(tree, subject, capabilities, callback)?;
    items.clear();
    items.extend(proxy.into_items());
    ok!()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Attribute, ConstraintError, DisplayScale, equal_to, to};

    static HIGH_DENSITY: DisplayScale = DisplayScale::HIGH_DENSITY;

    #[test]
    fn test_layout_uses_standard_display_by_default() -> CommonResult<()> {
        let mut tree = ViewTree::new();
        let node = tree.add_root();

        let proxy = layout(&mut tree, node, None, |it| {
            it.make_horizontal_hairline(None)?;
            ok!()
        })?;
        assert!(!proxy.capabilities().is_high_density());
        assert_eq!(proxy.items()[0].constraint.constant, 1.0);
        drop(proxy);

        let proxy = layout(&mut tree, node, Some(&HIGH_DENSITY), |it| {
            it.make_horizontal_hairline(None)?;
            ok!()
        })?;
        assert_eq!(proxy.items()[0].constraint.constant, 0.5);
        ok!()
    }

    #[test]
    fn test_layout_missing_subject() {
        let mut tree = ViewTree::new();
        let result = layout(&mut tree, NodeId(0), None, |_| ok!());
        let report = result.unwrap_err();
        assert_eq!(
            report.downcast_ref::<ConstraintError>(),
            Some(&ConstraintError::NodeNotFound { node: NodeId(0) })
        );
    }

    #[test]
    fn test_failed_scope_rolls_back() -> CommonResult<()> {
        let mut tree = ViewTree::new();
        let root = tree.add_root();
        let child = tree.add_child(root)?;
        let stranger = tree.add_root();

        let result = layout(&mut tree, child, None, |it| {
            it.set(Attribute::Width, to(10.0))?;
            it.make(Attribute::Left, equal_to(root, Attribute::Left))?;
            it.make(Attribute::Left, equal_to(stranger, Attribute::Left))?;
            ok!()
        });

        let report = result.unwrap_err();
        assert_eq!(
            report.downcast_ref::<ConstraintError>(),
            Some(&ConstraintError::NoCommonAncestor {
                subject: child,
                related: stranger
            })
        );
        assert_eq!(tree.constraint_count(), 0);
        ok!()
    }

    #[test]
    fn test_layout_into_replaces_items() -> CommonResult<()> {
        let mut tree = ViewTree::new();
        let node = tree.add_root();
        let mut items = vec![];

        layout_into(&mut tree, node, &mut items, None, |it| {
            it.set(Attribute::Width, to(1.0))?;
            it.set(Attribute::Height, to(2.0))?;
            ok!()
        })?;
        assert_eq!(items.len(), 2);

        layout_into(&mut tree, node, &mut items, None, |it| {
            it.set(Attribute::Width, to(3.0))?;
            ok!()
        })?;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].constraint.constant, 3.0);

        let result = layout_into(&mut tree, node, &mut items, None, |_| {
            Err(miette::miette!("nope"))
        });
        assert!(result.is_err());
        assert_eq!(items.len(), 1);
        ok!()
    }
}
