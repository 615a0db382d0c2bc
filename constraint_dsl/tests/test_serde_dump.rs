// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use pretty_assertions::assert_eq;
use r3bl_constraint_dsl::{Attribute, CommonResult, LayoutItem, ViewTree, equal_to,
                          layout, ok};
use serde_json::json;

#[test]
fn test_layout_items_dump_to_json() -> CommonResult<()> {
    let mut tree = ViewTree::new();
    let root = tree.add_root();
    let left = tree.add_child(root)?;
    let right = tree.add_child(root)?;

    let items = layout(&mut tree, left, None, |it| {
        it.set_priority(900);
        it.make(
            Attribute::Width,
            equal_to(right, Attribute::Width)
                .times(0.5)
                .identifier("half"),
        )?;
        ok!()
    })?
    .into_items();

    let dump = serde_json::to_value(&items[0]).into_diagnostic()?;
    assert_eq!(
        dump,
        json!({
            "id": 0,
            "constraint": {
                "subject": 1,
                "attribute": "Width",
                "relation": "Equal",
                "related": { "Node": 2 },
                "related_attribute": "Width",
                "multiplier": 0.5,
                "constant": 0.0,
                "priority": 900,
                "identifier": "half"
            },
            "target": 0
        })
    );

    let text = serde_json::to_string(&items).into_diagnostic()?;
    let parsed: Vec<LayoutItem> =
        serde_json::from_str(&text).into_diagnostic()?;
    assert_eq!(parsed, items);
    ok!()
}
