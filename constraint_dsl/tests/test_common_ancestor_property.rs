// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Checks [`find_common_ancestor`] against a brute force oracle on random forests.

use pretty_assertions::assert_eq;
use r3bl_constraint_dsl::{CommonResult, NodeId, ViewTree, find_common_ancestor, ok};
use rand::{Rng, SeedableRng, rngs::StdRng};

const SEED: u64 = 0x5EED_CAFE;
const FOREST_COUNT: usize = 64;
const MAX_NODES: usize = 40;

/// Each new node is either a new root (roughly 1 in 8) or a child of a random existing
/// node. Returns the tree and every node in creation order.
fn create_random_forest(rng: &mut StdRng) -> CommonResult<(ViewTree, Vec<NodeId>)> {
    let mut tree = ViewTree::new();
    let mut nodes = vec![tree.add_root()];
    let node_count = rng.random_range(1..=MAX_NODES);

    while nodes.len() < node_count {
        let node = if rng.random_ratio(1, 8) {
            tree.add_root()
        } else {
            let parent = nodes[rng.random_range(0..nodes.len())];
            tree.add_child(parent)?
        };
        nodes.push(node);
    }

    ok!((tree, nodes))
}

fn depth(tree: &ViewTree, node: NodeId) -> usize { tree.ancestors(node).count() }

/// The deepest node that is an ancestor-or-self of both `a` and `b`, found by checking
/// every node in the tree.
fn oracle(tree: &ViewTree, nodes: &[NodeId], a: NodeId, b: NodeId) -> Option<NodeId> {
    nodes
        .iter()
        .copied()
        .filter(|candidate| {
            tree.is_ancestor_or_self(*candidate, a) && tree.is_ancestor_or_self(*candidate, b)
        })
        .max_by_key(|candidate| depth(tree, *candidate))
}

#[test]
fn test_matches_oracle_on_random_forests() -> CommonResult<()> {
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..FOREST_COUNT {
        let (tree, nodes) = create_random_forest(&mut rng)?;
        for &a in &nodes {
            for &b in &nodes {
                let expected = oracle(&tree, &nodes, a, b);
                let actual = find_common_ancestor(&tree, a, Some(b));
                assert_eq!(actual, expected, "a: {a}, b: {b}");
            }
        }
    }

    ok!()
}

#[test]
fn test_result_is_shared_and_nearest() -> CommonResult<()> {
    let mut rng = StdRng::seed_from_u64(SEED ^ 1);

    for _ in 0..FOREST_COUNT {
        let (tree, nodes) = create_random_forest(&mut rng)?;
        let a = nodes[rng.random_range(0..nodes.len())];
        let b = nodes[rng.random_range(0..nodes.len())];

        match find_common_ancestor(&tree, a, Some(b)) {
            Some(ancestor) => {
                assert!(tree.is_ancestor_or_self(ancestor, a));
                assert!(tree.is_ancestor_or_self(ancestor, b));
                // None of its children is also shared.
                for child in tree.children_of(ancestor) {
                    assert!(
                        !(tree.is_ancestor_or_self(*child, a)
                            && tree.is_ancestor_or_self(*child, b))
                    );
                }
            }
            None => {
                let root_of = |node: NodeId| tree.ancestors(node).last();
                assert_ne!(root_of(a), root_of(b));
            }
        }
    }

    ok!()
}

#[test]
fn test_is_symmetric_and_handles_missing_second_node() -> CommonResult<()> {
    let mut rng = StdRng::seed_from_u64(SEED ^ 2);
    let (tree, nodes) = create_random_forest(&mut rng)?;

    for &a in &nodes {
        assert_eq!(find_common_ancestor(&tree, a, None), Some(a));
        for &b in &nodes {
            assert_eq!(
                find_common_ancestor(&tree, a, Some(b)),
                find_common_ancestor(&tree, b, Some(a))
            );
        }
    }

    ok!()
}
