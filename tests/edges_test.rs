//! Tests for inter-layer edge derivation

mod common;

use std::collections::HashSet;

use common::{build, Script, CHAIN, INTERLEAVED, SAMPLE, WIDE};
use generational_arena::Index;
use layertree::domain::{derive_edges, edge_groups};
use rstest::rstest;

#[rstest]
#[case::sample(SAMPLE)]
#[case::chain(CHAIN)]
#[case::wide(WIDE)]
#[case::interleaved(INTERLEAVED)]
fn given_tree_when_deriving_edges_then_matches_pairwise_scan(#[case] script: Script) {
    let tree = build(script);

    let edges = derive_edges(&tree);

    // brute force over every node pair of adjacent layers
    let mut expected = HashSet::new();
    for (pair, (upper, lower)) in tree.layers().pairs().enumerate() {
        for &n1 in upper {
            for &n2 in lower {
                if tree.get(n2).unwrap().parent == Some(n1) {
                    expected.insert((pair, n1, n2));
                }
            }
        }
    }
    let derived: HashSet<(usize, Index, Index)> = edges
        .iter()
        .map(|edge| (edge.layer_pair, edge.parent, edge.child))
        .collect();

    assert_eq!(edges.len(), derived.len(), "no duplicate edges");
    assert_eq!(derived, expected);
    assert_eq!(edges.len(), tree.len() - 1);
}

#[test]
fn given_interleaved_tree_when_grouping_edges_then_one_group_per_layer_pair() {
    let tree = build(INTERLEAVED);

    let groups = edge_groups(&tree);

    // R=0 M=1 L=2 N=3 X=4 Z=5 W=6 Y=7
    assert_eq!(
        groups,
        vec![
            vec![(0, 1), (0, 2), (0, 3)],
            vec![(1, 4), (1, 5), (2, 6)],
            vec![(4, 7)],
        ]
    );
}

#[test]
fn given_chain_when_grouping_edges_then_each_group_has_one_edge() {
    let tree = build(CHAIN);

    let groups = edge_groups(&tree);

    assert_eq!(groups, vec![vec![(0, 1)], vec![(1, 2)], vec![(2, 3)]]);
}
