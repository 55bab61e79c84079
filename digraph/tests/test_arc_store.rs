/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use digraph::prelude::*;

#[test]
fn test_add_edge_updates_both_graphs() {
    let mut store = ArcStore::new();
    store.add_edge(7, 3);
    store.add_edge(3, 9);
    store.add_edge(7, 9);

    assert_eq!(store.neighbors(7).collect::<Vec<_>>(), vec![3, 9]);
    assert_eq!(store.predecessors(9).collect::<Vec<_>>(), vec![3, 7]);
    assert_eq!(store.predecessors(7).count(), 0);
    assert_eq!(store.num_vertices(), 3);
    assert_eq!(store.num_edges(), 3);
    assert!(is_transpose(store.graph(), store.transpose()));
}

#[test]
fn test_labels_in_appearance_order() {
    let store = ArcStore::from_iter([(100, 5), (5, 42), (42, 100)]);
    assert_eq!(store.all_vertices().collect::<Vec<_>>(), vec![100, 5, 42]);
    assert_eq!(store.node_id(100), Some(0));
    assert_eq!(store.node_id(42), Some(2));
    assert_eq!(store.node_id(1), None);
    assert_eq!(store.label(1), 5);
}

#[test]
fn test_unknown_vertices() {
    let store = ArcStore::from_iter([(1, 2)]);
    assert_eq!(store.neighbors(3).count(), 0);
    assert_eq!(store.predecessors(3).count(), 0);
    // Heads without successors are known, but have no neighbors
    assert_eq!(store.neighbors(2).count(), 0);
}

#[test]
fn test_all_vertices_is_union_of_tails_and_heads() {
    let store = ArcStore::from_iter([(1, 2), (3, 2), (2, 4)]);
    let mut vertices = store.all_vertices().collect::<Vec<_>>();
    vertices.sort();
    assert_eq!(vertices, vec![1, 2, 3, 4]);
}

#[test]
fn test_self_loops_and_duplicates() {
    let store = ArcStore::from_iter([(1, 1), (1, 2), (1, 2)]);
    assert_eq!(store.neighbors(1).collect::<Vec<_>>(), vec![1, 2, 2]);
    assert_eq!(store.predecessors(1).collect::<Vec<_>>(), vec![1]);
    assert_eq!(store.predecessors(2).collect::<Vec<_>>(), vec![1, 1]);
    assert_eq!(store.num_edges(), 3);
}

#[test]
fn test_isolated_vertex() {
    let mut store = ArcStore::new();
    assert!(store.add_vertex(12));
    assert!(!store.add_vertex(12));
    assert_eq!(store.num_vertices(), 1);
    assert_eq!(store.num_edges(), 0);
    assert_eq!(store.graph().num_nodes(), 1);
    assert_eq!(store.transpose().num_nodes(), 1);
}
