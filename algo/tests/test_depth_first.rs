/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use digraph::prelude::VecGraph;
use digraph::traits::RandomAccessGraph;
use digraph_algo::{
    finish_order,
    prelude::depth_first,
    visits::{Sequential, StoppedWhenDone},
};
use dsi_progress_logger::no_logging;
use no_break::NoBreak;
use std::ops::ControlFlow::{Break, Continue};

#[test]
fn test_depth() {
    let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
    depth_first::SeqNoPred::new(&graph)
        .visit([0], |event| {
            if let depth_first::EventNoPred::Previsit { node, depth, .. } = event {
                assert_eq!(node, depth);
            }
            Continue(())
        })
        .continue_value_no_break();
}

#[test]
fn test_events() {
    let graph = VecGraph::from_arcs([(0, 1), (1, 0), (1, 2)]);
    let mut events = vec![];
    depth_first::SeqPred::new(&graph)
        .visit(0..graph.num_nodes(), |event| {
            events.push(event);
            Continue(())
        })
        .continue_value_no_break();

    use depth_first::EventPred::*;
    assert_eq!(
        events,
        vec![
            Init { root: 0 },
            Previsit { node: 0, parent: 0, root: 0, depth: 0 },
            Previsit { node: 1, parent: 0, root: 0, depth: 1 },
            Revisit { node: 0, pred: 1, root: 0, depth: 2 },
            Previsit { node: 2, parent: 1, root: 0, depth: 2 },
            Postvisit { node: 2, parent: 1, root: 0, depth: 2 },
            Postvisit { node: 1, parent: 0, root: 0, depth: 1 },
            Postvisit { node: 0, parent: 0, root: 0, depth: 0 },
            Done { root: 0 },
        ]
    );
}

#[test]
fn test_long_path() {
    // A path this long would overflow the stack of a recursive visit
    let n = 1_000_000;
    let graph = VecGraph::from_arcs((0..n - 1).map(|i| (i, i + 1)));
    let order = finish_order(&graph, no_logging![]);
    assert_eq!(order.len(), n);
    assert_eq!(order[0], n - 1);
    assert_eq!(order[n - 1], 0);
}

#[test]
fn test_finish_order() {
    let graph = VecGraph::from_arcs([(0, 1), (1, 2), (1, 3), (0, 3), (4, 0)]);
    assert_eq!(
        finish_order(&graph, no_logging![]),
        vec![2, 3, 1, 0, 4].into_boxed_slice()
    );
    let graph = VecGraph::empty(3);
    assert_eq!(
        finish_order(&graph, no_logging![]),
        vec![0, 1, 2].into_boxed_slice()
    );
}

#[test]
fn test_self_loop() {
    let graph = VecGraph::from_arcs([(0, 0)]);
    let mut revisits = 0;
    depth_first::SeqNoPred::new(&graph)
        .visit([0], |event| {
            if let depth_first::EventNoPred::Revisit { node, .. } = event {
                assert_eq!(node, 0);
                revisits += 1;
            }
            Continue(())
        })
        .continue_value_no_break();
    assert_eq!(revisits, 1);
}

#[test]
fn test_stop() {
    let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 3), (3, 4)]);
    let mut visit = depth_first::SeqNoPred::new(&graph);
    let result = visit.visit([0], |event| {
        if let depth_first::EventNoPred::Previsit { node: 2, .. } = event {
            return Break(StoppedWhenDone);
        }
        Continue(())
    });
    assert!(result.is_break());
    assert!(visit.known(2));
    assert!(!visit.known(3));

    visit.reset();
    assert!(!visit.known(0));
    let mut count = 0;
    visit
        .visit([0], |event| {
            if let depth_first::EventNoPred::Previsit { .. } = event {
                count += 1;
            }
            Continue(())
        })
        .continue_value_no_break();
    assert_eq!(count, 5);
}

#[test]
fn test_reset_pred() {
    let graph = VecGraph::from_arcs([(0, 1), (1, 0), (2, 1)]);
    let mut visit = depth_first::SeqPred::new(&graph);
    for _ in 0..2 {
        let mut postvisits = vec![];
        visit
            .visit([2, 0], |event| {
                if let depth_first::EventPred::Postvisit { node, .. } = event {
                    postvisits.push(node);
                }
                Continue(())
            })
            .continue_value_no_break();
        assert_eq!(postvisits, vec![0, 1, 2]);
        assert!((0..3).all(|node| visit.known(node)));
        visit.reset();
        assert!((0..3).all(|node| !visit.known(node)));
    }
}

#[test]
fn test_filter() {
    let graph = VecGraph::from_arcs([(0, 1), (1, 2), (0, 3), (3, 2)]);
    let mut visit = depth_first::SeqPred::new(&graph);
    let mut visited = vec![];
    visit
        .visit_filtered(
            [0],
            |event| {
                if let depth_first::EventPred::Previsit { node, .. } = event {
                    visited.push(node);
                }
                Continue(())
            },
            |depth_first::FilterArgsPred { node, pred, .. }| !(node == 2 && pred == 1),
        )
        .continue_value_no_break();
    assert_eq!(visited, vec![0, 1, 3, 2]);
}
