/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::visits::{Sequential, depth_first::*};
use digraph::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Returns the nodes of the graph in finishing order.
///
/// The order is that of the postvisits of a depth-first visit starting, in
/// turn, from every node not yet visited, in increasing order. Every node
/// appears exactly once; the last node of the order is a node with the
/// latest finishing time, which lies in a source component of the graph.
pub fn finish_order(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing finishing order...");

    let mut visit = SeqPred::new(&graph);
    let mut order = Vec::with_capacity(num_nodes);

    visit
        .visit(0..num_nodes, |event| {
            match event {
                EventPred::Previsit { .. } => {
                    pl.light_update();
                }
                EventPred::Postvisit { node, .. } => {
                    order.push(node);
                }
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();
    debug_assert_eq!(order.len(), num_nodes);
    order.into_boxed_slice()
}
