/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::{
    finish_order,
    visits::{
        Sequential,
        depth_first::{EventNoPred, SeqNoPred},
    },
};
use digraph::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm.
///
/// A first visit of `transpose` computes a [finishing
/// order](crate::finish_order()); then a second visit of `graph` starts from
/// the nodes in reverse finishing order, and each visit tree is a component.
///
/// Components are numbered in the order in which they are found, which is a
/// reverse topological order of the condensation of `graph`: component 0 has
/// no arcs towards other components.
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `transpose`: the transpose of `graph`.
///
/// * `pl`: a progress logger.
pub fn kosaraju(
    graph: impl RandomAccessGraph,
    transpose: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Sccs {
    let num_nodes = graph.num_nodes();
    debug_assert_eq!(num_nodes, transpose.num_nodes());

    let order = finish_order(&transpose, pl);

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let mut num_components = 0;
    let mut visit = SeqNoPred::new(&graph);
    let mut components = vec![0; num_nodes].into_boxed_slice();

    visit
        .visit(order.iter().rev().copied(), |event| {
            match event {
                EventNoPred::Previsit { node, .. } => {
                    pl.light_update();
                    components[node] = num_components;
                }
                EventNoPred::Done { .. } => {
                    num_components += 1;
                }
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();
    log::debug!("Found {} strongly connected components", num_components);

    Sccs::new(num_components, components)
}
