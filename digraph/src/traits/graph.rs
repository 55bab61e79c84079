/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Basic traits to access graphs.
//!
//! Nodes are always dense indices in the range `0..num_nodes()`. Arbitrary
//! node labels are handled by
//! [`ArcStore`](crate::graphs::arc_store::ArcStore), which maps them to dense
//! indices before handing graphs to algorithms.

use impl_tools::autoimpl;
use std::rc::Rc;

/// A directed graph providing random access to successor lists.
///
/// Successors are returned in insertion order; duplicate arcs and self-loops
/// are allowed, so graphs implementing this trait are, in general,
/// multigraphs.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S, Rc<S>)]
pub trait RandomAccessGraph {
    /// The type of the iterator over the successors of a node
    /// returned by [`successors`](RandomAccessGraph::successors).
    type Successors<'succ>: IntoIterator<Item = usize>
    where
        Self: 'succ;

    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs of the graph.
    fn num_arcs(&self) -> u64;

    /// Returns the successors of a node.
    ///
    /// Nodes outside the range `0..num_nodes()` have no successors.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of a node.
    fn outdegree(&self, node: usize) -> usize;

    /// Returns whether there is an arc going from `src` to `dst`.
    ///
    /// Note that the default implementation performs a linear scan.
    fn has_arc(&self, src: usize, dst: usize) -> bool {
        self.successors(src).into_iter().any(|succ| succ == dst)
    }
}

/// Returns true if `transpose` is the transpose of `graph`.
///
/// Successor lists are compared as multisets, so this function does not
/// depend on the order in which arcs were inserted.
pub fn is_transpose(graph: impl RandomAccessGraph, transpose: impl RandomAccessGraph) -> bool {
    if graph.num_nodes() != transpose.num_nodes() || graph.num_arcs() != transpose.num_arcs() {
        return false;
    }
    let num_nodes = graph.num_nodes();
    let mut forward = Vec::with_capacity(graph.num_arcs() as usize);
    let mut backward = Vec::with_capacity(transpose.num_arcs() as usize);
    for node in 0..num_nodes {
        forward.extend(graph.successors(node).into_iter().map(|succ| (node, succ)));
        backward.extend(transpose.successors(node).into_iter().map(|pred| (pred, node)));
    }
    forward.sort_unstable();
    backward.sort_unstable();
    forward == backward
}
