/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::vec_graph::VecGraph;
use crate::traits::RandomAccessGraph;
use std::collections::HashMap;

/// A directed graph on arbitrary integer labels, stored together with its
/// transpose.
///
/// Labels are assigned dense node identifiers in appearance order, so the
/// underlying [graph](ArcStore::graph) and [transpose](ArcStore::transpose)
/// can be passed directly to algorithms working on [`RandomAccessGraph`].
/// Every call to [`add_edge`](ArcStore::add_edge) updates both graphs, so the
/// transpose contains exactly the reversed arcs of the graph.
///
/// Lookups by label never fail: a label that does not appear in any arc has
/// no neighbors and no predecessors.
#[derive(Clone, Debug, Default)]
pub struct ArcStore {
    graph: VecGraph,
    transpose: VecGraph,
    /// The label of each node.
    labels: Vec<u64>,
    /// The node of each label.
    nodes: HashMap<u64, usize>,
}

impl ArcStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node associated with a label, creating it if necessary.
    fn node_or_insert(&mut self, label: u64) -> usize {
        let node_id = self.labels.len();
        let node = *self.nodes.entry(label).or_insert(node_id);
        if node == node_id {
            self.labels.push(label);
            self.graph.add_node(node);
            self.transpose.add_node(node);
        }
        node
    }

    /// Adds an isolated vertex, returning true if the label was not known.
    pub fn add_vertex(&mut self, label: u64) -> bool {
        let num_vertices = self.labels.len();
        self.node_or_insert(label) == num_vertices
    }

    /// Adds the arc `tail → head` to the graph and `head → tail` to the
    /// transpose.
    pub fn add_edge(&mut self, tail: u64, head: u64) {
        let u = self.node_or_insert(tail);
        let v = self.node_or_insert(head);
        self.graph.add_arc(u, v);
        self.transpose.add_arc(v, u);
    }

    /// Returns the node identifier of a label, if the label is known.
    pub fn node_id(&self, label: u64) -> Option<usize> {
        self.nodes.get(&label).copied()
    }

    /// Returns the label of a node.
    ///
    /// # Panics
    ///
    /// If `node` is not smaller than [`num_vertices`](ArcStore::num_vertices).
    pub fn label(&self, node: usize) -> u64 {
        self.labels[node]
    }

    /// Returns the labels of all nodes, indexed by node identifier.
    pub fn labels(&self) -> &[u64] {
        &self.labels
    }

    /// Returns the successors of a label in the graph, in insertion order.
    pub fn neighbors(&self, label: u64) -> impl Iterator<Item = u64> + '_ {
        self.labeled_successors(&self.graph, label)
    }

    /// Returns the successors of a label in the transpose, in insertion order.
    pub fn predecessors(&self, label: u64) -> impl Iterator<Item = u64> + '_ {
        self.labeled_successors(&self.transpose, label)
    }

    fn labeled_successors<'a>(
        &'a self,
        graph: &'a VecGraph,
        label: u64,
    ) -> impl Iterator<Item = u64> + 'a {
        let succ: &[usize] = match self.node_id(label) {
            Some(node) => graph.successor_slice(node),
            None => &[],
        };
        succ.iter().map(|&node| self.labels[node])
    }

    /// Returns an iterator over all labels appearing as a tail or a head of
    /// some arc (or added with [`add_vertex`](ArcStore::add_vertex)).
    pub fn all_vertices(&self) -> impl Iterator<Item = u64> + '_ {
        self.labels.iter().copied()
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> u64 {
        self.graph.num_arcs()
    }

    /// Returns the graph on dense node identifiers.
    pub fn graph(&self) -> &VecGraph {
        &self.graph
    }

    /// Returns the transpose of the graph on dense node identifiers.
    pub fn transpose(&self) -> &VecGraph {
        &self.transpose
    }

    /// Consumes the store, returning the graph, its transpose and the labels
    /// of the nodes.
    pub fn into_parts(self) -> (VecGraph, VecGraph, Vec<u64>) {
        (self.graph, self.transpose, self.labels)
    }
}

impl Extend<(u64, u64)> for ArcStore {
    fn extend<T: IntoIterator<Item = (u64, u64)>>(&mut self, iter: T) {
        for (tail, head) in iter {
            self.add_edge(tail, head);
        }
    }
}

impl FromIterator<(u64, u64)> for ArcStore {
    fn from_iter<T: IntoIterator<Item = (u64, u64)>>(iter: T) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
