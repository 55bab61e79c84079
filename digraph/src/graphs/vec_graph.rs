/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;

/// A mutable [`RandomAccessGraph`] implementation based on a vector of
/// vectors.
///
/// Arcs can be added in any order, and duplicate arcs and self-loops are
/// kept: the successors of a node are returned in insertion order. Adding an
/// arc whose endpoints are not yet nodes of the graph extends the node set
/// accordingly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecGraph {
    /// The number of arcs in the graph.
    num_arcs: u64,
    /// For each node, its list of successors.
    succ: Vec<Vec<usize>>,
}

impl VecGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            num_arcs: 0,
            succ: vec![],
        }
    }

    /// Creates a new empty graph with `n` nodes.
    pub fn empty(n: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Adds an isolated node to the graph and returns true if it is a new node.
    ///
    /// Since nodes are dense, all missing nodes smaller than `node` are added,
    /// too.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.succ.len();
        self.succ.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Adds an arc to the graph, adding its endpoints if necessary.
    pub fn add_arc(&mut self, u: usize, v: usize) {
        self.add_node(u.max(v));
        self.succ[u].push(v);
        self.num_arcs += 1;
    }

    /// Adds arcs from an [`IntoIterator`].
    pub fn add_arcs(&mut self, arcs: impl IntoIterator<Item = (usize, usize)>) -> &mut Self {
        for (u, v) in arcs {
            self.add_arc(u, v);
        }
        self
    }

    /// Creates a new graph from an [`IntoIterator`] of arcs.
    ///
    /// The number of nodes is one plus the largest endpoint.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        g.add_arcs(arcs);
        g
    }

    /// Returns the transpose of this graph.
    ///
    /// The transpose has the same nodes, and it has an arc `(v, u)` for each
    /// arc `(u, v)` of this graph (duplicates included).
    pub fn transpose(&self) -> Self {
        let mut t = Self::empty(self.succ.len());
        for (u, succ) in self.succ.iter().enumerate() {
            for &v in succ {
                t.succ[v].push(u);
            }
        }
        t.num_arcs = self.num_arcs;
        t
    }

    /// Shrinks the capacity of the graph to fit its current size.
    pub fn shrink_to_fit(&mut self) {
        self.succ.shrink_to_fit();
        for s in self.succ.iter_mut() {
            s.shrink_to_fit();
        }
    }

    /// Returns the successors of a node as a slice.
    ///
    /// The slice is empty if the node is not in the graph.
    #[inline(always)]
    pub fn successor_slice(&self, node: usize) -> &[usize] {
        self.succ.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl RandomAccessGraph for VecGraph {
    type Successors<'succ> = std::iter::Copied<std::slice::Iter<'succ, usize>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.successor_slice(node).iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.successor_slice(node).len()
    }
}
