/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms used to compute and work with strongly connected components.
//!
//! Components are computed by [Kosaraju's algorithm](kosaraju), which
//! requires the transpose of the graph and performs two iterative
//! depth-first visits.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use digraph::graphs::vec_graph::VecGraph;
//! use digraph_algo::sccs::*;
//!
//! let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
//! let transpose = graph.transpose();
//!
//! // Let's build the graph SCCS with Kosaraju's algorithm
//! let mut sccs = kosaraju(&graph, &transpose, no_logging![]);
//!
//! // The sink component {3} is found first
//! assert_eq!(sccs.components(), &[1, 1, 1, 0]);
//!
//! // Let's sort the SCC by size
//! let sizes = sccs.sort_by_size();
//!
//! assert_eq!(sizes, vec![3, 1].into_boxed_slice());
//! assert_eq!(sccs.components(), &[0, 0, 0, 1]);
//! ```

mod kosaraju;
pub use kosaraju::*;

/// Strongly connected components.
///
/// An instance of this structure stores the [index of the
/// component](Sccs::components) of each node. Components are numbered from 0 to
/// [`num_components`](Sccs::num_components).
///
/// Moreover, this structure makes it possible to [sort the components by
/// size](Sccs::sort_by_size) and to retrieve the [largest
/// sizes](Sccs::top_sizes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sccs {
    num_components: usize,
    components: Box<[usize]>,
}

impl Sccs {
    pub fn new(num_components: usize, components: Box<[usize]>) -> Self {
        debug_assert!(components.iter().all(|&c| c < num_components));
        Sccs {
            num_components,
            components,
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns the index of the component of a node.
    #[inline(always)]
    pub fn component(&self, node: usize) -> usize {
        self.components[node]
    }

    /// Returns whether two nodes belong to the same component, that is,
    /// whether each one is reachable from the other.
    #[inline(always)]
    pub fn same_component(&self, u: usize, v: usize) -> bool {
        self.components[u] == self.components[v]
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()];
        for &node_component in self.components() {
            sizes[node_component] += 1;
        }
        sizes.into_boxed_slice()
    }

    /// Renumbers the components by decreasing size.
    ///
    /// After a call to this method, the sizes of strongly connected components
    /// will be decreasing in the component index. The method returns the sizes
    /// of the components after the renumbering.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        let mut sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        sort_perm
            .iter()
            .enumerate()
            .for_each(|(i, &x)| inv_perm[x] = i);

        self.components
            .iter_mut()
            .for_each(|node_component| *node_component = inv_perm[*node_component]);
        sizes.sort_by(|&x, &y| y.cmp(&x));
        sizes
    }

    /// Returns the `k` largest component sizes in decreasing order.
    ///
    /// The result has always exactly `k` elements: if there are fewer than `k`
    /// components, it is padded with zeroes.
    pub fn top_sizes(&self, k: usize) -> Vec<usize> {
        let mut sizes = self.compute_sizes().into_vec();
        sizes.sort_unstable_by(|x, y| y.cmp(x));
        sizes.resize(k, 0);
        sizes
    }

    /// Returns the components as sets of nodes.
    ///
    /// Each set is sorted, and sets are sorted lexicographically, so the
    /// result does not depend on the numbering of the components: two
    /// instances describe the same partition of the nodes if and only if
    /// their partitions are equal.
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let mut sets = vec![vec![]; self.num_components];
        for (node, &component) in self.components.iter().enumerate() {
            sets[component].push(node);
        }
        sets.sort_unstable();
        sets
    }
}
