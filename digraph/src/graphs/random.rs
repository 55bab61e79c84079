/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::vec_graph::VecGraph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Erdös-Rényi random graphs.
///
/// The Erdös-Rényi random graph model is a simple model for generating random
/// graphs. It is parameterized by the number of nodes `n` and the probability
/// `p` of an arc between any two nodes. In this implementation, loops are never
/// included.
///
/// The same seed always yields the same graph. Generation takes time quadratic
/// in `n`.
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi random graph, given the number of
    /// nodes, the probability of an arc between any two nodes, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Returns an iterator over the arcs of the graph, in lexicographical
    /// order.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (0..self.n)
            .flat_map(move |x| (0..self.n).map(move |y| (x, y)))
            .filter(|&(x, y)| x != y)
            .filter(move |_| rng.random_bool(self.p))
    }

    /// Stores the graph in a [`VecGraph`] with exactly `n` nodes.
    pub fn to_vec_graph(&self) -> VecGraph {
        let mut graph = VecGraph::empty(self.n);
        graph.add_arcs(self.arcs());
        graph
    }
}
