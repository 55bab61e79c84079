/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::visits::{
    Sequential,
    depth_first::{EventNoPred, EventPred, FilterArgsNoPred, FilterArgsPred},
};
use digraph::traits::RandomAccessGraph;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// A depth-first visit which does not keep track of predecessors.
pub type SeqNoPred<'a, G> = SeqIter<'a, G, (), false>;

/// A depth-first visit which keeps track of predecessors and generates
/// postvisit events.
pub type SeqPred<'a, G> = SeqIter<'a, G, usize, true>;

/// Sequential depth-first visits.
///
/// This is an iterative implementation that does not need a large stack size:
/// the visit path is kept in an explicit stack of successor iterators, so
/// visits of graphs with millions of nodes along a single path are fine.
///
/// There are two versions of the visit, which are type aliases to the same
/// common implementation: [`SeqNoPred`] and [`SeqPred`] (the generic
/// implementation should not be instantiated by the user).
///
/// * [`SeqNoPred`] does not keep track of predecessors; it can be used, for
///   example, to compute reachability information or to label the nodes
///   reachable from a root.
/// * [`SeqPred`] keeps track of predecessors and generates
///   [postvisit events](EventPred::Postvisit); it can be used, for example, to
///   compute a [finishing order](crate::finish_order()).
///
/// Both visits use one bit per node to remember known nodes; the stack
/// contains one iterator (and, for [`SeqPred`], one predecessor) for each node
/// on the visit path.
///
/// # Examples
///
/// Let us compute the finishing order of a visit:
///
/// ```
/// use digraph::graphs::vec_graph::VecGraph;
/// use digraph::traits::RandomAccessGraph;
/// use digraph_algo::visits::*;
/// use digraph_algo::visits::depth_first::*;
/// use no_break::NoBreak;
/// use std::ops::ControlFlow::Continue;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (1, 3), (0, 3)]);
/// let mut visit = SeqPred::new(&graph);
/// let mut finished = Vec::with_capacity(graph.num_nodes());
///
/// visit.visit(
///     0..graph.num_nodes(),
///     |event| {
///         if let EventPred::Postvisit { node, .. } = event {
///             finished.push(node);
///         }
///         Continue(())
///     }
/// ).continue_value_no_break();
///
/// assert_eq!(finished, vec![2, 3, 1, 0]);
/// ```
pub struct SeqIter<'a, G: RandomAccessGraph, P, const PRED: bool> {
    graph: &'a G,
    /// Entries on this stack represent the iterator on the successors of a node
    /// and the parent of the node. This approach makes it possible to avoid
    /// storing both the current and the parent node in the stack.
    stack: Vec<(<G::Successors<'a> as IntoIterator>::IntoIter, P)>,
    /// One bit per node, set when the node is discovered.
    known: BitVec,
}

impl<'a, G: RandomAccessGraph, P, const PRED: bool> SeqIter<'a, G, P, PRED> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> SeqIter<'a, G, P, PRED> {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            stack: Vec::with_capacity(16),
            known: BitVec::new(num_nodes),
        }
    }

    /// Returns whether a node has already been discovered by the visit.
    #[inline(always)]
    pub fn known(&self, node: usize) -> bool {
        self.known[node]
    }
}

impl<G: RandomAccessGraph> Sequential<EventPred> for SeqIter<'_, G, usize, true> {
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, EventPred) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, FilterArgsPred) -> bool,
    >(
        &mut self,
        roots: R,
        mut init: T,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        let known = &mut self.known;

        for root in roots {
            if known[root]
                || !filter(
                    &mut init,
                    FilterArgsPred {
                        node: root,
                        pred: root,
                        root,
                        depth: 0,
                    },
                )
            {
                // We ignore the node: it might be visited later
                continue;
            }

            callback(&mut init, EventPred::Init { root })?;

            known.set(root, true);
            callback(
                &mut init,
                EventPred::Previsit {
                    node: root,
                    parent: root,
                    root,
                    depth: 0,
                },
            )?;

            self.stack
                .push((self.graph.successors(root).into_iter(), root));

            // The node whose successors are enumerated by the iterator on top
            // of the stack; its parent is stored alongside the iterator.
            let mut curr = root;

            'recurse: loop {
                let depth = self.stack.len();
                let Some((iter, parent)) = self.stack.last_mut() else {
                    callback(&mut init, EventPred::Done { root })?;
                    break;
                };

                for succ in iter {
                    if known[succ] {
                        callback(
                            &mut init,
                            EventPred::Revisit {
                                node: succ,
                                pred: curr,
                                root,
                                depth,
                            },
                        )?;
                    } else if filter(
                        &mut init,
                        FilterArgsPred {
                            node: succ,
                            pred: curr,
                            root,
                            depth,
                        },
                    ) {
                        known.set(succ, true);
                        callback(
                            &mut init,
                            EventPred::Previsit {
                                node: succ,
                                parent: curr,
                                root,
                                depth,
                            },
                        )?;
                        self.stack
                            .push((self.graph.successors(succ).into_iter(), curr));
                        curr = succ;
                        continue 'recurse;
                    } // Else we ignore the node: it might be visited later
                }

                callback(
                    &mut init,
                    EventPred::Postvisit {
                        node: curr,
                        parent: *parent,
                        root,
                        depth: depth - 1,
                    },
                )?;

                // Going up one level: the parent becomes the current node
                curr = *parent;
                self.stack.pop();
            }
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.known.fill(false);
    }
}

impl<G: RandomAccessGraph> Sequential<EventNoPred> for SeqIter<'_, G, (), false> {
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, EventNoPred) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, FilterArgsNoPred) -> bool,
    >(
        &mut self,
        roots: R,
        mut init: T,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        let known = &mut self.known;

        for root in roots {
            if known[root]
                || !filter(
                    &mut init,
                    FilterArgsNoPred {
                        node: root,
                        root,
                        depth: 0,
                    },
                )
            {
                continue;
            }

            callback(&mut init, EventNoPred::Init { root })?;

            known.set(root, true);
            callback(
                &mut init,
                EventNoPred::Previsit {
                    node: root,
                    root,
                    depth: 0,
                },
            )?;

            self.stack
                .push((self.graph.successors(root).into_iter(), ()));

            'recurse: loop {
                let depth = self.stack.len();
                let Some((iter, _)) = self.stack.last_mut() else {
                    callback(&mut init, EventNoPred::Done { root })?;
                    break;
                };

                for succ in iter {
                    if known[succ] {
                        callback(
                            &mut init,
                            EventNoPred::Revisit {
                                node: succ,
                                root,
                                depth,
                            },
                        )?;
                    } else if filter(
                        &mut init,
                        FilterArgsNoPred {
                            node: succ,
                            root,
                            depth,
                        },
                    ) {
                        known.set(succ, true);
                        callback(
                            &mut init,
                            EventNoPred::Previsit {
                                node: succ,
                                root,
                                depth,
                            },
                        )?;
                        self.stack
                            .push((self.graph.successors(succ).into_iter(), ()));
                        continue 'recurse;
                    }
                }

                self.stack.pop();
            }
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.known.fill(false);
    }
}
