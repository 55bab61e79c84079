/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Callbacks receive an [`EventNoPred`], or an [`EventPred`] if the visit
//! keeps track of parents; filters receive a [`FilterArgsNoPred`] or a
//! [`FilterArgsPred`], respectively.
//!
//! Only visits keeping track of parents generate
//! [postvisit](EventPred::Postvisit) events, which happen in finishing order:
//! a node is postvisited when all its successors have been enumerated, and
//! thus after all nodes discovered from it have been postvisited.

mod seq;
pub use seq::*;

/// Events generated by depth-first visits that do not keep track of parents.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum EventNoPred {
    /// A new visit tree is starting from `root`.
    ///
    /// Roots that are already known or that are filtered out do not generate
    /// this event.
    Init { root: usize },
    /// `node` is discovered for the first time at distance `depth` from
    /// `root` along the visit path.
    Previsit {
        node: usize,
        root: usize,
        depth: usize,
    },
    /// `node` was already known: the arc leading to it is a back, forward or
    /// cross arc.
    Revisit {
        node: usize,
        root: usize,
        depth: usize,
    },
    /// The visit tree of `root` is complete.
    ///
    /// This event does not happen if the visit was stopped by the callback.
    Done { root: usize },
}

/// Filter arguments for visits that do not keep track of parents.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FilterArgsNoPred {
    /// The node about to be discovered.
    pub node: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The length of the visit path from the root to the node.
    pub depth: usize,
}

impl super::Event for EventNoPred {
    type FilterArgs = FilterArgsNoPred;
}

/// Events generated by depth-first visits that keep track of parents.
///
/// For the root of a visit tree, `parent` is the root itself.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// A new visit tree is starting from `root`.
    Init { root: usize },
    /// `node` is discovered for the first time through a tree arc from
    /// `parent`.
    Previsit {
        node: usize,
        parent: usize,
        root: usize,
        depth: usize,
    },
    /// `node` was already known and it is reached again through an arc from
    /// `pred`.
    Revisit {
        node: usize,
        pred: usize,
        root: usize,
        depth: usize,
    },
    /// All successors of `node` have been enumerated, and the visit is
    /// retreating to `parent`.
    Postvisit {
        node: usize,
        parent: usize,
        root: usize,
        depth: usize,
    },
    /// The visit tree of `root` is complete.
    Done { root: usize },
}

/// Filter arguments for visits that keep track of parents.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The node about to be discovered.
    pub node: usize,
    /// The node from which it is being discovered.
    pub pred: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The length of the visit path from the root to the node.
    pub depth: usize,
}

impl super::Event for EventPred {
    type FilterArgs = FilterArgsPred;
}
