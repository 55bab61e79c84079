/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Satisfiability of 2-CNF formulas.
//!
//! A 2-SAT instance on `n` variables is reduced to an [implication
//! graph](ImplicationGraph) with `2n` nodes, one for each literal: a clause
//! `a ∨ b` yields the implications `¬a → b` and `¬b → a`. The instance is
//! satisfiable if and only if no variable lies in the same [strongly connected
//! component](crate::sccs) as its negation.
//!
//! Variables are numbered from 1; the literal of variable `i` is `+i` if the
//! variable is true and `-i` if it is false. The node of `+i` is `i - 1`, and
//! the node of `-i` is `n + i - 1`, so the negation of node `k` is `(k + n) mod
//! 2n`.
//!
//! # Examples
//!
//! ```
//! use dsi_progress_logger::no_logging;
//! use digraph_algo::two_sat::*;
//!
//! // (x₁ ∨ x₂) ∧ (¬x₁ ∨ ¬x₂)
//! let instance = Instance::new(2, [(1, 2), (-1, -2)])?;
//! let solution = solve_instance(&instance, no_logging![]);
//! let assignment = solution.assignment().unwrap();
//! assert!(instance.is_satisfied_by(assignment));
//!
//! // x₁ ∧ ¬x₁
//! let instance = Instance::new(1, [(1, 1), (-1, -1)])?;
//! assert!(!solve(instance.num_vars(), instance.clauses().iter().copied()));
//! # Ok::<(), ClauseError>(())
//! ```

mod read;
pub use read::*;

use crate::sccs::{Sccs, kosaraju};
use digraph::graphs::vec_graph::VecGraph;
use dsi_progress_logger::{ProgressLog, no_logging};
use std::fmt;
use std::num::NonZeroI64;

/// The maximum number of variables of an instance.
///
/// The implication graph of an instance with `n` variables has `2n` nodes.
pub const MAX_VARS: usize = 1 << 24;

/// A literal: a variable, or its negation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(NonZeroI64);

impl Literal {
    /// Returns the literal with the given signed value, or `None` if the value
    /// is zero.
    pub fn new(value: i64) -> Option<Self> {
        NonZeroI64::new(value).map(Self)
    }

    /// Returns the literal asserting that variable `var` is true.
    ///
    /// # Panics
    ///
    /// If `var` is zero.
    pub fn positive(var: usize) -> Self {
        Self(NonZeroI64::new(var as i64).expect("variables are numbered from 1"))
    }

    /// Returns the literal asserting that variable `var` is false.
    ///
    /// # Panics
    ///
    /// If `var` is zero.
    pub fn negative(var: usize) -> Self {
        !Self::positive(var)
    }

    /// Returns the signed value of the literal.
    pub fn get(self) -> i64 {
        self.0.get()
    }

    /// Returns the variable of the literal.
    pub fn var(self) -> usize {
        self.0.unsigned_abs().get() as usize
    }

    /// Returns whether the literal asserts that its variable is true.
    pub fn is_positive(self) -> bool {
        self.0.is_positive()
    }

    /// Returns the node of the literal in the implication graph of an instance
    /// with `num_vars` variables.
    #[inline(always)]
    pub fn node(self, num_vars: usize) -> usize {
        debug_assert!(self.var() <= num_vars);
        if self.is_positive() {
            self.var() - 1
        } else {
            num_vars + self.var() - 1
        }
    }

    /// Returns whether the literal is true under an assignment.
    ///
    /// The value of variable `i` is `assignment[i - 1]`.
    pub fn eval(self, assignment: &[bool]) -> bool {
        assignment[self.var() - 1] == self.is_positive()
    }
}

impl std::ops::Not for Literal {
    type Output = Self;

    fn not(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 2-SAT instance: a number of variables and a list of clauses of two
/// literals.
///
/// All literals refer to variables in the range `1..=num_vars`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Instance {
    num_vars: usize,
    clauses: Vec<(Literal, Literal)>,
}

impl Instance {
    /// Creates an instance from signed literal values.
    ///
    /// Fails with [`ClauseError::TooManyVariables`] (with `line` 0) if
    /// `num_vars` is larger than [`MAX_VARS`], and with
    /// [`ClauseError::LiteralOutOfRange`] if some value is zero or has
    /// absolute value larger than `num_vars`; the `line` of the latter error
    /// is the position of the clause, starting from 1.
    pub fn new(
        num_vars: usize,
        clauses: impl IntoIterator<Item = (i64, i64)>,
    ) -> Result<Self, ClauseError> {
        let num_vars = check_num_vars(num_vars, 0)?;
        let clauses = clauses
            .into_iter()
            .enumerate()
            .map(|(i, (a, b))| {
                Ok((
                    check_literal(a, num_vars, i + 1)?,
                    check_literal(b, num_vars, i + 1)?,
                ))
            })
            .collect::<Result<Vec<_>, ClauseError>>()?;
        Ok(Self { num_vars, clauses })
    }

    /// Returns the number of variables.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the number of clauses.
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Returns the clauses.
    pub fn clauses(&self) -> &[(Literal, Literal)] {
        &self.clauses
    }

    /// Returns whether every clause contains a literal that is true under an
    /// assignment.
    ///
    /// # Panics
    ///
    /// If `assignment` has fewer than [`num_vars`](Instance::num_vars)
    /// elements.
    pub fn is_satisfied_by(&self, assignment: &[bool]) -> bool {
        self.clauses
            .iter()
            .all(|&(a, b)| a.eval(assignment) || b.eval(assignment))
    }
}

/// Returns the literal with signed value `value`, checking that it belongs
/// to an instance with `num_vars` variables.
pub(crate) fn check_literal(
    value: i64,
    num_vars: usize,
    line: usize,
) -> Result<Literal, ClauseError> {
    match Literal::new(value) {
        Some(literal) if literal.var() <= num_vars => Ok(literal),
        _ => Err(ClauseError::LiteralOutOfRange {
            line,
            literal: value,
            num_vars,
        }),
    }
}

/// Checks that an instance with `num_vars` variables fits in an implication
/// graph.
pub(crate) fn check_num_vars(num_vars: usize, line: usize) -> Result<usize, ClauseError> {
    match num_vars.checked_mul(2) {
        Some(_) if num_vars <= MAX_VARS => Ok(num_vars),
        _ => Err(ClauseError::TooManyVariables { line, num_vars }),
    }
}

/// The implication graph of a 2-SAT instance, stored together with its
/// transpose.
#[derive(Clone, Debug)]
pub struct ImplicationGraph {
    num_vars: usize,
    graph: VecGraph,
    transpose: VecGraph,
}

impl ImplicationGraph {
    /// Creates an implication graph with no clauses on `num_vars` variables,
    /// and thus `2 * num_vars` nodes.
    ///
    /// # Panics
    ///
    /// If `num_vars` is larger than [`MAX_VARS`].
    pub fn new(num_vars: usize) -> Self {
        let num_nodes = num_vars
            .checked_mul(2)
            .filter(|_| num_vars <= MAX_VARS)
            .unwrap_or_else(|| panic!("{num_vars} variables exceed the maximum of {MAX_VARS}"));
        Self {
            num_vars,
            graph: VecGraph::empty(num_nodes),
            transpose: VecGraph::empty(num_nodes),
        }
    }

    /// Adds the clause `a ∨ b`, that is, the arcs `¬a → b` and `¬b → a` to the
    /// graph and the reversed arcs to the transpose.
    ///
    /// # Panics
    ///
    /// If the variable of `a` or `b` is larger than
    /// [`num_vars`](ImplicationGraph::num_vars).
    pub fn add_clause(&mut self, a: Literal, b: Literal) {
        assert!(
            a.var() <= self.num_vars && b.var() <= self.num_vars,
            "Clause {a} ∨ {b} is out of range for {} variables",
            self.num_vars
        );
        let n = self.num_vars;
        let (a, not_a) = (a.node(n), (!a).node(n));
        let (b, not_b) = (b.node(n), (!b).node(n));
        self.graph.add_arc(not_a, b);
        self.graph.add_arc(not_b, a);
        self.transpose.add_arc(b, not_a);
        self.transpose.add_arc(a, not_b);
    }

    /// Returns the number of variables.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the implication graph.
    pub fn graph(&self) -> &VecGraph {
        &self.graph
    }

    /// Returns the transpose of the implication graph.
    pub fn transpose(&self) -> &VecGraph {
        &self.transpose
    }

    /// Solves the instance given the strongly connected components of the
    /// implication graph, numbered in reverse topological order.
    ///
    /// Variables are checked in increasing order, stopping at the first one
    /// lying in the same component as its negation. Otherwise, variable `i`
    /// is true if and only if the component of `+i` precedes that of `-i`,
    /// that is, if `-i` cannot be reached from `+i`.
    pub fn assign(&self, sccs: &Sccs) -> Solution {
        let n = self.num_vars;
        let mut assignment = Vec::with_capacity(n);
        for var in 1..=n {
            let pos = sccs.component(Literal::positive(var).node(n));
            let neg = sccs.component(Literal::negative(var).node(n));
            if pos == neg {
                return Solution::Unsatisfiable { conflict: var };
            }
            assignment.push(pos < neg);
        }
        Solution::Satisfiable(assignment.into_boxed_slice())
    }

    /// Computes the strongly connected components of the implication graph
    /// and solves the instance.
    pub fn solve(&self, pl: &mut impl ProgressLog) -> Solution {
        let sccs = kosaraju(&self.graph, &self.transpose, pl);
        self.assign(&sccs)
    }
}

impl Extend<(Literal, Literal)> for ImplicationGraph {
    fn extend<T: IntoIterator<Item = (Literal, Literal)>>(&mut self, iter: T) {
        for (a, b) in iter {
            self.add_clause(a, b);
        }
    }
}

/// The solution of a 2-SAT instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    /// The instance is unsatisfiable: `conflict` is the first variable that
    /// lies in the same strongly connected component as its negation.
    Unsatisfiable { conflict: usize },
    /// The instance is satisfiable; the value of variable `i` is at index
    /// `i - 1`.
    Satisfiable(Box<[bool]>),
}

impl Solution {
    /// Returns whether the instance is satisfiable.
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Solution::Satisfiable(_))
    }

    /// Returns a satisfying assignment, if the instance is satisfiable.
    pub fn assignment(&self) -> Option<&[bool]> {
        match self {
            Solution::Satisfiable(assignment) => Some(assignment),
            Solution::Unsatisfiable { .. } => None,
        }
    }
}

/// Returns whether the 2-CNF formula on `num_vars` variables given by
/// `clauses` is satisfiable.
///
/// # Panics
///
/// If some literal refers to a variable larger than `num_vars`.
pub fn solve(num_vars: usize, clauses: impl IntoIterator<Item = (Literal, Literal)>) -> bool {
    let mut implications = ImplicationGraph::new(num_vars);
    implications.extend(clauses);
    implications.solve(no_logging![]).is_satisfiable()
}

/// Solves an instance, returning a satisfying assignment if there is one.
pub fn solve_instance(instance: &Instance, pl: &mut impl ProgressLog) -> Solution {
    let mut implications = ImplicationGraph::new(instance.num_vars());
    implications.extend(instance.clauses().iter().copied());
    let solution = implications.solve(pl);
    match &solution {
        Solution::Satisfiable(_) => log::debug!(
            "Instance with {} variables and {} clauses is satisfiable",
            instance.num_vars(),
            instance.num_clauses()
        ),
        Solution::Unsatisfiable { conflict } => log::debug!(
            "Instance with {} variables and {} clauses is unsatisfiable: variable {} and its negation are in the same component",
            instance.num_vars(),
            instance.num_clauses(),
            conflict
        ),
    }
    solution
}
