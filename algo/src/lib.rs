/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]
#![allow(clippy::type_complexity)]

pub mod sccs;
pub mod two_sat;
pub mod visits;

mod finish_order;
pub use finish_order::finish_order;

pub mod prelude {
    pub use crate::finish_order::finish_order;
    pub use crate::sccs::{Sccs, kosaraju};
    pub use crate::two_sat::{Instance, Literal, Solution, solve, solve_instance};
    pub use crate::visits::depth_first;
}
