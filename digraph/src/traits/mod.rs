/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Traits for graphs.
//!
//! Algorithms are written against [`RandomAccessGraph`], so they can be
//! applied both to graphs and to references to graphs.

mod graph;
pub use graph::*;
