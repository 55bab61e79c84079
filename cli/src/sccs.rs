/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use crate::{GlobalArgs, IntVectorFormat};
use anyhow::{Context, Result};
use clap::Parser;
use digraph::io::load_arcs;
use dsi_progress_logger::{ProgressLog, progress_logger};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
/// Computes the strongly connected components of a graph given as a list of
/// arcs, and prints the sizes of the largest ones.
///
/// The input contains one arc per line, given by two whitespace-separated
/// integer labels; empty lines and lines starting with '#' are ignored.
pub struct CliArgs {
    /// The file containing the arcs.
    pub arcs: PathBuf,

    #[arg(short = 'k', long, default_value_t = 5)]
    /// How many component sizes to print (the list is padded with zeroes).
    pub top: usize,

    #[arg(short, long)]
    /// Store the component of each vertex, in order of first appearance, at
    /// this path.
    pub components: Option<PathBuf>,

    #[arg(short, long)]
    /// Store the label of each vertex, in order of first appearance, at this
    /// path.
    pub labels: Option<PathBuf>,

    #[arg(short, long)]
    /// Store the sizes of the components at this path.
    pub sizes: Option<PathBuf>,

    #[arg(short, long)]
    /// Renumber components in decreasing-size order.
    pub renumber: bool,

    #[arg(long, value_enum, default_value_t = IntVectorFormat::Ascii)]
    /// The storage format for components, labels, and component sizes.
    pub fmt: IntVectorFormat,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    sccs(global_args, args, &mut std::io::stdout().lock())
}

/// Computes the components and writes the largest sizes to `out`, comma
/// separated.
pub fn sccs(global_args: GlobalArgs, args: CliArgs, out: &mut impl Write) -> Result<()> {
    let (graph, transpose, labels) = load_arcs(&args.arcs)
        .with_context(|| format!("Could not load arcs from {}", args.arcs.display()))?
        .into_parts();

    let mut pl = progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let mut sccs = digraph_algo::sccs::kosaraju(&graph, &transpose, &mut pl);
    log::info!(
        "Found {} strongly connected components",
        sccs.num_components()
    );

    let sizes = if args.renumber {
        log::info!("Renumbering components by decreasing size");
        sccs.sort_by_size()
    } else {
        sccs.compute_sizes()
    };

    if let Some(path) = &args.sizes {
        log::info!("Storing component sizes at {}", path.display());
        args.fmt.store_usizes(path, &sizes)?;
    }
    if let Some(path) = &args.components {
        log::info!("Storing components at {}", path.display());
        args.fmt.store_usizes(path, sccs.components())?;
    }
    if let Some(path) = &args.labels {
        log::info!("Storing labels at {}", path.display());
        args.fmt.store(path, &labels)?;
    }

    let top = sccs
        .top_sizes(args.top)
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>();
    writeln!(out, "{}", top.join(","))?;

    Ok(())
}
