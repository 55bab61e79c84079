/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{GlobalArgs, create_parent_dir};
use anyhow::{Context, Result};
use clap::Parser;
use digraph_algo::two_sat::{Instance, Solution, load_instance, solve_instance};
use dsi_progress_logger::{ProgressLog, progress_logger};
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
/// Decides the satisfiability of 2-SAT instances.
///
/// Each file starts with the number of variables n, followed by one clause
/// per line given by two nonzero literals in [-n..n] (a negative literal is a
/// negated variable). Lines with a different number of tokens are skipped.
///
/// Files are processed independently: a file that cannot be read is reported
/// and skipped. The last line of output contains one bit for each file that
/// was processed successfully, in input order: 1 if the instance is
/// satisfiable, 0 otherwise.
pub struct CliArgs {
    /// The files containing the instances.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[arg(short, long)]
    /// Store a JSON report with the outcome for each file at this path.
    pub report: Option<PathBuf>,

    #[arg(short, long)]
    /// Print a satisfying assignment for satisfiable instances.
    pub assignment: bool,
}

/// The outcome for one input file, as stored in the JSON report.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_vars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_clauses: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satisfiable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    fn solved(path: &Path, instance: &Instance, solution: &Solution) -> Self {
        Self {
            path: path.to_owned(),
            num_vars: Some(instance.num_vars()),
            num_clauses: Some(instance.num_clauses()),
            satisfiable: Some(solution.is_satisfiable()),
            error: None,
        }
    }

    fn failed(path: &Path, error: &anyhow::Error) -> Self {
        Self {
            path: path.to_owned(),
            num_vars: None,
            num_clauses: None,
            satisfiable: None,
            error: Some(format!("{:#}", error)),
        }
    }
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    two_sat(global_args, args, &mut std::io::stdout().lock())?;
    Ok(())
}

/// Solves every instance, writing the results to `out`, and returns the
/// reports of all files.
pub fn two_sat(
    global_args: GlobalArgs,
    args: CliArgs,
    out: &mut impl Write,
) -> Result<Vec<FileReport>> {
    let mut pl = progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let mut reports = Vec::with_capacity(args.files.len());
    let mut bits = String::with_capacity(args.files.len());

    for path in &args.files {
        let instance = match load_instance(path)
            .with_context(|| format!("Could not read instance from {}", path.display()))
        {
            Ok(instance) => instance,
            Err(error) => {
                log::error!("{:#}; skipping file", error);
                reports.push(FileReport::failed(path, &error));
                continue;
            }
        };

        let solution = solve_instance(&instance, &mut pl);
        writeln!(
            out,
            "Result for {}: {}",
            path.display(),
            if solution.is_satisfiable() {
                "Satisfiable"
            } else {
                "Unsatisfiable"
            }
        )?;
        match &solution {
            Solution::Satisfiable(assignment) if args.assignment => {
                let literals = assignment
                    .iter()
                    .enumerate()
                    .map(|(i, &value)| {
                        if value {
                            format!("{}", i + 1)
                        } else {
                            format!("-{}", i + 1)
                        }
                    })
                    .collect::<Vec<_>>();
                writeln!(out, "Assignment for {}: {}", path.display(), literals.join(" "))?;
            }
            Solution::Unsatisfiable { conflict } => {
                log::info!(
                    "{}: variable {} is equivalent to its negation",
                    path.display(),
                    conflict
                );
            }
            _ => {}
        }

        bits.push(if solution.is_satisfiable() { '1' } else { '0' });
        reports.push(FileReport::solved(path, &instance, &solution));
    }

    let failed = reports.iter().filter(|report| report.error.is_some()).count();
    if failed != 0 {
        log::warn!("{} out of {} files could not be processed", failed, reports.len());
    }

    writeln!(out, "{}", bits)?;

    if let Some(report_path) = &args.report {
        log::info!("Storing report at {}", report_path.display());
        create_parent_dir(report_path)?;
        let file = std::fs::File::create(report_path)
            .with_context(|| format!("Could not create report at {}", report_path.display()))?;
        let mut buf = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut buf, &reports)
            .with_context(|| format!("Could not write report to {}", report_path.display()))?;
        buf.flush()
            .with_context(|| format!("Could not write report to {}", report_path.display()))?;
    }

    Ok(reports)
}
