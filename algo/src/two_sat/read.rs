/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Instance, MAX_VARS, check_literal, check_num_vars};
use std::io::BufRead;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a 2-SAT instance.
#[derive(Error, Debug)]
pub enum ClauseError {
    #[error("Could not open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error reading line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("Missing number of variables")]
    MissingHeader,
    #[error("Line {line}: could not parse {text:?} as a number of variables")]
    Header {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Line {line}: could not parse {token:?} as a literal")]
    Literal {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Line {line}: {num_vars} variables exceed the maximum of {}", MAX_VARS)]
    TooManyVariables { line: usize, num_vars: usize },
    #[error("Line {line}: literal {literal} is out of range for {num_vars} variables")]
    LiteralOutOfRange {
        line: usize,
        literal: i64,
        num_vars: usize,
    },
}

/// Reads a 2-SAT instance.
///
/// The first nonempty line contains the number of variables `n`, which
/// cannot exceed [`MAX_VARS`]; every
/// following line with two tokens is a clause given by two nonzero literals
/// with absolute value at most `n`. Lines with a different number of tokens
/// are skipped with a warning.
pub fn read_instance(reader: impl BufRead) -> Result<Instance, ClauseError> {
    let mut num_vars = None;
    let mut clauses = vec![];
    let mut skipped = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line.map_err(|source| ClauseError::Read {
            line: line_num,
            source,
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(n) = num_vars else {
            let n = line.parse::<usize>().map_err(|source| ClauseError::Header {
                line: line_num,
                text: line.to_owned(),
                source,
            })?;
            num_vars = Some(check_num_vars(n, line_num)?);
            continue;
        };

        let tokens = line.split_whitespace().collect::<Vec<_>>();
        let &[a, b] = tokens.as_slice() else {
            log::warn!(
                "Line {}: skipping {:?}, expected two literals but found {} tokens",
                line_num,
                line,
                tokens.len()
            );
            skipped += 1;
            continue;
        };

        let parse = |token: &str| {
            let value = token.parse::<i64>().map_err(|source| ClauseError::Literal {
                line: line_num,
                token: token.to_owned(),
                source,
            })?;
            check_literal(value, n, line_num)
        };
        clauses.push((parse(a)?, parse(b)?));
    }

    let num_vars = num_vars.ok_or(ClauseError::MissingHeader)?;
    if skipped != 0 {
        log::warn!("Skipped {} malformed lines", skipped);
    }
    log::info!(
        "Read {} clauses on {} variables",
        clauses.len(),
        num_vars
    );
    Ok(Instance { num_vars, clauses })
}

/// Reads a 2-SAT instance from a file.
///
/// See [`read_instance`] for the format.
pub fn load_instance(path: impl AsRef<Path>) -> Result<Instance, ClauseError> {
    let path = path.as_ref();
    log::info!("Reading 2-SAT instance from {}", path.display());
    let file = std::fs::File::open(path).map_err(|source| ClauseError::Open {
        path: path.to_owned(),
        source,
    })?;
    read_instance(std::io::BufReader::new(file))
}
