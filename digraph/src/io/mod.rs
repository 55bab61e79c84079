/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Reading arc lists.
//!
//! An arc list contains one arc per line, given by two whitespace-separated
//! nonnegative integers `tail head`. Empty lines and lines starting with `#`
//! are ignored. Any other malformed line is a fatal error: the whole file is
//! rejected.

use crate::graphs::arc_store::ArcStore;
use std::io::BufRead;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The symbol starting a comment line.
pub const LINE_COMMENT_SYMBOL: char = '#';

/// Errors raised while reading an arc list.
#[derive(Error, Debug)]
pub enum ParseError {
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
    #[error("Line {line}: expected two tokens but found {found} in {text:?}")]
    TokenCount {
        line: usize,
        found: usize,
        text: String,
    },
    #[error("Line {line}: could not parse {token:?} as a vertex")]
    Vertex {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses a vertex label, reporting the line number on failure.
fn parse_vertex(token: &str, line: usize) -> Result<u64, ParseError> {
    token.parse::<u64>().map_err(|source| ParseError::Vertex {
        line,
        token: token.to_owned(),
        source,
    })
}

/// Reads an arc list into an [`ArcStore`].
pub fn read_arcs(reader: impl BufRead) -> Result<ArcStore, ParseError> {
    let mut store = ArcStore::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line.map_err(|source| ParseError::Read {
            line: line_num,
            source,
        })?;
        let line = line.trim();
        if line.is_empty() || line.starts_with(LINE_COMMENT_SYMBOL) {
            continue;
        }

        let tokens = line.split_whitespace().collect::<Vec<_>>();
        let &[tail, head] = tokens.as_slice() else {
            return Err(ParseError::TokenCount {
                line: line_num,
                found: tokens.len(),
                text: line.to_owned(),
            });
        };

        store.add_edge(parse_vertex(tail, line_num)?, parse_vertex(head, line_num)?);
    }

    log::info!(
        "Read {} vertices and {} edges",
        store.num_vertices(),
        store.num_edges()
    );
    Ok(store)
}

/// Reads an arc list from a file into an [`ArcStore`].
pub fn load_arcs(path: impl AsRef<Path>) -> Result<ArcStore, ParseError> {
    let path = path.as_ref();
    log::info!("Reading arcs from {}", path.display());
    let file = std::fs::File::open(path).map_err(|source| ParseError::Open {
        path: path.to_owned(),
        source,
    })?;
    read_arcs(std::io::BufReader::new(file))
}
