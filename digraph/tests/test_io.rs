/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use digraph::prelude::*;
use std::io::{Cursor, Write};

#[test]
fn test_read_arcs() -> Result<()> {
    let store = read_arcs(Cursor::new("1 2\n2 3\n3 1\n3 4\n"))?;
    assert_eq!(store.num_vertices(), 4);
    assert_eq!(store.num_edges(), 4);
    assert_eq!(store.neighbors(3).collect::<Vec<_>>(), vec![1, 4]);
    assert_eq!(store.predecessors(1).collect::<Vec<_>>(), vec![3]);
    Ok(())
}

#[test]
fn test_comments_blank_lines_and_spacing() -> Result<()> {
    let store = read_arcs(Cursor::new("# a comment\n\n  1\t2  \n\n2    1\n"))?;
    assert_eq!(store.num_edges(), 2);
    assert_eq!(store.neighbors(2).collect::<Vec<_>>(), vec![1]);
    Ok(())
}

#[test]
fn test_empty_input() -> Result<()> {
    let store = read_arcs(Cursor::new(""))?;
    assert_eq!(store.num_vertices(), 0);
    assert_eq!(store.num_edges(), 0);
    Ok(())
}

#[test]
fn test_wrong_token_count() {
    let err = read_arcs(Cursor::new("1 2\n3\n")).unwrap_err();
    match err {
        ParseError::TokenCount { line, found, .. } => {
            assert_eq!(line, 2);
            assert_eq!(found, 1);
        }
        e => panic!("Unexpected error {e:?}"),
    }

    let err = read_arcs(Cursor::new("1 2 3\n")).unwrap_err();
    assert!(matches!(err, ParseError::TokenCount { line: 1, found: 3, .. }));
}

#[test]
fn test_non_integer_token() {
    let err = read_arcs(Cursor::new("1 2\n2 x\n")).unwrap_err();
    match err {
        ParseError::Vertex { line, token, .. } => {
            assert_eq!(line, 2);
            assert_eq!(token, "x");
        }
        e => panic!("Unexpected error {e:?}"),
    }
    assert!(read_arcs(Cursor::new("-1 2\n")).is_err());
}

#[test]
fn test_load_arcs() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("graph.txt");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "1 1")?;
    writeln!(file, "1 2")?;
    drop(file);

    let store = load_arcs(&path)?;
    assert_eq!(store.num_vertices(), 2);
    assert_eq!(store.neighbors(1).collect::<Vec<_>>(), vec![1, 2]);

    assert!(matches!(
        load_arcs(dir.path().join("missing.txt")),
        Err(ParseError::Open { .. })
    ));
    Ok(())
}
