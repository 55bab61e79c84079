/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use digraph_algo::two_sat::*;
use dsi_progress_logger::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::io::{Cursor, Write};

/// Tries all assignments.
fn brute_force(instance: &Instance) -> bool {
    let n = instance.num_vars();
    (0..1_u64 << n).any(|bits| {
        let assignment = (0..n).map(|i| bits & (1 << i) != 0).collect::<Vec<_>>();
        instance.is_satisfied_by(&assignment)
    })
}

fn random_instance(rng: &mut SmallRng, num_vars: usize, num_clauses: usize) -> Result<Instance> {
    let mut literal = || {
        let var = rng.random_range(1..=num_vars as i64);
        if rng.random_bool(0.5) { var } else { -var }
    };
    let clauses = (0..num_clauses)
        .map(|_| (literal(), literal()))
        .collect::<Vec<_>>();
    Ok(Instance::new(num_vars, clauses)?)
}

#[test]
fn test_satisfiable() -> Result<()> {
    let instance = Instance::new(2, [(1, 2), (-1, -2)])?;
    let solution = solve_instance(&instance, no_logging![]);

    assert!(solution.is_satisfiable());
    let assignment = solution.assignment().unwrap();
    assert_eq!(assignment.len(), 2);
    assert_ne!(assignment[0], assignment[1]);
    assert!(instance.is_satisfied_by(assignment));

    assert!(solve(2, instance.clauses().iter().copied()));

    Ok(())
}

#[test]
fn test_unsatisfiable() -> Result<()> {
    let instance = Instance::new(1, [(1, 1), (-1, -1)])?;

    assert_eq!(
        solve_instance(&instance, no_logging![]),
        Solution::Unsatisfiable { conflict: 1 }
    );
    assert!(!solve(1, instance.clauses().iter().copied()));

    Ok(())
}

#[test]
fn test_first_conflict() -> Result<()> {
    // Variable 2 is forced both ways, variable 1 is free
    let instance = Instance::new(3, [(2, 2), (-2, -2), (1, 3)])?;

    assert_eq!(
        solve_instance(&instance, no_logging![]),
        Solution::Unsatisfiable { conflict: 2 }
    );

    Ok(())
}

#[test]
fn test_chain() -> Result<()> {
    // x₁ and x₁ → x₂ → … → x₁₀, that is, ¬xᵢ ∨ xᵢ₊₁
    let n = 10;
    let mut clauses = vec![(1, 1)];
    clauses.extend((1..n).map(|i| (-i, i + 1)));
    let instance = Instance::new(n as usize, clauses.clone())?;
    let solution = solve_instance(&instance, no_logging![]);
    assert_eq!(solution.assignment(), Some(&[true; 10][..]));

    // Adding ¬x₁₀ makes the chain contradictory
    clauses.push((-n, -n));
    let instance = Instance::new(n as usize, clauses)?;
    assert!(!solve_instance(&instance, no_logging![]).is_satisfiable());

    Ok(())
}

#[test]
fn test_long_chain() -> Result<()> {
    // Same as above on a million variables; every literal ends up in the
    // same component once ¬xₙ is added
    let n = 1_000_000_i64;
    let mut clauses = vec![(1, 1)];
    clauses.extend((1..n).map(|i| (-i, i + 1)));
    let instance = Instance::new(n as usize, clauses.clone())?;
    let solution = solve_instance(&instance, no_logging![]);
    let assignment = solution.assignment().unwrap();
    assert_eq!(assignment.len(), n as usize);
    assert!(assignment.iter().all(|&value| value));
    assert!(instance.is_satisfied_by(assignment));

    clauses.push((-n, -n));
    let instance = Instance::new(n as usize, clauses)?;
    assert!(!solve_instance(&instance, no_logging![]).is_satisfiable());

    Ok(())
}

#[test]
fn test_no_clauses() -> Result<()> {
    let instance = Instance::new(3, [])?;
    let solution = solve_instance(&instance, no_logging![]);
    assert_eq!(solution.assignment().map(<[bool]>::len), Some(3));

    assert!(solve(0, []));

    Ok(())
}

#[test]
fn test_sign_combinations() -> Result<()> {
    // Each clause excludes exactly one of the four assignments of x₁ and x₂
    for (a, b) in [(1, 2), (1, -2), (-1, 2), (-1, -2)] {
        let instance = Instance::new(2, [(a, b)])?;
        let solution = solve_instance(&instance, no_logging![]);
        assert!(instance.is_satisfied_by(solution.assignment().unwrap()));

        // Forcing the excluded assignment with unit clauses
        let instance = Instance::new(2, [(a, b), (-a, -a), (-b, -b)])?;
        assert!(!solve_instance(&instance, no_logging![]).is_satisfiable());
    }

    Ok(())
}

#[test]
fn test_random() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);
    for num_vars in 1..8 {
        for num_clauses in [1, num_vars, 2 * num_vars, 4 * num_vars] {
            for _ in 0..10 {
                let instance = random_instance(&mut rng, num_vars, num_clauses)?;
                let solution = solve_instance(&instance, no_logging![]);
                assert_eq!(
                    solution.is_satisfiable(),
                    brute_force(&instance),
                    "{instance:?}"
                );
                if let Some(assignment) = solution.assignment() {
                    assert!(instance.is_satisfied_by(assignment), "{instance:?}");
                }
            }
        }
    }

    Ok(())
}

#[test]
fn test_read_instance() -> Result<()> {
    let input = "3\n1 2\n-1 -3\n\n 2   -3 \n";
    let instance = read_instance(Cursor::new(input))?;

    assert_eq!(instance, Instance::new(3, [(1, 2), (-1, -3), (2, -3)])?);

    Ok(())
}

#[test]
fn test_read_skips_malformed_lines() -> Result<()> {
    let input = "2\n1 2\n1\n1 2 -2\n-1 -2\n";
    let instance = read_instance(Cursor::new(input))?;

    assert_eq!(instance.num_clauses(), 2);
    assert_eq!(instance.clauses()[1], (Literal::negative(1), Literal::negative(2)));

    Ok(())
}

#[test]
fn test_read_errors() -> Result<()> {
    assert!(matches!(
        read_instance(Cursor::new("")),
        Err(ClauseError::MissingHeader)
    ));
    assert!(matches!(
        read_instance(Cursor::new("\n\n")),
        Err(ClauseError::MissingHeader)
    ));
    assert!(matches!(
        read_instance(Cursor::new("two\n1 2\n")),
        Err(ClauseError::Header { line: 1, .. })
    ));
    assert!(matches!(
        read_instance(Cursor::new("2\n1 x\n")),
        Err(ClauseError::Literal { line: 2, .. })
    ));
    assert!(matches!(
        read_instance(Cursor::new("2\n1 2\n\n3 1\n")),
        Err(ClauseError::LiteralOutOfRange {
            line: 4,
            literal: 3,
            num_vars: 2
        })
    ));
    assert!(matches!(
        read_instance(Cursor::new("2\n0 1\n")),
        Err(ClauseError::LiteralOutOfRange { literal: 0, .. })
    ));

    // Headers whose implication graph cannot be represented
    assert!(matches!(
        read_instance(Cursor::new("9223372036854775808\n1 2\n")),
        Err(ClauseError::TooManyVariables { line: 1, .. })
    ));
    assert!(matches!(
        read_instance(Cursor::new(format!("\n{}\n", usize::MAX))),
        Err(ClauseError::TooManyVariables { line: 2, num_vars: usize::MAX })
    ));
    assert!(matches!(
        read_instance(Cursor::new(format!("{}\n", MAX_VARS + 1))),
        Err(ClauseError::TooManyVariables { .. })
    ));

    // An empty instance is fine
    let instance = read_instance(Cursor::new("0\n"))?;
    assert_eq!(instance.num_vars(), 0);
    assert!(solve_instance(&instance, no_logging![]).is_satisfiable());

    Ok(())
}

#[test]
fn test_load_instance() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "2")?;
    writeln!(file, "1 2")?;
    writeln!(file, "-1 -2")?;
    file.flush()?;

    let instance = load_instance(file.path())?;
    assert_eq!(instance.num_vars(), 2);
    assert_eq!(instance.num_clauses(), 2);

    let dir = tempfile::tempdir()?;
    assert!(matches!(
        load_instance(dir.path().join("missing.txt")),
        Err(ClauseError::Open { .. })
    ));

    Ok(())
}
