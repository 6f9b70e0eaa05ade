//! Common test utilities for the pig_solver test suite.
//!
//! Float comparison helpers and solved fixtures shared by the integration tests.

#![allow(dead_code)]

use pig_solver::{Pig, Piglet, Solver, State, SweepDiscipline};

/// Tolerance used for fixtures that need near-exact fixed points.
pub const TIGHT: f64 = 1e-12;

pub fn approx_eq_tol(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Pig solved to a tight tolerance with the default (in-place) discipline.
pub fn solved_pig(target: u32) -> Solver<Pig> {
    solved_pig_with(target, SweepDiscipline::InPlace)
}

pub fn solved_pig_with(target: u32, discipline: SweepDiscipline) -> Solver<Pig> {
    let mut solver = Solver::pig(target)
        .expect("target should be valid")
        .with_discipline(discipline);
    let report = solver.solve(TIGHT, 100_000).expect("solve should succeed");
    assert!(report.converged, "Pig (T = {target}) should converge");
    solver
}

/// Piglet solved to a tight tolerance with the default (in-place) discipline.
pub fn solved_piglet(target: u32) -> Solver<Piglet> {
    let mut solver = Solver::piglet(target).expect("target should be valid");
    let report = solver.solve(TIGHT, 100_000).expect("solve should succeed");
    assert!(report.converged, "Piglet (T = {target}) should converge");
    solver
}

/// Every `(i, j, k)` in the box `[0, limit)^3`, enumerated or not.
pub fn states_in_box(limit: u32) -> impl Iterator<Item = State> {
    (0..limit).flat_map(move |i| {
        (0..limit).flat_map(move |j| (0..limit).map(move |k| State::new(i, j, k)))
    })
}
