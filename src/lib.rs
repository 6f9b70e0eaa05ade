//! Optimal play for the dice game Pig and its coin-flip variant Piglet
//!
//! This crate provides:
//! - The game model: states, actions and per-variant transition models
//! - A value-iteration solver with synchronous and in-place sweeps
//! - Policy analysis (hold thresholds, decision frontier, reachability)
//! - Monte-Carlo simulation of games and tournaments between strategies
//! - JSON and CSV export of solved tables
//!
//! # Examples
//!
//! ```
//! use pig_solver::{Action, Solver, State};
//!
//! let mut solver = Solver::pig(2)?;
//! let report = solver.solve(1e-9, 1_000)?;
//! assert!(report.converged);
//!
//! // Rolling wins unless the first roll busts: V = 6/7.
//! let value = solver.value_of(State::initial())?;
//! assert!((value - 6.0 / 7.0).abs() < 1e-6);
//! assert_eq!(solver.action_of(State::initial())?, Some(Action::Roll));
//! # Ok::<(), pig_solver::Error>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod export;
pub mod game;
pub mod ports;
pub mod simulation;
pub mod solver;
pub mod types;

pub use error::{Error, Result};
pub use game::{Action, Pig, Piglet, State, StateSpace, TransitionModel, Variant};
pub use solver::{SolveReport, Solver, SolverConfig, SweepDiscipline};
pub use types::{TargetScore, Tolerance};
