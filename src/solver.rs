//! MDP solver
//!
//! This module provides the generic value-iteration solver, its
//! configuration, and the sweep observers that watch it converge.

pub mod config;
pub mod observers;
pub mod value_iteration;

pub use config::{SolverConfig, SweepDiscipline};
pub use observers::{ConvergenceTrace, ProgressObserver, TraceSeries};
pub use value_iteration::{SolveReport, Solver};
