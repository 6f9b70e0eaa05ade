//! Observer port - watching value iteration without coupling to it
//!
//! The solver reports each sweep to a [`SweepObserver`]. Progress display,
//! convergence traces and any other per-sweep data collection are adapters
//! implementing this trait.
//!
//! # Event Sequence
//!
//! 1. `on_solve_start(space, values, config)` - once, after the configuration is validated
//! 2. `on_sweep_end(sweep, delta, space, values)` - after every sweep
//! 3. `on_solve_end(report)` - once, after the convergence record is set
//!
//! # Examples
//!
//! ```no_run
//! use pig_solver::{game::StateSpace, ports::SweepObserver};
//!
//! struct DeltaLog {
//!     deltas: Vec<f64>,
//! }
//!
//! impl SweepObserver for DeltaLog {
//!     fn on_sweep_end(
//!         &mut self,
//!         _sweep: usize,
//!         delta: f64,
//!         _space: &StateSpace,
//!         _values: &[f64],
//!     ) -> pig_solver::Result<()> {
//!         self.deltas.push(delta);
//!         Ok(())
//!     }
//! }
//! ```

use crate::{
    Result,
    game::StateSpace,
    solver::{SolveReport, SolverConfig},
};

/// Observer trait for monitoring value iteration
pub trait SweepObserver {
    /// Called once before the first sweep.
    ///
    /// `values` holds the table the solve starts from: all zeros for a fresh
    /// solver, the previous result when warm-starting.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_solve_start(
        &mut self,
        _space: &StateSpace,
        _values: &[f64],
        _config: &SolverConfig,
    ) -> Result<()> {
        Ok(())
    }

    /// Called after each completed sweep.
    ///
    /// # Parameters
    ///
    /// * `sweep` - 1-based sweep number within this solve
    /// * `delta` - Largest absolute value change during the sweep
    /// * `space` - The solver's state space (maps states to table slots)
    /// * `values` - The packed value table after the sweep
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_sweep_end(
        &mut self,
        _sweep: usize,
        _delta: f64,
        _space: &StateSpace,
        _values: &[f64],
    ) -> Result<()> {
        Ok(())
    }

    /// Called once when the solve finishes, converged or not.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_solve_end(&mut self, _report: &SolveReport) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}
