//! Shared configuration types for CLI commands

use anyhow::Result;
use clap::Args;

use super::output::print_warning;
use crate::{
    game::{TransitionModel, Variant},
    solver::{ProgressObserver, SolveReport, Solver, SolverConfig, SweepDiscipline},
};

/// Solver options common to every subcommand
#[derive(Args, Debug, Clone)]
pub struct SolverArgs {
    /// Game variant (pig or piglet)
    #[arg(long, default_value = "pig")]
    pub variant: Variant,

    /// Score needed to win
    #[arg(long, short = 't', default_value_t = 100)]
    pub target: u32,

    /// Stop once a sweep changes no value by this much
    #[arg(long, default_value_t = 1e-6)]
    pub tolerance: f64,

    /// Maximum number of sweeps
    #[arg(long, default_value_t = 1000)]
    pub max_iterations: usize,

    /// Sweep discipline (in-place or synchronous)
    #[arg(long, default_value = "in-place")]
    pub discipline: SweepDiscipline,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

impl SolverArgs {
    pub fn config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations).with_discipline(self.discipline)
    }

    /// Build a solver for `model` and run it with the configured options.
    pub fn solve<M: TransitionModel>(&self, model: M) -> Result<(Solver<M>, SolveReport)> {
        let mut solver = Solver::new(model, self.target)?.with_discipline(self.discipline);
        let report = if self.quiet {
            solver.solve(self.tolerance, self.max_iterations)?
        } else {
            solver.solve_with(&self.config(), &mut ProgressObserver::new())?
        };
        warn_if_unconverged(&report, self.tolerance);
        Ok((solver, report))
    }
}

/// Print a warning line for a solve that ran out of sweeps.
pub fn warn_if_unconverged(report: &SolveReport, tolerance: f64) {
    if !report.converged {
        print_warning(&format!(
            "value iteration stopped after {} sweeps without converging (delta {:.3e} >= {:.3e})",
            report.iterations_run, report.final_delta, tolerance
        ));
    }
}

/// Simulation options common to `simulate` and `compare`
#[derive(Args, Debug, Clone)]
pub struct SimulationArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1000)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SimulationArgs {
    pub fn config(&self) -> crate::simulation::SimulationConfig {
        let config = crate::simulation::SimulationConfig::new(self.games);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
