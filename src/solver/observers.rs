//! Sweep observers
//!
//! Adapters for the [`SweepObserver`] port: a convergence trace for
//! plotting how values settle, and an `indicatif` progress bar for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use super::{SolveReport, SolverConfig};
use crate::{
    Result,
    game::{State, StateSpace},
    ports::SweepObserver,
};

/// Value history of one state, starting with the value before the first sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSeries {
    pub state: State,
    pub values: Vec<f64>,
}

/// Records the value of selected states after every sweep.
///
/// Warm-started solves append to the existing series. A trace belongs to
/// the state space it first observed and rejects solves over any other.
#[derive(Debug, Clone, Default)]
pub struct ConvergenceTrace {
    selection: Option<Vec<State>>,
    target: Option<u32>,
    slots: Vec<usize>,
    series: Vec<TraceSeries>,
    deltas: Vec<f64>,
}

impl ConvergenceTrace {
    /// Trace every enumerated state.
    pub fn all_states() -> Self {
        Self::default()
    }

    /// Trace only the given states.
    pub fn for_states(states: impl IntoIterator<Item = State>) -> Self {
        Self {
            selection: Some(states.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn series(&self) -> &[TraceSeries] {
        &self.series
    }

    /// History of `state`, if it is traced.
    pub fn series_for(&self, state: State) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|series| series.state == state)
            .map(|series| series.values.as_slice())
    }

    /// Largest value change of each sweep, in order.
    pub fn deltas(&self) -> &[f64] {
        &self.deltas
    }

    pub fn sweeps(&self) -> usize {
        self.deltas.len()
    }

    pub fn into_series(self) -> Vec<TraceSeries> {
        self.series
    }
}

impl SweepObserver for ConvergenceTrace {
    fn on_solve_start(
        &mut self,
        space: &StateSpace,
        values: &[f64],
        _config: &SolverConfig,
    ) -> Result<()> {
        match self.target {
            Some(target) if target == space.target() => return Ok(()),
            Some(target) => {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!(
                        "convergence trace was recorded for target {target}, not {}",
                        space.target()
                    ),
                });
            }
            None => {}
        }

        let states: Vec<State> = match &self.selection {
            Some(states) => states.clone(),
            None => space.states().iter().rev().copied().collect(),
        };
        let slots = states
            .iter()
            .map(|&state| space.index(state).ok_or_else(|| space.out_of_domain(state)))
            .collect::<Result<Vec<_>>>()?;

        self.series = states
            .into_iter()
            .zip(&slots)
            .map(|(state, &slot)| TraceSeries {
                state,
                values: vec![values[slot]],
            })
            .collect();
        self.slots = slots;
        self.target = Some(space.target());
        Ok(())
    }

    fn on_sweep_end(
        &mut self,
        _sweep: usize,
        delta: f64,
        _space: &StateSpace,
        values: &[f64],
    ) -> Result<()> {
        for (series, &slot) in self.series.iter_mut().zip(&self.slots) {
            series.values.push(values[slot]);
        }
        self.deltas.push(delta);
        Ok(())
    }
}

/// Progress bar observer - shows sweeps against the iteration budget
#[derive(Default)]
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SweepObserver for ProgressObserver {
    fn on_solve_start(
        &mut self,
        space: &StateSpace,
        _values: &[f64],
        config: &SolverConfig,
    ) -> Result<()> {
        let pb = ProgressBar::new(config.max_iterations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} sweeps ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        pb.set_message(format!("{} states", space.len()));
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_sweep_end(
        &mut self,
        sweep: usize,
        delta: f64,
        _space: &StateSpace,
        _values: &[f64],
    ) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(sweep as u64);
            pb.set_message(format!("delta {delta:.3e}"));
        }
        Ok(())
    }

    fn on_solve_end(&mut self, report: &SolveReport) -> Result<()> {
        if let Some(pb) = self.progress_bar.take() {
            let message = if report.converged {
                format!("converged, delta {:.3e}", report.final_delta)
            } else {
                format!("not converged, delta {:.3e}", report.final_delta)
            };
            pb.finish_with_message(message);
        }
        Ok(())
    }
}

/// Forwards every event to both observers, left first.
impl<A: SweepObserver, B: SweepObserver> SweepObserver for (A, B) {
    fn on_solve_start(
        &mut self,
        space: &StateSpace,
        values: &[f64],
        config: &SolverConfig,
    ) -> Result<()> {
        self.0.on_solve_start(space, values, config)?;
        self.1.on_solve_start(space, values, config)
    }

    fn on_sweep_end(
        &mut self,
        sweep: usize,
        delta: f64,
        space: &StateSpace,
        values: &[f64],
    ) -> Result<()> {
        self.0.on_sweep_end(sweep, delta, space, values)?;
        self.1.on_sweep_end(sweep, delta, space, values)
    }

    fn on_solve_end(&mut self, report: &SolveReport) -> Result<()> {
        self.0.on_solve_end(report)?;
        self.1.on_solve_end(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;

    #[test]
    fn paired_observers_both_see_every_sweep() {
        let mut solver = Solver::piglet(3).unwrap();
        let mut pair = (
            ConvergenceTrace::for_states([State::initial()]),
            ConvergenceTrace::all_states(),
        );
        let report = solver
            .solve_with(&SolverConfig::default(), &mut pair)
            .unwrap();
        assert_eq!(pair.0.sweeps(), report.iterations_run);
        assert_eq!(pair.1.sweeps(), report.iterations_run);
        assert_eq!(pair.1.series().len(), solver.space().len());
    }

    #[test]
    fn trace_starts_at_zero_and_tracks_every_sweep() {
        let mut solver = Solver::piglet(2).unwrap();
        let mut trace = ConvergenceTrace::for_states([State::initial()]);
        let report = solver
            .solve_with(&SolverConfig::new(1e-9, 500), &mut trace)
            .unwrap();

        let history = trace.series_for(State::initial()).unwrap();
        assert_eq!(history[0], 0.0);
        assert_eq!(history.len(), report.iterations_run + 1);
        assert_eq!(trace.sweeps(), report.iterations_run);
        assert_eq!(
            *history.last().unwrap(),
            solver.value_of(State::initial()).unwrap()
        );
    }

    #[test]
    fn trace_rejects_boundary_states() {
        let mut solver = Solver::pig(3).unwrap();
        let mut trace = ConvergenceTrace::for_states([State::new(2, 0, 1)]);
        assert!(
            solver
                .solve_with(&SolverConfig::default(), &mut trace)
                .is_err()
        );
    }

    #[test]
    fn trace_is_tied_to_the_first_state_space() {
        let mut trace = ConvergenceTrace::all_states();
        let config = SolverConfig::new(1e-9, 1_000);
        Solver::piglet(6)
            .unwrap()
            .solve_with(&config, &mut trace)
            .unwrap();
        let recorded = trace.sweeps();

        let mut smaller = Solver::piglet(3).unwrap();
        assert!(matches!(
            smaller.solve_with(&config, &mut trace),
            Err(crate::Error::InvalidConfiguration { .. })
        ));
        assert_eq!(trace.sweeps(), recorded);
        assert_eq!(smaller.converged(), None);
    }

    #[test]
    fn warm_start_appends_to_the_same_trace() {
        let mut solver = Solver::piglet(3).unwrap();
        let mut trace = ConvergenceTrace::for_states([State::initial()]);
        let config = SolverConfig::new(1e-9, 1_000);
        let first = solver.solve_with(&config, &mut trace).unwrap();
        let second = solver.solve_with(&config, &mut trace).unwrap();

        assert_eq!(trace.sweeps(), first.iterations_run + second.iterations_run);
        assert_eq!(
            trace.series_for(State::initial()).unwrap().len(),
            trace.sweeps() + 1
        );
    }

    #[test]
    fn full_trace_covers_state_space() {
        let mut solver = Solver::pig(3).unwrap();
        let mut trace = ConvergenceTrace::all_states();
        solver
            .solve_with(&SolverConfig::default(), &mut trace)
            .unwrap();
        assert_eq!(trace.series().len(), solver.space().len());
    }
}
