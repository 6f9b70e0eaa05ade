//! Value iteration for Pig-style games
//!
//! [`Solver`] enumerates the state space once, then repeatedly applies the
//! Bellman optimality operator
//!
//! ```text
//! V(s) = max_a value_action(s, a)
//! ```
//!
//! until the largest per-state change in a sweep falls below the tolerance.
//! Holding or busting hands the turn to the opponent, so those successors are
//! valued from the opponent's seat (`1 - V(s')`). This self-reference is why
//! the problem needs iteration rather than a single backward pass.

use serde::{Deserialize, Serialize};

use super::config::{SolverConfig, SweepDiscipline};
use crate::{
    Result,
    game::{Action, Pig, Piglet, State, StateSpace, TransitionModel},
    ports::{NoopObserver, SweepObserver},
    types::TargetScore,
};

/// Outcome of a call to [`Solver::solve`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Whether the last sweep changed every value by less than the tolerance
    pub converged: bool,
    /// Sweeps performed by this call
    pub iterations_run: usize,
    /// Largest value change observed in the last sweep
    pub final_delta: f64,
}

/// Optimal-play solver for one variant and one target score.
///
/// The solver exclusively owns its state space, value table and policy
/// table. Values are only read through [`Solver::value_of`] (or
/// [`StateSpace::lookup`]), which resolves boundary states that are never
/// stored.
#[derive(Debug, Clone)]
pub struct Solver<M: TransitionModel> {
    model: M,
    space: StateSpace,
    values: Vec<f64>,
    policy: Vec<Option<Action>>,
    discipline: SweepDiscipline,
    iterations_run: usize,
    converged: Option<bool>,
    last_config: Option<SolverConfig>,
}

impl Solver<Pig> {
    /// Solver for Pig with target `target`.
    pub fn pig(target: u32) -> Result<Self> {
        Solver::new(Pig, target)
    }
}

impl Solver<Piglet> {
    /// Solver for Piglet with target `target`.
    pub fn piglet(target: u32) -> Result<Self> {
        Solver::new(Piglet, target)
    }
}

impl<M: TransitionModel> Solver<M> {
    /// Build the state space with every value at 0 and no policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTarget`] if `target` is zero.
    pub fn new(model: M, target: u32) -> Result<Self> {
        let target = TargetScore::new(target)?;
        let space = StateSpace::new(target);
        let len = space.len();
        Ok(Self {
            model,
            space,
            values: vec![0.0; len],
            policy: vec![None; len],
            discipline: SweepDiscipline::default(),
            iterations_run: 0,
            converged: None,
            last_config: None,
        })
    }

    /// Set the sweep discipline used by [`Solver::solve`].
    pub fn with_discipline(mut self, discipline: SweepDiscipline) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn space(&self) -> &StateSpace {
        &self.space
    }

    /// Enumerated states in sweep order.
    pub fn states(&self) -> &[State] {
        self.space.states()
    }

    pub fn target(&self) -> u32 {
        self.space.target()
    }

    pub fn discipline(&self) -> SweepDiscipline {
        self.discipline
    }

    /// Sweeps run by the most recent solve (0 before any solve).
    pub fn iterations_run(&self) -> usize {
        self.iterations_run
    }

    /// `None` until a solve has finished.
    pub fn converged(&self) -> Option<bool> {
        self.converged
    }

    /// Whether the most recent solve converged.
    pub fn is_solved(&self) -> bool {
        self.converged == Some(true)
    }

    /// Configuration of the most recent solve.
    pub fn last_config(&self) -> Option<&SolverConfig> {
        self.last_config.as_ref()
    }

    /// Probability that the player about to act in `state` wins under optimal play.
    ///
    /// States with `i + k >= T` are wins (1) and states with `j >= T` are
    /// losses (0), whether or not they are enumerated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StateOutOfDomain`] for a state the boundary rules and
    /// the enumerated space both fail to cover.
    pub fn value_of(&self, state: State) -> Result<f64> {
        self.space.lookup(&self.values, state)
    }

    /// Recorded action for an enumerated state (`None` before the first sweep).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StateOutOfDomain`] if `state` is not enumerated;
    /// boundary states end the game and carry no decision.
    pub fn action_of(&self, state: State) -> Result<Option<Action>> {
        self.space
            .index(state)
            .map(|index| self.policy[index])
            .ok_or_else(|| self.space.out_of_domain(state))
    }

    /// One-step Bellman expectation of `action` in `state` under the current table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StateOutOfDomain`] if `state` is not enumerated,
    /// like [`Solver::action_of`], and [`crate::Error::UnsupportedAction`] for
    /// an action the variant does not offer.
    pub fn value_action(&self, state: State, action: Action) -> Result<f64> {
        if !self.space.contains(state) {
            return Err(self.space.out_of_domain(state));
        }
        self.model
            .value_action(state, action, |next| self.space.lookup(&self.values, next))
    }

    /// Run value iteration with this solver's sweep discipline.
    ///
    /// Non-convergence after `max_iterations` sweeps is not an error: the
    /// report (and [`Solver::converged`]) carries `false` and a warning is
    /// logged. The tables then hold the values after the last sweep.
    ///
    /// # Errors
    ///
    /// Returns a configuration error, leaving the solver untouched, if
    /// `tolerance` is not positive and finite or `max_iterations` is zero.
    pub fn solve(&mut self, tolerance: f64, max_iterations: usize) -> Result<SolveReport> {
        let config = SolverConfig::new(tolerance, max_iterations).with_discipline(self.discipline);
        self.solve_with(&config, &mut NoopObserver)
    }

    /// Run value iteration as described by `config`, reporting every sweep to `observer`.
    ///
    /// A second call warm-starts from the current table.
    pub fn solve_with(
        &mut self,
        config: &SolverConfig,
        observer: &mut dyn SweepObserver,
    ) -> Result<SolveReport> {
        let tolerance = config.validate()?.value();
        observer.on_solve_start(&self.space, &self.values, config)?;

        let mut report = SolveReport {
            converged: false,
            iterations_run: config.max_iterations,
            final_delta: f64::INFINITY,
        };

        for sweep in 1..=config.max_iterations {
            let delta = self.sweep(config.discipline)?;
            log::debug!("sweep {sweep}: delta = {delta:e}");
            report.final_delta = delta;
            report.converged = delta < tolerance;

            // Record matches the tables before the observer can fail.
            self.iterations_run = sweep;
            self.converged = Some(report.converged);
            self.last_config = Some(*config);
            observer.on_sweep_end(sweep, delta, &self.space, &self.values)?;

            if report.converged {
                report.iterations_run = sweep;
                break;
            }
        }

        if report.converged {
            log::info!(
                "{} (T = {}) converged after {} sweeps (delta = {:e})",
                self.model.variant(),
                self.target(),
                report.iterations_run,
                report.final_delta
            );
        } else {
            log::warn!(
                "maximum number of iterations ({}) reached without convergence (delta = {:e} >= {:e})",
                config.max_iterations,
                report.final_delta,
                tolerance
            );
        }

        observer.on_solve_end(&report)?;
        Ok(report)
    }

    /// One pass over every state; returns the largest value change.
    ///
    /// New values go into a fresh table that replaces the current one only
    /// once the pass completes. Under [`SweepDiscipline::InPlace`] later
    /// states read from that fresh table, otherwise from the old one.
    fn sweep(&mut self, discipline: SweepDiscipline) -> Result<f64> {
        let mut values = self.values.clone();
        let mut policy = self.policy.clone();
        let mut delta = 0.0_f64;

        for &state in self.space.states() {
            let index = self
                .space
                .index(state)
                .ok_or_else(|| self.space.out_of_domain(state))?;
            let read: &[f64] = match discipline {
                SweepDiscipline::Synchronous => &self.values,
                SweepDiscipline::InPlace => &values,
            };
            let (action, value) = best_action(&self.model, &self.space, read, state)?;

            delta = delta.max((value - self.values[index]).abs());
            values[index] = value;
            policy[index] = Some(action);
        }

        self.values = values;
        self.policy = policy;
        Ok(delta)
    }
}

/// Maximizing action and its value; ties go to `Hold`.
fn best_action<M: TransitionModel>(
    model: &M,
    space: &StateSpace,
    values: &[f64],
    state: State,
) -> Result<(Action, f64)> {
    let lookup = |next: State| space.lookup(values, next);
    let hold = model.value_action(state, Action::Hold, lookup)?;
    let press_action = model.press_action();
    let press = model.value_action(state, press_action, lookup)?;

    if press > hold {
        Ok((press_action, press))
    } else {
        Ok((Action::Hold, hold))
    }
}

impl<M: TransitionModel> Solver<M> {
    /// Values and actions of every enumerated state, in lexicographic `(i, j, k)` order.
    pub fn entries(&self) -> impl Iterator<Item = (State, f64, Option<Action>)> + '_ {
        self.space.states().iter().rev().filter_map(|&state| {
            let index = self.space.index(state)?;
            Some((state, self.values[index], self.policy[index]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn fresh_solver_has_zero_values_and_no_policy() {
        let solver = Solver::pig(4).unwrap();
        assert_eq!(solver.converged(), None);
        assert_eq!(solver.iterations_run(), 0);
        for &state in solver.states() {
            assert_eq!(solver.value_of(state).unwrap(), 0.0);
            assert_eq!(solver.action_of(state).unwrap(), None);
        }
    }

    #[test]
    fn rejects_zero_target() {
        assert!(matches!(Solver::pig(0), Err(Error::InvalidTarget { .. })));
    }

    #[test]
    fn target_one_has_closed_form() {
        // V = (6 - V) / 6  =>  V = 6/7
        let mut solver = Solver::pig(1).unwrap();
        let report = solver.solve(1e-12, 1_000).unwrap();
        assert!(report.converged);
        assert!((solver.value_of(State::initial()).unwrap() - 6.0 / 7.0).abs() < 1e-9);
        assert_eq!(
            solver.action_of(State::initial()).unwrap(),
            Some(Action::Roll)
        );
    }

    #[test]
    fn invalid_config_leaves_solver_untouched() {
        let mut solver = Solver::pig(3).unwrap();
        assert!(solver.solve(-1.0, 10).is_err());
        assert!(solver.solve(1e-6, 0).is_err());
        assert_eq!(solver.converged(), None);
        assert!(solver.entries().all(|(_, value, action)| value == 0.0 && action.is_none()));
    }

    #[test]
    fn non_convergence_is_reported_not_raised() {
        let mut solver = Solver::pig(10).unwrap();
        let report = solver.solve(1e-15, 2).unwrap();
        assert!(!report.converged);
        assert_eq!(report.iterations_run, 2);
        assert_eq!(solver.converged(), Some(false));
        assert!(
            solver
                .entries()
                .all(|(_, _, action)| action.is_some())
        );
    }

    #[test]
    fn first_sweep_records_a_policy_everywhere() {
        let mut solver = Solver::piglet(3).unwrap();
        solver.solve(1.0, 1).unwrap();
        assert!(solver.entries().all(|(_, _, action)| action.is_some()));
    }

    #[test]
    fn value_action_rejects_states_outside_the_space() {
        let solver = Solver::pig(5).unwrap();
        for state in [
            State::new(u32::MAX, 0, 1),
            State::new(5, 0, 0),
            State::new(0, 5, 0),
            State::new(2, 1, 3),
        ] {
            for action in [Action::Hold, Action::Roll] {
                assert!(
                    matches!(
                        solver.value_action(state, action),
                        Err(Error::StateOutOfDomain { target: 5, .. })
                    ),
                    "{state} {action:?}"
                );
            }
        }
    }

    struct StopAfter(usize);

    impl SweepObserver for StopAfter {
        fn on_sweep_end(
            &mut self,
            sweep: usize,
            _delta: f64,
            _space: &StateSpace,
            _values: &[f64],
        ) -> Result<()> {
            if sweep >= self.0 {
                return Err(Error::InvalidConfiguration {
                    message: "stop".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn failing_observer_leaves_a_consistent_record() {
        let mut solver = Solver::piglet(4).unwrap();
        let config = SolverConfig::new(1e-9, 100);
        assert!(solver.solve_with(&config, &mut StopAfter(2)).is_err());

        assert_eq!(solver.iterations_run(), 2);
        assert_eq!(solver.converged(), Some(false));
        assert_eq!(solver.last_config(), Some(&config));
        assert!(solver.entries().all(|(_, _, action)| action.is_some()));
    }

    #[test]
    fn entries_are_lexicographic() {
        let solver = Solver::piglet(3).unwrap();
        let states: Vec<State> = solver.entries().map(|(state, _, _)| state).collect();
        let mut sorted = states.clone();
        sorted.sort();
        assert_eq!(states, sorted);
        assert_eq!(states.len(), solver.space().len());
    }
}
