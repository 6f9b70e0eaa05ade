//! Built-in strategies

use crate::{
    Error, Result,
    game::{Action, State, TransitionModel},
    ports::Strategy,
    solver::Solver,
};

/// Plays the solver's recorded policy.
///
/// States without a recorded action (an unsolved table) fall back to `Hold`.
pub struct OptimalStrategy<'a, M: TransitionModel> {
    solver: &'a Solver<M>,
}

impl<'a, M: TransitionModel> OptimalStrategy<'a, M> {
    pub fn new(solver: &'a Solver<M>) -> Self {
        Self { solver }
    }
}

impl<M: TransitionModel> Strategy for OptimalStrategy<'_, M> {
    fn choose(&self, state: State) -> Result<Action> {
        Ok(self.solver.action_of(state)?.unwrap_or(Action::Hold))
    }

    fn name(&self) -> &str {
        "optimal"
    }
}

/// Presses on until the turn total reaches a fixed threshold, then holds.
#[derive(Debug, Clone)]
pub struct HoldAtStrategy {
    threshold: u32,
    press: Action,
    name: String,
}

impl HoldAtStrategy {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a zero threshold, which
    /// would hold an empty turn total forever.
    pub fn new(model: &impl TransitionModel, threshold: u32) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::InvalidConfiguration {
                message: "hold threshold must be at least 1".to_string(),
            });
        }
        Ok(Self {
            threshold,
            press: model.press_action(),
            name: format!("hold-at-{threshold}"),
        })
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Strategy for HoldAtStrategy {
    fn choose(&self, state: State) -> Result<Action> {
        if state.turn_total >= self.threshold {
            Ok(Action::Hold)
        } else {
            Ok(self.press)
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Never holds; a turn ends only on a bust or on reaching the target.
#[derive(Debug, Clone)]
pub struct AlwaysPressStrategy {
    press: Action,
    name: String,
}

impl AlwaysPressStrategy {
    pub fn new(model: &impl TransitionModel) -> Self {
        let press = model.press_action();
        Self {
            press,
            name: format!("always-{press}"),
        }
    }
}

impl Strategy for AlwaysPressStrategy {
    fn choose(&self, _state: State) -> Result<Action> {
        Ok(self.press)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
