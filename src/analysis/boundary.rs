//! Shape of the hold/press decision boundary

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    game::{Action, State, TransitionModel},
    solver::Solver,
};

/// Smallest turn total at which the policy holds, for every `(i, j)`.
///
/// A slice in which the policy never holds records `T - i`, one past the
/// largest enumerated turn total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldThresholds {
    target: u32,
    rows: Vec<Vec<u32>>,
}

impl HoldThresholds {
    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn get(&self, score: u32, opponent_score: u32) -> Option<u32> {
        self.rows
            .get(score as usize)?
            .get(opponent_score as usize)
            .copied()
    }

    /// Thresholds for banked score `score`, indexed by opponent score.
    pub fn row(&self, score: u32) -> Option<&[u32]> {
        self.rows.get(score as usize).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// `(i, j, hold_at)` triples in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, &hold_at)| (i as u32, j as u32, hold_at))
        })
    }
}

/// Hold threshold of every `(i, j)` slice.
pub fn hold_thresholds<M: TransitionModel>(solver: &Solver<M>) -> Result<HoldThresholds> {
    let t = solver.target();
    let mut rows = Vec::with_capacity(t as usize);
    for i in 0..t {
        let mut row = Vec::with_capacity(t as usize);
        for j in 0..t {
            let mut hold_at = t - i;
            for k in 0..(t - i) {
                if solver.action_of(State::new(i, j, k))? == Some(Action::Hold) {
                    hold_at = k;
                    break;
                }
            }
            row.push(hold_at);
        }
        rows.push(row);
    }
    Ok(HoldThresholds { target: t, rows })
}

/// Pressing states whose `k + 1` neighbour holds or is no longer enumerated.
///
/// These are the last states of each slice at which the player keeps going,
/// in lexicographic order.
pub fn press_frontier<M: TransitionModel>(solver: &Solver<M>) -> Result<Vec<State>> {
    let mut frontier = Vec::new();
    for (state, _, action) in solver.entries() {
        if !action.is_some_and(Action::is_press) {
            continue;
        }
        let next = state.after_gain(1);
        let next_holds = !solver.space().contains(next)
            || solver.action_of(next)? != Some(solver.model().press_action());
        if next_holds {
            frontier.push(state);
        }
    }
    Ok(frontier)
}

/// States that press although a smaller turn total in the same `(i, j)`
/// slice holds.
///
/// An empty result means every slice is a single threshold: press below it,
/// hold from it on.
pub fn find_policy_inversions<M: TransitionModel>(solver: &Solver<M>) -> Result<Vec<State>> {
    let t = solver.target();
    let mut inversions = Vec::new();
    for i in 0..t {
        for j in 0..t {
            let mut held = false;
            for k in 0..(t - i) {
                let state = State::new(i, j, k);
                match solver.action_of(state)? {
                    Some(Action::Hold) => held = true,
                    Some(_) if held => inversions.push(state),
                    _ => {}
                }
            }
        }
    }
    Ok(inversions)
}

/// States where one more banked point lowers the win probability by more
/// than `epsilon`: `V(i + 1, j, k) < V(i, j, k) - epsilon`.
pub fn monotonicity_violations<M: TransitionModel>(
    solver: &Solver<M>,
    epsilon: f64,
) -> Result<Vec<State>> {
    let mut violations = Vec::new();
    for (state, value, _) in solver.entries() {
        let richer = State::new(state.score + 1, state.opponent_score, state.turn_total);
        if solver.value_of(richer)? < value - epsilon {
            violations.push(state);
        }
    }
    Ok(violations)
}
