//! States visited when both players follow the recorded policy

use std::collections::{HashSet, VecDeque};

use crate::{
    Result,
    game::{Action, OutcomeKind, State, TransitionModel},
    solver::Solver,
};

/// Breadth-first search from `start` over every state either player can
/// reach under the solver's policy, in lexicographic order.
///
/// Holding or busting continues from the opponent's seat; a gain that
/// reaches the target ends the game. States without a recorded action are
/// treated as holds.
///
/// # Errors
///
/// Returns [`crate::Error::StateOutOfDomain`] if `start` is not an enumerated state.
pub fn reachable_states<M: TransitionModel>(
    solver: &Solver<M>,
    start: State,
) -> Result<Vec<State>> {
    solver.action_of(start)?;

    let space = solver.space();
    let model = solver.model();
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(state) = queue.pop_front() {
        let action = solver.action_of(state)?.unwrap_or(Action::Hold);
        let successors: Vec<State> = if action.is_hold() {
            vec![state.after_hold()]
        } else {
            model
                .outcomes()
                .iter()
                .map(|outcome| match outcome.kind {
                    OutcomeKind::Bust => state.after_bust(),
                    OutcomeKind::Gain(points) => state.after_gain(points),
                })
                .collect()
        };

        for next in successors {
            if space.contains(next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    let mut states: Vec<State> = visited.into_iter().collect();
    states.sort();
    Ok(states)
}
