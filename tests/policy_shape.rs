//! Shape of the optimal policy: thresholds, frontier, monotonicity, reachability

use std::collections::HashSet;

use pig_solver::{
    Action, State,
    analysis::{
        find_policy_inversions, hold_thresholds, monotonicity_violations, press_frontier,
        reachable_states,
    },
    game::{OutcomeKind, TransitionModel},
};

mod common;

use common::{solved_pig, solved_piglet};

#[test]
fn no_policy_inversions_at_twenty() {
    assert!(find_policy_inversions(&solved_pig(20)).unwrap().is_empty());
    assert!(find_policy_inversions(&solved_piglet(20)).unwrap().is_empty());
}

#[test]
fn sampled_slices_are_single_thresholds() {
    let solver = solved_piglet(20);
    for (i, j) in [(0, 0), (0, 19), (5, 12), (10, 10), (19, 0), (13, 7)] {
        let mut held = false;
        for k in 0..(20 - i) {
            let action = solver.action_of(State::new(i, j, k)).unwrap();
            match action {
                Some(Action::Hold) => held = true,
                Some(Action::Flip) => assert!(!held, "flip above a hold at ({i}, {j}, {k})"),
                other => panic!("unexpected action {other:?} at ({i}, {j}, {k})"),
            }
        }
    }
}

#[test]
fn values_do_not_decrease_with_own_score() {
    assert!(monotonicity_violations(&solved_pig(20), 1e-9).unwrap().is_empty());
    assert!(monotonicity_violations(&solved_piglet(15), 1e-9).unwrap().is_empty());
}

#[test]
fn piglet_to_ten_threshold_rows() {
    let thresholds = hold_thresholds(&solved_piglet(10)).unwrap();
    assert_eq!(
        thresholds.row(0).unwrap(),
        &[2, 2, 2, 2, 2, 2, 2, 2, 3, 10]
    );
    assert_eq!(thresholds.row(9).unwrap(), &[1; 10]);
}

#[test]
fn short_pig_never_holds() {
    // Up to a target of 30, handing the opponent a fresh turn costs more
    // than the bust risk of rolling on.
    let solver = solved_pig(20);
    let thresholds = hold_thresholds(&solver).unwrap();
    for (i, _, hold_at) in thresholds.iter() {
        assert_eq!(hold_at, 20 - i);
    }
}

#[test]
fn longer_pig_holds_at_the_opening() {
    let thresholds = hold_thresholds(&solved_pig(40)).unwrap();
    assert_eq!(thresholds.get(0, 0), Some(18));
}

#[test]
fn frontier_matches_thresholds() {
    let solver = solved_piglet(20);
    let thresholds = hold_thresholds(&solver).unwrap();
    let frontier: HashSet<State> = press_frontier(&solver).unwrap().into_iter().collect();

    for (i, j, hold_at) in thresholds.iter() {
        if hold_at == 0 {
            continue;
        }
        assert!(frontier.contains(&State::new(i, j, hold_at - 1)), "({i}, {j})");
    }
    assert!(frontier.iter().all(|state| {
        thresholds.get(state.score, state.opponent_score) == Some(state.turn_total + 1)
    }));
}

#[test]
fn reachable_set_is_closed_under_the_policy() {
    let solver = solved_piglet(10);
    let reachable = reachable_states(&solver, State::initial()).unwrap();
    let set: HashSet<State> = reachable.iter().copied().collect();

    assert!(set.contains(&State::initial()));
    assert!(reachable.windows(2).all(|pair| pair[0] < pair[1]));
    for &state in &reachable {
        assert!(solver.space().contains(state));
        let successors = match solver.action_of(state).unwrap() {
            Some(Action::Hold) => vec![state.after_hold()],
            _ => solver
                .model()
                .outcomes()
                .iter()
                .map(|outcome| match outcome.kind {
                    OutcomeKind::Bust => state.after_bust(),
                    OutcomeKind::Gain(points) => state.after_gain(points),
                })
                .collect(),
        };
        for next in successors {
            if solver.space().contains(next) {
                assert!(set.contains(&next), "{state} -> {next}");
            }
        }
    }
    assert!(reachable.len() < solver.space().len());
}

#[test]
fn pig_reachable_turn_totals_stay_on_the_opening_turn() {
    let solver = solved_pig(20);
    let reachable = reachable_states(&solver, State::initial()).unwrap();
    let mut expected = vec![State::initial()];
    expected.extend((2..20).map(|k| State::new(0, 0, k)));
    assert_eq!(reachable, expected);
}
