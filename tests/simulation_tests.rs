//! Monte-Carlo play checked against the solved values

use pig_solver::{
    Error, Pig, Piglet, State,
    ports::Strategy,
    simulation::{
        AlwaysPressStrategy, GameSetup, HoldAtStrategy, OptimalStrategy, Seat, SimulationConfig,
        Tournament, simulate_game, simulate_many,
    },
};
use rand::{SeedableRng, rngs::StdRng};

mod common;

use common::{solved_pig, solved_piglet};

#[test]
fn self_play_win_rates_track_solved_values() {
    let solver = solved_pig(10);
    let mut rng = StdRng::seed_from_u64(2024);
    let stats = simulate_many(&solver, &SimulationConfig::new(2_000), &mut rng).unwrap();

    assert_eq!(stats.len(), 10);
    for row in &stats {
        let expected = solver.value_of(State::new(row.start_score, 0, 0)).unwrap();
        let observed = row.win_rate().rate();
        assert!(
            (observed - expected).abs() < 0.05,
            "start {}: observed {observed}, expected {expected}",
            row.start_score
        );
    }
    assert!(stats[9].win_rate().rate() > stats[0].win_rate().rate());
}

#[test]
fn winning_games_report_turns_and_margin() {
    let solver = solved_piglet(6);
    let mut rng = StdRng::seed_from_u64(5);
    for row in simulate_many(&solver, &SimulationConfig::new(200), &mut rng).unwrap() {
        if row.wins == 0 {
            assert!(row.turns_to_win.is_none());
            continue;
        }
        let turns = row.turns_to_win.unwrap();
        let margin = row.margin.unwrap();
        assert_eq!(turns.count, row.wins);
        assert!(turns.min >= 1.0);
        assert!(margin.min >= 1.0);
        assert!(margin.max <= 6.0);
    }
}

#[test]
fn opener_advantage_matches_initial_value() {
    let solver = solved_pig(20);
    let optimal = OptimalStrategy::new(&solver);
    let config = SimulationConfig::new(2_000).with_seed(17);
    let tournament = Tournament::new(&Pig, 20, config).unwrap();
    let stats = tournament.run_seeded(&optimal, &optimal).unwrap();

    let expected = solver.value_of(State::initial()).unwrap();
    let observed = stats.opener_advantage().rate();
    assert!(
        (observed - expected).abs() < 0.05,
        "observed {observed}, expected {expected}"
    );
}

#[test]
fn optimal_beats_hold_at_ten() {
    let solver = solved_pig(20);
    let optimal = OptimalStrategy::new(&solver);
    let baseline = HoldAtStrategy::new(&Pig, 10).unwrap();
    let tournament = Tournament::new(&Pig, 20, SimulationConfig::new(2_000).with_seed(3)).unwrap();
    let stats = tournament.run_seeded(&optimal, &baseline).unwrap();

    assert_eq!(stats.names[0], "optimal");
    assert_eq!(stats.wins[0] + stats.wins[1], 2_000);
    assert!(stats.win_rate(0).rate() > 0.6, "{:?}", stats.win_rate(0));
    let length = stats.game_length.unwrap();
    assert!(length.mean >= 1.0);
    assert!(length.std_dev > 0.0);
}

#[test]
fn seeded_games_are_reproducible() {
    let solver = solved_piglet(8);
    let optimal = OptimalStrategy::new(&solver);
    let press = AlwaysPressStrategy::new(&Piglet);
    let setup = GameSetup::new(8).with_first_player(Seat::Second);

    let seats: [&dyn Strategy; 2] = [&optimal, &press];

    let play = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..20)
            .map(|_| simulate_game(&Piglet, &setup, seats, &mut rng).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(play(99), play(99));
}

#[test]
fn strategies_must_match_the_variant() {
    let pig_baseline = HoldAtStrategy::new(&Pig, 3).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let strategies: [&dyn Strategy; 2] = [&pig_baseline, &pig_baseline];
    assert!(matches!(
        simulate_game(&Piglet, &GameSetup::new(5), strategies, &mut rng),
        Err(Error::UnsupportedAction { .. })
    ));
}

#[test]
fn tournament_rejects_empty_runs() {
    assert!(matches!(
        Tournament::new(&Pig, 10, SimulationConfig::new(0)),
        Err(Error::InvalidGameCount)
    ));
}
