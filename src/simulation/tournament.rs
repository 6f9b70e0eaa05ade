//! Batches of games: starting-score sweeps and head-to-head tournaments

use serde::{Deserialize, Serialize};

use super::{
    engine::{GameSetup, Seat, SimulationConfig, simulate_game},
    strategies::OptimalStrategy,
};
use crate::{
    Result,
    analysis::stats::{Proportion, SampleSummary},
    game::TransitionModel,
    ports::Strategy,
    solver::Solver,
};

/// Self-play results for the opener starting from one banked score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartingScoreStats {
    pub start_score: u32,
    pub games: usize,
    /// Games won by the opener
    pub wins: usize,
    /// Opener's turns in the games it won
    pub turns_to_win: Option<SampleSummary>,
    /// Opener's winning margin in the games it won
    pub margin: Option<SampleSummary>,
}

impl StartingScoreStats {
    pub fn win_rate(&self) -> Proportion {
        Proportion::new(self.wins, self.games)
    }
}

/// Optimal self-play from every starting score `i` in `[0, T)` against an
/// opponent at 0, with the player at `i` opening every game.
///
/// Plays `config.games` games per starting score, each capped at
/// `config.max_turns`. The opener's win rate at `i` estimates `V(i, 0, 0)`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidGameCount`] if `config.games` is zero, or any error
/// raised while playing.
pub fn simulate_many<M, R>(
    solver: &Solver<M>,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<Vec<StartingScoreStats>>
where
    M: TransitionModel,
    R: rand::Rng + ?Sized,
{
    config.validate()?;
    let games = config.games;

    let optimal = OptimalStrategy::new(solver);
    let target = solver.target();
    let mut results = Vec::with_capacity(target as usize);

    for start_score in 0..target {
        let setup = GameSetup::new(target)
            .with_start_scores(start_score, 0)
            .with_max_turns(config.max_turns);
        let mut wins = 0;
        let mut turns = Vec::new();
        let mut margins = Vec::new();

        for _ in 0..games {
            let record = simulate_game(solver.model(), &setup, [&optimal, &optimal], rng)?;
            if record.winner == Seat::First {
                wins += 1;
                turns.push(record.turns_of(Seat::First) as f64);
                margins.push(f64::from(record.margin()));
            }
        }

        log::debug!("start score {start_score}: {wins}/{games} wins");
        results.push(StartingScoreStats {
            start_score,
            games,
            wins,
            turns_to_win: SampleSummary::from_samples(&turns),
            margin: SampleSummary::from_samples(&margins),
        });
    }

    Ok(results)
}

/// Head-to-head results between two strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentStats {
    pub names: [String; 2],
    pub games: usize,
    /// Wins per contestant, in the order the strategies were passed
    pub wins: [usize; 2],
    /// Games won by whoever opened
    pub opener_wins: usize,
    /// Total turns per game
    pub game_length: Option<SampleSummary>,
    /// Winner's margin per game
    pub margin: Option<SampleSummary>,
}

impl TournamentStats {
    pub fn win_rate(&self, contestant: usize) -> Proportion {
        Proportion::new(self.wins[contestant], self.games)
    }

    pub fn opener_advantage(&self) -> Proportion {
        Proportion::new(self.opener_wins, self.games)
    }
}

/// Plays two strategies against each other, alternating who opens.
pub struct Tournament<'a, M: TransitionModel> {
    model: &'a M,
    target: u32,
    config: SimulationConfig,
}

impl<'a, M: TransitionModel> Tournament<'a, M> {
    pub fn new(model: &'a M, target: u32, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            model,
            target,
            config,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run `config.games` games; `first` opens the even-numbered ones.
    pub fn run<R>(
        &self,
        first: &dyn Strategy,
        second: &dyn Strategy,
        rng: &mut R,
    ) -> Result<TournamentStats>
    where
        R: rand::Rng + ?Sized,
    {
        let setup = GameSetup::new(self.target).with_max_turns(self.config.max_turns);
        let mut wins = [0_usize; 2];
        let mut opener_wins = 0;
        let mut lengths = Vec::with_capacity(self.config.games);
        let mut margins = Vec::with_capacity(self.config.games);

        for game in 0..self.config.games {
            let swapped = game % 2 == 1;
            let seats: [&dyn Strategy; 2] = if swapped {
                [second, first]
            } else {
                [first, second]
            };
            let record = simulate_game(self.model, &setup, seats, rng)?;

            let winner = match (record.winner, swapped) {
                (Seat::First, false) | (Seat::Second, true) => 0,
                _ => 1,
            };
            wins[winner] += 1;
            if record.winner == record.first_player {
                opener_wins += 1;
            }
            lengths.push(record.total_turns() as f64);
            margins.push(f64::from(record.margin()));
        }

        let stats = TournamentStats {
            names: [first.name().to_string(), second.name().to_string()],
            games: self.config.games,
            wins,
            opener_wins,
            game_length: SampleSummary::from_samples(&lengths),
            margin: SampleSummary::from_samples(&margins),
        };
        log::info!(
            "{} vs {}: {}-{} over {} games",
            stats.names[0],
            stats.names[1],
            stats.wins[0],
            stats.wins[1],
            stats.games
        );
        Ok(stats)
    }

    /// Run with the generator described by the configuration's seed.
    pub fn run_seeded(&self, first: &dyn Strategy, second: &dyn Strategy) -> Result<TournamentStats> {
        let mut rng = self.config.rng();
        self.run(first, second, &mut rng)
    }
}
