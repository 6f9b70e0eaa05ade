//! Single-game simulation

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{OutcomeKind, State, TransitionModel},
    ports::Strategy,
    types::TargetScore,
};

/// Turn budget after which a game is abandoned.
pub const DEFAULT_MAX_TURNS: usize = 10_000;

/// Seat at the table; `First` opens the game unless told otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play
    pub games: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Turns after which a single game is abandoned with an error
    pub max_turns: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 1_000,
            seed: None,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl SimulationConfig {
    pub fn new(games: usize) -> Self {
        Self {
            games,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(Error::InvalidGameCount);
        }
        if self.max_turns == 0 {
            return Err(Error::InvalidConfiguration {
                message: "max_turns must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Seeded generator, or a randomly seeded one when no seed is set.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.unwrap_or_else(rand::random::<u64>))
    }
}

/// Who opens, from which scores, and how long a game may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub target: u32,
    pub first_player: Seat,
    /// Banked scores before the first turn, by seat
    pub start_scores: [u32; 2],
    pub max_turns: usize,
}

impl GameSetup {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            first_player: Seat::First,
            start_scores: [0, 0],
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    pub fn with_first_player(mut self, seat: Seat) -> Self {
        self.first_player = seat;
        self
    }

    pub fn with_start_scores(mut self, first: u32, second: u32) -> Self {
        self.start_scores = [first, second];
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    fn validate(&self) -> Result<u32> {
        let target = TargetScore::new(self.target)?.value();
        if let Some(&score) = self.start_scores.iter().find(|&&score| score >= target) {
            return Err(Error::InvalidStartingScore { score, target });
        }
        Ok(target)
    }
}

/// Result of one simulated game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub first_player: Seat,
    pub winner: Seat,
    /// Turns taken by each seat, the winning turn included
    pub turns: [usize; 2],
    /// Banked scores when the game ended, by seat
    pub scores: [u32; 2],
}

impl GameRecord {
    pub fn turns_of(&self, seat: Seat) -> usize {
        self.turns[seat.index()]
    }

    pub fn total_turns(&self) -> usize {
        self.turns.iter().sum()
    }

    /// Winner's score minus loser's score.
    pub fn margin(&self) -> u32 {
        self.scores[self.winner.index()].saturating_sub(self.scores[self.winner.other().index()])
    }
}

/// Play one game between `strategies` (indexed by seat).
///
/// A turn ends when the strategy holds, the press action busts, or the
/// turn total reaches the target, which banks it without asking the
/// strategy.
///
/// # Errors
///
/// - [`Error::InvalidTarget`] or [`Error::InvalidStartingScore`] for a bad setup
/// - [`Error::UnsupportedAction`] if a strategy picks an action the model lacks
/// - [`Error::TurnLimitExceeded`] if nobody wins within `setup.max_turns`
pub fn simulate_game<M, R>(
    model: &M,
    setup: &GameSetup,
    strategies: [&dyn Strategy; 2],
    rng: &mut R,
) -> Result<GameRecord>
where
    M: TransitionModel,
    R: rand::Rng + ?Sized,
{
    let target = setup.validate()?;
    let mut scores = setup.start_scores;
    let mut turns = [0_usize; 2];
    let mut seat = setup.first_player;

    for _ in 0..setup.max_turns {
        let me = seat.index();
        let them = seat.other().index();
        let banked = play_turn(model, target, strategies[me], scores[me], scores[them], rng)?;

        turns[me] += 1;
        scores[me] += banked;
        if scores[me] >= target {
            return Ok(GameRecord {
                first_player: setup.first_player,
                winner: seat,
                turns,
                scores,
            });
        }
        seat = seat.other();
    }

    Err(Error::TurnLimitExceeded {
        turns: setup.max_turns,
    })
}

/// Points banked by one turn.
fn play_turn<M, R>(
    model: &M,
    target: u32,
    strategy: &dyn Strategy,
    score: u32,
    opponent_score: u32,
    rng: &mut R,
) -> Result<u32>
where
    M: TransitionModel,
    R: rand::Rng + ?Sized,
{
    let mut turn_total = 0;
    loop {
        if score + turn_total >= target {
            return Ok(turn_total);
        }

        let action = strategy.choose(State::new(score, opponent_score, turn_total))?;
        if !model.supports(action) {
            return Err(Error::UnsupportedAction {
                action: action.to_string(),
                variant: model.variant().to_string(),
            });
        }
        if action.is_hold() {
            return Ok(turn_total);
        }

        match model.sample_outcome(rng) {
            OutcomeKind::Bust => return Ok(0),
            OutcomeKind::Gain(points) => turn_total += points,
        }
    }
}
