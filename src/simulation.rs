//! Monte-Carlo play
//!
//! Games are played between [`Strategy`](crate::ports::Strategy)
//! implementations using the same transition model the solver uses, so
//! simulated win rates can be checked against the solved values.

pub mod engine;
pub mod strategies;
pub mod tournament;

pub use engine::{GameRecord, GameSetup, Seat, SimulationConfig, simulate_game};
pub use strategies::{AlwaysPressStrategy, HoldAtStrategy, OptimalStrategy};
pub use tournament::{StartingScoreStats, Tournament, TournamentStats, simulate_many};
