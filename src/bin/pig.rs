//! Pig CLI - optimal play for Pig and Piglet
//!
//! This CLI provides a unified interface for:
//! - Solving a variant by value iteration and exporting the tables
//! - Querying the value and best action of a single state
//! - Simulating optimal self-play from every starting score
//! - Comparing the optimal strategy with a hold-at-N baseline
//!
//! Set `RUST_LOG` (for example `RUST_LOG=debug`) to see per-sweep logging.

use anyhow::Result;
use clap::{Parser, Subcommand};
use flexi_logger::Logger;

#[derive(Parser)]
#[command(name = "pig")]
#[command(version, about = "Optimal-play solver for Pig and Piglet", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a variant and summarize the optimal policy
    Solve(pig_solver::cli::commands::solve::SolveArgs),

    /// Show the win probability and best action for one state
    Query(pig_solver::cli::commands::query::QueryArgs),

    /// Simulate optimal self-play from every starting score
    Simulate(pig_solver::cli::commands::simulate::SimulateArgs),

    /// Compare the optimal strategy with a hold-at-N baseline
    Compare(pig_solver::cli::commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str("warn")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    match cli.command {
        Commands::Solve(args) => pig_solver::cli::commands::solve::execute(args),
        Commands::Query(args) => pig_solver::cli::commands::query::execute(args),
        Commands::Simulate(args) => pig_solver::cli::commands::simulate::execute(args),
        Commands::Compare(args) => pig_solver::cli::commands::compare::execute(args),
    }
}
