//! Simulate command - optimal self-play from every starting score

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{SimulationArgs, SolverArgs},
        output::{create_spinner, format_number, format_percent, print_section},
    },
    game::{Pig, Piglet, State, TransitionModel, Variant},
    simulation::simulate_many,
};

#[derive(Parser, Debug)]
#[command(about = "Play optimal self-play games from each starting score")]
pub struct SimulateArgs {
    #[command(flatten)]
    pub solver: SolverArgs,

    #[command(flatten)]
    pub simulation: SimulationArgs,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    match args.solver.variant {
        Variant::Pig => run(Pig, &args),
        Variant::Piglet => run(Piglet, &args),
    }
}

fn run<M: TransitionModel>(model: M, args: &SimulateArgs) -> Result<()> {
    let (solver, _) = args.solver.solve(model)?;
    let config = args.simulation.config();
    let mut rng = config.rng();

    let spinner = create_spinner(&format!(
        "Playing {} games per starting score...",
        format_number(config.games)
    ))?;
    let stats = simulate_many(&solver, &config, &mut rng)?;
    spinner.finish_and_clear();

    print_section(&format!(
        "{} with target {}: optimal self-play, opponent starts at 0",
        solver.model().variant(),
        solver.target()
    ));
    println!(
        "{:>6} {:>10} {:>10} {:>14} {:>12}",
        "start", "V(i,0,0)", "win rate", "turns to win", "margin"
    );
    for row in &stats {
        let expected = solver.value_of(State::new(row.start_score, 0, 0))?;
        let turns = row
            .turns_to_win
            .map_or_else(|| "-".to_string(), |summary| format!("{:.2}", summary.mean));
        let margin = row
            .margin
            .map_or_else(|| "-".to_string(), |summary| format!("{:.2}", summary.mean));
        println!(
            "{:>6} {:>10} {:>10} {:>14} {:>12}",
            row.start_score,
            format_percent(expected),
            format_percent(row.win_rate().rate()),
            turns,
            margin
        );
    }

    Ok(())
}
