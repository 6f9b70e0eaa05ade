//! Compare command - optimal play against a hold-at-N baseline

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{SimulationArgs, SolverArgs},
        output::{create_spinner, format_number, format_percent, print_kv, print_section},
    },
    game::{Pig, Piglet, TransitionModel, Variant},
    ports::Strategy,
    simulation::{HoldAtStrategy, OptimalStrategy, Tournament},
};

#[derive(Parser, Debug)]
#[command(about = "Compare the optimal strategy with a hold-at-N baseline")]
pub struct CompareArgs {
    #[command(flatten)]
    pub solver: SolverArgs,

    #[command(flatten)]
    pub simulation: SimulationArgs,

    /// Turn total at which the baseline holds
    #[arg(long, default_value_t = 20)]
    pub hold_at: u32,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    match args.solver.variant {
        Variant::Pig => run(Pig, &args),
        Variant::Piglet => run(Piglet, &args),
    }
}

fn run<M: TransitionModel>(model: M, args: &CompareArgs) -> Result<()> {
    let (solver, _) = args.solver.solve(model)?;
    let optimal = OptimalStrategy::new(&solver);
    let baseline = HoldAtStrategy::new(solver.model(), args.hold_at)?;
    let tournament = Tournament::new(solver.model(), solver.target(), args.simulation.config())?;

    let spinner = create_spinner(&format!(
        "Playing {} games...",
        format_number(tournament.config().games)
    ))?;
    let stats = tournament.run_seeded(&optimal, &baseline)?;
    spinner.finish_and_clear();

    print_section(&format!(
        "{} vs {} ({} to {})",
        optimal.name(),
        baseline.name(),
        solver.model().variant(),
        solver.target()
    ));
    print_kv("Games", &format_number(stats.games));
    for (contestant, name) in stats.names.iter().enumerate() {
        let rate = stats.win_rate(contestant);
        print_kv(
            name,
            &format!(
                "{} wins ({} +/- {})",
                format_number(stats.wins[contestant]),
                format_percent(rate.rate()),
                format_percent(rate.ci95_half_width())
            ),
        );
    }
    print_kv(
        "Opener wins",
        &format_percent(stats.opener_advantage().rate()),
    );
    if let Some(length) = stats.game_length {
        print_kv(
            "Game length",
            &format!("{:.2} +/- {:.2} turns", length.mean, length.std_dev),
        );
    }
    if let Some(margin) = stats.margin {
        print_kv("Mean margin", &format!("{:.2} points", margin.mean));
    }

    Ok(())
}
