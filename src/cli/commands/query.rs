//! Query command - inspect the solved value and action of one state

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::SolverArgs,
        output::{format_percent, print_kv, print_section},
    },
    game::{Action, Pig, Piglet, Resolution, State, TransitionModel, Variant},
};

#[derive(Parser, Debug)]
#[command(about = "Show the win probability and best action for a state")]
pub struct QueryArgs {
    #[command(flatten)]
    pub solver: SolverArgs,

    /// State as `i,j,k` (own score, opponent score, turn total)
    #[arg(long, short = 's')]
    pub state: State,
}

pub fn execute(args: QueryArgs) -> Result<()> {
    match args.solver.variant {
        Variant::Pig => run(Pig, &args),
        Variant::Piglet => run(Piglet, &args),
    }
}

fn run<M: TransitionModel>(model: M, args: &QueryArgs) -> Result<()> {
    let (solver, _) = args.solver.solve(model)?;
    let state = args.state;

    print_section(&format!(
        "{} with target {}: state {state}",
        solver.model().variant(),
        solver.target()
    ));
    print_kv("P(win)", &format_percent(solver.value_of(state)?));

    match solver.space().resolve(state)? {
        Resolution::Win => print_kv("Status", "win (turn total reaches the target)"),
        Resolution::Loss => print_kv("Status", "loss (opponent already reached the target)"),
        Resolution::Stored(_) => {
            let press = solver.model().press_action();
            print_kv(
                &format!("Value of {}", Action::Hold),
                &format_percent(solver.value_action(state, Action::Hold)?),
            );
            print_kv(
                &format!("Value of {press}"),
                &format_percent(solver.value_action(state, press)?),
            );
            if let Some(action) = solver.action_of(state)? {
                print_kv("Optimal action", action.as_str());
            }
        }
    }

    Ok(())
}
