//! Solve command - run value iteration and summarize the optimal policy

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::{find_policy_inversions, hold_thresholds},
    cli::{
        config::{SolverArgs, warn_if_unconverged},
        output::{
            format_number, format_percent, print_kv, print_section, print_subsection,
            print_threshold_grid,
        },
    },
    export::{SolvedTables, write_tables_json, write_thresholds_csv},
    game::{Pig, Piglet, State, TransitionModel, Variant},
    solver::{ConvergenceTrace, ProgressObserver, Solver},
};

#[derive(Parser, Debug)]
#[command(about = "Solve Pig or Piglet by value iteration")]
pub struct SolveArgs {
    #[command(flatten)]
    pub solver: SolverArgs,

    /// Write the value and policy tables to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write the hold-threshold grid to a CSV file
    #[arg(long)]
    pub thresholds: Option<PathBuf>,

    /// Record every state's value after each sweep (stored in the export)
    #[arg(long)]
    pub trace: bool,

    /// Print the threshold grid only for targets up to this size
    #[arg(long, default_value_t = 20)]
    pub grid_limit: u32,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    match args.solver.variant {
        Variant::Pig => run(Pig, &args),
        Variant::Piglet => run(Piglet, &args),
    }
}

fn run<M: TransitionModel>(model: M, args: &SolveArgs) -> Result<()> {
    let options = &args.solver;
    let (solver, trace) = if args.trace {
        let (solver, trace) = solve_traced(model, options)?;
        (solver, Some(trace))
    } else {
        (options.solve(model)?.0, None)
    };

    print_section(&format!(
        "{} with target {}",
        solver.model().variant(),
        solver.target()
    ));
    print_kv("States", &format_number(solver.space().len()));
    print_kv("Discipline", &solver.discipline().to_string());
    print_kv("Tolerance", &format!("{:e}", options.tolerance));
    print_kv("Sweeps", &solver.iterations_run().to_string());
    print_kv("Converged", &solver.is_solved().to_string());

    let start = State::initial();
    print_kv("P(win) at (0,0,0)", &format_percent(solver.value_of(start)?));
    if let Some(action) = solver.action_of(start)? {
        print_kv("Opening action", action.as_str());
    }

    let thresholds = hold_thresholds(&solver)?;
    let inversions = find_policy_inversions(&solver)?;
    print_kv("Policy inversions", &inversions.len().to_string());

    if solver.target() <= args.grid_limit {
        print_subsection("Hold thresholds (rows: own score i, columns: opponent score j)");
        print_threshold_grid(&thresholds);
    }

    if let Some(path) = &args.thresholds {
        write_thresholds_csv(path, &thresholds)?;
        println!("\nThresholds written to: {}", path.display());
    }

    if let Some(path) = &args.export {
        let mut tables = SolvedTables::from_solver(&solver);
        if let Some(trace) = trace {
            tables = tables.with_trace(trace);
        }
        write_tables_json(path, &tables)?;
        println!("\nTables written to: {}", path.display());
    }

    Ok(())
}

fn solve_traced<M: TransitionModel>(
    model: M,
    options: &SolverArgs,
) -> Result<(Solver<M>, ConvergenceTrace)> {
    let mut solver = Solver::new(model, options.target)?.with_discipline(options.discipline);
    let config = options.config();
    let mut trace = ConvergenceTrace::all_states();
    let report = if options.quiet {
        solver.solve_with(&config, &mut trace)?
    } else {
        let mut observers = (trace, ProgressObserver::new());
        let report = solver.solve_with(&config, &mut observers)?;
        trace = observers.0;
        report
    };
    warn_if_unconverged(&report, options.tolerance);
    Ok((solver, trace))
}
