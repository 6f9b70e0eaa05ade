//! JSON snapshot of a solver's tables

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{Action, TransitionModel, Variant},
    solver::{ConvergenceTrace, Solver, SolverConfig, TraceSeries},
};

/// Value and recorded action of one enumerated state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRow {
    pub i: u32,
    pub j: u32,
    pub k: u32,
    pub value: f64,
    pub action: Option<Action>,
}

/// Everything needed to plot or audit a solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolvedTables {
    pub variant: Variant,
    pub target: u32,
    pub config: Option<SolverConfig>,
    pub converged: Option<bool>,
    pub iterations_run: usize,
    /// One row per enumerated state, in lexicographic order
    pub rows: Vec<StateRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceSeries>>,
}

impl SolvedTables {
    pub fn from_solver<M: TransitionModel>(solver: &Solver<M>) -> Self {
        let rows = solver
            .entries()
            .map(|(state, value, action)| StateRow {
                i: state.score,
                j: state.opponent_score,
                k: state.turn_total,
                value,
                action,
            })
            .collect();

        Self {
            variant: solver.model().variant(),
            target: solver.target(),
            config: solver.last_config().copied(),
            converged: solver.converged(),
            iterations_run: solver.iterations_run(),
            rows,
            trace: None,
        }
    }

    pub fn with_trace(mut self, trace: ConvergenceTrace) -> Self {
        self.trace = Some(trace.into_series());
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
    }
}

/// Write `tables` to `path` as pretty-printed JSON.
pub fn write_tables_json<P: AsRef<Path>>(path: P, tables: &SolvedTables) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    write_pretty(file, tables, &path.display().to_string())?;
    log::info!("wrote {} state rows to {}", tables.rows.len(), path.display());
    Ok(())
}

/// Serialize through a buffer and flush it, so a failed final write surfaces.
fn write_pretty<W: Write>(writer: W, tables: &SolvedTables, destination: &str) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, tables)?;
    writer.flush().map_err(|source| Error::Io {
        operation: format!("flush {destination}"),
        source,
    })
}
