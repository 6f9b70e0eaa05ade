//! Export of solved tables for plotting and offline analysis
//!
//! Output is one-way: JSON snapshots of the value and policy tables, and
//! CSV hold-threshold grids.

mod tables;
mod thresholds_csv;

pub use tables::{SolvedTables, StateRow, write_tables_json};
pub use thresholds_csv::{write_thresholds, write_thresholds_csv};
