//! Subcommands of the `pig` binary

pub mod compare;
pub mod query;
pub mod simulate;
pub mod solve;
