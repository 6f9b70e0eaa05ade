//! CLI infrastructure for the Pig solver
//!
//! This module provides the command-line interface for solving, querying,
//! simulating and comparing strategies for Pig and Piglet.

pub mod commands;
pub mod config;
pub mod output;
