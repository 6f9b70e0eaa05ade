//! Analysis tools for solved Pig and Piglet policies
//!
//! This module extracts the shape of the optimal policy (hold thresholds,
//! the press frontier, inversions), checks the value table for monotonicity,
//! follows the policy to find reachable states, and summarizes simulated
//! samples.

pub mod boundary;
pub mod reachability;
pub mod stats;

pub use boundary::{
    HoldThresholds, find_policy_inversions, hold_thresholds, monotonicity_violations,
    press_frontier,
};
pub use reachability::reachable_states;
pub use stats::{Proportion, SampleSummary};
