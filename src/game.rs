//! Pig and Piglet game model
//!
//! States, actions and the per-variant transition models that the solver and
//! the simulator share.

pub mod action;
pub mod state;
pub mod variant;

pub use action::Action;
pub use state::{Resolution, State, StateSpace};
pub use variant::{Outcome, OutcomeKind, Pig, Piglet, TransitionModel, Variant};
