//! Strategy port - anything that can decide between pressing on and holding
//!
//! The simulator and the tournament runner only talk to this trait, so the
//! optimal policy, fixed-threshold baselines and custom rules are
//! interchangeable.
//!
//! # Examples
//!
//! ```no_run
//! use pig_solver::{
//!     game::{Action, State},
//!     ports::Strategy,
//! };
//!
//! struct BankEverything;
//!
//! impl Strategy for BankEverything {
//!     fn choose(&self, state: State) -> pig_solver::Result<Action> {
//!         Ok(if state.turn_total > 0 { Action::Hold } else { Action::Roll })
//!     }
//!
//!     fn name(&self) -> &str {
//!         "bank-everything"
//!     }
//! }
//! ```

use crate::{
    Result,
    game::{Action, State},
};

/// Strategy trait - decides the action for a non-terminal state
pub trait Strategy {
    /// Select an action for the given state.
    ///
    /// The simulator only asks about states with `i + k < T`; reaching the
    /// target always ends the turn without consulting the strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy cannot evaluate the state.
    fn choose(&self, state: State) -> Result<Action>;

    /// Name used in reports.
    fn name(&self) -> &str;
}
