//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The score a player must reach to win (`T`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetScore(u32);

impl TargetScore {
    /// Create a new target score.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTarget`] if the target is zero.
    pub fn new(value: u32) -> Result<Self, crate::Error> {
        if value >= 1 {
            Ok(TargetScore(value))
        } else {
            Err(crate::Error::InvalidTarget { target: value })
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<TargetScore> for u32 {
    fn from(target: TargetScore) -> Self {
        target.0
    }
}

impl fmt::Display for TargetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convergence tolerance for value iteration (strictly positive, finite).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Create a new tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTolerance`] if the value is not a positive finite number.
    pub fn new(value: f64) -> Result<Self, crate::Error> {
        if value > 0.0 && value.is_finite() {
            Ok(Tolerance(value))
        } else {
            Err(crate::Error::InvalidTolerance { value })
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}", self.0)
    }
}
