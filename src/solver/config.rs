//! Configuration types for value iteration.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, types::Tolerance};

/// How a sweep reads values written earlier in the same sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepDiscipline {
    /// Jacobi: every state is valued from the table as it stood when the
    /// sweep began; the new table replaces the old one at the end.
    Synchronous,
    /// Gauss-Seidel: each state's new value is visible to the states
    /// visited after it in the same sweep.
    #[default]
    InPlace,
}

impl fmt::Display for SweepDiscipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SweepDiscipline::Synchronous => "synchronous",
            SweepDiscipline::InPlace => "in-place",
        };
        write!(f, "{label}")
    }
}

impl FromStr for SweepDiscipline {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "synchronous" | "sync" | "jacobi" => Ok(SweepDiscipline::Synchronous),
            "in-place" | "inplace" | "gauss-seidel" => Ok(SweepDiscipline::InPlace),
            _ => Err(crate::Error::ParseDiscipline {
                input: s.to_string(),
                expected: "synchronous, in-place".to_string(),
            }),
        }
    }
}

/// Configuration for a value-iteration run.
///
/// # Examples
///
/// ```
/// use pig_solver::solver::{SolverConfig, SweepDiscipline};
///
/// let config = SolverConfig::new(1e-9, 5_000).with_discipline(SweepDiscipline::Synchronous);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Stop once the largest per-state change in a sweep drops below this
    pub tolerance: f64,
    /// Upper bound on the number of sweeps
    pub max_iterations: usize,
    /// Update discipline used by each sweep
    pub discipline: SweepDiscipline,
}

impl SolverConfig {
    /// Create a configuration with the default (in-place) discipline.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            discipline: SweepDiscipline::default(),
        }
    }

    /// Set the sweep discipline.
    pub fn with_discipline(mut self, discipline: SweepDiscipline) -> Self {
        self.discipline = discipline;
        self
    }

    /// Check the preconditions of a solve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] for a non-positive or non-finite
    /// tolerance and [`Error::InvalidConfiguration`] for zero iterations.
    pub fn validate(&self) -> Result<Tolerance> {
        let tolerance = Tolerance::new(self.tolerance)?;
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfiguration {
                message: "max_iterations must be at least 1".to_string(),
            });
        }
        Ok(tolerance)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(1e-6, 1_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SolverConfig::default();
        assert_eq!(config.discipline, SweepDiscipline::InPlace);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_preconditions() {
        assert!(matches!(
            SolverConfig::new(0.0, 10).validate(),
            Err(Error::InvalidTolerance { .. })
        ));
        assert!(matches!(
            SolverConfig::new(1e-6, 0).validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn parses_discipline_aliases() {
        assert_eq!(
            "jacobi".parse::<SweepDiscipline>().unwrap(),
            SweepDiscipline::Synchronous
        );
        assert_eq!(
            "In-Place".parse::<SweepDiscipline>().unwrap(),
            SweepDiscipline::InPlace
        );
        assert!("random".parse::<SweepDiscipline>().is_err());
    }
}
