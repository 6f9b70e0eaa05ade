//! Error types for the Pig solver crate

use thiserror::Error;

/// Main error type for the Pig solver crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid target score {target} (must be at least 1)")]
    InvalidTarget { target: u32 },

    #[error("tolerance {value} must be positive and finite")]
    InvalidTolerance { value: f64 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("state {state} is outside the state space for target {target}")]
    StateOutOfDomain { state: String, target: u32 },

    #[error("action '{action}' is not available in {variant}")]
    UnsupportedAction { action: String, variant: String },

    #[error("number of games must be at least 1")]
    InvalidGameCount,

    #[error("starting score {score} must be below the target {target}")]
    InvalidStartingScore { score: u32, target: u32 },

    #[error("game did not finish within {turns} turns")]
    TurnLimitExceeded { turns: usize },

    #[error("invalid variant '{input}'. Expected one of: {expected}")]
    ParseVariant { input: String, expected: String },

    #[error("invalid sweep discipline '{input}'. Expected one of: {expected}")]
    ParseDiscipline { input: String, expected: String },

    #[error("invalid state '{input}' (expected format: 'i,j,k')")]
    ParseState { input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_domain_message_names_state_and_target() {
        let err = Error::StateOutOfDomain {
            state: "(3, 0, 0)".to_string(),
            target: 2,
        };
        assert_eq!(
            err.to_string(),
            "state (3, 0, 0) is outside the state space for target 2"
        );
    }

    #[test]
    fn io_errors_convert_with_generic_operation() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().starts_with("failed to IO operation"));
    }
}
