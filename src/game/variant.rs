//! Transition models for the two game variants
//!
//! A [`TransitionModel`] supplies the variant-specific half of the Bellman
//! recurrence: which action keeps the turn alive and the distribution of its
//! outcomes. Everything else (holding, role swaps, boundary handling) is
//! shared through the provided methods, so Pig and Piglet cannot drift apart.

use std::{fmt, str::FromStr};

use rand::{Rng, distr::StandardUniform};
use serde::{Deserialize, Serialize};

use super::{Action, State};
use crate::{Error, Result};

/// Which game is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Six-sided die: a 1 busts, 2-6 add to the turn total.
    #[default]
    Pig,
    /// Fair coin: tails busts, heads adds one point.
    Piglet,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Variant::Pig => "pig",
            Variant::Piglet => "piglet",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Variant {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pig" => Ok(Variant::Pig),
            "piglet" => Ok(Variant::Piglet),
            _ => Err(crate::Error::ParseVariant {
                input: s.to_string(),
                expected: "pig, piglet".to_string(),
            }),
        }
    }
}

/// Result of one press (die roll or coin flip)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// Turn ends, turn total is lost, control passes to the opponent.
    Bust,
    /// Turn total grows by the given amount and the same player acts again.
    Gain(u32),
}

/// An outcome of the pressing action together with its probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub probability: f64,
    pub kind: OutcomeKind,
}

impl Outcome {
    pub const fn new(probability: f64, kind: OutcomeKind) -> Self {
        Self { probability, kind }
    }
}

/// Variant-specific transition semantics injected into the solver.
pub trait TransitionModel {
    /// Which variant this model describes.
    fn variant(&self) -> Variant;

    /// The action that keeps the turn going (`Roll` or `Flip`).
    fn press_action(&self) -> Action;

    /// Outcome distribution of the pressing action. Probabilities sum to one.
    fn outcomes(&self) -> &[Outcome];

    /// Actions available in every non-terminal state, `Hold` first.
    fn actions(&self) -> [Action; 2] {
        [Action::Hold, self.press_action()]
    }

    fn supports(&self, action: Action) -> bool {
        action.is_hold() || action == self.press_action()
    }

    /// One step of the Bellman expectation for `action` in `state`.
    ///
    /// `value` resolves successor win probabilities (boundary rules included).
    /// Whenever control passes to the opponent the successor is valued from
    /// the opponent's seat, so the acting player's share is `1 - value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAction`] for an action the variant does
    /// not offer, and propagates lookup failures from `value`.
    fn value_action<F>(&self, state: State, action: Action, mut value: F) -> Result<f64>
    where
        F: FnMut(State) -> Result<f64>,
    {
        if action.is_hold() {
            return Ok(1.0 - value(state.after_hold())?);
        }
        if action != self.press_action() {
            return Err(Error::UnsupportedAction {
                action: action.to_string(),
                variant: self.variant().to_string(),
            });
        }

        let mut expected = 0.0;
        for outcome in self.outcomes() {
            let outcome_value = match outcome.kind {
                OutcomeKind::Bust => 1.0 - value(state.after_bust())?,
                OutcomeKind::Gain(points) => value(state.after_gain(points))?,
            };
            expected += outcome.probability * outcome_value;
        }
        Ok(expected)
    }

    /// Draw one outcome of the pressing action.
    fn sample_outcome<R: Rng + ?Sized>(&self, rng: &mut R) -> OutcomeKind {
        let ticket: f64 = rng.sample(StandardUniform);
        let mut cumulative = 0.0;
        for outcome in self.outcomes() {
            cumulative += outcome.probability;
            if ticket < cumulative {
                return outcome.kind;
            }
        }
        self.outcomes()
            .last()
            .map_or(OutcomeKind::Bust, |outcome| outcome.kind)
    }
}

const SIXTH: f64 = 1.0 / 6.0;

const PIG_OUTCOMES: [Outcome; 6] = [
    Outcome::new(SIXTH, OutcomeKind::Bust),
    Outcome::new(SIXTH, OutcomeKind::Gain(2)),
    Outcome::new(SIXTH, OutcomeKind::Gain(3)),
    Outcome::new(SIXTH, OutcomeKind::Gain(4)),
    Outcome::new(SIXTH, OutcomeKind::Gain(5)),
    Outcome::new(SIXTH, OutcomeKind::Gain(6)),
];

const PIGLET_OUTCOMES: [Outcome; 2] = [
    Outcome::new(0.5, OutcomeKind::Bust),
    Outcome::new(0.5, OutcomeKind::Gain(1)),
];

/// Pig: roll a six-sided die or hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pig;

impl TransitionModel for Pig {
    fn variant(&self) -> Variant {
        Variant::Pig
    }

    fn press_action(&self) -> Action {
        Action::Roll
    }

    fn outcomes(&self) -> &[Outcome] {
        &PIG_OUTCOMES
    }
}

/// Piglet: flip a fair coin or hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Piglet;

impl TransitionModel for Piglet {
    fn variant(&self) -> Variant {
        Variant::Piglet
    }

    fn press_action(&self) -> Action {
        Action::Flip
    }

    fn outcomes(&self) -> &[Outcome] {
        &PIGLET_OUTCOMES
    }
}
