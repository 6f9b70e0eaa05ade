//! Player actions

use std::fmt;

use serde::{Deserialize, Serialize};

/// An action available to the acting player.
///
/// `Roll` belongs to Pig, `Flip` to Piglet; `Hold` is shared by both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Roll,
    Flip,
    Hold,
}

impl Action {
    pub fn is_hold(self) -> bool {
        matches!(self, Action::Hold)
    }

    /// `Roll` or `Flip`: keep the turn going.
    pub fn is_press(self) -> bool {
        !self.is_hold()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Roll => "roll",
            Action::Flip => "flip",
            Action::Hold => "hold",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
