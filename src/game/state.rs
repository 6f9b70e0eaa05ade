//! State representation and the enumerated state space

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, types::TargetScore};

/// A decision point `(i, j, k)` seen from the player about to act.
///
/// - `score` (`i`): the acting player's banked score
/// - `opponent_score` (`j`): the opponent's banked score
/// - `turn_total` (`k`): points accumulated this turn and not yet banked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct State {
    pub score: u32,
    pub opponent_score: u32,
    pub turn_total: u32,
}

impl State {
    pub const fn new(score: u32, opponent_score: u32, turn_total: u32) -> Self {
        Self {
            score,
            opponent_score,
            turn_total,
        }
    }

    /// The opening position: nobody has scored and the turn is fresh.
    pub const fn initial() -> Self {
        Self::new(0, 0, 0)
    }

    /// The opponent's state after this player banks `banked` points and ends the turn.
    ///
    /// Roles swap: the opponent becomes the acting player. Scores saturate at
    /// `u32::MAX`, which still resolves as past any target.
    pub fn pass_turn(self, banked: u32) -> State {
        State::new(self.opponent_score, self.score.saturating_add(banked), 0)
    }

    /// The opponent's state after holding (turn total banked).
    pub fn after_hold(self) -> State {
        self.pass_turn(self.turn_total)
    }

    /// The opponent's state after a bust (turn total lost).
    pub fn after_bust(self) -> State {
        self.pass_turn(0)
    }

    /// The same player's state after adding `gain` to the turn total.
    pub fn after_gain(self, gain: u32) -> State {
        State::new(
            self.score,
            self.opponent_score,
            self.turn_total.saturating_add(gain),
        )
    }

    /// Parse a state from `"i,j,k"` (whitespace and surrounding parentheses allowed).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseState`] if the input does not hold exactly three integers.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        let [i, j, k] = parts.as_slice() else {
            return Err(Error::ParseState {
                input: input.to_string(),
            });
        };
        let parse = |part: &str| {
            part.parse::<u32>().map_err(|_| Error::ParseState {
                input: input.to_string(),
            })
        };
        Ok(State::new(parse(*i)?, parse(*j)?, parse(*k)?))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.score, self.opponent_score, self.turn_total
        )
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        State::parse(s)
    }
}

/// How a state resolves under the boundary rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `i + k >= T`: the acting player can bank a winning score.
    Win,
    /// `j >= T`: the opponent already reached the target.
    Loss,
    /// An enumerated state, addressed by its slot in the value table.
    Stored(usize),
}

/// The finite state space `{(i,j,k) : 0 <= i < T, 0 <= j < T, 0 <= k < T - i}`.
///
/// Value tables are packed in lexicographic `(i, j, k)` order, so the table
/// length equals the number of states. [`StateSpace::states`] yields the sweep
/// order, which is the reverse: higher banked scores and larger turn totals
/// first, so an in-place sweep sees already-updated successors.
#[derive(Debug, Clone)]
pub struct StateSpace {
    target: u32,
    states: Vec<State>,
}

impl StateSpace {
    pub fn new(target: TargetScore) -> Self {
        let t = target.value();
        let mut states = Vec::with_capacity(Self::count(t));
        for i in 0..t {
            for j in 0..t {
                for k in 0..(t - i) {
                    states.push(State::new(i, j, k));
                }
            }
        }
        states.reverse();
        Self { target: t, states }
    }

    /// Number of states for target `t`: `T^2 (T + 1) / 2`.
    pub fn count(t: u32) -> usize {
        let t = t as usize;
        t * t * (t + 1) / 2
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Enumerated states in sweep order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Whether `state` belongs to the enumerated space.
    pub fn contains(&self, state: State) -> bool {
        state.score < self.target
            && state.opponent_score < self.target
            && state.turn_total < self.target - state.score
    }

    /// The acting player can bank at least the target.
    pub fn is_win(&self, state: State) -> bool {
        u64::from(state.score) + u64::from(state.turn_total) >= u64::from(self.target)
    }

    /// The opponent already holds at least the target.
    pub fn is_loss(&self, state: State) -> bool {
        state.opponent_score >= self.target
    }

    /// Slot of an enumerated state in a packed value table.
    pub fn index(&self, state: State) -> Option<usize> {
        if !self.contains(state) {
            return None;
        }
        let t = self.target as usize;
        let (i, j, k) = (
            state.score as usize,
            state.opponent_score as usize,
            state.turn_total as usize,
        );
        // Each banked score i owns T * (T - i) slots.
        let offset = t * (i * t - i * i.saturating_sub(1) / 2);
        Some(offset + j * (t - i) + k)
    }

    /// Classify `state` under the boundary rules.
    ///
    /// Wins are checked before losses, and both before the table lookup, so
    /// synthetic states produced by transitions (overshooting rolls, role
    /// swaps onto a winning score) resolve without being enumerated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StateOutOfDomain`] for a state that is neither a
    /// boundary state nor enumerated.
    pub fn resolve(&self, state: State) -> Result<Resolution> {
        if self.is_win(state) {
            Ok(Resolution::Win)
        } else if self.is_loss(state) {
            Ok(Resolution::Loss)
        } else {
            self.index(state)
                .map(Resolution::Stored)
                .ok_or_else(|| self.out_of_domain(state))
        }
    }

    /// Win probability of `state` given a packed value table.
    ///
    /// This is the single read path for values: every consumer goes through
    /// it so the boundary rules apply uniformly to both variants.
    pub fn lookup(&self, values: &[f64], state: State) -> Result<f64> {
        match self.resolve(state)? {
            Resolution::Win => Ok(1.0),
            Resolution::Loss => Ok(0.0),
            Resolution::Stored(index) => Ok(values[index]),
        }
    }

    pub(crate) fn out_of_domain(&self, state: State) -> Error {
        Error::StateOutOfDomain {
            state: state.to_string(),
            target: self.target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(t: u32) -> StateSpace {
        StateSpace::new(TargetScore::new(t).unwrap())
    }

    #[test]
    fn enumerates_triangular_space() {
        for t in 1..=7 {
            let space = space(t);
            assert_eq!(space.len(), StateSpace::count(t));
            assert!(space.states().iter().all(|s| space.contains(*s)));
        }
    }

    #[test]
    fn packed_index_is_a_bijection() {
        let space = space(6);
        let mut seen = vec![false; space.len()];
        for &state in space.states() {
            let index = space.index(state).unwrap();
            assert!(!seen[index], "slot {index} assigned twice");
            seen[index] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn sweep_order_starts_from_highest_scores() {
        let space = space(3);
        assert_eq!(space.states()[0], State::new(2, 2, 0));
        assert_eq!(*space.states().last().unwrap(), State::initial());
    }

    #[test]
    fn resolve_checks_win_before_loss() {
        let space = space(5);
        assert_eq!(space.resolve(State::new(3, 7, 2)).unwrap(), Resolution::Win);
        assert_eq!(space.resolve(State::new(0, 5, 0)).unwrap(), Resolution::Loss);
        assert!(matches!(
            space.resolve(State::new(1, 2, 0)).unwrap(),
            Resolution::Stored(_)
        ));
    }

    #[test]
    fn transitions_swap_roles() {
        let state = State::new(10, 4, 7);
        assert_eq!(state.after_hold(), State::new(4, 17, 0));
        assert_eq!(state.after_bust(), State::new(4, 10, 0));
        assert_eq!(state.after_gain(3), State::new(10, 4, 10));
    }

    #[test]
    fn parses_state_tokens() {
        assert_eq!(State::parse("1,2,3").unwrap(), State::new(1, 2, 3));
        assert_eq!(State::parse("(4, 5, 6)").unwrap(), State::new(4, 5, 6));
        assert!(State::parse("1,2").is_err());
        assert!(State::parse("a,b,c").is_err());
    }
}
