//! Sequences of states produced by a simulation.

use std::ops::Index;

use crate::sim::{SimError, SimResult};
use crate::state::State;

/// Non-empty sequence of states of equal width, where the state at index `k`
/// is the state after `k` generations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory {
    states: Vec<State>,
}

#[allow(clippy::len_without_is_empty)]
impl Trajectory {
    /// Creates a trajectory from a list of states.
    pub fn new(states: Vec<State>) -> SimResult<Self> {
        let expected = states
            .first()
            .ok_or(SimError::EmptyTrajectory)?
            .width();
        if let Some(state) = states.iter().find(|s| s.width() != expected) {
            return Err(SimError::WidthMismatch {
                expected,
                got: state.width(),
            });
        }
        Ok(Self { states })
    }

    /// Returns the initial state.
    pub fn initial(&self) -> &State {
        &self.states[0]
    }
    /// Returns the last state.
    pub fn last(&self) -> &State {
        &self.states[self.states.len() - 1]
    }
    /// Returns the number of states, which is always at least 1.
    pub fn len(&self) -> usize {
        self.states.len()
    }
    /// Returns the width of every state.
    pub fn width(&self) -> usize {
        self.initial().width()
    }
    /// Returns the states as a slice.
    pub fn states(&self) -> &[State] {
        &self.states
    }
    /// Returns an iterator over the states.
    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }
    /// Returns an iterator over each pair of consecutive states.
    pub fn transitions(&self) -> impl '_ + Iterator<Item = (&State, &State)> {
        self.states.iter().zip(self.states.iter().skip(1))
    }
}

impl Index<usize> for Trajectory {
    type Output = State;

    fn index(&self, gen: usize) -> &State {
        &self.states[gen]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
