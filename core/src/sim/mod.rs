//! The functions that apply a rule to each cell in a state.

use itertools::Itertools;
use log::{debug, trace};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::rule::{ElementaryRule, Neighborhood, Rule, RuleTable};
use crate::state::State;
use crate::trajectory::Trajectory;

/// Result type returned by fallible simulation routines.
pub type SimResult<T> = Result<T, SimError>;

/// Error encountered when building a trajectory.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SimError {
    #[error("trajectory length must be at least 1")]
    EmptyTrajectory,
    #[error("state has width {got} but the trajectory has width {expected}")]
    WidthMismatch { expected: usize, got: usize },
}

/// Policy for the neighbors of the first and last cells in a state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// The first and last cells are adjacent, so the state is a ring.
    Wrap,
    /// Cells outside the state are always dead.
    Dead,
}
impl Default for Boundary {
    fn default() -> Self {
        Self::Wrap
    }
}
impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Wrap => write!(f, "wrap"),
            Boundary::Dead => write!(f, "dead"),
        }
    }
}
impl Boundary {
    /// Returns the cell at `pos` relative to the start of `cells`, which may
    /// be one position past either end.
    #[inline]
    fn cell(self, cells: &[bool], pos: isize) -> bool {
        let len = cells.len() as isize;
        if (0..len).contains(&pos) {
            cells[pos as usize]
        } else {
            match self {
                Boundary::Wrap => cells[pos.rem_euclid(len) as usize],
                Boundary::Dead => false,
            }
        }
    }
}

/// Simulation of a one-dimensional automaton with a fixed rule and boundary
/// policy.
///
/// Every method returns a new state instead of mutating its input.
#[derive(Debug, Clone)]
pub struct Simulation<R: Rule = ElementaryRule> {
    rule: Arc<R>,
    boundary: Boundary,
}

impl Simulation<ElementaryRule> {
    /// Constructs a simulation of the elementary rule with the given number,
    /// using a wraparound boundary.
    pub fn elementary(rule_number: u8) -> Self {
        Self::new(ElementaryRule::new(rule_number))
    }
    /// Returns the lookup table of the elementary rule.
    pub fn rule_table(&self) -> &RuleTable {
        self.rule.rule_table()
    }
}

impl<R: Rule> Simulation<R> {
    /// Constructs a new simulation using the given rule and a wraparound
    /// boundary.
    pub fn new(rule: R) -> Self {
        Self::with_boundary(rule, Boundary::Wrap)
    }
    /// Constructs a new simulation using the given rule and boundary policy.
    pub fn with_boundary(rule: R, boundary: Boundary) -> Self {
        debug!(
            "Constructing simulation of {} (radius {}, {} boundary)",
            rule,
            rule.radius(),
            boundary,
        );
        Self {
            rule: Arc::new(rule),
            boundary,
        }
    }

    /// Returns the rule being simulated.
    pub fn rule(&self) -> &R {
        &self.rule
    }
    /// Returns the boundary policy.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Returns the state after one generation.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn step(&self, state: &State) -> State {
        let transition_function = self.rule.transition_function();
        self.step_with(state, &transition_function)
    }

    /// Returns the state after `gens` generations. Zero generations returns a
    /// copy of the input.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn advance(&self, state: &State, gens: usize) -> State {
        let transition_function = self.rule.transition_function();
        let mut ret = state.clone();
        for _ in 0..gens {
            ret = self.step_with(&ret, &transition_function);
        }
        ret
    }

    /// Returns a trajectory of `len` states, starting with `initial` and
    /// followed by `len - 1` successive generations.
    pub fn trajectory(&self, initial: State, len: usize) -> SimResult<Trajectory> {
        if len == 0 {
            return Err(SimError::EmptyTrajectory);
        }
        trace!("Generating {} states of {}", len, self.rule);
        let transition_function = self.rule.transition_function();
        let mut states = Vec::with_capacity(len);
        states.push(initial);
        for _ in 1..len {
            let next = self.step_with(&states[states.len() - 1], &transition_function);
            states.push(next);
        }
        Trajectory::new(states)
    }

    fn step_with(
        &self,
        state: &State,
        transition_function: &dyn Fn(Neighborhood) -> bool,
    ) -> State {
        let cells = state.cells();
        let next_cells = (0..cells.len() as isize)
            .map(|pos| {
                transition_function(Neighborhood::new(
                    self.boundary.cell(cells, pos - 1),
                    cells[pos as usize],
                    self.boundary.cell(cells, pos + 1),
                ))
            })
            .collect_vec();
        State::from_nonempty(next_cells)
    }
}
