//! Everything related to the description of a cellular automaton rule,
//! primarily the transition function.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

mod table;

pub use table::{Neighborhood, RuleTable};

/// Result type returned by fallible rule routines.
pub type RuleResult<T> = Result<T, RuleError>;

/// Error encountered when constructing a rule.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RuleError {
    #[error("rule number {0} is out of range; expected an integer from 0 to 255")]
    OutOfRange(i64),
    #[error("invalid rule number {0:?}")]
    Parse(String),
}

/// Type alias for a CA transition function that computes the next state of a
/// single cell from its neighborhood.
pub type TransitionFunction<'a> = Box<dyn 'a + Fn(Neighborhood) -> bool>;

/// Cellular automaton rule over a one-dimensional two-state grid.
pub trait Rule: fmt::Debug + fmt::Display + Send + Sync {
    /// Returns the maximum distance away that a cell may need to see in order
    /// to compute its next state.
    fn radius(&self) -> usize;
    /// Returns a function that computes a cell's next state, given its
    /// neighborhood.
    fn transition_function<'a>(&'a self) -> TransitionFunction<'a>;
}

/// Wolfram-numbered elementary cellular automaton rule.
///
/// The successor of a neighborhood `(l, c, r)` is bit `l*4 + c*2 + r` of the
/// rule number, with bit 0 being the least significant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ElementaryRule {
    number: u8,
    table: RuleTable,
}
impl ElementaryRule {
    /// Constructs the rule with the given number and precomputes its table.
    pub fn new(number: u8) -> Self {
        Self {
            number,
            table: RuleTable::from_rule_number(number),
        }
    }

    /// Returns the Wolfram rule number.
    #[inline]
    pub fn number(self) -> u8 {
        self.number
    }
    /// Returns the lookup table derived from the rule number.
    #[inline]
    pub fn rule_table(&self) -> &RuleTable {
        &self.table
    }
    /// Returns the next state of a cell with the given neighborhood.
    #[inline]
    pub fn transition(&self, nbhd: Neighborhood) -> bool {
        self.table[nbhd]
    }
}

impl From<u8> for ElementaryRule {
    fn from(number: u8) -> Self {
        Self::new(number)
    }
}
impl TryFrom<i64> for ElementaryRule {
    type Error = RuleError;

    fn try_from(number: i64) -> RuleResult<Self> {
        u8::try_from(number)
            .map(Self::new)
            .map_err(|_| RuleError::OutOfRange(number))
    }
}
impl FromStr for ElementaryRule {
    type Err = RuleError;

    fn from_str(s: &str) -> RuleResult<Self> {
        let number = s
            .trim()
            .parse::<i64>()
            .map_err(|_| RuleError::Parse(s.to_owned()))?;
        Self::try_from(number)
    }
}

impl fmt::Display for ElementaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule {}", self.number)
    }
}

impl Rule for ElementaryRule {
    fn radius(&self) -> usize {
        1
    }
    fn transition_function<'a>(&'a self) -> TransitionFunction<'a> {
        Box::new(move |nbhd| self.transition(nbhd))
    }
}
