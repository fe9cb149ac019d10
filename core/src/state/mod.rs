//! Fixed-width rows of two-state cells.

use itertools::Itertools;
use rand::Rng;
use std::fmt;
use std::ops::Index;
use thiserror::Error;

/// Result type returned by fallible state routines.
pub type StateResult<T> = Result<T, StateError>;

/// Error encountered when constructing a state.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum StateError {
    #[error("state must contain at least one cell")]
    Empty,
    #[error("invalid cell value {value} at position {pos}; expected 0 or 1")]
    InvalidCell { pos: usize, value: u8 },
}

/// Row of cells, each either dead (`false`) or living (`true`).
///
/// The width of a state is fixed when it is created and is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    cells: Box<[bool]>,
}

impl State {
    /// Creates a state from a list of cells.
    pub fn new(cells: impl Into<Box<[bool]>>) -> StateResult<Self> {
        let cells = cells.into();
        if cells.is_empty() {
            return Err(StateError::Empty);
        }
        Ok(Self { cells })
    }
    /// Creates a state from a list of cells that is known to be non-empty.
    pub(crate) fn from_nonempty(cells: impl Into<Box<[bool]>>) -> Self {
        let cells = cells.into();
        debug_assert!(!cells.is_empty(), "State must not be empty");
        Self { cells }
    }
    /// Creates a state from a list of 0s and 1s.
    pub fn from_bits(bits: &[u8]) -> StateResult<Self> {
        let cells = bits
            .iter()
            .enumerate()
            .map(|(pos, &value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(StateError::InvalidCell { pos, value }),
            })
            .collect::<StateResult<Vec<bool>>>()?;
        Self::new(cells)
    }
    /// Creates a state of all dead cells.
    pub fn dead(width: usize) -> StateResult<Self> {
        Self::new(vec![false; width])
    }
    /// Creates a state with a single living cell at index `width / 2`.
    pub fn single_center(width: usize) -> StateResult<Self> {
        let mut cells = vec![false; width];
        if let Some(center) = cells.get_mut(width / 2) {
            *center = true;
        }
        Self::new(cells)
    }
    /// Creates a state where each cell is independently living with
    /// probability 1/2, drawing from the given random number generator.
    pub fn random(width: usize, rng: &mut impl Rng) -> StateResult<Self> {
        Self::new((0..width).map(|_| rng.gen::<bool>()).collect_vec())
    }

    /// Returns the number of cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.cells.len()
    }
    /// Returns the cells as a slice.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
    /// Returns the cell at `pos`, or `None` if it is out of range.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<bool> {
        self.cells.get(pos).copied()
    }
    /// Returns the number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
    /// Returns whether every cell is dead.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&cell| cell)
    }
    /// Returns the cells as 0s and 1s.
    pub fn to_bits(&self) -> Vec<u8> {
        self.cells.iter().map(|&cell| cell as u8).collect()
    }
}

impl Index<usize> for State {
    type Output = bool;

    #[inline]
    fn index(&self, pos: usize) -> &bool {
        &self.cells[pos]
    }
}

impl fmt::Display for State {
    /// Draws living cells as `*` and dead cells as spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in self.cells.iter() {
            write!(f, "{}", if cell { '*' } else { ' ' })?;
        }
        Ok(())
    }
}
