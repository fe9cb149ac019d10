//! Lookup tables for elementary rules.

use std::fmt;
use std::ops::Index;

/// Three-cell window centered on a cell.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Neighborhood {
    pub left: bool,
    pub center: bool,
    pub right: bool,
}
impl Neighborhood {
    /// Number of distinct neighborhoods.
    pub const COUNT: usize = 8;

    /// Constructs a neighborhood from its three cells.
    #[inline]
    pub fn new(left: bool, center: bool, right: bool) -> Self {
        Self {
            left,
            center,
            right,
        }
    }
    /// Constructs the neighborhood whose value read as a 3-bit binary number
    /// (left cell most significant) is `index`.
    ///
    /// # Panics
    ///
    /// This function panics if `index` is not less than 8.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "Neighborhood index out of range");
        Self::new(index & 0b100 != 0, index & 0b010 != 0, index & 0b001 != 0)
    }
    /// Returns the value of the neighborhood read as a 3-bit binary number,
    /// with the left cell most significant.
    #[inline]
    pub fn index(self) -> usize {
        (self.left as usize) << 2 | (self.center as usize) << 1 | self.right as usize
    }

    /// Returns an iterator over all 8 neighborhoods in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index)
    }
}
impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.left as u8, self.center as u8, self.right as u8
        )
    }
}

/// Mapping from every neighborhood to the next state of its center cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RuleTable([bool; Neighborhood::COUNT]);
impl RuleTable {
    /// Derives the table for a Wolfram rule number.
    pub fn from_rule_number(number: u8) -> Self {
        let mut table = [false; Neighborhood::COUNT];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = (number >> i) & 1 != 0;
        }
        Self(table)
    }
    /// Reconstructs the rule number that this table was derived from.
    pub fn to_rule_number(&self) -> u8 {
        self.0
            .iter()
            .enumerate()
            .fold(0, |acc, (i, &bit)| acc | (bit as u8) << i)
    }

    /// Returns an iterator over `(neighborhood, next_state)` pairs in
    /// neighborhood index order.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (Neighborhood, bool)> {
        Neighborhood::all().map(move |nbhd| (nbhd, self[nbhd]))
    }
}
impl Index<Neighborhood> for RuleTable {
    type Output = bool;

    #[inline]
    fn index(&self, nbhd: Neighborhood) -> &bool {
        &self.0[nbhd.index()]
    }
}
impl fmt::Display for RuleTable {
    /// Formats the table as the 8-bit binary rule number, starting with the
    /// successor of `111`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.0.iter().rev() {
            write!(f, "{}", bit as u8)?;
        }
        Ok(())
    }
}
