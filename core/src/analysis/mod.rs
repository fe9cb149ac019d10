//! Per-generation statistics of a trajectory.
//!
//! Every function here takes a whole trajectory and returns one value per
//! state, so that `result[k]` describes generation `k`.

use itertools::Itertools;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::state::State;
use crate::trajectory::Trajectory;

/// Result type returned by fallible analysis routines.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error encountered when a statistic is undefined for a trajectory.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum AnalysisError {
    #[error("initial state has no living cells")]
    NoLivingCells,
    #[error("unknown metric {0:?}")]
    UnknownMetric(String),
}

/// Returns the population of each state divided by the population of the
/// initial state.
///
/// Returns `AnalysisError::NoLivingCells` if the initial state is empty.
pub fn living_ratio(trajectory: &Trajectory) -> AnalysisResult<Vec<f64>> {
    let initial = trajectory.initial().population();
    if initial == 0 {
        return Err(AnalysisError::NoLivingCells);
    }
    Ok(trajectory
        .iter()
        .map(|state| state.population() as f64 / initial as f64)
        .collect())
}

/// Returns the longest run of equal adjacent cells in each state, counted in
/// adjacent pairs.
///
/// A run of `n` equal cells counts as `n - 1`. Runs do not wrap around the
/// ends of the state.
pub fn longest_run(trajectory: &Trajectory) -> Vec<usize> {
    trajectory.iter().map(longest_run_in_state).collect()
}

fn longest_run_in_state(state: &State) -> usize {
    let mut max = 0;
    let mut current = 0;
    for (a, b) in state.cells().iter().tuple_windows() {
        if a == b {
            current += 1;
            max = std::cmp::max(max, current);
        } else {
            current = 0;
        }
    }
    max
}

/// Returns the number of cells that changed since the previous generation,
/// which is 0 for the initial state.
pub fn num_changed(trajectory: &Trajectory) -> Vec<usize> {
    std::iter::once(0)
        .chain(trajectory.transitions().map(|(prev, next)| {
            prev.cells()
                .iter()
                .zip(next.cells())
                .filter(|(a, b)| a != b)
                .count()
        }))
        .collect()
}

/// Returns the age of the oldest cell in each state, where a cell's age is the
/// number of generations since it last changed (or since the initial state).
pub fn max_age(trajectory: &Trajectory) -> Vec<usize> {
    let mut ages = vec![0_usize; trajectory.width()];
    std::iter::once(0)
        .chain(trajectory.transitions().map(|(prev, next)| {
            for ((age, a), b) in ages.iter_mut().zip(prev.cells()).zip(next.cells()) {
                if a == b {
                    *age += 1;
                } else {
                    *age = 0;
                }
            }
            ages.iter().copied().max().unwrap_or(0)
        }))
        .collect()
}

/// Trajectory statistic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Population relative to the initial population. See [`living_ratio`].
    NumLiving,
    /// Longest run of equal cells. See [`longest_run`].
    LongestContinuousString,
    /// Cells changed since the previous generation. See [`num_changed`].
    NumChanged,
    /// Age of the oldest unchanged cell. See [`max_age`].
    Age,
}
impl Metric {
    /// Every metric, in output order.
    pub const ALL: [Metric; 4] = [
        Metric::NumLiving,
        Metric::LongestContinuousString,
        Metric::NumChanged,
        Metric::Age,
    ];

    /// Returns the name of the metric, used for output files.
    pub fn name(self) -> &'static str {
        match self {
            Metric::NumLiving => "num_living",
            Metric::LongestContinuousString => "longest_continuous_string",
            Metric::NumChanged => "num_changed",
            Metric::Age => "age",
        }
    }

    /// Computes the metric for every state in a trajectory.
    pub fn compute(self, trajectory: &Trajectory) -> AnalysisResult<Vec<f64>> {
        let to_f64 =
            |values: Vec<usize>| -> Vec<f64> { values.into_iter().map(|x| x as f64).collect() };
        match self {
            Metric::NumLiving => living_ratio(trajectory),
            Metric::LongestContinuousString => Ok(to_f64(longest_run(trajectory))),
            Metric::NumChanged => Ok(to_f64(num_changed(trajectory))),
            Metric::Age => Ok(to_f64(max_age(trajectory))),
        }
    }
}
impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl FromStr for Metric {
    type Err = AnalysisError;

    fn from_str(s: &str) -> AnalysisResult<Self> {
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| AnalysisError::UnknownMetric(s.to_owned()))
    }
}

#[cfg(test)]
mod tests;
