//! One-dimensional two-state cellular automaton simulation and trajectory
//! statistics backend.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod analysis;
pub mod rule;
pub mod sim;
pub mod state;
pub mod stats;
pub mod trajectory;

pub mod traits {
    //! Traits that are useful to have in scope.
    pub use crate::rule::Rule;
}

pub mod prelude {
    //! Commonly used types.
    pub use crate::traits::*;

    pub use crate::analysis::{AnalysisError, Metric};
    pub use crate::rule::{ElementaryRule, Neighborhood, RuleError, RuleTable};
    pub use crate::sim::{Boundary, SimError, Simulation};
    pub use crate::state::{State, StateError};
    pub use crate::stats::{Samples, StatsError};
    pub use crate::trajectory::Trajectory;
}

#[cfg(test)]
mod tests;
