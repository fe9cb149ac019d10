mod plot;
mod sim;

pub use plot::*;
pub use sim::*;

#[derive(Debug, Default, Clone)]
pub struct Config {
    pub sim: SimConfig,
    pub plot: PlotConfig,
}
