//! Repeated randomized runs of one or more rules.

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, info, warn};

use eca_core::prelude::*;

use crate::config::SimConfig;

/// Samples of one metric for one rule.
#[derive(Debug, Clone)]
pub struct RuleSamples {
    pub rule: ElementaryRule,
    pub samples: Samples,
}

/// Samples of one metric for every rule, in the order the rules were given.
#[derive(Debug, Clone)]
pub struct MetricResults {
    pub metric: Metric,
    pub curves: Vec<RuleSamples>,
}
impl MetricResults {
    /// Returns the name of the image file for this metric, which contains
    /// every rule number.
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}.png",
            self.metric.name(),
            self.curves.iter().map(|c| c.rule.number()).join("-"),
        )
    }
}

/// Runs every rule `config.repeats` times and computes every metric for each
/// run.
///
/// Run `r` of every rule starts from the same random state, so rules are
/// compared on identical initial conditions. `observe` is called with each
/// trajectory as soon as it is generated.
///
/// A run whose initial state has no living cells is left out of the
/// `num_living` samples of that rule; the other metrics still include it.
pub fn run(
    config: &SimConfig,
    rules: &[ElementaryRule],
    mut observe: impl FnMut(ElementaryRule, usize, &Trajectory),
) -> Result<Vec<MetricResults>> {
    config.validate()?;

    let mut results = Metric::ALL
        .iter()
        .map(|&metric| MetricResults {
            metric,
            curves: Vec::with_capacity(rules.len()),
        })
        .collect_vec();

    for &rule in rules {
        info!(
            "Simulating {} for {} runs of {} steps on {} cells",
            rule, config.repeats, config.steps, config.width,
        );
        debug!("Rule table: {}", rule.rule_table());
        let sim = Simulation::with_boundary(rule, config.boundary);

        let mut samples = vec![Samples::new(); Metric::ALL.len()];
        for repeat in 0..config.repeats {
            let mut rng = config.rng_for_repeat(repeat);
            let initial = State::random(config.width, &mut rng)?;
            let trajectory = sim
                .trajectory(initial, config.steps)
                .with_context(|| format!("Simulating run {} of {}", repeat, rule))?;
            observe(rule, repeat, &trajectory);

            for (metric, metric_samples) in Metric::ALL.iter().zip(&mut samples) {
                match metric.compute(&trajectory) {
                    Ok(values) => metric_samples
                        .push(values)
                        .with_context(|| format!("Recording {} of {}", metric, rule))?,
                    Err(e) => warn!("Skipping {} of run {} of {}: {}", metric, repeat, rule, e),
                }
            }
        }

        for (metric_results, samples) in results.iter_mut().zip(samples) {
            metric_results.curves.push(RuleSamples { rule, samples });
        }
    }

    Ok(results)
}
