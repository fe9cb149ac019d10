//! Figures of per-generation mean and standard deviation.
//!
//! Each figure contains one curve per rule: a translucent band covering one
//! standard deviation on either side of the mean, and the mean itself drawn on
//! top. Generations increase to the right.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

mod canvas;

use canvas::Canvas;

use crate::colors;
use crate::config::PlotConfig;
use crate::experiment::MetricResults;
use crate::math::remap;

const TICK_COUNT: usize = 5;
const TICK_LEN: isize = 4;
const SWATCH_SIZE: isize = 8;

/// Mean and standard deviation curves for a single rule.
#[derive(Debug, Clone)]
struct Curve {
    mean: Vec<f64>,
    std: Vec<f64>,
    color: [u8; 3],
}
impl Curve {
    fn lower(&self) -> impl '_ + Iterator<Item = f64> {
        self.mean.iter().zip(&self.std).map(|(m, s)| m - s)
    }
    fn upper(&self) -> impl '_ + Iterator<Item = f64> {
        self.mean.iter().zip(&self.std).map(|(m, s)| m + s)
    }
}

/// Renders the figure for one metric and saves it in the configured output
/// directory, returning the path of the new file.
pub fn save(results: &MetricResults, config: &PlotConfig) -> Result<PathBuf> {
    let path = config.output_dir.join(results.file_name());
    let canvas = render(results, config);
    write_file(&canvas, &path)?;
    info!("Saved {}", path.display());
    Ok(path)
}

fn write_file(canvas: &Canvas, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Creating {}", path.display()))?;
    canvas
        .write_png(BufWriter::new(file))
        .with_context(|| format!("Saving {}", path.display()))
}

/// Renders the figure for one metric.
pub fn render(results: &MetricResults, config: &PlotConfig) -> Canvas {
    let curves: Vec<Curve> = results
        .curves
        .iter()
        .enumerate()
        .map(|(i, rule_samples)| {
            let color = colors::curve(i);
            debug!(
                "Drawing {} of {} in {}",
                results.metric,
                rule_samples.rule,
                colors::hex(color),
            );
            Curve {
                mean: rule_samples.samples.mean(),
                std: rule_samples.samples.std(),
                color,
            }
        })
        .collect();

    let mut canvas = Canvas::new(config.width, config.height, colors::BACKGROUND);

    let margin = config.margin as isize;
    let left = margin;
    let top = margin;
    let right = (config.width as isize - margin - 1).max(left + 1);
    let bottom = (config.height as isize - margin - 1).max(top + 1);

    let steps = curves.iter().map(|c| c.mean.len()).max().unwrap_or(0);
    let (y_min, y_max) = y_range(&curves);
    let to_x = |gen: f64| remap(gen, 0.0, (steps.max(2) - 1) as f64, left as f64, right as f64);
    let to_y = |value: f64| remap(value, y_min, y_max, bottom as f64, top as f64);

    if y_min < 0.0 && 0.0 < y_max {
        let y = to_y(0.0).round() as isize;
        canvas.line([left, y], [right, y], colors::ZERO_LINE);
    }

    for curve in &curves {
        let lower: Vec<f64> = curve.lower().collect();
        let upper: Vec<f64> = curve.upper().collect();
        for x in left..=right {
            let gen = remap(x as f64, left as f64, right as f64, 0.0, (steps.max(2) - 1) as f64);
            if let (Some(lo), Some(hi)) = (interpolate(&lower, gen), interpolate(&upper, gen)) {
                let (y1, y2) = (to_y(lo).round() as isize, to_y(hi).round() as isize);
                canvas.blend_span(x, y1, y2, curve.color, config.band_alpha);
            }
        }
    }

    for curve in &curves {
        let points: Vec<[isize; 2]> = curve
            .mean
            .iter()
            .enumerate()
            .map(|(gen, &value)| [to_x(gen as f64).round() as isize, to_y(value).round() as isize])
            .collect();
        match points.as_slice() {
            [] => (),
            [p] => canvas.set(*p, curve.color),
            _ => {
                for pair in points.windows(2) {
                    canvas.line(pair[0], pair[1], curve.color);
                }
            }
        }
    }

    canvas.frame([left, top], [right, bottom], colors::FRAME);
    for i in 0..=TICK_COUNT {
        let x = remap(i as f64, 0.0, TICK_COUNT as f64, left as f64, right as f64).round() as isize;
        let y = remap(i as f64, 0.0, TICK_COUNT as f64, bottom as f64, top as f64).round() as isize;
        canvas.line([x, bottom], [x, bottom + TICK_LEN], colors::FRAME);
        canvas.line([left - TICK_LEN, y], [left, y], colors::FRAME);
    }

    // Legend swatches, in the same order as the rules.
    for (i, curve) in curves.iter().enumerate() {
        let x = right - (i as isize + 1) * (SWATCH_SIZE + 4);
        let y = top - SWATCH_SIZE - 4;
        canvas.fill([x, y], [x + SWATCH_SIZE - 1, y + SWATCH_SIZE - 1], curve.color);
    }

    canvas
}

/// Returns the range of values covered by every band, widened if it is empty.
fn y_range(curves: &[Curve]) -> (f64, f64) {
    let values = curves
        .iter()
        .flat_map(|c| c.lower().chain(c.upper()))
        .filter(|x| x.is_finite());
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
        (lo.min(x), hi.max(x))
    });
    if min > max {
        (0.0, 1.0)
    } else if min == max {
        (min - 0.5, max + 0.5)
    } else {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    }
}

/// Returns the value of a curve at a fractional generation by linear
/// interpolation, or `None` if the curve is empty.
fn interpolate(values: &[f64], gen: f64) -> Option<f64> {
    let last = values.len().checked_sub(1)?;
    let gen = gen.max(0.0).min(last as f64);
    let i = gen.floor() as usize;
    let t = gen - i as f64;
    match values.get(i + 1) {
        Some(next) => Some(values[i] * (1.0 - t) + next * t),
        None => Some(values[i]),
    }
}
