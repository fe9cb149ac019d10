use proptest::prelude::*;

use super::*;
use crate::sim::Simulation;

fn trajectory(rows: &[&[u8]]) -> Trajectory {
    Trajectory::new(
        rows.iter()
            .map(|row| State::from_bits(row).unwrap())
            .collect(),
    )
    .unwrap()
}

fn arb_trajectory() -> impl Strategy<Value = Trajectory> {
    (1..30_usize, 1..20_usize)
        .prop_flat_map(|(width, len)| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), width), len)
        })
        .prop_map(|rows| {
            Trajectory::new(rows.into_iter().map(|r| State::new(r).unwrap()).collect()).unwrap()
        })
}

#[test]
fn test_living_ratio() {
    let t = trajectory(&[&[1, 1, 0, 0], &[1, 1, 1, 1], &[0, 1, 0, 0], &[0, 0, 0, 0]]);
    assert_eq!(Ok(vec![1.0, 2.0, 0.5, 0.0]), living_ratio(&t));

    let t = trajectory(&[&[0, 0, 0], &[1, 1, 1]]);
    assert_eq!(Err(AnalysisError::NoLivingCells), living_ratio(&t));
    assert_eq!(
        Err(AnalysisError::NoLivingCells),
        Metric::NumLiving.compute(&t)
    );
}

#[test]
fn test_longest_run() {
    let t = trajectory(&[
        &[0, 1, 0, 1, 0],
        &[1, 1, 1, 0, 0],
        &[0, 0, 1, 0, 0],
        &[1, 1, 1, 1, 1],
    ]);
    assert_eq!(vec![0, 2, 1, 4], longest_run(&t));

    // Runs of dead cells count too, and do not wrap around.
    let t = trajectory(&[&[0, 0, 0, 1, 0, 0]]);
    assert_eq!(vec![2], longest_run(&t));

    let t = trajectory(&[&[1], &[0]]);
    assert_eq!(vec![0, 0], longest_run(&t));
}

#[test]
fn test_num_changed() {
    let row: &[u8] = &[1, 0, 1, 1, 0];
    let t = trajectory(&[row; 5]);
    assert_eq!(vec![0, 0, 0, 0, 0], num_changed(&t));

    let t = trajectory(&[&[0, 0, 0, 0], &[1, 0, 0, 1], &[1, 1, 0, 0]]);
    assert_eq!(vec![0, 2, 2], num_changed(&t));

    let t = trajectory(&[&[1, 1]]);
    assert_eq!(vec![0], num_changed(&t));
}

#[test]
fn test_max_age() {
    // Three stable generations, then every cell flips.
    let t = trajectory(&[&[1, 0, 1], &[1, 0, 1], &[1, 0, 1], &[1, 0, 1], &[0, 1, 0]]);
    assert_eq!(vec![0, 1, 2, 3, 0], max_age(&t));

    // Only the cells that change are reset.
    let t = trajectory(&[&[0, 0], &[0, 1], &[0, 0], &[1, 0]]);
    assert_eq!(vec![0, 1, 2, 1], max_age(&t));

    let t = trajectory(&[&[0]]);
    assert_eq!(vec![0], max_age(&t));
}

#[test]
fn test_metric_names() {
    let names = Metric::ALL.iter().map(|m| m.name()).collect::<Vec<_>>();
    assert_eq!(
        vec!["num_living", "longest_continuous_string", "num_changed", "age"],
        names
    );
    for &metric in &Metric::ALL {
        assert_eq!(Ok(metric), metric.to_string().parse());
    }
    assert_eq!(
        Err(AnalysisError::UnknownMetric("population".to_owned())),
        "population".parse::<Metric>()
    );
}

#[test]
fn test_metric_compute() {
    let t = trajectory(&[&[1, 1, 0], &[1, 0, 0]]);
    assert_eq!(Ok(vec![1.0, 0.5]), Metric::NumLiving.compute(&t));
    assert_eq!(Ok(vec![1.0, 1.0]), Metric::LongestContinuousString.compute(&t));
    assert_eq!(Ok(vec![0.0, 1.0]), Metric::NumChanged.compute(&t));
    assert_eq!(Ok(vec![0.0, 1.0]), Metric::Age.compute(&t));
}

#[test]
fn test_metrics_on_simulation() {
    // Rule 204 is the identity rule, so nothing ever changes.
    let sim = Simulation::elementary(204);
    let initial = State::from_bits(&[0, 1, 1, 0, 1, 0]).unwrap();
    let t = sim.trajectory(initial, 6).unwrap();
    assert_eq!(Ok(vec![1.0; 6]), living_ratio(&t));
    assert_eq!(vec![0; 6], num_changed(&t));
    assert_eq!(vec![0, 1, 2, 3, 4, 5], max_age(&t));
}

proptest! {
    /// Tests invariants shared by every metric.
    #[test]
    fn test_metric_invariants(t in arb_trajectory()) {
        let original = t.clone();
        for &metric in &Metric::ALL {
            if let Ok(values) = metric.compute(&t) {
                prop_assert_eq!(t.len(), values.len());
                prop_assert!(values.iter().all(|&x| x >= 0.0));
            }
        }
        prop_assert_eq!(0, num_changed(&t)[0]);
        prop_assert_eq!(0, max_age(&t)[0]);
        for (k, &age) in max_age(&t).iter().enumerate() {
            prop_assert!(age <= k);
        }
        for &run in &longest_run(&t) {
            prop_assert!(run < t.width());
        }
        prop_assert_eq!(original, t);
    }

    /// Tests that the living ratio starts at exactly 1.
    #[test]
    fn test_living_ratio_starts_at_one(t in arb_trajectory()) {
        match living_ratio(&t) {
            Ok(values) => {
                prop_assert_eq!(1.0, values[0]);
            }
            Err(e) => {
                prop_assert_eq!(AnalysisError::NoLivingCells, e);
                prop_assert!(t.initial().is_empty());
            }
        }
    }
}
