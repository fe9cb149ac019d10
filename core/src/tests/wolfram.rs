//! Known behavior of well-studied elementary rules.

use itertools::Itertools;
use proptest::prelude::*;

use crate::prelude::*;

const WIDTH: usize = 101;

#[test]
fn test_rule_30_center_column() {
    // OEIS A051023
    let expected = [1, 1, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1];
    let sim = Simulation::elementary(30);
    let t = sim
        .trajectory(State::single_center(WIDTH).unwrap(), expected.len())
        .unwrap();
    let center_column = t.iter().map(|s| s[WIDTH / 2] as u8).collect_vec();
    assert_eq!(&expected[..], &center_column[..]);
}

#[test]
fn test_rule_90_sierpinski() {
    // The population of generation `n` of rule 90 from a single cell is
    // 2^popcount(n).
    let sim = Simulation::elementary(90);
    let t = sim
        .trajectory(State::single_center(WIDTH).unwrap(), 48)
        .unwrap();
    for (n, state) in t.iter().enumerate() {
        assert_eq!(1_usize << n.count_ones(), state.population(), "Generation {}", n);
    }
}

#[test]
fn test_rule_110_from_single_cell() {
    let sim = Simulation::elementary(110);
    let state = sim.advance(&State::single_center(WIDTH).unwrap(), 5);
    let window = state.to_bits()[40..61].iter().join("");
    assert_eq!("000001100010000000000", window);
}

#[test]
fn test_rule_30_printout() {
    let sim = Simulation::elementary(30);
    let t = sim.trajectory(State::single_center(7).unwrap(), 3).unwrap();
    let lines = t.iter().map(State::to_string).collect_vec();
    assert_eq!(vec!["   *   ", "  ***  ", " **  * "], lines);
}

proptest! {
    /// Tests that rule 184 (the traffic rule) conserves population on a ring.
    #[test]
    fn test_rule_184_conserves_population(
        cells in prop::collection::vec(any::<bool>(), 1..60),
        gens in 0..30_usize,
    ) {
        let state = State::new(cells).unwrap();
        let sim = Simulation::elementary(184);
        prop_assert_eq!(state.population(), sim.advance(&state, gens).population());
    }

    /// Tests that rule 255 fills every cell after one generation.
    #[test]
    fn test_rule_255_fills_everything(
        cells in prop::collection::vec(any::<bool>(), 1..60),
        fixed_boundary: bool,
    ) {
        let boundary = if fixed_boundary { Boundary::Dead } else { Boundary::Wrap };
        let sim = Simulation::with_boundary(ElementaryRule::new(255), boundary);
        let next = sim.step(&State::new(cells).unwrap());
        prop_assert_eq!(next.width(), next.population());
    }
}
