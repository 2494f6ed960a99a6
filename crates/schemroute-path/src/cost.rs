//! The routing cost model.

use schemroute_core::{Direction, GridCoord};

/// Cost of one lattice step taken along `step` when the previous step (or
/// the pin's exit direction) was `heading`.
///
/// Every step costs one unit; a change of heading adds `turn_penalty`.
/// Without a heading (a free start point) nothing counts as a turn.
#[inline]
pub(crate) fn step_cost(heading: Option<Direction>, step: Direction, turn_penalty: u32) -> u64 {
    match heading {
        Some(h) if h != step => 1 + u64::from(turn_penalty),
        _ => 1,
    }
}

/// Total search cost of walking `cells` in order.
///
/// `initial_heading` is the direction the walk is considered to be
/// travelling before its first step (a pin's exit direction). Returns
/// `None` if two consecutive cells are not 4-adjacent.
///
/// ```
/// use schemroute_core::{Direction, GridCoord};
/// use schemroute_path::path_cost;
///
/// let straight: Vec<GridCoord> = (0..=4).map(|x| GridCoord::new(x, 0)).collect();
/// assert_eq!(path_cost(&straight, Some(Direction::Right), 10), Some(4));
/// assert_eq!(path_cost(&straight, Some(Direction::Up), 10), Some(14));
/// ```
pub fn path_cost(
    cells: &[GridCoord],
    initial_heading: Option<Direction>,
    turn_penalty: u32,
) -> Option<u64> {
    let mut heading = initial_heading;
    let mut total = 0u64;
    for w in cells.windows(2) {
        let step = w[0].direction_to(w[1])?;
        total += step_cost(heading, step, turn_penalty);
        heading = Some(step);
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cells(raw: &[(i32, i32)]) -> Vec<GridCoord> {
        raw.iter().copied().map(GridCoord::from).collect()
    }

    #[test]
    fn empty_and_single_cost_nothing() {
        assert_eq!(path_cost(&[], None, 10), Some(0));
        assert_eq!(path_cost(&cells(&[(1, 1)]), Some(Direction::Up), 10), Some(0));
    }

    #[test]
    fn non_adjacent_is_rejected() {
        assert_eq!(path_cost(&cells(&[(0, 0), (2, 0)]), None, 10), None);
        assert_eq!(path_cost(&cells(&[(0, 0), (1, 1)]), None, 10), None);
    }

    #[test]
    fn free_start_has_no_initial_turn() {
        let l_shape = cells(&[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(path_cost(&l_shape, None, 10), Some(2 + 10));
        assert_eq!(path_cost(&l_shape, Some(Direction::Down), 10), Some(2 + 10));
        assert_eq!(path_cost(&l_shape, Some(Direction::Right), 10), Some(2 + 20));
    }

    #[test]
    fn fewer_turns_is_strictly_cheaper() {
        // Both walks are 4 steps from (0,0) to (2,2).
        let one_turn = cells(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
        let three_turns = cells(&[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]);
        let a = path_cost(&one_turn, Some(Direction::Right), 10).unwrap();
        let b = path_cost(&three_turns, Some(Direction::Right), 10).unwrap();
        assert!(a < b, "{a} !< {b}");
    }

    proptest! {
        #[test]
        fn cost_is_length_plus_penalised_turns(
            steps in proptest::collection::vec(0usize..4, 1..40),
            penalty in 1u32..50,
        ) {
            let mut at = GridCoord::new(0, 0);
            let mut walk = vec![at];
            for &s in &steps {
                at = at.checked_neighbour(Direction::ALL[s]).unwrap();
                walk.push(at);
            }
            let turns = steps.windows(2).filter(|w| w[0] != w[1]).count() as u64;
            let expected = steps.len() as u64 + turns * u64::from(penalty);
            prop_assert_eq!(
                path_cost(&walk, Some(Direction::ALL[steps[0]]), penalty),
                Some(expected)
            );
        }
    }
}
