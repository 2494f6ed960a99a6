//! Bounded A* over the 4-connected lattice with a turn penalty.
//!
//! Frontier entries are ordered by `g + h` (Manhattan heuristic), ties
//! broken by insertion order so the search is fully deterministic.
//! Superseded entries stay in the heap and are skipped when popped; every
//! pop counts toward the expansion bound.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use schemroute_core::{Direction, GridCoord};
use schemroute_grid::Blocking;
use smallvec::SmallVec;

use crate::cost::step_cost;

/// How a bounded search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached.
    Found {
        /// Every cell from start to goal inclusive, one lattice step apart.
        cells: Vec<GridCoord>,
        /// Accumulated step and turn cost.
        cost: u64,
        /// Frontier pops spent.
        expansions: u32,
    },
    /// The expansion bound ran out, or the frontier emptied, first.
    Exhausted {
        /// Frontier pops spent.
        expansions: u32,
    },
}

impl SearchOutcome {
    /// Frontier pops spent, whichever way the search ended.
    pub fn expansions(&self) -> u32 {
        match self {
            Self::Found { expansions, .. } | Self::Exhausted { expansions } => *expansions,
        }
    }
}

/// Frontier entry with reversed ordering for a min-heap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEntry {
    f_score: u64,
    g_score: u64,
    cell: GridCoord,
    counter: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.counter.cmp(&self.counter))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn neighbours(cell: GridCoord) -> SmallVec<[(Direction, GridCoord); 4]> {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| cell.checked_neighbour(dir).map(|n| (dir, n)))
        .collect()
}

/// Search from `start` to `goal`.
///
/// `initial_heading` is the direction the wire is already travelling when
/// it reaches `start` (a pin's exit direction); the first step is charged a
/// turn if it leaves in any other direction. `start` itself is never
/// checked against `blocking`.
pub fn search<B: Blocking + ?Sized>(
    blocking: &B,
    start: GridCoord,
    goal: GridCoord,
    initial_heading: Option<Direction>,
    turn_penalty: u32,
    max_expansions: u32,
) -> SearchOutcome {
    let mut open = BinaryHeap::new();
    let mut g_costs: FxHashMap<GridCoord, u64> = FxHashMap::default();
    let mut parents: FxHashMap<GridCoord, GridCoord> = FxHashMap::default();
    let mut counter: u64 = 0;

    open.push(OpenEntry {
        f_score: start.manhattan(goal),
        g_score: 0,
        cell: start,
        counter,
    });
    g_costs.insert(start, 0);

    let mut expansions: u32 = 0;

    while let Some(entry) = open.pop() {
        if expansions >= max_expansions {
            break;
        }
        expansions += 1;

        let current = entry.cell;
        let g = entry.g_score;
        if g_costs.get(&current).is_some_and(|&best| g > best) {
            continue;
        }

        if current == goal {
            return SearchOutcome::Found {
                cells: reconstruct(&parents, start, goal),
                cost: g,
                expansions,
            };
        }

        let heading = match parents.get(&current) {
            Some(&parent) => parent.direction_to(current),
            None => initial_heading,
        };

        for (dir, next) in neighbours(current) {
            if blocking.is_blocked(next) {
                continue;
            }
            let tentative = g + step_cost(heading, dir, turn_penalty);
            if g_costs.get(&next).is_some_and(|&best| tentative >= best) {
                continue;
            }
            g_costs.insert(next, tentative);
            parents.insert(next, current);
            counter += 1;
            open.push(OpenEntry {
                f_score: tentative + next.manhattan(goal),
                g_score: tentative,
                cell: next,
                counter,
            });
        }
    }

    SearchOutcome::Exhausted { expansions }
}

fn reconstruct(
    parents: &FxHashMap<GridCoord, GridCoord>,
    start: GridCoord,
    goal: GridCoord,
) -> Vec<GridCoord> {
    let mut cells = vec![goal];
    let mut at = goal;
    while at != start {
        match parents.get(&at) {
            Some(&prev) => {
                cells.push(prev);
                at = prev;
            }
            None => break,
        }
    }
    cells.reverse();
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemroute_grid::ObstacleSet;

    fn c(x: i32, y: i32) -> GridCoord {
        GridCoord::new(x, y)
    }

    fn found(outcome: SearchOutcome) -> (Vec<GridCoord>, u64) {
        match outcome {
            SearchOutcome::Found { cells, cost, .. } => (cells, cost),
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn straight_line_in_open_space() {
        let empty = ObstacleSet::new();
        let (cells, cost) = found(search(&empty, c(0, 0), c(5, 0), Some(Direction::Right), 10, 3000));
        assert_eq!(cells, (0..=5).map(|x| c(x, 0)).collect::<Vec<_>>());
        assert_eq!(cost, 5);
    }

    #[test]
    fn start_equals_goal() {
        let empty = ObstacleSet::new();
        let outcome = search(&empty, c(2, 2), c(2, 2), None, 10, 3000);
        assert_eq!(
            outcome,
            SearchOutcome::Found {
                cells: vec![c(2, 2)],
                cost: 0,
                expansions: 1
            }
        );
    }

    #[test]
    fn detours_around_wall() {
        let mut wall = ObstacleSet::new();
        wall.insert_rect(c(3, -2), c(3, 2));
        let (cells, _) = found(search(&wall, c(0, 0), c(6, 0), Some(Direction::Right), 10, 3000));
        assert_eq!(cells.first(), Some(&c(0, 0)));
        assert_eq!(cells.last(), Some(&c(6, 0)));
        assert!(cells.iter().all(|&cell| !wall.contains(cell)));
        for w in cells.windows(2) {
            assert!(w[0].direction_to(w[1]).is_some());
        }
    }

    #[test]
    fn cost_matches_cost_model() {
        let mut wall = ObstacleSet::new();
        wall.insert_rect(c(2, -1), c(2, 1));
        let (cells, cost) = found(search(&wall, c(0, 0), c(4, 0), Some(Direction::Right), 10, 3000));
        assert_eq!(crate::path_cost(&cells, Some(Direction::Right), 10), Some(cost));
    }

    #[test]
    fn enclosed_goal_exhausts_bound() {
        let mut ring = ObstacleSet::new();
        ring.insert_rect(c(9, -1), c(11, 1));
        let boxed = {
            let mut s = ObstacleSet::new();
            for cell in ring.iter().filter(|&cell| cell != c(10, 0)) {
                s.insert(cell);
            }
            s
        };
        let outcome = search(&boxed, c(0, 0), c(10, 0), None, 10, 500);
        assert_eq!(outcome, SearchOutcome::Exhausted { expansions: 500 });
    }

    #[test]
    fn enclosed_start_empties_frontier() {
        let mut ring = ObstacleSet::new();
        ring.insert_rect(c(-1, -1), c(1, 1));
        // The start cell itself is never consulted.
        let outcome = search(&ring, c(0, 0), c(10, 0), None, 10, 3000);
        assert_eq!(outcome, SearchOutcome::Exhausted { expansions: 1 });
    }

    #[test]
    fn turn_penalty_prefers_single_bend() {
        let empty = ObstacleSet::new();
        let (cells, cost) = found(search(&empty, c(0, 0), c(4, 4), Some(Direction::Right), 10, 3000));
        let turns = cells
            .windows(3)
            .filter(|w| w[0].direction_to(w[1]) != w[1].direction_to(w[2]))
            .count();
        assert_eq!(turns, 1);
        assert_eq!(cost, 8 + 10);
    }

    #[test]
    fn repeated_searches_agree() {
        let mut obstacles = ObstacleSet::new();
        obstacles.insert_rect(c(2, -3), c(4, 3));
        obstacles.insert_rect(c(7, -6), c(8, 0));
        let a = search(&obstacles, c(0, 0), c(12, 2), Some(Direction::Right), 10, 3000);
        let b = search(&obstacles, c(0, 0), c(12, 2), Some(Direction::Right), 10, 3000);
        assert_eq!(a, b);
    }
}
