//! Occupied lattice cells.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use schemroute_core::GridCoord;

use crate::blocking::Blocking;

/// A set of impassable grid cells.
///
/// Backed by an insertion-ordered hash set so that iteration order is a
/// pure function of how the set was built, which keeps everything
/// downstream reproducible.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    cells: IndexSet<GridCoord, FxBuildHasher>,
}

impl ObstacleSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one cell occupied. Returns `false` if it already was.
    pub fn insert(&mut self, cell: GridCoord) -> bool {
        self.cells.insert(cell)
    }

    /// Mark every cell of the inclusive rectangle `min..=max` occupied.
    ///
    /// Cells are visited column by column so insertion order is stable.
    /// An inverted rectangle inserts nothing.
    pub fn insert_rect(&mut self, min: GridCoord, max: GridCoord) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                self.cells.insert(GridCoord::new(x, y));
            }
        }
    }

    /// `true` if `cell` is occupied.
    pub fn contains(&self, cell: GridCoord) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if nothing is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.cells.iter().copied()
    }
}

impl Blocking for ObstacleSet {
    fn is_blocked(&self, cell: GridCoord) -> bool {
        self.contains(cell)
    }
}

impl FromIterator<GridCoord> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = GridCoord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<GridCoord> for ObstacleSet {
    fn extend<I: IntoIterator<Item = GridCoord>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> GridCoord {
        GridCoord::new(x, y)
    }

    #[test]
    fn insert_is_set_semantics() {
        let mut s = ObstacleSet::new();
        assert!(s.is_empty());
        assert!(s.insert(c(1, 2)));
        assert!(!s.insert(c(1, 2)));
        assert_eq!(s.len(), 1);
        assert!(s.contains(c(1, 2)));
        assert!(!s.contains(c(2, 1)));
    }

    #[test]
    fn insert_rect_is_inclusive() {
        let mut s = ObstacleSet::new();
        s.insert_rect(c(-1, -1), c(1, 0));
        assert_eq!(s.len(), 6);
        assert!(s.contains(c(-1, -1)));
        assert!(s.contains(c(1, 0)));
        assert!(!s.contains(c(1, 1)));
    }

    #[test]
    fn inverted_rect_is_empty() {
        let mut s = ObstacleSet::new();
        s.insert_rect(c(3, 3), c(2, 3));
        assert!(s.is_empty());
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let s: ObstacleSet = [c(5, 5), c(-3, 0), c(5, 5), c(0, 9)].into_iter().collect();
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![c(5, 5), c(-3, 0), c(0, 9)]);
    }

    #[test]
    fn blocking_matches_contains() {
        let mut s = ObstacleSet::new();
        s.extend([c(0, 0), c(0, 1)]);
        assert!(s.is_blocked(c(0, 1)));
        assert!(!s.is_blocked(c(1, 1)));
    }
}
