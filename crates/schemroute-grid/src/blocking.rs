//! Passability queries.

use rustc_hash::FxHashSet;
use schemroute_core::GridCoord;

/// Anything that can say whether a lattice cell is impassable.
///
/// The search only ever asks about cells it is about to enter, so an
/// implementation may describe an unbounded lattice.
pub trait Blocking {
    /// `true` if a route may not occupy `cell`.
    fn is_blocked(&self, cell: GridCoord) -> bool;
}

impl<B: Blocking + ?Sized> Blocking for &B {
    fn is_blocked(&self, cell: GridCoord) -> bool {
        (**self).is_blocked(cell)
    }
}

/// A [`Blocking`] map with a set of cells forced open.
///
/// Equivalent to removing the open cells from a private copy of the base
/// map, without copying it: the base stays shared and untouched, so one
/// obstacle map can serve many routing calls at once.
///
/// ```
/// use schemroute_core::GridCoord;
/// use schemroute_grid::{Blocking, Carved, ObstacleSet};
///
/// let mut obstacles = ObstacleSet::new();
/// obstacles.insert_rect(GridCoord::new(0, 0), GridCoord::new(2, 2));
///
/// let mut carved = Carved::new(&obstacles);
/// carved.open(GridCoord::new(1, 1));
/// assert!(!carved.is_blocked(GridCoord::new(1, 1)));
/// assert!(carved.is_blocked(GridCoord::new(0, 0)));
/// assert!(obstacles.contains(GridCoord::new(1, 1)));
/// ```
#[derive(Debug)]
pub struct Carved<'a, B: ?Sized> {
    base: &'a B,
    open: FxHashSet<GridCoord>,
}

impl<'a, B: Blocking + ?Sized> Carved<'a, B> {
    /// Wrap `base` with nothing carved yet.
    pub fn new(base: &'a B) -> Self {
        Self {
            base,
            open: FxHashSet::default(),
        }
    }

    /// Force `cell` passable.
    pub fn open(&mut self, cell: GridCoord) {
        self.open.insert(cell);
    }

    /// Force every cell in `cells` passable.
    pub fn open_all(&mut self, cells: impl IntoIterator<Item = GridCoord>) {
        self.open.extend(cells);
    }

    /// `true` if `cell` has been carved open.
    pub fn is_open(&self, cell: GridCoord) -> bool {
        self.open.contains(&cell)
    }
}

impl<B: Blocking + ?Sized> Blocking for Carved<'_, B> {
    fn is_blocked(&self, cell: GridCoord) -> bool {
        !self.open.contains(&cell) && self.base.is_blocked(cell)
    }
}
