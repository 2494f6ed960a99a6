//! Collinear-vertex removal.

use schemroute_core::{GridCoord, Point};

/// A polyline vertex with comparable axes.
pub trait Vertex: Copy + PartialEq {
    /// `true` if `self` and `other` lie on the same vertical line.
    fn same_x(&self, other: &Self) -> bool;
    /// `true` if `self` and `other` lie on the same horizontal line.
    fn same_y(&self, other: &Self) -> bool;
}

impl Vertex for GridCoord {
    fn same_x(&self, other: &Self) -> bool {
        self.x == other.x
    }

    fn same_y(&self, other: &Self) -> bool {
        self.y == other.y
    }
}

impl Vertex for Point {
    fn same_x(&self, other: &Self) -> bool {
        self.x == other.x
    }

    fn same_y(&self, other: &Self) -> bool {
        self.y == other.y
    }
}

fn collinear<V: Vertex>(a: &V, b: &V, c: &V) -> bool {
    (a.same_x(b) && b.same_x(c)) || (a.same_y(b) && b.same_y(c))
}

/// Reduce a point sequence to its turns.
///
/// Repeated consecutive points are merged and every interior point that
/// shares an axis with both of its neighbours is dropped. The first and
/// last points always survive. Running it twice gives the same result as
/// running it once.
///
/// Neighbours are taken from the output being built rather than the raw
/// input, so back-tracking runs (`a -> b -> a`) fold away completely
/// instead of leaving a duplicate vertex behind.
///
/// ```
/// use schemroute_core::GridCoord;
/// use schemroute_path::simplify;
///
/// let cells: Vec<GridCoord> = [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]
///     .into_iter()
///     .map(GridCoord::from)
///     .collect();
/// let turns = simplify(&cells);
/// assert_eq!(turns, vec![GridCoord::new(0, 0), GridCoord::new(2, 0), GridCoord::new(2, 2)]);
/// ```
pub fn simplify<V: Vertex>(points: &[V]) -> Vec<V> {
    let mut out: Vec<V> = Vec::with_capacity(points.len());
    for &p in points {
        while out.len() >= 2 && collinear(&out[out.len() - 2], &out[out.len() - 1], &p) {
            out.pop();
        }
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    out
}
