//! Grid and canvas coordinates.

use std::fmt;
use std::ops::Add;

use crate::direction::Direction;

/// Quantize a continuous coordinate to the nearest grid index.
///
/// Halves round toward positive infinity, so `-0.5` maps to `0` and `0.5`
/// maps to `1`. Non-finite input saturates (NaN maps to `0`).
///
/// ```
/// use schemroute_core::quantize;
///
/// assert_eq!(quantize(24.0, 10.0), 2);
/// assert_eq!(quantize(25.0, 10.0), 3);
/// assert_eq!(quantize(-25.0, 10.0), -2);
/// ```
#[inline]
pub fn quantize(value: f64, pitch: f64) -> i32 {
    (value / pitch + 0.5).floor() as i32
}

/// Convert a grid index back to a continuous coordinate.
#[inline]
pub fn dequantize(index: i32, pitch: f64) -> f64 {
    f64::from(index) * pitch
}

/// A cell of the integer routing lattice.
///
/// `x` grows to the right and `y` grows downward, matching canvas
/// conventions. Ordering is lexicographic on `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl GridCoord {
    /// Create a grid coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Quantize a continuous point onto a lattice of the given pitch.
    pub fn from_point(point: Point, pitch: f64) -> Self {
        Self::new(quantize(point.x, pitch), quantize(point.y, pitch))
    }

    /// Scale back to continuous space.
    pub fn to_point(self, pitch: f64) -> Point {
        Point::new(dequantize(self.x, pitch), dequantize(self.y, pitch))
    }

    /// Move `distance` cells along `direction`, saturating at the edge of
    /// the `i32` lattice.
    pub fn step(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.vector();
        Self::new(
            self.x.saturating_add(dx.saturating_mul(distance)),
            self.y.saturating_add(dy.saturating_mul(distance)),
        )
    }

    /// The 4-adjacent cell along `direction`, or `None` at the edge of the
    /// `i32` lattice.
    pub fn checked_neighbour(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.vector();
        Some(Self::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
        ))
    }

    /// L1 distance to `other`.
    pub fn manhattan(self, other: Self) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// The unit direction of a single lattice step from `self` to `next`,
    /// or `None` if the two cells are not 4-adjacent.
    pub fn direction_to(self, next: Self) -> Option<Direction> {
        let dx = i64::from(next.x) - i64::from(self.x);
        let dy = i64::from(next.y) - i64::from(self.y);
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point in continuous canvas space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position (grows downward).
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
