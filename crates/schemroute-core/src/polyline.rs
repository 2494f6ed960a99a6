//! Routed wire geometry.

use std::fmt;

use crate::coord::Point;

/// A single vector-path drawing instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Lift the pen and move to a point.
    MoveTo(Point),
    /// Draw a straight line to a point.
    LineTo(Point),
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            Self::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
        }
    }
}

/// An ordered sequence of points in canvas space, joined by straight
/// segments.
///
/// Produced by the router already simplified: each interior point is a
/// genuine turn. A single-point polyline is the degenerate route between
/// two endpoints that share a grid cell.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Wrap a point sequence.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The vertices in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume into the vertex list.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if there are no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First vertex.
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last vertex.
    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Consecutive vertex pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of interior vertices where the wire changes axis.
    pub fn turn_count(&self) -> usize {
        self.points
            .windows(3)
            .filter(|w| {
                let shared_x = w[0].x == w[1].x && w[1].x == w[2].x;
                let shared_y = w[0].y == w[1].y && w[1].y == w[2].y;
                !(shared_x || shared_y)
            })
            .count()
    }

    /// `true` if every segment is horizontal or vertical.
    pub fn is_orthogonal(&self) -> bool {
        self.segments().all(|(a, b)| a.x == b.x || a.y == b.y)
    }

    /// Move-to the first vertex, line-to each subsequent one.
    pub fn commands(&self) -> Vec<PathCommand> {
        let mut out = Vec::with_capacity(self.points.len());
        let mut iter = self.points.iter().copied();
        if let Some(first) = iter.next() {
            out.push(PathCommand::MoveTo(first));
        }
        out.extend(iter.map(PathCommand::LineTo));
        out
    }

    /// SVG path data (`"M x y L x y ..."`). Empty for an empty polyline.
    ///
    /// ```
    /// use schemroute_core::{Point, Polyline};
    ///
    /// let line = Polyline::new(vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
    /// assert_eq!(line.to_svg_path(), "M 0 0 L 100 0");
    /// ```
    pub fn to_svg_path(&self) -> String {
        self.commands()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
