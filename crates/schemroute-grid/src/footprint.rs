//! Component body footprints.

use schemroute_core::Point;

/// Axis-aligned body size of a component in canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Footprint {
    /// Largest half-extent, in grid cells, a footprint may rasterize to.
    ///
    /// Bounds the work done for absurd inputs; a schematic body is a few
    /// dozen cells across at most.
    pub const MAX_HALF_EXTENT: i32 = 4096;

    /// Create a footprint.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The same body turned a quarter turn (width and height swapped).
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Half-width and half-height in grid cells, rounded up.
    ///
    /// Non-finite or negative dimensions count as zero.
    pub fn half_extents(&self, pitch: f64) -> (i32, i32) {
        (half_cells(self.width, pitch), half_cells(self.height, pitch))
    }
}

fn half_cells(extent: f64, pitch: f64) -> i32 {
    if !extent.is_finite() || extent <= 0.0 {
        return 0;
    }
    let half = ((extent / pitch) / 2.0).ceil();
    if half.is_finite() {
        (half as i32).clamp(0, Footprint::MAX_HALF_EXTENT)
    } else {
        0
    }
}

/// A placed component body: where it sits and how much room it takes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    /// Body center in canvas units.
    pub center: Point,
    /// Axis-aligned body size.
    pub footprint: Footprint,
}

impl Obstacle {
    /// Create an obstacle centered at `(x, y)`.
    pub fn new(x: f64, y: f64, footprint: Footprint) -> Self {
        Self {
            center: Point::new(x, y),
            footprint,
        }
    }
}
