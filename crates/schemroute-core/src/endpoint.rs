//! Wire endpoints.

use crate::coord::{GridCoord, Point};
use crate::direction::Direction;

/// One end of a wire: a canvas position plus an optional exit direction.
///
/// An endpoint with a direction is a component pin and is routed with a
/// forced straight escape run before the first turn. An endpoint without
/// one is a free point and the search runs straight into it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    /// Continuous canvas position.
    pub position: Point,
    /// Mandatory exit heading, if this is a pin.
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: Option<Direction>,
}

impl Endpoint {
    /// A component pin facing `direction`.
    pub fn pin(x: f64, y: f64, direction: Direction) -> Self {
        Self {
            position: Point::new(x, y),
            direction: Some(direction),
        }
    }

    /// A free point with no exit constraint.
    pub fn free(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            direction: None,
        }
    }

    /// The lattice cell this endpoint quantizes to.
    pub fn cell(&self, pitch: f64) -> GridCoord {
        GridCoord::from_point(self.position, pitch)
    }

    /// The cell `escape_distance` steps along the exit direction, or the
    /// endpoint's own cell if it has no direction.
    pub fn escape_target(&self, pitch: f64, escape_distance: u32) -> GridCoord {
        let cell = self.cell(pitch);
        match self.direction {
            Some(dir) => cell.step(dir, escape_distance as i32),
            None => cell,
        }
    }

    /// Every cell of the escape run, from the endpoint's own cell to its
    /// escape target inclusive. A free point yields just its own cell.
    pub fn escape_cells(&self, pitch: f64, escape_distance: u32) -> Vec<GridCoord> {
        let cell = self.cell(pitch);
        match self.direction {
            Some(dir) => (0..=escape_distance as i32)
                .map(|i| cell.step(dir, i))
                .collect(),
            None => vec![cell],
        }
    }
}
