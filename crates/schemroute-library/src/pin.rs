//! Pin definitions and their placement in canvas space.

use schemroute_core::{Direction, Endpoint, Point};

/// A connection point on a component, relative to the component center.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinDef {
    /// Identifier referenced by wires (`"1"`, `"OUT"`, `"B"`).
    pub id: String,
    /// Text drawn next to the pin; often empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: String,
    /// Offset from the component center at rotation 0.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub offset: Point,
    /// Which way a wire leaves the pin at rotation 0, if known.
    #[cfg_attr(feature = "serde", serde(default, with = "orientation"))]
    pub orientation: Option<Direction>,
}

impl PinDef {
    /// Create a pin.
    pub fn new(id: impl Into<String>, x: f64, y: f64, orientation: Direction) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            offset: Point::new(x, y),
            orientation: Some(orientation),
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Round half toward positive infinity, like the editor's pixel snapping.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Rotate `offset` about the origin by `degrees` (clockwise on screen) and
/// round each axis to a whole unit.
///
/// ```
/// use schemroute_core::Point;
/// use schemroute_library::rotate_offset;
///
/// assert_eq!(rotate_offset(Point::new(40.0, 0.0), 90.0), Point::new(0.0, 40.0));
/// assert_eq!(rotate_offset(Point::new(40.0, 0.0), 180.0), Point::new(-40.0, 0.0));
/// ```
pub fn rotate_offset(offset: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(
        round_half_up(offset.x * cos - offset.y * sin),
        round_half_up(offset.x * sin + offset.y * cos),
    )
}

/// The rotation as a whole number of clockwise quarter turns in `0..4`, or
/// `None` if `degrees` is not a multiple of 90.
pub fn quarter_turns(degrees: f64) -> Option<i32> {
    if !degrees.is_finite() || degrees % 90.0 != 0.0 {
        return None;
    }
    Some((((degrees / 90.0) % 4.0) as i32).rem_euclid(4))
}

/// Place `pin` for a component centered at `center` and rotated by
/// `degrees`.
///
/// The position is snapped to whole units. The orientation turns with the
/// component when the rotation is a multiple of 90°; any other angle keeps
/// the unrotated orientation.
pub fn place_pin(center: Point, degrees: f64, pin: &PinDef) -> Endpoint {
    let offset = rotate_offset(pin.offset, degrees);
    let position = Point::new(
        round_half_up(center.x + offset.x),
        round_half_up(center.y + offset.y),
    );
    let direction = pin.orientation.map(|dir| match quarter_turns(degrees) {
        Some(q) => dir.rotate_quarter_turns(q),
        None => dir,
    });
    Endpoint {
        position,
        direction,
    }
}

/// Look up `id` in `pins`, falling back to the first pin.
///
/// Returns `None` only when `pins` is empty. Callers that care whether the
/// fallback was taken can compare the returned pin's id.
pub fn find_pin<'a>(pins: &'a [PinDef], id: &str) -> Option<&'a PinDef> {
    pins.iter().find(|p| p.id == id).or_else(|| pins.first())
}

#[cfg(feature = "serde")]
mod orientation {
    use schemroute_core::Direction;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        value: &Option<Direction>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dir) => serializer.serialize_str(&dir.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Direction>, D::Error> {
        let name: Option<String> = Option::deserialize(deserializer)?;
        Ok(name.as_deref().and_then(Direction::parse_orientation))
    }
}
