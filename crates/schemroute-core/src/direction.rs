//! Pin exit directions.

use std::fmt;
use std::str::FromStr;

/// The orientation a pin faces: the way a wire must leave it.
///
/// A free point (e.g. the cursor while dragging a new wire) has no
/// direction; that is modelled as `Option<Direction>::None` rather than a
/// fifth variant.
///
/// Vectors follow canvas conventions: `y` grows downward, so [`Up`] is
/// `(0, -1)`.
///
/// [`Up`]: Direction::Up
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Exit toward smaller `y`.
    #[cfg_attr(feature = "serde", serde(alias = "top"))]
    Up,
    /// Exit toward larger `y`.
    #[cfg_attr(feature = "serde", serde(alias = "bottom"))]
    Down,
    /// Exit toward smaller `x`.
    Left,
    /// Exit toward larger `x`.
    Right,
}

impl Direction {
    /// All four directions in search expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the `(dx, dy)` unit grid vector.
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Rotate clockwise (on screen) by `quarter_turns` * 90°.
    ///
    /// Negative values rotate counter-clockwise.
    pub fn rotate_quarter_turns(self, quarter_turns: i32) -> Self {
        let mut dir = self;
        for _ in 0..quarter_turns.rem_euclid(4) {
            dir = match dir {
                Direction::Up => Direction::Right,
                Direction::Right => Direction::Down,
                Direction::Down => Direction::Left,
                Direction::Left => Direction::Up,
            };
        }
        dir
    }

    /// `true` for [`Left`](Direction::Left) and [`Right`](Direction::Right).
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Parse a pin orientation name leniently.
    ///
    /// Accepts `up`/`top`, `down`/`bottom`, `left`, `right` in any case.
    /// Anything else (including the empty string) means "no direction".
    pub fn parse_orientation(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

/// Unit vector for an optional direction; `None` maps to `(0, 0)`.
pub fn direction_vector(direction: Option<Direction>) -> (i32, i32) {
    direction.map_or((0, 0), Direction::vector)
}

/// Error returned when a string is not a known orientation name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction '{}'", self.input)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "top" => Ok(Direction::Up),
            "down" | "bottom" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_match_canvas_axes() {
        assert_eq!(direction_vector(None), (0, 0));
        assert_eq!(direction_vector(Some(Direction::Up)), (0, -1));
        assert_eq!(direction_vector(Some(Direction::Down)), (0, 1));
        assert_eq!(direction_vector(Some(Direction::Left)), (-1, 0));
        assert_eq!(direction_vector(Some(Direction::Right)), (1, 0));
    }

    #[test]
    fn opposite_negates_vector() {
        for d in Direction::ALL {
            let (dx, dy) = d.vector();
            assert_eq!(d.opposite().vector(), (-dx, -dy));
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn rotation_is_clockwise_on_screen() {
        assert_eq!(Direction::Left.rotate_quarter_turns(1), Direction::Up);
        assert_eq!(Direction::Up.rotate_quarter_turns(1), Direction::Right);
        assert_eq!(Direction::Right.rotate_quarter_turns(2), Direction::Left);
        assert_eq!(Direction::Right.rotate_quarter_turns(-1), Direction::Up);
        for d in Direction::ALL {
            assert_eq!(d.rotate_quarter_turns(4), d);
            assert_eq!(d.rotate_quarter_turns(0), d);
        }
    }

    #[test]
    fn parse_accepts_editor_names() {
        assert_eq!(Direction::parse_orientation("top"), Some(Direction::Up));
        assert_eq!(Direction::parse_orientation("BOTTOM"), Some(Direction::Down));
        assert_eq!(Direction::parse_orientation(" Left "), Some(Direction::Left));
        assert_eq!(Direction::parse_orientation("right"), Some(Direction::Right));
        assert_eq!(Direction::parse_orientation(""), None);
        assert_eq!(Direction::parse_orientation("north"), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>(), Ok(d));
        }
    }
}
