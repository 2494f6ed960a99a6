//! Component definitions.

use schemroute_core::Point;
use schemroute_grid::Footprint;

use crate::kind::{Category, ComponentKind};
use crate::pin::{quarter_turns, PinDef};

/// Everything the router needs to know about one kind of component.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentDef {
    /// The kind this definition describes.
    pub kind: ComponentKind,
    /// Human-readable name ("Resistor", "NPN BJT").
    pub label: String,
    /// Palette grouping.
    pub category: Category,
    /// Body size at rotation 0.
    pub footprint: Footprint,
    /// Default pins, in drawing order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pins: Vec<PinDef>,
}

impl ComponentDef {
    /// A definition with no pins.
    pub fn new(
        kind: ComponentKind,
        label: impl Into<String>,
        category: Category,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            category,
            footprint: Footprint::new(width, height),
            pins: Vec::new(),
        }
    }

    /// Append a pin.
    pub fn with_pin(mut self, pin: PinDef) -> Self {
        self.pins.push(pin);
        self
    }

    /// The pin with exactly this id.
    pub fn pin(&self, id: &str) -> Option<&PinDef> {
        self.pins.iter().find(|p| p.id == id)
    }

    /// The body size for a component rotated by `degrees`: width and
    /// height swap for an odd number of quarter turns. Other angles keep
    /// the unrotated footprint.
    pub fn oriented_footprint(&self, degrees: f64) -> Footprint {
        match quarter_turns(degrees) {
            Some(1 | 3) => self.footprint.transposed(),
            _ => self.footprint,
        }
    }

    /// Hit test: is `point` strictly inside the unrotated body of a
    /// component centered at `center`?
    pub fn contains(&self, center: Point, point: Point) -> bool {
        (point.x - center.x).abs() < self.footprint.width / 2.0
            && (point.y - center.y).abs() < self.footprint.height / 2.0
    }
}
