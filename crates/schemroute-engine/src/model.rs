//! The schematic document: placed components and the wires between them.
//!
//! Field names follow the JSON documents exchanged with the editor when the
//! `serde` feature is enabled (`type` for the kind, flattened `x`/`y`,
//! camel-case wire fields).

use indexmap::IndexMap;
use schemroute_core::Point;
use schemroute_library::{ComponentKind, PinDef};

/// A placed component.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchematicNode {
    /// Unique id within the schematic.
    pub id: String,
    /// Component kind; selects footprint and default pins.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ComponentKind,
    /// Reference designator ("R1", "U3").
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: String,
    /// Part value ("10k", "100nF").
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value: Option<String>,
    /// Body center in canvas units.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub position: Point,
    /// Clockwise rotation in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: f64,
    /// Pins supplied with the node itself, overriding the library layout.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub pins: Option<Vec<PinDef>>,
    /// Free-form key/value annotations.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "IndexMap::is_empty")
    )]
    pub properties: IndexMap<String, String>,
}

impl SchematicNode {
    /// A node of `kind` centered at `(x, y)`, unrotated, using library pins.
    pub fn new(id: impl Into<String>, kind: ComponentKind, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            label: String::new(),
            value: None,
            position: Point::new(x, y),
            rotation: 0.0,
            pins: None,
            properties: IndexMap::new(),
        }
    }

    /// Set the rotation in degrees.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Replace the library pin layout with node-specific pins.
    pub fn with_pins(mut self, pins: Vec<PinDef>) -> Self {
        self.pins = Some(pins);
        self
    }

    /// Set the reference designator.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A connection between two pins.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SchematicWire {
    /// Unique id within the schematic.
    pub id: String,
    /// Node the wire starts at.
    pub source_id: String,
    /// Pin id on the source node.
    pub source_pin: String,
    /// Node the wire ends at.
    pub target_id: String,
    /// Pin id on the target node.
    pub target_pin: String,
    /// Optional net label.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub label: Option<String>,
    /// Optional net identifier.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub net_id: Option<String>,
}

impl SchematicWire {
    /// A wire from `source_id.source_pin` to `target_id.target_pin`.
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        source_pin: impl Into<String>,
        target_id: impl Into<String>,
        target_pin: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            source_pin: source_pin.into(),
            target_id: target_id.into(),
            target_pin: target_pin.into(),
            label: None,
            net_id: None,
        }
    }
}

/// A complete schematic document.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schematic {
    /// Document title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Placed components, in drawing order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nodes: Vec<SchematicNode>,
    /// Connections, in drawing order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wires: Vec<SchematicWire>,
}

impl Schematic {
    /// The first node with this id.
    pub fn node(&self, id: &str) -> Option<&SchematicNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The first wire with this id.
    pub fn wire(&self, id: &str) -> Option<&SchematicWire> {
        self.wires.iter().find(|w| w.id == id)
    }
}
