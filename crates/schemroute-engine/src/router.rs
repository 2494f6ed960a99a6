//! Routing wires of a schematic.

use schemroute_core::{ConfigError, Endpoint, GridCoord, Point, Polyline};
use schemroute_grid::{build, Footprint, Obstacle, ObstacleSet};
use schemroute_library::{find_pin, place_pin, ComponentLibrary, PinDef};
use schemroute_path::{Pathfinder, RoutePlan};

use crate::config::EngineConfig;
use crate::error::RouteError;
use crate::model::{Schematic, SchematicNode, SchematicWire};

/// A routed wire.
#[derive(Clone, Debug, PartialEq)]
pub struct WireRoute {
    /// Id of the wire this route belongs to.
    pub wire_id: String,
    /// Resolved source pin.
    pub start: Endpoint,
    /// Resolved target pin.
    pub end: Endpoint,
    /// Geometry and search diagnostics.
    pub plan: RoutePlan,
}

impl WireRoute {
    /// The routed geometry.
    pub fn polyline(&self) -> &Polyline {
        &self.plan.polyline
    }

    /// SVG path data for the routed geometry.
    pub fn svg_path(&self) -> String {
        self.plan.polyline.to_svg_path()
    }
}

/// A pin found by [`WireRouter::pin_near`].
#[derive(Clone, Debug, PartialEq)]
pub struct PinHit {
    /// Node the pin belongs to.
    pub node_id: String,
    /// Pin id on that node.
    pub pin_id: String,
    /// Where the pin sits and which way it faces.
    pub endpoint: Endpoint,
}

/// Routes the wires of a schematic against its component bodies.
///
/// Each call rebuilds what it needs from the schematic it is given; the
/// router keeps no per-document state and can be shared across threads.
#[derive(Clone, Debug)]
pub struct WireRouter {
    config: EngineConfig,
    library: ComponentLibrary,
    pathfinder: Pathfinder,
}

impl WireRouter {
    /// Create a router, validating `config`.
    pub fn new(config: EngineConfig, library: ComponentLibrary) -> Result<Self, ConfigError> {
        config.validate()?;
        let pathfinder = Pathfinder::new(config.route.clone())?;
        Ok(Self {
            config,
            library,
            pathfinder,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The component catalog in use.
    pub fn library(&self) -> &ComponentLibrary {
        &self.library
    }

    /// The body size used for `node` in the obstacle map.
    pub fn footprint(&self, node: &SchematicNode) -> Footprint {
        let def = self.library.resolve(node.kind);
        if self.config.rotated_footprints {
            def.oriented_footprint(node.rotation)
        } else {
            def.footprint
        }
    }

    /// Rasterize every node body.
    pub fn obstacles(&self, nodes: &[SchematicNode]) -> ObstacleSet {
        build(
            nodes
                .iter()
                .map(|n| Obstacle::new(n.position.x, n.position.y, self.footprint(n))),
            self.config.route.grid_pitch,
        )
    }

    /// The pins `node` offers: its own when it carries a non-empty list,
    /// otherwise the library layout for its kind.
    pub fn pins<'a>(&'a self, node: &'a SchematicNode) -> &'a [PinDef] {
        match node.pins.as_deref() {
            Some(own) if !own.is_empty() => own,
            _ => &self.library.resolve(node.kind).pins,
        }
    }

    /// Place pin `pin_id` of `node` in canvas space.
    ///
    /// An unknown pin id resolves to the node's first pin.
    pub fn resolve_pin(&self, node: &SchematicNode, pin_id: &str) -> Result<Endpoint, RouteError> {
        let pin = find_pin(self.pins(node), pin_id).ok_or_else(|| RouteError::NoPins {
            node_id: node.id.clone(),
        })?;
        if pin.id != pin_id {
            tracing::warn!(
                node = %node.id,
                requested = pin_id,
                using = %pin.id,
                "pin not found, using first pin"
            );
        }
        Ok(place_pin(node.position, node.rotation, pin))
    }

    fn node<'a>(&self, schematic: &'a Schematic, id: &str) -> Result<&'a SchematicNode, RouteError> {
        schematic.node(id).ok_or_else(|| RouteError::UnknownNode {
            node_id: id.to_string(),
        })
    }

    /// Route one wire of `schematic`.
    pub fn route_wire(
        &self,
        schematic: &Schematic,
        wire: &SchematicWire,
    ) -> Result<WireRoute, RouteError> {
        let obstacles = self.obstacles(&schematic.nodes);
        self.route_wire_on(&obstacles, schematic, wire)
    }

    pub(crate) fn route_wire_on(
        &self,
        obstacles: &ObstacleSet,
        schematic: &Schematic,
        wire: &SchematicWire,
    ) -> Result<WireRoute, RouteError> {
        let source = self.node(schematic, &wire.source_id)?;
        let target = self.node(schematic, &wire.target_id)?;
        let start = self.resolve_pin(source, &wire.source_pin)?;
        let end = self.resolve_pin(target, &wire.target_pin)?;
        let plan = self.pathfinder.plan(&start, &end, obstacles);
        Ok(WireRoute {
            wire_id: wire.id.clone(),
            start,
            end,
            plan,
        })
    }

    /// Route from a pin to the cursor while a new wire is being dragged.
    ///
    /// The cursor is snapped to the nearest lattice point and treated as a
    /// free endpoint.
    pub fn route_preview(
        &self,
        schematic: &Schematic,
        node_id: &str,
        pin_id: &str,
        cursor: Point,
    ) -> Result<RoutePlan, RouteError> {
        let node = self.node(schematic, node_id)?;
        let start = self.resolve_pin(node, pin_id)?;
        let pitch = self.config.route.grid_pitch;
        let snapped = GridCoord::from_point(cursor, pitch).to_point(pitch);
        let end = Endpoint::free(snapped.x, snapped.y);
        let obstacles = self.obstacles(&schematic.nodes);
        Ok(self.pathfinder.plan(&start, &end, &obstacles))
    }

    /// Route every wire on the calling thread, in input order.
    pub fn route_all(&self, schematic: &Schematic) -> Vec<Result<WireRoute, RouteError>> {
        let obstacles = self.obstacles(&schematic.nodes);
        schematic
            .wires
            .iter()
            .map(|wire| self.route_wire_on(&obstacles, schematic, wire))
            .collect()
    }

    /// The topmost node whose unrotated body contains `point`.
    ///
    /// Nodes earlier in the list are considered on top.
    pub fn node_at<'a>(&self, schematic: &'a Schematic, point: Point) -> Option<&'a SchematicNode> {
        schematic
            .nodes
            .iter()
            .find(|n| self.library.resolve(n.kind).contains(n.position, point))
    }

    /// A pin within `radius` of `point` on both axes.
    ///
    /// When several qualify the last one in drawing order wins.
    pub fn pin_near(&self, schematic: &Schematic, point: Point, radius: f64) -> Option<PinHit> {
        schematic.nodes.iter().rev().find_map(|node| {
            self.pins(node).iter().rev().find_map(|pin| {
                let endpoint = place_pin(node.position, node.rotation, pin);
                let near = (endpoint.position.x - point.x).abs() < radius
                    && (endpoint.position.y - point.y).abs() < radius;
                near.then(|| PinHit {
                    node_id: node.id.clone(),
                    pin_id: pin.id.clone(),
                    endpoint,
                })
            })
        })
    }
}
