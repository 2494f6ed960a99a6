//! schemroute: orthogonal wire routing for schematic editors.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all schemroute sub-crates. For most users, adding `schemroute` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! Route one wire between two pins around a component body:
//!
//! ```rust
//! use schemroute::prelude::*;
//!
//! let body = Obstacle::new(50.0, 0.0, Footprint::new(20.0, 60.0));
//! let map = build([body], 10.0);
//!
//! let start = Endpoint::pin(0.0, 0.0, Direction::Right);
//! let end = Endpoint::pin(100.0, 0.0, Direction::Left);
//! let plan = Pathfinder::default().plan(&start, &end, &map);
//!
//! assert_eq!(plan.outcome, RouteOutcome::Routed);
//! assert_eq!(plan.polyline.start(), Some(start.position));
//! assert_eq!(plan.polyline.end(), Some(end.position));
//! assert_eq!(plan.polyline.turn_count(), 4);
//! ```
//!
//! Or route a whole schematic:
//!
//! ```rust
//! use schemroute::prelude::*;
//!
//! let doc = Schematic {
//!     nodes: vec![
//!         SchematicNode::new("V1", ComponentKind::VoltageSource, 0.0, 0.0),
//!         SchematicNode::new("R1", ComponentKind::Resistor, 150.0, -100.0),
//!     ],
//!     wires: vec![SchematicWire::new("w1", "V1", "POS", "R1", "1")],
//!     ..Default::default()
//! };
//! let router = WireRouter::new(EngineConfig::default(), ComponentLibrary::builtin()).unwrap();
//! for route in router.route_all(&doc) {
//!     let route = route.unwrap();
//!     println!("{}: {}", route.wire_id, route.svg_path());
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `schemroute-core` | Coordinates, directions, endpoints, polylines, `RouteConfig` |
//! | [`grid`] | `schemroute-grid` | Footprints, obstacle maps, carving |
//! | [`path`] | `schemroute-path` | Turn-penalized search, simplification, `RoutePlan` |
//! | [`library`] | `schemroute-library` | Component kinds, footprints and pin layouts |
//! | [`engine`] | `schemroute-engine` | Schematic model and batch wire routing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geometry, direction and configuration types (`schemroute-core`).
///
/// Contains [`types::GridCoord`], [`types::Point`], [`types::Endpoint`],
/// [`types::Polyline`] and [`types::RouteConfig`].
pub use schemroute_core as types;

/// Obstacle maps (`schemroute-grid`).
///
/// [`grid::build`] rasterizes component bodies into a [`grid::ObstacleSet`];
/// [`grid::Carved`] opens cells on top of any [`grid::Blocking`] map.
pub use schemroute_grid as grid;

/// The grid pathfinder (`schemroute-path`).
///
/// [`path::Pathfinder`] routes one wire; [`path::path_cost`] evaluates the
/// cost model on any cell sequence.
pub use schemroute_path as path;

/// Component catalog (`schemroute-library`).
pub use schemroute_library as library;

/// Schematic-level routing (`schemroute-engine`).
///
/// [`engine::WireRouter`] routes every wire of an [`engine::Schematic`],
/// sequentially or across a worker pool.
pub use schemroute_engine as engine;

/// Common imports for typical schemroute usage.
///
/// ```rust
/// use schemroute::prelude::*;
/// ```
pub mod prelude {
    // Geometry and configuration
    pub use schemroute_core::{
        ConfigError, Direction, Endpoint, GridCoord, PathCommand, Point, Polyline, RouteConfig,
    };

    // Obstacles
    pub use schemroute_grid::{build, Blocking, Footprint, Obstacle, ObstacleSet};

    // Routing
    pub use schemroute_path::{route, Pathfinder, RouteOutcome, RoutePlan};

    // Library
    pub use schemroute_library::{ComponentDef, ComponentKind, ComponentLibrary, PinDef};

    // Engine
    pub use schemroute_engine::{
        EngineConfig, RouteError, Schematic, SchematicNode, SchematicWire, WireRoute, WireRouter,
    };
}
