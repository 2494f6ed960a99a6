//! Schematic-level wire routing.
//!
//! [`WireRouter`] ties the pieces together for a whole [`Schematic`]:
//!
//! 1. Every node body is rasterized into one obstacle map, with the
//!    footprint taken from the [`ComponentLibrary`](schemroute_library::ComponentLibrary).
//! 2. Each wire's source and target pins are placed in canvas space,
//!    honoring node rotation and node-supplied pin lists.
//! 3. Each wire is routed independently against the shared map, either on
//!    the calling thread ([`WireRouter::route_all`]) or across a worker
//!    pool ([`WireRouter::route_all_parallel`]).
//!
//! ```
//! use schemroute_engine::{EngineConfig, Schematic, SchematicNode, SchematicWire, WireRouter};
//! use schemroute_library::{ComponentKind, ComponentLibrary};
//!
//! let doc = Schematic {
//!     nodes: vec![
//!         SchematicNode::new("R1", ComponentKind::Resistor, 0.0, 0.0),
//!         SchematicNode::new("R2", ComponentKind::Resistor, 200.0, 0.0),
//!     ],
//!     wires: vec![SchematicWire::new("w1", "R1", "2", "R2", "1")],
//!     ..Default::default()
//! };
//! let router = WireRouter::new(EngineConfig::default(), ComponentLibrary::builtin())?;
//! let routes = router.route_all(&doc);
//! assert_eq!(routes[0].as_ref().map(|r| r.svg_path()), Ok("M 40 0 L 160 0".to_string()));
//! # Ok::<(), schemroute_core::ConfigError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod error;
pub mod model;
pub mod router;

pub use config::EngineConfig;
pub use error::RouteError;
pub use model::{Schematic, SchematicNode, SchematicWire};
pub use router::{PinHit, WireRoute, WireRouter};
