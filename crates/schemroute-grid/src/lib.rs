//! Obstacle maps for the schemroute routing lattice.
//!
//! This crate turns placed component bodies into an occupancy set on the
//! integer grid and defines the [`Blocking`] trait through which the
//! pathfinder asks whether a cell may be entered.
//!
//! # Building
//!
//! [`build`] rasterizes every [`Obstacle`] (a center plus a [`Footprint`])
//! into an [`ObstacleSet`], rounding half-extents outward so a component
//! body is never under-covered.
//!
//! # Carving
//!
//! [`Carved`] overlays a small set of always-passable cells on top of any
//! [`Blocking`] map without copying it. The router uses it to let a pin
//! leave the body of its own component.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod blocking;
pub mod builder;
pub mod footprint;
pub mod obstacle_set;

pub use blocking::{Blocking, Carved};
pub use builder::build;
pub use footprint::{Footprint, Obstacle};
pub use obstacle_set::ObstacleSet;
