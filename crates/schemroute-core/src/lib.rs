//! Core types for the schemroute wire-routing engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental vocabulary shared by the rest of the workspace:
//!
//! - [`GridCoord`] and [`Point`]: the integer routing lattice and the
//!   continuous canvas it is sampled from, plus [`quantize`]/[`dequantize`].
//! - [`Direction`] and [`Endpoint`]: where a wire starts or ends and which
//!   way it must leave.
//! - [`Polyline`] and [`PathCommand`]: the routed geometry handed to a
//!   renderer.
//! - [`RouteConfig`] and [`ConfigError`]: routing constants and their
//!   validation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod coord;
pub mod direction;
pub mod endpoint;
pub mod error;
pub mod polyline;

pub use config::RouteConfig;
pub use coord::{dequantize, quantize, GridCoord, Point};
pub use direction::{direction_vector, Direction};
pub use endpoint::Endpoint;
pub use error::ConfigError;
pub use polyline::{PathCommand, Polyline};
