//! Test utilities for schemroute development.
//!
//! - [`fixtures`]: hand-placed bodies and endpoints for the reference
//!   scenarios (two facing resistors, a blocking body, a sealed box).
//! - [`scenes`]: seeded random scenes for property tests and benchmarks.
//! - [`assertions`]: geometric checks on routed polylines.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod assertions;
pub mod fixtures;
pub mod scenes;

pub use assertions::{
    assert_avoids, assert_endpoints_exact, assert_no_collinear, assert_orthogonal, route_cells,
};
pub use fixtures::{
    enclosure, facing_pins, resistor_body, resistor_pair, straddling_body, RESISTOR,
};
pub use scenes::{random_scene, RandomScene};
