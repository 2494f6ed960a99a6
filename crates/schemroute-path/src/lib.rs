//! Orthogonal wire routing on the schemroute lattice.
//!
//! [`Pathfinder`] connects two [`Endpoint`](schemroute_core::Endpoint)s
//! with a Manhattan polyline that avoids an obstacle map, prefers straight
//! runs over turns, and leaves every pin perpendicular to its mounting
//! edge. When no path is found within the expansion bound it falls back to
//! a plain elbow, so a caller always gets something to draw.
//!
//! The pipeline for one call:
//!
//! 1. Project each pin out along its direction to an escape target.
//! 2. Carve the escape runs out of the obstacle map (per call, via
//!    [`Carved`](schemroute_grid::Carved)).
//! 3. A* from escape target to escape target with a turn penalty
//!    ([`search`](mod@search)).
//! 4. Stitch the escape runs back on and drop collinear vertices
//!    ([`simplify()`]).
//! 5. Scale back to canvas units.
//!
//! ```
//! use schemroute_core::{Direction, Endpoint};
//! use schemroute_grid::ObstacleSet;
//! use schemroute_path::route;
//!
//! let start = Endpoint::pin(0.0, 0.0, Direction::Right);
//! let end = Endpoint::pin(100.0, 0.0, Direction::Left);
//! let wire = route(&start, &end, &ObstacleSet::new());
//! assert_eq!(wire.to_svg_path(), "M 0 0 L 100 0");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cost;
pub mod pathfinder;
pub mod search;
pub mod simplify;

pub use cost::path_cost;
pub use pathfinder::{route, Pathfinder, RouteOutcome, RoutePlan};
pub use search::SearchOutcome;
pub use simplify::{simplify, Vertex};
