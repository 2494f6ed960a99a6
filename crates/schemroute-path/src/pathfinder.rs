//! Endpoint-to-endpoint routing.

use schemroute_core::{ConfigError, Endpoint, GridCoord, Point, Polyline, RouteConfig};
use schemroute_grid::{Blocking, Carved};

use crate::search::{search, SearchOutcome};
use crate::simplify::simplify;

/// How a [`RoutePlan`] was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteOutcome {
    /// The search found an obstacle-avoiding path.
    Routed,
    /// No path was found within the expansion bound; the polyline is the
    /// obstacle-blind elbow `start -> (end.x, start.y) -> end`.
    Fallback,
    /// Both endpoints quantize to the same cell; no search is run. The
    /// polyline is the start point alone, or the horizontal-first elbow
    /// when the two positions differ within the cell.
    Coincident,
}

/// A routed wire together with what it cost to find.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePlan {
    /// How the polyline was produced.
    pub outcome: RouteOutcome,
    /// Final geometry in canvas units.
    pub polyline: Polyline,
    /// The simplified route on the lattice, from the start cell to the end
    /// cell.
    pub grid_path: Vec<GridCoord>,
    /// Search cost (steps plus turn penalties) between the two escape
    /// targets. `None` unless [`RouteOutcome::Routed`].
    pub cost: Option<u64>,
    /// Frontier pops spent by the search.
    pub expansions: u32,
}

impl RoutePlan {
    /// `true` if the polyline avoids obstacles by construction.
    pub fn is_routed(&self) -> bool {
        self.outcome == RouteOutcome::Routed
    }
}

/// Routes wires between endpoints under a fixed [`RouteConfig`].
///
/// A `Pathfinder` holds only configuration. Every call builds its own
/// search state, so one instance can serve any number of threads.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    config: RouteConfig,
}

impl Pathfinder {
    /// Create a pathfinder, validating `config`.
    pub fn new(config: RouteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Route from `start` to `end` around `obstacles`, returning geometry
    /// only. See [`plan`](Self::plan).
    pub fn route<B: Blocking + ?Sized>(
        &self,
        start: &Endpoint,
        end: &Endpoint,
        obstacles: &B,
    ) -> Polyline {
        self.plan(start, end, obstacles).polyline
    }

    /// Route from `start` to `end` around `obstacles`.
    ///
    /// Never fails: an unreachable end, an exhausted expansion bound, or a
    /// start sealed inside foreign obstacles all produce the elbow
    /// fallback. The first and last polyline points are exactly the
    /// endpoints' positions.
    pub fn plan<B: Blocking + ?Sized>(
        &self,
        start: &Endpoint,
        end: &Endpoint,
        obstacles: &B,
    ) -> RoutePlan {
        let pitch = self.config.grid_pitch;
        let escape = self.config.escape_distance;

        let start_cell = start.cell(pitch);
        let end_cell = end.cell(pitch);
        if start_cell == end_cell {
            return RoutePlan {
                outcome: RouteOutcome::Coincident,
                polyline: elbow(start.position, end.position),
                grid_path: vec![start_cell],
                cost: None,
                expansions: 0,
            };
        }

        let start_run = start.escape_cells(pitch, escape);
        let end_run = end.escape_cells(pitch, escape);
        let p1 = start.escape_target(pitch, escape);
        let p2 = end.escape_target(pitch, escape);

        let mut carved = Carved::new(obstacles);
        carved.open_all(start_run.iter().copied());
        carved.open_all(end_run.iter().copied());
        carved.open_all([start_cell, end_cell, p1, p2]);

        let outcome = search(
            &carved,
            p1,
            p2,
            start.direction,
            self.config.turn_penalty,
            self.config.max_expansions,
        );

        match outcome {
            SearchOutcome::Found {
                cells,
                cost,
                expansions,
            } => {
                // start cell -> p1 (escape), p1 -> p2 (search), p2 -> end cell.
                let mut full = Vec::with_capacity(start_run.len() + cells.len() + end_run.len());
                full.extend_from_slice(&start_run[..start_run.len() - 1]);
                full.extend_from_slice(&cells);
                full.extend(end_run.iter().rev().skip(1));

                let grid_path = simplify(&full);
                let polyline = dequantize(&grid_path, pitch, start.position, end.position);
                tracing::trace!(
                    expansions,
                    cost,
                    turns = polyline.turn_count(),
                    "routed wire"
                );
                RoutePlan {
                    outcome: RouteOutcome::Routed,
                    polyline,
                    grid_path,
                    cost: Some(cost),
                    expansions,
                }
            }
            SearchOutcome::Exhausted { expansions } => {
                tracing::debug!(
                    expansions,
                    start = %start_cell,
                    end = %end_cell,
                    "no path within expansion bound, using elbow fallback"
                );
                let corner = GridCoord::new(end_cell.x, start_cell.y);
                RoutePlan {
                    outcome: RouteOutcome::Fallback,
                    polyline: elbow(start.position, end.position),
                    grid_path: simplify(&[start_cell, corner, end_cell]),
                    cost: None,
                    expansions,
                }
            }
        }
    }
}

/// Route with the reference configuration (pitch 10, escape 2, turn
/// penalty 10, 3000 expansions).
pub fn route<B: Blocking + ?Sized>(start: &Endpoint, end: &Endpoint, obstacles: &B) -> Polyline {
    Pathfinder::default().route(start, end, obstacles)
}

/// Scale lattice cells to canvas units, pinning the ends to the exact
/// endpoint positions.
///
/// An endpoint off the lattice drags the vertex next to it across by the
/// same offset, so the end segment keeps its axis. The vertex moves along
/// its other segment, which stays axis-aligned too. A single straight run
/// between ends that no longer line up gets a jog at its midpoint.
fn dequantize(cells: &[GridCoord], pitch: f64, start: Point, end: Point) -> Polyline {
    let mut points: Vec<Point> = cells.iter().map(|c| c.to_point(pitch)).collect();
    let n = points.len();
    if n < 2 {
        return elbow(start, end);
    }
    if n == 2 {
        let (a, b) = (points[0], points[1]);
        points = if a.y == b.y {
            let mid = (a.x + b.x) / 2.0;
            vec![start, Point::new(mid, start.y), Point::new(mid, end.y), end]
        } else {
            let mid = (a.y + b.y) / 2.0;
            vec![start, Point::new(start.x, mid), Point::new(end.x, mid), end]
        };
        return Polyline::new(simplify(&points));
    }

    // Axes are read off the lattice before any vertex moves.
    let first_horizontal = points[0].y == points[1].y;
    let last_horizontal = points[n - 1].y == points[n - 2].y;
    points[1] = slide(points[1], first_horizontal, start);
    points[n - 2] = slide(points[n - 2], last_horizontal, end);
    points[0] = start;
    points[n - 1] = end;
    Polyline::new(simplify(&points))
}

/// Move `vertex` onto the line through `anchor` that the end segment runs
/// along.
fn slide(vertex: Point, horizontal: bool, anchor: Point) -> Point {
    if horizontal {
        Point::new(vertex.x, anchor.y)
    } else {
        Point::new(anchor.x, vertex.y)
    }
}

/// Horizontal-first elbow between two canvas points.
fn elbow(start: Point, end: Point) -> Polyline {
    Polyline::new(simplify(&[start, Point::new(end.x, start.y), end]))
}
