//! Benchmark profiles for the schemroute wire-routing engine.
//!
//! Provides pre-built [`Schematic`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 48 components on a 12x4 board, 64 wires
//! - [`stress_profile`]: 400 components on a 40x10 board, 600 wires
//! - [`random_wires`]: deterministic wire generation via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use schemroute_engine::{Schematic, SchematicNode, SchematicWire};
use schemroute_library::{ComponentKind, ComponentLibrary};

/// Kinds placed by the profiles, cycled in order.
const KINDS: [ComponentKind; 6] = [
    ComponentKind::Resistor,
    ComponentKind::Capacitor,
    ComponentKind::TransistorNpn,
    ComponentKind::Regulator,
    ComponentKind::Sensor,
    ComponentKind::Switch,
];

/// Center-to-center spacing of the placement grid, in canvas units.
pub const CELL_SPACING: f64 = 150.0;

/// Build a reference benchmark board: 12x4 components, 64 wires.
pub fn reference_profile(seed: u64) -> Schematic {
    board(12, 4, 64, seed)
}

/// Build a stress benchmark board: 40x10 components, 600 wires.
///
/// Same layout rules as [`reference_profile`] at roughly 8x the size.
pub fn stress_profile(seed: u64) -> Schematic {
    board(40, 10, 600, seed)
}

fn board(cols: usize, rows: usize, wires: usize, seed: u64) -> Schematic {
    let mut nodes = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let i = row * cols + col;
            let kind = KINDS[i % KINDS.len()];
            // Every other row is turned a quarter turn.
            let rotation = if row % 2 == 1 { 90.0 } else { 0.0 };
            nodes.push(
                SchematicNode::new(
                    format!("N{i}"),
                    kind,
                    col as f64 * CELL_SPACING,
                    row as f64 * CELL_SPACING,
                )
                .with_rotation(rotation),
            );
        }
    }
    let wires = random_wires(&nodes, wires, seed);
    Schematic {
        title: format!("bench {cols}x{rows}"),
        description: String::new(),
        nodes,
        wires,
    }
}

/// Generate `count` wires between random pins of `nodes`.
///
/// Deterministic in `seed`. Source and target are always different nodes
/// when there are at least two.
pub fn random_wires(nodes: &[SchematicNode], count: usize, seed: u64) -> Vec<SchematicWire> {
    if nodes.is_empty() {
        return Vec::new();
    }
    let library = ComponentLibrary::builtin();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let pick_pin = |rng: &mut ChaCha8Rng, node: &SchematicNode| -> String {
        let pins = &library.resolve(node.kind).pins;
        if pins.is_empty() {
            return String::new();
        }
        pins[rng.random_range(0..pins.len())].id.clone()
    };

    (0..count)
        .map(|i| {
            let a = rng.random_range(0..nodes.len());
            let mut b = rng.random_range(0..nodes.len());
            if nodes.len() > 1 && b == a {
                b = (a + 1) % nodes.len();
            }
            let source_pin = pick_pin(&mut rng, &nodes[a]);
            let target_pin = pick_pin(&mut rng, &nodes[b]);
            SchematicWire::new(
                format!("w{i}"),
                nodes[a].id.clone(),
                source_pin,
                nodes[b].id.clone(),
                target_pin,
            )
        })
        .collect()
}
