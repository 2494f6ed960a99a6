//! Schematic-level routing errors.
//!
//! Path search never fails; these only report wires that cannot be
//! resolved to endpoints in the first place.

use std::error::Error;
use std::fmt;

/// Why a wire could not be routed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteError {
    /// A wire references a node id that is not in the schematic.
    UnknownNode {
        /// The missing id.
        node_id: String,
    },
    /// The node has neither its own pins nor library pins to connect to.
    NoPins {
        /// The pinless node.
        node_id: String,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode { node_id } => write!(f, "unknown node '{node_id}'"),
            Self::NoPins { node_id } => write!(f, "node '{node_id}' has no pins"),
        }
    }
}

impl Error for RouteError {}
