//! Error types for routing configuration.
//!
//! Routing itself never fails (unreachable targets fall back to an elbow
//! route), so the only errors at this layer come from invalid constants.

use std::error::Error;
use std::fmt;

/// Errors detected by [`RouteConfig::validate()`](crate::RouteConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `grid_pitch` is NaN, infinite, zero, or negative.
    InvalidGridPitch {
        /// The rejected value.
        value: f64,
    },
    /// `max_expansions` is zero, so no search could ever run.
    ZeroExpansionBound,
    /// `escape_distance` does not fit the lattice coordinate type.
    EscapeDistanceTooLarge {
        /// The rejected value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridPitch { value } => {
                write!(f, "grid_pitch must be finite and positive, got {value}")
            }
            Self::ZeroExpansionBound => write!(f, "max_expansions must be at least 1"),
            Self::EscapeDistanceTooLarge { value, max } => {
                write!(f, "escape_distance {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for ConfigError {}
