//! Routing constants.

use crate::error::ConfigError;

/// Tunable constants for one routing call.
///
/// Defaults reproduce the editor's reference behavior: a 10-unit lattice,
/// two-cell escape runs, a turn costing as much as ten straight steps, and
/// a 3000-expansion search bound.
///
/// ```
/// use schemroute_core::RouteConfig;
///
/// let config = RouteConfig::default();
/// assert_eq!(config.grid_pitch, 10.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RouteConfig {
    /// Spacing of the routing lattice in canvas units. Default: 10.0.
    pub grid_pitch: f64,
    /// Forced straight run leaving a pin, in grid cells. Default: 2.
    pub escape_distance: u32,
    /// Extra cost charged for every change of heading. Default: 10.
    pub turn_penalty: u32,
    /// Frontier pops allowed before giving up and falling back to an
    /// elbow route. Default: 3000.
    pub max_expansions: u32,
}

impl RouteConfig {
    /// Largest escape distance accepted by [`validate`](Self::validate).
    pub const MAX_ESCAPE_DISTANCE: u32 = 1 << 16;

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.grid_pitch.is_finite() || self.grid_pitch <= 0.0 {
            return Err(ConfigError::InvalidGridPitch {
                value: self.grid_pitch,
            });
        }
        if self.max_expansions == 0 {
            return Err(ConfigError::ZeroExpansionBound);
        }
        if self.escape_distance > Self::MAX_ESCAPE_DISTANCE {
            return Err(ConfigError::EscapeDistanceTooLarge {
                value: self.escape_distance,
                max: Self::MAX_ESCAPE_DISTANCE,
            });
        }
        Ok(())
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            grid_pitch: 10.0,
            escape_distance: 2,
            turn_penalty: 10,
            max_expansions: 3000,
        }
    }
}
