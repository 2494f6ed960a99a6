//! Engine configuration.

use schemroute_core::{ConfigError, RouteConfig};

/// Configuration for a [`WireRouter`](crate::WireRouter).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EngineConfig {
    /// Per-wire routing constants.
    pub route: RouteConfig,
    /// Number of batch routing threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
    /// Swap footprint width and height for components rotated by an odd
    /// number of quarter turns. Default: `false`, which keeps every body in
    /// its unrotated orientation.
    pub rotated_footprints: bool,
}

impl EngineConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.route.validate()
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = EngineConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(!cfg.rotated_footprints);
    }

    #[test]
    fn invalid_route_config_is_rejected() {
        let cfg = EngineConfig {
            route: RouteConfig {
                grid_pitch: f64::NAN,
                ..Default::default()
            },
            ..Default::default()
        };
        match cfg.validate() {
            Err(ConfigError::InvalidGridPitch { .. }) => {}
            other => panic!("expected InvalidGridPitch, got {other:?}"),
        }
    }

    #[test]
    fn resolved_worker_count_clamps_zero() {
        let cfg = EngineConfig {
            worker_count: Some(0),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_worker_count(), 1);
    }

    #[test]
    fn resolved_worker_count_clamps_large() {
        let cfg = EngineConfig {
            worker_count: Some(500),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_worker_count(), 64);
    }

    #[test]
    fn resolved_worker_count_auto() {
        let count = EngineConfig::default().resolved_worker_count();
        assert!((1..=16).contains(&count), "auto count {count} out of [1,16]");
    }
}
