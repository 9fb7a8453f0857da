use std::{env, path::PathBuf};

pub const DEFAULT_MAX_WALK_DISTANCE: f64 = 500.0;
pub const DEFAULT_WALK_WEIGHT: f64 = 1.0;
pub const DEFAULT_TELEPORT_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Tunables for a single route query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathfindingConfig {
    /// Longest planar distance a single walk edge may cover.
    pub max_walk_distance: f64,
    /// Multiplier on walk-edge cost; raise it to discourage walking.
    pub walk_weight_multiplier: f64,
    /// Flat cost of every teleport edge.
    pub teleport_weight: f64,
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            max_walk_distance: DEFAULT_MAX_WALK_DISTANCE,
            walk_weight_multiplier: DEFAULT_WALK_WEIGHT,
            teleport_weight: DEFAULT_TELEPORT_WEIGHT,
        }
    }
}

impl PathfindingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("max_walk_distance", self.max_walk_distance),
            ("walk_weight_multiplier", self.walk_weight_multiplier),
            ("teleport_weight", self.teleport_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}

/// Partial configuration; unset fields fall back to the next layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub max_walk_distance: Option<f64>,
    pub walk_weight_multiplier: Option<f64>,
    pub teleport_weight: Option<f64>,
    pub landmarks: Option<PathBuf>,
    pub translocators: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    pub fn with_max_walk_distance(distance: f64) -> Self {
        Self { max_walk_distance: Some(distance), ..Self::default() }
    }

    pub fn from_env_defaults() -> Self {
        let max_walk_distance = env::var("NAV_MAX_WALK_DISTANCE").ok().and_then(|s| s.trim().parse::<f64>().ok());
        let walk_weight_multiplier = env::var("NAV_WALK_WEIGHT").ok().and_then(|s| s.trim().parse::<f64>().ok());
        let teleport_weight = env::var("NAV_TELEPORT_WEIGHT").ok().and_then(|s| s.trim().parse::<f64>().ok());
        let landmarks = env::var("NAV_LANDMARKS").ok().map(PathBuf::from);
        let translocators = env::var("NAV_TRANSLOCATORS").ok().map(PathBuf::from);
        let log_level = env::var("NAV_LOG_LEVEL").ok();
        Self { max_walk_distance, walk_weight_multiplier, teleport_weight, landmarks, translocators, log_level }
    }

    /// Fields set in `top` win over fields set in `self`.
    pub fn overlay(self, top: ConfigOverrides) -> Self {
        Self {
            max_walk_distance: top.max_walk_distance.or(self.max_walk_distance),
            walk_weight_multiplier: top.walk_weight_multiplier.or(self.walk_weight_multiplier),
            teleport_weight: top.teleport_weight.or(self.teleport_weight),
            landmarks: top.landmarks.or(self.landmarks),
            translocators: top.translocators.or(self.translocators),
            log_level: top.log_level.or(self.log_level),
        }
    }

    pub fn resolve(&self) -> PathfindingConfig {
        let d = PathfindingConfig::default();
        PathfindingConfig {
            max_walk_distance: self.max_walk_distance.unwrap_or(d.max_walk_distance),
            walk_weight_multiplier: self.walk_weight_multiplier.unwrap_or(d.walk_weight_multiplier),
            teleport_weight: self.teleport_weight.unwrap_or(d.teleport_weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_fills_unset_fields_with_defaults() {
        let cfg = ConfigOverrides::with_max_walk_distance(1200.0).resolve();
        assert_eq!(cfg.max_walk_distance, 1200.0);
        assert_eq!(cfg.walk_weight_multiplier, 1.0);
        assert_eq!(cfg.teleport_weight, 0.1);
        assert_eq!(ConfigOverrides::default().resolve(), PathfindingConfig::default());
    }

    #[test]
    fn overlay_prefers_top_layer() {
        let env = ConfigOverrides {
            max_walk_distance: Some(300.0),
            teleport_weight: Some(0.5),
            log_level: Some("debug".into()),
            ..ConfigOverrides::default()
        };
        let cli = ConfigOverrides { max_walk_distance: Some(800.0), ..ConfigOverrides::default() };
        let merged = env.overlay(cli);
        assert_eq!(merged.max_walk_distance, Some(800.0));
        assert_eq!(merged.teleport_weight, Some(0.5));
        assert_eq!(merged.log_level.as_deref(), Some("debug"));
        assert_eq!(merged.walk_weight_multiplier, None);
    }

    #[test]
    fn validate_rejects_negative_and_nan() {
        assert!(PathfindingConfig::default().validate().is_ok());
        let bad = PathfindingConfig { walk_weight_multiplier: -1.0, ..PathfindingConfig::default() };
        assert_eq!(
            bad.validate(),
            Err(ConfigError::OutOfRange { field: "walk_weight_multiplier", value: -1.0 })
        );
        let nan = PathfindingConfig { teleport_weight: f64::NAN, ..PathfindingConfig::default() };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_from_env_defaults_reads_values() {
        std::env::set_var("NAV_MAX_WALK_DISTANCE", "750");
        std::env::set_var("NAV_WALK_WEIGHT", " 2.5 ");
        std::env::set_var("NAV_TELEPORT_WEIGHT", "not-a-number");
        std::env::set_var("NAV_LANDMARKS", "/tmp/landmarks.yaml");
        std::env::set_var("NAV_LOG_LEVEL", "trace");

        let cfg = ConfigOverrides::from_env_defaults();
        assert_eq!(cfg.max_walk_distance, Some(750.0));
        assert_eq!(cfg.walk_weight_multiplier, Some(2.5));
        assert_eq!(cfg.teleport_weight, None);
        assert_eq!(cfg.landmarks.as_ref().unwrap().to_string_lossy(), "/tmp/landmarks.yaml");
        assert_eq!(cfg.log_level.as_deref(), Some("trace"));

        // cleanup
        std::env::remove_var("NAV_MAX_WALK_DISTANCE");
        std::env::remove_var("NAV_WALK_WEIGHT");
        std::env::remove_var("NAV_TELEPORT_WEIGHT");
        std::env::remove_var("NAV_LANDMARKS");
        std::env::remove_var("NAV_LOG_LEVEL");
    }
}
