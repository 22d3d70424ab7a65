//! Simulation configuration.
//!
//! Everything except the four reaction parameters is fixed for the lifetime
//! of a [`Simulation`](crate::Simulation). Configurations round-trip through
//! JSON so the runner and viewer can start from a file.

use crate::error::ConfigError;
use crate::history::GraphConfig;
use crate::params::{ParamKind, ReactionParams};
use crate::particle::{ParticleScale, Species};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// World width in world units.
    pub width: f32,
    /// World height in world units.
    pub height: f32,
    /// Number of A particles after a reset.
    pub initial_a: usize,
    /// Number of B particles after a reset.
    pub initial_b: usize,
    /// Radius of an A or B particle. AB particles are 1.4× larger.
    pub particle_radius: f32,
    /// Mass of an A or B particle. AB particles are 2× heavier.
    pub particle_mass: f32,
    /// Initial velocity components are drawn from `[-initial_speed, initial_speed]`.
    pub initial_speed: f32,
    /// Raw graph samples kept per species.
    pub history_length: usize,
    /// Raw samples averaged into one graph point.
    pub graph_bucket: usize,
    /// Trailing moving-average window, in graph points.
    pub smoothing_window: usize,
    /// Simulation ticks per second of wall time.
    pub tick_rate: f32,
    /// Cap on ticks run for one rendered frame.
    pub max_ticks_per_frame: u32,
    /// Fixed RNG seed. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Starting slider positions.
    pub params: ReactionParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            initial_a: 40,
            initial_b: 40,
            particle_radius: 6.0,
            particle_mass: 1.0,
            initial_speed: 2.0,
            history_length: 1000,
            graph_bucket: 10,
            smoothing_window: 10,
            tick_rate: 60.0,
            max_ticks_per_frame: 5,
            seed: None,
            params: ReactionParams::default(),
        }
    }
}

impl SimConfig {
    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the simulation can run with these values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::invalid("width/height", "must be positive"));
        }
        if !(self.particle_radius > 0.0) {
            return Err(ConfigError::invalid("particle_radius", "must be positive"));
        }
        if !(self.particle_mass > 0.0) {
            return Err(ConfigError::invalid("particle_mass", "must be positive"));
        }
        let largest = 2.0 * self.scale().radius_of(Species::AB);
        if self.width < largest || self.height < largest {
            return Err(ConfigError::invalid(
                "width/height",
                format!("must be at least {largest} to fit an AB particle"),
            ));
        }
        if !(self.initial_speed >= 0.0) {
            return Err(ConfigError::invalid("initial_speed", "must not be negative"));
        }
        if self.history_length == 0 {
            return Err(ConfigError::invalid("history_length", "must be non-zero"));
        }
        if self.graph_bucket == 0 {
            return Err(ConfigError::invalid("graph_bucket", "must be non-zero"));
        }
        if self.smoothing_window == 0 {
            return Err(ConfigError::invalid("smoothing_window", "must be non-zero"));
        }
        if !(self.tick_rate > 0.0) {
            return Err(ConfigError::invalid("tick_rate", "must be positive"));
        }
        if self.max_ticks_per_frame == 0 {
            return Err(ConfigError::invalid("max_ticks_per_frame", "must be non-zero"));
        }
        for kind in ParamKind::ALL {
            let value = self.params.get(kind);
            let range = kind.range();
            if !range.contains(&value) {
                return Err(ConfigError::invalid(
                    "params",
                    format!(
                        "{} = {value} is outside {}..={}",
                        kind.label(),
                        range.start(),
                        range.end()
                    ),
                ));
            }
        }
        Ok(())
    }

    /// World size as a vector.
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Base particle size.
    pub fn scale(&self) -> ParticleScale {
        ParticleScale {
            radius: self.particle_radius,
            mass: self.particle_mass,
        }
    }

    /// Settings for the graph pipeline.
    pub fn graph(&self) -> GraphConfig {
        GraphConfig {
            history_length: self.history_length,
            bucket: self.graph_bucket,
            window: self.smoothing_window,
            theoretical_max: self.initial_a.max(self.initial_b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimConfig {
            initial_a: 12,
            seed: Some(99),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let parsed = SimConfig::from_json(&json).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed = SimConfig::from_json(r#"{ "initial_a": 10, "params": { "temperature": 500 } }"#)
            .expect("parse");
        assert_eq!(parsed.initial_a, 10);
        assert_eq!(parsed.initial_b, 40);
        assert_eq!(parsed.params.temperature, 500.0);
        assert_eq!(parsed.params.activation_energy, 50.0);
    }

    #[test]
    fn test_rejects_world_smaller_than_molecule() {
        let config = SimConfig {
            width: 10.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "width/height", .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_params() {
        let mut config = SimConfig::default();
        config.params.temperature = 2000.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "params", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_bucket() {
        let config = SimConfig {
            graph_bucket: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            SimConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_graph_config() {
        let config = SimConfig {
            initial_a: 30,
            initial_b: 50,
            ..Default::default()
        };
        let graph = config.graph();
        assert_eq!(graph.theoretical_max, 50);
        assert_eq!(graph.min_points(), 100);
    }
}
