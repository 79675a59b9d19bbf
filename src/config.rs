//! Startup configuration
//!
//! Every constant the simulation reads is collected in [`SimConfig`]. Defaults
//! mirror [`crate::consts`]; a JSON file may override any subset of keys.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Simulation configuration, fixed for the lifetime of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Population ===
    pub body_count: usize,
    pub min_body_radius: f32,
    pub max_body_radius: f32,
    /// Mass per unit radius (mass = radius * mass_density)
    pub mass_density: f32,
    pub spawn_radius: f32,
    pub max_spawn_speed: f32,

    // === World ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub hex_circumradius: f32,
    /// Radians added to the hexagon orientation every frame
    pub rotation_speed: f32,

    // === Physics ===
    pub gravity: f32,
    pub friction: f32,
    pub restitution: f32,
    pub wall_correction: f32,

    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            body_count: BODY_COUNT,
            min_body_radius: MIN_BODY_RADIUS,
            max_body_radius: MAX_BODY_RADIUS,
            mass_density: MASS_DENSITY,
            spawn_radius: SPAWN_RADIUS,
            max_spawn_speed: MAX_SPAWN_SPEED,

            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            hex_circumradius: HEX_CIRCUMRADIUS,
            rotation_speed: ROTATION_SPEED,

            gravity: GRAVITY,
            friction: FRICTION,
            restitution: RESTITUTION,
            wall_correction: WALL_CORRECTION,

            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Distance from hexagon center to the middle of each edge
    pub fn hex_inradius(&self) -> f32 {
        self.hex_circumradius * (std::f32::consts::PI / 6.0).cos()
    }

    /// Check ranges and cross-field consistency
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("min_body_radius", self.min_body_radius),
            ("max_body_radius", self.max_body_radius),
            ("mass_density", self.mass_density),
            ("spawn_radius", self.spawn_radius),
            ("max_spawn_speed", self.max_spawn_speed),
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("hex_circumradius", self.hex_circumradius),
            ("rotation_speed", self.rotation_speed),
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("restitution", self.restitution),
            ("wall_correction", self.wall_correction),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite")));
        }

        if self.body_count == 0 {
            return Err(invalid("body_count must be > 0"));
        }
        if self.min_body_radius <= 0.0 {
            return Err(invalid("min_body_radius must be > 0"));
        }
        if self.min_body_radius > self.max_body_radius {
            return Err(invalid("min_body_radius must not exceed max_body_radius"));
        }
        if self.mass_density <= 0.0 {
            return Err(invalid("mass_density must be > 0"));
        }
        if self.hex_circumradius <= 0.0 {
            return Err(invalid("hex_circumradius must be > 0"));
        }
        if self.spawn_radius < 0.0 || self.max_spawn_speed < 0.0 {
            return Err(invalid("spawn_radius and max_spawn_speed must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(invalid("friction must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(invalid("restitution must be in [0, 1]"));
        }
        if self.wall_correction < 1.0 {
            return Err(invalid("wall_correction must be >= 1"));
        }
        if self.spawn_radius + self.max_body_radius >= self.hex_inradius() {
            return Err(invalid(format!(
                "spawn disc ({} + body radius {}) must fit inside hexagon inradius {}",
                self.spawn_radius,
                self.max_body_radius,
                self.hex_inradius()
            )));
        }
        Ok(())
    }

    /// Rescale the per-frame constants for a frame clock other than 60 Hz
    ///
    /// Keeps trajectories in seconds roughly unchanged: accelerations scale
    /// with the square of the frame period, per-frame damping compounds.
    pub fn retimed(&self, frame_rate: f32) -> Result<Self> {
        if !(frame_rate.is_finite() && frame_rate > 0.0) {
            return Err(invalid(format!("frame_rate must be > 0, got {frame_rate}")));
        }
        let scale = NOMINAL_FRAME_RATE / frame_rate;
        Ok(Self {
            gravity: self.gravity * scale * scale,
            friction: self.friction.powf(scale),
            rotation_speed: self.rotation_speed * scale,
            max_spawn_speed: self.max_spawn_speed * scale,
            ..self.clone()
        })
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidParam(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.body_count, 10);
        assert!((config.mass_density - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimConfig::from_json(r#"{ "body_count": 3, "restitution": 1.0 }"#).unwrap();
        assert_eq!(config.body_count, 3);
        assert_eq!(config.restitution, 1.0);
        assert_eq!(config.friction, FRICTION);
        assert_eq!(config.hex_circumradius, HEX_CIRCUMRADIUS);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(SimConfig::from_json(r#"{ "restitution": 1.5 }"#).is_err());
        assert!(SimConfig::from_json(r#"{ "body_count": 0 }"#).is_err());
        assert!(SimConfig::from_json(r#"{ "min_body_radius": 0.0 }"#).is_err());
        assert!(SimConfig::from_json(r#"{ "min_body_radius": 30.0 }"#).is_err());
        assert!(SimConfig::from_json(r#"{ "mass_density": -1.0 }"#).is_err());
        assert!(SimConfig::from_json(r#"{ "friction": -0.1 }"#).is_err());
    }

    #[test]
    fn test_rejects_spawn_outside_hexagon() {
        let err = SimConfig::from_json(r#"{ "spawn_radius": 250.0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidParam(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SimConfig::from_json("{ body_count: ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = SimConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_retimed_is_identity_at_nominal_rate() {
        let config = SimConfig::default();
        let same = config.retimed(NOMINAL_FRAME_RATE).unwrap();
        assert!((same.gravity - config.gravity).abs() < 1e-6);
        assert!((same.friction - config.friction).abs() < 1e-6);
        assert!((same.rotation_speed - config.rotation_speed).abs() < 1e-6);
    }

    #[test]
    fn test_retimed_to_120hz() {
        let config = SimConfig::default();
        let fast = config.retimed(120.0).unwrap();
        assert!((fast.gravity - config.gravity / 4.0).abs() < 1e-6);
        assert!((fast.rotation_speed - config.rotation_speed / 2.0).abs() < 1e-6);
        // Two 120 Hz frames damp as much as one 60 Hz frame
        assert!((fast.friction * fast.friction - config.friction).abs() < 1e-5);
        assert_eq!(fast.restitution, config.restitution);
        assert!(config.retimed(0.0).is_err());
    }

    #[test]
    fn test_retimed_config_stays_valid() {
        let config = SimConfig::default();
        for rate in [30.0, 75.0, 144.0, 240.0] {
            let retimed = config.retimed(rate).unwrap();
            assert!(retimed.validate().is_ok(), "{rate} Hz");
            assert!(retimed.friction > 0.0 && retimed.friction <= 1.0);
        }
    }
}
