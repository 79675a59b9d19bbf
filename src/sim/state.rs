//! World state
//!
//! Everything that changes from frame to frame lives in [`World`]: the body
//! population and the boundary orientation. Nothing else mutates it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::body::{Body, Rgba};
use super::boundary::Boundary;
use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::polar_to_cartesian;
use crate::renderer::{BodyView, FrameSnapshot};

/// Body colors, assigned round-robin by id
pub const PALETTE: [Rgba; 10] = [
    [0.95, 0.33, 0.31, 1.0],
    [0.99, 0.61, 0.22, 1.0],
    [0.98, 0.85, 0.27, 1.0],
    [0.55, 0.83, 0.35, 1.0],
    [0.24, 0.75, 0.60, 1.0],
    [0.27, 0.72, 0.93, 1.0],
    [0.36, 0.48, 0.94, 1.0],
    [0.62, 0.42, 0.90, 1.0],
    [0.91, 0.40, 0.76, 1.0],
    [0.85, 0.85, 0.88, 1.0],
];

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "WorldRepr")]
pub struct World {
    pub config: SimConfig,
    pub boundary: Boundary,
    /// Fixed population, in spawn order
    pub bodies: Vec<Body>,
    /// Frames simulated so far
    pub frame: u64,
}

impl World {
    /// Validate the config and spawn `body_count` bodies from its seed
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let mut world = Self::empty(config);
        world.spawn_bodies()?;
        log::info!(
            "World created: {} bodies, seed {}, hexagon r={} at ({}, {})",
            world.bodies.len(),
            world.config.seed,
            world.boundary.circumradius,
            world.boundary.center.x,
            world.boundary.center.y
        );
        Ok(world)
    }

    /// Build a world around a hand-placed population
    pub fn with_bodies(config: SimConfig, bodies: Vec<Body>) -> Result<Self> {
        config.validate()?;
        let mut world = Self::empty(config);
        world.bodies = bodies;
        Ok(world)
    }

    fn empty(config: SimConfig) -> Self {
        let center = Vec2::new(config.canvas_width / 2.0, config.canvas_height / 2.0);
        Self {
            boundary: Boundary::new(center, config.hex_circumradius),
            bodies: Vec::with_capacity(config.body_count),
            frame: 0,
            config,
        }
    }

    fn spawn_bodies(&mut self) -> Result<()> {
        let mut rng = Pcg32::seed_from_u64(self.config.seed);
        let c = &self.config;
        for i in 0..c.body_count {
            let id = i as u32;
            let offset = polar_to_cartesian(
                c.spawn_radius * rng.random::<f32>().sqrt(),
                rng.random_range(0.0..TAU),
            );
            let vel = Vec2::new(
                rng.random_range(-1.0f32..=1.0) * c.max_spawn_speed,
                rng.random_range(-1.0f32..=1.0) * c.max_spawn_speed,
            );
            let radius = if c.max_body_radius > c.min_body_radius {
                rng.random_range(c.min_body_radius..c.max_body_radius)
            } else {
                c.min_body_radius
            };
            let color = PALETTE[i % PALETTE.len()];
            let body = Body::new(id, self.boundary.center + offset, vel, radius, c.mass_density, color)
                .ok_or_else(|| Error::InvalidParam(format!("body {id} has non-positive size")))?;
            self.bodies.push(body);
        }
        Ok(())
    }

    /// Gravity as a world-space acceleration (+y is down)
    #[inline]
    pub fn gravity(&self) -> Vec2 {
        Vec2::new(0.0, self.config.gravity)
    }

    /// Total momentum of the population
    pub fn momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Total kinetic energy of the population
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// World-space geometry for the renderer
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            hexagon: self.boundary.vertices(),
            bodies: self
                .bodies
                .iter()
                .map(|b| BodyView {
                    center: b.pos,
                    radius: b.radius(),
                    color: b.color,
                })
                .collect(),
        }
    }
}

/// Serialized form of [`World`]; the config is validated on the way in
#[derive(Deserialize)]
struct WorldRepr {
    config: SimConfig,
    boundary: Boundary,
    bodies: Vec<Body>,
    frame: u64,
}

impl TryFrom<WorldRepr> for World {
    type Error = Error;

    fn try_from(repr: WorldRepr) -> Result<Self> {
        repr.config.validate()?;
        if !repr.boundary.rotation.is_finite() {
            return Err(Error::InvalidParam(format!(
                "boundary rotation {} is not finite",
                repr.boundary.rotation
            )));
        }
        Ok(Self {
            config: repr.config,
            boundary: repr.boundary,
            bodies: repr.bodies,
            frame: repr.frame,
        })
    }
}
