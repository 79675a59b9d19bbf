//! Hex Bounce - circular bodies bouncing inside a rotating hexagon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vector math, boundary, bodies, collisions, frame tick)
//! - `renderer`: Renderer seam and CPU tessellation of each frame
//! - `driver`: Frame driver tying the simulation to a renderer
//! - `config`: Startup configuration
//! - `error`: Crate error type

pub mod config;
pub mod driver;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::SimConfig;
pub use driver::FrameDriver;
pub use error::{Error, Result};

use glam::Vec2;

/// Default simulation constants
///
/// Velocities and accelerations are per frame, tuned for a 60 Hz frame clock.
pub mod consts {
    /// Nominal frame rate the per-frame constants are tuned for
    pub const NOMINAL_FRAME_RATE: f32 = 60.0;

    /// Number of bodies spawned at startup
    pub const BODY_COUNT: usize = 10;

    /// Canvas dimensions (the hexagon is centered on the canvas)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 800.0;

    /// Distance from hexagon center to each vertex
    pub const HEX_CIRCUMRADIUS: f32 = 300.0;
    /// Hexagon rotation per frame (radians)
    pub const ROTATION_SPEED: f32 = 0.01;

    /// Downward acceleration (pixels/frame², +y is down)
    pub const GRAVITY: f32 = 0.2;
    /// Isotropic velocity damping applied every frame
    pub const FRICTION: f32 = 0.99;
    /// Fraction of velocity kept after a collision
    pub const RESTITUTION: f32 = 0.8;
    /// Mass per unit of radius
    pub const MASS_DENSITY: f32 = 0.1;
    /// Wall push-out overshoot (5% margin against re-penetration)
    pub const WALL_CORRECTION: f32 = 1.05;

    /// Body radius range at spawn
    pub const MIN_BODY_RADIUS: f32 = 10.0;
    pub const MAX_BODY_RADIUS: f32 = 20.0;
    /// Bodies spawn inside this disc around the hexagon center
    pub const SPAWN_RADIUS: f32 = 100.0;
    /// Max initial speed per axis (pixels/frame)
    pub const MAX_SPAWN_SPEED: f32 = 2.0;

    /// Default RNG seed
    pub const DEFAULT_SEED: u64 = 42;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
