//! Simulated circular bodies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// RGBA display color
pub type Rgba = [f32; 4];

/// A circular body with explicit-Euler kinematics
///
/// Radius and mass are fixed at creation and always positive, including for
/// bodies read back from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BodyRepr")]
pub struct Body {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Per-frame force accumulator, cleared after each integration step
    #[serde(skip)]
    pub acc: Vec2,
    radius: f32,
    mass: f32,
    pub color: Rgba,
}

impl Body {
    /// Create a body; mass is `radius * mass_density`
    ///
    /// Returns `None` unless both radius and the resulting mass are positive
    /// and finite.
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32, mass_density: f32, color: Rgba) -> Option<Self> {
        let mass = radius * mass_density;
        let valid = |x: f32| x.is_finite() && x > 0.0;
        if !valid(radius) || !valid(mass) {
            return None;
        }
        Some(Self {
            id,
            pos,
            vel,
            acc: Vec2::ZERO,
            radius,
            mass,
            color,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn inv_mass(&self) -> f32 {
        1.0 / self.mass
    }

    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }

    /// Accumulate a force for this frame (a = F / m)
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force / self.mass;
    }

    /// One explicit Euler step: gravity, damping, move, clear forces
    ///
    /// `gravity` is an acceleration; it goes through `apply_force` as a
    /// weight so other forces can be accumulated alongside it.
    pub fn integrate(&mut self, gravity: Vec2, friction: f32) {
        self.apply_force(gravity * self.mass);
        self.vel += self.acc;
        self.vel *= friction;
        self.pos += self.vel;
        self.acc = Vec2::ZERO;
    }
}

/// Serialized form of [`Body`], checked before it becomes one
#[derive(Deserialize)]
struct BodyRepr {
    id: u32,
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    mass: f32,
    color: Rgba,
}

impl TryFrom<BodyRepr> for Body {
    type Error = Error;

    fn try_from(repr: BodyRepr) -> Result<Self, Error> {
        let valid = |x: f32| x.is_finite() && x > 0.0;
        if !valid(repr.radius) || !valid(repr.mass) {
            return Err(Error::InvalidParam(format!(
                "body {}: radius {} and mass {} must be positive",
                repr.id, repr.radius, repr.mass
            )));
        }
        Ok(Self {
            id: repr.id,
            pos: repr.pos,
            vel: repr.vel,
            acc: Vec2::ZERO,
            radius: repr.radius,
            mass: repr.mass,
            color: repr.color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = [1.0; 4];

    fn body_at(pos: Vec2, vel: Vec2) -> Body {
        Body::new(0, pos, vel, 10.0, 0.1, WHITE).unwrap()
    }

    #[test]
    fn test_mass_from_radius() {
        let body = body_at(Vec2::ZERO, Vec2::ZERO);
        assert!((body.mass() - 1.0).abs() < 1e-6);
        assert!(body.radius() > 0.0);
    }

    #[test]
    fn test_rejects_non_positive_size() {
        assert!(Body::new(0, Vec2::ZERO, Vec2::ZERO, 0.0, 0.1, WHITE).is_none());
        assert!(Body::new(0, Vec2::ZERO, Vec2::ZERO, -5.0, 0.1, WHITE).is_none());
        assert!(Body::new(0, Vec2::ZERO, Vec2::ZERO, 5.0, 0.0, WHITE).is_none());
        assert!(Body::new(0, Vec2::ZERO, Vec2::ZERO, f32::NAN, 0.1, WHITE).is_none());
    }

    #[test]
    fn test_integrate_order() {
        let mut body = body_at(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        body.integrate(Vec2::new(0.0, 0.2), 0.5);
        // v = (1, 0.2) * 0.5, p += v
        assert!((body.vel - Vec2::new(0.5, 0.1)).length() < 1e-6);
        assert!((body.pos - Vec2::new(0.5, 0.1)).length() < 1e-6);
        assert_eq!(body.acc, Vec2::ZERO);
    }

    #[test]
    fn test_gravity_independent_of_mass() {
        let mut light = Body::new(0, Vec2::ZERO, Vec2::ZERO, 5.0, 0.1, WHITE).unwrap();
        let mut heavy = Body::new(1, Vec2::ZERO, Vec2::ZERO, 50.0, 0.1, WHITE).unwrap();
        light.integrate(Vec2::new(0.0, 0.2), 1.0);
        heavy.integrate(Vec2::new(0.0, 0.2), 1.0);
        assert!((light.vel - heavy.vel).length() < 1e-6);
    }

    #[test]
    fn test_forces_do_not_persist() {
        let mut body = body_at(Vec2::ZERO, Vec2::ZERO);
        body.apply_force(Vec2::new(3.0, 0.0));
        body.integrate(Vec2::ZERO, 1.0);
        assert!((body.vel.x - 3.0).abs() < 1e-6);
        body.integrate(Vec2::ZERO, 1.0);
        assert!((body.vel.x - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_json_round_trip() {
        let body = Body::new(4, Vec2::new(1.0, 2.0), Vec2::new(-0.5, 0.25), 12.0, 0.1, WHITE).unwrap();
        let json = serde_json::to_string(&body).unwrap();
        let back: Body = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 4);
        assert_eq!(back.pos, body.pos);
        assert_eq!(back.vel, body.vel);
        assert_eq!(back.radius(), body.radius());
        assert_eq!(back.mass(), body.mass());
    }

    #[test]
    fn test_json_rejects_non_positive_size() {
        let json = |radius: f32, mass: f32| {
            format!(
                r#"{{"id":0,"pos":[0.0,0.0],"vel":[0.0,0.0],"radius":{radius},"mass":{mass},"color":[1.0,1.0,1.0,1.0]}}"#
            )
        };
        assert!(serde_json::from_str::<Body>(&json(10.0, 1.0)).is_ok());
        assert!(serde_json::from_str::<Body>(&json(10.0, 0.0)).is_err());
        assert!(serde_json::from_str::<Body>(&json(0.0, 1.0)).is_err());
        assert!(serde_json::from_str::<Body>(&json(-5.0, 1.0)).is_err());
        assert!(serde_json::from_str::<Body>(&json(10.0, -1.0)).is_err());
    }
}
