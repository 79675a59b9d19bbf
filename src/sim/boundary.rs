//! Rotating hexagonal boundary
//!
//! The hexagon never changes size or position, only orientation. Edges are
//! derived from the current angle on demand rather than stored.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::vector::{closest_point_on_segment, distance, rotate, try_normalize};

/// Number of sides of the boundary polygon
pub const SIDES: usize = 6;

/// A boundary edge in world space, `start` to `end` in increasing-angle order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Vec2,
    pub end: Vec2,
}

impl Edge {
    /// Closest point on this edge to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        closest_point_on_segment(p, self.start, self.end)
    }

    /// Distance from `p` to this edge
    #[inline]
    pub fn distance_to(&self, p: Vec2) -> f32 {
        distance(p, self.closest_point(p))
    }

    /// Unit perpendicular `(start.y - end.y, end.x - start.x)`
    ///
    /// With vertices generated in increasing-angle order this points toward
    /// the hexagon interior, which is the direction a body is pushed back in.
    /// `None` for a zero-length edge.
    #[inline]
    pub fn normal(&self) -> Option<Vec2> {
        try_normalize(Vec2::new(self.start.y - self.end.y, self.end.x - self.start.x))
    }
}

/// The hexagon confining all bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boundary {
    pub center: Vec2,
    pub circumradius: f32,
    /// Orientation in radians; grows without wraparound
    pub rotation: f32,
}

impl Boundary {
    pub fn new(center: Vec2, circumradius: f32) -> Self {
        Self {
            center,
            circumradius,
            rotation: 0.0,
        }
    }

    /// Rotate by a fixed increment (one frame's worth)
    #[inline]
    pub fn advance(&mut self, increment: f32) {
        self.rotation += increment;
    }

    /// Angle of vertex `i` from the center
    #[inline]
    pub fn vertex_angle(&self, i: usize) -> f32 {
        TAU * i as f32 / SIDES as f32 + self.rotation
    }

    /// World-space vertices in increasing-angle order
    pub fn vertices(&self) -> [Vec2; SIDES] {
        let spoke = Vec2::new(self.circumradius, 0.0);
        std::array::from_fn(|i| self.center + rotate(spoke, self.vertex_angle(i)))
    }

    /// World-space edges, edge `i` joining vertex `i` to vertex `i + 1`
    pub fn edges(&self) -> [Edge; SIDES] {
        let v = self.vertices();
        std::array::from_fn(|i| Edge {
            start: v[i],
            end: v[(i + 1) % SIDES],
        })
    }

    /// Distance from center to the middle of each edge
    #[inline]
    pub fn inradius(&self) -> f32 {
        self.circumradius * (TAU / (2.0 * SIDES as f32)).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian_to_polar;
    use std::f32::consts::PI;

    fn angle_diff(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(TAU);
        d.min(TAU - d)
    }

    #[test]
    fn test_vertex_angles_follow_rotation() {
        let mut boundary = Boundary::new(Vec2::new(400.0, 400.0), 300.0);
        for _ in 0..250 {
            boundary.advance(0.03);
        }
        for (i, v) in boundary.vertices().iter().enumerate() {
            let (r, theta) = cartesian_to_polar(*v - boundary.center);
            assert!((r - 300.0).abs() < 1e-2);
            let expected = 2.0 * PI * i as f32 / 6.0 + boundary.rotation;
            assert!(angle_diff(theta, expected) < 1e-3, "vertex {i}");
        }
    }

    #[test]
    fn test_edges_are_closed_loop() {
        let boundary = Boundary::new(Vec2::ZERO, 100.0);
        let edges = boundary.edges();
        for i in 0..SIDES {
            assert_eq!(edges[i].end, edges[(i + 1) % SIDES].start);
            // Regular hexagon: side length equals circumradius
            assert!(((edges[i].end - edges[i].start).length() - 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_normals_point_inward() {
        let mut boundary = Boundary::new(Vec2::new(50.0, -20.0), 100.0);
        boundary.advance(1.234);
        for edge in boundary.edges() {
            let n = edge.normal().unwrap();
            let mid = (edge.start + edge.end) * 0.5;
            assert!(n.dot(boundary.center - mid) > 0.0);
            assert!((n.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_inradius_matches_edge_distance() {
        let boundary = Boundary::new(Vec2::ZERO, 100.0);
        for edge in boundary.edges() {
            assert!((edge.distance_to(Vec2::ZERO) - boundary.inradius()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_degenerate_edge_has_no_normal() {
        let edge = Edge {
            start: Vec2::ONE,
            end: Vec2::ONE,
        };
        assert!(edge.normal().is_none());
    }
}
