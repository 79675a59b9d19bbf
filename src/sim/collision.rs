//! Collision detection and response
//!
//! Two kinds of contact: a body against a boundary edge, and a body against
//! another body. Both are resolved immediately and sequentially; there is no
//! simultaneous solve.

use glam::Vec2;

use super::body::Body;
use super::boundary::Edge;
use super::vector::{reflect, try_normalize};

/// A body overlapping a boundary edge
#[derive(Debug, Clone, Copy)]
pub struct WallContact {
    /// Closest point on the edge to the body center
    pub point: Vec2,
    /// Unit edge normal, pointing into the hexagon
    pub normal: Vec2,
    /// How far the body reaches past the edge
    pub penetration: f32,
}

/// Check a circle against a single edge
///
/// `None` when the circle does not reach the edge, or when the edge is
/// degenerate and has no normal.
pub fn wall_contact(pos: Vec2, radius: f32, edge: &Edge) -> Option<WallContact> {
    let point = edge.closest_point(pos);
    let distance = (pos - point).length();
    if distance >= radius {
        return None;
    }
    let normal = edge.normal()?;
    Some(WallContact {
        point,
        normal,
        penetration: radius - distance,
    })
}

/// Position and velocity after boundary resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallResolution {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Number of edges that were hit
    pub contacts: u32,
}

/// Bounce a circle off every edge it overlaps
///
/// For each hit: reflect velocity across the edge normal, scale the whole
/// velocity by `restitution`, then push the center out along the normal by
/// `penetration * correction`. Edges are processed in order with no early
/// exit, each seeing the position left by the previous one.
pub fn resolve_walls(
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    edges: &[Edge],
    restitution: f32,
    correction: f32,
) -> WallResolution {
    let mut out = WallResolution {
        pos,
        vel,
        contacts: 0,
    };
    for edge in edges {
        if let Some(hit) = wall_contact(out.pos, radius, edge) {
            log::trace!(
                "wall hit at ({:.1}, {:.1}), depth {:.3}",
                hit.point.x,
                hit.point.y,
                hit.penetration
            );
            out.vel = reflect(out.vel, hit.normal) * restitution;
            out.pos += hit.normal * (hit.penetration * correction);
            out.contacts += 1;
        }
    }
    out
}

/// Apply [`resolve_walls`] to a body in place; returns the contact count
pub fn resolve_body_walls(body: &mut Body, edges: &[Edge], restitution: f32, correction: f32) -> u32 {
    let res = resolve_walls(body.pos, body.vel, body.radius(), edges, restitution, correction);
    body.pos = res.pos;
    body.vel = res.vel;
    res.contacts
}

/// Speed at which `a` and `b` approach each other along `normal` (a → b)
///
/// Positive when approaching, negative when separating.
#[inline]
pub fn closing_speed(a: &Body, b: &Body, normal: Vec2) -> f32 {
    (a.vel - b.vel).dot(normal)
}

/// Resolve an overlapping, approaching pair with an impulse along the
/// center line, then separate them so they just touch
///
/// Returns `true` if anything changed. Pairs that are apart, separating,
/// sliding tangentially or exactly coincident are left untouched.
pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f32) -> bool {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let touch = a.radius() + b.radius();
    if distance >= touch {
        return false;
    }
    let Some(normal) = try_normalize(delta) else {
        return false;
    };

    let closing = closing_speed(a, b, normal);
    if closing <= 0.0 {
        return false;
    }

    let impulse = (1.0 + restitution) * closing / (a.inv_mass() + b.inv_mass());
    a.vel -= normal * (impulse * a.inv_mass());
    b.vel += normal * (impulse * b.inv_mass());

    let half_overlap = (touch - distance) * 0.5;
    a.pos -= normal * half_overlap;
    b.pos += normal * half_overlap;

    log::trace!(
        "pair {}-{}: closing {:.3}, impulse {:.3}",
        a.id,
        b.id,
        closing,
        impulse
    );
    true
}

/// Resolve every unordered pair once, in population order
///
/// Returns the number of pairs resolved.
pub fn resolve_all_pairs(bodies: &mut [Body], restitution: f32) -> u32 {
    let mut resolved = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b, restitution) {
                resolved += 1;
            }
        }
    }
    resolved
}
