//! 2D vector helpers on top of `glam::Vec2`
//!
//! glam already covers add/sub/scale/dot/length. What lives here is the
//! guarded normalisation the collision code relies on, plus rotation and
//! segment projection.

use glam::Vec2;

/// Below this squared length a vector is treated as zero
pub const DEGENERATE_LENGTH_SQ: f32 = 1e-12;

/// Unit vector in the direction of `v`, or `None` when `v` is (near) zero
///
/// Callers skip whatever depended on the direction instead of producing NaN.
#[inline]
pub fn try_normalize(v: Vec2) -> Option<Vec2> {
    let len_sq = v.length_squared();
    if len_sq <= DEGENERATE_LENGTH_SQ || !len_sq.is_finite() {
        return None;
    }
    Some(v / len_sq.sqrt())
}

/// Rotate `v` counter-clockwise (in +y-up terms) by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Closest point to `p` on the finite segment `start..end`
///
/// Projects onto the segment direction and clamps the parameter to `[0, 1]`.
/// A zero-length segment collapses to `start`.
pub fn closest_point_on_segment(p: Vec2, start: Vec2, end: Vec2) -> Vec2 {
    let seg = end - start;
    let len_sq = seg.length_squared();
    if len_sq <= DEGENERATE_LENGTH_SQ {
        return start;
    }
    let t = ((p - start).dot(seg) / len_sq).clamp(0.0, 1.0);
    start + seg * t
}

/// Reflect velocity off a surface with the given unit normal
#[inline]
pub fn reflect(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}
