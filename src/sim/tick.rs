//! Per-frame simulation step
//!
//! One call advances the world by exactly one frame. The order is fixed:
//! rotate the boundary, then per body integrate and bounce off the walls,
//! then resolve body pairs.

use super::collision::{resolve_all_pairs, resolve_body_walls};
use super::state::World;

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub wall_contacts: u32,
    pub pair_contacts: u32,
}

/// Advance the world by one frame
pub fn tick(world: &mut World) -> TickStats {
    let cfg = &world.config;
    let mut stats = TickStats::default();

    world.boundary.advance(cfg.rotation_speed);
    let edges = world.boundary.edges();
    let gravity = world.gravity();

    // Walls must see this frame's integrated position
    for body in &mut world.bodies {
        body.integrate(gravity, cfg.friction);
        stats.wall_contacts += resolve_body_walls(body, &edges, cfg.restitution, cfg.wall_correction);
    }

    // Pairs must see post-wall positions
    stats.pair_contacts = resolve_all_pairs(&mut world.bodies, cfg.restitution);

    world.frame += 1;
    stats
}
