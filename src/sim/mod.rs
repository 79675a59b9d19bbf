//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only (at spawn)
//! - Stable iteration order (population order)
//! - No rendering or platform dependencies

pub mod body;
pub mod boundary;
pub mod collision;
pub mod state;
pub mod tick;
pub mod vector;

pub use body::{Body, Rgba};
pub use boundary::{Boundary, Edge, SIDES};
pub use collision::{
    WallContact, WallResolution, closing_speed, resolve_all_pairs, resolve_body_walls, resolve_pair,
    resolve_walls, wall_contact,
};
pub use state::{PALETTE, World};
pub use tick::{TickStats, tick};
