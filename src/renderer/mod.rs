//! Rendering seam
//!
//! The simulation hands a [`FrameSnapshot`] to a [`Renderer`] once per frame.
//! Presentation itself is left to the implementor; [`MeshRenderer`] turns
//! each snapshot into a triangle list ready for GPU upload.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::MeshRenderer;
pub use vertex::Vertex;

use glam::Vec2;

use crate::sim::{Rgba, SIDES};

/// One body as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

/// World-space geometry for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    /// Hexagon vertices in increasing-angle order
    pub hexagon: [Vec2; SIDES],
    pub bodies: Vec<BodyView>,
}

/// Consumes one snapshot per frame; side effects only
pub trait Renderer {
    fn render(&mut self, frame: &FrameSnapshot);
}
