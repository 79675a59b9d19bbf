//! CPU tessellation of a frame into a triangle list

use super::shapes;
use super::vertex::{Vertex, colors};
use super::{FrameSnapshot, Renderer};

/// Circle segments per body
pub const BODY_SEGMENTS: u32 = 24;
/// Hexagon outline thickness (pixels)
pub const OUTLINE_WIDTH: f32 = 3.0;

/// Rebuilds a vertex buffer for every frame it is given
#[derive(Debug, Default)]
pub struct MeshRenderer {
    vertices: Vec<Vertex>,
    frames_rendered: u64,
    last_frame: Option<u64>,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangle list for the last rendered frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes of the vertex buffer, ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Simulation frame number of the last snapshot rendered
    pub fn last_frame(&self) -> Option<u64> {
        self.last_frame
    }
}

impl Renderer for MeshRenderer {
    fn render(&mut self, frame: &FrameSnapshot) {
        self.vertices.clear();
        self.vertices
            .extend(shapes::outline(&frame.hexagon, OUTLINE_WIDTH, colors::BOUNDARY));
        for body in &frame.bodies {
            self.vertices
                .extend(shapes::circle(body.center, body.radius, body.color, BODY_SEGMENTS));
        }
        self.frames_rendered += 1;
        self.last_frame = Some(frame.frame);
    }
}
