//! Frame driver
//!
//! Owns the world and the renderer. Each call to [`FrameDriver::step`] runs
//! one simulation tick to completion and hands the result to the renderer.
//! The caller supplies the clock.

use crate::config::SimConfig;
use crate::error::Result;
use crate::renderer::Renderer;
use crate::sim::{TickStats, World, tick};

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;
/// Frames between periodic debug reports
const REPORT_INTERVAL: u64 = 600;

pub struct FrameDriver<R: Renderer> {
    world: World,
    renderer: R,
    // FPS tracking
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl<R: Renderer> FrameDriver<R> {
    /// Spawn a world from `config` and render its initial state
    pub fn new(config: SimConfig, renderer: R) -> Result<Self> {
        let world = World::new(config)?;
        Ok(Self::with_world(world, renderer))
    }

    pub fn with_world(world: World, mut renderer: R) -> Self {
        renderer.render(&world.snapshot());
        Self {
            world,
            renderer,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Run one frame; `time` is the frame clock in seconds
    pub fn step(&mut self, time: f64) -> TickStats {
        let stats = tick(&mut self.world);
        self.renderer.render(&self.world.snapshot());

        // Track frame times for FPS
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        // The ring spans FPS_WINDOW - 1 frame intervals
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 / elapsed).round() as u32;
            }
        }

        if self.world.frame % REPORT_INTERVAL == 0 {
            log::debug!(
                "frame {}: {} fps, kinetic energy {:.2}, wall hits {}, pair hits {}",
                self.world.frame,
                self.fps,
                self.world.kinetic_energy(),
                stats.wall_contacts,
                stats.pair_contacts
            );
        }
        stats
    }

    /// Run `frames` frames on a synthetic clock at `frame_rate`
    pub fn run_for(&mut self, frames: u64, frame_rate: f64) {
        let start = self.world.frame;
        for n in 1..=frames {
            self.step((start + n) as f64 / frame_rate);
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Frames per second over the last window (0 until the window fills)
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
