//! Hex Bounce entry point
//!
//! Loads the startup config and drives the simulation at a fixed rate until
//! the process is killed. Set `HEX_BOUNCE_CONFIG` to a JSON file to override
//! the built-in constants, and `HEX_BOUNCE_FPS` to run at a frame rate other
//! than 60 Hz (per-frame constants are rescaled to match).

use std::time::{Duration, Instant};

use hex_bounce::consts::NOMINAL_FRAME_RATE;
use hex_bounce::renderer::MeshRenderer;
use hex_bounce::{FrameDriver, SimConfig};

const CONFIG_ENV: &str = "HEX_BOUNCE_CONFIG";
const FPS_ENV: &str = "HEX_BOUNCE_FPS";

fn load_config() -> SimConfig {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load {path}: {e} - using defaults");
                SimConfig::default()
            }
        },
        Err(_) => {
            log::info!("Using default config");
            SimConfig::default()
        }
    }
}

/// Parse a frame rate override, falling back to the nominal rate
fn parse_frame_rate(value: Option<&str>) -> f32 {
    let Some(value) = value else {
        return NOMINAL_FRAME_RATE;
    };
    match value.trim().parse::<f32>() {
        Ok(rate) if rate.is_finite() && rate > 0.0 => rate,
        _ => {
            log::warn!("Ignoring {FPS_ENV}={value:?} - using {NOMINAL_FRAME_RATE} Hz");
            NOMINAL_FRAME_RATE
        }
    }
}

fn main() -> hex_bounce::Result<()> {
    env_logger::init();
    log::info!("Hex Bounce starting...");

    let frame_rate = parse_frame_rate(std::env::var(FPS_ENV).ok().as_deref());
    let mut config = load_config();
    if frame_rate != NOMINAL_FRAME_RATE {
        config = config.retimed(frame_rate)?;
        log::info!("Running at {frame_rate} Hz");
    }
    let mut driver = FrameDriver::new(config, MeshRenderer::new())?;

    let frame_period = Duration::from_secs_f32(1.0 / frame_rate);
    let start = Instant::now();
    let mut next_frame = start;

    log::info!("Hex Bounce running!");
    loop {
        driver.step(start.elapsed().as_secs_f64());

        next_frame += frame_period;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else {
            // Fell behind; don't try to catch up with a burst of frames
            next_frame = now;
        }
    }
}
