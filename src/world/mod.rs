//! World state: the wall grid plus the shared ambient-light scalar.

pub mod camera;
pub mod grid;
pub mod texture;

pub use camera::{Camera, ScreenExtent};
pub use grid::{Grid, OUT_OF_BOUNDS};
pub use texture::Texture;

use rand::Rng;

/// Peak brightness of a lightning flash.
pub const FLASH_PEAK: f32 = 2.0;
/// Flash decay rate in brightness units per second.
const FLASH_DECAY: f32 = 10.0;
/// Mean seconds between flash triggers.
const FLASH_PERIOD: f32 = 5.0;

/// Grid plus the transient lightning brightness in `[0, FLASH_PEAK]`.
///
/// `light` is read by both the wall shading (offsets the darkening overlay)
/// and the sky flash; it is only ever written inside the per-tick update.
pub struct World {
    pub grid: Grid,
    pub light: f32,
}

impl World {
    pub fn new(grid: Grid) -> Self {
        Self { grid, light: 0.0 }
    }

    /// Linear flash decay, with a random re-trigger once fully dark.
    ///
    /// A flash fires when a uniform draw over one mean period lands inside
    /// this tick, so the trigger rate is framerate-independent.
    pub fn update_light(&mut self, seconds: f32, rng: &mut impl Rng) {
        if self.light > 0.0 {
            self.light = (self.light - FLASH_DECAY * seconds).max(0.0);
        } else if rng.gen_range(0.0..FLASH_PERIOD) < seconds {
            self.light = FLASH_PEAK;
        }
    }
}
