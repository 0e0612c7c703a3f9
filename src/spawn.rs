//! Spawn context for particle initialization.
//!
//! Provides helper methods to reduce boilerplate when spawning particles.
//!
//! The default spawner scatters particles uniformly over the surface with
//! randomized size, baseline opacity, and density. Custom spawners get the
//! same context:
//!
//! ```ignore
//! Starfield::new()
//!     .with_spawner(|ctx| {
//!         let center = Vec2::new(ctx.width / 2.0, ctx.height / 2.0);
//!         Particle::new(
//!             center + ctx.random_in_circle(ctx.height / 3.0),
//!             ctx.random_range(0.5, 2.0),
//!             ctx.random_range(0.3, 0.8),
//!             ctx.random_range(10.0, 30.0),
//!         )
//!     })
//!     .run()
//! ```

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Context provided to spawner functions, one per spawned particle.
pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: u32,
    /// Total number of particles being spawned.
    pub count: u32,
    /// Surface width in pixels.
    pub width: f32,
    /// Surface height in pixels.
    pub height: f32,
    // Internal RNG - use helper methods instead of accessing directly.
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a spawn context seeded by the field's RNG, so a fixed field
    /// seed reproduces the exact same particle set.
    pub(crate) fn new(index: u32, count: u32, width: f32, height: f32, seed: u64) -> Self {
        Self {
            index,
            count,
            width,
            height,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Normalized progress through the spawn (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        self.index as f32 / self.count.max(1) as f32
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given half-open range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random point within the surface bounds, `[0, width) x [0, height)`.
    pub fn random_in_rect(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen::<f32>() * self.width,
            self.rng.gen::<f32>() * self.height,
        )
    }

    /// Random offset inside a disk of the given radius, centered at zero.
    ///
    /// Distribution is uniform over the disk area.
    pub fn random_in_circle(&mut self, radius: f32) -> Vec2 {
        let theta = self.rng.gen_range(0.0..TAU);
        let r = radius * self.rng.gen::<f32>().sqrt(); // sqrt for uniform disk
        Vec2::new(r * theta.cos(), r * theta.sin())
    }
}
