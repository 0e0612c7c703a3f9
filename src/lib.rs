//! # Starfield
//!
//! Pointer-reactive starfield backdrop with a simple, declarative API.
//!
//! A field of twinkling particles is scattered over the window, each one
//! elastically anchored to its spawn position. The pointer stirs them inside
//! an influence radius; a spring pulls them home. On touch devices and small
//! viewports the field renders a single static frame instead of animating.
//!
//! ## Quick Start
//!
//! ```ignore
//! use starfield::prelude::*;
//!
//! fn main() -> Result<(), RunError> {
//!     Starfield::new()
//!         .with_particle_count(2000)
//!         .with_pointer_radius(150.0)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! Each [`Particle`] carries a position, a fixed rest origin, a velocity, a
//! size, and an opacity that flares up at random and eases back to its
//! baseline. Its per-tick step is a pure function; rendering consumes the
//! [`Sprite`] it describes.
//!
//! ### Modes
//!
//! The field runs [`Mode::Animated`] (continuous physics, pointer
//! interaction) on pointer-driven desktops, and [`Mode::Static`] (one frame,
//! no physics) on touch devices or viewports narrower than
//! [`SMALL_SCREEN_BREAKPOINT`]. A window resize recreates the particle set
//! and re-derives the mode.
//!
//! ### Spawners
//!
//! The default spawner scatters particles uniformly with the standard size,
//! opacity, and density ranges. Custom layouts plug in through
//! [`Starfield::with_spawner`]:
//!
//! ```ignore
//! Starfield::new()
//!     .with_spawner(|ctx| {
//!         let center = Vec2::new(ctx.width / 2.0, ctx.height / 2.0);
//!         Particle::new(
//!             center + ctx.random_in_circle(300.0),
//!             ctx.random_range(0.5, 2.0),
//!             ctx.random_range(0.3, 0.8),
//!             ctx.random_range(10.0, 30.0),
//!         )
//!     })
//!     .run()
//! ```
//!
//! ## Determinism
//!
//! [`ParticleField`] has no rendering dependencies and can be stepped by hand.
//! Seed it for reproducible runs:
//!
//! ```ignore
//! let mut field = ParticleField::new(FieldConfig::new().with_seed(42));
//! field.resize(1280.0, 720.0);
//! while field.tick() == Tick::Scheduled {
//!     // inspect field.particles() ...
//! }
//! ```

pub mod error;
pub mod field;
mod gpu;
pub mod particle;
pub mod pointer;
mod simulation;
pub mod spawn;
pub mod time;
pub mod visuals;

pub use error::{GpuError, RunError};
pub use field::{
    FieldConfig, Mode, ParticleField, Spawner, Tick, DEFAULT_PARTICLE_COUNT,
    SMALL_SCREEN_BREAKPOINT,
};
pub use glam::{Vec2, Vec3};
pub use particle::{Particle, Sprite};
pub use pointer::{PointerState, DEFAULT_POINTER_RADIUS};
pub use simulation::Starfield;
pub use spawn::SpawnContext;
pub use visuals::{BlendMode, VisualConfig};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use starfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::RunError;
    pub use crate::field::{FieldConfig, Mode, ParticleField, Tick};
    pub use crate::particle::{Particle, Sprite};
    pub use crate::pointer::PointerState;
    pub use crate::simulation::Starfield;
    pub use crate::spawn::SpawnContext;
    pub use crate::time::FrameClock;
    pub use crate::visuals::{BlendMode, VisualConfig};
    pub use crate::{Vec2, Vec3};
}
