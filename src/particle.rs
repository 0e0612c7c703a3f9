//! Particle kinematics.
//!
//! Each particle is a point elastically anchored to the spot where it
//! spawned. The pointer pushes it around inside an influence radius, a linear
//! spring pulls it home, and multiplicative damping keeps the motion bounded.
//! Opacity twinkles up on rare flares and eases back down to the particle's
//! baseline.
//!
//! A particle never touches a drawing surface. [`Particle::step`] mutates
//! kinematic state, [`Particle::sprite`] describes the desired visual result;
//! the GPU adapter consumes the sprites.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::pointer::PointerState;

/// Fixed time-step factor applied to the pointer force.
pub const POINTER_TIME_STEP: f32 = 0.033;

/// Per-tick probability that a particle flares.
pub const FLARE_CHANCE: f32 = 0.003;

/// Opacity boost applied by a flare, clamped so alpha never exceeds 1.0.
pub const FLARE_BOOST: f32 = 0.5;

/// Per-tick opacity decay while above the baseline.
pub const ALPHA_DECAY: f32 = 0.01;

/// Fraction of velocity retained each tick (drag).
pub const VELOCITY_RETENTION: f32 = 0.92;

/// Linear spring constant pulling a particle back to its origin.
pub const SPRING_STIFFNESS: f32 = 0.02;

/// One simulated point with position, velocity, and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current rendered location, mutated every tick.
    pub position: Vec2,
    /// Rest location the spring pulls toward. Fixed after creation.
    pub origin: Vec2,
    /// Current velocity; decays each tick.
    pub velocity: Vec2,
    /// Side length of the rendered square. Fixed after creation.
    pub size: f32,
    /// Baseline opacity the particle settles at.
    pub base_alpha: f32,
    /// Current opacity, in `[0, 1]`.
    pub alpha: f32,
    /// Response coefficient to the pointer force. Fixed after creation.
    pub density: f32,
}

impl Particle {
    /// Create a particle at rest. The spawn position becomes its origin.
    pub fn new(position: Vec2, size: f32, base_alpha: f32, density: f32) -> Self {
        Self {
            position,
            origin: position,
            velocity: Vec2::ZERO,
            size,
            base_alpha,
            alpha: base_alpha,
            density,
        }
    }

    /// Advance the particle by one tick.
    ///
    /// The flare decision is rolled by the caller so the step itself is a
    /// pure function of its inputs. Order matters: pointer force, flare,
    /// alpha decay, damping, spring, integration.
    pub fn step(&mut self, pointer: &PointerState, flare: bool) {
        if let Some(target) = pointer.position {
            let offset = target - self.position;
            let distance = offset.length();
            // distance == 0 leaves the force direction undefined; skip it
            if distance > 0.0 && distance < pointer.radius {
                let falloff = (pointer.radius - distance) / pointer.radius;
                self.velocity +=
                    offset / distance * falloff * self.density * POINTER_TIME_STEP;
            }
        }

        if flare {
            self.alpha = (self.alpha + FLARE_BOOST).min(1.0);
        }

        if self.alpha > self.base_alpha {
            // Ease back down, but never undershoot the baseline.
            self.alpha = (self.alpha - ALPHA_DECAY).max(self.base_alpha);
        } else if self.alpha < self.base_alpha {
            self.alpha = self.base_alpha;
        }

        self.velocity *= VELOCITY_RETENTION;
        self.velocity += (self.origin - self.position) * SPRING_STIFFNESS;
        self.position += self.velocity;
    }

    /// Desired visual state for the current tick.
    #[inline]
    pub fn sprite(&self) -> Sprite {
        Sprite {
            center: self.position,
            size: self.size,
            alpha: self.alpha,
        }
    }

    /// Distance from the particle's rest position.
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.position.distance(self.origin)
    }
}

/// A square to paint: the full per-particle output of a tick.
///
/// Laid out to be uploaded directly as a GPU instance (16 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Sprite {
    /// Center of the square in surface pixels.
    pub center: Vec2,
    /// Side length in surface pixels.
    pub size: f32,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}
