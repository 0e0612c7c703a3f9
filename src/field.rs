//! The particle field: collection, mode machine, and tick driver.
//!
//! [`ParticleField`] owns the particle set, the shared pointer state, and the
//! surface dimensions. It advances simulation time one [`tick`](ParticleField::tick)
//! at a time and hands the renderer a list of [`Sprite`]s per frame — it never
//! draws anything itself, which keeps every state transition single-steppable
//! in tests.
//!
//! # Modes
//!
//! - **Animated**: pointer interaction and per-frame physics. Every tick asks
//!   for another frame.
//! - **Static**: one frame is rendered after each configure/populate, then
//!   nothing is scheduled. Chosen for touch devices and small viewports.
//!
//! The field moves through `Uninitialized -> Configured -> {Animated-looping |
//! Static-rendered}`; a resize goes back to Configured, re-derives the mode,
//! and recreates the particle set wholesale.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::particle::{Particle, Sprite, FLARE_CHANCE};
use crate::pointer::{PointerState, DEFAULT_POINTER_RADIUS};
use crate::spawn::SpawnContext;

/// Default number of particles in the field.
pub const DEFAULT_PARTICLE_COUNT: u32 = 2000;

/// Viewport widths below this render a static backdrop, in pixels.
pub const SMALL_SCREEN_BREAKPOINT: f32 = 768.0;

/// Whether the field runs a continuous physics loop or renders a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Pointer interaction and per-frame motion.
    #[default]
    Animated,
    /// Render once, no physics. Touch devices and small viewports.
    Static,
}

impl Mode {
    /// Derive the mode from device and viewport heuristics.
    pub fn select(is_touch: bool, viewport_width: f32) -> Self {
        if is_touch || viewport_width < SMALL_SCREEN_BREAKPOINT {
            Mode::Static
        } else {
            Mode::Animated
        }
    }

    /// Whether per-frame physics runs in this mode.
    #[inline]
    pub fn is_animated(&self) -> bool {
        matches!(self, Mode::Animated)
    }
}

/// Result of one [`ParticleField::tick`]: whether the driver should ask the
/// host for another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Physics advanced; request the next frame.
    Scheduled,
    /// Static mode; render the current state once and stop.
    Halted,
}

/// Field configuration.
///
/// ```ignore
/// let config = FieldConfig::new()
///     .with_particle_count(500)
///     .with_pointer_radius(200.0)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Number of particles created by each populate.
    pub particle_count: u32,
    /// Pointer influence radius in pixels.
    pub pointer_radius: f32,
    /// Treat the host as a touch device (forces static mode).
    pub touch_device: bool,
    /// RNG seed; `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl FieldConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the pointer influence radius in pixels.
    pub fn with_pointer_radius(mut self, radius: f32) -> Self {
        self.pointer_radius = radius;
        self
    }

    /// Mark the host as a touch device.
    pub fn with_touch_device(mut self, touch: bool) -> Self {
        self.touch_device = touch;
        self
    }

    /// Seed the field RNG for reproducible spawns and flares.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            pointer_radius: DEFAULT_POINTER_RADIUS,
            touch_device: false,
            seed: None,
        }
    }
}

/// Particle spawner function.
/// Called with a [`SpawnContext`] for each particle.
pub type Spawner = Box<dyn Fn(&mut SpawnContext) -> Particle + Send + Sync>;

/// The aggregate driving the simulation: particles, pointer, surface size,
/// and mode.
pub struct ParticleField {
    particles: Vec<Particle>,
    canvas_size: (f32, f32),
    mode: Mode,
    pointer: PointerState,
    config: FieldConfig,
    spawner: Option<Spawner>,
    rng: SmallRng,
}

impl ParticleField {
    /// Create an unconfigured field. Call [`resize`](Self::resize) with the
    /// surface dimensions before the first frame.
    pub fn new(config: FieldConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42)
        });

        Self {
            particles: Vec::new(),
            canvas_size: (0.0, 0.0),
            mode: Mode::Static,
            pointer: PointerState::new(config.pointer_radius),
            config,
            spawner: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Replace the default spawner.
    pub fn set_spawner(&mut self, spawner: Spawner) {
        self.spawner = Some(spawner);
    }

    /// Record the surface size and re-derive the mode.
    ///
    /// Switching into static mode deactivates the pointer.
    pub fn configure(&mut self, width: f32, height: f32) {
        self.canvas_size = (width, height);
        self.mode = Mode::select(self.config.touch_device, width);
        if !self.mode.is_animated() {
            self.pointer.clear();
        }
    }

    /// Create the particle set from scratch, replacing any prior set.
    pub fn populate(&mut self) {
        let (width, height) = self.canvas_size;
        let count = self.config.particle_count;

        self.particles.clear();
        self.particles.reserve(count as usize);
        for index in 0..count {
            let mut ctx = SpawnContext::new(index, count, width, height, self.rng.gen());
            let particle = match &self.spawner {
                Some(spawner) => spawner(&mut ctx),
                None => default_spawn(&mut ctx),
            };
            self.particles.push(particle);
        }

        log::debug!(
            "populated {} particles over {}x{} ({:?})",
            self.particles.len(),
            width,
            height,
            self.mode
        );
    }

    /// React to a viewport resize: reconfigure and fully recreate the
    /// particle set. Origins are not remapped; particles get fresh random
    /// rest positions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.configure(width, height);
        self.populate();
    }

    /// Re-derive the mode after learning the host's touch capability.
    pub fn set_touch_device(&mut self, touch: bool) {
        if self.config.touch_device != touch {
            self.config.touch_device = touch;
            let (width, height) = self.canvas_size;
            self.configure(width, height);
        }
    }

    /// Pointer moved over the surface. Ignored in static mode.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.mode.is_animated() {
            self.pointer.set(x, y);
        }
    }

    /// Pointer left the surface.
    pub fn pointer_left(&mut self) {
        self.pointer.clear();
    }

    /// Advance the simulation by one tick.
    ///
    /// In animated mode every particle steps (with a per-particle flare roll)
    /// and the driver is told to schedule the next frame. In static mode
    /// nothing moves and nothing further is scheduled.
    pub fn tick(&mut self) -> Tick {
        if !self.mode.is_animated() {
            return Tick::Halted;
        }

        let pointer = self.pointer;
        for particle in self.particles.iter_mut() {
            let flare = self.rng.gen::<f32>() < FLARE_CHANCE;
            particle.step(&pointer, flare);
        }
        Tick::Scheduled
    }

    /// Write the frame's sprites into `out`, reusing its allocation.
    pub fn sprites(&self, out: &mut Vec<Sprite>) {
        out.clear();
        out.extend(self.particles.iter().map(Particle::sprite));
    }

    /// The current particle set.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The current mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The shared pointer state.
    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Surface dimensions from the last configure.
    #[inline]
    pub fn canvas_size(&self) -> (f32, f32) {
        self.canvas_size
    }
}

/// Default spawn: uniform position, size in `[0.5, 2.0)`, baseline alpha in
/// `[0.3, 0.8)`, density in `[10, 30)`.
fn default_spawn(ctx: &mut SpawnContext) -> Particle {
    Particle::new(
        ctx.random_in_rect(),
        ctx.random_range(0.5, 2.0),
        ctx.random_range(0.3, 0.8),
        ctx.random_range(10.0, 30.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animated_field(count: u32) -> ParticleField {
        let mut field = ParticleField::new(
            FieldConfig::new().with_particle_count(count).with_seed(7),
        );
        field.resize(1024.0, 768.0);
        field
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(Mode::select(false, 1024.0), Mode::Animated);
        assert_eq!(Mode::select(true, 1024.0), Mode::Static);
        assert_eq!(Mode::select(true, 320.0), Mode::Static);
        assert_eq!(Mode::select(false, 600.0), Mode::Static);
        // Exactly at the breakpoint counts as large enough.
        assert_eq!(Mode::select(false, SMALL_SCREEN_BREAKPOINT), Mode::Animated);
    }

    #[test]
    fn test_populate_count_and_bounds() {
        let field = animated_field(250);
        assert_eq!(field.particles().len(), 250);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 1024.0);
            assert!(p.position.y >= 0.0 && p.position.y < 768.0);
            assert!(p.size >= 0.5 && p.size < 2.0);
            assert!(p.base_alpha >= 0.3 && p.base_alpha < 0.8);
            assert!(p.density >= 10.0 && p.density < 30.0);
            assert_eq!(p.position, p.origin);
        }
    }

    #[test]
    fn test_resize_recreates_particles() {
        let mut field = animated_field(100);
        let before: Vec<_> = field.particles().iter().map(|p| p.origin).collect();

        field.resize(1920.0, 1080.0);
        assert_eq!(field.particles().len(), 100);
        for p in field.particles() {
            assert!(p.position.x < 1920.0 && p.position.y < 1080.0);
        }

        // Origins are re-rolled, not carried over.
        let after: Vec<_> = field.particles().iter().map(|p| p.origin).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_resize_below_breakpoint_switches_to_static() {
        let mut field = animated_field(50);
        assert_eq!(field.mode(), Mode::Animated);

        field.pointer_moved(100.0, 100.0);
        assert!(field.pointer().is_active());

        field.resize(640.0, 1080.0);
        assert_eq!(field.mode(), Mode::Static);
        assert!(!field.pointer().is_active());
        assert_eq!(field.tick(), Tick::Halted);

        field.resize(1280.0, 720.0);
        assert_eq!(field.mode(), Mode::Animated);
        assert_eq!(field.tick(), Tick::Scheduled);
    }

    #[test]
    fn test_touch_device_forces_static() {
        let mut field = ParticleField::new(
            FieldConfig::new()
                .with_particle_count(10)
                .with_touch_device(true)
                .with_seed(1),
        );
        field.resize(1920.0, 1080.0);
        assert_eq!(field.mode(), Mode::Static);
    }

    #[test]
    fn test_touch_event_demotes_running_field() {
        let mut field = animated_field(10);
        field.set_touch_device(true);
        assert_eq!(field.mode(), Mode::Static);
        assert_eq!(field.tick(), Tick::Halted);
    }

    #[test]
    fn test_static_tick_moves_nothing() {
        let mut field = ParticleField::new(
            FieldConfig::new()
                .with_particle_count(40)
                .with_touch_device(true)
                .with_seed(3),
        );
        field.resize(800.0, 600.0);

        let before: Vec<_> = field.particles().to_vec();
        for _ in 0..10 {
            assert_eq!(field.tick(), Tick::Halted);
        }
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn test_pointer_ignored_in_static_mode() {
        let mut field = ParticleField::new(
            FieldConfig::new()
                .with_particle_count(10)
                .with_touch_device(true)
                .with_seed(3),
        );
        field.resize(800.0, 600.0);
        field.pointer_moved(10.0, 10.0);
        assert!(!field.pointer().is_active());
    }

    #[test]
    fn test_alpha_stays_in_range_over_many_ticks() {
        let mut field = animated_field(100);
        field.pointer_moved(512.0, 384.0);
        for _ in 0..1000 {
            field.tick();
        }
        for p in field.particles() {
            assert!(p.alpha >= 0.0 && p.alpha <= 1.0);
        }
    }

    #[test]
    fn test_seeded_fields_are_deterministic() {
        let mut a = animated_field(64);
        let mut b = animated_field(64);
        for _ in 0..50 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_custom_spawner_is_used() {
        let mut field = ParticleField::new(
            FieldConfig::new().with_particle_count(5).with_seed(11),
        );
        field.set_spawner(Box::new(|ctx| {
            Particle::new(glam::Vec2::new(1.0, 2.0), 1.0, 0.5, ctx.random_range(10.0, 30.0))
        }));
        field.resize(1024.0, 768.0);

        for p in field.particles() {
            assert_eq!(p.origin, glam::Vec2::new(1.0, 2.0));
        }
    }

    #[test]
    fn test_sprites_match_particles() {
        let field = animated_field(20);
        let mut sprites = Vec::new();
        field.sprites(&mut sprites);
        assert_eq!(sprites.len(), 20);
        for (sprite, particle) in sprites.iter().zip(field.particles()) {
            assert_eq!(sprite.center, particle.position);
        }
    }
}
