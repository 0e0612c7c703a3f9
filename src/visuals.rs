//! Visual configuration for the backdrop.
//!
//! Kept deliberately small: a clear color, a particle tint, and a blend mode.
//! Configured through the builder:
//!
//! ```ignore
//! Starfield::new()
//!     .with_visuals(|v| {
//!         v.background(Vec3::new(0.01, 0.0, 0.03))
//!          .particle_color(Vec3::new(0.9, 0.85, 1.0))
//!          .blend_mode(BlendMode::Additive);
//!     })
//!     .run()
//! ```

use glam::Vec3;

/// Blend mode for particle rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending (default).
    #[default]
    Alpha,
    /// Additive blending. Overlapping particles become brighter, which reads
    /// as a glow.
    Additive,
}

/// Colors and blending for the rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    /// Background clear color (RGB, 0.0-1.0).
    pub background_color: Vec3,
    /// Particle tint (RGB, 0.0-1.0). Opacity comes from each sprite.
    pub particle_color: Vec3,
    /// Blend mode for particle rendering.
    pub blend_mode: BlendMode,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background_color: Vec3::ZERO,
            particle_color: Vec3::ONE,
            blend_mode: BlendMode::Alpha,
        }
    }
}

impl VisualConfig {
    /// Create a new visual config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background clear color (RGB, 0.0-1.0).
    pub fn background(&mut self, color: Vec3) -> &mut Self {
        self.background_color = color;
        self
    }

    /// Set the particle tint (RGB, 0.0-1.0).
    pub fn particle_color(&mut self, color: Vec3) -> &mut Self {
        self.particle_color = color;
        self
    }

    /// Set the blend mode.
    pub fn blend_mode(&mut self, mode: BlendMode) -> &mut Self {
        self.blend_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VisualConfig::new();
        assert_eq!(config.background_color, Vec3::ZERO);
        assert_eq!(config.particle_color, Vec3::ONE);
        assert_eq!(config.blend_mode, BlendMode::Alpha);
    }

    #[test]
    fn test_chained_setters() {
        let mut config = VisualConfig::new();
        config
            .background(Vec3::new(0.1, 0.0, 0.2))
            .blend_mode(BlendMode::Additive);
        assert_eq!(config.background_color, Vec3::new(0.1, 0.0, 0.2));
        assert_eq!(config.blend_mode, BlendMode::Additive);
    }
}
