//! A denser, tinted cluster with additive blending: particles spawn in a
//! central disk instead of covering the window.
//!
//! Run with: `cargo run --example nebula`

use starfield::prelude::*;

fn main() -> Result<(), RunError> {
    Starfield::new()
        .with_particle_count(4000)
        .with_pointer_radius(220.0)
        .with_spawner(|ctx| {
            let center = Vec2::new(ctx.width / 2.0, ctx.height / 2.0);
            Particle::new(
                center + ctx.random_in_circle(ctx.height / 2.5),
                ctx.random_range(0.5, 2.5),
                ctx.random_range(0.2, 0.6),
                ctx.random_range(10.0, 30.0),
            )
        })
        .with_visuals(|v| {
            v.background(Vec3::new(0.01, 0.0, 0.03))
                .particle_color(Vec3::new(0.75, 0.6, 1.0))
                .blend_mode(BlendMode::Additive);
        })
        .with_title("Nebula")
        .run()
}
