//! Starfield builder and runner.
//!
//! Owns the window/event-loop wiring: winit events are translated into field
//! calls, and the field's tick result decides whether another frame gets
//! requested. All simulation state lives in [`ParticleField`]; all painting
//! lives in the GPU adapter.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::RunError;
use crate::field::{FieldConfig, ParticleField, Tick};
use crate::gpu::GpuState;
use crate::particle::{Particle, Sprite};
use crate::spawn::SpawnContext;
use crate::time::FrameClock;
use crate::visuals::VisualConfig;

/// A starfield backdrop builder.
///
/// Use method chaining to configure, then call `.run()` to start:
///
/// ```ignore
/// Starfield::new()
///     .with_particle_count(2000)
///     .with_pointer_radius(150.0)
///     .run()
/// ```
pub struct Starfield {
    config: FieldConfig,
    spawner: Option<Box<dyn Fn(&mut SpawnContext) -> Particle + Send + Sync>>,
    visuals: VisualConfig,
    title: String,
    window_size: (u32, u32),
}

impl Starfield {
    /// Create a starfield with default settings.
    pub fn new() -> Self {
        Self {
            config: FieldConfig::default(),
            spawner: None,
            visuals: VisualConfig::default(),
            title: "Starfield".to_string(),
            window_size: (1280, 720),
        }
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.config.particle_count = count;
        self
    }

    /// Set the pointer influence radius in pixels.
    pub fn with_pointer_radius(mut self, radius: f32) -> Self {
        self.config.pointer_radius = radius;
        self
    }

    /// Treat the host as a touch device (forces the static backdrop).
    pub fn with_touch_device(mut self, touch: bool) -> Self {
        self.config.touch_device = touch;
        self
    }

    /// Seed the field RNG for reproducible spawns and flares.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Replace the default particle spawner.
    pub fn with_spawner<F>(mut self, spawner: F) -> Self
    where
        F: Fn(&mut SpawnContext) -> Particle + Send + Sync + 'static,
    {
        self.spawner = Some(Box::new(spawner));
        self
    }

    /// Adjust the visual configuration.
    pub fn with_visuals<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut VisualConfig),
    {
        f(&mut self.visuals);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Run the backdrop. Blocks until the window is closed.
    pub fn run(self) -> Result<(), RunError> {
        let max_instances = self.config.particle_count;
        let mut field = ParticleField::new(self.config);
        if let Some(spawner) = self.spawner {
            field.set_spawner(spawner);
        }

        let event_loop = EventLoop::new()?;
        // Wait, not Poll: redraws are requested tick by tick, and a static
        // backdrop must idle between input events.
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App {
            window: None,
            gpu: None,
            field,
            clock: FrameClock::new(),
            sprites: Vec::new(),
            visuals: self.visuals,
            title: self.title,
            window_size: self.window_size,
            max_instances,
            error: None,
        };
        event_loop.run_app(&mut app)?;

        match app.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: ParticleField,
    clock: FrameClock,
    sprites: Vec<Sprite>,
    visuals: VisualConfig,
    title: String,
    window_size: (u32, u32),
    max_instances: u32,
    error: Option<RunError>,
}

impl App {
    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.window_size.0,
                self.window_size.1,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let size = window.inner_size();
        self.field.resize(size.width as f32, size.height as f32);

        // A missing GPU surface disables the backdrop, it never kills the
        // host application.
        match pollster::block_on(GpuState::new(window.clone(), self.max_instances, &self.visuals))
        {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => log::warn!("starfield disabled, no usable GPU surface: {}", e),
        }

        log::info!(
            "starfield started: {} particles, {:?} mode",
            self.field.particles().len(),
            self.field.mode()
        );
        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.field
                    .resize(physical_size.width as f32, physical_size.height as f32);
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                self.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.field
                    .pointer_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                self.field.pointer_left();
            }
            WindowEvent::Touch(_) => {
                // First touch reveals a touch device; drop to the static
                // backdrop and repaint once.
                self.field.set_touch_device(true);
                self.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                self.clock.update();
                if self.clock.frame() % 300 == 0 {
                    log::debug!("fps {:.1}", self.clock.fps());
                }

                let tick = self.field.tick();
                self.field.sprites(&mut self.sprites);

                if let Some(gpu) = &mut self.gpu {
                    match gpu.render(&self.sprites) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }

                if tick == Tick::Scheduled {
                    self.request_redraw();
                }
            }
            _ => {}
        }
    }
}
