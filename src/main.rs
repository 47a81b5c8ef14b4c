//! noiseplot - animated gradient-noise heightfield viewer
//!
//! The surface is a tileable multi-octave gradient noise field whose lattice
//! gradients slowly rotate, so the terrain flows instead of flickering.

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use noiseplot::camera::OrbitCamera;
use noiseplot::cli::Args;
use noiseplot::error::ViewerError;
use noiseplot::fps::FpsTracker;
use noiseplot::input::{Controls, KeyState};
use noiseplot::params::{ControlParams, RenderConfig};
use noiseplot::plot::HeightfieldPlot;
use noiseplot::rendering::{RenderSystem, Uniforms};
use noiseplot::snapshot;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    plot: HeightfieldPlot,
    camera: OrbitCamera,
    keys: KeyState,
    controls: Controls,

    // Configuration
    render_config: RenderConfig,

    // Time tracking
    fps: FpsTracker,

    /// First fatal error; ends the event loop
    error: Option<ViewerError>,
}

impl App {
    fn new(plot: HeightfieldPlot, freeze_time: bool) -> Self {
        Self {
            window: None,
            render_system: None,
            plot,
            camera: OrbitCamera::default(),
            keys: KeyState::new(),
            controls: Controls::new(ControlParams::default(), freeze_time),
            render_config: RenderConfig::default(),
            fps: FpsTracker::new(Instant::now()),
            error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let window_attributes = Window::default_attributes()
            .with_title("noiseplot")
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.plot,
            &self.render_config,
        ))?;

        log::info!("Arrows rotate, WASD/RF move, =/- grid, 0/9 isolines, Space freezes, Esc quits");

        self.window = Some(window);
        self.render_system = Some(render_system);
        Ok(())
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode, state: ElementState) {
        let fresh_press = self.keys.set(key, state.is_pressed());
        if !fresh_press {
            return;
        }
        if key == KeyCode::Escape {
            event_loop.exit();
        } else {
            self.controls.on_press(key);
        }
    }

    /// Advance the simulation one tick and draw it
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        let (dt, _) = self.fps.record_frame_at(Instant::now());

        self.controls
            .apply(&self.keys, dt, &mut self.camera, &mut self.plot);
        self.plot.dynamic_update(self.controls.freeze_time());

        if self.plot.is_xz_changed_with_reset() {
            render_system.upload_topology(&self.plot);
        }
        render_system.update_heights(&self.plot);

        let view_proj = self
            .camera
            .view_proj(render_system.aspect_ratio(), &self.render_config);
        let uniforms = Uniforms::new(
            view_proj,
            self.plot.isoline_count(),
            self.render_config.isoline_size,
        );

        match render_system.render(&uniforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = render_system.size();
                render_system.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Render error: out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }
        if let Err(e) = self.init_window(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, key, state),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run(args: Args) -> Result<(), ViewerError> {
    let noise_params = args.noise_params()?;
    let plot_params = args.plot_params()?;
    log::info!(
        "Noise: tile {}, {} octaves, seed {:?}; grid {}",
        noise_params.tile_size,
        noise_params.octave_count,
        noise_params.seed,
        plot_params.initial_grid_size
    );

    let mut plot = HeightfieldPlot::new(plot_params, noise_params);

    if let Some(path) = &args.snapshot {
        for _ in 0..args.ticks.max(1) {
            plot.dynamic_update(args.freeze);
        }
        return snapshot::save_png(&plot, path);
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(plot, args.freeze);
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
