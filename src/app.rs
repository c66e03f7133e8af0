// Application state and event handling

use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Instant;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopWindowTarget};
use winit::window::Window;

use crate::engine::audio::AudioSystem;
use crate::engine::game_loop::FramePacer;
use crate::engine::input::InputManager;
use crate::engine::renderer::{Renderer, ShapeBatch};
use crate::game::{Controls, Scene};

/// Ticks between frame rate log lines
const FPS_LOG_INTERVAL: u64 = 600;

pub struct App {
    window: Arc<Window>,
    renderer: Renderer,
    scene: Scene,
    input: InputManager,
    controls: Controls,
    audio: AudioSystem,
    pacer: FramePacer,
    rng: StdRng,
    batch: ShapeBatch,
}

impl App {
    pub fn new(window: Arc<Window>, renderer: Renderer, audio: AudioSystem) -> Self {
        let size = renderer.size();
        let mut rng = StdRng::from_entropy();
        let controls = Controls::with_rng(&mut rng);
        info!("{} keys mapped to gags", controls.keymap().len());

        Self {
            scene: Scene::new(size.width as f32, size.height as f32),
            batch: ShapeBatch::new(renderer.is_srgb()),
            window,
            renderer,
            input: InputManager::new(),
            controls,
            audio,
            pacer: FramePacer::new(),
            rng,
        }
    }

    /// Entry point for every event the loop delivers
    pub fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                self.handle_window_event(event, elwt)
            }
            Event::AboutToWait => {
                if self.pacer.is_due(Instant::now()) {
                    self.window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
            }
            _ => {}
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down...");
                self.shutdown(elwt);
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size);
                if size.width > 0 && size.height > 0 {
                    self.scene.resize(size.width as f32, size.height as f32);
                }
            }
            WindowEvent::Focused(false) => self.input.reset(),
            WindowEvent::KeyboardInput { event, .. } => self.input.process_keyboard_event(&event),
            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_cursor_moved(position.x, position.y)
            }
            WindowEvent::CursorLeft { .. } => self.input.process_cursor_left(),
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(state, button)
            }
            WindowEvent::RedrawRequested => {
                if self.pacer.begin_tick(Instant::now()) {
                    self.tick(elwt);
                }
                self.render(elwt);
            }
            _ => {}
        }
    }

    /// One step: input, then the scene
    fn tick(&mut self, elwt: &EventLoopWindowTarget<()>) {
        if self.input.quit_combo_held() {
            info!("Exit combo pressed, shutting down...");
            self.shutdown(elwt);
            return;
        }

        self.controls
            .apply(&self.input, &mut self.scene, &self.audio, &mut self.rng);
        self.input.end_frame();
        self.scene.update();

        if self.pacer.tick_count() % FPS_LOG_INTERVAL == 0 {
            debug!(
                "{:.1} fps, {} particles, {} fish, {} shapes",
                self.pacer.fps(),
                self.scene.particles.len(),
                self.scene.fish.len(),
                self.scene.backdrop.len()
            );
        }
    }

    fn shutdown(&self, elwt: &EventLoopWindowTarget<()>) {
        info!(
            "Ran {} ticks in {:.1?}",
            self.pacer.tick_count(),
            self.pacer.elapsed()
        );
        elwt.exit();
    }

    fn render(&mut self, elwt: &EventLoopWindowTarget<()>) {
        self.batch.clear();
        self.scene.draw(&mut self.batch, &mut self.rng);

        match self.renderer.render(&self.batch, self.scene.background()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure()
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, shutting down");
                elwt.exit();
            }
            Err(e) => warn!("Surface error: {:?}, skipping frame", e),
        }
    }
}
