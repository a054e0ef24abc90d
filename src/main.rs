//! Glade - procedural terrain fly-through
//!
//! Usage:
//!   cargo run --release -- [--config <file.json>]
//!
//! Controls:
//!   Click - Capture mouse
//!   Mouse - Look around (while captured)
//!   WASD - Move
//!   Space / C or X - Up / down
//!   Tab - Toggle mouse capture
//!   Escape - Release mouse / exit

use std::path::PathBuf;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use glade::core::{
    camera::Camera,
    config::ViewerConfig,
    input::InputState,
    logging,
    time::FrameTimer,
    Error, Result,
};
use glade::render::{GpuContext, SceneRenderer};
use glade::scene::Scene;

const CONTROLS_HELP: &str = "Controls: click to capture mouse, mouse to look, WASD to move, \
Space/C/X for up/down, Tab toggles capture, Escape releases mouse or exits";

struct ViewerState {
    camera: Camera,
    input: InputState,
    timer: FrameTimer,
    scene: Scene,
    renderer: SceneRenderer,
    eye_clearance: f32,
}

impl ViewerState {
    fn new(gpu: &GpuContext, config: &ViewerConfig) -> Self {
        let scene = Scene::build(&config.scene);
        let renderer = SceneRenderer::new(gpu, &scene, &config.scene);

        let (width, height) = gpu.size();
        let mut camera = Camera::new(width, height);
        camera.move_speed = config.scene.camera.move_speed;
        camera.look_sensitivity = config.scene.camera.look_sensitivity;

        let eye_clearance = config.scene.camera.eye_clearance;
        let ground = scene.ground_height(camera.position.x, camera.position.z);
        camera.rest_above(ground + eye_clearance);

        Self {
            camera,
            input: InputState::new(),
            timer: FrameTimer::new(),
            scene,
            renderer,
            eye_clearance,
        }
    }

    /// Advance the camera by one frame. Returns true when the FPS estimate refreshed.
    fn update(&mut self) -> bool {
        let refreshed = self.timer.tick();
        let dt = self.timer.delta_secs();

        let keys = self.input.move_keys();
        let (pointer_x, pointer_y) = self.input.pointer();
        self.camera.update(dt, &keys, pointer_x, pointer_y);

        let position = self.camera.position;
        let ground = self.scene.ground_height(position.x, position.z);
        self.camera.rest_above(ground + self.eye_clearance);

        log::trace!("Camera at {:?} yaw={:.3} pitch={:.3}", self.camera.position, self.camera.yaw, self.camera.pitch);
        refreshed
    }
}

struct App {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    state: Option<ViewerState>,
    cursor_grabbed: bool,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            window: None,
            gpu: None,
            state: None,
            cursor_grabbed: false,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.window.width, self.config.window.height));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(|e| Error::Window(format!("Failed to create window: {}", e)))?,
        );

        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;
        let state = ViewerState::new(&gpu, &self.config);

        log::info!("{}", CONTROLS_HELP);

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.state = Some(state);
        Ok(())
    }

    fn set_cursor_grab(&mut self, grab: bool) {
        let Some(window) = &self.window else { return };

        let result = if grab {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };

        match result {
            Ok(()) => {
                self.cursor_grabbed = grab;
                window.set_cursor_visible(!grab);
                if let Some(state) = &mut self.state {
                    state.input.set_mouse_captured(grab);
                }
                log::debug!("Cursor grabbed: {}", grab);
            }
            Err(e) => log::warn!("Cursor grab change to {} failed: {}", grab, e),
        }
    }

    fn redraw(&mut self) {
        let (Some(window), Some(gpu), Some(state)) = (&self.window, &self.gpu, &mut self.state) else {
            return;
        };

        if state.update() {
            let p = state.camera.position;
            window.set_title(&format!(
                "{} - {:.0} fps - ({:.1}, {:.1}, {:.1})",
                self.config.window.title, state.timer.fps(), p.x, p.y, p.z
            ));
        }

        if let Err(e) = state.renderer.render(gpu, &state.camera) {
            log::warn!("Skipping frame: {}", e);
            gpu.reconfigure();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("Startup failed: {}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            state.input.process_event(&event);
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            // Minimized windows report 0x0; keep the old surface until restored
            WindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
                if let (Some(gpu), Some(state)) = (&mut self.gpu, &mut self.state) {
                    gpu.resize(size.width, size.height);
                    state.renderer.resize(&gpu.device, size.width, size.height);
                    state.camera.set_viewport(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) if self.cursor_grabbed => {
                self.set_cursor_grab(false);
            }
            WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                if !self.cursor_grabbed {
                    self.set_cursor_grab(true);
                }
            }
            WindowEvent::KeyboardInput { event, .. } if event.state.is_pressed() && !event.repeat => {
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => {
                        if self.cursor_grabbed {
                            self.set_cursor_grab(false);
                        } else {
                            event_loop.exit();
                        }
                    }
                    PhysicalKey::Code(KeyCode::Tab) => self.set_cursor_grab(!self.cursor_grabbed),
                    _ => {}
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let (Some(state), DeviceEvent::MouseMotion { delta }) = (&mut self.state, event) {
            state.input.process_mouse_motion(delta);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Request redraw to keep rendering
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn load_config() -> Result<ViewerConfig> {
    let args: Vec<String> = std::env::args().collect();
    let config_path = args.iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    match config_path {
        Some(path) => ViewerConfig::load(&path),
        None => Ok(ViewerConfig::default()),
    }
}

fn run(config: ViewerConfig) -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| Error::Window(format!("Failed to create event loop: {}", e)))?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .map_err(|e| Error::Window(format!("Event loop error: {}", e)))?;

    Ok(())
}

fn main() {
    logging::init();
    log::info!("Glade starting...");

    let result = load_config().and_then(run);
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
