use clap::Parser;
use glam::Vec2;
use instant::Instant;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::{EventLoop, EventLoopWindowTarget},
    keyboard::{Key, NamedKey},
    window::{Theme, WindowBuilder},
};

use glyphcloud_core::{FpsCounter, Instance, OrbitCamera, ParticleField};

mod cli;
mod controls;
mod render;

use cli::Args;
use controls::{action_for_key, next_config, window_title, Action, SlotEditor};
use render::GpuState;

struct App<'w> {
    gpu: GpuState<'w>,
    field: ParticleField,
    camera: OrbitCamera,
    fps: FpsCounter,
    instances: Vec<Instance>,
    editor: SlotEditor,
    last_frame: Instant,
    cursor: Option<Vec2>,
    dragging: bool,
    shift: bool,
}

impl<'w> App<'w> {
    fn new(gpu: GpuState<'w>, field: ParticleField) -> Self {
        let now = Instant::now();
        let mut app = Self {
            gpu,
            field,
            camera: OrbitCamera::default(),
            fps: FpsCounter::new(now),
            instances: Vec::new(),
            editor: SlotEditor::default(),
            last_frame: now,
            cursor: None,
            dragging: false,
            shift: false,
        };
        app.refresh_title();
        app.refresh_chrome();
        app
    }

    fn refresh_title(&self) {
        let mut title = window_title(self.field.config(), self.fps.fps());
        if let Some(status) = self.editor.status() {
            title.push_str(" | ");
            title.push_str(&status);
        }
        self.gpu.window.set_title(&title);
    }

    /// Match the window decorations to the backdrop.
    fn refresh_chrome(&self) {
        let theme = if self.field.palette().is_light() {
            Theme::Light
        } else {
            Theme::Dark
        };
        self.gpu.window.set_theme(Some(theme));
    }

    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;

        self.camera.update();
        self.field.tick(self.camera.eye(), dt);
        self.field
            .fill_instances(&mut self.instances, self.gpu.is_srgb());
        let view_proj = self.camera.view_proj(self.gpu.aspect());
        let background = self.field.palette().background;
        self.gpu.render(view_proj, &self.instances, background)?;

        if let Some(fps) = self.fps.record(now) {
            log::debug!("[app] {fps} fps");
            self.refresh_title();
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action, elwt: &EventLoopWindowTarget<()>) {
        match action {
            Action::Quit => elwt.exit(),
            Action::Rescatter => {
                self.field.resample();
                self.field.rescatter();
            }
            Action::Edit(target) => {
                self.editor.begin(target);
                self.refresh_title();
            }
            _ => {
                if let Some(config) = next_config(self.field.config(), action) {
                    let changes = self.field.apply(config);
                    if !changes.is_empty() {
                        log::info!(
                            "[app] {} ({:?})",
                            window_title(self.field.config(), self.fps.fps()),
                            changes
                        );
                        self.refresh_title();
                        if changes.relabeled {
                            self.refresh_chrome();
                        }
                    }
                }
            }
        }
    }

    fn handle_edit_key(&mut self, event: &KeyEvent, elwt: &EventLoopWindowTarget<()>) {
        match &event.logical_key {
            Key::Named(NamedKey::Escape) => self.editor.cancel(),
            Key::Named(NamedKey::Backspace) => self.editor.backspace(),
            Key::Named(NamedKey::Enter) => match self.editor.commit() {
                Ok(Some(action)) => self.handle_action(action, elwt),
                Ok(None) => {}
                Err(e) => log::warn!("[app] {e}"),
            },
            _ => {
                if let Some(text) = &event.text {
                    self.editor.type_text(text.as_str());
                }
            }
        }
        self.refresh_title();
    }

    fn handle_key(&mut self, event: KeyEvent, elwt: &EventLoopWindowTarget<()>) {
        if event.state != ElementState::Pressed {
            return;
        }
        if self.editor.is_active() {
            self.handle_edit_key(&event, elwt);
            return;
        }
        let action = match &event.logical_key {
            Key::Named(NamedKey::Escape) => Some(Action::Quit),
            Key::Named(NamedKey::Tab) if self.shift => Some(Action::PrevShape),
            Key::Named(NamedKey::Tab) => Some(Action::NextShape),
            Key::Character(c) => action_for_key(c.as_str()),
            _ => None,
        };
        if let Some(action) = action {
            self.handle_action(action, elwt);
        }
    }

    fn handle_cursor(&mut self, position: Vec2) {
        if self.dragging {
            if let Some(last) = self.cursor {
                let delta = position - last;
                self.camera
                    .rotate(delta.x, delta.y, self.gpu.height() as f32);
            }
        }
        self.cursor = Some(position);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = args.to_config()?;
    log::info!("[cli] {}", window_title(&config, 0));

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("glyphcloud")
        .with_inner_size(LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let gpu = pollster::block_on(GpuState::new(&window))?;
    let mut app = App::new(gpu, ParticleField::new(config));

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => app.gpu.resize(size),
            WindowEvent::ModifiersChanged(modifiers) => {
                app.shift = modifiers.state().shift_key();
            }
            WindowEvent::KeyboardInput { event, .. } => app.handle_key(event, elwt),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => app.dragging = state == ElementState::Pressed,
            WindowEvent::CursorMoved { position, .. } => {
                app.handle_cursor(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => app.cursor = None,
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / 40.0,
                };
                app.camera.zoom(steps);
            }
            WindowEvent::RedrawRequested => match app.frame() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    app.gpu.resize(app.gpu.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    elwt.exit()
                }
                Err(e) => log::warn!("[gpu] {e}"),
            },
            _ => {}
        },
        Event::AboutToWait => app.gpu.window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
