use crate::error_break;
use crate::error_continue;
use crate::renderer::Renderer;
use crate::scene::FrameCommand;
use crate::scene::Scene;
use crate::utils::storage::Storage;
use crate::window::InputEvent;
use crate::window::InputSource;
use anyhow::bail;
use anyhow::Result;
use glam::Vec2;
use glam::Vec4;
use instant::Instant;
use log::error;
use log::info;
use log::Level;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct ApplicationContext<G, W, R>
where
    G: Default + 'static,
    W: InputSource,
    R: Renderer,
{
    pub window: W,
    pub renderer: R,
    pub scenes: Storage<Box<dyn Scene<G>>>,
    pub global: G,
    pub clear_color: Vec4,

    /// When set, used instead of the measured frame time, so replayed sessions are deterministic.
    pub frame_delta: Option<f32>,
    pub frames: u64,

    current_scene: String,
    next_scene: Option<String>,
    frame_timestamp: Instant,
    running: bool,
    timestep: f32,
    accumulator: f32,
}

pub struct ApplicationState<'a, G> {
    pub window: &'a mut dyn InputSource,
    pub renderer: &'a mut dyn Renderer,
    pub global: &'a mut G,
}

macro_rules! state {
    ($self:ident) => {
        ApplicationState { window: &mut $self.window, renderer: &mut $self.renderer, global: &mut $self.global }
    };
}

/// Installs the process-wide logger. Later calls are ignored, as only one logger can be set.
pub fn init_logger() {
    #[cfg(debug_assertions)]
    let level = Level::Info;

    #[cfg(not(debug_assertions))]
    let level = Level::Error;

    if simple_logger::init_with_level(level).is_ok() {
        info!("Easel {}", VERSION);
    }
}

impl<G, W, R> ApplicationContext<G, W, R>
where
    G: Default + 'static,
    W: InputSource,
    R: Renderer,
{
    pub fn new(window: W, renderer: R) -> Self {
        init_logger();

        Self {
            window,
            renderer,
            scenes: Default::default(),
            global: Default::default(),
            clear_color: Vec4::new(1.0, 1.0, 1.0, 1.0),

            frame_delta: None,
            frames: 0,

            current_scene: "".to_string(),
            next_scene: None,
            frame_timestamp: Instant::now(),
            running: true,
            timestep: 1.0 / 60.0,
            accumulator: 0.0,
        }
    }

    pub fn with_scene(mut self, name: &str, scene: Box<dyn Scene<G>>) -> Result<Self> {
        self.scenes.store_with_name(name, scene)?;
        Ok(self)
    }

    pub fn current_scene(&self) -> &str {
        &self.current_scene
    }

    /// Runs the frame loop until the window is closed or a scene requests an exit.
    pub fn run(&mut self, scene: &str) -> Result<()> {
        if !self.scenes.contains_by_name(scene) {
            bail!("Scene {} not found", scene);
        }

        info!("Starting with scene {}", scene);

        self.next_scene = Some(scene.to_string());
        self.running = true;
        self.frame_timestamp = Instant::now();

        while self.running {
            self.window.begin_frame();
            self.renderer.begin_frame(self.clear_color);

            if let Some(next_scene) = self.next_scene.take() {
                if !self.current_scene.is_empty() {
                    if let Err(err) = self.scenes.get_by_name_mut(&self.current_scene).and_then(|p| p.deactivation(state!(self))) {
                        error_break!("Failed to deactivate scene {} ({})", self.current_scene, err);
                    };
                }

                if let Err(err) = self.scenes.get_by_name_mut(&next_scene).and_then(|p| p.activation(state!(self))) {
                    error_break!("Failed to activate scene {} ({})", next_scene, err);
                };

                info!("Scene {} activated", next_scene);
                self.current_scene = next_scene;
            }

            let scene = match self.scenes.get_by_name_mut(&self.current_scene) {
                Ok(scene) => scene,
                Err(err) => error_break!("Failed to get scene {} ({})", self.current_scene, err),
            };

            while let Some(event) = self.window.poll_event() {
                match event {
                    InputEvent::WindowSizeChange { size } => self.renderer.set_viewport(Vec2::new(size.x as f32, size.y as f32)),
                    InputEvent::WindowClose => {
                        info!("Window closed after {} frames", self.frames);
                        return Ok(());
                    }
                    _ => {}
                }

                if let Err(err) = scene.input(state!(self), event) {
                    error_continue!("Failed to process input event {:?} ({})", event, err);
                }
            }

            let now = Instant::now();
            let mut delta = match self.frame_delta {
                Some(delta) => delta,
                None => (now - self.frame_timestamp).as_secs_f32(),
            };

            if delta > 0.1 {
                delta = 0.1;
            }

            self.frame_timestamp = now;
            self.accumulator += delta;

            while self.accumulator >= self.timestep {
                self.accumulator -= self.timestep;

                let command = match self.scenes.get_by_name_mut(&self.current_scene).and_then(|p| p.fixed(state!(self))) {
                    Ok(command) => command,
                    Err(err) => error_continue!("Failed to process fixed frame ({})", err),
                };

                self.process_frame_command(command);
            }

            let command = match self.scenes.get_by_name_mut(&self.current_scene).and_then(|p| p.frame(state!(self), self.accumulator, delta)) {
                Ok(command) => command,
                Err(err) => error_continue!("Failed to process frame ({})", err),
            };

            self.process_frame_command(command);
            self.renderer.end_frame();
            self.frames += 1;

            if self.window.is_closed() {
                info!("Window closed after {} frames", self.frames);
                self.running = false;
            }
        }

        Ok(())
    }

    fn process_frame_command(&mut self, command: Option<FrameCommand>) {
        match command {
            Some(FrameCommand::ChangeScene { name }) => self.next_scene = Some(name),
            Some(FrameCommand::ResetScene) => {
                let name = self.current_scene.clone();

                match self.scenes.get_by_name_mut(&name) {
                    Ok(scene) => {
                        if let Err(err) = scene.deactivation(state!(self)) {
                            error!("Failed to deactivate scene {} ({})", name, err);
                        }

                        *scene = scene.reset();

                        if let Err(err) = scene.activation(state!(self)) {
                            error!("Failed to activate scene {} ({})", name, err);
                        }

                        info!("Scene {} reset", name);
                    }
                    Err(err) => error!("Failed to reset scene {} ({})", name, err),
                }
            }
            Some(FrameCommand::Exit) => self.running = false,
            None => {}
        }
    }
}
