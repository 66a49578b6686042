use easel::anyhow::Result;
use easel::error_return;
use easel::glam::IVec2;
use easel::glam::Vec2;
use easel::glam::Vec4;
use easel::raycast::TrimMode;
use easel::tinyjson::JsonValue;
use easel::utils::json::*;
use easel::window::InputEvent;
use easel::window::Modifiers;
use easel::window::MouseButton;
use log::info;
use std::collections::HashMap;
use std::fs;

#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    pub path: String,
    pub data: ConfigData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigData {
    pub viewport_size: Vec2,
    pub seed: u64,
    pub frames: u32,
    pub scene: String,
    pub trim_mode: TrimMode,
    pub debug: bool,
    pub arms: u32,
    pub max_iterations: u32,
    pub mandelbrot_output: Option<String>,
    pub ray_color: Vec4,
    pub pointer_path: Vec<Vec2>,
    pub clicks: Vec<u32>,
}

impl ConfigLoader {
    pub fn new(path: &str) -> Self {
        Self { path: path.to_string(), ..Default::default() }
    }

    /// Reads the configuration file, keeping the defaults if it's missing or malformed.
    pub fn reload(&mut self) {
        self.data = Default::default();

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => error_return!("Failed to read config {} ({}), using defaults", self.path, err),
        };

        if let Err(err) = self.parse(&content) {
            self.data = Default::default();
            error_return!("Failed to parse config {} ({}), using defaults", self.path, err);
        }

        info!("Config loaded from {}", self.path);
    }

    pub fn parse(&mut self, content: &str) -> Result<()> {
        let json = content.parse::<JsonValue>()?;
        let data = json.get::<HashMap<_, _>>().ok_or_else(|| easel::anyhow::anyhow!("Config root is not an object"))?;
        let defaults = ConfigData::default();

        let width = read_value_or::<f64>(data, "width", defaults.viewport_size.x as f64)?;
        let height = read_value_or::<f64>(data, "height", defaults.viewport_size.y as f64)?;
        if width <= 0.0 || height <= 0.0 {
            easel::anyhow::bail!("Invalid viewport size {}x{}", width, height);
        }

        self.data.viewport_size = Vec2::new(width as f32, height as f32);
        self.data.seed = whole_number(read_value_or::<f64>(data, "seed", defaults.seed as f64)?, "seed", u64::MAX as f64)? as u64;
        self.data.frames = whole_number(read_value_or::<f64>(data, "frames", defaults.frames as f64)?, "frames", u32::MAX as f64)? as u32;
        self.data.scene = read_value_or::<String>(data, "scene", defaults.scene)?;
        self.data.trim_mode = TrimMode::try_from(read_value_or::<String>(data, "trim_mode", "nearest".to_string())?.as_str())?;
        self.data.debug = read_value_or::<bool>(data, "debug", defaults.debug)?;
        self.data.arms = whole_number(read_value_or::<f64>(data, "arms", defaults.arms as f64)?, "arms", u32::MAX as f64)? as u32;
        self.data.max_iterations =
            whole_number(read_value_or::<f64>(data, "max_iterations", defaults.max_iterations as f64)?, "max_iterations", u32::MAX as f64)? as u32;

        let output = read_value_or::<String>(data, "mandelbrot_output", String::new())?;
        self.data.mandelbrot_output = if output.is_empty() { None } else { Some(output) };

        if data.contains_key("ray_color") {
            self.data.ray_color = read_color(data, "ray_color")?;
        }
        if data.contains_key("pointer_path") {
            self.data.pointer_path = read_positions(data, "pointer_path")?;
        }
        if data.contains_key("clicks") {
            self.data.clicks = read_array_raw(data, "clicks")?
                .iter()
                .map(|p| match p {
                    JsonValue::Number(frame) => Ok(whole_number(*frame, "clicks", u32::MAX as f64)? as u32),
                    _ => easel::anyhow::bail!("Failed to parse clicks"),
                })
                .collect::<Result<Vec<_>>>()?;
        }

        Ok(())
    }
}

/// JSON numbers are floats, counts and seeds have to be non-negative integers that fit their field.
fn whole_number(value: f64, name: &str, max: f64) -> Result<f64> {
    if value < 0.0 || value.fract() != 0.0 || value > max {
        easel::anyhow::bail!("Invalid {} value {}", name, value);
    }

    Ok(value)
}

impl ConfigData {
    /// Pointer position for the given frame, moving linearly between the points of the path and looping back to the first one.
    pub fn pointer_at(&self, frame: u32) -> Vec2 {
        if self.pointer_path.is_empty() {
            return self.viewport_size / 2.0;
        }

        let count = self.pointer_path.len() as u32;
        let leg_frames = (self.frames / count).max(1);
        let leg = (frame / leg_frames) % count;
        let t = (frame % leg_frames) as f32 / leg_frames as f32;

        let from = self.pointer_path[leg as usize];
        let to = self.pointer_path[((leg + 1) % count) as usize];

        from.lerp(to, t)
    }

    /// Events of every frame: a pointer move, plus a left click spread over two frames when requested.
    pub fn script(&self) -> Vec<Vec<InputEvent>> {
        let modifiers = Modifiers::default();
        let mut frames = Vec::with_capacity(self.frames as usize);

        for frame in 0..self.frames {
            let position = self.pointer_at(frame).as_ivec2();
            let mut events = vec![InputEvent::MouseMove { position, modifiers }];

            if self.clicks.contains(&frame) {
                events.push(InputEvent::MouseButtonPress { button: MouseButton::Left, position, modifiers });
            }
            if frame > 0 && self.clicks.contains(&(frame - 1)) {
                events.push(InputEvent::MouseButtonRelease { button: MouseButton::Left, position, modifiers });
            }

            frames.push(events);
        }

        frames
    }

    pub fn window_size(&self) -> IVec2 {
        self.viewport_size.as_ivec2()
    }
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            viewport_size: Vec2::new(800.0, 800.0),
            seed: 2020,
            frames: 240,
            scene: "raycast".to_string(),
            trim_mode: TrimMode::Nearest,
            debug: false,
            arms: 1,
            max_iterations: 1000,
            mandelbrot_output: None,
            ray_color: Vec4::new(1.0, 0.0, 0.0, 1.0),
            pointer_path: Vec::new(),
            clicks: Vec::new(),
        }
    }
}
