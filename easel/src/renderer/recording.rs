use super::DrawCommand;
use super::Renderer;
use glam::Vec2;
use glam::Vec4;
use log::debug;

/// Renderer keeping the draw commands of the last finished frame in memory instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub viewport_size: Vec2,
    pub frames: u64,

    commands: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new(viewport_size: Vec2) -> Self {
        Self { viewport_size, ..Default::default() }
    }

    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.last_frame.iter().filter_map(|p| match p {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &[Vec2]> + '_ {
        self.last_frame.iter().filter_map(|p| match p {
            DrawCommand::Polygon { vertices, .. } => Some(vertices.as_slice()),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, clear_color: Vec4) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { color: clear_color });
    }

    fn end_frame(&mut self) {
        self.last_frame = std::mem::take(&mut self.commands);
        self.frames += 1;

        debug!("Frame {} finished with {} draw commands", self.frames, self.last_frame.len());
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn draw_polygon(&mut self, vertices: &[Vec2], fill_color: Vec4, outline_color: Vec4) {
        self.commands.push(DrawCommand::Polygon { vertices: vertices.to_vec(), fill_color, outline_color });
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    fn set_viewport(&mut self, size: Vec2) {
        self.viewport_size = size;
    }
}
