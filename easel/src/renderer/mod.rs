use glam::Vec2;
use glam::Vec4;

pub mod recording;

/// Immediate-mode drawing backend. Coordinates are in window pixels with the origin in the top-left corner.
pub trait Renderer {
    fn begin_frame(&mut self, clear_color: Vec4);
    fn end_frame(&mut self);

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Vec4);
    fn draw_polygon(&mut self, vertices: &[Vec2], fill_color: Vec4, outline_color: Vec4);

    fn viewport_size(&self) -> Vec2;
    fn set_viewport(&mut self, size: Vec2);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { color: Vec4 },
    Line { from: Vec2, to: Vec2, color: Vec4 },
    Polygon { vertices: Vec<Vec2>, fill_color: Vec4, outline_color: Vec4 },
}
