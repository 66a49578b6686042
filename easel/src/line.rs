use crate::utils::math::Vec2MathUtils;
use glam::Vec2;

/// Line from the viewport center through the pointer, extended far past the viewport edges.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StraightLine {
    pub viewport_size: Vec2,
    pub max_length: f32,
}

impl StraightLine {
    pub fn new(viewport_size: Vec2) -> Self {
        Self { viewport_size, max_length: viewport_size.x * viewport_size.y }
    }

    pub fn anchor(&self) -> Vec2 {
        self.viewport_size / 2.0
    }

    /// Pushes the pointer `max_length` further along the direction from the anchor.
    pub fn extend_trigonometric(&self, pointer: Vec2) -> Vec2 {
        let theta = self.anchor().angle_to(pointer);
        pointer + Vec2::from_angle(theta) * self.max_length
    }

    /// Scales the pointer in cartesian space centered on the anchor (y up), then maps it back to the screen.
    pub fn extend_linear(&self, pointer: Vec2) -> Vec2 {
        let cartesian = self.to_cartesian(pointer) * self.max_length;
        self.to_screen(cartesian)
    }

    pub fn to_cartesian(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x - self.anchor().x, self.anchor().y - screen.y)
    }

    pub fn to_screen(&self, cartesian: Vec2) -> Vec2 {
        Vec2::new(cartesian.x + self.anchor().x, self.anchor().y - cartesian.y)
    }
}
