use crate::utils::math;
use glam::Vec2;

pub mod polygon;
pub mod spawner;

/// Ordered pair of points, used both for polygon edges and for rays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }

    pub fn intersects(&self, other: &Segment) -> bool {
        math::intersection(self.a, self.b, other.a, other.b)
    }

    /// Crossing point of both segments, `None` when they don't cross.
    pub fn intersection_point(&self, other: &Segment) -> Option<Vec2> {
        if !self.intersects(other) {
            return None;
        }

        math::point_intersection(self.a, self.b, other.a, other.b)
    }
}
