use super::Segment;
use anyhow::bail;
use anyhow::Result;
use glam::Vec2;
use std::f32::consts;

/// Closed polygon in world space. The last vertex connects back to the first one.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Result<Self> {
        if vertices.len() < 3 {
            bail!("Polygon requires at least 3 vertices, {} given", vertices.len());
        }

        Ok(Self { vertices })
    }

    /// Regular polygon around `center`, with the first vertex pointing up (negative y).
    pub fn new_regular(center: Vec2, radius: f32, sides: u32) -> Result<Self> {
        if sides < 3 {
            bail!("Regular polygon requires at least 3 sides, {} given", sides);
        }

        let step = consts::TAU / sides as f32;
        let vertices = (0..sides).map(|i| center + Vec2::from_angle(i as f32 * step - consts::FRAC_PI_2) * radius).collect();

        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges in drawing order, the closing edge (last -> first) included.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let count = self.vertices.len();
        (0..count).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % count]))
    }
}
