use super::polygon::Polygon;
use anyhow::Result;
use fastrand::Rng;
use glam::Vec2;
use log::debug;
use std::ops::Range;

/// Creates regular polygons with random side count and radius, using an explicitly seeded generator
/// so a replayed input sequence produces the same scene.
pub struct PolygonSpawner {
    pub sides: Range<u32>,
    pub radius: Range<f32>,

    rng: Rng,
}

impl PolygonSpawner {
    pub fn new(seed: u64) -> Self {
        Self { sides: 3..10, radius: 30.0..120.0, rng: Rng::with_seed(seed) }
    }

    pub fn spawn(&mut self, center: Vec2) -> Result<Polygon> {
        let sides = self.rng.u32(self.sides.clone());
        let radius = self.radius.start + self.rng.f32() * (self.radius.end - self.radius.start);

        debug!("Spawning polygon at {} with {} sides and radius {:.1}", center, sides, radius);
        Polygon::new_regular(center, radius, sides)
    }
}
