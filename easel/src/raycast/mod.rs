use crate::geometry::Segment;
use glam::Vec2;

pub mod debug;
pub mod field;

/// Segment cast from the light source towards a target. `end` starts at the target and can only move towards the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    pub target: Vec2,
    pub end: Vec2,
    pub hit: bool,
}

/// How a ray crossing several edges in one frame is trimmed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TrimMode {
    /// The closest crossing along the ray wins, whatever the edge order.
    #[default]
    Nearest,
    /// Edges are tested against the ray as trimmed so far, and every crossing overwrites its length.
    LastProcessed,
}

impl Ray {
    pub fn new(origin: Vec2, target: Vec2) -> Self {
        Self { origin, target, end: target, hit: false }
    }

    pub fn direction(&self) -> Vec2 {
        (self.target - self.origin).normalize_or_zero()
    }

    pub fn cast_length(&self) -> f32 {
        self.origin.distance(self.target)
    }

    pub fn length(&self) -> f32 {
        self.origin.distance(self.end)
    }

    /// Moves the end point to `distance` from the origin along the cast direction, never past the cast target.
    pub fn trim(&mut self, distance: f32) {
        let distance = distance.clamp(0.0, self.cast_length());

        self.end = self.origin + self.direction() * distance;
        self.hit = true;
    }

    pub fn cast_segment(&self) -> Segment {
        Segment::new(self.origin, self.target)
    }

    pub fn segment(&self) -> Segment {
        Segment::new(self.origin, self.end)
    }
}

impl TryFrom<&str> for TrimMode {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "nearest" => Ok(TrimMode::Nearest),
            "last_processed" => Ok(TrimMode::LastProcessed),
            _ => anyhow::bail!("Unknown trim mode {}", value),
        }
    }
}
