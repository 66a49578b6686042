use glam::Vec2;

pub trait F64MathUtils {
    fn map_range(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}

pub trait Vec2MathUtils {
    fn angle_to(&self, target: Vec2) -> f32;
    fn with_length_towards(&self, target: Vec2, length: f32) -> Vec2;
}

impl F64MathUtils for f64 {
    fn map_range(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        (self - from.0) * (to.1 - to.0) / (from.1 - from.0) + to.0
    }
}

impl Vec2MathUtils for Vec2 {
    fn angle_to(&self, target: Vec2) -> f32 {
        f32::atan2(target.y - self.y, target.x - self.x)
    }

    /// Point at `length` from `self` in the direction of `target`.
    fn with_length_towards(&self, target: Vec2, length: f32) -> Vec2 {
        *self + Vec2::from_angle(self.angle_to(target)) * length
    }
}

/// Orientation predicate: true when `c` lies strictly on the left-hand side of the directed line `a` -> `b`.
pub fn on_segment(a: Vec2, b: Vec2, c: Vec2) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Strict crossing test between segments `ab` and `cd`. Collinear and touching configurations are not guaranteed to be detected.
pub fn intersection(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    on_segment(a, c, d) != on_segment(b, c, d) && on_segment(a, b, c) != on_segment(a, b, d)
}

/// Point where the lines through `ab` and `cd` meet, `None` for parallel lines.
pub fn point_intersection(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Option<Vec2> {
    let a1 = b.y - a.y;
    let b1 = a.x - b.x;
    let c1 = a1 * a.x + b1 * a.y;

    let a2 = d.y - c.y;
    let b2 = c.x - d.x;
    let c2 = a2 * c.x + b2 * c.y;

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }

    Some(Vec2::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det))
}
