use super::field::RayIntersectionField;
use super::Ray;
use crate::geometry::polygon::Polygon;
use crate::renderer::Renderer;
use glam::Vec4;

#[derive(Debug)]
pub struct RaycastDebugSettings {
    pub enabled: bool,

    pub polygon_fill_color: Vec4,
    pub polygon_outline_color: Vec4,
    pub ray_color: Vec4,
    pub cast_color: Vec4,
}

impl Default for RaycastDebugSettings {
    fn default() -> Self {
        Self {
            enabled: false,

            polygon_fill_color: Vec4::new(0.0, 0.0, 0.0, 0.0),
            polygon_outline_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            ray_color: Vec4::new(1.0, 0.0, 0.0, 1.0),
            cast_color: Vec4::new(0.0, 0.0, 1.0, 0.25),
        }
    }
}

impl RayIntersectionField {
    /// Draws the polygons and the trimmed rays. With debug enabled, the untrimmed part of every hit ray is drawn too.
    pub fn draw(&self, renderer: &mut dyn Renderer, polygons: &[Polygon], rays: &[Ray]) {
        for polygon in polygons {
            renderer.draw_polygon(polygon.vertices(), self.debug.polygon_fill_color, self.debug.polygon_outline_color);
        }

        for ray in rays {
            renderer.draw_line(ray.origin, ray.end, self.debug.ray_color);
        }

        if self.debug.enabled {
            for ray in rays.iter().filter(|p| p.hit) {
                renderer.draw_line(ray.end, ray.target, self.debug.cast_color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::RecordingRenderer;
    use glam::Vec2;

    #[test]
    fn debug_mode_adds_cast_remainders() {
        let mut field = RayIntersectionField::default();
        let mut renderer = RecordingRenderer::new(Vec2::new(20.0, 20.0));
        let polygons = vec![Polygon::new(vec![Vec2::new(5.0, -1.0), Vec2::new(5.0, 1.0), Vec2::new(6.0, 3.0)]).unwrap()];
        let rays = field.cast(Vec2::ZERO, &[Vec2::new(10.0, 0.0)], &polygons);
        let hits = rays.iter().filter(|p| p.hit).count();

        renderer.begin_frame(Vec4::ONE);
        field.draw(&mut renderer, &polygons, &rays);
        renderer.end_frame();

        assert_eq!(renderer.polygons().count(), 1);
        assert_eq!(renderer.lines().count(), rays.len());

        field.debug.enabled = true;
        renderer.begin_frame(Vec4::ONE);
        field.draw(&mut renderer, &polygons, &rays);
        renderer.end_frame();

        assert!(hits > 0);
        assert_eq!(renderer.lines().count(), rays.len() + hits);
    }
}
