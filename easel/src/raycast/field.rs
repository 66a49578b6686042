use super::debug::RaycastDebugSettings;
use super::Ray;
use super::TrimMode;
use crate::geometry::polygon::Polygon;
use crate::geometry::Segment;
use glam::Vec2;

/// Casts rays from a light source towards fixed boundary targets and every polygon vertex,
/// trimming each one at the polygon edges it crosses. Holds configuration only, every call starts from scratch.
#[derive(Debug, Default)]
pub struct RayIntersectionField {
    pub trim_mode: TrimMode,
    pub debug: RaycastDebugSettings,
}

impl RayIntersectionField {
    pub fn new(trim_mode: TrimMode) -> Self {
        Self { trim_mode, ..Default::default() }
    }

    /// Boundary targets for a viewport: top-left, top-right, bottom-left and bottom-right corners.
    pub fn viewport_corners(size: Vec2) -> [Vec2; 4] {
        [Vec2::new(0.0, 0.0), Vec2::new(size.x, 0.0), Vec2::new(0.0, size.y), Vec2::new(size.x, size.y)]
    }

    pub fn compute(&self, origin: Vec2, boundary: &[Vec2], polygons: &[Polygon]) -> Vec<Segment> {
        self.cast(origin, boundary, polygons).iter().map(|p| p.segment()).collect()
    }

    /// Rays in output order: boundary targets first, then the vertices of every polygon.
    pub fn cast(&self, origin: Vec2, boundary: &[Vec2], polygons: &[Polygon]) -> Vec<Ray> {
        let vertices_count = polygons.iter().map(|p| p.len()).sum::<usize>();
        let mut rays = Vec::with_capacity(boundary.len() + vertices_count);

        rays.extend(boundary.iter().map(|target| Ray::new(origin, *target)));
        for polygon in polygons {
            rays.extend(polygon.vertices().iter().map(|vertex| Ray::new(origin, *vertex)));
        }

        for polygon in polygons {
            for edge in polygon.edges() {
                for ray in &mut rays {
                    // Nearest compares against the untrimmed ray, last processed against what is left of it
                    let segment = match self.trim_mode {
                        TrimMode::Nearest => ray.cast_segment(),
                        TrimMode::LastProcessed => ray.segment(),
                    };

                    let point = match edge.intersection_point(&segment) {
                        Some(point) => point,
                        None => continue,
                    };

                    let distance = point.distance(origin);
                    match self.trim_mode {
                        TrimMode::Nearest => {
                            if !ray.hit || distance < ray.length() {
                                ray.trim(distance);
                            }
                        }
                        TrimMode::LastProcessed => ray.trim(distance),
                    }
                }
            }
        }

        rays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::math;

    const EPSILON: f32 = 1e-4;

    fn slab() -> Polygon {
        // Edges in order: x = 5 (crossed), top, x = 7 (crossed), bottom
        Polygon::new(vec![Vec2::new(5.0, -1.0), Vec2::new(5.0, 1.0), Vec2::new(7.0, 1.0), Vec2::new(7.0, -1.0)]).unwrap()
    }

    #[test]
    fn ray_is_trimmed_at_crossed_edge() {
        let field = RayIntersectionField::default();
        let edge = Polygon::new(vec![Vec2::new(5.0, -1.0), Vec2::new(5.0, 1.0), Vec2::new(6.0, 3.0)]).unwrap();

        let rays = field.cast(Vec2::ZERO, &[Vec2::new(10.0, 0.0)], &[edge]);

        assert!(rays[0].hit);
        assert!((rays[0].end - Vec2::new(5.0, 0.0)).length() < EPSILON);
        assert!((rays[0].length() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn no_polygons_yield_untrimmed_boundary_rays() {
        let field = RayIntersectionField::default();
        let origin = Vec2::new(200.0, 300.0);
        let corners = RayIntersectionField::viewport_corners(Vec2::new(800.0, 800.0));

        let segments = field.compute(origin, &corners, &[]);

        assert_eq!(segments.len(), 4);
        for (segment, corner) in segments.iter().zip(corners) {
            assert_eq!(segment.a, origin);
            assert_eq!(segment.b, corner);
            assert_eq!(segment.length(), origin.distance(corner));
        }
    }

    #[test]
    fn trimming_does_not_persist_between_calls() {
        let field = RayIntersectionField::default();
        let boundary = [Vec2::new(10.0, 0.0)];

        let trimmed = field.compute(Vec2::ZERO, &boundary, &[slab()]);
        assert!((trimmed[0].length() - 5.0).abs() < EPSILON);

        let untrimmed = field.compute(Vec2::ZERO, &boundary, &[]);
        assert_eq!(untrimmed.len(), 1);
        assert_eq!(untrimmed[0].length(), 10.0);
    }

    #[test]
    fn every_polygon_vertex_adds_one_ray() {
        let field = RayIntersectionField::default();
        let corners = RayIntersectionField::viewport_corners(Vec2::new(800.0, 800.0));
        let origin = Vec2::new(400.0, 400.0);

        let mut polygons = vec![Polygon::new_regular(Vec2::new(100.0, 100.0), 30.0, 5).unwrap()];
        assert_eq!(field.compute(origin, &corners, &polygons).len(), 4 + 5);

        polygons.push(Polygon::new_regular(Vec2::new(600.0, 200.0), 50.0, 7).unwrap());
        let rays = field.cast(origin, &corners, &polygons);
        assert_eq!(rays.len(), 4 + 5 + 7);
        assert_eq!(rays[4].target, polygons[0].vertices()[0]);
        assert_eq!(rays[9].target, polygons[1].vertices()[0]);
        assert!(rays.iter().all(|p| p.origin == origin));
    }

    #[test]
    fn nearest_mode_keeps_closest_crossing() {
        let field = RayIntersectionField::new(TrimMode::Nearest);
        let rays = field.cast(Vec2::ZERO, &[Vec2::new(10.0, 0.0)], &[slab()]);

        assert!((rays[0].length() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn last_processed_mode_stops_at_first_edge_of_slab() {
        let field = RayIntersectionField::new(TrimMode::LastProcessed);
        let rays = field.cast(Vec2::ZERO, &[Vec2::new(10.0, 0.0)], &[slab()]);

        // Once trimmed at x = 5, the ray no longer reaches the edge at x = 7
        assert!((rays[0].length() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn last_processed_mode_lets_later_nearer_edges_trim_further() {
        let field = RayIntersectionField::new(TrimMode::LastProcessed);
        let near = Polygon::new(vec![Vec2::new(3.0, -1.0), Vec2::new(3.0, 1.0), Vec2::new(4.0, 1.0)]).unwrap();
        let far = Polygon::new(vec![Vec2::new(8.0, -1.0), Vec2::new(8.0, 1.0), Vec2::new(9.0, 1.0)]).unwrap();

        let far_first = field.cast(Vec2::ZERO, &[Vec2::new(10.0, 0.0)], &[far.clone(), near.clone()]);
        let near_first = field.cast(Vec2::ZERO, &[Vec2::new(10.0, 0.0)], &[near, far]);

        assert!((far_first[0].length() - 3.0).abs() < EPSILON);
        assert!((near_first[0].length() - 3.0).abs() < EPSILON);
    }

    /// Edge by edge trimming where every test uses the ray as already shortened by the previous edges.
    fn sequential_trim(origin: Vec2, boundary: &[Vec2], polygons: &[Polygon]) -> Vec<Vec2> {
        let mut targets = boundary.to_vec();
        for polygon in polygons {
            targets.extend_from_slice(polygon.vertices());
        }

        let mut ends = targets.clone();
        for polygon in polygons {
            for edge in polygon.edges() {
                for (target, end) in targets.iter().zip(ends.iter_mut()) {
                    if !math::intersection(edge.a, edge.b, origin, *end) {
                        continue;
                    }

                    if let Some(point) = math::point_intersection(edge.a, edge.b, origin, *end) {
                        let distance = point.distance(origin).min(origin.distance(*target));
                        *end = origin + (*target - origin).normalize_or_zero() * distance;
                    }
                }
            }
        }

        ends
    }

    #[test]
    fn last_processed_mode_matches_sequential_trimming() {
        let field = RayIntersectionField::new(TrimMode::LastProcessed);
        let corners = RayIntersectionField::viewport_corners(Vec2::new(800.0, 800.0));
        let origin = Vec2::new(420.0, 380.0);
        let polygons = vec![
            slab(),
            Polygon::new_regular(Vec2::new(300.0, 300.0), 80.0, 6).unwrap(),
            Polygon::new_regular(Vec2::new(500.0, 600.0), 40.0, 3).unwrap(),
            Polygon::new_regular(Vec2::new(650.0, 150.0), 110.0, 9).unwrap(),
            Polygon::new_regular(Vec2::new(200.0, 200.0), 60.0, 4).unwrap(),
        ];

        let rays = field.cast(origin, &corners, &polygons);
        let expected = sequential_trim(origin, &corners, &polygons);

        assert_eq!(rays.len(), expected.len());
        for (ray, end) in rays.iter().zip(expected) {
            assert!((ray.end - end).length() < EPSILON);
        }
    }

    #[test]
    fn light_on_an_edge_passes_through_it() {
        let boundary = [Vec2::new(10.0, 0.0)];

        for mode in [TrimMode::Nearest, TrimMode::LastProcessed] {
            let field = RayIntersectionField::new(mode);
            let rays = field.cast(Vec2::new(5.0, 0.0), &boundary, &[slab()]);

            // The edge at x = 5 holds the origin, so the strict test only registers the edge at x = 7
            assert!(rays[0].hit);
            assert!((rays[0].end - Vec2::new(7.0, 0.0)).length() < EPSILON);
        }
    }

    #[test]
    fn nearest_mode_ignores_polygon_order() {
        let field = RayIntersectionField::default();
        let near = Polygon::new(vec![Vec2::new(3.0, -1.0), Vec2::new(3.0, 1.0), Vec2::new(4.0, 1.0)]).unwrap();
        let far = Polygon::new(vec![Vec2::new(8.0, -1.0), Vec2::new(8.0, 1.0), Vec2::new(9.0, 1.0)]).unwrap();

        let forward = field.cast(Vec2::ZERO, &[Vec2::new(10.0, 0.0)], &[near.clone(), far.clone()]);
        let backward = field.cast(Vec2::ZERO, &[Vec2::new(10.0, 0.0)], &[far, near]);

        assert!((forward[0].length() - 3.0).abs() < EPSILON);
        assert!((backward[0].length() - 3.0).abs() < EPSILON);
    }

    #[test]
    fn trimmed_rays_never_grow() {
        let field = RayIntersectionField::new(TrimMode::LastProcessed);
        let corners = RayIntersectionField::viewport_corners(Vec2::new(800.0, 800.0));
        let polygons = vec![
            Polygon::new_regular(Vec2::new(300.0, 300.0), 80.0, 6).unwrap(),
            Polygon::new_regular(Vec2::new(500.0, 600.0), 40.0, 3).unwrap(),
            Polygon::new_regular(Vec2::new(650.0, 150.0), 110.0, 9).unwrap(),
        ];

        for ray in field.cast(Vec2::new(420.0, 380.0), &corners, &polygons) {
            assert!(ray.length() <= ray.cast_length() + EPSILON);
            assert!(ray.direction().dot(ray.end - ray.origin) >= -EPSILON);
        }
    }
}
