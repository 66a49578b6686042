use super::process_hotkeys;
use super::GlobalData;
use super::FIXED_DELTA;
use easel::anyhow::Result;
use easel::app::ApplicationState;
use easel::glam::Vec2;
use easel::glam::Vec3;
use easel::glam::Vec4;
use easel::rotation::EulerAngles;
use easel::scene::FrameCommand;
use easel::scene::Scene;
use easel::window::InputEvent;
use easel::window::InputSource;
use easel::window::Key;
use log::info;

const TURN_SPEED: f32 = 1.5;
const ROLL_SPEED: f32 = 0.5;

const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

const CUBE_EDGES: [(usize, usize); 12] = [(0, 1), (1, 2), (2, 3), (3, 0), (4, 5), (5, 6), (6, 7), (7, 4), (0, 4), (1, 5), (2, 6), (3, 7)];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RotationMode {
    #[default]
    Matrix,
    Quaternion,
}

/// Spinning wireframe cube, rotated either with the Euler matrix or with the equivalent quaternion.
#[derive(Default)]
pub struct RotationScene {
    pub angles: EulerAngles,
    pub mode: RotationMode,
    command: Option<FrameCommand>,
}

impl RotationScene {
    /// Cube vertices after rotation, projected orthographically onto the viewport with y pointing up.
    pub fn projected_vertices(&self, viewport_size: Vec2) -> [Vec2; 8] {
        let center = viewport_size / 2.0;
        let scale = viewport_size.min_element() / 4.0;

        let matrix = self.angles.to_matrix();
        let quaternion = self.angles.to_quaternion();

        CUBE_VERTICES.map(|vertex| {
            let rotated = match self.mode {
                RotationMode::Matrix => matrix.transform_point3(vertex),
                RotationMode::Quaternion => quaternion * vertex,
            };

            center + Vec2::new(rotated.x, -rotated.y) * scale
        })
    }

    fn turn(&mut self, window: &dyn InputSource) {
        if window.is_key_down(Key::ArrowLeft) {
            self.angles.yaw -= TURN_SPEED * FIXED_DELTA;
        }
        if window.is_key_down(Key::ArrowRight) {
            self.angles.yaw += TURN_SPEED * FIXED_DELTA;
        }
        if window.is_key_down(Key::ArrowUp) {
            self.angles.pitch -= TURN_SPEED * FIXED_DELTA;
        }
        if window.is_key_down(Key::ArrowDown) {
            self.angles.pitch += TURN_SPEED * FIXED_DELTA;
        }

        self.angles.roll += ROLL_SPEED * FIXED_DELTA;

        // Quaternion mode keeps the angles in their canonical range by going through the quaternion
        if self.mode == RotationMode::Quaternion {
            self.angles = EulerAngles::from_quaternion(self.angles.to_quaternion());
        }
    }
}

impl Scene<GlobalData> for RotationScene {
    fn activation(&mut self, _: ApplicationState<GlobalData>) -> Result<()> {
        Ok(())
    }

    fn deactivation(&mut self, _: ApplicationState<GlobalData>) -> Result<()> {
        let (roll, pitch, yaw) = self.angles.to_degrees();
        info!("Cube left at roll {:.1}, pitch {:.1}, yaw {:.1}", roll, pitch, yaw);

        Ok(())
    }

    fn input(&mut self, mut state: ApplicationState<GlobalData>, event: InputEvent) -> Result<()> {
        if let InputEvent::KeyPress { key: Key::Space, repeat: false, .. } = event {
            self.mode = match self.mode {
                RotationMode::Matrix => RotationMode::Quaternion,
                RotationMode::Quaternion => RotationMode::Matrix,
            };
        } else if let Some(command) = process_hotkeys(&mut state, event) {
            self.command = Some(command);
        }

        Ok(())
    }

    fn fixed(&mut self, state: ApplicationState<GlobalData>) -> Result<Option<FrameCommand>> {
        self.turn(state.window);
        Ok(None)
    }

    fn frame(&mut self, state: ApplicationState<GlobalData>, _: f32, _: f32) -> Result<Option<FrameCommand>> {
        let vertices = self.projected_vertices(state.renderer.viewport_size());
        let color = match self.mode {
            RotationMode::Matrix => Vec4::new(0.0, 0.0, 0.0, 1.0),
            RotationMode::Quaternion => Vec4::new(0.0, 0.0, 1.0, 1.0),
        };

        for (from, to) in CUBE_EDGES {
            state.renderer.draw_line(vertices[from], vertices[to], color);
        }

        Ok(self.command.take())
    }

    fn reset(&self) -> Box<dyn Scene<GlobalData>> {
        Box::<RotationScene>::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::tests::key_press;
    use crate::scenes::tests::Harness;
    use easel::renderer::Renderer;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn matrix_and_quaternion_project_the_same_cube() {
        let viewport = Vec2::new(800.0, 600.0);
        let mut scene = RotationScene { angles: EulerAngles::from_degrees(30.0, -20.0, 75.0), ..Default::default() };

        let matrix = scene.projected_vertices(viewport);
        scene.mode = RotationMode::Quaternion;
        let quaternion = scene.projected_vertices(viewport);

        for (a, b) in matrix.iter().zip(quaternion.iter()) {
            assert!((*a - *b).length() < EPSILON);
        }
    }

    #[test]
    fn unrotated_cube_is_centered() {
        let scene = RotationScene::default();
        let vertices = scene.projected_vertices(Vec2::new(800.0, 800.0));

        assert_eq!(vertices[0], Vec2::new(200.0, 600.0));
        assert_eq!(vertices[6], Vec2::new(600.0, 200.0));
    }

    #[test]
    fn arrows_turn_the_cube_and_every_edge_is_drawn() {
        let mut harness = Harness::new();
        let mut scene = RotationScene::default();

        for event in harness.feed(vec![key_press(Key::ArrowRight), key_press(Key::Space)]) {
            scene.input(harness.state(), event).unwrap();
        }
        scene.fixed(harness.state()).unwrap();

        assert_eq!(scene.mode, RotationMode::Quaternion);
        assert!((scene.angles.yaw - TURN_SPEED * FIXED_DELTA).abs() < EPSILON);
        assert!((scene.angles.roll - ROLL_SPEED * FIXED_DELTA).abs() < EPSILON);

        harness.renderer.begin_frame(Vec4::ONE);
        scene.frame(harness.state(), 0.0, 0.0).unwrap();
        harness.renderer.end_frame();

        assert_eq!(harness.renderer.lines().count(), CUBE_EDGES.len());
    }
}
