use super::process_hotkeys;
use super::GlobalData;
use easel::anyhow::Result;
use easel::app::ApplicationState;
use easel::geometry::polygon::Polygon;
use easel::geometry::spawner::PolygonSpawner;
use easel::raycast::field::RayIntersectionField;
use easel::scene::FrameCommand;
use easel::scene::Scene;
use easel::window::InputEvent;
use easel::window::Key;
use easel::window::MouseButton;
use log::info;

const LIGHT_RADIUS: f32 = 6.0;
const LIGHT_SIDES: u32 = 12;

/// Light source following the pointer, with a new polygon spawned on every left click.
#[derive(Default)]
pub struct RaycastScene {
    pub polygons: Vec<Polygon>,
    pub last_rays_count: usize,

    field: RayIntersectionField,
    spawner: Option<PolygonSpawner>,
    command: Option<FrameCommand>,
}

impl Scene<GlobalData> for RaycastScene {
    fn activation(&mut self, state: ApplicationState<GlobalData>) -> Result<()> {
        // Coming back from another scene keeps the spawner sequence and the debug toggle
        if self.spawner.is_some() {
            return Ok(());
        }

        let config = &state.global.config;

        self.field = RayIntersectionField::new(config.trim_mode);
        self.field.debug.enabled = config.debug;
        self.field.debug.ray_color = config.ray_color;
        self.spawner = Some(PolygonSpawner::new(config.seed));

        info!("Raycasting with {:?} trimming", config.trim_mode);
        Ok(())
    }

    fn deactivation(&mut self, _: ApplicationState<GlobalData>) -> Result<()> {
        Ok(())
    }

    fn input(&mut self, mut state: ApplicationState<GlobalData>, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::MouseButtonPress { button: MouseButton::Left, position, .. } => {
                if let Some(spawner) = &mut self.spawner {
                    self.polygons.push(spawner.spawn(position.as_vec2())?);
                    state.global.stats.polygons_spawned += 1;
                }
            }
            InputEvent::KeyPress { key: Key::Space, repeat: false, .. } => {
                self.field.debug.enabled = !self.field.debug.enabled;
            }
            _ => {
                if let Some(command) = process_hotkeys(&mut state, event) {
                    self.command = Some(command);
                }
            }
        }

        Ok(())
    }

    fn fixed(&mut self, _: ApplicationState<GlobalData>) -> Result<Option<FrameCommand>> {
        Ok(None)
    }

    fn frame(&mut self, state: ApplicationState<GlobalData>, _: f32, _: f32) -> Result<Option<FrameCommand>> {
        let origin = state.window.cursor_position().as_vec2();
        let corners = RayIntersectionField::viewport_corners(state.renderer.viewport_size());
        let rays = self.field.cast(origin, &corners, &self.polygons);

        self.field.draw(&mut *state.renderer, &self.polygons, &rays);

        let light = Polygon::new_regular(origin, LIGHT_RADIUS, LIGHT_SIDES)?;
        state.renderer.draw_polygon(light.vertices(), self.field.debug.ray_color, self.field.debug.ray_color);

        self.last_rays_count = rays.len();
        state.global.stats.rays_cast += rays.len() as u64;

        Ok(self.command.take())
    }

    fn reset(&self) -> Box<dyn Scene<GlobalData>> {
        Box::<RaycastScene>::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::tests::key_press;
    use crate::scenes::tests::Harness;
    use easel::glam::IVec2;
    use easel::glam::Vec4;
    use easel::renderer::Renderer;
    use easel::window::Modifiers;

    fn click(position: IVec2) -> InputEvent {
        InputEvent::MouseButtonPress { button: MouseButton::Left, position, modifiers: Modifiers::default() }
    }

    fn run_frame(scene: &mut RaycastScene, harness: &mut Harness, events: Vec<InputEvent>) -> Option<FrameCommand> {
        for event in harness.feed(events) {
            scene.input(harness.state(), event).unwrap();
        }

        harness.renderer.begin_frame(Vec4::ONE);
        let command = scene.frame(harness.state(), 0.0, 0.0).unwrap();
        harness.renderer.end_frame();

        command
    }

    #[test]
    fn click_spawns_polygon_and_adds_rays() {
        let mut harness = Harness::new();
        let mut scene = RaycastScene::default();
        scene.activation(harness.state()).unwrap();

        run_frame(&mut scene, &mut harness, vec![]);
        assert_eq!(scene.last_rays_count, 4);

        run_frame(&mut scene, &mut harness, vec![click(IVec2::new(200, 200))]);
        assert_eq!(scene.polygons.len(), 1);
        assert_eq!(scene.last_rays_count, 4 + scene.polygons[0].len());
        assert_eq!(harness.global.stats.polygons_spawned, 1);
        assert_eq!(harness.renderer.lines().count(), scene.last_rays_count);
    }

    #[test]
    fn hotkeys_are_returned_from_frame() {
        let mut harness = Harness::new();
        let mut scene = RaycastScene::default();
        scene.activation(harness.state()).unwrap();

        let command = run_frame(&mut scene, &mut harness, vec![key_press(Key::Key2)]);
        assert_eq!(command, Some(FrameCommand::ChangeScene { name: "line".to_string() }));
        assert_eq!(run_frame(&mut scene, &mut harness, vec![]), None);
    }

    #[test]
    fn reactivation_continues_spawner_and_keeps_debug_toggle() {
        let mut harness = Harness::new();
        let mut scene = RaycastScene::default();
        let position = IVec2::new(200, 300);

        scene.activation(harness.state()).unwrap();
        run_frame(&mut scene, &mut harness, vec![click(position), key_press(Key::Space)]);
        assert!(scene.field.debug.enabled);

        scene.deactivation(harness.state()).unwrap();
        scene.activation(harness.state()).unwrap();
        run_frame(&mut scene, &mut harness, vec![click(position)]);

        let mut spawner = PolygonSpawner::new(harness.global.config.seed);
        let expected = vec![spawner.spawn(position.as_vec2()).unwrap(), spawner.spawn(position.as_vec2()).unwrap()];

        assert_eq!(scene.polygons, expected);
        assert!(scene.field.debug.enabled);
    }

    #[test]
    fn reset_scene_starts_from_config_again() {
        let mut harness = Harness::new();
        let mut scene = RaycastScene::default();

        scene.activation(harness.state()).unwrap();
        run_frame(&mut scene, &mut harness, vec![click(IVec2::new(200, 300)), key_press(Key::Space)]);

        let mut fresh = scene.reset();
        fresh.activation(harness.state()).unwrap();
        harness.renderer.begin_frame(Vec4::ONE);
        fresh.frame(harness.state(), 0.0, 0.0).unwrap();
        harness.renderer.end_frame();

        // No polygons and debug off again: only the four boundary rays are drawn
        assert_eq!(harness.renderer.lines().count(), 4);
    }

    #[test]
    fn same_seed_spawns_same_scene() {
        let spawn = || {
            let mut harness = Harness::new();
            let mut scene = RaycastScene::default();

            scene.activation(harness.state()).unwrap();
            run_frame(&mut scene, &mut harness, vec![click(IVec2::new(100, 100)), click(IVec2::new(600, 300))]);

            scene.polygons
        };

        let polygons = spawn();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons, spawn());
    }
}
