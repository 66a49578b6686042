use super::process_hotkeys;
use super::GlobalData;
use super::FIXED_DELTA;
use easel::anyhow::Result;
use easel::app::ApplicationState;
use easel::fourier::CircleArms;
use easel::glam::Vec2;
use easel::scene::FrameCommand;
use easel::scene::Scene;
use easel::window::InputEvent;

const RADIUS: f32 = 100.0;

#[derive(Default)]
pub struct FourierScene {
    pub arms: Option<CircleArms>,
    command: Option<FrameCommand>,
}

impl Scene<GlobalData> for FourierScene {
    fn activation(&mut self, state: ApplicationState<GlobalData>) -> Result<()> {
        let viewport = state.renderer.viewport_size();
        let config = &state.global.config;
        let anchor = Vec2::new(viewport.x / 5.0 + RADIUS / 2.0, viewport.y / 2.0);

        let mut arms = CircleArms::new(config.arms, RADIUS, anchor, config.seed);
        arms.wave_end_x = viewport.x;

        self.arms = Some(arms);
        Ok(())
    }

    fn deactivation(&mut self, _: ApplicationState<GlobalData>) -> Result<()> {
        Ok(())
    }

    fn input(&mut self, mut state: ApplicationState<GlobalData>, event: InputEvent) -> Result<()> {
        if let Some(command) = process_hotkeys(&mut state, event) {
            self.command = Some(command);
        }

        Ok(())
    }

    fn fixed(&mut self, _: ApplicationState<GlobalData>) -> Result<Option<FrameCommand>> {
        if let Some(arms) = &mut self.arms {
            arms.update(FIXED_DELTA);
        }

        Ok(None)
    }

    fn frame(&mut self, state: ApplicationState<GlobalData>, _: f32, _: f32) -> Result<Option<FrameCommand>> {
        if let Some(arms) = &self.arms {
            arms.draw(state.renderer)?;
        }

        Ok(self.command.take())
    }

    fn reset(&self) -> Box<dyn Scene<GlobalData>> {
        Box::<FourierScene>::default()
    }
}
