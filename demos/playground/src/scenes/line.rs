use super::process_hotkeys;
use super::GlobalData;
use easel::anyhow::Result;
use easel::app::ApplicationState;
use easel::glam::Vec4;
use easel::line::StraightLine;
use easel::scene::FrameCommand;
use easel::scene::Scene;
use easel::window::InputEvent;
use easel::window::Key;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ExtensionMode {
    #[default]
    Trigonometric,
    Linear,
}

/// Line from the viewport center through the pointer, Space switches between both ways of extending it.
#[derive(Default)]
pub struct LineScene {
    pub mode: ExtensionMode,
    command: Option<FrameCommand>,
}

impl Scene<GlobalData> for LineScene {
    fn activation(&mut self, _: ApplicationState<GlobalData>) -> Result<()> {
        Ok(())
    }

    fn deactivation(&mut self, _: ApplicationState<GlobalData>) -> Result<()> {
        Ok(())
    }

    fn input(&mut self, mut state: ApplicationState<GlobalData>, event: InputEvent) -> Result<()> {
        if let InputEvent::KeyPress { key: Key::Space, repeat: false, .. } = event {
            self.mode = match self.mode {
                ExtensionMode::Trigonometric => ExtensionMode::Linear,
                ExtensionMode::Linear => ExtensionMode::Trigonometric,
            };
        } else if let Some(command) = process_hotkeys(&mut state, event) {
            self.command = Some(command);
        }

        Ok(())
    }

    fn fixed(&mut self, _: ApplicationState<GlobalData>) -> Result<Option<FrameCommand>> {
        Ok(None)
    }

    fn frame(&mut self, state: ApplicationState<GlobalData>, _: f32, _: f32) -> Result<Option<FrameCommand>> {
        let line = StraightLine::new(state.renderer.viewport_size());
        let pointer = state.window.cursor_position().as_vec2();

        // Pointer exactly on the anchor has no direction to extend in
        if pointer != line.anchor() {
            let end = match self.mode {
                ExtensionMode::Trigonometric => line.extend_trigonometric(pointer),
                ExtensionMode::Linear => line.extend_linear(pointer),
            };

            state.renderer.draw_line(line.anchor(), end, state.global.config.ray_color);
        }

        state.renderer.draw_line(line.anchor(), pointer, Vec4::new(0.0, 0.0, 0.0, 1.0));
        Ok(self.command.take())
    }

    fn reset(&self) -> Box<dyn Scene<GlobalData>> {
        Box::<LineScene>::default()
    }
}
