use super::process_hotkeys;
use super::GlobalData;
use super::FIXED_DELTA;
use easel::anyhow::Result;
use easel::app::ApplicationState;
use easel::scene::FrameCommand;
use easel::scene::Scene;
use easel::shooter::Player;
use easel::shooter::PlayerControls;
use easel::window::InputEvent;
use easel::window::InputSource;
use easel::window::Key;
use easel::window::MouseButton;

/// Player steered with the arrow keys, firing bullets towards the pointer while the left button is held.
#[derive(Default)]
pub struct ShooterScene {
    pub player: Option<Player>,
    command: Option<FrameCommand>,
}

fn read_controls(window: &dyn InputSource) -> PlayerControls {
    PlayerControls {
        left: window.is_key_down(Key::ArrowLeft),
        right: window.is_key_down(Key::ArrowRight),
        up: window.is_key_down(Key::ArrowUp),
        down: window.is_key_down(Key::ArrowDown),
        fire: window.is_button_down(MouseButton::Left),
    }
}

impl Scene<GlobalData> for ShooterScene {
    fn activation(&mut self, state: ApplicationState<GlobalData>) -> Result<()> {
        self.player = Some(Player::new(state.renderer.viewport_size() / 2.0));
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

    fn fixed(&mut self, state: ApplicationState<GlobalData>) -> Result<Option<FrameCommand>> {
        let controls = read_controls(state.window);
        let pointer = state.window.cursor_position().as_vec2();
        let viewport = state.renderer.viewport_size();

        if let Some(player) = &mut self.player {
            player.update(controls, pointer, FIXED_DELTA, viewport);

            if controls.fire {
                state.global.stats.bullets_fired += 1;
            }
        }

        Ok(None)
    }

    fn frame(&mut self, state: ApplicationState<GlobalData>, _: f32, _: f32) -> Result<Option<FrameCommand>> {
        if let Some(player) = &self.player {
            player.draw(state.renderer)?;
        }

        Ok(self.command.take())
    }

    fn reset(&self) -> Box<dyn Scene<GlobalData>> {
        Box::<ShooterScene>::default()
    }
}
