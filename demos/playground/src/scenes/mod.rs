use crate::config::ConfigData;
use easel::app::ApplicationState;
use easel::scene::FrameCommand;
use easel::window::InputEvent;
use easel::window::Key;

pub mod fourier;
pub mod line;
pub mod raycast;
pub mod rotation;
pub mod shooter;

pub const SCENES: [&str; 5] = ["raycast", "line", "fourier", "shooter", "rotation"];

/// Fixed step used by scenes updated in [easel::scene::Scene::fixed], matches the application timestep.
pub const FIXED_DELTA: f32 = 1.0 / 60.0;

#[derive(Default)]
pub struct GlobalData {
    pub config: ConfigData,
    pub stats: Statistics,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Statistics {
    pub polygons_spawned: u32,
    pub rays_cast: u64,
    pub bullets_fired: u32,
    pub scene_changes: u32,
}

/// Keys shared by every scene: 1-5 switch scenes, R resets the current one and Escape closes the window.
pub fn process_hotkeys(state: &mut ApplicationState<GlobalData>, event: InputEvent) -> Option<FrameCommand> {
    let key = match event {
        InputEvent::KeyPress { key, repeat: false, .. } => key,
        _ => return None,
    };

    let index = match key {
        Key::Escape => {
            state.window.close();
            return None;
        }
        Key::KeyR => return Some(FrameCommand::ResetScene),
        Key::Key1 => 0,
        Key::Key2 => 1,
        Key::Key3 => 2,
        Key::Key4 => 3,
        Key::Key5 => 4,
        _ => return None,
    };

    state.global.stats.scene_changes += 1;
    Some(FrameCommand::ChangeScene { name: SCENES[index].to_string() })
}
