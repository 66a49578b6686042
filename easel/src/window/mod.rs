use glam::IVec2;
use rustc_hash::FxHashSet;

pub mod scripted;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    WindowSizeChange { size: IVec2 },
    MouseMove { position: IVec2, modifiers: Modifiers },
    MouseButtonPress { button: MouseButton, position: IVec2, modifiers: Modifiers },
    MouseButtonRelease { button: MouseButton, position: IVec2, modifiers: Modifiers },
    KeyPress { key: Key, repeat: bool, modifiers: Modifiers },
    KeyRelease { key: Key, modifiers: Modifiers },
    WindowClose,
    Unknown,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Escape,
    Space,

    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,

    Key1,
    Key2,
    Key3,
    Key4,
    Key5,

    KeyR,

    #[default]
    Unknown,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Modifiers {
    pub control: bool,
    pub alt: bool,
    pub shift: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,

    #[default]
    Unknown,
}

/// Source of window events and pointer state, polled once per frame by the application loop.
pub trait InputSource {
    /// Called at the start of every frame, before the events are polled.
    fn begin_frame(&mut self);
    fn poll_event(&mut self) -> Option<InputEvent>;

    fn cursor_position(&self) -> IVec2;
    fn is_key_down(&self, key: Key) -> bool;
    fn is_button_down(&self, button: MouseButton) -> bool;

    fn close(&mut self);
    fn is_closed(&self) -> bool;
}

/// Held keys, held buttons and the last known pointer position, derived from the event stream.
#[derive(Debug, Default)]
pub struct InputState {
    pub cursor_position: IVec2,
    pub keys: FxHashSet<Key>,
    pub buttons: FxHashSet<MouseButton>,
}

impl InputState {
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::MouseMove { position, .. } => self.cursor_position = position,
            InputEvent::MouseButtonPress { button, position, .. } => {
                self.cursor_position = position;
                self.buttons.insert(button);
            }
            InputEvent::MouseButtonRelease { button, position, .. } => {
                self.cursor_position = position;
                self.buttons.remove(&button);
            }
            InputEvent::KeyPress { key, .. } => {
                self.keys.insert(key);
            }
            InputEvent::KeyRelease { key, .. } => {
                self.keys.remove(&key);
            }
            _ => {}
        }
    }
}
