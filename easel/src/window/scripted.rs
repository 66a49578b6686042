use super::InputEvent;
use super::InputSource;
use super::InputState;
use super::Key;
use super::MouseButton;
use glam::IVec2;
use log::info;
use std::collections::VecDeque;

/// Headless input source replaying a prepared list of events, one batch per frame.
/// When the script runs out, a [InputEvent::WindowClose] is emitted.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
    queue: VecDeque<InputEvent>,
    state: InputState,
    closed: bool,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self { frames: frames.into(), ..Default::default() }
    }

    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }

    pub fn remaining_frames(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn begin_frame(&mut self) {
        match self.frames.pop_front() {
            Some(events) => self.queue.extend(events),
            None => {
                if !self.closed {
                    info!("Input script finished");
                }

                self.queue.push_back(InputEvent::WindowClose);
            }
        }
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        let event = self.queue.pop_front()?;
        self.state.apply(&event);

        if event == InputEvent::WindowClose {
            self.closed = true;
        }

        Some(event)
    }

    fn cursor_position(&self) -> IVec2 {
        self.state.cursor_position
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.state.keys.contains(&key)
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        self.state.buttons.contains(&button)
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
