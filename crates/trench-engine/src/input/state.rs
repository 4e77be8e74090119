use std::collections::HashSet;

use glam::Vec2;

use super::queue::InputEvent;

/// Held-state view of the input stream, rebuilt incrementally each frame
/// from the drained `InputQueue`.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys_down: HashSet<u32>,
    pointer: Vec2,
    pointer_down: bool,
    /// Where the pointer went down this frame, if it did.
    press: Option<Vec2>,
    /// Custom events received this frame.
    custom: Vec<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the held state.
    pub fn apply(&mut self, event: &InputEvent) {
        if let Some(position) = event.position() {
            self.pointer = position;
        }
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.pointer_down = true;
                self.press = Some(Vec2::new(x, y));
            }
            InputEvent::PointerUp { .. } => self.pointer_down = false,
            InputEvent::PointerMove { .. } => {}
            InputEvent::KeyDown { key_code } => {
                self.keys_down.insert(key_code);
            }
            InputEvent::KeyUp { key_code } => {
                self.keys_down.remove(&key_code);
            }
            InputEvent::Custom { .. } => self.custom.push(*event),
        }
    }

    /// Start a new frame: forget last frame's one-shot events.
    pub fn begin_frame(&mut self) {
        self.press = None;
        self.custom.clear();
    }

    /// Whether a key is currently held.
    pub fn key_pressed(&self, key_code: u32) -> bool {
        self.keys_down.contains(&key_code)
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// The pointer went down during this frame. Survives a release in the
    /// same frame, so a fast tap still counts.
    pub fn pointer_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Position of this frame's pointer-down.
    pub fn press_position(&self) -> Option<Vec2> {
        self.press
    }

    pub fn custom_events(&self) -> &[InputEvent] {
        &self.custom
    }
}
