use glam::Vec2;

/// Raw input pushed by the host page: canvas coordinates and DOM key codes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
    /// Host-defined event; `kind` selects the meaning of `a`, `b`, `c`.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl InputEvent {
    /// Canvas position of a pointer event.
    pub fn position(&self) -> Option<Vec2> {
        match *self {
            InputEvent::PointerDown { x, y }
            | InputEvent::PointerUp { x, y }
            | InputEvent::PointerMove { x, y } => Some(Vec2::new(x, y)),
            _ => None,
        }
    }
}

/// Events received between two frames, in arrival order.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take everything received since the last frame.
    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_arrival_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 88 });
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        assert_eq!(q.len(), 2);
        let events: Vec<_> = q.drain().collect();
        assert_eq!(events[0], InputEvent::KeyDown { key_code: 88 });
        assert!(q.is_empty());
    }

    #[test]
    fn only_pointer_events_have_positions() {
        assert_eq!(InputEvent::PointerMove { x: 1.0, y: 2.0 }.position(), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(InputEvent::KeyUp { key_code: 37 }.position(), None);
    }
}
