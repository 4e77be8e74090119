use glam::Vec2;

use super::state::InputState;

/// Approximate glyph advance as a fraction of the font size, used to size
/// text buttons without font metrics.
const GLYPH_ADVANCE: f32 = 0.6;

/// A clickable rectangular widget with hover/press/disabled flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
    /// Top-left corner in canvas coordinates.
    pub pos: Vec2,
    pub size: Vec2,
    pub hovered: bool,
    /// Set by a pointer-down that lands on the enabled button and held until
    /// the pointer is released.
    pub pressed: bool,
    pub disabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, pos: Vec2, size: Vec2) -> Self {
        Self {
            label: label.into(),
            pos,
            size,
            hovered: false,
            pressed: false,
            disabled: false,
        }
    }

    /// A text button anchored at its top-left corner, sized from the label.
    pub fn text(label: impl Into<String>, pos: Vec2, font_size: f32) -> Self {
        let label = label.into();
        let width = label.chars().count() as f32 * font_size * GLYPH_ADVANCE;
        Self::new(label, pos, Vec2::new(width, font_size))
    }

    /// A square button of side `2 * radius` centred on `center`.
    pub fn centered(label: impl Into<String>, center: Vec2, radius: f32) -> Self {
        Self::new(label, center - Vec2::splat(radius), Vec2::splat(radius * 2.0))
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.y >= self.pos.y
            && point.x <= self.pos.x + self.size.x
            && point.y <= self.pos.y + self.size.y
    }

    /// Refresh hover/press flags from the current input state.
    ///
    /// Only a pointer-down seen by this button starts a press. A pointer that
    /// was already held when the button appeared never presses it.
    pub fn update(&mut self, input: &InputState) {
        self.hovered = self.contains(input.pointer());
        if self.disabled {
            self.pressed = false;
            return;
        }
        match input.press_position() {
            Some(at) => self.pressed = self.contains(at),
            None => self.pressed &= input.pointer_down(),
        }
    }
}
