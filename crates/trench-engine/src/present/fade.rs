use crate::core::time::Timer;
use crate::renderer::command::{Color, DrawCommand, RenderBuffer};

/// Triangular opacity envelope: rises to 0.5 at the midpoint, then back to 0.
#[inline]
pub fn envelope(progress: f32) -> f32 {
    if progress <= 0.5 {
        progress
    } else {
        1.0 - progress
    }
}

/// Look of a fade transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeStyle {
    pub duration_ms: f64,
    /// Solid colour the canvas is cleared to.
    pub backdrop: Color,
    /// Overlay colour blended at the envelope alpha.
    pub flash: Color,
}

impl Default for FadeStyle {
    fn default() -> Self {
        Self {
            duration_ms: 500.0,
            backdrop: Color::rgb(0, 0, 0),
            flash: Color::rgb(255, 255, 255),
        }
    }
}

/// A timed flash shown in place of a pending slide.
#[derive(Debug, Clone)]
pub struct Fade {
    timer: Timer,
    style: FadeStyle,
}

impl Fade {
    pub fn new(style: FadeStyle, now: f64) -> Self {
        Self {
            timer: Timer::new(style.duration_ms, now),
            style,
        }
    }

    pub fn update(&mut self, now: f64) {
        self.timer.update(now);
    }

    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    pub fn alpha(&self) -> f32 {
        envelope(self.timer.progress())
    }

    pub fn is_complete(&self) -> bool {
        self.timer.is_elapsed()
    }

    pub fn render(&self, buf: &mut RenderBuffer, width: f32, height: f32) {
        buf.push(DrawCommand::Clear { color: self.style.backdrop });
        buf.push(DrawCommand::Save);
        buf.push(DrawCommand::Alpha { value: self.alpha() });
        buf.fill_rect(0.0, 0.0, width, height, self.style.flash);
        buf.push(DrawCommand::Restore);
    }
}
