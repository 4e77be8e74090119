// slides/chrome.rs
//
// Palette, fonts and the drawing helpers shared by every screen: header
// band, window text, close button, HUD line, plus the gate views built
// from them.

use glam::Vec2;
use trench_engine::{Baseline, Button, Color, DrawCommand, GateStatus, GateView, RenderBuffer, RenderContext};

pub const BACKGROUND: Color = Color::rgb(132, 198, 105);
pub const OVERLAY: Color = Color::rgba(0, 0, 0, 0.15);
pub const LIGHT: Color = Color::rgb(251, 251, 251);
pub const DARK: Color = Color::rgb(51, 51, 51);
pub const RED: Color = Color::rgb(251, 51, 51);
pub const BLUE: Color = Color::rgb(105, 132, 198);

pub const FONT_SIZE: f32 = 14.0;
pub const LARGE_FONT_SIZE: f32 = 24.0;
pub const FONT: &str = "bold italic 14px Arial, sans-serif";
pub const LARGE_FONT: &str = "italic bold 24px Arial, sans-serif";
pub const MARGIN: f32 = 7.0;
pub const LINE_HEIGHT: f32 = 1.2;

pub fn clear(buf: &mut RenderBuffer) {
    buf.push(DrawCommand::Clear { color: BACKGROUND });
}

/// Darkened band across the top fifth of the canvas.
pub fn header(buf: &mut RenderBuffer, width: f32, height: f32) {
    buf.fill_rect(0.0, 0.0, width, height / 5.0, OVERLAY);
}

/// The "x" button in the top-right corner.
pub fn close_button(width: f32) -> Button {
    Button::text("x", Vec2::new(width - (FONT_SIZE + MARGIN), MARGIN), FONT_SIZE)
}

/// Draw a text button: red when hovered, dark when disabled, light otherwise.
pub fn text_button(buf: &mut RenderBuffer, button: &Button) {
    let color = if button.disabled {
        DARK
    } else if button.hovered {
        RED
    } else {
        LIGHT
    };
    if button.hovered {
        buf.pointer_cursor = true;
    }
    buf.text(button.label.as_str(), button.pos, FONT, color, Baseline::Top);
}

/// Multi-line body text below the header.
pub fn window_text(buf: &mut RenderBuffer, text: &str, height: f32) {
    buf.push(DrawCommand::Save);
    buf.push(DrawCommand::Translate { x: MARGIN, y: height / 5.0 + FONT_SIZE });
    for (i, line) in text.lines().enumerate() {
        let y = i as f32 * FONT_SIZE * LINE_HEIGHT;
        buf.text(line, Vec2::new(0.0, y), FONT, LIGHT, Baseline::Alphabetic);
    }
    buf.push(DrawCommand::Restore);
}

/// Single-line status text in the header.
pub fn hud(buf: &mut RenderBuffer, text: impl Into<String>) {
    buf.text(text, Vec2::splat(MARGIN), FONT, LIGHT, Baseline::Top);
}

/// Draw buttons with a per-button vertical offset.
pub fn jittered_buttons(buf: &mut RenderBuffer, buttons: &[Button], jitter: &[f32]) {
    for (button, dy) in buttons.iter().zip(jitter) {
        buf.push(DrawCommand::Save);
        buf.push(DrawCommand::Translate { x: 0.0, y: *dy });
        text_button(buf, button);
        buf.push(DrawCommand::Restore);
    }
}

/// A header window with body text. Button 0 is the close button.
pub struct WindowView {
    text: String,
    progress_bar: bool,
}

impl WindowView {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), progress_bar: false }
    }

    /// Show the gate's timer as a loading bar.
    pub fn with_progress_bar(mut self) -> Self {
        self.progress_bar = true;
        self
    }

    fn render_window(&self, buf: &mut RenderBuffer, width: f32, height: f32, status: &GateStatus<'_>) {
        clear(buf);
        header(buf, width, height);
        if let Some(close) = status.buttons.first() {
            text_button(buf, close);
        }
        window_text(buf, &self.text, height);
    }
}

impl GateView for WindowView {
    fn render(&self, ctx: &mut RenderContext, status: &GateStatus<'_>) {
        let (w, h) = (ctx.width(), ctx.height());
        self.render_window(ctx.buffer, w, h, status);
        if !self.progress_bar {
            return;
        }

        let buf = &mut *ctx.buffer;
        let bar = w - FONT_SIZE;
        buf.push(DrawCommand::Save);
        buf.push(DrawCommand::Translate { x: MARGIN, y: h / 1.25 });
        buf.fill_rect(0.0, 0.0, bar, 16.0, LIGHT);
        buf.push(DrawCommand::StrokeRect { x: 0.0, y: 0.0, w: bar, h: 16.0, color: OVERLAY, line_width: 4.0 });
        buf.fill_rect(4.0, 4.0, (bar - 8.0) * status.progress, 8.0, RED);
        buf.push(DrawCommand::Restore);
    }
}

/// A window with YES / NO buttons. Buttons are close, yes, no.
pub struct ConfirmView {
    window: WindowView,
}

impl ConfirmView {
    pub fn new(text: impl Into<String>) -> Self {
        Self { window: WindowView::new(text) }
    }

    pub fn yes_button(width: f32, height: f32) -> Button {
        Button::text("YES", Vec2::new(width / 5.0, height / 1.5), FONT_SIZE)
    }

    pub fn no_button(width: f32, height: f32) -> Button {
        Button::text("NO", Vec2::new(width / 1.25, height / 1.5), FONT_SIZE)
    }
}

impl GateView for ConfirmView {
    fn render(&self, ctx: &mut RenderContext, status: &GateStatus<'_>) {
        let (w, h) = (ctx.width(), ctx.height());
        self.window.render_window(ctx.buffer, w, h, status);
        for button in status.buttons.iter().skip(1) {
            text_button(ctx.buffer, button);
        }
    }
}
