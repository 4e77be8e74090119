use glam::Vec2;
use serde::Serialize;

/// An sRGB colour with alpha, serialised as a CSS `rgba()` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.css()
    }
}

/// Vertical text anchor, mirrors Canvas2D `textBaseline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    #[default]
    Alphabetic,
    Top,
    Bottom,
    Middle,
}

/// One Canvas2D-style draw call. The TypeScript side replays these in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Clear the whole canvas and fill it with `color`.
    Clear { color: Color },
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Color },
    StrokeRect { x: f32, y: f32, w: f32, h: f32, color: Color, line_width: f32 },
    /// Fill (and optionally outline) a line of text. `font` is a CSS font string.
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: Color,
        baseline: Baseline,
        centered: bool,
        outline: Option<Color>,
    },
    Line { from: Vec2, to: Vec2, color: Color, line_width: f32 },
    Circle { center: Vec2, radius: f32, color: Color },
    /// Blit a 16px tile from the tileset image.
    Sprite { col: u32, row: u32, x: f32, y: f32, w: f32, h: f32, flip_x: bool },
    /// Render a named tile-map layer at a vertical scroll offset.
    Layer { name: String, scroll_y: f32 },
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Scale { x: f32, y: f32 },
    /// Set the global alpha for subsequent commands (until `Restore`).
    Alpha { value: f32 },
}

/// Ordered draw commands for one frame plus cursor state.
#[derive(Debug, Default)]
pub struct RenderBuffer {
    pub commands: Vec<DrawCommand>,
    /// Show the pointer cursor (a button is hovered).
    pub pointer_cursor: bool,
}

#[derive(Serialize)]
struct Frame<'a> {
    commands: &'a [DrawCommand],
    pointer_cursor: bool,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(128),
            pointer_cursor: false,
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.pointer_cursor = false;
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    /// Plain left-aligned text without outline.
    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, font: &str, color: Color, baseline: Baseline) {
        self.push(DrawCommand::Text {
            text: text.into(),
            x: pos.x,
            y: pos.y,
            font: font.to_string(),
            color,
            baseline,
            centered: false,
            outline: None,
        });
    }

    /// Text commands in draw order, for assertions and debugging.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Serialise the frame for the TypeScript renderer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Frame {
            commands: &self.commands,
            pointer_cursor: self.pointer_cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_to_css() {
        assert_eq!(Color::rgb(132, 198, 105).css(), "rgb(132, 198, 105)");
        assert_eq!(Color::rgba(0, 0, 0, 0.15).css(), "rgba(0, 0, 0, 0.15)");
    }

    #[test]
    fn commands_serialise_with_op_tag() {
        let mut buf = RenderBuffer::new();
        buf.push(DrawCommand::Clear { color: Color::rgb(1, 2, 3) });
        buf.push(DrawCommand::Layer { name: "layer-6".into(), scroll_y: 10.0 });
        buf.pointer_cursor = true;
        let json: serde_json::Value = serde_json::from_str(&buf.to_json().unwrap()).unwrap();
        assert_eq!(json["commands"][0]["op"], "clear");
        assert_eq!(json["commands"][0]["color"], "rgb(1, 2, 3)");
        assert_eq!(json["commands"][1]["op"], "layer");
        assert_eq!(json["commands"][1]["name"], "layer-6");
        assert_eq!(json["pointer_cursor"], true);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut buf = RenderBuffer::new();
        buf.fill_rect(0.0, 0.0, 1.0, 1.0, Color::rgb(0, 0, 0));
        buf.pointer_cursor = true;
        buf.clear();
        assert!(buf.is_empty());
        assert!(!buf.pointer_cursor);
    }
}
