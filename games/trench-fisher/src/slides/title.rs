use glam::Vec2;
use trench_engine::{
    Baseline, Button, DrawCommand, EngineContext, InputState, Navigation, RenderContext, Slide, Timer,
};

use crate::session::Session;
use super::chrome::{self, FONT_SIZE, LARGE_FONT, LINE_HEIGHT, MARGIN, OVERLAY, RED, DARK};
use super::gates::text_dialog;
use super::world_map::WorldMap;

const TITLE: &str = "Trench fisher";
const INTRO_MS: f64 = 3000.0;
const MENU: [&str; 4] = ["start", "help", "about", "version"];

const HELP: &str = "controls:\n  ArrowLeft: Left dir key\n  ArrowRight: Right dir key";
const ABOUT: &str = "author: john swana";
const VERSION: &str = "version: 1.0";

/// Title screen with the main menu. The background scrolls into place and
/// the title underline grows during the intro.
pub struct Title {
    menu: Vec<Button>,
    intro: Timer,
}

impl Title {
    pub fn new(ctx: &EngineContext) -> Self {
        let (w, h) = (ctx.width(), ctx.height());
        let menu = MENU
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let pos = Vec2::new(w / 3.0, h / 3.0 + i as f32 * FONT_SIZE * LINE_HEIGHT);
                Button::text(format!(" {}", entry), pos, FONT_SIZE)
            })
            .collect();
        Self {
            menu,
            intro: Timer::new(INTRO_MS, ctx.now()),
        }
    }
}

impl Slide<Session> for Title {
    fn name(&self) -> &'static str {
        "title"
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, state: &mut Session) -> Navigation<Session> {
        self.intro.update(ctx.now());
        for button in self.menu.iter_mut() {
            button.update(input);
        }

        match self.menu.iter().position(|b| b.pressed) {
            Some(0) => Navigation::Append(Box::new(WorldMap::new(ctx, state))),
            Some(1) => Navigation::Append(Box::new(text_dialog(ctx, HELP))),
            Some(2) => Navigation::Append(Box::new(text_dialog(ctx, ABOUT))),
            Some(3) => {
                Navigation::Append(Box::new(text_dialog(ctx, VERSION)))
            }
            _ => Navigation::Stay,
        }
    }

    fn render(&self, ctx: &mut RenderContext, _state: &Session) {
        let (w, h) = (ctx.width(), ctx.height());
        let p = self.intro.progress();
        let buf = &mut *ctx.buffer;

        chrome::clear(buf);
        buf.push(DrawCommand::Layer { name: "layer-6".into(), scroll_y: 10.0 - 10.0 * p });
        buf.fill_rect(0.0, 0.0, w, h, OVERLAY);

        buf.push(DrawCommand::Save);
        buf.push(DrawCommand::Translate { x: w / 4.0, y: h / 3.0 - MARGIN });
        buf.push(DrawCommand::Text {
            text: TITLE.into(),
            x: 0.0,
            y: 0.0,
            font: LARGE_FONT.into(),
            color: RED,
            baseline: Baseline::Bottom,
            centered: false,
            outline: Some(DARK),
        });
        buf.push(DrawCommand::Line {
            from: Vec2::ZERO,
            to: Vec2::new(p * 150.0, 0.0),
            color: RED,
            line_width: 2.0,
        });
        buf.push(DrawCommand::Restore);

        for button in &self.menu {
            chrome::text_button(buf, button);
        }
    }

    fn controls(&self) -> Vec<&Button> {
        self.menu.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trench_engine::{GameConfig, InputEvent, RenderBuffer};

    fn press(button: &Button) -> InputState {
        let c = button.center();
        let mut input = InputState::new();
        input.apply(&InputEvent::PointerDown { x: c.x, y: c.y });
        input
    }

    fn intro_at(title: &mut Title, now: f64) -> RenderBuffer {
        let mut ctx = EngineContext::default();
        ctx.clock.advance(now);
        title.update(&mut ctx, &InputState::new(), &mut Session::new());
        let mut buf = RenderBuffer::new();
        let config = GameConfig::default();
        title.render(&mut RenderContext::new(&mut buf, &config), &Session::new());
        buf
    }

    #[test]
    fn menu_routes() {
        let ctx = EngineContext::default();
        let mut session = Session::new();
        let expected = ["world-map", "title-text-dialog", "title-text-dialog", "title-text-dialog"];
        for (i, want) in expected.iter().enumerate() {
            let mut title = Title::new(&ctx);
            let input = press(&title.menu[i]);
            let nav = title.update(&mut EngineContext::default(), &input, &mut session);
            assert_eq!(nav.target_name(), Some(*want), "menu entry {}", i);
        }
    }

    #[test]
    fn version_dialog_shows_release() {
        let mut title = Title::new(&EngineContext::default());
        let input = press(&title.menu[3]);
        let nav = title.update(&mut EngineContext::default(), &input, &mut Session::new());
        let Navigation::Append(dialog) = nav else { unreachable!() };
        let mut buf = RenderBuffer::new();
        let config = GameConfig::default();
        dialog.render(&mut RenderContext::new(&mut buf, &config), &Session::new());
        assert!(buf.texts().any(|t| t == "version: 1.0"));
    }

    #[test]
    fn idle_title_stays() {
        let ctx = EngineContext::default();
        let mut title = Title::new(&ctx);
        let nav = title.update(&mut EngineContext::default(), &InputState::new(), &mut Session::new());
        assert!(nav.is_stay());
        assert_eq!(title.controls().len(), 4);
    }

    #[test]
    fn intro_scrolls_background_and_grows_underline() {
        let mut title = Title::new(&EngineContext::default());

        let buf = intro_at(&mut title, 1500.0);
        assert!(buf.commands.contains(&DrawCommand::Layer { name: "layer-6".into(), scroll_y: 5.0 }));
        assert!(buf.commands.iter().any(|c| matches!(c, DrawCommand::Line { to, .. } if to.x == 75.0)));

        let buf = intro_at(&mut title, 9000.0);
        assert!(buf.commands.contains(&DrawCommand::Layer { name: "layer-6".into(), scroll_y: 0.0 }));
    }
}
