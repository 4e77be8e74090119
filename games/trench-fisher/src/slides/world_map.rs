use glam::Vec2;
use trench_engine::{Baseline, Button, DrawCommand, EngineContext, InputState, Navigation, RenderContext, Slide};

use crate::session::{fortune, Session, TILE};
use super::chrome::{self, FONT, FONT_SIZE, LIGHT, MARGIN};
use super::gates::loading;
use super::map_location::MapLocation;
use super::title::Title;

/// Numbered label for every location; locked ones are drawn disabled.
pub struct WorldMap {
    close: Button,
    labels: Vec<Button>,
    /// Per-label vertical wobble, re-rolled every frame.
    jitter: Vec<f32>,
}

impl WorldMap {
    pub fn new(ctx: &EngineContext, session: &Session) -> Self {
        let labels: Vec<Button> = session
            .locations
            .iter()
            .enumerate()
            .map(|(i, location)| {
                let pos = Vec2::new(location.col as f32 * TILE, location.row as f32 * TILE);
                Button::text(format!("{}.", location.id), pos, FONT_SIZE)
                    .with_disabled(!session.location_unlocked(i))
            })
            .collect();
        Self {
            close: chrome::close_button(ctx.width()),
            jitter: vec![0.0; labels.len()],
            labels,
        }
    }
}

impl Slide<Session> for WorldMap {
    fn name(&self) -> &'static str {
        "world-map"
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, _state: &mut Session) -> Navigation<Session> {
        self.close.update(input);
        for (label, dy) in self.labels.iter_mut().zip(self.jitter.iter_mut()) {
            label.update(input);
            *dy = ctx.rng.next_f32() - 0.5;
        }

        if self.close.pressed {
            return Navigation::Append(Box::new(Title::new(ctx)));
        }
        if let Some(index) = self.labels.iter().position(|l| l.pressed) {
            log::debug!("world map: location {} selected", index + 1);
            let text = fortune(&mut ctx.rng);
            let gate = loading(ctx, text, move |ctx, session| Box::new(MapLocation::new(ctx, session, index)));
            return Navigation::Append(Box::new(gate));
        }
        Navigation::Stay
    }

    fn render(&self, ctx: &mut RenderContext, _state: &Session) {
        let (w, h) = (ctx.width(), ctx.height());
        let buf = &mut *ctx.buffer;
        chrome::clear(buf);
        buf.push(DrawCommand::Layer { name: "layer-2".into(), scroll_y: 0.0 });
        chrome::jittered_buttons(buf, &self.labels, &self.jitter);
        chrome::header(buf, w, h);
        chrome::text_button(buf, &self.close);
        buf.text("WorldMap", Vec2::splat(MARGIN), FONT, LIGHT, Baseline::Top);
    }

    fn controls(&self) -> Vec<&Button> {
        std::iter::once(&self.close).chain(self.labels.iter()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trench_engine::InputEvent;

    fn press(at: Vec2) -> InputState {
        let mut input = InputState::new();
        input.apply(&InputEvent::PointerDown { x: at.x, y: at.y });
        input
    }

    #[test]
    fn only_first_location_open_at_start() {
        let map = WorldMap::new(&EngineContext::default(), &Session::new());
        let disabled: Vec<_> = map.labels.iter().map(|l| l.disabled).collect();
        assert_eq!(disabled, vec![false, true, true, true, true, true, true, true]);
        assert_eq!(map.labels[0].label, "1.");
        assert_eq!(map.labels[0].pos, Vec2::new(48.0, 32.0));
    }

    #[test]
    fn score_opens_the_next_location() {
        let mut session = Session::new();
        session.locations[0].add_score(10);
        let map = WorldMap::new(&EngineContext::default(), &session);
        assert!(!map.labels[1].disabled);
        assert!(map.labels[2].disabled);
    }

    #[test]
    fn locked_location_cannot_be_chosen() {
        let mut ctx = EngineContext::default();
        let mut session = Session::new();
        let mut map = WorldMap::new(&ctx, &session);
        let nav = map.update(&mut ctx, &press(map.labels[1].center()), &mut session);
        assert!(nav.is_stay());
    }

    #[test]
    fn open_location_loads_through_a_fortune() {
        let mut ctx = EngineContext::default();
        let mut session = Session::new();
        let mut map = WorldMap::new(&ctx, &session);
        let nav = map.update(&mut ctx, &press(map.labels[0].center()), &mut session);
        assert_eq!(nav.target_name(), Some("loading"));
    }

    #[test]
    fn tap_inside_one_frame_selects() {
        let mut ctx = EngineContext::default();
        let mut session = Session::new();
        let mut map = WorldMap::new(&ctx, &session);
        let at = map.labels[0].center();
        let mut input = InputState::new();
        input.apply(&InputEvent::PointerDown { x: at.x, y: at.y });
        input.apply(&InputEvent::PointerUp { x: at.x, y: at.y });
        let nav = map.update(&mut ctx, &input, &mut session);
        assert_eq!(nav.target_name(), Some("loading"));
    }

    #[test]
    fn close_returns_to_title() {
        let mut ctx = EngineContext::default();
        let mut session = Session::new();
        let mut map = WorldMap::new(&ctx, &session);
        let nav = map.update(&mut ctx, &press(map.close.center()), &mut session);
        assert_eq!(nav.target_name(), Some("title"));
    }

    #[test]
    fn labels_jitter_within_half_a_pixel() {
        let mut ctx = EngineContext::default();
        let mut session = Session::new();
        let mut map = WorldMap::new(&ctx, &session);
        for _ in 0..50 {
            map.update(&mut ctx, &InputState::new(), &mut session);
            assert!(map.jitter.iter().all(|dy| (-0.5..0.5).contains(dy)));
        }
    }
}
