use glam::Vec2;
use trench_engine::{Baseline, Button, DrawCommand, EngineContext, InputState, Navigation, RenderContext, Slide};

use crate::session::{fortune, Session, GUIDE, SUB_LOCATIONS, TILE};
use super::chrome::{self, FONT, FONT_SIZE, LIGHT, MARGIN};
use super::gates::{level_loading, loading};
use super::level::FirstLevel;
use super::world_map::WorldMap;

/// One location: its fishing spots and its saved score.
pub struct MapLocation {
    location: usize,
    close: Button,
    spots: Vec<Button>,
    jitter: Vec<f32>,
}

impl MapLocation {
    pub fn new(ctx: &EngineContext, session: &Session, location: usize) -> Self {
        let spots: Vec<Button> = SUB_LOCATIONS
            .iter()
            .enumerate()
            .map(|(i, &(row, col))| {
                let unlocked = session.location(location).map(|l| l.spot_unlocked(i)).unwrap_or(false);
                let pos = Vec2::new(col as f32 * TILE, row as f32 * TILE);
                Button::text(format!("{}.", i + 1), pos, FONT_SIZE).with_disabled(!unlocked)
            })
            .collect();
        Self {
            location,
            close: chrome::close_button(ctx.width()),
            jitter: vec![0.0; spots.len()],
            spots,
        }
    }
}

impl Slide<Session> for MapLocation {
    fn name(&self) -> &'static str {
        "map-location"
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, _state: &mut Session) -> Navigation<Session> {
        self.close.update(input);
        for (spot, dy) in self.spots.iter_mut().zip(self.jitter.iter_mut()) {
            spot.update(input);
            *dy = ctx.rng.next_f32() - 0.5;
        }

        if self.close.pressed {
            let text = fortune(&mut ctx.rng);
            let gate = loading(ctx, text, |ctx, session| Box::new(WorldMap::new(ctx, session)));
            return Navigation::Append(Box::new(gate));
        }
        if self.spots.iter().any(|s| s.pressed) {
            let location = self.location;
            let gate = level_loading(ctx, GUIDE, move |ctx, _| Box::new(FirstLevel::new(ctx, location)));
            return Navigation::Append(Box::new(gate));
        }
        Navigation::Stay
    }

    fn render(&self, ctx: &mut RenderContext, state: &Session) {
        let (w, h) = (ctx.width(), ctx.height());
        let buf = &mut *ctx.buffer;
        chrome::clear(buf);
        buf.push(DrawCommand::Layer { name: "layer-4".into(), scroll_y: 0.0 });
        chrome::jittered_buttons(buf, &self.spots, &self.jitter);
        chrome::header(buf, w, h);
        chrome::text_button(buf, &self.close);

        let Some(location) = state.location(self.location) else {
            return;
        };
        let title = format!("\"{}\"", location.name);
        buf.text(title, Vec2::new(MARGIN, h / 5.0 + FONT_SIZE), FONT, LIGHT, Baseline::Alphabetic);
        chrome::hud(buf, location.state_line());
    }

    fn controls(&self) -> Vec<&Button> {
        std::iter::once(&self.close).chain(self.spots.iter()).collect()
    }
}
