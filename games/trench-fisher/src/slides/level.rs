use glam::Vec2;
use trench_engine::{
    keys, Baseline, Button, DrawCommand, EngineContext, GameEvent, InputState, Navigation, RenderBuffer,
    RenderContext, Slide, SoundEvent, Timer,
};

use crate::fish::{FishType, Minigame};
use crate::game::{EVENT_SCORE, SFX_CAUGHT, SFX_GAME_OVER, SFX_SAVE};
use crate::session::{Session, REWARD};
use super::chrome::{self, BLUE, FONT, FONT_SIZE, LARGE_FONT, LARGE_FONT_SIZE, LIGHT, MARGIN, OVERLAY, RED};
use super::gates::level_loading;
use super::map_location::MapLocation;

/// Countdown for one fishing attempt.
pub const LEVEL_MS: f64 = 30_000.0;

/// The fishing minigame at one location.
///
/// Each tick runs in a fixed order: physics, the catch check, the countdown,
/// the close button, the timeout. The first outcome found ends the level,
/// so a catch on the last tick still counts.
pub struct FirstLevel {
    location: usize,
    close: Button,
    pad_left: Button,
    pad_right: Button,
    timer: Timer,
    game: Minigame,
    /// Rod tip x position; the line runs from here to the hook.
    rod_x: f32,
}

impl FirstLevel {
    pub fn new(ctx: &mut EngineContext, location: usize) -> Self {
        let (w, h) = (ctx.width(), ctx.height());
        let fish = FishType::random(&mut ctx.rng);
        log::debug!("level: a {} is biting", fish.name);
        let pad_radius = LARGE_FONT_SIZE * 0.8;
        Self {
            location,
            close: chrome::close_button(w),
            pad_left: Button::centered("⟨", Vec2::new(24.0, h - 24.0), pad_radius),
            pad_right: Button::centered("⟩", Vec2::new(w - 24.0, h - 24.0), pad_radius),
            timer: Timer::new(LEVEL_MS, ctx.now()),
            game: Minigame::new(w, fish),
            rod_x: w / 1.5,
        }
    }

    fn steer(&mut self, ctx: &EngineContext, input: &InputState) -> f32 {
        if ctx.config.touch_controls {
            self.pad_left.update(input);
            self.pad_right.update(input);
        }
        let mut steer = 0.0;
        if self.pad_left.pressed || input.key_pressed(keys::ARROW_LEFT) {
            steer -= 1.0;
        }
        if self.pad_right.pressed || input.key_pressed(keys::ARROW_RIGHT) {
            steer += 1.0;
        }
        steer
    }

    fn caught(&self, ctx: &mut EngineContext, state: &mut Session) -> Navigation<Session> {
        let fish = self.game.fish_type();
        if let Some(location) = state.location_mut(self.location) {
            let score = location.add_score(REWARD);
            log::info!("level: caught a {} at {}, score {}", fish.name, location.name, score);
            ctx.emit_event(GameEvent::new(EVENT_SCORE, location.id as f32, score as f32, 0.0));
        }
        ctx.emit_sound(SoundEvent(SFX_CAUGHT));
        self.back_to_map(ctx, format!("you caught a \"{}\"", fish.name))
    }

    fn back_to_map(&self, ctx: &EngineContext, text: String) -> Navigation<Session> {
        let location = self.location;
        let gate = level_loading(ctx, text, move |ctx, session| {
            Box::new(MapLocation::new(ctx, session, location))
        });
        Navigation::Prepend(Box::new(gate))
    }

    /// Seconds left on the countdown, rounded.
    fn seconds_left(&self) -> u32 {
        ((1.0 - self.timer.progress() as f64) * LEVEL_MS / 1000.0).round() as u32
    }

    fn render_touch_pads(&self, buf: &mut RenderBuffer, w: f32, h: f32) {
        let top = h / 1.5 - MARGIN;
        buf.fill_rect(0.0, top, w, h - top, OVERLAY);
        for pad in [&self.pad_left, &self.pad_right] {
            let center = pad.center();
            buf.push(DrawCommand::Circle { center, radius: pad.size.x / 2.0, color: OVERLAY });
            buf.push(DrawCommand::Text {
                text: pad.label.clone(),
                x: center.x,
                y: center.y,
                font: LARGE_FONT.into(),
                color: LIGHT,
                baseline: Baseline::Middle,
                centered: true,
                outline: None,
            });
        }
    }

    fn render_bar(&self, buf: &mut RenderBuffer, w: f32, h: f32) {
        let bar = self.game.bar_width();
        let offset = (w - bar) / 2.0;
        let y = h / 1.25;
        let hook = self.game.hook_position();

        let bend = Vec2::new(w / 2.0, h / 3.0);
        buf.push(DrawCommand::Line { from: Vec2::new(self.rod_x, h / 2.0), to: bend, color: RED, line_width: 1.0 });
        buf.push(DrawCommand::Line { from: bend, to: Vec2::new(offset + hook, y), color: RED, line_width: 1.0 });

        buf.push(DrawCommand::Save);
        buf.push(DrawCommand::Translate { x: offset, y: 0.0 });
        buf.fill_rect(0.0, y, bar, 8.0, BLUE);

        buf.push(DrawCommand::Save);
        buf.push(DrawCommand::Translate { x: hook, y });
        let marker = if self.game.is_hooked() { RED } else { OVERLAY };
        buf.fill_rect(-8.0, 0.0, 16.0, 8.0, marker);
        buf.push(DrawCommand::Sprite { col: 5, row: 2, x: -4.0, y: 0.0, w: 8.0, h: 8.0, flip_x: false });
        buf.push(DrawCommand::Restore);

        buf.push(DrawCommand::Save);
        buf.push(DrawCommand::Translate { x: self.game.fish_position(), y });
        buf.push(DrawCommand::Scale { x: self.game.fish_direction() / -2.0, y: 1.0 });
        buf.push(DrawCommand::Sprite { col: 4, row: 0, x: 0.0, y: 0.0, w: 16.0, h: 16.0, flip_x: false });
        buf.push(DrawCommand::Restore);

        buf.push(DrawCommand::Restore);
    }
}

impl Slide<Session> for FirstLevel {
    fn name(&self) -> &'static str {
        "first-level"
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, state: &mut Session) -> Navigation<Session> {
        let steer = self.steer(ctx, input);
        self.game.tick(ctx.delta(), steer);
        if self.game.is_caught() {
            return self.caught(ctx, state);
        }

        self.timer.update(ctx.now());
        self.close.update(input);

        if self.close.pressed {
            log::info!("level: left at {:.0}%", self.game.progress() * 100.0);
            ctx.emit_sound(SoundEvent(SFX_SAVE));
            return self.back_to_map(ctx, "Saving progress...".into());
        }
        if self.timer.is_elapsed() {
            log::info!("level: time is up");
            ctx.emit_sound(SoundEvent(SFX_GAME_OVER));
            return self.back_to_map(ctx, "Game Over!".into());
        }
        Navigation::Stay
    }

    fn render(&self, ctx: &mut RenderContext, state: &Session) {
        let (w, h) = (ctx.width(), ctx.height());
        let touch = ctx.config.touch_controls;
        let buf = &mut *ctx.buffer;

        chrome::clear(buf);
        chrome::header(buf, w, h);
        chrome::text_button(buf, &self.close);
        buf.text("fishing spot", Vec2::new(MARGIN, h / 5.0 + FONT_SIZE), FONT, LIGHT, Baseline::Alphabetic);
        buf.push(DrawCommand::Layer { name: "layer-6".into(), scroll_y: 0.0 });
        if touch {
            self.render_touch_pads(buf, w, h);
        }

        let saved = state.location(self.location).map(|l| l.state_line()).unwrap_or_default();
        let progress = (self.game.progress() * 100.0).round();
        chrome::hud(buf, format!("{} progress: {}% time: 00:{:02}", saved, progress, self.seconds_left()));

        self.render_bar(buf, w, h);
    }

    fn controls(&self) -> Vec<&Button> {
        vec![&self.close, &self.pad_left, &self.pad_right]
    }
}
