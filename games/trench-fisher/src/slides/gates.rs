// slides/gates.rs
//
// Every waiting screen in the game is a `Gate`: the sound prompt, the two
// loading screens and the title text dialogs. Each one wraps the factory of
// the slide it leads to.

use trench_engine::{keys, EngineContext, Gate, GameEvent, Slide, Trigger};

use crate::game::EVENT_MUSIC;
use crate::session::Session;
use super::chrome::{close_button, ConfirmView, WindowView};
use super::title::Title;

/// How long loading screens wait before moving on by themselves.
pub const LOADING_MS: f64 = 3000.0;

/// Timer, close button or `x` key: any of them skips a loading screen.
const SKIP: [Trigger; 3] = [Trigger::TimerElapsed, Trigger::Button(0), Trigger::Key(keys::X)];

/// Loading screen with a progress bar.
pub fn loading(
    ctx: &EngineContext,
    text: impl Into<String>,
    next: impl FnOnce(&mut EngineContext, &mut Session) -> Box<dyn Slide<Session>> + 'static,
) -> Gate<Session> {
    Gate::new("loading", WindowView::new(text).with_progress_bar())
        .with_timer(LOADING_MS, ctx.now())
        .with_button(close_button(ctx.width()))
        .append_on(&SKIP, next)
}

/// Loading screen between a location and its level; no progress bar.
pub fn level_loading(
    ctx: &EngineContext,
    text: impl Into<String>,
    next: impl FnOnce(&mut EngineContext, &mut Session) -> Box<dyn Slide<Session>> + 'static,
) -> Gate<Session> {
    Gate::new("level-loading", WindowView::new(text))
        .with_timer(LOADING_MS, ctx.now())
        .with_button(close_button(ctx.width()))
        .append_on(&SKIP, next)
}

/// Help / about / version text, closed back to the title.
pub fn text_dialog(ctx: &EngineContext, text: impl Into<String>) -> Gate<Session> {
    Gate::<Session>::new("title-text-dialog", WindowView::new(text))
        .with_button(close_button(ctx.width()))
        .append_on(&[Trigger::Button(0)], |ctx, _| Box::new(Title::new(ctx)))
}

/// First screen: ask for sound, then load the title.
pub fn sound_prompt(ctx: &EngineContext) -> Gate<Session> {
    let (w, h) = (ctx.width(), ctx.height());
    Gate::<Session>::new("sound-prompt", ConfirmView::new("Do you want sound?"))
        .with_button(close_button(w))
        .with_button(ConfirmView::yes_button(w, h))
        .with_button(ConfirmView::no_button(w, h))
        .append_on(&[Trigger::Button(1)], |ctx, _| {
            ctx.set_sound_enabled(true);
            ctx.emit_event(GameEvent::new(EVENT_MUSIC, 0.0, 0.0, 0.0));
            log::info!("sound enabled");
            Box::new(loading_title(ctx))
        })
        .append_on(&[Trigger::Button(2), Trigger::Button(0)], |ctx, _| Box::new(loading_title(ctx)))
}

fn loading_title(ctx: &EngineContext) -> Gate<Session> {
    loading(ctx, "Loading", |ctx, _| Box::new(Title::new(ctx)))
}
