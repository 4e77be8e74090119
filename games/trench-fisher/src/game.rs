use trench_engine::*;

use crate::session::Session;
use crate::slides::chrome::{BACKGROUND, LIGHT};
use crate::slides::gates::sound_prompt;

// Sound effect ids (Rust → TypeScript audio layer)
pub const SFX_TRANSITION: u32 = 1;
pub const SFX_GAME_OVER: u32 = 2;
pub const SFX_CAUGHT: u32 = 3;
pub const SFX_SAVE: u32 = 4;

// Game event kinds (Rust → TypeScript)
pub const EVENT_SCORE: f32 = 1.0;
pub const EVENT_MUSIC: f32 = 2.0;

pub struct TrenchFisher {
    session: Session,
    /// Built in `init`, once the canvas size is known.
    presentation: Option<Presentation<Session>>,
}

impl TrenchFisher {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            presentation: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn presentation(&self) -> Option<&Presentation<Session>> {
        self.presentation.as_ref()
    }
}

impl Default for TrenchFisher {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TrenchFisher {
    fn config(&self) -> GameConfig {
        GameConfig {
            width: 300.0,
            height: 150.0,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let fade = FadeStyle {
            duration_ms: ctx.config.fade_ms,
            backdrop: BACKGROUND,
            flash: LIGHT,
        };
        let prompt = sound_prompt(ctx);
        self.presentation = Some(
            Presentation::new(Box::new(prompt), fade).with_transition_sound(SoundEvent(SFX_TRANSITION)),
        );
        log::info!("trench-fisher: {} locations", self.session.locations.len());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState) {
        if let Some(presentation) = self.presentation.as_mut() {
            presentation.update(ctx, input, &mut self.session);
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        if let Some(presentation) = &self.presentation {
            presentation.render(ctx, &self.session);
        }
    }
}
