use crate::api::config::GameConfig;
use crate::api::types::{GameEvent, SoundEvent};
use crate::core::rng::Rng;
use crate::core::time::FrameClock;
use crate::input::state::InputState;
use crate::renderer::command::RenderBuffer;

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: build the first slide, seed session data.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The frame tick. Drives the active slide.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputState);

    /// Read-only render pass writing draw commands.
    fn render(&self, ctx: &mut RenderContext);
}

/// Mutable per-instance engine state, passed to every update call.
/// Replaces ambient globals: the frame clock, the sound switch, the RNG and
/// the outgoing event queues all live here.
pub struct EngineContext {
    pub config: GameConfig,
    pub clock: FrameClock,
    pub rng: Rng,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    sound_enabled: bool,
}

impl EngineContext {
    pub fn new(config: GameConfig) -> Self {
        Self {
            rng: Rng::new(config.seed),
            sound_enabled: config.sound_enabled,
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            clock: FrameClock::new(),
            config,
        }
    }

    /// Clock time (ms) of the current frame.
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Seconds since the previous frame.
    pub fn delta(&self) -> f32 {
        self.clock.delta()
    }

    pub fn width(&self) -> f32 {
        self.config.width
    }

    pub fn height(&self) -> f32 {
        self.config.height
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    /// Emit a sound event. Dropped while sound is disabled or the frame quota is full.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        if !self.sound_enabled {
            return;
        }
        if self.sounds.len() >= self.config.max_sounds {
            log::warn!("sound queue full, dropping {:?}", event);
            return;
        }
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.config.max_events {
            log::warn!("event queue full, dropping {:?}", event);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Render context handed to `Game::render` and slide renders.
pub struct RenderContext<'a> {
    pub buffer: &'a mut RenderBuffer,
    pub config: &'a GameConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(buffer: &'a mut RenderBuffer, config: &'a GameConfig) -> Self {
        Self { buffer, config }
    }

    pub fn width(&self) -> f32 {
        self.config.width
    }

    pub fn height(&self) -> f32 {
        self.config.height
    }
}
