use trench_engine::{
    EngineContext, EngineError, Game, GameConfig, InputEvent, InputQueue, InputState,
    RenderBuffer, RenderContext, Rng,
};

/// Generic game runner that wires up the frame loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    queue: InputQueue,
    input: InputState,
    render_buffer: RenderBuffer,
    initialized: bool,
    /// Flat buffer of sound event IDs for JS reads.
    sound_buffer: Vec<u8>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let sound_buffer = Vec::with_capacity(config.max_sounds);

        Self {
            game,
            ctx: EngineContext::new(config),
            queue: InputQueue::new(),
            input: InputState::new(),
            render_buffer: RenderBuffer::new(),
            initialized: false,
            sound_buffer,
        }
    }

    /// Overlay host-provided JSON onto the game's config. Only allowed before `init`.
    pub fn configure(&mut self, json: &str) -> Result<(), EngineError> {
        if self.initialized {
            return Err(EngineError::InvalidConfig(
                "configure must be called before init".into(),
            ));
        }
        let config = self.ctx.config.merge_json(json)?;
        self.ctx = EngineContext::new(config);
        Ok(())
    }

    /// Replace the RNG seed. Only meaningful before `init`.
    pub fn reseed(&mut self, seed: u64) {
        self.ctx.config.seed = seed;
        self.ctx.rng = Rng::new(seed);
    }

    pub fn config(&self) -> &GameConfig {
        &self.ctx.config
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Run one frame at clock time `now_ms`: fold input, update the active
    /// slide once, render it once.
    pub fn frame(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();
        self.ctx.clock.advance(now_ms);

        self.input.begin_frame();
        for event in self.queue.drain() {
            self.input.apply(&event);
        }

        self.game.update(&mut self.ctx, &self.input);

        self.render_buffer.clear();
        {
            let mut render_ctx = RenderContext::new(&mut self.render_buffer, &self.ctx.config);
            self.game.render(&mut render_ctx);
        }

        // Pack sound events into flat buffer
        self.sound_buffer.clear();
        for sound in &self.ctx.sounds {
            self.sound_buffer.push(sound.0 as u8);
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    // ---- Accessors read by TypeScript via wasm_bindgen exports ----

    /// This frame's draw commands as JSON. Falls back to an empty frame on error.
    pub fn draw_commands_json(&self) -> String {
        match self.render_buffer.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("failed to serialise draw commands: {}", err);
                String::from(r#"{"commands":[],"pointer_cursor":false}"#)
            }
        }
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn width(&self) -> f32 {
        self.ctx.config.width
    }

    pub fn height(&self) -> f32 {
        self.ctx.config.height
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.ctx.clock.elapsed_ms()
    }

    pub fn sound_enabled(&self) -> bool {
        self.ctx.sound_enabled()
    }
}
