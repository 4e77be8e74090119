pub mod runner;

pub use runner::GameRunner;
pub use trench_engine;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `ensure_runner()` / `with_runner()` helpers
/// - the wasm-bindgen exports (configure, init, frame, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use trench_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// trench_web::export_game!(MyGame, "my-game");
/// ```
///
/// The game type must provide `fn new() -> Self`. The including crate needs
/// `wasm-bindgen`, `log`, `console_log` and `console_error_panic_hook`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn ensure_runner() {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                if borrow.is_none() {
                    *borrow = Some($crate::GameRunner::new(<$game_type>::new()));
                }
            });
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        /// Overlay JSON config onto the defaults. Call before `game_init`.
        #[wasm_bindgen]
        pub fn game_configure(json: &str) -> bool {
            ensure_runner();
            with_runner(|r| match r.configure(json) {
                Ok(()) => true,
                Err(err) => {
                    log::error!("{}: config rejected: {}", $game_name, err);
                    false
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            ensure_runner();
            with_runner(|r| {
                if r.config().seed == 0 {
                    r.reseed($crate::random_seed());
                }
                r.init();
            });
            log::info!("{}: initialized", $game_name);
        }

        /// Run one frame. `now_ms` is the requestAnimationFrame timestamp.
        #[wasm_bindgen]
        pub fn game_frame(now_ms: f64) {
            with_runner(|r| r.frame(now_ms));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::trench_engine::InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::trench_engine::InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::trench_engine::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input($crate::trench_engine::InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input($crate::trench_engine::InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input($crate::trench_engine::InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_draw_commands() -> String {
            with_runner(|r| r.draw_commands_json())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_ptr() -> *const u8 {
            with_runner(|r| r.sound_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_len() -> u32 {
            with_runner(|r| r.sound_events_len())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_canvas_width() -> f32 {
            with_runner(|r| r.width())
        }

        #[wasm_bindgen]
        pub fn get_canvas_height() -> f32 {
            with_runner(|r| r.height())
        }

        #[wasm_bindgen]
        pub fn get_sound_enabled() -> bool {
            with_runner(|r| r.sound_enabled())
        }
    };
}

/// A non-zero seed drawn from the browser's `Math.random()`.
pub fn random_seed() -> u64 {
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    seed.max(1)
}
