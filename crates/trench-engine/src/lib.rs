pub mod api;
pub mod core;
pub mod input;
pub mod present;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::GameConfig;
pub use api::error::EngineError;
pub use api::game::{Game, EngineContext, RenderContext};
pub use api::types::{SoundEvent, GameEvent};
pub use core::physics::{Body, BodyHandle, BoundedWorld};
pub use core::rng::Rng;
pub use core::time::{FrameClock, Timer};
pub use input::button::Button;
pub use input::keys;
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::InputState;
pub use present::{
    Fade, FadeStyle, Gate, GateStatus, GateView, Navigation, Placement,
    Presentation, Slide, SlideFactory, SlideId, Trigger,
};
pub use renderer::command::{Baseline, Color, DrawCommand, RenderBuffer};
