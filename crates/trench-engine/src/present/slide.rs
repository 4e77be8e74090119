use crate::api::game::{EngineContext, RenderContext};
use crate::input::button::Button;
use crate::input::state::InputState;

/// One full-screen unit of the presentation: a menu, dialog, loading screen
/// or gameplay screen. `S` is the game's session state shared by all slides.
pub trait Slide<S> {
    /// Stable name used for logging and inspection.
    fn name(&self) -> &'static str;

    /// Advance one frame. The returned navigation is applied by the
    /// presentation after this call returns.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, state: &mut S) -> Navigation<S>;

    fn render(&self, ctx: &mut RenderContext, state: &S);

    /// Interactive widgets currently on screen (close button, menu entries).
    fn controls(&self) -> Vec<&Button> {
        Vec::new()
    }
}

/// Where a new slide goes relative to the current head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    After,
    Before,
}

/// What a slide asks the presentation to do after its update.
pub enum Navigation<S> {
    Stay,
    /// Fade to a slide inserted after the current one.
    Append(Box<dyn Slide<S>>),
    /// Fade to a slide inserted before the current one.
    Prepend(Box<dyn Slide<S>>),
}

impl<S> Navigation<S> {
    pub fn to(placement: Placement, slide: Box<dyn Slide<S>>) -> Self {
        match placement {
            Placement::After => Navigation::Append(slide),
            Placement::Before => Navigation::Prepend(slide),
        }
    }

    pub fn is_stay(&self) -> bool {
        matches!(self, Navigation::Stay)
    }

    /// Name of the slide being navigated to, if any.
    pub fn target_name(&self) -> Option<&'static str> {
        match self {
            Navigation::Stay => None,
            Navigation::Append(s) | Navigation::Prepend(s) => Some(s.name()),
        }
    }
}

impl<S> std::fmt::Debug for Navigation<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Navigation::Stay => write!(f, "Stay"),
            Navigation::Append(s) => write!(f, "Append({})", s.name()),
            Navigation::Prepend(s) => write!(f, "Prepend({})", s.name()),
        }
    }
}
