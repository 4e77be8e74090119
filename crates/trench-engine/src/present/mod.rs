pub mod fade;
pub mod gate;
pub mod presentation;
pub mod slide;

pub use fade::{Fade, FadeStyle};
pub use gate::{Gate, GateStatus, GateView, SlideFactory, Trigger};
pub use presentation::{Presentation, SlideId};
pub use slide::{Navigation, Placement, Slide};
