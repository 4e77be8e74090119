pub mod command;

pub use command::{Baseline, Color, DrawCommand, RenderBuffer};
