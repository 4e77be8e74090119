pub mod button;
pub mod queue;
pub mod state;

/// DOM `keyCode` values the engine and games refer to by name.
pub mod keys {
    pub const ARROW_LEFT: u32 = 37;
    pub const ARROW_RIGHT: u32 = 39;
    pub const X: u32 = 88;
}
