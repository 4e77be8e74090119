use wasm_bindgen::prelude::*;

pub mod fish;
mod game;
pub mod session;
mod slides;

pub use game::TrenchFisher;

trench_web::export_game!(TrenchFisher, "trench-fisher");
