pub mod chrome;
pub mod gates;
pub mod level;
pub mod map_location;
pub mod title;
pub mod world_map;
