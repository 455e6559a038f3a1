pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod map;
pub mod tile;

pub use config::{DungeonParams, LayoutSettings};
pub use error::MapError;
pub use grid::Grid;
pub use map::DungeonMap;
pub use tile::Tile;
