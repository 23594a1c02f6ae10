pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;

pub use config::MazeConfig;
pub use error::MazeError;
pub use maze::{Canvas, Maze, Tile};
