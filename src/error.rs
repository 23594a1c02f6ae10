use thiserror::Error;

#[derive(Debug, Error)]
pub enum MazeError {
    /// Width or height is zero, or so large that the canvas size overflows.
    #[error("invalid maze {name}: {value} ({reason})")]
    InvalidDimension {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },
    /// An entry or exit opening points outside the maze.
    #[error("invalid {name} column {column}: maze is only {width} cells wide")]
    InvalidOpening {
        name: &'static str,
        column: usize,
        width: usize,
    },
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
