use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// A single character position on the canvas.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    #[default]
    Wall,
    Open,
    /// Marks a cell the generator has entered. Only painted in debug mode.
    Visited,
}

impl Tile {
    pub const WALL_SYMBOL: char = 'X';
    pub const OPEN_SYMBOL: char = ' ';
    pub const VISITED_SYMBOL: char = 'V';

    /// The plain character this tile is printed as.
    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => Tile::WALL_SYMBOL,
            Tile::Open => Tile::OPEN_SYMBOL,
            Tile::Visited => Tile::VISITED_SYMBOL,
        }
    }

    /// The tile with terminal colors, used by the animated renderer.
    pub fn styled(self) -> StyledContent<char> {
        match self {
            Tile::Wall => Tile::WALL_SYMBOL.with(Color::DarkGrey),
            Tile::Open => Tile::OPEN_SYMBOL.with(Color::Reset),
            Tile::Visited => Tile::VISITED_SYMBOL.with(Color::Blue),
        }
    }

    pub fn is_open(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
