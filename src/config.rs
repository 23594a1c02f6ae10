use crate::error::{MazeError, Result};

/// Parameters of a maze to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Width of the maze in cells.
    pub width: usize,
    /// Height of the maze in cells.
    pub height: usize,
    /// Seed for the random number generator. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Keep visited markers on the canvas and print every generation step.
    pub debug: bool,
    /// Cell column of the opening in the top border. Defaults to the first column.
    pub entry_column: Option<usize>,
    /// Cell column of the opening in the bottom border. Defaults to the last column.
    pub exit_column: Option<usize>,
}

impl MazeConfig {
    pub fn new(width: usize, height: usize) -> Self {
        MazeConfig {
            width,
            height,
            seed: None,
            debug: false,
            entry_column: None,
            exit_column: None,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn entry_column(mut self, column: usize) -> Self {
        self.entry_column = Some(column);
        self
    }

    pub fn exit_column(mut self, column: usize) -> Self {
        self.exit_column = Some(column);
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(MazeError::InvalidDimension {
                    name,
                    value,
                    reason: "must be at least 1",
                });
            }
        }
        let too_large = |name: &'static str, value: usize| MazeError::InvalidDimension {
            name,
            value,
            reason: "maze is too large",
        };
        let columns = self
            .width
            .checked_mul(4)
            .and_then(|c| c.checked_add(1))
            .ok_or_else(|| too_large("width", self.width))?;
        let rows = self
            .height
            .checked_mul(2)
            .and_then(|r| r.checked_add(1))
            .ok_or_else(|| too_large("height", self.height))?;
        // Both the cell graph and the canvas are indexed with a single usize
        if self.width.checked_mul(self.height).is_none() || columns.checked_mul(rows).is_none() {
            return Err(too_large("width", self.width));
        }

        for (name, column) in [("entry", self.entry_column), ("exit", self.exit_column)] {
            match column {
                Some(column) if column >= self.width => {
                    return Err(MazeError::InvalidOpening {
                        name,
                        column,
                        width: self.width,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}
