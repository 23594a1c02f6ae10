use std::fmt;

use super::tile::Tile;

/// The character canvas a maze is drawn on.
///
/// A maze of `width × height` cells is laid out on a canvas of `4 * width + 1`
/// columns and `2 * height + 1` rows. Each cell is three characters wide, with
/// a wall column between horizontal neighbours and a wall row between vertical
/// ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    data: Box<[Tile]>,
    columns: usize,
    rows: usize,
}

impl Canvas {
    /// Paints the background for a maze of `width × height` cells.
    ///
    /// Cell positions and the filler columns on both sides of them are open;
    /// everything else, including every passage between two cells, starts as a wall.
    pub fn new(width: usize, height: usize) -> Self {
        let columns = 4 * width + 1;
        let rows = 2 * height + 1;
        let data = (0..rows)
            .flat_map(|y| (0..columns).map(move |x| Canvas::background_tile(x, y)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Canvas {
            data,
            columns,
            rows,
        }
    }

    fn background_tile(x: usize, y: usize) -> Tile {
        match (x % 4, y % 2) {
            // Cell position
            (2, 1) => Tile::Open,
            // Filler columns on either side of a cell
            (1, _) | (3, _) => Tile::Open,
            _ => Tile::Wall,
        }
    }

    /// Number of canvas columns (characters per row).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of canvas rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn ravel_index(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }

    /// Canvas position of the cell at node-space `(col, row)`.
    pub fn cell_position(col: usize, row: usize) -> (usize, usize) {
        (4 * col + 2, 2 * row + 1)
    }

    /// Canvas position of the wall separating two adjacent cells.
    pub fn passage_position(a: (usize, usize), b: (usize, usize)) -> (usize, usize) {
        let (ax, ay) = Canvas::cell_position(a.0, a.1);
        let (bx, by) = Canvas::cell_position(b.0, b.1);
        ((ax + bx) / 2, (ay + by) / 2)
    }

    pub fn set(&mut self, coord: (usize, usize), tile: Tile) {
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = tile;
    }

    /// Opens the top border above the given cell column.
    pub fn open_top(&mut self, col: usize) {
        let (x, _) = Canvas::cell_position(col, 0);
        self.set((x, 0), Tile::Open);
    }

    /// Opens the bottom border below the given cell column.
    pub fn open_bottom(&mut self, col: usize) {
        let (x, _) = Canvas::cell_position(col, 0);
        let y = self.rows - 1;
        self.set((x, y), Tile::Open);
    }

    /// Turns every visited marker back into open space.
    /// Returns the number of markers cleared.
    pub fn clear_markers(&mut self) -> usize {
        let mut cleared = 0;
        for tile in self.data.iter_mut().filter(|t| **t == Tile::Visited) {
            *tile = Tile::Open;
            cleared += 1;
        }
        cleared
    }

    /// Iterates over the canvas rows from top to bottom.
    pub fn row_iter(&self) -> impl Iterator<Item = &[Tile]> {
        self.data.chunks(self.columns)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.data
    }
}

impl std::ops::Index<(usize, usize)> for Canvas {
    type Output = Tile;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.row_iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile)?;
            }
        }
        Ok(())
    }
}
