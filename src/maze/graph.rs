/// Index of a cell in a [`CellGraph`], row-major in node space.
pub type CellId = usize;

/// The logical cells of a maze and the edges between orthogonal neighbours.
///
/// Edges are undirected and stored in both endpoints' adjacency lists. The lists
/// are consumed by the generator and never rebuilt.
#[derive(Debug, Clone)]
pub struct CellGraph {
    adjacency: Vec<Vec<CellId>>,
    width: usize,
}

impl CellGraph {
    /// Builds the graph for a `width × height` maze.
    ///
    /// Cells are linked row by row, each one to its left neighbour first and
    /// then to the one above. This fixes the order of every adjacency list.
    pub fn new(width: usize, height: usize) -> Self {
        let mut graph = CellGraph {
            adjacency: (0..width * height).map(|_| Vec::with_capacity(4)).collect(),
            width,
        };
        for row in 0..height {
            for col in 0..width {
                let id = graph.id(col, row);
                if col > 0 {
                    graph.link(id, graph.id(col - 1, row));
                }
                if row > 0 {
                    graph.link(id, graph.id(col, row - 1));
                }
            }
        }
        graph
    }

    fn link(&mut self, a: CellId, b: CellId) {
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn id(&self, col: usize, row: usize) -> CellId {
        row * self.width + col
    }

    /// Node-space `(col, row)` of a cell.
    pub fn position(&self, id: CellId) -> (usize, usize) {
        (id % self.width, id / self.width)
    }

    /// Cells still adjacent to `id`.
    pub fn adjacent(&self, id: CellId) -> &[CellId] {
        &self.adjacency[id]
    }

    /// Removes `neighbor` from the adjacency list of `id`, keeping the order of
    /// the remaining entries. Returns whether it was present.
    pub fn remove_adjacent(&mut self, id: CellId, neighbor: CellId) -> bool {
        match self.adjacency[id].iter().position(|&n| n == neighbor) {
            Some(idx) => {
                self.adjacency[id].remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes `id` from the adjacency list of every cell still adjacent to it.
    /// The cell's own list is left untouched, so it can still reach them.
    pub fn sever_incoming(&mut self, id: CellId) {
        for i in 0..self.adjacency[id].len() {
            let neighbor = self.adjacency[id][i];
            self.remove_adjacent(neighbor, id);
        }
    }

    /// Total number of directed adjacency entries left (twice the undirected edge count
    /// before any traversal).
    #[cfg(test)]
    pub fn entry_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}
