use std::ops::ControlFlow;

use rand::Rng;

use crate::{
    generators::{BuildReport, VisitObserver},
    maze::{Canvas, CellGraph, CellId, Tile},
};

struct Backtracker<'a, R, O: ?Sized> {
    graph: &'a mut CellGraph,
    canvas: &'a mut Canvas,
    rng: &'a mut R,
    observer: &'a mut O,
    mark_visits: bool,
    visited: Vec<bool>,
    report: BuildReport,
}

impl<R: Rng, O: VisitObserver + ?Sized> Backtracker<'_, R, O> {
    /// Enters a cell: records it, cuts every edge pointing back at it and lets
    /// the observer see the canvas.
    fn visit(&mut self, cell: CellId) -> ControlFlow<()> {
        self.visited[cell] = true;
        self.report.visited += 1;
        // Former neighbours can no longer walk back into this cell,
        // but the cell itself still reaches all of them.
        self.graph.sever_incoming(cell);

        let position = self.graph.position(cell);
        if self.mark_visits {
            self.canvas
                .set(Canvas::cell_position(position.0, position.1), Tile::Visited);
        }
        tracing::trace!("[generator] visiting cell {:?}", position);
        self.observer.on_visit(&*self.canvas, position)
    }

    fn carve(&mut self, from: CellId, to: CellId) {
        let passage =
            Canvas::passage_position(self.graph.position(from), self.graph.position(to));
        self.canvas.set(passage, Tile::Open);
        self.report.passages += 1;
    }

    fn run(mut self, start: CellId) -> BuildReport {
        if self.visit(start).is_break() {
            return self.report;
        }

        // The stack holds the chain of cells from the start to the current one
        let mut stack = Vec::with_capacity(self.graph.len());
        stack.push(start);

        while let Some(&current) = stack.last() {
            let adjacent = self.graph.adjacent(current);
            if adjacent.is_empty() {
                // Dead end, backtrack to the parent
                stack.pop();
                continue;
            }

            let next = adjacent[self.rng.random_range(0..adjacent.len())];
            self.graph.remove_adjacent(current, next);

            if !self.visited[next] {
                self.carve(current, next);
                if self.visit(next).is_break() {
                    tracing::debug!("[generator] interrupted after {} cells", self.report.visited);
                    return self.report;
                }
                stack.push(next);
            }
        }

        self.report.completed = true;
        self.report
    }
}

/// Carves a perfect maze into `canvas` with a randomized depth-first search
/// starting at `start`.
///
/// Neighbours are drawn uniformly from what is left of the current cell's
/// adjacency list, and the list is consumed as the search goes, so `graph` is
/// spent afterwards. When `mark_visits` is set, every entered cell is painted
/// with a visited marker before the observer sees it.
pub fn recursive_backtrack<R: Rng, O: VisitObserver + ?Sized>(
    graph: &mut CellGraph,
    canvas: &mut Canvas,
    start: CellId,
    rng: &mut R,
    mark_visits: bool,
    observer: &mut O,
) -> BuildReport {
    if graph.is_empty() {
        return BuildReport {
            completed: true,
            ..BuildReport::default()
        };
    }

    let visited = vec![false; graph.len()];
    let report = Backtracker {
        graph,
        canvas,
        rng,
        observer,
        mark_visits,
        visited,
        report: BuildReport::default(),
    }
    .run(start);

    tracing::debug!(
        "[generator] visited {} cells, carved {} passages",
        report.visited,
        report.passages
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{NoopObserver, get_rng};

    fn generate(width: usize, height: usize, seed: u64) -> (Canvas, BuildReport) {
        let mut graph = CellGraph::new(width, height);
        let mut canvas = Canvas::new(width, height);
        let mut rng = get_rng(Some(seed));
        let report = recursive_backtrack(
            &mut graph,
            &mut canvas,
            0,
            &mut rng,
            false,
            &mut NoopObserver,
        );
        (canvas, report)
    }

    #[test]
    fn test_carves_a_tree() {
        for (width, height) in [(1, 1), (2, 1), (1, 5), (4, 4), (9, 3)] {
            let (_, report) = generate(width, height, 42);
            assert!(report.completed);
            assert_eq!(report.visited, width * height);
            assert_eq!(report.passages, width * height - 1);
        }
    }

    #[test]
    fn test_graph_is_consumed() {
        let mut graph = CellGraph::new(5, 5);
        let mut canvas = Canvas::new(5, 5);
        let mut rng = get_rng(Some(1));
        recursive_backtrack(&mut graph, &mut canvas, 0, &mut rng, false, &mut NoopObserver);
        assert_eq!(graph.entry_count(), 0);
    }

    #[test]
    fn test_same_seed_same_canvas() {
        let (a, _) = generate(8, 6, 1234);
        let (b, _) = generate(8, 6, 1234);
        assert_eq!(a, b);
    }

    #[test]
    fn test_visits_each_cell_once() {
        let mut graph = CellGraph::new(6, 4);
        let mut canvas = Canvas::new(6, 4);
        let mut rng = get_rng(Some(9));
        let mut seen = Vec::new();
        let mut observer = |_: &Canvas, cell: (usize, usize)| {
            seen.push(cell);
            ControlFlow::Continue(())
        };
        recursive_backtrack(&mut graph, &mut canvas, 0, &mut rng, false, &mut observer);

        assert_eq!(seen.len(), 24);
        assert_eq!(seen[0], (0, 0));
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_markers_painted_when_enabled() {
        let mut graph = CellGraph::new(3, 3);
        let mut canvas = Canvas::new(3, 3);
        let mut rng = get_rng(Some(5));
        recursive_backtrack(&mut graph, &mut canvas, 0, &mut rng, true, &mut NoopObserver);
        let markers = canvas.tiles().iter().filter(|&&t| t == Tile::Visited).count();
        assert_eq!(markers, 9);
    }

    #[test]
    fn test_observer_sees_marker_of_current_cell() {
        let mut graph = CellGraph::new(3, 2);
        let mut canvas = Canvas::new(3, 2);
        let mut rng = get_rng(Some(3));
        let mut observer = |canvas: &Canvas, cell: (usize, usize)| {
            assert_eq!(canvas[Canvas::cell_position(cell.0, cell.1)], Tile::Visited);
            ControlFlow::Continue(())
        };
        recursive_backtrack(&mut graph, &mut canvas, 0, &mut rng, true, &mut observer);
    }

    #[test]
    fn test_interrupted_run_is_partial() {
        let mut graph = CellGraph::new(5, 5);
        let mut canvas = Canvas::new(5, 5);
        let mut rng = get_rng(Some(11));
        let mut remaining = 3;
        let mut observer = |_: &Canvas, _: (usize, usize)| {
            remaining -= 1;
            if remaining == 0 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        };
        let report =
            recursive_backtrack(&mut graph, &mut canvas, 0, &mut rng, false, &mut observer);
        assert!(!report.completed);
        assert_eq!(report.visited, 3);
        assert_eq!(report.passages, 2);
    }
}
