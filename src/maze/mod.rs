mod graph;
mod grid;
mod tile;

use std::io::Write;

pub use graph::{CellGraph, CellId};
pub use grid::Canvas;
pub use tile::Tile;

use crate::{
    config::MazeConfig,
    error::Result,
    generators::{BuildReport, NoopObserver, VisitObserver, get_rng, recursive_backtrack},
    render,
};

/// A perfect maze: every cell is reachable from every other one by exactly one path.
#[derive(Debug, Clone)]
pub struct Maze {
    canvas: Canvas,
    width: usize,
    height: usize,
    report: BuildReport,
}

impl Maze {
    /// Generates a `width × height` maze with a fresh random seed.
    ///
    /// In debug mode every generation step is printed to stdout with the cells
    /// visited so far marked, and the markers stay on the canvas afterwards.
    pub fn new(width: usize, height: usize, debug: bool) -> Result<Self> {
        let config = MazeConfig::new(width, height).debug(debug);
        Maze::from_config(&config)
    }

    /// Generates a maze as described by `config`.
    pub fn from_config(config: &MazeConfig) -> Result<Self> {
        if config.debug {
            let mut observer = render::StepPrinter::stdout();
            let maze = Maze::with_observer(config, &mut observer)?;
            observer.finish()?;
            Ok(maze)
        } else {
            Maze::with_observer(config, &mut NoopObserver)
        }
    }

    /// Generates a maze as described by `config`, notifying `observer` each time
    /// a cell is entered. The observer may stop generation early, in which case
    /// the maze is only partially carved (see [`Maze::report`]).
    pub fn with_observer<O: VisitObserver + ?Sized>(
        config: &MazeConfig,
        observer: &mut O,
    ) -> Result<Self> {
        config.validate()?;
        let (width, height) = (config.width, config.height);
        tracing::info!("Generating {}x{} maze (seed: {:?})", width, height, config.seed);

        let mut graph = CellGraph::new(width, height);
        let mut canvas = Canvas::new(width, height);
        canvas.open_top(config.entry_column.unwrap_or(0));
        canvas.open_bottom(config.exit_column.unwrap_or(width - 1));

        let mut rng = get_rng(config.seed);
        let start = graph.id(0, 0);
        let report = recursive_backtrack(
            &mut graph,
            &mut canvas,
            start,
            &mut rng,
            config.debug,
            observer,
        );
        if !report.completed {
            tracing::warn!(
                "Generation stopped early: {} of {} cells visited",
                report.visited,
                graph.len()
            );
        }

        Ok(Maze {
            canvas,
            width,
            height,
            report,
        })
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// What happened during generation.
    pub fn report(&self) -> BuildReport {
        self.report
    }

    /// Prints the finished maze to stdout, without visited markers.
    pub fn display(&mut self) -> Result<()> {
        self.display_debug(false)
    }

    /// Prints the maze to stdout. Unless `debug` is set, visited markers are
    /// cleared from the canvas first.
    pub fn display_debug(&mut self, debug: bool) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.write_to(&mut lock, debug)?;
        lock.flush()?;
        Ok(())
    }

    /// Writes the maze to `out`, one line per canvas row followed by a blank line.
    pub fn write_to<W: Write>(&mut self, out: &mut W, debug: bool) -> Result<()> {
        if !debug {
            self.canvas.clear_markers();
        }
        render::write_canvas(out, &self.canvas)?;
        Ok(())
    }
}
