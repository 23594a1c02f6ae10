use std::ops::ControlFlow;

use rand::{SeedableRng, rngs::StdRng};

use crate::maze::Canvas;

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Notified once each time the generator enters a cell, in visitation order.
///
/// Returning `ControlFlow::Break(())` stops generation right there, leaving a
/// partially carved maze behind.
pub trait VisitObserver {
    fn on_visit(&mut self, canvas: &Canvas, cell: (usize, usize)) -> ControlFlow<()>;
}

impl<F> VisitObserver for F
where
    F: FnMut(&Canvas, (usize, usize)) -> ControlFlow<()>,
{
    fn on_visit(&mut self, canvas: &Canvas, cell: (usize, usize)) -> ControlFlow<()> {
        self(canvas, cell)
    }
}

/// Observes nothing and never interrupts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl VisitObserver for NoopObserver {
    fn on_visit(&mut self, _canvas: &Canvas, _cell: (usize, usize)) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Summary of one generation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// Cells entered by the generator.
    pub visited: usize,
    /// Walls opened between two cells.
    pub passages: usize,
    /// False when an observer interrupted the run.
    pub completed: bool,
}
